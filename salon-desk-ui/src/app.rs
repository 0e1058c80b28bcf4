//! App Root Component

use leptos::*;

use crate::components::{CustomerForm, DayView, Toast};
use crate::demo;
use crate::state::provide_desk_state;

#[derive(Clone, Copy, PartialEq)]
enum Tab {
    Today,
    NewCustomer,
}

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_desk_state();

    let (tab, set_tab) = create_signal(Tab::Today);

    view! {
        <div class="min-h-screen bg-gray-900 text-white flex flex-col">
            <header class="bg-gray-800 border-b border-gray-700 px-4 py-3 flex space-x-2">
                <TabButton label="Today" current=tab target=Tab::Today on_click=move |_| set_tab.set(Tab::Today) />
                <TabButton label="New customer" current=tab target=Tab::NewCustomer on_click=move |_| set_tab.set(Tab::NewCustomer) />
            </header>

            <main class="flex-1 container mx-auto px-4 py-8">
                {move || match tab.get() {
                    Tab::Today => view! { <DayView appointments=demo::todays_appointments() /> }.into_view(),
                    Tab::NewCustomer => view! { <CustomerForm /> }.into_view(),
                }}
            </main>

            <Toast />
        </div>
    }
}

#[component]
fn TabButton(
    label: &'static str,
    current: ReadSignal<Tab>,
    target: Tab,
    on_click: impl Fn(web_sys::MouseEvent) + 'static,
) -> impl IntoView {
    view! {
        <button
            type="button"
            on:click=on_click
            class=move || {
                let base = "px-4 py-2 rounded-lg text-sm font-medium transition-colors";
                if current.get() == target {
                    format!("{} bg-gray-600 text-white", base)
                } else {
                    format!("{} bg-gray-700 text-gray-400 hover:text-white", base)
                }
            }
        >
            {label}
        </button>
    }
}
