//! Customer Form Component
//!
//! Intake form for a new or existing customer. Field values live in an
//! `IntakeForm` held in a signal; every keystroke goes through its
//! `update_field` transition.

use leptos::*;
use salon_desk::{CustomerRecord, FieldValues, IntakeForm};

use crate::state::{use_desk_state, Notice};

#[component]
pub fn CustomerForm(#[prop(optional)] customer: CustomerRecord) -> impl IntoView {
    let state = use_desk_state();

    let form = create_rw_signal(IntakeForm::from_customer(&customer, move |values: FieldValues| {
        state.notify(Notice::saved(&values));
        if let Ok(json) = serde_json::to_string(&values) {
            web_sys::console::log_1(&json.into());
        }
    }));

    let fields = form.with_untracked(|f| f.schema().fields().to_vec());
    let form_id = form.with_untracked(|f| f.schema().id());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        form.update(|f| f.submit());
    };

    view! {
        <form id=form_id on:submit=on_submit class="max-w-md space-y-4">
            {fields
                .into_iter()
                .map(|field| {
                    let name = field.name;
                    let on_input = move |ev: web_sys::Event| {
                        let value = event_target_value(&ev);
                        if let Some(Err(e)) = form.try_update(|f| f.update_field(name, value)) {
                            state.notify(Notice::rejected(&e));
                        }
                    };
                    view! {
                        <div class="space-y-1">
                            <label for=name class="block text-sm text-gray-400">{field.label}</label>
                            <input
                                type="text"
                                name=name
                                id=name
                                prop:value=move || form.with(|f| f.value(name).unwrap_or_default().to_string())
                                on:input=on_input
                                class="w-full bg-gray-800 border border-gray-700 rounded-lg px-3 py-2"
                            />
                        </div>
                    }
                })
                .collect_view()}

            <input
                type="submit"
                value="Add"
                class="w-full bg-primary-600 hover:bg-primary-700 rounded-lg py-3 font-semibold"
            />
        </form>
    }
}
