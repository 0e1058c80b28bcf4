//! Day View Component
//!
//! Today's appointment times with the selected appointment's detail
//! alongside. Selection lives in a `ScheduleSelector` held in a signal.

use leptos::*;
use salon_desk::widgets::EMPTY_SCHEDULE_MESSAGE;
use salon_desk::{AppointmentDetail, AppointmentRecord, ScheduleSelector};

use crate::state::{use_desk_state, Notice};

#[component]
pub fn DayView(appointments: Vec<AppointmentRecord>) -> impl IntoView {
    let state = use_desk_state();
    let selector = create_rw_signal(ScheduleSelector::new(appointments));

    let select = move |index: usize| {
        if let Some(Err(e)) = selector.try_update(|s| s.select(index)) {
            state.notify(Notice::rejected(&e));
        }
    };

    view! {
        <div id="appointmentsDayView" class="grid md:grid-cols-3 gap-6">
            <ol class="space-y-2">
                {move || {
                    selector
                        .with(|s| s.entry_times())
                        .into_iter()
                        .enumerate()
                        .map(|(index, time)| {
                            let current = move || selector.with(|s| s.selected_index() == Some(index));
                            view! {
                                <li aria-current=move || current().then(|| "true".to_string())>
                                    <button
                                        type="button"
                                        on:click=move |_| select(index)
                                        class=move || {
                                            let base = "w-full text-left px-4 py-2 rounded-lg font-mono transition-colors";
                                            if current() {
                                                format!("{} bg-primary-600 text-white", base)
                                            } else {
                                                format!("{} bg-gray-800 text-gray-300 hover:bg-gray-700", base)
                                            }
                                        }
                                    >
                                        {time}
                                    </button>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ol>

            {move || match selector.with(|s| s.selected_detail()) {
                Some(detail) => view! { <DetailPanel detail=detail /> }.into_view(),
                None => view! { <p class="text-gray-400">{EMPTY_SCHEDULE_MESSAGE}</p> }.into_view(),
            }}
        </div>
    }
}

#[component]
fn DetailPanel(detail: AppointmentDetail) -> impl IntoView {
    view! {
        <div id="appointmentView" class="md:col-span-2 bg-gray-800 rounded-lg p-6">
            <h3 class="text-xl font-semibold mb-4">{detail.header}</h3>
            <table id="customer-info" class="w-full text-left">
                <tbody>
                    {detail
                        .rows
                        .into_iter()
                        .map(|row| view! {
                            <tr>
                                <th class="pr-6 py-1 text-gray-400 font-normal">{row.label}</th>
                                <td class="py-1">{row.value}</td>
                            </tr>
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
}
