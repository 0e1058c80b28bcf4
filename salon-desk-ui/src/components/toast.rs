//! Notice Toast
//!
//! Bottom-right banner for the current desk notice.

use leptos::*;

use crate::state::{use_desk_state, NoticeKind};

#[component]
pub fn Toast() -> impl IntoView {
    let state = use_desk_state();

    view! {
        <div class="fixed bottom-4 right-4 z-50" role="status">
            {move || {
                state.notice.get().map(|notice| {
                    let (icon, bg_class) = match notice.kind {
                        NoticeKind::Saved => ("✓", "bg-green-600"),
                        NoticeKind::Rejected => ("✕", "bg-red-600"),
                    };
                    view! {
                        <div class=format!(
                            "flex items-center space-x-3 {} text-white px-4 py-3 rounded-lg shadow-lg",
                            bg_class
                        )>
                            <span class="text-lg">{icon}</span>
                            <span class="text-sm font-medium">{notice.text}</span>
                        </div>
                    }
                })
            }}
        </div>
    }
}
