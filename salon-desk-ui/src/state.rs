//! Desk State
//!
//! The front desk's one-line notice (customer saved, selection or edit
//! rejected), shared through context.

use leptos::*;
use salon_desk::{FieldValues, WidgetError};

/// How long a notice stays up, in milliseconds
const NOTICE_MS: u32 = 4000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Saved,
    Rejected,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    /// Confirmation for a submitted intake form
    pub fn saved(values: &FieldValues) -> Self {
        let name = values.to_customer().full_name();
        let text = if name.is_empty() {
            "Customer saved".to_string()
        } else {
            format!("Saved {}", name)
        };
        Self {
            kind: NoticeKind::Saved,
            text,
        }
    }

    /// A widget refused a transition
    pub fn rejected(error: &WidgetError) -> Self {
        Self {
            kind: NoticeKind::Rejected,
            text: error.to_string(),
        }
    }
}

#[derive(Clone, Copy)]
pub struct DeskState {
    /// Notice currently shown, if any
    pub notice: RwSignal<Option<Notice>>,
}

pub fn provide_desk_state() {
    provide_context(DeskState {
        notice: create_rw_signal(None),
    });
}

pub fn use_desk_state() -> DeskState {
    use_context::<DeskState>().expect("DeskState not provided")
}

impl DeskState {
    /// Show a notice; it clears itself unless replaced in the meantime
    pub fn notify(&self, notice: Notice) {
        self.notice.set(Some(notice.clone()));

        let signal = self.notice;
        gloo_timers::callback::Timeout::new(NOTICE_MS, move || {
            if signal.with_untracked(|current| current.as_ref() == Some(&notice)) {
                signal.set(None);
            }
        })
        .forget();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_saved_notice_names_the_customer() {
        let values: FieldValues = [("firstName", "Jordan"), ("lastName", "Datfrit")].into_iter().collect();
        assert_eq!(Notice::saved(&values).text, "Saved Jordan Datfrit");

        let blank: FieldValues = [("firstName", ""), ("lastName", "")].into_iter().collect();
        assert_eq!(Notice::saved(&blank).text, "Customer saved");
    }

    #[test]
    fn test_rejected_notice_carries_the_error() {
        let notice = Notice::rejected(&WidgetError::SelectionOutOfRange { index: 4, len: 2 });
        assert_eq!(notice.kind, NoticeKind::Rejected);
        assert_eq!(notice.text, "Selection 4 out of range for 2 appointments");
    }
}
