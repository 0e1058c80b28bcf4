//! Widget error types
//!
//! Both variants are contract violations by whoever issued the message: the
//! widgets' own views only ever bind in-range indices and declared fields.
//! A rejected message leaves the widget state untouched.

use thiserror::Error;

/// Errors returned when a widget rejects a transition
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WidgetError {
    /// Selection index past the end of the appointment list
    #[error("Selection {index} out of range for {len} appointments")]
    SelectionOutOfRange { index: usize, len: usize },

    /// Field name not declared by the form schema
    #[error("Unknown form field: {0}")]
    UnknownField(String),
}

/// Result type alias for widget transitions
pub type WidgetResult<T> = Result<T, WidgetError>;
