//! Front-desk Widgets
//!
//! - **time**: `HH:MM` formatting of start times
//! - **appointment**: read-only detail of one appointment
//! - **schedule**: the day's appointment list with a single selection
//! - **intake**: the customer intake form
//! - **error**: transition errors
//!
//! # Architecture
//!
//! ```text
//! TimeFormatter ─▶ AppointmentDetailView ─▶ ScheduleSelector
//!                                          IntakeForm (independent)
//! ```
//!
//! Stateful widgets implement [`Widget`]: state changes only through
//! `update(msg)`, and `view()` is a pure function of the current state.

pub mod appointment;
pub mod error;
pub mod intake;
pub mod schedule;
pub mod time;

pub use appointment::{AppointmentDetail, AppointmentDetailView, DetailRow, DETAIL_LABELS};
pub use error::{WidgetError, WidgetResult};
pub use intake::{FieldSpec, FieldValues, FormMsg, FormSchema, IntakeForm, SubmitHandler};
pub use schedule::{ScheduleMsg, ScheduleSelector, ScheduleSnapshot, EMPTY_SCHEDULE_MESSAGE};
pub use time::{format_time_of_day, DisplayZone, TimeFormatter};

use crate::view::Node;

/// A stateful UI element driven by messages
pub trait Widget {
    /// Input events the widget reacts to
    type Message;

    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Apply one message. A rejected message leaves the state unchanged.
    fn update(&mut self, msg: Self::Message) -> WidgetResult<()>;

    /// Describe the UI for the current state
    fn view(&self) -> Node<Self::Message>;
}
