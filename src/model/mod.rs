//! Salon Records
//!
//! The read-only data the widgets display:
//!
//! - **types**: `AppointmentRecord`, `CustomerRecord`, `ServiceDetails`
//! - **timestamp**: lenient parsing of start times from schedule files
//!
//! Every text field is optional. A record with nothing but a start time is
//! still a valid record; absent fields render as empty cells.

pub mod timestamp;
pub mod types;

pub use timestamp::parse_instant;
pub use types::{AppointmentRecord, CustomerRecord, ServiceDetails};
