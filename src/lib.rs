//! # Salon Desk
//!
//! Front-desk widgets for a salon: today's appointment schedule and a
//! customer intake form, modelled as message-driven state plus a pure view
//! tree so any host (terminal, browser, tests) can drive them.
//!
//! ## Modules
//!
//! - [`model`]: appointment and customer records
//! - [`widgets`]: `ScheduleSelector`, `AppointmentDetailView`, `IntakeForm`, `TimeFormatter`
//! - [`view`]: the view tree, queries, simulated events and renderers
//! - [`host`]: event queue that applies messages in order and re-renders
//! - [`source`]: schedule loading from JSON and CSV files (`cli` feature)
//! - [`config`]: TOML configuration with environment overrides (`cli` feature)
//!
//! The `cli` feature (on by default) carries the terminal host's stack. The
//! widgets, view tree and host build without it, e.g. for WASM front-ends.
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::Utc;
//! use salon_desk::{AppointmentRecord, CustomerRecord, Host, ScheduleSelector};
//!
//! let day = vec![
//!     AppointmentRecord::new(Utc::now()).customer(CustomerRecord::new().first_name("Ashley")),
//!     AppointmentRecord::new(Utc::now()).customer(CustomerRecord::new().first_name("Jordan")),
//! ];
//! let mut host = Host::new(ScheduleSelector::new(day));
//!
//! // Click the second entry's button
//! let msg = host.view().find_all("button")[1].click().unwrap();
//! host.dispatch(msg);
//!
//! let detail = host.view().find_by_id("appointmentView").unwrap();
//! assert!(detail.text_content().contains("Jordan"));
//! ```

#[cfg(feature = "cli")]
pub mod config;
pub mod host;
pub mod model;
#[cfg(feature = "cli")]
pub mod source;
pub mod view;
pub mod widgets;

// Re-export top-level types for convenience
pub use model::{parse_instant, AppointmentRecord, CustomerRecord, ServiceDetails};

pub use widgets::{
    AppointmentDetail, AppointmentDetailView, FieldValues, FormMsg, FormSchema, IntakeForm,
    ScheduleMsg, ScheduleSelector, ScheduleSnapshot, SubmitHandler, TimeFormatter, Widget,
    WidgetError, WidgetResult,
};

pub use view::{render_html, render_text, Element, Handler, Node};

pub use host::{Host, HostReport};

#[cfg(feature = "cli")]
pub use source::{appointments_on, load_schedule, CsvScheduleImporter, ImportReport, SourceError};

#[cfg(feature = "cli")]
pub use config::{Config, ConfigError, DisplayConfig, LoggingConfig, ScheduleConfig};
