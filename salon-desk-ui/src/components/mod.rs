//! UI Components

pub mod customer_form;
pub mod day_view;
pub mod toast;

pub use customer_form::CustomerForm;
pub use day_view::DayView;
pub use toast::Toast;
