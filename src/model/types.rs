//! Record types for the salon day schedule
//!
//! - `AppointmentRecord`: one scheduled slot (time, customer, service details)
//! - `CustomerRecord`: who the appointment is for
//! - `ServiceDetails`: what is being done and by whom
//!
//! Field names serialize in camelCase so schedule files exported by the
//! booking front-end load unchanged.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A customer as known to the front desk
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

impl CustomerRecord {
    /// Create an empty customer record
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set the first name
    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self
    }

    /// Builder method: set the last name
    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }

    /// Builder method: set the phone number
    pub fn phone_number(mut self, phone_number: impl Into<String>) -> Self {
        self.phone_number = Some(phone_number.into());
        self
    }

    /// First and last name separated by a single space.
    ///
    /// Absent or empty parts are skipped, so a lone first name carries no
    /// trailing space.
    pub fn full_name(&self) -> String {
        [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// What the appointment is for
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stylist: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl ServiceDetails {
    /// Create empty service details
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set the stylist
    pub fn stylist(mut self, stylist: impl Into<String>) -> Self {
        self.stylist = Some(stylist.into());
        self
    }

    /// Builder method: set the service
    pub fn service(mut self, service: impl Into<String>) -> Self {
        self.service = Some(service.into());
        self
    }

    /// Builder method: set the notes
    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

/// One scheduled slot in the day
///
/// Owned by whatever supplies the day's schedule; widgets only read it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentRecord {
    /// When the appointment starts
    #[serde(deserialize_with = "instant::deserialize")]
    pub starts_at: DateTime<Utc>,
    #[serde(default)]
    pub customer: CustomerRecord,
    #[serde(default)]
    pub details: ServiceDetails,
}

impl AppointmentRecord {
    /// Create an appointment with no customer or service details
    pub fn new(starts_at: DateTime<Utc>) -> Self {
        Self {
            starts_at,
            customer: CustomerRecord::default(),
            details: ServiceDetails::default(),
        }
    }

    /// Builder method: set the customer
    pub fn customer(mut self, customer: CustomerRecord) -> Self {
        self.customer = customer;
        self
    }

    /// Builder method: set the service details
    pub fn details(mut self, details: ServiceDetails) -> Self {
        self.details = details;
        self
    }
}

/// Accepts either Unix milliseconds or any string `parse_instant` understands.
mod instant {
    use chrono::{DateTime, Utc};
    use serde::{de, Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawInstant {
        Millis(i64),
        Text(String),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match RawInstant::deserialize(deserializer)? {
            RawInstant::Millis(millis) => DateTime::from_timestamp_millis(millis)
                .ok_or_else(|| de::Error::custom(format!("timestamp out of range: {}", millis))),
            RawInstant::Text(text) => crate::model::parse_instant(&text)
                .ok_or_else(|| de::Error::custom(format!("unrecognised start time: {}", text))),
        }
    }
}
