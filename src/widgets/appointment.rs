//! Appointment Detail View
//!
//! Read-only detail of one appointment: a header with the start time and a
//! fixed five-row table. Stateless; the same record always yields the same
//! view.

use serde::Serialize;

use super::time::TimeFormatter;
use crate::model::AppointmentRecord;
use crate::view::{Element, Node};

/// Row labels, in display order
pub const DETAIL_LABELS: [&str; 5] = ["Customer", "Phone Number", "Stylist", "Service", "Notes"];

/// One labeled row of the detail table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailRow {
    pub label: &'static str,
    pub value: String,
}

/// View-model of an appointment, independent of any markup
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppointmentDetail {
    pub header: String,
    pub rows: Vec<DetailRow>,
}

impl AppointmentDetail {
    /// Value of the row with the given label
    pub fn value(&self, label: &str) -> Option<&str> {
        self.rows
            .iter()
            .find(|row| row.label == label)
            .map(|row| row.value.as_str())
    }
}

/// Header line for an appointment starting at `time`
pub fn header_text(time: &str) -> String {
    format!("Today's appointment at {}", time)
}

/// Renders appointment records into detail views
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AppointmentDetailView {
    formatter: TimeFormatter,
}

impl AppointmentDetailView {
    pub fn new(formatter: TimeFormatter) -> Self {
        Self { formatter }
    }

    pub fn formatter(&self) -> &TimeFormatter {
        &self.formatter
    }

    /// Build the view-model for a record. Absent fields become empty cells.
    pub fn detail(&self, record: &AppointmentRecord) -> AppointmentDetail {
        let customer = &record.customer;
        let details = &record.details;
        let cell = |value: &Option<String>| value.clone().unwrap_or_default();

        let values = [
            customer.full_name(),
            cell(&customer.phone_number),
            cell(&details.stylist),
            cell(&details.service),
            cell(&details.notes),
        ];

        AppointmentDetail {
            header: header_text(&self.formatter.format(&record.starts_at)),
            rows: DETAIL_LABELS
                .into_iter()
                .zip(values)
                .map(|(label, value)| DetailRow { label, value })
                .collect(),
        }
    }

    /// Render a record as `div#appointmentView > h3 + table#customer-info`
    pub fn render<M>(&self, record: &AppointmentRecord) -> Node<M> {
        let detail = self.detail(record);

        let rows = detail.rows.into_iter().map(|row| {
            Node::Element(
                Element::new("tr")
                    .child(Element::new("th").text(row.label))
                    .child(Element::new("td").text(row.value)),
            )
        });

        Node::Element(
            Element::new("div")
                .id("appointmentView")
                .child(Element::new("h3").text(detail.header))
                .child(
                    Element::new("table")
                        .id("customer-info")
                        .child(Element::new("tbody").extend(rows)),
                ),
        )
    }
}
