//! Schedule Selector
//!
//! The day view: a list of appointment start times and the detail of the one
//! currently selected.
//!
//! State is a single index into the list. It starts at 0 and only moves when
//! an entry is selected. The index is positional: it refers to "the i-th
//! appointment in the current list", never to a particular appointment, so
//! replacing the list keeps pointing at the same position.
//!
//! ```text
//! div#appointmentsDayView
//! ├── ol
//! │   └── li*   button[type=button] "HH:MM" (click -> SelectIndex(i))
//! └── p "There are no appointments..."   | div#appointmentView (detail)
//! ```

use serde::Serialize;

use super::appointment::{AppointmentDetail, AppointmentDetailView};
use super::error::{WidgetError, WidgetResult};
use super::time::TimeFormatter;
use super::Widget;
use crate::model::AppointmentRecord;
use crate::view::{Element, Node};

/// Shown instead of the detail when the day has no appointments
pub const EMPTY_SCHEDULE_MESSAGE: &str = "There are no appointments scheduled for today.";

/// Messages understood by the schedule selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleMsg {
    /// The user picked the entry at this position
    SelectIndex(usize),
}

/// Serializable picture of the selector, for hosts that draw their own UI
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleSnapshot {
    pub times: Vec<String>,
    pub selected_index: Option<usize>,
    pub detail: Option<AppointmentDetail>,
}

/// Single-selection list-to-detail widget over a day's appointments
#[derive(Debug, Clone)]
pub struct ScheduleSelector {
    appointments: Vec<AppointmentRecord>,
    selected_index: usize,
    detail_view: AppointmentDetailView,
}

impl ScheduleSelector {
    /// Create a selector showing times in the host's local zone
    pub fn new(appointments: Vec<AppointmentRecord>) -> Self {
        Self::with_formatter(appointments, TimeFormatter::local())
    }

    /// Create a selector with an explicit time formatter
    pub fn with_formatter(appointments: Vec<AppointmentRecord>, formatter: TimeFormatter) -> Self {
        tracing::debug!(count = appointments.len(), "Schedule selector initialised");
        Self {
            appointments,
            selected_index: 0,
            detail_view: AppointmentDetailView::new(formatter),
        }
    }

    pub fn appointments(&self) -> &[AppointmentRecord] {
        &self.appointments
    }

    pub fn len(&self) -> usize {
        self.appointments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.appointments.is_empty()
    }

    /// Current selection, or `None` for an empty day
    pub fn selected_index(&self) -> Option<usize> {
        (!self.is_empty()).then_some(self.selected_index)
    }

    /// The appointment whose detail is shown
    pub fn selected(&self) -> Option<&AppointmentRecord> {
        self.appointments.get(self.selected_index)
    }

    /// Select the appointment at `index`.
    ///
    /// Out-of-range indices are rejected and the selection is left as it was.
    pub fn select(&mut self, index: usize) -> WidgetResult<()> {
        if index >= self.appointments.len() {
            return Err(WidgetError::SelectionOutOfRange {
                index,
                len: self.appointments.len(),
            });
        }

        tracing::debug!(from = self.selected_index, to = index, "Appointment selected");
        self.selected_index = index;
        Ok(())
    }

    /// Reinitialise with a new day: selection goes back to the first entry
    pub fn reset(&mut self, appointments: Vec<AppointmentRecord>) {
        tracing::debug!(count = appointments.len(), "Schedule selector reset");
        self.appointments = appointments;
        self.selected_index = 0;
    }

    /// Swap in updated appointments while keeping the selected position.
    ///
    /// A list shorter than the selection clamps it to the last entry.
    pub fn set_appointments(&mut self, appointments: Vec<AppointmentRecord>) {
        if let Some(last) = appointments.len().checked_sub(1) {
            if self.selected_index > last {
                tracing::debug!(from = self.selected_index, to = last, "Selection clamped to shorter list");
                self.selected_index = last;
            }
        }
        self.appointments = appointments;
    }

    /// Formatted start time of every entry, in list order
    pub fn entry_times(&self) -> Vec<String> {
        let formatter = self.detail_view.formatter();
        self.appointments
            .iter()
            .map(|appt| formatter.format(&appt.starts_at))
            .collect()
    }

    /// Detail view-model of the selected appointment
    pub fn selected_detail(&self) -> Option<AppointmentDetail> {
        self.selected().map(|appt| self.detail_view.detail(appt))
    }

    pub fn snapshot(&self) -> ScheduleSnapshot {
        ScheduleSnapshot {
            times: self.entry_times(),
            selected_index: self.selected_index(),
            detail: self.selected_detail(),
        }
    }
}

impl Widget for ScheduleSelector {
    type Message = ScheduleMsg;

    fn name(&self) -> &'static str {
        "schedule"
    }

    fn update(&mut self, msg: ScheduleMsg) -> WidgetResult<()> {
        match msg {
            ScheduleMsg::SelectIndex(index) => self.select(index),
        }
    }

    fn view(&self) -> Node<ScheduleMsg> {
        let entries = self.entry_times().into_iter().enumerate().map(|(idx, time)| {
            let mut item = Element::new("li");
            if idx == self.selected_index {
                item = item.attr("aria-current", "true");
            }
            Node::Element(
                item.child(
                    Element::new("button")
                        .attr("type", "button")
                        .on_click(ScheduleMsg::SelectIndex(idx))
                        .text(time),
                ),
            )
        });

        let detail = match self.selected() {
            Some(appt) => self.detail_view.render(appt),
            None => Node::Element(Element::new("p").text(EMPTY_SCHEDULE_MESSAGE)),
        };

        Node::Element(
            Element::new("div")
                .id("appointmentsDayView")
                .child(Element::new("ol").extend(entries))
                .node(detail),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CustomerRecord;
    use chrono::{Local, TimeZone, Utc};

    fn at(hour: u32, first_name: &str) -> AppointmentRecord {
        AppointmentRecord::new(
            Local
                .with_ymd_and_hms(2026, 10, 16, hour, 0, 0)
                .unwrap()
                .with_timezone(&Utc),
        )
        .customer(CustomerRecord::new().first_name(first_name))
    }

    fn two_appointments() -> Vec<AppointmentRecord> {
        vec![at(12, "Ashley"), at(13, "Jordan")]
    }

    #[test]
    fn test_renders_root_div_for_empty_day() {
        let selector = ScheduleSelector::new(Vec::new());
        assert!(selector.view().find_by_id("appointmentsDayView").is_some());
    }

    #[test]
    fn test_renders_each_appointment_in_an_li() {
        let view = ScheduleSelector::new(two_appointments()).view();
        let ol = view.find_first("ol").unwrap();
        assert_eq!(ol.child_elements().count(), 2);

        let items = view.find_all("li");
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].text_content(), "12:00");
        assert_eq!(items[1].text_content(), "13:00");
    }

    #[test]
    fn test_empty_day_shows_message_and_no_detail() {
        let selector = ScheduleSelector::new(Vec::new());
        let view = selector.view();
        assert!(view.text_content().contains(EMPTY_SCHEDULE_MESSAGE));
        assert!(view.find_all("li").is_empty());
        assert!(view.find_all("button").is_empty());
        assert!(view.find_by_id("appointmentView").is_none());
        assert_eq!(selector.selected_index(), None);
    }

    #[test]
    fn test_selects_first_appointment_by_default() {
        let selector = ScheduleSelector::new(two_appointments());
        assert_eq!(selector.selected_index(), Some(0));

        let detail = selector.view();
        let detail = detail.find_by_id("appointmentView").unwrap();
        assert!(detail.text_content().contains("Ashley"));
        assert!(!detail.text_content().contains("Jordan"));
    }

    #[test]
    fn test_has_a_button_in_each_li() {
        let view = ScheduleSelector::new(two_appointments()).view();
        let buttons: Vec<_> = view
            .find_all("li")
            .into_iter()
            .filter_map(|li| li.find_first("button"))
            .collect();
        assert_eq!(buttons.len(), 2);
        assert_eq!(buttons[0].attribute("type"), Some("button"));
    }

    #[test]
    fn test_renders_another_appointment_when_selected() {
        let mut selector = ScheduleSelector::new(two_appointments());
        let msg = selector.view().find_all("button")[1].click().unwrap();
        assert_eq!(msg, ScheduleMsg::SelectIndex(1));

        selector.update(msg).unwrap();
        let view = selector.view();
        let detail = view.find_by_id("appointmentView").unwrap();
        assert!(detail.text_content().contains("Jordan"));
        assert!(!detail.text_content().contains("Ashley"));
    }

    #[test]
    fn test_every_index_shows_its_own_appointment() {
        let names = ["Ashley", "Jordan", "Sam", "Jo"];
        let day: Vec<_> = names.iter().enumerate().map(|(i, n)| at(9 + i as u32, n)).collect();
        let mut selector = ScheduleSelector::new(day);

        for (i, name) in names.iter().enumerate().rev() {
            selector.select(i).unwrap();
            assert_eq!(selector.selected_detail().unwrap().value("Customer"), Some(*name));
        }
    }

    #[test]
    fn test_out_of_range_selection_is_rejected() {
        let mut selector = ScheduleSelector::new(two_appointments());
        selector.select(1).unwrap();

        let err = selector.select(2).unwrap_err();
        assert_eq!(err, WidgetError::SelectionOutOfRange { index: 2, len: 2 });
        assert_eq!(selector.selected_index(), Some(1));

        let mut empty = ScheduleSelector::new(Vec::new());
        assert!(empty.select(0).is_err());
    }

    #[test]
    fn test_selected_entry_is_marked() {
        let mut selector = ScheduleSelector::new(two_appointments());
        selector.select(1).unwrap();
        let view = selector.view();
        let items = view.find_all("li");
        assert_eq!(items[0].attribute("aria-current"), None);
        assert_eq!(items[1].attribute("aria-current"), Some("true"));
    }

    #[test]
    fn test_set_appointments_keeps_position() {
        let mut selector = ScheduleSelector::new(two_appointments());
        selector.select(1).unwrap();

        selector.set_appointments(vec![at(10, "Sam"), at(11, "Jo"), at(12, "Ashley")]);
        assert_eq!(selector.selected_index(), Some(1));
        assert_eq!(selector.selected_detail().unwrap().value("Customer"), Some("Jo"));
    }

    #[test]
    fn test_set_appointments_clamps_shorter_list() {
        let mut selector = ScheduleSelector::new(two_appointments());
        selector.select(1).unwrap();

        selector.set_appointments(vec![at(15, "Sam")]);
        assert_eq!(selector.selected_index(), Some(0));
        assert_eq!(selector.selected_detail().unwrap().value("Customer"), Some("Sam"));

        selector.set_appointments(Vec::new());
        assert_eq!(selector.selected_index(), None);
        assert!(selector.view().text_content().contains(EMPTY_SCHEDULE_MESSAGE));
    }

    #[test]
    fn test_reset_returns_to_first_entry() {
        let mut selector = ScheduleSelector::new(two_appointments());
        selector.select(1).unwrap();
        selector.reset(vec![at(9, "Sam"), at(10, "Jo")]);
        assert_eq!(selector.selected_index(), Some(0));
        assert_eq!(selector.selected_detail().unwrap().value("Customer"), Some("Sam"));
    }

    #[test]
    fn test_snapshot_serializes() {
        let selector = ScheduleSelector::new(two_appointments());
        let snapshot = selector.snapshot();
        assert_eq!(snapshot.times, vec!["12:00", "13:00"]);
        assert_eq!(snapshot.selected_index, Some(0));

        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains("\"selected_index\":0"));
        assert!(json.contains("Today's appointment at 12:00"));
    }
}
