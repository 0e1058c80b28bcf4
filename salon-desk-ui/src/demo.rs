//! Sample day used until a booking back-end is wired in

use chrono::{Local, TimeZone, Utc};
use salon_desk::{AppointmentRecord, CustomerRecord, ServiceDetails};

fn today_at(hour: u32, minute: u32) -> Option<chrono::DateTime<Utc>> {
    let today = Local::now().date_naive();
    let naive = today.and_hms_opt(hour, minute, 0)?;
    Local.from_local_datetime(&naive).earliest().map(|dt| dt.with_timezone(&Utc))
}

/// A handful of appointments starting today
pub fn todays_appointments() -> Vec<AppointmentRecord> {
    let slots = [
        (9, 0, "Ashley", "Jones", "0123456789", "Sam", "Cut", ""),
        (10, 30, "Jordan", "Datfrit", "0987654321", "Jo", "Beard trim", "Prefers scissors"),
        (12, 0, "Jamie", "Lee", "0111222333", "Sam", "Blow-dry", ""),
        (14, 15, "Alex", "Moreno", "0444555666", "Pat", "Colour", "Patch test done"),
    ];

    slots
        .into_iter()
        .filter_map(|(h, m, first, last, phone, stylist, service, notes)| {
            let mut details = ServiceDetails::new().stylist(stylist).service(service);
            if !notes.is_empty() {
                details = details.notes(notes);
            }
            Some(
                AppointmentRecord::new(today_at(h, m)?)
                    .customer(CustomerRecord::new().first_name(first).last_name(last).phone_number(phone))
                    .details(details),
            )
        })
        .collect()
}
