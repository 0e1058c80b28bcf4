//! Time-of-day formatting
//!
//! Appointment times are shown as zero-padded `HH:MM` wall-clock times in the
//! salon's zone: the host's local zone unless a fixed offset is configured.

use chrono::{DateTime, FixedOffset, Local, NaiveDate, TimeZone, Timelike, Utc};

/// Zone used to turn instants into wall-clock times
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DisplayZone {
    #[default]
    Local,
    Fixed(FixedOffset),
}

/// Formats instants as `HH:MM`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeFormatter {
    zone: DisplayZone,
}

impl TimeFormatter {
    /// Formatter using the host's local zone
    pub fn local() -> Self {
        Self {
            zone: DisplayZone::Local,
        }
    }

    /// Formatter using a fixed UTC offset
    pub fn fixed(offset: FixedOffset) -> Self {
        Self {
            zone: DisplayZone::Fixed(offset),
        }
    }

    /// Formatter for an optional offset in minutes east of UTC.
    ///
    /// Offsets outside +/-24h fall back to local time.
    pub fn from_offset_minutes(minutes: Option<i32>) -> Self {
        match minutes {
            None => Self::local(),
            Some(m) => match m.checked_mul(60).and_then(FixedOffset::east_opt) {
                Some(offset) => Self::fixed(offset),
                None => {
                    tracing::warn!("Ignoring invalid UTC offset of {} minutes, using local time", m);
                    Self::local()
                }
            },
        }
    }

    pub fn zone(&self) -> DisplayZone {
        self.zone
    }

    /// Wall-clock `HH:MM` of `instant` in this formatter's zone
    pub fn format<Tz: TimeZone>(&self, instant: &DateTime<Tz>) -> String {
        match self.zone {
            DisplayZone::Local => hh_mm(&instant.with_timezone(&Local)),
            DisplayZone::Fixed(offset) => hh_mm(&instant.with_timezone(&offset)),
        }
    }

    /// Calendar date of `instant` in this formatter's zone
    pub fn date_of<Tz: TimeZone>(&self, instant: &DateTime<Tz>) -> NaiveDate {
        match self.zone {
            DisplayZone::Local => instant.with_timezone(&Local).date_naive(),
            DisplayZone::Fixed(offset) => instant.with_timezone(&offset).date_naive(),
        }
    }

    /// Today's date in this formatter's zone
    pub fn today(&self) -> NaiveDate {
        self.date_of(&Utc::now())
    }
}

fn hh_mm<T: Timelike>(time: &T) -> String {
    format!("{:02}:{:02}", time.hour(), time.minute())
}

/// Local wall-clock `HH:MM` of `instant`
pub fn format_time_of_day<Tz: TimeZone>(instant: &DateTime<Tz>) -> String {
    TimeFormatter::local().format(instant)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_local_afternoon() {
        let instant = Local.with_ymd_and_hms(2026, 10, 16, 13, 0, 0).unwrap();
        assert_eq!(format_time_of_day(&instant), "13:00");
    }

    #[test]
    fn test_local_zero_padding() {
        let instant = Local.with_ymd_and_hms(2026, 10, 16, 9, 5, 0).unwrap();
        assert_eq!(format_time_of_day(&instant), "09:05");
        assert_eq!(format_time_of_day(&instant.with_timezone(&Utc)), "09:05");
    }

    #[test]
    fn test_fixed_offset() {
        let formatter = TimeFormatter::fixed(FixedOffset::east_opt(2 * 3600).unwrap());
        let instant = Utc.with_ymd_and_hms(2026, 1, 1, 7, 5, 0).unwrap();
        assert_eq!(formatter.format(&instant), "09:05");
    }

    #[test]
    fn test_fixed_offset_crosses_midnight() {
        let formatter = TimeFormatter::from_offset_minutes(Some(-90));
        let instant = Utc.with_ymd_and_hms(2026, 1, 1, 0, 45, 0).unwrap();
        assert_eq!(formatter.format(&instant), "23:15");
        assert_eq!(formatter.date_of(&instant), NaiveDate::from_ymd_opt(2025, 12, 31).unwrap());
    }

    #[test]
    fn test_invalid_offset_falls_back_to_local() {
        let formatter = TimeFormatter::from_offset_minutes(Some(60 * 48));
        assert_eq!(formatter.zone(), DisplayZone::Local);
    }

    #[test]
    fn test_output_is_always_hh_mm() {
        let formatter = TimeFormatter::fixed(FixedOffset::east_opt(0).unwrap());
        for (h, m) in [(0, 0), (7, 9), (12, 30), (23, 59)] {
            let out = formatter.format(&Utc.with_ymd_and_hms(2026, 3, 1, h, m, 0).unwrap());
            assert_eq!(out.len(), 5);
            assert_eq!(&out[2..3], ":");
            assert_eq!(out, format!("{:02}:{:02}", h, m));
        }
    }
}
