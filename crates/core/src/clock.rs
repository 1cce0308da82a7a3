//! Wall-clock access and display formatting
//!
//! Stores read time through [`Clock`] so stamps can be pinned in tests.

use std::rc::Rc;

use chrono::{Local, NaiveDateTime};

/// Source of the current local time
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Local system time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock frozen at one instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Shared clock handle held by stores and the dashboard
pub type SharedClock = Rc<dyn Clock>;

pub fn system_clock() -> SharedClock {
    Rc::new(SystemClock)
}

/// `YYYY-MM-DD HH:MM`, the format of `lastCleaned` stamps
pub fn format_stamp(at: NaiveDateTime) -> String {
    at.format("%Y-%m-%d %H:%M").to_string()
}

/// Header clock, e.g. `14:05:09`
pub fn format_time(at: NaiveDateTime) -> String {
    at.format("%H:%M:%S").to_string()
}

/// Header date, e.g. `Thursday, January 16, 2025`
pub fn format_date(at: NaiveDateTime) -> String {
    at.format("%A, %B %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 16)
            .unwrap()
            .and_hms_opt(9, 5, 7)
            .unwrap()
    }

    #[test]
    fn test_format_stamp() {
        assert_eq!(format_stamp(at()), "2025-01-16 09:05");
    }

    #[test]
    fn test_format_time_and_date() {
        assert_eq!(format_time(at()), "09:05:07");
        assert_eq!(format_date(at()), "Thursday, January 16, 2025");
    }

    #[test]
    fn test_fixed_clock() {
        let clock = FixedClock(at());
        assert_eq!(clock.now(), at());
    }
}
