//! Time source used by every date-stamping command.
//!
//! Tools never read the system clock directly; they take a `Clock` so that
//! "today" and "this month" are deterministic under test.

use chrono::{DateTime, Datelike, NaiveDate, Utc};

/// Source of the current instant and calendar day.
pub trait Clock {
    /// Current instant, used for drawing timestamps and export names.
    fn now(&self) -> DateTime<Utc>;

    /// Current calendar day. Stored dates and month keys are UTC days, so a
    /// late-evening local entry may carry tomorrow's date.
    fn today(&self) -> NaiveDate;

    /// Current month as `YYYY-MM`.
    fn current_month(&self) -> String {
        month_key(self.today())
    }
}

/// Wall-clock time source.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// Clock pinned to one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    now: DateTime<Utc>,
}

impl FixedClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self { now }
    }

    /// Clock at midday UTC of `date`.
    pub fn on_date(date: NaiveDate) -> Self {
        let noon = date.and_hms_opt(12, 0, 0).unwrap_or_default();
        Self::new(noon.and_utc())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }

    fn today(&self) -> NaiveDate {
        self.now.date_naive()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }

    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}

/// Formats the `YYYY-MM` month key of a date.
pub fn month_key(date: NaiveDate) -> String {
    format!("{:04}-{:02}", date.year(), date.month())
}

#[cfg(test)]
mod tests {
    use super::{month_key, Clock, FixedClock, SystemClock};
    use chrono::{NaiveDate, TimeZone, Utc};

    #[test]
    fn month_key_is_zero_padded() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(month_key(date), "2024-03");
    }

    #[test]
    fn system_clock_stamps_utc_days() {
        let before = Utc::now().date_naive();
        let today = SystemClock.today();
        let after = Utc::now().date_naive();
        assert!(today == before || today == after);
    }

    #[test]
    fn late_utc_instant_keeps_its_utc_date() {
        let clock = FixedClock::new(Utc.with_ymd_and_hms(2024, 1, 31, 23, 59, 59).unwrap());
        assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2024, 1, 31).unwrap());
        assert_eq!(clock.current_month(), "2024-01");
    }

    #[test]
    fn fixed_clock_reports_its_date() {
        let date = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();
        let clock = FixedClock::on_date(date);
        assert_eq!(clock.today(), date);
        assert_eq!(clock.current_month(), "2025-12");
    }
}
