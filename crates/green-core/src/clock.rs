//! Source of the current time and of "today".
//!
//! Every rule that depends on the calendar (eligibility, views, summaries)
//! asks a [`Clock`] for the current day instead of reading the system time,
//! so tests and the CLI's `--today` flag can pin it.

use jiff::{civil::Date, tz::TimeZone, Timestamp, Zoned};

use crate::error::{GardenError, Result};

/// Provides the current time in the gardener's time zone.
pub trait Clock: Send + Sync {
    /// Returns the current zoned time.
    fn now(&self) -> Zoned;

    /// The current calendar day in the clock's time zone.
    fn today(&self) -> Date {
        self.now().date()
    }

    /// The current instant, used for `created_at` and `completed_at`.
    fn timestamp(&self) -> Timestamp {
        self.now().timestamp()
    }
}

/// Clock that reads the system time in the system time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Zoned {
        Zoned::now()
    }
}

/// Clock frozen at one instant.
#[derive(Debug, Clone)]
pub struct FixedClock {
    now: Zoned,
}

impl FixedClock {
    pub fn new(now: Zoned) -> Self {
        Self { now }
    }

    /// A clock whose "today" is `date`, frozen at midnight UTC.
    ///
    /// ```rust
    /// use green_core::{Clock, FixedClock};
    /// use jiff::civil::date;
    ///
    /// let clock = FixedClock::at_date(date(2025, 6, 1))?;
    /// assert_eq!(clock.today(), date(2025, 6, 1));
    /// # Result::<(), green_core::GardenError>::Ok(())
    /// ```
    pub fn at_date(date: Date) -> Result<Self> {
        let now = date.to_zoned(TimeZone::UTC).map_err(|e| GardenError::Configuration {
            message: format!("Cannot pin the clock to {date}: {e}"),
        })?;
        Ok(Self { now })
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Zoned {
        self.now.clone()
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    #[test]
    fn test_system_clock_is_current() {
        let before = Timestamp::now();
        let now = SystemClock.timestamp();
        let after = Timestamp::now();

        assert!(now >= before);
        assert!(now <= after);
    }

    #[test]
    fn test_fixed_clock_does_not_move() {
        let clock = FixedClock::at_date(date(2025, 2, 28)).expect("valid date");
        assert_eq!(clock.today(), date(2025, 2, 28));
        assert_eq!(clock.timestamp(), clock.timestamp());
        assert_eq!(clock.timestamp().to_string(), "2025-02-28T00:00:00Z");
    }

    #[test]
    fn test_fixed_clock_keeps_zone_date() {
        let zoned: Zoned = "2025-06-01T23:30:00-07:00[-07:00]"
            .parse()
            .expect("valid zoned time");
        let clock = FixedClock::new(zoned);
        // Already June 2nd in UTC.
        assert_eq!(clock.today(), date(2025, 6, 1));
    }
}
