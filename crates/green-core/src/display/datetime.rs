//! Date and time display utilities.

use std::fmt;

use jiff::{civil::Date, tz::TimeZone, Timestamp};

/// A timestamp shown in the system time zone as `YYYY-MM-DD HH:MM:SS TZ`.
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl fmt::Display for LocalDateTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .to_zoned(TimeZone::system())
                .strftime("%Y-%m-%d %H:%M:%S %Z")
        )
    }
}

/// A calendar date written out, e.g. `June 9, 2025`.
///
/// ```rust
/// use green_core::display::LongDate;
/// use jiff::civil::date;
///
/// assert_eq!(LongDate(&date(2025, 6, 9)).to_string(), "June 9, 2025");
/// ```
pub struct LongDate<'a>(pub &'a Date);

impl fmt::Display for LongDate<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.strftime("%B %-d, %Y"))
    }
}
