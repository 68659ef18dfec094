/// Helpers for building millisecond counts from whole unit amounts
///
/// ```
/// use dauer::{format_text, Duration, FormatOptions};
///
/// let ms = Duration::hours(1.0) + Duration::minutes(30.0);
///
/// assert_eq!("1h 30m", format_text(ms, &FormatOptions::default()));
/// ```
pub struct Duration;

impl Duration {
    /// N years as milliseconds.
    #[must_use]
    pub const fn years(n: f64) -> f64 {
        Self::days(n) * 365.25
    }

    /// N months as milliseconds.
    #[must_use]
    pub const fn months(n: f64) -> f64 {
        Self::years(n) / 12.0
    }

    /// N weeks as milliseconds.
    #[must_use]
    pub const fn weeks(n: f64) -> f64 {
        Self::days(n) * 7.0
    }

    /// N days as milliseconds.
    #[must_use]
    pub const fn days(n: f64) -> f64 {
        Self::hours(n) * 24.0
    }

    /// N hours as milliseconds.
    #[must_use]
    pub const fn hours(n: f64) -> f64 {
        Self::minutes(n) * 60.0
    }

    /// N minutes as milliseconds.
    #[must_use]
    pub const fn minutes(n: f64) -> f64 {
        Self::seconds(n) * 60.0
    }

    /// N seconds as milliseconds.
    #[must_use]
    pub const fn seconds(n: f64) -> f64 {
        Self::millis(n) * 1_000.0
    }

    /// N milliseconds.
    #[must_use]
    pub const fn millis(n: f64) -> f64 {
        n
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Unit;
    use test_log::test;

    #[test]
    fn agrees_with_unit_table() {
        assert_eq!(Unit::Years.millis(), Duration::years(1.0));
        assert_eq!(Unit::Months.millis(), Duration::months(1.0));
        assert_eq!(Unit::Weeks.millis(), Duration::weeks(1.0));
        assert_eq!(Unit::Days.millis(), Duration::days(1.0));
        assert_eq!(Unit::Hours.millis(), Duration::hours(1.0));
        assert_eq!(Unit::Minutes.millis(), Duration::minutes(1.0));
        assert_eq!(Unit::Seconds.millis(), Duration::seconds(1.0));
        assert_eq!(Unit::Millis.millis(), Duration::millis(1.0));
    }

    #[test]
    fn fractional_amounts() {
        assert_eq!(5_400_000.0, Duration::hours(1.5));
        assert_eq!(500.0, Duration::seconds(0.5));
    }
}
