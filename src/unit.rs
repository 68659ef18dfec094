const SECOND: f64 = 1_000.0;
const MINUTE: f64 = 60.0 * SECOND;
const HOUR: f64 = 60.0 * MINUTE;
const DAY: f64 = 24.0 * HOUR;
const WEEK: f64 = 7.0 * DAY;

// NOTE: fixed averages, no calendar arithmetic: a year is 365.25 days, a
// month is one twelfth of a year
const YEAR: f64 = 365.25 * DAY;
const MONTH: f64 = YEAR / 12.0;

/// A duration unit with a fixed millisecond multiplier.
#[derive(Clone, Copy, PartialEq, Eq, std::hash::Hash, Debug)]
pub enum Unit {
    /// 365.25 days
    Years,

    /// One twelfth of a year
    Months,

    /// 7 days
    Weeks,

    /// 24 hours
    Days,

    /// 60 minutes
    Hours,

    /// 60 seconds
    Minutes,

    /// 1000 milliseconds
    Seconds,

    /// The base unit
    Millis,
}

impl Unit {
    /// All units, ordered from largest to smallest multiplier.
    pub const ALL: [Self; 8] = [
        Self::Years,
        Self::Months,
        Self::Weeks,
        Self::Days,
        Self::Hours,
        Self::Minutes,
        Self::Seconds,
        Self::Millis,
    ];

    /// Milliseconds covered by one of this unit.
    #[must_use]
    pub const fn millis(self) -> f64 {
        match self {
            Self::Years => YEAR,
            Self::Months => MONTH,
            Self::Weeks => WEEK,
            Self::Days => DAY,
            Self::Hours => HOUR,
            Self::Minutes => MINUTE,
            Self::Seconds => SECOND,
            Self::Millis => 1.0,
        }
    }

    /// Unit symbol, as used in compact output and breakdown keys.
    ///
    /// Symbols are case-sensitive: `m` is minutes, `M` is months.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Years => "y",
            Self::Months => "M",
            Self::Weeks => "w",
            Self::Days => "d",
            Self::Hours => "h",
            Self::Minutes => "m",
            Self::Seconds => "s",
            Self::Millis => "ms",
        }
    }

    /// Long unit name, as used in verbose output.
    #[must_use]
    pub const fn label(self, plural: bool) -> &'static str {
        if plural {
            match self {
                Self::Years => "years",
                Self::Months => "months",
                Self::Weeks => "weeks",
                Self::Days => "days",
                Self::Hours => "hours",
                Self::Minutes => "minutes",
                Self::Seconds => "seconds",
                Self::Millis => "milliseconds",
            }
        } else {
            match self {
                Self::Years => "year",
                Self::Months => "month",
                Self::Weeks => "week",
                Self::Days => "day",
                Self::Hours => "hour",
                Self::Minutes => "minute",
                Self::Seconds => "second",
                Self::Millis => "millisecond",
            }
        }
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl TryFrom<&str> for Unit {
    type Error = ();

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "y" => Ok(Self::Years),
            "M" => Ok(Self::Months),
            "w" => Ok(Self::Weeks),
            "d" => Ok(Self::Days),
            "h" => Ok(Self::Hours),
            "m" => Ok(Self::Minutes),
            "s" => Ok(Self::Seconds),
            "ms" => Ok(Self::Millis),
            _ => Err(()),
        }
    }
}
