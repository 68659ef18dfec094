use super::span::{ParseResult, RawSpan};
use crate::unit::Unit;
use nom::bytes::complete::tag_no_case;

/// Spellings accepted for each unit, longest first so a short spelling never
/// shadows a longer one.
///
/// The month symbol "M" is not a spelling: matching is case-insensitive and
/// "m" belongs to minutes.
pub fn spellings(unit: Unit) -> &'static [&'static str] {
    match unit {
        Unit::Years => &["years", "year", "yrs", "yr", "y"],
        Unit::Months => &["months", "month", "mos", "mo"],
        Unit::Weeks => &["weeks", "week", "wks", "wk", "w"],
        Unit::Days => &["days", "day", "d"],
        Unit::Hours => &["hours", "hour", "hrs", "hr", "h"],
        Unit::Minutes => &["minutes", "minute", "mins", "min", "m"],
        Unit::Seconds => &["seconds", "second", "secs", "sec", "s"],
        Unit::Millis => &["milliseconds", "millisecond", "msecs", "msec", "ms"],
    }
}

/// Matches one spelling of `unit`, case-insensitively.
///
/// A spelling immediately followed by another letter is not a match: in
/// "1daysbc" neither "days" nor "day" nor "d" counts as a unit word.
pub fn unit_word(input: RawSpan<'_>, unit: Unit) -> ParseResult<'_, Unit> {
    for spelling in spellings(unit) {
        let Ok((rest, _)) =
            tag_no_case::<_, _, nom::error::Error<RawSpan>>(*spelling)(input)
        else {
            continue;
        };

        if rest.fragment().starts_with(|c: char| c.is_alphabetic()) {
            continue;
        }

        return Ok((rest, unit));
    }

    Err(nom::Err::Error(nom::error::Error::new(
        input,
        nom::error::ErrorKind::Tag,
    )))
}
