mod component;
mod span;
mod value;
mod word;

use crate::unit::Unit;
use component::Component;
use nom::character::complete::multispace0;
use span::RawSpan;

/// Parses a human-readable duration expression into milliseconds.
///
/// Expressions are a sequence of optional `value unit` groups, largest unit
/// first, with optional whitespace anywhere in between. Values may be signed
/// and fractional, unit words are case-insensitive and accept several
/// spellings ("1.5h", "2 days", "1d 2h 3m 4s", "-.5 hr"). A bare trailing
/// number counts as milliseconds, so `"100"` is 100 ms.
///
/// Returns [`f64::NAN`] when no group matches, or when anything in the
/// string is left over after matching. Parsing is best-effort over loose
/// text and never raises.
///
/// ```
/// assert_eq!(60_000.0, dauer::parse("1m"));
/// assert_eq!(5_400_000.0, dauer::parse("1.5h"));
/// assert_eq!(93_784_000.0, dauer::parse("1d 2h 3m 4s"));
/// assert!(dauer::parse("1.3abc").is_nan());
/// ```
#[must_use]
pub fn parse(text: &str) -> f64 {
    let mut input = RawSpan::new(text);
    let mut total = 0.0;
    let mut matched = false;

    // NOTE: summation stays in table order, years first, so results are
    // reproducible
    for unit in Unit::ALL {
        let result = if unit == Unit::Millis {
            Component::parse_millis(input)
        } else {
            Component::parse_unit(input, unit)
        };

        if let Ok((rest, component)) = result {
            log::trace!("matched {component:?}");

            total += component.value * component.unit.millis();
            matched = true;
            input = rest;
        }
    }

    let input =
        multispace0::<_, nom::error::Error<RawSpan>>(input).map_or(input, |(rest, _)| rest);

    if !input.fragment().is_empty() {
        log::debug!("unrecognized trailing characters in {text:?}");
        return f64::NAN;
    }

    if !matched {
        log::debug!("no duration components in {text:?}");
        return f64::NAN;
    }

    total
}

#[cfg(test)]
mod tests {
    use super::word::spellings;
    use super::*;
    use test_log::test;

    #[test]
    fn preserve_ms() {
        assert_eq!(100.0, parse("100"));
    }

    #[test]
    fn from_symbols() {
        assert_eq!(60_000.0, parse("1m"));
        assert_eq!(3_600_000.0, parse("1h"));
        assert_eq!(172_800_000.0, parse("2d"));
        assert_eq!(1_814_400_000.0, parse("3w"));
        assert_eq!(1_000.0, parse("1s"));
        assert_eq!(100.0, parse("100ms"));
        assert_eq!(2_629_800_000.0, parse("1mo"));
        assert_eq!(31_557_600_000.0, parse("1y"));
    }

    #[test]
    fn every_spelling_of_one_is_the_multiplier() {
        for unit in Unit::ALL {
            for spelling in spellings(unit) {
                let text = format!("1{spelling}");
                assert_eq!(unit.millis(), parse(&text), "{text}");
            }
        }
    }

    #[test]
    fn decimals() {
        assert_eq!(5_400_000.0, parse("1.5h"));
        assert_eq!(0.5, parse(".5ms"));
    }

    #[test]
    fn multiple_spaces() {
        assert_eq!(1_000.0, parse("1   s"));
    }

    #[test]
    fn case_insensitive() {
        assert_eq!(5_400_000.0, parse("1.5H"));
    }

    #[test]
    fn negative_values() {
        assert_eq!(-100.0, parse("-100ms"));
        assert_eq!(-5_400_000.0, parse("-1.5h"));
        assert_eq!(-37_800_000.0, parse("-10.5h"));
        assert_eq!(-1_800_000.0, parse("-.5h"));
    }

    #[test]
    fn long_names() {
        assert_eq!(53.0, parse("53 milliseconds"));
        assert_eq!(17.0, parse("17 msecs"));
        assert_eq!(1_000.0, parse("1 sec"));
        assert_eq!(60_000.0, parse("1 min"));
        assert_eq!(3_600_000.0, parse("1 hr"));
        assert_eq!(172_800_000.0, parse("2 days"));
        assert_eq!(5_400_000.0, parse("1.5 hours"));
        assert_eq!(-100.0, parse("-100 milliseconds"));
        assert_eq!(-5_400_000.0, parse("-1.5 hours"));
        assert_eq!(-1_800_000.0, parse("-.5 hr"));
    }

    #[test]
    fn compound_expressions() {
        assert_eq!(93_784_000.0, parse("1d2h3m4s"));
        assert_eq!(93_784_000.0, parse("1d 2h 3m 4s"));
        assert_eq!(9_000_000.0, parse("2h 30m"));
    }

    #[test]
    fn compound_with_every_unit() {
        assert_eq!(
            Unit::Years.millis()
                + Unit::Months.millis() * 2.0
                + Unit::Weeks.millis() * 3.0
                + Unit::Days.millis() * 4.0
                + Unit::Hours.millis() * 5.0
                + Unit::Minutes.millis() * 6.0
                + Unit::Seconds.millis() * 7.0
                + 8.0,
            parse("1y 2mo 3w 4d 5h 6m 7s 8ms"),
        );
    }

    #[test]
    fn negative_applies_per_component() {
        assert_eq!(-86_400_000.0 + 7_200_000.0, parse("-1d 2h"));
    }

    #[test]
    fn sign_flip_of_single_components() {
        for text in ["1.5h", "100ms", "2 days", "3w"] {
            let flipped = format!("-{text}");
            assert_eq!(-parse(text), parse(&flipped), "{flipped}");
        }
    }

    #[test]
    fn unparseable_yields_nan() {
        assert!(parse("☃").is_nan());
        assert!(parse("10-.5").is_nan());
        assert!(parse("foo").is_nan());
        assert!(parse("   ").is_nan());
        assert!(parse("").is_nan());
    }

    #[test]
    fn multiple_dots_yield_nan() {
        assert!(parse("1..5h").is_nan());
        assert!(parse("1.5.5h").is_nan());
    }

    #[test]
    fn trailing_garbage_fails_the_whole_parse() {
        assert!(parse("1.3abc").is_nan());
        assert!(parse("1daysbc").is_nan());
        assert!(parse("1h abc").is_nan());
    }

    #[test]
    fn out_of_order_units_fail() {
        assert!(parse("1h 2d").is_nan());
    }

    #[test]
    fn bare_unit_yields_nan() {
        assert!(parse("h").is_nan());
        assert!(parse("ms").is_nan());
    }
}
