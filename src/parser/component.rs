use super::{
    span::{Parse, ParseResult, Position, RawSpan},
    value::Number,
    word::unit_word,
};
use crate::unit::Unit;
use nom::character::complete::multispace0;
use nom_locate::position;

/// One `value unit` group within a compound duration expression.
#[derive(Debug, PartialEq)]
pub struct Component {
    pub unit: Unit,
    pub value: f64,
    position: Position,
}

impl Component {
    /// Parses the group for `unit`, e.g. `-1.5 h` for hours.
    pub fn parse_unit(input: RawSpan<'_>, unit: Unit) -> ParseResult<'_, Self> {
        let (input, _) = multispace0(input)?;
        let (input, pos) = position(input)?;
        let (input, Number(value)) = Number::parse(input)?;
        let (input, _) = multispace0(input)?;
        let (input, unit) = unit_word(input, unit)?;

        Ok((
            input,
            Self {
                unit,
                value,
                position: pos.into(),
            },
        ))
    }

    /// Parses the milliseconds group.
    ///
    /// The unit word is optional when nothing follows it, so a bare trailing
    /// number ("100") counts as milliseconds.
    pub fn parse_millis(input: RawSpan<'_>) -> ParseResult<'_, Self> {
        let (input, _) = multispace0(input)?;
        let (input, pos) = position(input)?;
        let (input, Number(value)) = Number::parse(input)?;
        let (input, _) = multispace0(input)?;

        if let Ok((input, unit)) = unit_word(input, Unit::Millis) {
            return Ok((
                input,
                Self {
                    unit,
                    value,
                    position: pos.into(),
                },
            ));
        }

        if input.fragment().is_empty() {
            return Ok((
                input,
                Self {
                    unit: Unit::Millis,
                    value,
                    position: pos.into(),
                },
            ));
        }

        Err(nom::Err::Error(nom::error::Error::new(
            input,
            nom::error::ErrorKind::Eof,
        )))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use nom_locate::LocatedSpan;
    use test_log::test;

    fn parse(input: &str, unit: Unit) -> ParseResult<'_, Component> {
        Component::parse_unit(LocatedSpan::new(input), unit)
    }

    #[test]
    fn parse_component_simple() {
        let (_, component) = parse("1.5h", Unit::Hours).unwrap();

        assert_eq!(
            Component {
                unit: Unit::Hours,
                value: 1.5,
                position: Position { column: 1, line: 1 },
            },
            component,
        );
    }

    #[test]
    fn parse_component_spaced() {
        let (_, component) = parse("1   s", Unit::Seconds).unwrap();

        assert_eq!(1.0, component.value);
    }

    #[test]
    fn parse_component_long_name() {
        let (_, component) = parse("2 days", Unit::Days).unwrap();

        assert_eq!(2.0, component.value);
    }

    #[test]
    fn parse_component_negative() {
        let (_, component) = parse("-.5h", Unit::Hours).unwrap();

        assert_eq!(-0.5, component.value);
    }

    #[test]
    fn parse_component_leading_whitespace() {
        let (_, component) = parse("  3w", Unit::Weeks).unwrap();

        assert_eq!(
            Component {
                unit: Unit::Weeks,
                value: 3.0,
                position: Position { column: 3, line: 1 },
            },
            component,
        );
    }

    #[test]
    fn reject_wrong_unit() {
        assert!(parse("1.5h", Unit::Minutes).is_err());
    }

    #[test]
    fn reject_bare_unit() {
        assert!(parse("h", Unit::Hours).is_err());
    }

    #[test]
    fn millis_with_word() {
        let (_, component) = Component::parse_millis(LocatedSpan::new("100ms")).unwrap();

        assert_eq!(Unit::Millis, component.unit);
        assert_eq!(100.0, component.value);
    }

    #[test]
    fn millis_bare_number() {
        let (_, component) = Component::parse_millis(LocatedSpan::new("100")).unwrap();

        assert_eq!(100.0, component.value);
    }

    #[test]
    fn millis_bare_number_with_trailing_garbage() {
        assert!(Component::parse_millis(LocatedSpan::new("100abc")).is_err());
    }
}
