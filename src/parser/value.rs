use super::span::{Parse, ParseResult, RawSpan};
use nom::{
    branch::alt,
    character::complete::{char, digit0, digit1},
    combinator::{map_res, opt, recognize},
    sequence::{pair, tuple},
};

/// A signed decimal literal.
///
/// Digits may be omitted on either side of the dot (".5", "5."), but a
/// second dot is never part of the literal.
#[derive(Debug, PartialEq)]
pub struct Number(pub f64);

impl<'a> Parse<'a> for Number {
    fn parse(input: RawSpan<'a>) -> ParseResult<'a, Self> {
        let (input, value) = map_res(
            recognize(pair(
                opt(char('-')),
                alt((
                    recognize(tuple((digit1, opt(char('.')), digit0))),
                    recognize(pair(char('.'), digit1)),
                )),
            )),
            |raw: RawSpan| raw.fragment().parse::<f64>(),
        )(input)?;

        Ok((input, Self(value)))
    }
}
