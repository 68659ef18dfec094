use nom::IResult;
use nom_locate::LocatedSpan;

pub type RawSpan<'a> = LocatedSpan<&'a str>;

pub type ParseResult<'a, T> = IResult<RawSpan<'a>, T>;

/// Implemented by grammar pieces that can be parsed from a located span
pub trait Parse<'a>: Sized {
    /// Parse the given span into self
    fn parse(input: RawSpan<'a>) -> ParseResult<'a, Self>;

    // Helper method to wrap a raw str into a span and parse
    fn parse_str(input: &'a str) -> ParseResult<'a, Self> {
        Self::parse(LocatedSpan::new(input))
    }
}

#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct Position {
    pub column: usize,
    pub line: u32,
}

impl From<LocatedSpan<&str>> for Position {
    fn from(span: LocatedSpan<&str>) -> Self {
        Self {
            column: span.get_column(),
            line: span.location_line(),
        }
    }
}
