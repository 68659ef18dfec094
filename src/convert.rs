use crate::format::{format_breakdown, format_text, Breakdown, FormatOptions};
use crate::{Error, Result};

/// A value accepted by [`convert`]: free-form text or a millisecond count.
#[derive(Clone, Copy, Debug)]
pub enum Input<'a> {
    /// A human-readable duration expression.
    Text(&'a str),

    /// A millisecond count.
    Millis(f64),
}

impl<'a> From<&'a str> for Input<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for Input<'_> {
    fn from(value: f64) -> Self {
        Self::Millis(value)
    }
}

impl From<i32> for Input<'_> {
    fn from(value: i32) -> Self {
        Self::Millis(f64::from(value))
    }
}

impl From<i64> for Input<'_> {
    fn from(value: i64) -> Self {
        Self::Millis(value as f64)
    }
}

impl From<u64> for Input<'_> {
    fn from(value: u64) -> Self {
        Self::Millis(value as f64)
    }
}

/// The result of a [`convert`] call.
#[derive(Clone, Debug, PartialEq)]
pub enum Output {
    /// Parsed milliseconds; [`f64::NAN`] when the text was unparseable.
    Millis(f64),

    /// Formatted text.
    Text(String),

    /// Structured per-unit counts.
    Breakdown(Breakdown),
}

impl Output {
    /// Parsed milliseconds, if this is a parse result.
    #[must_use]
    pub fn as_millis(&self) -> Option<f64> {
        match self {
            Self::Millis(ms) => Some(*ms),
            _ => None,
        }
    }

    /// Formatted text, if this is a text format result.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Structured breakdown, if this is an object-mode format result.
    #[must_use]
    pub fn as_breakdown(&self) -> Option<&Breakdown> {
        match self {
            Self::Breakdown(breakdown) => Some(breakdown),
            _ => None,
        }
    }
}

/// Converts between duration text and milliseconds.
///
/// Text input is parsed into milliseconds ([`f64::NAN`] when unparseable).
/// Numeric input is formatted using `options`, as text or as a [`Breakdown`]
/// when [`FormatOptions::object`] is set.
///
/// ```
/// use dauer::{convert, FormatOptions, Unit};
///
/// assert_eq!(Some(60_000.0), convert("1m", None)?.as_millis());
/// assert_eq!(Some("1m 30s"), convert(90_000, None)?.as_text());
///
/// let object = FormatOptions::new().object(true);
/// let out = convert(90_000, Some(&object))?;
///
/// assert_eq!(Some(30), out.as_breakdown().and_then(|b| b.get(Unit::Seconds)));
///
/// # Ok::<(), dauer::Error>(())
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] for an empty string or a non-finite
/// number. The input shape is checked before any unit logic runs; a failed
/// parse is not an error and comes back as `Ok` with a NAN value.
pub fn convert<'a>(value: impl Into<Input<'a>>, options: Option<&FormatOptions>) -> Result<Output> {
    match value.into() {
        Input::Text(text) => {
            if text.is_empty() {
                return Err(Error::InvalidInput(format!("{text:?}")));
            }

            Ok(Output::Millis(crate::parser::parse(text)))
        }
        Input::Millis(ms) => {
            if !ms.is_finite() {
                return Err(Error::InvalidInput(format!("{ms:?}")));
            }

            let default = FormatOptions::default();
            let options = options.unwrap_or(&default);

            if options.object {
                Ok(Output::Breakdown(format_breakdown(ms, options)))
            } else {
                Ok(Output::Text(format_text(ms, options)))
            }
        }
    }
}
