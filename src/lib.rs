//! Lenient, human-readable duration parsing and formatting.
//!
//! Text goes in, milliseconds come out, and back again. The parser accepts
//! compound, signed, fractional expressions ("1.5h", "2 days", "1d 2h 3m 4s")
//! and the formatter decomposes a millisecond count greedily from years down
//! to milliseconds, with long, compact and short rendering, per-unit
//! exclusion, minimum thresholds and an optional structured breakdown.
//!
//! Months and years use fixed averages (a 365.25-day year, one twelfth of
//! that per month); there is no calendar arithmetic.
//!
//! ```
//! use dauer::{convert, FormatOptions};
//!
//! // text to milliseconds
//! assert_eq!(Some(60_000.0), convert("1m", None)?.as_millis());
//! assert_eq!(Some(93_784_000.0), convert("1d 2h 3m 4s", None)?.as_millis());
//!
//! // milliseconds to text
//! let long = FormatOptions::new().long(true);
//! assert_eq!(
//!     Some("1 second 200 milliseconds"),
//!     convert(1_200, Some(&long))?.as_text(),
//! );
//!
//! let compact = FormatOptions::new().compact(true);
//! assert_eq!(Some("1m30s"), convert(90_000, Some(&compact))?.as_text());
//!
//! # Ok::<(), dauer::Error>(())
//! ```
//!
//! Parsing is best-effort over loosely structured text: unparseable input
//! yields [`f64::NAN`] rather than an error. Only a contract violation (an
//! empty string or a non-finite number) raises [`Error::InvalidInput`].

#![forbid(unsafe_code)]
#![deny(clippy::all, missing_docs, clippy::cargo)]
#![deny(clippy::unwrap_used)]
#![warn(clippy::indexing_slicing)]
#![warn(clippy::pedantic, clippy::nursery)]
#![warn(clippy::expect_used)]
#![allow(clippy::missing_const_for_fn)]
#![warn(clippy::multiple_crate_versions)]
#![warn(clippy::result_unit_err)]

mod convert;
mod duration;
mod error;
mod format;
mod parser;
mod unit;

type HashMap<K, V> = std::collections::HashMap<K, V, rustc_hash::FxBuildHasher>;
type HashSet<T> = std::collections::HashSet<T, rustc_hash::FxBuildHasher>;

pub use convert::{convert, Input, Output};
pub use duration::Duration;
pub use error::{Error, Result};
pub use format::{format_breakdown, format_text, Breakdown, FormatOptions};
pub use parser::parse;
pub use unit::Unit;
