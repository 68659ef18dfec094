use crate::unit::Unit;

/// Formatting configuration.
///
/// All fields are optional and resolved once per call: `plural` defaults to
/// true, `extra_space` defaults to the value of `long`, `minimum` defaults
/// to 1.
///
/// ```
/// use dauer::{format_text, FormatOptions, Unit};
///
/// let options = FormatOptions::new().long(true).exclude(Unit::Millis);
///
/// assert_eq!("1 second", format_text(1_200.0, &options));
/// ```
#[derive(Clone, Debug)]
pub struct FormatOptions {
    pub(crate) long: bool,
    pub(crate) compact: bool,
    pub(crate) extra_space: Option<bool>,
    pub(crate) exclude: crate::HashSet<Unit>,
    pub(crate) plural: bool,
    pub(crate) short: bool,
    pub(crate) minimum: f64,
    pub(crate) object: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            long: false,
            compact: false,
            extra_space: None,
            exclude: crate::HashSet::default(),
            plural: true,
            short: false,
            minimum: 1.0,
            object: false,
        }
    }
}

impl FormatOptions {
    /// Alias for [`FormatOptions::default`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses long unit names ("2 hours") instead of symbols ("2h").
    pub fn long(mut self, long: bool) -> Self {
        self.long = long;
        self
    }

    /// Omits the whitespace between unit groups.
    pub fn compact(mut self, compact: bool) -> Self {
        self.compact = compact;
        self
    }

    /// Sets whether a space separates a count from its unit label.
    ///
    /// Defaults to the value of `long`.
    pub fn extra_space(mut self, extra_space: bool) -> Self {
        self.extra_space = Some(extra_space);
        self
    }

    /// Excludes a unit from the output entirely.
    ///
    /// Whatever the unit would have covered falls through to the smaller
    /// units.
    pub fn exclude(mut self, unit: Unit) -> Self {
        self.exclude.insert(unit);
        self
    }

    /// Sets whether long unit names are pluralized for counts other than 1.
    ///
    /// Defaults to true; has no visible effect unless `long` is set.
    pub fn plural(mut self, plural: bool) -> Self {
        self.plural = plural;
        self
    }

    /// Emits only the most significant qualifying unit.
    pub fn short(mut self, short: bool) -> Self {
        self.short = short;
        self
    }

    /// Per-unit inclusion threshold, in multiples of the unit.
    ///
    /// A unit is included once the remaining value reaches `minimum` times
    /// its multiplier; values below 1 are clamped up to 1. A remainder of
    /// exactly one unit is always included, even below the threshold. The
    /// milliseconds group ignores the threshold entirely.
    pub fn minimum(mut self, minimum: f64) -> Self {
        self.minimum = minimum;
        self
    }

    /// Makes [`convert`](crate::convert()) return a structured [`Breakdown`]
    /// instead of text.
    pub fn object(mut self, object: bool) -> Self {
        self.object = object;
        self
    }
}

/// Per-unit integer breakdown of a millisecond count.
///
/// Produced by [`format_breakdown`]. Counts are keyed by [`Unit`]; the sign
/// is carried separately by [`Breakdown::is_negative`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Breakdown {
    counts: crate::HashMap<Unit, u64>,
    negative: bool,
}

impl Breakdown {
    /// Count for a unit, if the unit was included.
    #[must_use]
    pub fn get(&self, unit: Unit) -> Option<u64> {
        self.counts.get(&unit).copied()
    }

    /// Whether the formatted value was negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Number of included units.
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether no unit was included.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterates over the included units and their counts.
    pub fn iter(&self) -> impl Iterator<Item = (Unit, u64)> + '_ {
        self.counts.iter().map(|(unit, count)| (*unit, *count))
    }
}

/// Options with every default applied, done once up front.
struct Resolved<'a> {
    long: bool,
    compact: bool,
    extra_space: bool,
    exclude: &'a crate::HashSet<Unit>,
    plural: bool,
    short: bool,
    minimum: f64,
}

impl<'a> From<&'a FormatOptions> for Resolved<'a> {
    fn from(options: &'a FormatOptions) -> Self {
        Self {
            long: options.long,
            compact: options.compact,
            extra_space: options.extra_space.unwrap_or(options.long),
            exclude: &options.exclude,
            plural: options.plural,
            short: options.short,
            minimum: options.minimum.max(1.0),
        }
    }
}

/// Greedy largest-unit-first walk over the unit table.
///
/// `emit` receives each included unit with its integer count, largest unit
/// first. The emitted counts times their multipliers, plus whatever was left
/// for the milliseconds group, add back up to the rounded absolute input.
#[allow(clippy::float_cmp)]
fn decompose(ms: f64, options: &Resolved, mut emit: impl FnMut(Unit, u64)) {
    let mut remaining = ms.abs().round();
    let mut emitted = false;

    for unit in Unit::ALL {
        if options.short && emitted {
            break;
        }

        if options.exclude.contains(&unit) {
            continue;
        }

        let multiplier = unit.millis();

        let include = if unit == Unit::Millis {
            // whatever the larger units left over is emitted verbatim
            remaining > 0.0
        } else {
            // NOTE: a remainder of exactly one unit is always included, even
            // below the `minimum` threshold
            remaining >= multiplier * options.minimum || remaining == multiplier
        };

        if !include {
            continue;
        }

        let count = (remaining / multiplier).floor();
        remaining -= count * multiplier;

        emit(unit, count as u64);
        emitted = true;
    }
}

/// Formats a millisecond count as text.
///
/// Walks the unit table from years down to milliseconds and renders every
/// included unit, honoring the given options. A negative input renders with
/// a single leading minus sign.
///
/// ```
/// use dauer::{format_text, FormatOptions};
///
/// assert_eq!("1m 30s", format_text(90_000.0, &FormatOptions::default()));
/// assert_eq!(
///     "1m30s",
///     format_text(90_000.0, &FormatOptions::new().compact(true)),
/// );
/// assert_eq!(
///     "1 minute 30 seconds",
///     format_text(90_000.0, &FormatOptions::new().long(true)),
/// );
/// ```
#[must_use]
pub fn format_text(ms: f64, options: &FormatOptions) -> String {
    let options = Resolved::from(options);
    let mut out = String::new();

    decompose(ms, &options, |unit, count| {
        out.push_str(&count.to_string());

        if options.extra_space {
            out.push(' ');
        }

        if options.long {
            out.push_str(unit.label(options.plural && count != 1));
        } else {
            out.push_str(unit.symbol());
        }

        if !options.compact {
            out.push(' ');
        }
    });

    let trimmed = out.trim_end();

    if ms < 0.0 {
        format!("-{trimmed}")
    } else {
        trimmed.to_string()
    }
}

/// Formats a millisecond count as a structured per-unit breakdown.
///
/// ```
/// use dauer::{format_breakdown, FormatOptions, Unit};
///
/// let breakdown = format_breakdown(90_000.0, &FormatOptions::default());
///
/// assert_eq!(Some(1), breakdown.get(Unit::Minutes));
/// assert_eq!(Some(30), breakdown.get(Unit::Seconds));
/// assert!(!breakdown.is_negative());
/// ```
#[must_use]
pub fn format_breakdown(ms: f64, options: &FormatOptions) -> Breakdown {
    let options = Resolved::from(options);
    let mut counts = crate::HashMap::default();

    decompose(ms, &options, |unit, count| {
        counts.insert(unit, count);
    });

    Breakdown {
        counts,
        negative: ms < 0.0,
    }
}
