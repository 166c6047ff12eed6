//! Canonical decimal rendering of numeric attribute values.
//!
//! Every number emitted into path data or a transform attribute passes
//! through [`format_number`].  The output never depends on the host
//! locale: the decimal separator is always `.`, there is no digit
//! grouping and no exponent notation.
//!
//! Rounding is round-half-to-even on the value scaled by
//! `10^precision`, so a value whose scaled form lies exactly on `.5`
//! rounds towards the even neighbour (`0.125` at two digits becomes
//! `0.12`, `0.375` becomes `0.38`).

use serde::{Deserialize, Serialize};

use crate::types::Error;

/// Number of fractional digits kept when no explicit precision is given.
pub const DEFAULT_PRECISION: u32 = 6;

/// Largest precision that still changes an `f64` when rounding.
pub const MAX_PRECISION: u32 = 15;

/// Magnitudes at or above this have no fractional digits left to round.
const ROUNDING_LIMIT: f64 = 1e16;

const POWERS_OF_TEN: [f64; 16] = [
    1e0, 1e1, 1e2, 1e3, 1e4, 1e5, 1e6, 1e7, 1e8, 1e9, 1e10, 1e11, 1e12, 1e13, 1e14, 1e15,
];

/// Options controlling how attribute strings are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WriteOptions {
    /// Fractional digits kept for every number.
    pub precision: u32,
}

impl WriteOptions {
    /// Options with an explicit precision.
    #[must_use]
    pub const fn with_precision(precision: u32) -> Self {
        Self { precision }
    }

    /// Check that the options can be honoured.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if `precision` exceeds
    /// [`MAX_PRECISION`].
    pub fn validate(&self) -> Result<(), Error> {
        if self.precision > MAX_PRECISION {
            return Err(Error::InvalidConfig(format!(
                "precision must be at most {MAX_PRECISION}, got {}",
                self.precision
            )));
        }
        Ok(())
    }

    /// Format a single number with these options.
    #[must_use]
    pub fn number(&self, value: f64) -> String {
        format_number(value, self.precision)
    }

    /// Format several numbers joined by `separator`.
    #[must_use]
    pub fn numbers(&self, values: &[f64], separator: &str) -> String {
        values
            .iter()
            .map(|&v| self.number(v))
            .collect::<Vec<_>>()
            .join(separator)
    }
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self::with_precision(DEFAULT_PRECISION)
    }
}

/// Round `value` to `precision` fractional digits, ties to even.
///
/// Precisions above [`MAX_PRECISION`] are clamped.  Non-finite values
/// and magnitudes of `1e16` or more are returned unchanged.
#[must_use]
pub fn round_to(value: f64, precision: u32) -> f64 {
    if !value.is_finite() || value.abs() >= ROUNDING_LIMIT {
        return value;
    }
    let digits = precision.min(MAX_PRECISION) as usize;
    let scale = POWERS_OF_TEN[digits];
    (value * scale).round_ties_even() / scale
}

/// Render `value` rounded to `precision` fractional digits.
///
/// Uses the shortest decimal representation that round-trips, so
/// trailing zeros never appear (`10.0` renders as `10`).  A result that
/// rounds to zero renders as `0`, never `-0`.
///
/// # Examples
///
/// ```
/// use svgattr::format::format_number;
///
/// assert_eq!(format_number(10.0, 6), "10");
/// assert_eq!(format_number(1.0000005, 6), "1.000001");
/// assert_eq!(format_number(-0.0000001, 6), "0");
/// ```
#[must_use]
pub fn format_number(value: f64, precision: u32) -> String {
    if value.is_nan() {
        log::warn!("formatting NaN into an attribute value");
        return "NaN".to_owned();
    }
    if value.is_infinite() {
        log::warn!("formatting an infinite value into an attribute value");
        let text = if value > 0.0 { "Infinity" } else { "-Infinity" };
        return text.to_owned();
    }

    let rounded = round_to(value, precision);
    if rounded == 0.0 {
        return "0".to_owned();
    }
    rounded.to_string()
}
