//! Display of intervals and boxes with configurable precision.
//!
//! Bounds are printed with at least [`Precision::min_digits`] and at most
//! [`Precision::max_digits`] fractional digits; trailing zeros beyond the
//! minimum are trimmed. The default is two to four digits.
//!
//! Precision is passed explicitly rather than stored globally. The plain
//! [`Display`](std::fmt::Display) impls use the default, and honour a
//! formatter precision (`{:.6}`) as the maximum digit count. Use
//! [`Interval::display`] or [`IntervalBox::display`] to choose both limits.
//!
//! ```
//! use braid_interval::{Interval, fmt::Precision};
//!
//! let x = Interval::of(1.0, 2.123456).unwrap();
//! assert_eq!(x.to_string(), "[1.00,2.1235]");
//! assert_eq!(format!("{x:.2}"), "[1.00,2.12]");
//!
//! let precision = Precision::new(0, 1).unwrap();
//! assert_eq!(x.display(precision).to_string(), "[1.,2.1]");
//! assert_eq!(Interval::empty().to_string(), "[empty]");
//! ```

use std::fmt::{self, Display, Formatter};

use thiserror::Error;

use crate::{Interval, IntervalBox};

/// Minimum and maximum number of fractional digits shown per bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Precision {
    min_digits: usize,
    max_digits: usize,
}

/// Errors that can occur when building a [`Precision`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PrecisionError {
    #[error("min_digits ({min}) must not exceed max_digits ({max})")]
    Reversed { min: usize, max: usize },
}

impl Default for Precision {
    fn default() -> Self {
        Self {
            min_digits: 2,
            max_digits: 4,
        }
    }
}

impl Precision {
    /// Creates a precision showing between `min_digits` and `max_digits`
    /// fractional digits.
    ///
    /// # Errors
    ///
    /// Returns an error if `min_digits > max_digits`.
    pub fn new(min_digits: usize, max_digits: usize) -> Result<Self, PrecisionError> {
        if min_digits > max_digits {
            return Err(PrecisionError::Reversed {
                min: min_digits,
                max: max_digits,
            });
        }
        Ok(Self {
            min_digits,
            max_digits,
        })
    }

    /// Returns the minimum number of fractional digits.
    #[must_use]
    pub fn min_digits(&self) -> usize {
        self.min_digits
    }

    /// Returns the maximum number of fractional digits.
    #[must_use]
    pub fn max_digits(&self) -> usize {
        self.max_digits
    }

    /// Resolves the precision for a formatter, letting `{:.N}` override the
    /// maximum digit count.
    fn for_formatter(self, f: &Formatter<'_>) -> Self {
        match f.precision() {
            Some(max) => Self {
                min_digits: self.min_digits.min(max),
                max_digits: max,
            },
            None => self,
        }
    }

    fn write_bound(self, f: &mut Formatter<'_>, value: f64) -> fmt::Result {
        if value == f64::INFINITY {
            return f.write_str("inf");
        }
        if value == f64::NEG_INFINITY {
            return f.write_str("-inf");
        }
        let mut text = format!("{value:.prec$}", prec = self.max_digits);
        // Values that round to zero print without a sign.
        if text.starts_with('-') && text[1..].bytes().all(|b| b == b'0' || b == b'.') {
            text.remove(0);
        }
        match text.find('.') {
            Some(dot) => {
                let min_len = dot + 1 + self.min_digits;
                while text.len() > min_len && text.ends_with('0') {
                    text.pop();
                }
            }
            None => text.push('.'),
        }
        f.write_str(&text)
    }
}

/// Display adapter returned by [`Interval::display`] and
/// [`IntervalBox::display`].
#[derive(Debug, Clone, Copy)]
pub struct WithPrecision<'a, T: ?Sized> {
    value: &'a T,
    precision: Precision,
}

fn write_interval(f: &mut Formatter<'_>, x: &Interval, precision: Precision) -> fmt::Result {
    if x.is_empty() {
        return f.write_str("[empty]");
    }
    f.write_str("[")?;
    precision.write_bound(f, x.lb())?;
    f.write_str(",")?;
    precision.write_bound(f, x.ub())?;
    f.write_str("]")
}

fn write_box(f: &mut Formatter<'_>, bx: &IntervalBox, precision: Precision) -> fmt::Result {
    f.write_str("(")?;
    for (i, x) in bx.iter().enumerate() {
        if i > 0 {
            f.write_str(" ; ")?;
        }
        write_interval(f, x, precision)?;
    }
    f.write_str(")")
}

impl Interval {
    /// Returns an adapter that displays this interval with `precision`.
    #[must_use]
    pub fn display(&self, precision: Precision) -> WithPrecision<'_, Interval> {
        WithPrecision {
            value: self,
            precision,
        }
    }
}

impl IntervalBox {
    /// Returns an adapter that displays this box with `precision`.
    #[must_use]
    pub fn display(&self, precision: Precision) -> WithPrecision<'_, IntervalBox> {
        WithPrecision {
            value: self,
            precision,
        }
    }
}

impl Display for Interval {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_interval(f, self, Precision::default().for_formatter(f))
    }
}

impl Display for IntervalBox {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_box(f, self, Precision::default().for_formatter(f))
    }
}

impl Display for WithPrecision<'_, Interval> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_interval(f, self.value, self.precision)
    }
}

impl Display for WithPrecision<'_, IntervalBox> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_box(f, self.value, self.precision)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iv(lb: f64, ub: f64) -> Interval {
        Interval::of(lb, ub).expect("valid bounds")
    }

    #[test]
    fn default_precision_pads_and_trims() {
        assert_eq!(iv(1.0, 2.5).to_string(), "[1.00,2.50]");
        assert_eq!(iv(-0.125, 3.14159).to_string(), "[-0.125,3.1416]");
        assert_eq!(iv(0.0, 0.0).to_string(), "[0.00,0.00]");
    }

    #[test]
    fn empty_and_infinite_bounds() {
        assert_eq!(Interval::empty().to_string(), "[empty]");
        assert_eq!(Interval::all_reals().to_string(), "[-inf,inf]");
        assert_eq!(iv(1.0, f64::INFINITY).to_string(), "[1.00,inf]");
    }

    #[test]
    fn negative_zero_prints_as_zero() {
        assert_eq!(iv(-0.0, 1.0).to_string(), "[0.00,1.00]");
    }

    #[test]
    fn tiny_negative_bounds_print_unsigned() {
        assert_eq!(iv(-1e-5, 1e-5).to_string(), "[0.00,0.00]");
        assert_eq!(format!("{:.0}", iv(-0.4, 0.4)), "[0.,0.]");
        assert_eq!(iv(-0.0002, 0.0).to_string(), "[-0.0002,0.00]");
    }

    #[test]
    fn formatter_precision_overrides_max_digits() {
        let x = iv(1.0, 2.123456);
        assert_eq!(format!("{x:.6}"), "[1.00,2.123456]");
        assert_eq!(format!("{x:.1}"), "[1.0,2.1]");
        assert_eq!(format!("{x:.0}"), "[1.,2.]");
    }

    #[test]
    fn explicit_precision() {
        let x = iv(1.5, 2.0);
        let precision = Precision::new(0, 3).unwrap();
        assert_eq!(x.display(precision).to_string(), "[1.5,2.]");

        let precision = Precision::new(3, 3).unwrap();
        assert_eq!(x.display(precision).to_string(), "[1.500,2.000]");
    }

    #[test]
    fn precision_rejects_reversed_limits() {
        assert_eq!(
            Precision::new(4, 2),
            Err(PrecisionError::Reversed { min: 4, max: 2 })
        );
    }

    #[test]
    fn box_display_joins_components() {
        let bx = IntervalBox::from_bounds(&[(-3.0, 3.0), (0.5, 1.0)]).unwrap();
        assert_eq!(bx.to_string(), "([-3.00,3.00] ; [0.50,1.00])");

        let precision = Precision::new(0, 1).unwrap();
        assert_eq!(bx.display(precision).to_string(), "([-3.,3.] ; [0.5,1.])");

        let mut empty = bx.clone();
        empty.set_to_empty();
        assert_eq!(empty.to_string(), "([empty] ; [empty])");
    }
}
