//! Forward interval arithmetic.
//!
//! Every operator returns empty when any operand is empty. Infinite bounds
//! saturate before reaching the rounding helpers, so no bound is ever NaN.

use std::ops::{Add, Mul, Neg, Sub};

use crate::{Interval, round};

const INF: f64 = f64::INFINITY;
const NEG_INF: f64 = f64::NEG_INFINITY;

impl Neg for Interval {
    type Output = Interval;

    fn neg(self) -> Interval {
        if self.is_empty() {
            return Interval::empty();
        }
        Interval::bounded(-self.ub(), -self.lb())
    }
}

impl Add for Interval {
    type Output = Interval;

    fn add(self, rhs: Interval) -> Interval {
        if self.is_empty() || rhs.is_empty() {
            return Interval::empty();
        }
        let lb = if self.lb() == NEG_INF || rhs.lb() == NEG_INF {
            NEG_INF
        } else {
            round::add_down(self.lb(), rhs.lb())
        };
        let ub = if self.ub() == INF || rhs.ub() == INF {
            INF
        } else {
            round::add_up(self.ub(), rhs.ub())
        };
        Interval::bounded(lb, ub)
    }
}

impl Sub for Interval {
    type Output = Interval;

    fn sub(self, rhs: Interval) -> Interval {
        if self.is_empty() || rhs.is_empty() {
            return Interval::empty();
        }
        let lb = if self.lb() == NEG_INF || rhs.ub() == INF {
            NEG_INF
        } else {
            round::sub_down(self.lb(), rhs.ub())
        };
        let ub = if self.ub() == INF || rhs.lb() == NEG_INF {
            INF
        } else {
            round::sub_up(self.ub(), rhs.lb())
        };
        Interval::bounded(lb, ub)
    }
}

/// Scalar multiplication, `a * x`.
impl Mul<Interval> for f64 {
    type Output = Interval;

    fn mul(self, rhs: Interval) -> Interval {
        rhs.scale(self)
    }
}

impl Interval {
    /// Returns `a * self`.
    ///
    /// Infinite or NaN multipliers produce the empty interval.
    #[must_use]
    pub fn scale(self, a: f64) -> Interval {
        if self.is_empty() || !a.is_finite() {
            return Interval::empty();
        }
        if a == 0.0 {
            return Interval::bounded(0.0, 0.0);
        }
        let (lb, ub) = (self.lb(), self.ub());
        if a > 0.0 {
            Interval::bounded(
                if lb == NEG_INF { NEG_INF } else { round::mul_down(a, lb) },
                if ub == INF { INF } else { round::mul_up(a, ub) },
            )
        } else {
            Interval::bounded(
                if ub == INF { NEG_INF } else { round::mul_down(a, ub) },
                if lb == NEG_INF { INF } else { round::mul_up(a, lb) },
            )
        }
    }

    /// Returns `self / a` for a finite, non-zero scalar.
    ///
    /// Any other divisor produces the empty interval.
    pub(crate) fn div_scalar(self, a: f64) -> Interval {
        if self.is_empty() || !a.is_finite() || a == 0.0 {
            return Interval::empty();
        }
        let (lb, ub) = (self.lb(), self.ub());
        if a > 0.0 {
            Interval::bounded(round::div_down(lb, a), round::div_up(ub, a))
        } else {
            Interval::bounded(round::div_down(ub, a), round::div_up(lb, a))
        }
    }

    /// Returns the image of `self` under `x -> x^2`.
    #[must_use]
    pub fn sqr(self) -> Interval {
        if self.is_empty() {
            return Interval::empty();
        }
        let (lb, ub) = (self.lb(), self.ub());
        if ub < 0.0 {
            Interval::bounded(round::mul_down(ub, ub), round::mul_up(lb, lb))
        } else if lb > 0.0 {
            Interval::bounded(round::mul_down(lb, lb), round::mul_up(ub, ub))
        } else {
            let m = (-lb).max(ub);
            Interval::bounded(0.0, round::mul_up(m, m))
        }
    }

    /// Returns the image of `self` under `x -> sqrt(x)`.
    ///
    /// Negative parts of the domain are ignored; an interval lying entirely
    /// below zero maps to empty.
    #[must_use]
    pub fn sqrt(self) -> Interval {
        if self.is_empty() || self.ub() < 0.0 {
            return Interval::empty();
        }
        let lb = if self.lb() < 0.0 {
            0.0
        } else {
            round::sqrt_down(self.lb())
        };
        Interval::bounded(lb, round::sqrt_up(self.ub()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;

    fn iv(lb: f64, ub: f64) -> Interval {
        Interval::of(lb, ub).expect("valid bounds")
    }

    #[test]
    fn negation_swaps_bounds() {
        assert_eq!(-iv(1.0, 2.0), iv(-2.0, -1.0));
        assert_eq!(-iv(-INF, 3.0), iv(-3.0, INF));
        assert!((-Interval::empty()).is_empty());
    }

    #[test]
    fn addition_saturates_infinite_bounds() {
        assert_eq!(iv(-INF, 1.0) + iv(2.0, INF), Interval::all_reals());
        assert_eq!(iv(1.0, 2.0) + iv(3.0, 5.0), iv(4.0, 7.0));
        assert_eq!(iv(-INF, 1.0) + iv(2.0, 3.0), iv(-INF, 4.0));
    }

    #[test]
    fn subtraction_of_bounded_intervals() {
        assert_eq!(iv(1.0, 2.0) - iv(3.0, 5.0), iv(-4.0, -1.0));
        assert_eq!(iv(0.0, 1.0) - iv(-INF, 0.0), iv(0.0, INF));
        assert_eq!(iv(0.0, 1.0) - iv(0.0, INF), iv(-INF, 1.0));
    }

    #[test]
    fn inexact_sum_is_widened_outward() {
        let sum = iv(0.1, 0.1) + iv(0.2, 0.2);
        assert!(sum.lb() < sum.ub());
        assert!(sum.contains(0.1 + 0.2));
    }

    #[test]
    fn scalar_multiplication_cases() {
        let x = iv(-1.0, 2.0);
        assert_eq!(x.scale(0.0), iv(0.0, 0.0));
        assert_eq!(x.scale(3.0), iv(-3.0, 6.0));
        assert_eq!(x.scale(-2.0), iv(-4.0, 2.0));
        assert_eq!(2.0 * iv(1.0, INF), iv(2.0, INF));
        assert_eq!(-2.0 * iv(1.0, INF), iv(-INF, -2.0));
        assert_eq!(-2.0 * iv(-INF, 1.0), iv(-2.0, INF));
        assert_eq!(0.0 * Interval::all_reals(), iv(0.0, 0.0));
    }

    #[test]
    fn infinite_multiplier_gives_empty() {
        assert!(iv(1.0, 2.0).scale(INF).is_empty());
        assert!(iv(1.0, 2.0).scale(f64::NEG_INFINITY).is_empty());
        assert!(iv(1.0, 2.0).scale(f64::NAN).is_empty());
    }

    #[test]
    fn square_by_sign_case() {
        assert_eq!(iv(-2.0, 3.0).sqr(), iv(0.0, 9.0));
        assert_eq!(iv(-3.0, -2.0).sqr(), iv(4.0, 9.0));
        assert_eq!(iv(2.0, 3.0).sqr(), iv(4.0, 9.0));
        assert_eq!(iv(-INF, -1.0).sqr(), iv(1.0, INF));
        assert_eq!(Interval::all_reals().sqr(), iv(0.0, INF));
    }

    #[test]
    fn square_root_clips_negative_part() {
        assert_eq!(iv(-1.0, 4.0).sqrt(), iv(0.0, 2.0));
        assert_eq!(iv(4.0, 9.0).sqrt(), iv(2.0, 3.0));
        assert!(iv(-4.0, -1.0).sqrt().is_empty());
        assert_eq!(iv(1.0, INF).sqrt(), iv(1.0, INF));
    }

    #[test]
    fn division_by_scalar() {
        assert_eq!(iv(2.0, 4.0).div_scalar(2.0), iv(1.0, 2.0));
        assert_eq!(iv(2.0, 4.0).div_scalar(-2.0), iv(-2.0, -1.0));
        assert!(iv(2.0, 4.0).div_scalar(0.0).is_empty());
        let third = iv(1.0, 1.0).div_scalar(3.0);
        assert!(third.lb() < third.ub());
    }

    #[test]
    fn empty_is_absorbing() {
        let e = Interval::empty();
        let x = iv(1.0, 2.0);
        assert!((e + x).is_empty());
        assert!((x + e).is_empty());
        assert!((e - x).is_empty());
        assert!((x - e).is_empty());
        assert!(e.scale(2.0).is_empty());
        assert!(e.scale(0.0).is_empty());
        assert!(e.sqr().is_empty());
        assert!(e.sqrt().is_empty());
    }

    /// A non-empty interval with finite bounds together with a point inside it.
    fn interval_with_point() -> impl Strategy<Value = (Interval, f64)> {
        (-1e6..1e6f64, 0.0..1e6f64, 0.0..=1.0f64).prop_map(|(lb, width, t)| {
            let ub = lb + width;
            let x = iv(lb, ub);
            let p = (lb + t * (ub - lb)).clamp(lb, ub);
            (x, p)
        })
    }

    proptest! {
        #[test]
        fn addition_is_inclusion_sound((x, a) in interval_with_point(), (y, b) in interval_with_point()) {
            prop_assert!((x + y).contains(a + b));
        }

        #[test]
        fn subtraction_is_inclusion_sound((x, a) in interval_with_point(), (y, b) in interval_with_point()) {
            prop_assert!((x - y).contains(a - b));
        }

        #[test]
        fn negation_is_inclusion_sound((x, a) in interval_with_point()) {
            prop_assert!((-x).contains(-a));
        }

        #[test]
        fn scaling_is_inclusion_sound((x, a) in interval_with_point(), k in -1e3..1e3f64) {
            prop_assert!(x.scale(k).contains(k * a));
        }

        #[test]
        fn square_is_inclusion_sound((x, a) in interval_with_point()) {
            prop_assert!(x.sqr().contains(a * a));
        }

        #[test]
        fn square_root_is_inclusion_sound((x, a) in interval_with_point()) {
            prop_assume!(a >= 0.0);
            prop_assert!(x.sqrt().contains(a.sqrt()));
        }

        #[test]
        fn empty_absorbs_every_operator((x, _) in interval_with_point(), k in -1e3..1e3f64) {
            let e = Interval::empty();
            prop_assert!((x + e).is_empty());
            prop_assert!((e - x).is_empty());
            prop_assert!((-e).is_empty());
            prop_assert!(e.scale(k).is_empty());
            prop_assert!(e.sqr().is_empty());
            prop_assert!(e.sqrt().is_empty());
        }
    }
}
