use crate::{error::IntervalError, round};

// Both bounds at -oo encode the empty set.
const EMPTY_LB: f64 = f64::NEG_INFINITY;
const EMPTY_UB: f64 = f64::NEG_INFINITY;

/// A closed interval `[lb, ub]` of real numbers.
///
/// Bounds may be infinite. The empty set is a distinguished value whose
/// bounds are both `-oo`; an interval whose lower bound is `+oo` or whose
/// upper bound is `-oo` is always normalized to it.
///
/// Intervals are plain values: copies are indistinguishable from originals.
/// Methods prefixed with `set` mutate in place, everything else returns a
/// new interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    lb: f64,
    ub: f64,
}

impl Interval {
    /// Creates the closed interval `[lb, ub]`.
    ///
    /// # Errors
    ///
    /// Returns [`IntervalError::ReversedBounds`] if `lb > ub`, or
    /// [`IntervalError::NanBound`] if either bound is NaN.
    pub fn of(lb: f64, ub: f64) -> Result<Self, IntervalError> {
        if lb.is_nan() || ub.is_nan() {
            return Err(IntervalError::NanBound);
        }
        if lb > ub {
            return Err(IntervalError::ReversedBounds { lb, ub });
        }
        Ok(Self::bounded(lb, ub))
    }

    /// Creates the degenerate interval `[value, value]`.
    ///
    /// # Errors
    ///
    /// Returns [`IntervalError::NanBound`] if `value` is NaN.
    pub fn point(value: f64) -> Result<Self, IntervalError> {
        Self::of(value, value)
    }

    /// Returns the interval `(-oo, +oo)`.
    #[must_use]
    pub fn all_reals() -> Self {
        Self {
            lb: f64::NEG_INFINITY,
            ub: f64::INFINITY,
        }
    }

    /// Returns the degenerate interval `[0, 0]`.
    #[must_use]
    pub fn zero() -> Self {
        Self { lb: 0.0, ub: 0.0 }
    }

    /// Returns the empty interval.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            lb: EMPTY_LB,
            ub: EMPTY_UB,
        }
    }

    /// Builds an interval from bounds, mapping crossed, NaN, or out-of-range
    /// bounds to empty.
    pub(crate) fn bounded(lb: f64, ub: f64) -> Self {
        if lb.is_nan() || ub.is_nan() || lb > ub {
            return Self::empty();
        }
        if lb == f64::INFINITY || ub == f64::NEG_INFINITY {
            return Self::empty();
        }
        Self { lb, ub }
    }

    /// Returns the lower bound.
    #[must_use]
    pub fn lb(&self) -> f64 {
        self.lb
    }

    /// Returns the upper bound.
    #[must_use]
    pub fn ub(&self) -> f64 {
        self.ub
    }

    /// Sets the lower bound. Crossed bounds make the interval empty.
    pub fn set_lb(&mut self, lb: f64) {
        *self = Self::bounded(lb, self.ub);
    }

    /// Sets the upper bound. Crossed bounds make the interval empty.
    pub fn set_ub(&mut self, ub: f64) {
        *self = Self::bounded(self.lb, ub);
    }

    /// Sets both bounds. Crossed bounds make the interval empty.
    pub fn set(&mut self, lb: f64, ub: f64) {
        *self = Self::bounded(lb, ub);
    }

    /// Copies the bounds of `other` into this interval.
    pub fn assign(&mut self, other: Interval) {
        *self = other;
    }

    /// Makes this interval empty.
    pub fn set_to_empty(&mut self) {
        self.lb = EMPTY_LB;
        self.ub = EMPTY_UB;
    }

    /// Returns true if this interval is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lb == EMPTY_LB && self.ub == EMPTY_UB
    }

    /// Returns true if this interval is a single point.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        !self.is_empty() && self.lb == self.ub
    }

    /// Returns true if both bounds are finite.
    #[must_use]
    pub fn is_bounded(&self) -> bool {
        !self.is_empty() && self.lb.is_finite() && self.ub.is_finite()
    }

    /// Returns the width `ub - lb`, rounded upward.
    ///
    /// # Errors
    ///
    /// Fails if the interval is empty or has an infinite bound.
    pub fn diam(&self) -> Result<f64, IntervalError> {
        if self.is_empty() {
            return Err(IntervalError::EmptyDiameter);
        }
        if !self.is_bounded() {
            return Err(IntervalError::UnboundedDiameter {
                lb: self.lb,
                ub: self.ub,
            });
        }
        Ok(round::sub_up(self.ub, self.lb))
    }

    /// Returns the midpoint.
    ///
    /// The definition is extended to unbounded intervals:
    ///
    /// - `mid([-oo, +oo]) = 0`
    /// - `mid([x, +oo]) = MAX` for `x < MAX`
    /// - `mid([-oo, x]) = -MAX` for `x > -MAX`
    ///
    /// # Errors
    ///
    /// Fails on the empty interval, `[-oo, -MAX]`, and `[MAX, +oo]`.
    pub fn mid(&self) -> Result<f64, IntervalError> {
        if self.is_empty() {
            return Err(IntervalError::EmptyMidpoint);
        }
        let undefined = IntervalError::UndefinedMidpoint {
            lb: self.lb,
            ub: self.ub,
        };
        match (self.lb == f64::NEG_INFINITY, self.ub == f64::INFINITY) {
            (true, true) => Ok(0.0),
            (true, false) if self.ub == -f64::MAX => Err(undefined),
            (true, false) => Ok(-f64::MAX),
            (false, true) if self.lb == f64::MAX => Err(undefined),
            (false, true) => Ok(f64::MAX),
            (false, false) => {
                let mid = 0.5 * (self.lb + self.ub);
                if mid.is_finite() {
                    Ok(mid)
                } else {
                    Ok(0.5 * self.lb + 0.5 * self.ub)
                }
            }
        }
    }

    /// Returns true if `value` lies in this interval.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        !self.is_empty() && self.lb <= value && value <= self.ub
    }

    /// Returns true if every point of this interval lies in `other`.
    #[must_use]
    pub fn is_subset(&self, other: Interval) -> bool {
        if self.is_empty() {
            return true;
        }
        !other.is_empty() && other.lb <= self.lb && self.ub <= other.ub
    }

    /// Returns true if the two intervals share at least one point.
    #[must_use]
    pub fn intersects(&self, other: Interval) -> bool {
        !Self::inter(*self, other).is_empty()
    }

    /// Returns the intersection of `a` and `b`.
    #[must_use]
    pub fn inter(a: Interval, b: Interval) -> Interval {
        let mut x = a;
        x.set_to_inter(b);
        x
    }

    /// Intersects this interval with `other` in place.
    pub fn set_to_inter(&mut self, other: Interval) {
        if self.is_empty() {
            return;
        }
        if other.is_empty() {
            self.set_to_empty();
            return;
        }
        *self = Self::bounded(self.lb.max(other.lb), self.ub.min(other.ub));
    }

    /// Returns the smallest interval containing both `a` and `b`.
    #[must_use]
    pub fn hull(a: Interval, b: Interval) -> Interval {
        let mut x = a;
        x.set_to_hull(b);
        x
    }

    /// Replaces this interval with its hull with `other`.
    pub fn set_to_hull(&mut self, other: Interval) {
        if self.is_empty() {
            *self = other;
        } else if !other.is_empty() {
            *self = Self::bounded(self.lb.min(other.lb), self.ub.max(other.ub));
        }
    }

    /// Splits this interval at `point` into `[lb, point]` and `[point, ub]`.
    ///
    /// The shared endpoint belongs to both halves.
    ///
    /// # Errors
    ///
    /// Fails if the interval is empty or degenerate, or if `point` is not
    /// strictly inside it.
    pub fn bisect_at(&self, point: f64) -> Result<(Interval, Interval), IntervalError> {
        if self.is_empty() {
            return Err(IntervalError::EmptyBisection);
        }
        if self.lb == self.ub {
            return Err(IntervalError::DegenerateBisection { value: self.lb });
        }
        if !(self.lb < point && point < self.ub) {
            return Err(IntervalError::BisectionPoint {
                point,
                lb: self.lb,
                ub: self.ub,
            });
        }
        Ok((
            Self {
                lb: self.lb,
                ub: point,
            },
            Self {
                lb: point,
                ub: self.ub,
            },
        ))
    }

    /// Splits this interval at its midpoint.
    ///
    /// # Errors
    ///
    /// Fails if the midpoint is undefined or the interval cannot be split
    /// there (see [`Interval::bisect_at`]).
    pub fn bisect(&self) -> Result<(Interval, Interval), IntervalError> {
        self.bisect_at(self.mid()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn iv(lb: f64, ub: f64) -> Interval {
        Interval::of(lb, ub).expect("valid bounds")
    }

    const INF: f64 = f64::INFINITY;

    #[test]
    fn of_rejects_reversed_and_nan_bounds() {
        assert!(matches!(
            Interval::of(2.0, 1.0),
            Err(IntervalError::ReversedBounds { .. })
        ));
        assert!(matches!(
            Interval::of(f64::NAN, 1.0),
            Err(IntervalError::NanBound)
        ));
        assert!(Interval::of(2.0, 1.0).unwrap_err().is_bad_bounds());
    }

    #[test]
    fn of_normalizes_infinite_sentinels_to_empty() {
        assert!(iv(INF, INF).is_empty());
        assert!(iv(-INF, -INF).is_empty());
        assert!(!iv(-INF, INF).is_empty());
        assert_eq!(iv(-INF, INF), Interval::all_reals());
        assert_eq!(Interval::point(0.0).unwrap(), Interval::zero());
        assert!(Interval::zero().is_degenerate());
    }

    #[test]
    fn setters_renormalize() {
        let mut x = iv(0.0, 1.0);
        x.set_lb(0.5);
        assert_eq!(x, iv(0.5, 1.0));

        x.set_ub(0.25);
        assert!(x.is_empty());

        let mut y = iv(0.0, 1.0);
        y.set(3.0, 4.0);
        assert_eq!(y, iv(3.0, 4.0));
        y.set(1.0, f64::NAN);
        assert!(y.is_empty());

        let mut z = iv(0.0, 1.0);
        z.set_lb(INF);
        assert!(z.is_empty());
    }

    #[test]
    fn assign_and_set_to_empty() {
        let mut x = iv(0.0, 1.0);
        x.assign(iv(-2.0, 2.0));
        assert_eq!(x, iv(-2.0, 2.0));
        x.set_to_empty();
        assert!(x.is_empty());
        assert_eq!(x, Interval::empty());
    }

    #[test]
    fn diam_of_bounded_interval() {
        assert_relative_eq!(iv(-3.0, 3.0).diam().unwrap(), 6.0);
        assert_relative_eq!(iv(2.0, 2.0).diam().unwrap(), 0.0);
    }

    #[test]
    fn diam_fails_on_empty_or_unbounded() {
        assert_eq!(
            Interval::empty().diam(),
            Err(IntervalError::EmptyDiameter)
        );
        assert!(matches!(
            iv(0.0, INF).diam(),
            Err(IntervalError::UnboundedDiameter { .. })
        ));
        assert!(matches!(
            Interval::all_reals().diam(),
            Err(IntervalError::UnboundedDiameter { .. })
        ));
    }

    #[test]
    fn mid_follows_extended_conventions() {
        assert_relative_eq!(Interval::all_reals().mid().unwrap(), 0.0);
        assert_eq!(iv(1.0, INF).mid().unwrap(), f64::MAX);
        assert_eq!(iv(-INF, 1.0).mid().unwrap(), -f64::MAX);
        assert_relative_eq!(iv(1.0, 3.0).mid().unwrap(), 2.0);
        assert_relative_eq!(iv(f64::MAX / 2.0, f64::MAX).mid().unwrap(), 0.75 * f64::MAX);
    }

    #[test]
    fn mid_fails_at_extreme_half_lines() {
        assert!(matches!(
            iv(-INF, -f64::MAX).mid(),
            Err(IntervalError::UndefinedMidpoint { .. })
        ));
        assert!(matches!(
            iv(f64::MAX, INF).mid(),
            Err(IntervalError::UndefinedMidpoint { .. })
        ));
        assert_eq!(Interval::empty().mid(), Err(IntervalError::EmptyMidpoint));
    }

    #[test]
    fn contains_checks_closed_bounds() {
        let x = iv(1.0, 2.0);
        assert!(x.contains(1.0));
        assert!(x.contains(2.0));
        assert!(!x.contains(2.5));
        assert!(!Interval::empty().contains(f64::NEG_INFINITY));
    }

    #[test]
    fn inter_and_hull() {
        let x = iv(0.0, 2.0);
        let y = iv(1.0, 3.0);
        assert_eq!(Interval::inter(x, y), iv(1.0, 2.0));
        assert_eq!(Interval::hull(x, y), iv(0.0, 3.0));

        let z = iv(5.0, 6.0);
        assert!(Interval::inter(x, z).is_empty());
        assert_eq!(Interval::hull(x, z), iv(0.0, 6.0));

        assert!(Interval::inter(x, Interval::empty()).is_empty());
        assert!(Interval::inter(Interval::empty(), x).is_empty());
        assert_eq!(Interval::hull(Interval::empty(), x), x);
        assert_eq!(Interval::hull(x, Interval::empty()), x);
    }

    #[test]
    fn touching_intervals_intersect_in_a_point() {
        let x = iv(0.0, 1.0);
        let y = iv(1.0, 2.0);
        assert_eq!(Interval::inter(x, y), iv(1.0, 1.0));
        assert!(x.intersects(y));
    }

    #[test]
    fn subset_relations() {
        assert!(iv(1.0, 2.0).is_subset(iv(0.0, 3.0)));
        assert!(!iv(0.0, 3.0).is_subset(iv(1.0, 2.0)));
        assert!(Interval::empty().is_subset(iv(1.0, 2.0)));
        assert!(!iv(1.0, 2.0).is_subset(Interval::empty()));
    }

    #[test]
    fn bisect_at_interior_point() {
        let (left, right) = iv(0.0, 4.0).bisect_at(1.0).unwrap();
        assert_eq!(left, iv(0.0, 1.0));
        assert_eq!(right, iv(1.0, 4.0));

        let (left, right) = iv(-3.0, 3.0).bisect().unwrap();
        assert_eq!(left, iv(-3.0, 0.0));
        assert_eq!(right, iv(0.0, 3.0));
    }

    #[test]
    fn bisect_rejects_invalid_cases() {
        assert_eq!(
            Interval::empty().bisect_at(0.0),
            Err(IntervalError::EmptyBisection)
        );
        assert!(matches!(
            iv(1.0, 1.0).bisect(),
            Err(IntervalError::DegenerateBisection { .. })
        ));
        assert!(matches!(
            iv(0.0, 1.0).bisect_at(0.0),
            Err(IntervalError::BisectionPoint { .. })
        ));
        assert!(matches!(
            iv(0.0, 1.0).bisect_at(1.0),
            Err(IntervalError::BisectionPoint { .. })
        ));
        assert!(matches!(
            iv(0.0, 1.0).bisect_at(f64::NAN),
            Err(IntervalError::BisectionPoint { .. })
        ));
    }

    #[test]
    fn bisect_unbounded_interval_at_extended_midpoint() {
        let (left, right) = Interval::all_reals().bisect().unwrap();
        assert_eq!(left, iv(-INF, 0.0));
        assert_eq!(right, iv(0.0, INF));

        let (left, right) = iv(0.0, INF).bisect().unwrap();
        assert_eq!(left, iv(0.0, f64::MAX));
        assert_eq!(right, iv(f64::MAX, INF));
    }

    fn any_interval() -> impl Strategy<Value = Interval> {
        let bounded = (-1e6..1e6f64, 0.0..1e6f64).prop_map(|(lb, width)| iv(lb, lb + width));
        let half_line = (-1e6..1e6f64, any::<bool>()).prop_map(|(v, upper)| {
            if upper { iv(v, INF) } else { iv(-INF, v) }
        });
        prop_oneof![
            6 => bounded,
            2 => half_line,
            1 => Just(Interval::all_reals()),
            1 => Just(Interval::empty()),
        ]
    }

    proptest! {
        #[test]
        fn hull_contains_both_operands(x in any_interval(), y in any_interval()) {
            let h = Interval::hull(x, y);
            prop_assert!(x.is_subset(h));
            prop_assert!(y.is_subset(h));
            prop_assert_eq!(h, Interval::hull(y, x));
        }

        #[test]
        fn intersection_lies_in_both_operands(x in any_interval(), y in any_interval()) {
            let i = Interval::inter(x, y);
            prop_assert!(i.is_subset(x));
            prop_assert!(i.is_subset(y));
            prop_assert_eq!(i, Interval::inter(y, x));
        }

        #[test]
        fn identities_of_hull_and_intersection(x in any_interval()) {
            prop_assert_eq!(Interval::inter(x, Interval::all_reals()), x);
            prop_assert_eq!(Interval::hull(x, Interval::empty()), x);
            prop_assert_eq!(Interval::hull(Interval::empty(), x), x);
            prop_assert!(Interval::inter(x, Interval::empty()).is_empty());
        }

        #[test]
        fn setting_own_bounds_gives_back_the_interval(x in any_interval()) {
            let mut same = x;
            same.set_lb(x.lb());
            same.set_ub(x.ub());
            prop_assert_eq!(same, x);

            if !x.is_empty() {
                let mut widened = Interval::all_reals();
                widened.set_lb(x.lb());
                widened.set_ub(x.ub());
                prop_assert_eq!(widened, x);
            }
        }
    }
}
