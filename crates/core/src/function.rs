use braid_interval::{Interval, IntervalBox};

/// An inclusion function `f: R^n -> R`.
///
/// For every point `x` in a box `b`, `f(x)` must lie in `eval(b)`. The
/// result may overestimate the true range but never underestimate it, and an
/// empty box must evaluate to the empty interval.
///
/// Closures `Fn(&IntervalBox) -> Interval` implement this trait.
pub trait Function {
    /// Returns an enclosure of the range of the function over `bx`.
    fn eval(&self, bx: &IntervalBox) -> Interval;

    /// Narrows `bx` to the points whose image may lie in `y`.
    ///
    /// Returns true if the box is non-empty afterwards. The provided
    /// implementation only checks that `eval(bx)` meets `y` and empties the
    /// box when it does not.
    fn project(&self, bx: &mut IntervalBox, y: Interval) -> bool {
        if bx.is_empty() {
            return false;
        }
        if self.eval(bx).intersects(y) {
            true
        } else {
            bx.set_to_empty();
            false
        }
    }
}

impl<F> Function for F
where
    F: Fn(&IntervalBox) -> Interval,
{
    fn eval(&self, bx: &IntervalBox) -> Interval {
        self(bx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iv(lb: f64, ub: f64) -> Interval {
        Interval::of(lb, ub).expect("valid bounds")
    }

    fn sum_of_components(bx: &IntervalBox) -> Interval {
        bx.iter().fold(Interval::zero(), |acc, x| acc + *x)
    }

    #[test]
    fn closures_are_functions() {
        let f = |bx: &IntervalBox| bx[0].sqr();
        let bx = IntervalBox::filled(1, iv(-2.0, 3.0)).unwrap();
        assert_eq!(f.eval(&bx), iv(0.0, 9.0));

        let g = &sum_of_components;
        let bx = IntervalBox::from_bounds(&[(1.0, 2.0), (3.0, 4.0)]).unwrap();
        assert_eq!(g.eval(&bx), iv(4.0, 6.0));
    }

    #[test]
    fn default_projection_only_filters() {
        let f = sum_of_components;
        let mut bx = IntervalBox::from_bounds(&[(1.0, 2.0), (3.0, 4.0)]).unwrap();

        assert!(f.project(&mut bx, iv(5.0, 10.0)));
        assert_eq!(bx, IntervalBox::from_bounds(&[(1.0, 2.0), (3.0, 4.0)]).unwrap());

        assert!(!f.project(&mut bx, iv(7.0, 10.0)));
        assert!(bx.is_empty());
        assert!(!f.project(&mut bx, Interval::all_reals()));
    }
}
