use braid_interval::{Interval, IntervalBox};

use crate::Function;

/// A condition that can prove a box contains no solution.
///
/// `violated` must be sound: it may only return true when no point of the box
/// satisfies the condition. Returning false promises nothing, so a box that
/// passes may still be solution-free.
///
/// Heterogeneous constraint sets can be held as `Vec<Box<dyn Constraint>>`.
pub trait Constraint {
    /// Returns true if no point of `bx` satisfies this constraint.
    fn violated(&self, bx: &IntervalBox) -> bool;

    /// Narrows `bx` without removing any point that satisfies this
    /// constraint.
    ///
    /// Returns true if the box is non-empty afterwards. The provided
    /// implementation leaves the box untouched and returns `!violated(bx)`.
    fn contract(&self, bx: &mut IntervalBox) -> bool {
        !bx.is_empty() && !self.violated(bx)
    }
}

impl<C: Constraint + ?Sized> Constraint for &C {
    fn violated(&self, bx: &IntervalBox) -> bool {
        (**self).violated(bx)
    }

    fn contract(&self, bx: &mut IntervalBox) -> bool {
        (**self).contract(bx)
    }
}

impl<C: Constraint + ?Sized> Constraint for Box<C> {
    fn violated(&self, bx: &IntervalBox) -> bool {
        (**self).violated(bx)
    }

    fn contract(&self, bx: &mut IntervalBox) -> bool {
        (**self).contract(bx)
    }
}

/// The equation `f(x) = 0`.
///
/// Violated on a box exactly when `f.eval(box)` excludes zero. Contraction
/// projects `f` onto `[0, 0]`.
#[derive(Debug, Clone)]
pub struct Equation<F> {
    f: F,
}

impl<F: Function> Equation<F> {
    /// Creates the equation `f(x) = 0`.
    pub fn new(f: F) -> Self {
        Self { f }
    }

    /// Returns the function whose zeros this equation describes.
    pub fn function(&self) -> &F {
        &self.f
    }
}

impl<F: Function> Constraint for Equation<F> {
    fn violated(&self, bx: &IntervalBox) -> bool {
        !self.f.eval(bx).contains(0.0)
    }

    fn contract(&self, bx: &mut IntervalBox) -> bool {
        self.f.project(bx, Interval::zero())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::Expr;

    /// Always claims to be violated.
    struct Never;

    impl Constraint for Never {
        fn violated(&self, _bx: &IntervalBox) -> bool {
            true
        }
    }

    fn unit_square() -> IntervalBox {
        IntervalBox::from_bounds(&[(0.0, 1.0), (0.0, 1.0)]).unwrap()
    }

    #[test]
    fn equation_from_closure() {
        // x0 - 2 = 0
        let eq = Equation::new(|bx: &IntervalBox| bx[0] - Interval::point(2.0).unwrap());
        assert!(eq.violated(&unit_square()));

        let bx = IntervalBox::from_bounds(&[(1.5, 2.5), (0.0, 1.0)]).unwrap();
        assert!(!eq.violated(&bx));
    }

    #[test]
    fn equation_is_violated_on_empty_box() {
        let eq = Equation::new(Expr::var(0));
        let mut bx = unit_square();
        assert!(!eq.violated(&bx));
        bx.set_to_empty();
        assert!(eq.violated(&bx));
    }

    #[test]
    fn default_contract_leaves_box_untouched() {
        let eq = Equation::new(|bx: &IntervalBox| bx[0] + bx[1]);
        let mut bx = IntervalBox::from_bounds(&[(-1.0, 1.0), (-1.0, 1.0)]).unwrap();
        assert!(eq.contract(&mut bx));
        assert_eq!(bx, IntervalBox::from_bounds(&[(-1.0, 1.0), (-1.0, 1.0)]).unwrap());

        let mut bx = unit_square();
        bx.set(0, Interval::of(0.5, 1.0).unwrap());
        assert!(!eq.contract(&mut bx));
        assert!(bx.is_empty());

        let mut bx = unit_square();
        assert!(!Never.contract(&mut bx));
        assert!(!bx.is_empty());
    }

    #[test]
    fn expression_equation_contracts() {
        // x0 + x1 = 0 on [-1, 1] x [0.5, 1] leaves x0 in [-1, -0.5].
        let eq = Equation::new(Expr::var(0) + Expr::var(1));
        let mut bx = IntervalBox::from_bounds(&[(-1.0, 1.0), (0.5, 1.0)]).unwrap();
        assert!(eq.contract(&mut bx));
        assert_eq!(bx[0], Interval::of(-1.0, -0.5).unwrap());
        assert_eq!(bx[1], Interval::of(0.5, 1.0).unwrap());
    }

    fn first_violated<C: Constraint>(constraints: &[C], bx: &IntervalBox) -> Option<usize> {
        constraints.iter().position(|c| c.violated(bx))
    }

    #[test]
    fn heterogeneous_constraint_sets() {
        let constraints: Vec<Box<dyn Constraint>> = vec![
            Box::new(Equation::new(Expr::var(0) - 0.5)),
            Box::new(Never),
        ];
        let bx = unit_square();
        assert_eq!(first_violated(&constraints, &bx), Some(1));

        let by_ref: Vec<&dyn Constraint> = constraints.iter().map(|c| &**c).collect();
        assert_eq!(first_violated(&by_ref, &bx), Some(1));
        assert_eq!(first_violated(&by_ref[..1], &bx), None);
    }
}
