//! Expression trees over box components.

use std::ops::{Add, Mul, Neg, Sub};

use braid_interval::{Interval, IntervalBox, contract};

use crate::Function;

/// An arithmetic expression in the components of a box.
///
/// Build expressions with [`Expr::var`], [`Expr::value`], the `sqr`, `sqrt`,
/// and `scale` methods, and the `+`, `-`, unary `-`, and `f64 * Expr`
/// operators:
///
/// ```
/// use braid_core::Expr;
/// use braid_interval::{Interval, IntervalBox};
///
/// // (x - 2)^2 + (y - 1)^2 - 6.25
/// let x = Expr::var(0);
/// let y = Expr::var(1);
/// let circle = (x - 2.0).sqr() + (y - 1.0).sqr() - 6.25;
///
/// let bx = IntervalBox::from_bounds(&[(2.0, 2.0), (3.5, 3.5)]).unwrap();
/// assert_eq!(circle.eval(&bx), Interval::zero());
/// ```
///
/// Evaluation is the natural interval extension of the tree, so repeated
/// variables may widen the result.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// The component of the box at this index.
    Var(usize),
    Const(Interval),
    Neg(Box<Expr>),
    Add(Box<Expr>, Box<Expr>),
    Sub(Box<Expr>, Box<Expr>),
    /// Multiplication by a scalar.
    Scale(f64, Box<Expr>),
    Sqr(Box<Expr>),
    Sqrt(Box<Expr>),
}

impl Expr {
    /// Returns the variable bound to box component `index`.
    #[must_use]
    pub fn var(index: usize) -> Self {
        Self::Var(index)
    }

    /// Returns a constant interval.
    #[must_use]
    pub fn constant(x: Interval) -> Self {
        Self::Const(x)
    }

    /// Returns the constant `[value, value]`.
    ///
    /// A NaN value yields the empty constant.
    #[must_use]
    pub fn value(value: f64) -> Self {
        Self::Const(Interval::point(value).unwrap_or_else(|_| Interval::empty()))
    }

    /// Returns `self^2`.
    #[must_use]
    pub fn sqr(self) -> Self {
        Self::Sqr(Box::new(self))
    }

    /// Returns `sqrt(self)`.
    #[must_use]
    pub fn sqrt(self) -> Self {
        Self::Sqrt(Box::new(self))
    }

    /// Returns `a * self`.
    #[must_use]
    pub fn scale(self, a: f64) -> Self {
        Self::Scale(a, Box::new(self))
    }

    /// Evaluates the expression over `bx`.
    ///
    /// A variable whose index is outside the box evaluates to all reals.
    /// Every expression evaluates to empty over an empty box.
    #[must_use]
    pub fn eval(&self, bx: &IntervalBox) -> Interval {
        if bx.is_empty() {
            return Interval::empty();
        }
        match self {
            Self::Var(i) => bx.as_slice().get(*i).copied().unwrap_or_else(Interval::all_reals),
            Self::Const(c) => *c,
            Self::Neg(e) => -e.eval(bx),
            Self::Add(a, b) => a.eval(bx) + b.eval(bx),
            Self::Sub(a, b) => a.eval(bx) - b.eval(bx),
            Self::Scale(k, e) => e.eval(bx).scale(*k),
            Self::Sqr(e) => e.eval(bx).sqr(),
            Self::Sqrt(e) => e.eval(bx).sqrt(),
        }
    }

    /// Narrows `bx` to the points whose image may lie in `y`.
    ///
    /// Each node intersects its forward range with the target, then passes
    /// the narrowed range to its children through the backward operators of
    /// [`braid_interval::contract`]. Variables intersect the corresponding box
    /// component. No point whose image lies in `y` is ever removed.
    ///
    /// Returns true if the box is non-empty afterwards.
    pub fn project(&self, bx: &mut IntervalBox, y: Interval) -> bool {
        if bx.is_empty() {
            return false;
        }
        let y = Interval::inter(y, self.eval(bx));
        if y.is_empty() {
            bx.set_to_empty();
            return false;
        }

        match self {
            Self::Var(i) => *i >= bx.dim() || bx.set_to_inter(*i, y),
            Self::Const(_) => true,
            Self::Neg(e) => {
                let mut x = e.eval(bx);
                contract::neg_bwd(y, &mut x);
                e.project(bx, x)
            }
            Self::Add(a, b) => {
                let (mut xa, mut xb) = (a.eval(bx), b.eval(bx));
                contract::add_bwd(y, &mut xa, &mut xb);
                a.project(bx, xa) && b.project(bx, xb)
            }
            Self::Sub(a, b) => {
                let (mut xa, mut xb) = (a.eval(bx), b.eval(bx));
                contract::sub_bwd(y, &mut xa, &mut xb);
                a.project(bx, xa) && b.project(bx, xb)
            }
            Self::Scale(k, e) => {
                let mut x = e.eval(bx);
                contract::scale_bwd(*k, y, &mut x);
                e.project(bx, x)
            }
            Self::Sqr(e) => {
                let mut x = e.eval(bx);
                contract::sqr_bwd(y, &mut x);
                e.project(bx, x)
            }
            Self::Sqrt(e) => {
                let mut x = e.eval(bx);
                contract::sqrt_bwd(y, &mut x);
                e.project(bx, x)
            }
        }
    }
}

impl Function for Expr {
    fn eval(&self, bx: &IntervalBox) -> Interval {
        Expr::eval(self, bx)
    }

    fn project(&self, bx: &mut IntervalBox, y: Interval) -> bool {
        Expr::project(self, bx, y)
    }
}

impl Neg for Expr {
    type Output = Expr;

    fn neg(self) -> Expr {
        Expr::Neg(Box::new(self))
    }
}

impl Add for Expr {
    type Output = Expr;

    fn add(self, rhs: Expr) -> Expr {
        Expr::Add(Box::new(self), Box::new(rhs))
    }
}

impl Sub for Expr {
    type Output = Expr;

    fn sub(self, rhs: Expr) -> Expr {
        Expr::Sub(Box::new(self), Box::new(rhs))
    }
}

impl Add<f64> for Expr {
    type Output = Expr;

    fn add(self, rhs: f64) -> Expr {
        self + Expr::value(rhs)
    }
}

impl Sub<f64> for Expr {
    type Output = Expr;

    fn sub(self, rhs: f64) -> Expr {
        self - Expr::value(rhs)
    }
}

impl Mul<Expr> for f64 {
    type Output = Expr;

    fn mul(self, rhs: Expr) -> Expr {
        rhs.scale(self)
    }
}
