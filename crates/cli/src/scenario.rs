//! The two-circle demo problems.

use braid_core::{Equation, Expr};
use braid_interval::{BoxError, Interval, IntervalBox};

/// A demo problem over the square `[-3, 3]^2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Scenario {
    /// Unit circle and a circle of radius 2.5 centred at (2, 1)
    Intersecting,
    /// Unit circles centred at (0, 0) and (2, 0), touching at (1, 0)
    Tangent,
    /// x^2 + y^2 + 1 = 0, which has no real solution
    #[value(name = "none")]
    NoSolution,
}

impl Scenario {
    /// Returns the equations of this problem.
    pub fn constraints(self) -> Vec<Equation<Expr>> {
        match self {
            Self::Intersecting => vec![circle(0.0, 0.0, 1.0), circle(2.0, 1.0, 2.5)],
            Self::Tangent => vec![circle(0.0, 0.0, 1.0), circle(2.0, 0.0, 1.0)],
            Self::NoSolution => vec![Equation::new(
                Expr::var(0).sqr() + Expr::var(1).sqr() + 1.0,
            )],
        }
    }

    /// Returns the box the search starts from.
    pub fn initial_box(self) -> Result<IntervalBox, BoxError> {
        IntervalBox::filled(2, Interval::of(-3.0, 3.0)?)
    }
}

/// The circle of radius `r` centred at `(cx, cy)`, as
/// `(x - cx)^2 + (y - cy)^2 - r^2 = 0`.
fn circle(cx: f64, cy: f64, r: f64) -> Equation<Expr> {
    let x = Expr::var(0);
    let y = Expr::var(1);
    Equation::new((x - cx).sqr() + (y - cy).sqr() - r * r)
}
