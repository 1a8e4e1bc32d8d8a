//! Core traits and types for the Braid solver.
//!
//! This crate defines the shared abstractions that solvers, observers, and
//! problem code build on:
//!
//! - [`Function`]: an inclusion function mapping a box to an interval
//! - [`Constraint`]: a test that can prove a box holds no solution
//! - [`Equation`]: the constraint `f(x) = 0` for any [`Function`]
//! - [`Expr`]: an expression tree with forward evaluation and backward
//!   projection
//! - [`Observer`]: receives solver events and optionally returns control
//!   actions
//!
//! # Example
//!
//! ```
//! use braid_core::{Constraint, Equation, Expr};
//! use braid_interval::IntervalBox;
//!
//! // The unit circle, x^2 + y^2 - 1 = 0.
//! let circle = Equation::new(Expr::var(0).sqr() + Expr::var(1).sqr() - 1.0);
//!
//! let far = IntervalBox::from_bounds(&[(2.0, 3.0), (2.0, 3.0)]).unwrap();
//! assert!(circle.violated(&far));
//!
//! let near = IntervalBox::from_bounds(&[(0.5, 1.5), (-0.5, 0.5)]).unwrap();
//! assert!(!circle.violated(&near));
//! ```

mod constraint;
mod expr;
mod function;
mod observer;

pub use constraint::{Constraint, Equation};
pub use expr::Expr;
pub use function::Function;
pub use observer::Observer;
