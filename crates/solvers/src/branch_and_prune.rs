//! Branch-and-prune search for the solutions of a constraint system.
//!
//! # Algorithm
//!
//! The solver keeps a stack of boxes seeded with the initial box. Each step
//! pops a box and classifies it:
//!
//! 1. If any constraint proves the box holds no solution, the box is pruned.
//! 2. Otherwise, if its widest component is no wider than `eps`, the box is
//!    accepted as a candidate solution.
//! 3. Otherwise the box is bisected at the midpoint of its widest component
//!    and both halves are pushed back onto the stack.
//!
//! Search is depth-first, so candidates appear in the order the search
//! reaches them. With [`Order::LowerFirst`] (the default) the lower half of
//! each bisection is explored before the upper half.
//!
//! # Pruning
//!
//! [`Pruning::Evaluate`] only asks each constraint whether the box is
//! violated. [`Pruning::Contract`] also lets each constraint narrow the box
//! before the width test, which usually needs far fewer bisections.
//!
//! # Limitations
//!
//! - **Candidates, not proofs**: an accepted box may hold no solution, and a
//!   single solution may be covered by several adjacent boxes
//! - **Bounded boxes only**: an unbounded component cannot be bisected and
//!   fails with an interval error
//! - With `eps = 0` the search bisects until a component can no longer be
//!   split and fails with an interval error
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per classified box:
//!
//! - [`Event::Pruned`]: a constraint ruled the box out
//! - [`Event::Accepted`]: the box is narrow enough to be a candidate
//! - [`Event::Bisecting`]: the box is about to be split
//!
//! Observers can return [`Action::StopEarly`] to halt immediately, or
//! [`Action::Discard`] to drop an accepted or bisecting box.

mod action;
mod config;
mod error;
mod event;
mod search;
mod solution;
mod solver;


pub use action::Action;
pub use config::{Config, ConfigError, Order, Overflow, Pruning};
pub use error::Error;
pub use event::Event;
pub use solution::{Report, Solution, Status};
pub use solver::Solver;

use braid_core::{Constraint, Observer};
use braid_interval::IntervalBox;

/// Searches `initial` for the boxes that may satisfy every constraint.
///
/// The observer receives an [`Event`] for each classified box.
/// See the [module docs](self) for details on events and observer actions.
///
/// # Errors
///
/// Returns an error if a box cannot be measured or bisected, for example
/// when a component is unbounded or too narrow to split.
pub fn solve<C, Obs>(
    constraints: &[C],
    initial: IntervalBox,
    config: &Config,
    observer: Obs,
) -> Result<Solution, Error>
where
    C: Constraint,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    search::search(constraints, initial, config, observer)
}

/// Searches `initial` without observer support.
///
/// This is a convenience wrapper around [`solve`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error if a box cannot be measured or bisected.
pub fn solve_unobserved<C>(
    constraints: &[C],
    initial: IntervalBox,
    config: &Config,
) -> Result<Solution, Error>
where
    C: Constraint,
{
    solve(constraints, initial, config, ())
}
