//! Solvers for systems of interval constraints.
//!
//! A problem is a slice of [`Constraint`]s over an initial [`IntervalBox`].
//! Solvers in this crate search the box for the sub-boxes that may hold a
//! point satisfying every constraint.
//!
//! # Solvers
//!
//! - [`branch_and_prune`]: depth-first bisection that discards boxes proven
//!   infeasible and collects the ones narrower than a tolerance
//!
//! [`Constraint`]: braid_core::Constraint
//! [`IntervalBox`]: braid_interval::IntervalBox

pub mod branch_and_prune;
