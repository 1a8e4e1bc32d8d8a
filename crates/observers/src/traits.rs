//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, so an
//! observer can work with any solver whose events and actions implement them.
//!
//! # Event traits
//!
//! - [`HasBox`]: events that refer to a box
//!
//! # Action traits
//!
//! - [`CanStopEarly`]: actions that can signal early termination
//! - [`CanDiscard`]: actions that can drop the current box
//!
//! # Example
//!
//! ```rust
//! use braid_core::Observer;
//! use braid_observers::traits::{CanDiscard, HasBox};
//!
//! /// Drops every box lying entirely in the half-plane x < 0.
//! struct RightHalfOnly;
//!
//! impl<E: HasBox, A: CanDiscard> Observer<E, A> for RightHalfOnly {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.bx()[0].ub() < 0.0).then(A::discard)
//!     }
//! }
//! ```

use braid_interval::IntervalBox;
use braid_solvers::branch_and_prune;

/// An event that refers to a box.
pub trait HasBox {
    /// Returns the box this event refers to.
    fn bx(&self) -> &IntervalBox;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

/// An action type that can drop the current box from the search.
pub trait CanDiscard {
    /// Returns the action that discards the current box.
    fn discard() -> Self;
}

impl HasBox for branch_and_prune::Event<'_> {
    fn bx(&self) -> &IntervalBox {
        branch_and_prune::Event::bx(self)
    }
}

impl CanStopEarly for branch_and_prune::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

impl CanDiscard for branch_and_prune::Action {
    fn discard() -> Self {
        Self::Discard
    }
}
