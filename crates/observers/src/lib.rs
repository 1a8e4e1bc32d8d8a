//! Reusable observers for the Braid solver.
//!
//! This crate provides [`Observer`] implementations and capability traits
//! that work across solvers.
//!
//! # Modules
//!
//! - [`traits`]: capability traits for cross-solver observers
//!   ([`HasBox`], [`CanStopEarly`], [`CanDiscard`])
//!
//! # Observers
//!
//! - [`TraceObserver`]: logs every event through `tracing`
//! - [`Stats`]: counts pruned, accepted, and bisected boxes
//!
//! [`Observer`]: braid_core::Observer
//! [`HasBox`]: traits::HasBox
//! [`CanStopEarly`]: traits::CanStopEarly
//! [`CanDiscard`]: traits::CanDiscard

pub mod traits;

mod stats;
mod trace;

pub use stats::Stats;
pub use trace::TraceObserver;
