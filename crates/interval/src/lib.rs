//! Interval arithmetic kernel for the Braid solver.
//!
//! This crate provides the numeric foundation that constraints and solvers
//! build on:
//!
//! - [`Interval`]: a closed interval of `f64` with an explicit empty value,
//!   infinite bounds, and outward-rounded arithmetic
//! - [`contract`]: backward (contractor) operators that narrow inputs to the
//!   part consistent with a known output range
//! - [`IntervalBox`]: a product of intervals that stays globally empty once
//!   any component becomes empty
//! - [`fmt`]: display with explicit fractional-digit precision
//!
//! Empty results are values, not errors: every arithmetic operator is total
//! over empty inputs and returns empty. Errors are reserved for operations
//! with no meaningful answer (the diameter of an unbounded interval, a
//! bisection point outside the interval, a zero-dimensional box).
//!
//! # Example
//!
//! ```
//! use braid_interval::Interval;
//!
//! let x = Interval::of(-2.0, 3.0).unwrap();
//! assert_eq!(x.sqr(), Interval::of(0.0, 9.0).unwrap());
//! assert_eq!(x.to_string(), "[-2.00,3.00]");
//! ```

mod arith;
mod error;
mod interval;
mod interval_box;
mod round;

pub mod contract;
pub mod fmt;

pub use error::{BoxError, IntervalError};
pub use interval::Interval;
pub use interval_box::IntervalBox;
