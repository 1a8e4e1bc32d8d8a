use thiserror::Error;

/// Errors raised by interval operations that have no meaningful result.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum IntervalError {
    #[error("bounds in reverse order: [{lb}, {ub}]")]
    ReversedBounds { lb: f64, ub: f64 },

    #[error("interval bound is not a number")]
    NanBound,

    #[error("diameter of an empty interval is undefined")]
    EmptyDiameter,

    #[error("cannot compute the diameter of [{lb}, {ub}] with infinite bounds")]
    UnboundedDiameter { lb: f64, ub: f64 },

    #[error("midpoint of an empty interval is undefined")]
    EmptyMidpoint,

    #[error("undefined midpoint for [{lb}, {ub}]")]
    UndefinedMidpoint { lb: f64, ub: f64 },

    #[error("cannot bisect an empty interval")]
    EmptyBisection,

    #[error("cannot bisect the degenerate interval [{value}, {value}]")]
    DegenerateBisection { value: f64 },

    #[error("bisection point {point} not strictly inside [{lb}, {ub}]")]
    BisectionPoint { point: f64, lb: f64, ub: f64 },
}

impl IntervalError {
    /// Returns true if the error comes from constructing an interval with
    /// invalid bounds, as opposed to an invalid operation on a valid one.
    #[must_use]
    pub fn is_bad_bounds(&self) -> bool {
        matches!(self, Self::ReversedBounds { .. } | Self::NanBound)
    }
}

/// Errors raised by box operations.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum BoxError {
    #[error("box dimension must be at least 1")]
    Dimension,

    #[error("diameter of an empty box is undefined")]
    Empty,

    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    #[error(transparent)]
    Interval(#[from] IntervalError),
}
