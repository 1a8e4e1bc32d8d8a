use braid_interval::{BoxError, IntervalError};

use super::ConfigError;

/// Errors that can occur during branch-and-prune search.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("interval error: {0}")]
    Interval(IntervalError),

    #[error("box error: {0}")]
    Box(BoxError),

    #[error("invalid config: {0}")]
    Config(#[from] ConfigError),
}

impl From<IntervalError> for Error {
    fn from(error: IntervalError) -> Self {
        Self::Interval(error)
    }
}

/// Box errors that wrap an interval error are reported as interval errors.
impl From<BoxError> for Error {
    fn from(error: BoxError) -> Self {
        match error {
            BoxError::Interval(e) => Self::Interval(e),
            other => Self::Box(other),
        }
    }
}
