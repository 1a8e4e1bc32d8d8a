use thiserror::Error;

/// Configuration for the branch-and-prune solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    eps: f64,
    capacity: usize,
    overflow: Overflow,
    max_branchings: Option<usize>,
    order: Order,
    pruning: Pruning,
}

/// What to do when a candidate is accepted but the solution list is full.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overflow {
    /// Stop with [`Status::CapacityReached`](super::Status::CapacityReached).
    #[default]
    Stop,

    /// Keep recording beyond the capacity.
    Grow,
}

/// Which half of a bisected box is explored first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Order {
    #[default]
    LowerFirst,
    UpperFirst,
}

/// How constraints are used to discard boxes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pruning {
    /// Discard boxes on which a constraint is violated.
    #[default]
    Evaluate,

    /// Also narrow each box with every constraint before the width test.
    Contract,
}

/// Errors that can occur when validating a branch-and-prune solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("eps must be finite and non-negative")]
    Eps,

    #[error("capacity must be at least 1")]
    Capacity,
}

const DEFAULT_CAPACITY: usize = 1000;

impl Default for Config {
    fn default() -> Self {
        // Known-good value, unwrap is safe
        Self::new(1e-4).unwrap()
    }
}

impl Config {
    /// Creates a new config with tolerance `eps` and default settings.
    ///
    /// # Errors
    ///
    /// Returns an error if `eps` is negative or non-finite.
    pub fn new(eps: f64) -> Result<Self, ConfigError> {
        if !eps.is_finite() || eps < 0.0 {
            return Err(ConfigError::Eps);
        }

        Ok(Self {
            eps,
            capacity: DEFAULT_CAPACITY,
            overflow: Overflow::default(),
            max_branchings: None,
            order: Order::default(),
            pruning: Pruning::default(),
        })
    }

    /// Sets the number of candidates the solution list holds.
    ///
    /// # Errors
    ///
    /// Returns an error if `capacity` is zero.
    pub fn with_capacity(self, capacity: usize) -> Result<Self, ConfigError> {
        if capacity == 0 {
            return Err(ConfigError::Capacity);
        }
        Ok(Self { capacity, ..self })
    }

    /// Sets the behavior when the solution list is full.
    #[must_use]
    pub fn with_overflow(self, overflow: Overflow) -> Self {
        Self { overflow, ..self }
    }

    /// Limits the number of boxes the search may visit.
    #[must_use]
    pub fn with_max_branchings(self, max_branchings: usize) -> Self {
        Self {
            max_branchings: Some(max_branchings),
            ..self
        }
    }

    /// Sets which half of a bisected box is explored first.
    #[must_use]
    pub fn with_order(self, order: Order) -> Self {
        Self { order, ..self }
    }

    /// Sets how constraints discard boxes.
    #[must_use]
    pub fn with_pruning(self, pruning: Pruning) -> Self {
        Self { pruning, ..self }
    }

    /// Returns the width below which a box is accepted.
    #[must_use]
    pub fn eps(&self) -> f64 {
        self.eps
    }

    /// Returns the capacity of the solution list.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub fn overflow(&self) -> Overflow {
        self.overflow
    }

    /// Returns the branching limit, if any.
    #[must_use]
    pub fn max_branchings(&self) -> Option<usize> {
        self.max_branchings
    }

    #[must_use]
    pub fn order(&self) -> Order {
        self.order
    }

    #[must_use]
    pub fn pruning(&self) -> Pruning {
        self.pruning
    }
}
