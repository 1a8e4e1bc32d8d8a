use braid_core::Constraint;
use braid_interval::IntervalBox;
use tracing::info;

use super::{Config, ConfigError, Error, Solution, Status, solve_unobserved};

/// A constraint system that can be solved repeatedly over different boxes.
///
/// Each call to [`Solver::solve`] replaces the results of the previous one.
///
/// ```
/// use braid_core::{Equation, Expr};
/// use braid_interval::IntervalBox;
/// use braid_solvers::branch_and_prune::Solver;
///
/// // x^2 - 2 = 0
/// let mut solver = Solver::new(vec![Equation::new(Expr::var(0).sqr() - 2.0)], 10).unwrap();
///
/// let initial = IntervalBox::from_bounds(&[(0.0, 4.0)]).unwrap();
/// assert!(solver.solve(initial, 1e-6).unwrap());
/// for bx in solver.solutions() {
///     assert!((bx[0].mid().unwrap() - 2.0_f64.sqrt()).abs() < 1e-5);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Solver<C> {
    constraints: Vec<C>,
    capacity: usize,
    solution: Option<Solution>,
}

impl<C: Constraint> Solver<C> {
    /// Creates a solver that keeps at most `capacity` candidates per search.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Capacity`] if `capacity` is zero.
    pub fn new(constraints: Vec<C>, capacity: usize) -> Result<Self, ConfigError> {
        if capacity == 0 {
            return Err(ConfigError::Capacity);
        }
        Ok(Self {
            constraints,
            capacity,
            solution: None,
        })
    }

    /// Searches `initial` for candidates no wider than `eps`.
    ///
    /// Returns true if at least one candidate was found.
    ///
    /// # Errors
    ///
    /// Returns an error if `eps` is invalid or a box cannot be measured or
    /// bisected. Results of a previous search are cleared either way.
    pub fn solve(&mut self, initial: IntervalBox, eps: f64) -> Result<bool, Error> {
        self.solution = None;

        let config = Config::new(eps)?.with_capacity(self.capacity)?;
        let solution = solve_unobserved(&self.constraints, initial, &config)?;
        info!(
            solutions = solution.len(),
            branchings = solution.branchings,
            status = %solution.status,
            "search finished"
        );

        let found = solution.found();
        self.solution = Some(solution);
        Ok(found)
    }

    /// Returns the constraints this solver searches with.
    pub fn constraints(&self) -> &[C] {
        &self.constraints
    }

    /// Returns the full result of the last search, if it succeeded.
    pub fn solution(&self) -> Option<&Solution> {
        self.solution.as_ref()
    }

    /// Returns the candidates of the last search.
    pub fn solutions(&self) -> &[IntervalBox] {
        self.solution
            .as_ref()
            .map(|s| s.boxes.as_slice())
            .unwrap_or_default()
    }

    pub fn num_solutions(&self) -> usize {
        self.solutions().len()
    }

    /// Returns the number of boxes visited by the last search.
    pub fn branchings(&self) -> usize {
        self.solution.as_ref().map_or(0, |s| s.branchings)
    }

    /// Returns the status of the last search.
    pub fn status(&self) -> Option<Status> {
        self.solution.as_ref().map(|s| s.status)
    }
}
