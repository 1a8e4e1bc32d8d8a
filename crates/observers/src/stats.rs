use braid_core::Observer;
use braid_solvers::branch_and_prune::Event;

/// Counts branch-and-prune events by kind.
///
/// Pass `&mut stats` to the solver to read the counts afterwards:
///
/// ```
/// use braid_core::{Equation, Expr};
/// use braid_interval::IntervalBox;
/// use braid_observers::Stats;
/// use braid_solvers::branch_and_prune::{Config, solve};
///
/// let constraints = vec![Equation::new(Expr::var(0).sqr() - 2.0)];
/// let initial = IntervalBox::from_bounds(&[(-2.0, 2.0)]).unwrap();
/// let mut stats = Stats::default();
///
/// let solution = solve(&constraints, initial, &Config::new(1e-3).unwrap(), &mut stats).unwrap();
/// assert_eq!(stats.accepted, solution.len());
/// assert_eq!(stats.total(), solution.branchings);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    /// Boxes ruled out by a constraint.
    pub pruned: usize,

    /// Boxes accepted as candidates, including any an observer discarded.
    pub accepted: usize,

    /// Boxes split in two.
    pub bisected: usize,
}

impl Stats {
    /// Returns the number of events seen.
    #[must_use]
    pub fn total(&self) -> usize {
        self.pruned + self.accepted + self.bisected
    }
}

impl<A> Observer<Event<'_>, A> for Stats {
    fn observe(&mut self, event: &Event<'_>) -> Option<A> {
        match event {
            Event::Pruned { .. } => self.pruned += 1,
            Event::Accepted { .. } => self.accepted += 1,
            Event::Bisecting { .. } => self.bisected += 1,
        }
        None
    }
}

/// Allows `&mut Stats` to be passed to solvers that take an observer by
/// value, so the counts can be read after the solve completes.
impl<A> Observer<Event<'_>, A> for &mut Stats {
    fn observe(&mut self, event: &Event<'_>) -> Option<A> {
        (**self).observe(event)
    }
}

#[cfg(test)]
mod tests {
    use braid_core::{Equation, Expr};
    use braid_interval::{Interval, IntervalBox};
    use braid_solvers::branch_and_prune::{Config, solve};

    use super::*;

    #[test]
    fn counts_match_the_search_tree() {
        // Unit circle over [-2, 2]^2.
        let constraints = vec![Equation::new(Expr::var(0).sqr() + Expr::var(1).sqr() - 1.0)];
        let initial = IntervalBox::filled(2, Interval::of(-2.0, 2.0).unwrap()).unwrap();
        let config = Config::new(0.05).unwrap();
        let mut stats = Stats::default();

        let solution = solve(&constraints, initial, &config, &mut stats).unwrap();

        assert_eq!(stats.accepted, solution.len());
        assert_eq!(stats.total(), solution.branchings);
        assert!(stats.pruned > 0);
        // A binary tree has one more leaf than it has inner nodes.
        assert_eq!(stats.pruned + stats.accepted, stats.bisected + 1);
    }
}
