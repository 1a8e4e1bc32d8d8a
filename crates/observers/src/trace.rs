use braid_core::Observer;
use braid_solvers::branch_and_prune::Event;
use tracing::{debug, trace};

/// Logs every branch-and-prune event through `tracing`.
///
/// Accepted boxes are logged at `DEBUG`; pruned and bisected boxes at
/// `TRACE`. Never requests an action.
#[derive(Debug, Clone, Copy, Default)]
pub struct TraceObserver;

impl TraceObserver {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl<A> Observer<Event<'_>, A> for TraceObserver {
    fn observe(&mut self, event: &Event<'_>) -> Option<A> {
        match *event {
            Event::Pruned {
                bx,
                constraint,
                branchings,
            } => trace!(branchings, constraint, %bx, "pruned"),
            Event::Accepted { bx, branchings } => debug!(branchings, %bx, "accepted"),
            Event::Bisecting {
                bx,
                axis,
                branchings,
            } => trace!(branchings, axis, %bx, "bisecting"),
        }
        None
    }
}
