use braid_core::{Constraint, Observer};
use braid_interval::IntervalBox;
use tracing::{debug, trace};

use super::{Action, Config, Error, Event, Order, Overflow, Pruning, Solution, Status};

/// Core branch-and-prune loop.
pub(super) fn search<C, Obs>(
    constraints: &[C],
    initial: IntervalBox,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    C: Constraint,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    debug!(
        dim = initial.dim(),
        constraints = constraints.len(),
        eps = config.eps(),
        "starting branch-and-prune"
    );

    let mut state = State::new(initial);

    while let Some(bx) = state.stack.pop() {
        if config.max_branchings().is_some_and(|max| state.branchings >= max) {
            return Ok(state.finish(Status::MaxBranchings));
        }
        state.branchings += 1;
        let branchings = state.branchings;
        trace!(branchings, %bx, "visiting box");

        let bx = match prune(constraints, bx, config.pruning()) {
            Pruned::Kept(bx) => bx,
            Pruned::By { bx, constraint } => {
                let event = Event::Pruned {
                    bx: &bx,
                    constraint,
                    branchings,
                };
                if let Some(Action::StopEarly) = observer.observe(&event) {
                    return Ok(state.finish(Status::StoppedByObserver));
                }
                continue;
            }
        };

        if bx.max_diam()? <= config.eps() {
            // A full list ends the search before the box is announced.
            if state.boxes.len() >= config.capacity() && config.overflow() == Overflow::Stop {
                return Ok(state.finish(Status::CapacityReached));
            }
            match observer.observe(&Event::Accepted {
                bx: &bx,
                branchings,
            }) {
                Some(Action::StopEarly) => return Ok(state.finish(Status::StoppedByObserver)),
                Some(Action::Discard) => continue,
                None => {}
            }
            state.boxes.push(bx);
            continue;
        }

        let axis = bx.widest()?;
        match observer.observe(&Event::Bisecting {
            bx: &bx,
            axis,
            branchings,
        }) {
            Some(Action::StopEarly) => return Ok(state.finish(Status::StoppedByObserver)),
            Some(Action::Discard) => continue,
            None => {}
        }

        let (lower, upper) = bx.bisect_axis(axis)?;
        match config.order() {
            Order::LowerFirst => {
                state.stack.push(upper);
                state.stack.push(lower);
            }
            Order::UpperFirst => {
                state.stack.push(lower);
                state.stack.push(upper);
            }
        }
    }

    Ok(state.finish(Status::Exhausted))
}

/// Search state: the pending boxes and the candidates found so far.
struct State {
    stack: Vec<IntervalBox>,
    boxes: Vec<IntervalBox>,
    branchings: usize,
}

impl State {
    fn new(initial: IntervalBox) -> Self {
        Self {
            stack: vec![initial],
            boxes: Vec::new(),
            branchings: 0,
        }
    }

    fn finish(self, status: Status) -> Solution {
        debug!(
            %status,
            solutions = self.boxes.len(),
            branchings = self.branchings,
            pending = self.stack.len(),
            "branch-and-prune finished"
        );
        Solution {
            status,
            boxes: self.boxes,
            branchings: self.branchings,
        }
    }
}

enum Pruned {
    Kept(IntervalBox),
    By { bx: IntervalBox, constraint: usize },
}

/// Applies the constraints to `bx`.
///
/// With [`Pruning::Contract`] a kept box is the contracted one, and a pruned
/// box is reported as it was before contraction.
fn prune<C: Constraint>(constraints: &[C], bx: IntervalBox, pruning: Pruning) -> Pruned {
    if let Some(constraint) = constraints.iter().position(|c| c.violated(&bx)) {
        return Pruned::By { bx, constraint };
    }
    if pruning == Pruning::Evaluate {
        return Pruned::Kept(bx);
    }

    let mut contracted = bx.clone();
    let emptied = constraints.iter().position(|c| !c.contract(&mut contracted));
    // Contraction by a later constraint can leave an earlier one violated.
    let violated = || constraints.iter().position(|c| c.violated(&contracted));
    match emptied.or_else(violated) {
        Some(constraint) => Pruned::By { bx, constraint },
        None => Pruned::Kept(contracted),
    }
}
