use braid_interval::IntervalBox;

/// Events emitted by the branch-and-prune solver.
///
/// Each event carries the box being classified. `branchings` counts the
/// boxes visited so far, including this one.
#[derive(Debug, Clone, Copy)]
pub enum Event<'a> {
    /// A constraint proved the box holds no solution.
    Pruned {
        /// The box as popped from the stack, before any contraction.
        bx: &'a IntervalBox,

        /// Index of the constraint that ruled the box out.
        constraint: usize,

        branchings: usize,
    },

    /// The box is narrow enough to be a candidate solution.
    Accepted {
        bx: &'a IntervalBox,
        branchings: usize,
    },

    /// The box is about to be split.
    Bisecting {
        bx: &'a IntervalBox,

        /// Index of the component that will be split.
        axis: usize,

        branchings: usize,
    },
}

impl<'a> Event<'a> {
    /// Returns the box this event refers to.
    #[must_use]
    pub fn bx(&self) -> &'a IntervalBox {
        match self {
            Self::Pruned { bx, .. } | Self::Accepted { bx, .. } | Self::Bisecting { bx, .. } => *bx,
        }
    }

    /// Returns the number of boxes visited so far.
    #[must_use]
    pub fn branchings(&self) -> usize {
        match self {
            Self::Pruned { branchings, .. }
            | Self::Accepted { branchings, .. }
            | Self::Bisecting { branchings, .. } => *branchings,
        }
    }
}
