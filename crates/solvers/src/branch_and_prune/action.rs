/// Actions an observer can take during branch-and-prune search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver early and return the candidates found so far.
    StopEarly,

    /// Drop the current box.
    ///
    /// An accepted box is not recorded, and a bisecting box is not split, so
    /// no part of it is explored further. Ignored for pruned boxes.
    Discard,
}
