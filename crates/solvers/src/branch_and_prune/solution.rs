use std::fmt;

use braid_interval::{IntervalBox, fmt::Precision};

/// Indicates why the search ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Every box was classified.
    Exhausted,

    /// A candidate was accepted while the solution list was full.
    CapacityReached,

    /// The branching limit was reached.
    MaxBranchings,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Exhausted => "search exhausted",
            Self::CapacityReached => "solution capacity reached",
            Self::MaxBranchings => "branching limit reached",
            Self::StoppedByObserver => "stopped by observer",
        })
    }
}

/// The result of a branch-and-prune search.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// Candidate boxes in the order they were accepted.
    pub boxes: Vec<IntervalBox>,

    /// Number of boxes visited.
    pub branchings: usize,
}

impl Solution {
    /// Returns true if at least one candidate was found.
    #[must_use]
    pub fn found(&self) -> bool {
        !self.boxes.is_empty()
    }

    /// Returns the number of candidates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    /// Returns true if no candidate was found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    /// Returns a report that displays the boxes with `precision`.
    #[must_use]
    pub fn report(&self, precision: Precision) -> Report<'_> {
        Report {
            solution: self,
            precision,
        }
    }
}

/// Human-readable summary of a [`Solution`].
///
/// The first line gives the candidate count, the branching count, and the
/// status; each candidate follows on its own line.
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    solution: &'a Solution,
    precision: Precision,
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Solution {
            status,
            boxes,
            branchings,
        } = self.solution;

        let noun = if boxes.len() == 1 { "solution" } else { "solutions" };
        write!(
            f,
            "{} candidate {noun} after {branchings} branchings ({status})",
            boxes.len()
        )?;
        for (i, bx) in boxes.iter().enumerate() {
            write!(f, "\n  {}: {}", i + 1, bx.display(self.precision))?;
        }
        Ok(())
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.report(Precision::default()).fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solution(boxes: Vec<IntervalBox>) -> Solution {
        Solution {
            status: Status::Exhausted,
            boxes,
            branchings: 7,
        }
    }

    #[test]
    fn report_lists_candidates() {
        let bx = IntervalBox::from_bounds(&[(1.0, 1.5), (-0.5, 0.0)]).unwrap();
        let solution = solution(vec![bx.clone(), bx]);
        assert!(solution.found());
        assert_eq!(solution.len(), 2);
        assert_eq!(
            solution.to_string(),
            "2 candidate solutions after 7 branchings (search exhausted)\n  \
             1: ([1.00,1.50] ; [-0.50,0.00])\n  \
             2: ([1.00,1.50] ; [-0.50,0.00])"
        );

        let precision = Precision::new(0, 1).unwrap();
        assert!(
            solution
                .report(precision)
                .to_string()
                .ends_with("2: ([1.,1.5] ; [-0.5,0.])")
        );
    }

    #[test]
    fn report_without_candidates() {
        let solution = solution(Vec::new());
        assert!(!solution.found());
        assert!(solution.is_empty());
        assert_eq!(
            solution.to_string(),
            "0 candidate solutions after 7 branchings (search exhausted)"
        );
    }
}
