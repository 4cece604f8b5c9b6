//! The minimum-swap arrangement search.

use itertools::Itertools;
use log::debug;

use crate::arrangement::{Arrangement, Faces, POSITIONS};
use crate::card::Card;
use crate::mark::Mark;
use crate::matching::Matching;
use crate::permutation::Swap;

/// Reasons an [`ArrangementSolver`] may fail.
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum SolverFailure {
    /// The SAT solver proved that no arrangement of the nine cards shows the target marks.
    #[error("no arrangement of the cards shows the target marks")]
    Inconsistent,
    /// The search finished without a complete assignment although the matching check found one.
    /// This is an internal inconsistency between the SAT encoding and the search.
    #[error("search finished without a complete assignment")]
    NoAssignmentFound,
}

/// The cheapest way to lay the cards out so that they show the target marks.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Solution {
    /// Which card sits at each position.
    pub arrangement: Arrangement,
    /// Which face each card shows.
    pub faces: Faces,
    /// The fewest swaps from the start arrangement.
    pub swaps: usize,
}

impl Solution {
    /// An explicit swap sequence of length [`Self::swaps`] turning `start` into [`Self::arrangement`].
    pub fn swap_sequence(&self, start: &Arrangement) -> Vec<Swap> {
        start.swap_sequence_to(&self.arrangement)
    }
}

/// Finds the target arrangement closest, in swaps, to a start arrangement.
///
/// Every grid position wants a mark and may only take one of the three cards able to show that mark.
/// Use [`Self::solve`] to search all perfect assignments of cards to positions.
pub struct ArrangementSolver<'a> {
    start: &'a Arrangement,
    targets: [Mark; POSITIONS],
    candidates: [[Card; 3]; POSITIONS],
    // positions, fewest candidates first
    order: Vec<usize>,
}

struct Search<'s> {
    start: &'s Arrangement,
    candidates: &'s [[Card; 3]; POSITIONS],
    order: &'s [usize],
    used: [bool; Card::COUNT],
    assignment: [Card; POSITIONS],
    best: Option<(Arrangement, usize)>,
    visited: usize,
}

impl<'a> ArrangementSolver<'a> {
    /// A solver for laying out the cards from `start` so that position `p` shows `targets[p]`.
    pub fn new(start: &'a Arrangement, targets: [Mark; POSITIONS]) -> Self {
        let candidates = targets.map(Card::showing);
        let order = (0..POSITIONS)
            .sorted_by_key(|position| candidates[*position].len())
            .collect_vec();

        Self {
            start,
            targets,
            candidates,
            order,
        }
    }

    /// Search every legal assignment, returning [`Ok`] with the one needing the fewest swaps from the
    /// start arrangement, or [`Err`] with a [`SolverFailure`] reason.
    ///
    /// # Search
    /// Positions are visited in [`Self::order`]. At each position, every candidate card not yet placed is
    /// tried in id order. A complete assignment is scored by cycle decomposition of the permutation
    /// from the start arrangement, and replaces the best so far only if strictly cheaper, so ties go to the
    /// assignment found first. Nothing beats zero swaps, so the search stops there.
    ///
    /// Before searching, the matching is checked by a SAT solver; see [`Matching`].
    pub fn solve(&self) -> Result<Solution, SolverFailure> {
        Matching::new(&self.targets).solve()?;

        let mut search = Search {
            start: self.start,
            candidates: &self.candidates,
            order: &self.order,
            used: [false; Card::COUNT],
            assignment: Card::ALL,
            best: None,
            visited: 0,
        };
        search.backtrack(0);

        let (arrangement, swaps) = search.best.ok_or(SolverFailure::NoAssignmentFound)?;
        debug!("visited {} complete assignments, best needs {} swaps", search.visited, swaps);

        let faces = Faces::from_assignment(&arrangement, &self.targets).ok_or(SolverFailure::NoAssignmentFound)?;
        Ok(Solution {
            arrangement,
            faces,
            swaps,
        })
    }

    /// Positions in the order they are assigned: ascending candidate count, ties by position.
    pub fn order(&self) -> &[usize] {
        &self.order
    }
}

impl Search<'_> {
    fn backtrack(&mut self, depth: usize) {
        if depth == self.order.len() {
            self.visited += 1;
            // every card is used exactly once by now
            if let Ok(arrangement) = Arrangement::new(&self.assignment) {
                let swaps = self.start.swap_count_to(&arrangement);
                if self.best.map_or(true, |(_, best)| swaps < best) {
                    self.best = Some((arrangement, swaps));
                }
            }
            return;
        }

        let position = self.order[depth];
        for card in self.candidates[position] {
            if self.used[card.index()] {
                continue;
            }
            if self.best.is_some_and(|(_, best)| best == 0) {
                return;
            }

            self.used[card.index()] = true;
            self.assignment[position] = card;
            self.backtrack(depth + 1);
            self.used[card.index()] = false;
        }
    }
}
