//! Stepping through the swaps that solve a layout.

use std::fmt::{Display, Formatter};

use itertools::Itertools;
use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::arrangement::{Arrangement, Faces, POSITIONS};
use crate::card::Card;
use crate::location::Location;
use crate::mark::{Mark, Temperature};
use crate::pattern::PatternSet;
use crate::permutation::Swap;
use crate::solver::{ArrangementSolver, SolverFailure};

/// Walkthroughs needing more swaps than this are flagged for a second look.
pub const SWAP_BUDGET: usize = 5;

/// A fixed chain of cards traced across the grid, e.g. `e1 -> e8 -> e2`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Trail {
    /// What the three cards have in common: every face warm, or every face cold.
    pub temperature: Temperature,
    /// The chain, in order.
    pub cards: [Card; 3],
    /// Where each of [`Self::cards`] currently sits.
    pub locations: [Location; 3],
}

const TRAIL_CARDS: [(Temperature, [u8; 3]); 2] = [
    // the three all-warm cards
    (Temperature::Warm, [0, 7, 1]),
    // the three all-cold cards
    (Temperature::Cold, [3, 8, 5]),
];

/// Step-by-step replay of the minimum swap sequence from a start arrangement to the solved target.
#[derive(Clone, Debug)]
pub struct SwapWalkthrough {
    faces: Faces,
    swaps: Vec<Swap>,
    states: Vec<Arrangement>,
    step: usize,
}

impl SwapWalkthrough {
    /// Solve `targets` from `start` and lay out every intermediate arrangement.
    pub fn new(start: Arrangement, targets: [Mark; POSITIONS]) -> Result<Self, SolverFailure> {
        let solution = ArrangementSolver::new(&start, targets).solve()?;
        let swaps = solution.swap_sequence(&start);

        let mut states = Vec::with_capacity(swaps.len() + 1);
        states.push(start);
        for swap in &swaps {
            let next = states.last().unwrap_or(&start).swapped(*swap);
            states.push(next);
        }
        debug!("walkthrough from\n{}\nneeds {} swaps", start, swaps.len());

        Ok(Self {
            faces: solution.faces,
            swaps,
            states,
            step: 0,
        })
    }

    /// A random start arrangement and, as the target, the shuffled marks of a random pattern.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, patterns: &PatternSet) -> Result<Self, SolverFailure> {
        let start = Arrangement::shuffled(rng);
        let mut targets = *patterns.choose(rng).marks();
        targets.shuffle(rng);
        Self::new(start, targets)
    }

    /// Replace this walkthrough with a new puzzle from [`Self::random`].
    /// On failure the current puzzle is kept.
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R, patterns: &PatternSet) -> Result<(), SolverFailure> {
        *self = Self::random(rng, patterns)?;
        Ok(())
    }

    /// The arrangement before any swap.
    pub fn start(&self) -> &Arrangement {
        &self.states[0]
    }

    /// The arrangement after [`Self::step`] swaps.
    pub fn current(&self) -> &Arrangement {
        &self.states[self.step]
    }

    /// The arrangement after every swap.
    pub fn target(&self) -> &Arrangement {
        &self.states[self.states.len() - 1]
    }

    /// The faces showing the target marks.
    pub fn faces(&self) -> &Faces {
        &self.faces
    }

    /// The swaps, in the order they are applied.
    pub fn swaps(&self) -> &[Swap] {
        &self.swaps
    }

    /// Number of swaps in the walkthrough.
    pub fn len(&self) -> usize {
        self.swaps.len()
    }

    /// True when the start already shows the target marks.
    pub fn is_empty(&self) -> bool {
        self.swaps.is_empty()
    }

    /// How many swaps have been applied to reach [`Self::current`].
    pub fn step(&self) -> usize {
        self.step
    }

    /// Whether [`Self::current`] is the target.
    pub fn is_finished(&self) -> bool {
        self.step == self.swaps.len()
    }

    /// Apply the next swap. Returns `false`, doing nothing, once the target is reached.
    pub fn step_forward(&mut self) -> bool {
        if self.is_finished() {
            return false;
        }
        self.step += 1;
        true
    }

    /// Go back to the start arrangement.
    pub fn rewind(&mut self) {
        self.step = 0;
    }

    /// The swap that the next [`Self::step_forward`] applies.
    pub fn next_swap(&self) -> Option<Swap> {
        self.swaps.get(self.step).copied()
    }

    /// The marks visible at each position of `arrangement`.
    pub fn marks(&self, arrangement: &Arrangement) -> [Mark; POSITIONS] {
        self.faces.marks_of(arrangement)
    }

    /// Whether the walkthrough needs no more than [`SWAP_BUDGET`] swaps.
    pub fn within_budget(&self) -> bool {
        self.swaps.len() <= SWAP_BUDGET
    }

    /// `swap: N | step: K/N`
    pub fn info(&self) -> String {
        format!("swap: {} | step: {}/{}", self.swaps.len(), self.step, self.swaps.len())
    }

    /// One line on whether the swap count is within [`SWAP_BUDGET`].
    pub fn status(&self) -> &'static str {
        if self.within_budget() {
            "swap count is within 5"
        } else {
            "swap count exceeded 5 (check assignment)"
        }
    }

    /// The warm and cold card trails, located on the current arrangement.
    pub fn trails(&self) -> [Trail; 2] {
        let current = self.current();
        TRAIL_CARDS.map(|(temperature, ids)| {
            let cards = ids.map(|id| Card::ALL[usize::from(id)]);
            Trail {
                temperature,
                cards,
                locations: cards.map(|card| current.location_of(card)),
            }
        })
    }
}

impl Display for SwapWalkthrough {
    /// The start, current and target grids side by side, followed by [`Self::info`].
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let grids = [self.start(), self.current(), self.target()]
            .map(|arrangement| arrangement.render(&self.faces));

        writeln!(f, "{}", format!("{:<14} {:<14} {:<14}", "start", "current", "target").trim_end())?;
        for row in 0..grids[0].len() {
            writeln!(f, "{}", grids.iter().map(|grid| format!("{:<14}", grid[row])).join(" ").trim_end())?;
        }
        write!(f, "{}", self.info())
    }
}
