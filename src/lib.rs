#![warn(missing_docs)]

//! # `ninetile`
//!
//! Rules and solvers for the Nine Tile puzzle.
//! Nine two-faced cards are dealt face up on a 3×3 grid; each face carries one of six marks, three of them warm and three cold.
//! The player must find three tiles whose marks are all different, include no [cross pair](mark::CROSS_PAIRS), and split between warm
//! and cold as the layout's total warm count demands. See [`judge()`](judge::judge).
//!
//! Deal layouts from a [`PatternSet`], either [enumerated](PatternSet::enumerate) or loaded from a table of bit rows, and drive a
//! timed session with a [`Game`].
//!
//! # Minimum swaps
//! Given a start [`Arrangement`] of the cards and a target sequence of marks, [`ArrangementSolver`] finds the arrangement showing
//! those marks which is the fewest swaps away. A [`SwapWalkthrough`] replays the swaps one at a time.
//!
//! Each mark can be shown by exactly three cards, so the search is over perfect matchings between positions and cards.
//! Before searching, the matching is expressed as a Boolean satisfiability problem (a "SAT") and checked; an unsatisfiable formula
//! proves no arrangement exists. The search itself backtracks over positions, fewest candidates first, and scores each complete
//! assignment by decomposing the permutation from the start arrangement into cycles: a permutation of `n` items with `c` cycles
//! needs exactly `n - c` swaps.

pub use arrangement::{Arrangement, Faces};
pub use card::Card;
pub use game::{Game, GameConfig, Phase};
pub use location::Location;
pub use mark::{Mark, Temperature};
pub use pattern::{Pattern, PatternError, PatternSet};
pub use solver::{ArrangementSolver, Solution, SolverFailure};
pub use walkthrough::SwapWalkthrough;

pub mod arrangement;
pub mod card;
pub mod game;
pub mod judge;
pub(crate) mod location;
pub(crate) mod logic;
pub mod mark;
pub mod matching;
pub mod pattern;
pub mod permutation;
pub mod solver;
mod tests;
pub mod timer;
pub mod walkthrough;
#[cfg(feature = "wasm")]
pub mod wasm;
