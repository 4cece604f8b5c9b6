//! Cards laid out on the grid, and the faces they show.

use std::fmt::{Display, Formatter};

use itertools::Itertools;
use ndarray::Array2;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::card::Card;
use crate::location::Location;
use crate::mark::Mark;
use crate::permutation;
use crate::permutation::Swap;

/// Width and height of the play grid.
pub const GRID_SIZE: usize = 3;
/// Number of grid positions.
pub const POSITIONS: usize = GRID_SIZE * GRID_SIZE;

/// Reasons a sequence of cards is not an [`Arrangement`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ArrangementError {
    /// The grid holds exactly nine cards.
    #[error("expected {expected} cards, got {0}", expected = POSITIONS)]
    WrongLength(usize),
    /// An id outside `0..9` was supplied.
    #[error("no card has id {0}")]
    UnknownCard(u8),
    /// A card appears at more than one position.
    #[error("card {0} appears more than once")]
    Repeated(Card),
}

/// A permutation of the nine cards over the grid positions, row-major.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Arrangement([Card; POSITIONS]);

impl Arrangement {
    /// Build an arrangement, checking that `cards` uses every card exactly once.
    pub fn new(cards: &[Card]) -> Result<Self, ArrangementError> {
        if cards.len() != POSITIONS {
            return Err(ArrangementError::WrongLength(cards.len()));
        }

        let mut seen = [false; Card::COUNT];
        for card in cards {
            if std::mem::replace(&mut seen[card.index()], true) {
                return Err(ArrangementError::Repeated(*card));
            }
        }

        let mut out = Card::ALL;
        out.copy_from_slice(cards);
        Ok(Self(out))
    }

    /// Shorthand for [`Self::new`] from raw card ids.
    pub fn from_ids(ids: &[u8]) -> Result<Self, ArrangementError> {
        let cards = ids.iter()
            .map(|id| Card::new(*id).ok_or(ArrangementError::UnknownCard(*id)))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(&cards)
    }

    /// Cards `e1`..`e9` in order.
    pub fn identity() -> Self {
        Self(Card::ALL)
    }

    /// A uniformly random arrangement.
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cards = Card::ALL;
        cards.shuffle(rng);
        Self(cards)
    }

    /// The card at each position, row-major.
    #[inline]
    pub fn cards(&self) -> &[Card; POSITIONS] {
        &self.0
    }

    /// Card ids at each position.
    pub fn ids(&self) -> [u8; POSITIONS] {
        self.0.map(Card::id)
    }

    /// Panics if `position` is not below [`POSITIONS`].
    #[inline]
    pub fn card_at(&self, position: usize) -> Card {
        self.0[position]
    }

    /// The position of every card, indexed by card id.
    pub fn positions(&self) -> [usize; Card::COUNT] {
        let mut out = [0; Card::COUNT];
        for (position, card) in self.0.iter().enumerate() {
            out[card.index()] = position;
        }

        out
    }

    /// The position holding `card`.
    pub fn position_of(&self, card: Card) -> usize {
        self.positions()[card.index()]
    }

    /// The grid location holding `card`.
    pub fn location_of(&self, card: Card) -> Location {
        Location::of_position(self.position_of(card))
    }

    /// A copy of this arrangement with the two positions in `swap` exchanged.
    pub fn swapped(&self, swap: Swap) -> Self {
        let mut cards = self.0;
        cards.swap(swap.0, swap.1);
        Self(cards)
    }

    /// Cycles of the permutation moving each position's card to its position in `target`.
    pub fn cycles_to(&self, target: &Arrangement) -> Vec<Vec<usize>> {
        let positions = target.positions();
        let dest = self.0.map(|card| positions[card.index()]);
        permutation::cycles_of(&dest)
    }

    /// The fewest swaps turning `self` into `target`.
    pub fn swap_count_to(&self, target: &Arrangement) -> usize {
        POSITIONS - self.cycles_to(target).len()
    }

    /// A minimal swap sequence turning `self` into `target`; see [`permutation::swap_sequence`].
    pub fn swap_sequence_to(&self, target: &Arrangement) -> Vec<Swap> {
        permutation::settle(&self.0, &target.0)
    }

    /// This arrangement laid out as a grid indexed `(row, column)`.
    pub fn grid(&self) -> Array2<Card> {
        Array2::from_shape_fn((GRID_SIZE, GRID_SIZE), |index| self.0[Location::from(index).position()])
    }

    /// Text rendering pairing each card label with the glyph of the face it shows, e.g. `Me1`.
    pub fn render(&self, faces: &Faces) -> Vec<String> {
        print_grid(self.grid().map(|card| format!("{}{}", faces.mark_of(*card).glyph(), card)))
    }
}

impl Display for Arrangement {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", print_grid(self.grid().map(Card::to_string)).join("\n"))
    }
}

/// Lay out each row of `grid` as a line, cells separated by single spaces.
pub(crate) fn print_grid(grid: Array2<String>) -> Vec<String> {
    grid.rows()
        .into_iter()
        .map(|row| row.iter().join(" "))
        .collect_vec()
}

/// The face each card is showing, indexed by card id.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Faces([Mark; Card::COUNT]);

impl Faces {
    /// Accept `marks` only if every card is able to show the mark given for it.
    pub fn new(marks: [Mark; Card::COUNT]) -> Option<Self> {
        Card::ALL.iter()
            .zip(marks.iter())
            .all(|(card, mark)| card.can_show(*mark))
            .then_some(Self(marks))
    }

    /// The faces shown when the cards of `arrangement` display `targets` position by position.
    ///
    /// Returns [`None`] if some card cannot show the mark wanted at its position.
    pub fn from_assignment(arrangement: &Arrangement, targets: &[Mark; POSITIONS]) -> Option<Self> {
        let mut marks = [Mark::Maru; Card::COUNT];
        for (card, mark) in arrangement.cards().iter().zip(targets.iter()) {
            marks[card.index()] = *mark;
        }
        Self::new(marks)
    }

    pub(crate) fn from_pattern_bits(bits: &[bool; Card::COUNT]) -> Self {
        Self(Card::ALL.map(|card| card.face(bits[card.index()])))
    }

    /// The mark face up on `card`.
    #[inline]
    pub fn mark_of(&self, card: Card) -> Mark {
        self.0[card.index()]
    }

    /// The marks visible at each position when the cards are laid out as `arrangement`.
    pub fn marks_of(&self, arrangement: &Arrangement) -> [Mark; POSITIONS] {
        arrangement.cards().map(|card| self.mark_of(card))
    }
}
