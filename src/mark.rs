//! The six marks and how they pair up.

use strum::{Display, EnumString, VariantArray};
use unordered_pair::UnorderedPair;

/// The symbol printed on one face of a card.
///
/// The first three marks are warm, the last three are cold.
/// Discriminants are stable and used as indices into per-mark tables.
#[derive(Copy, Clone, Debug, Display, EnumString, VariantArray, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[strum(ascii_case_insensitive)]
pub enum Mark {
    /// Warm; crosses [`Mark::Brocco`].
    Maru = 0,
    /// Warm; crosses [`Mark::Hanabana`].
    Cookie = 1,
    /// Warm; crosses [`Mark::Lime`].
    Sakura = 2,
    /// Cold; crosses [`Mark::Sakura`].
    Lime = 3,
    /// Cold; crosses [`Mark::Cookie`].
    Hanabana = 4,
    /// Cold; crosses [`Mark::Maru`].
    Brocco = 5,
}

/// Which half of the mark set a [`Mark`] belongs to.
#[derive(Copy, Clone, Debug, Display, VariantArray, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum Temperature {
    /// [`Mark::Maru`], [`Mark::Cookie`] and [`Mark::Sakura`].
    Warm,
    /// [`Mark::Lime`], [`Mark::Hanabana`] and [`Mark::Brocco`].
    Cold,
}

/// Pairs of marks which may never be selected together.
///
/// Each pair is the two faces of one of the "cross" cards (e3, e5 and e7).
pub const CROSS_PAIRS: [UnorderedPair<Mark>; 3] = [
    UnorderedPair(Mark::Maru, Mark::Brocco),
    UnorderedPair(Mark::Lime, Mark::Sakura),
    UnorderedPair(Mark::Cookie, Mark::Hanabana),
];

impl Mark {
    /// Number of distinct marks.
    pub const COUNT: usize = 6;

    #[inline]
    pub(crate) fn index(self) -> usize {
        self as usize
    }

    /// Whether this mark is warm or cold.
    pub fn temperature(self) -> Temperature {
        match self {
            Self::Maru | Self::Cookie | Self::Sakura => Temperature::Warm,
            Self::Lime | Self::Hanabana | Self::Brocco => Temperature::Cold,
        }
    }

    /// Shorthand for `temperature() == Temperature::Warm`.
    #[inline]
    pub fn is_warm(self) -> bool {
        self.temperature() == Temperature::Warm
    }

    /// Whether `self` and `other` form one of the [`CROSS_PAIRS`].
    pub fn crosses(self, other: Mark) -> bool {
        CROSS_PAIRS.contains(&UnorderedPair(self, other))
    }

    /// Single character used when drawing grids as text.
    /// Warm marks are uppercase, cold marks lowercase.
    pub fn glyph(self) -> char {
        match self {
            Self::Maru => 'M',
            Self::Cookie => 'C',
            Self::Sakura => 'S',
            Self::Lime => 'l',
            Self::Hanabana => 'h',
            Self::Brocco => 'b',
        }
    }
}
