//! The rule deciding whether three tiles are a correct selection.

use itertools::Itertools;

use crate::arrangement::POSITIONS;
use crate::mark::Mark;

/// How many warm and cold marks a correct selection contains.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Requirement {
    /// Warm marks wanted.
    pub warm: usize,
    /// Cold marks wanted.
    pub cold: usize,
}

impl Requirement {
    /// The requirement for a layout holding `warm_total` warm marks, if such a layout can be dealt.
    pub fn for_warm_total(warm_total: usize) -> Option<Self> {
        let (warm, cold) = match warm_total {
            6 => (3, 0),
            5 => (2, 1),
            4 => (1, 2),
            3 => (0, 3),
            _ => return None,
        };
        Some(Self { warm, cold })
    }
}

/// The verdict on a three-tile selection.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Judgement {
    /// All three marks distinct, no cross pair, and the warm/cold split matches the requirement.
    pub correct: bool,
    /// The selection contains both marks of a [cross pair](crate::mark::CROSS_PAIRS).
    pub conflict: bool,
    /// All three marks differ.
    pub distinct: bool,
    /// [`None`] when the warm total has no entry in the table; such a selection is never correct.
    pub requirement: Option<Requirement>,
}

/// Judge a selection of three marks from a layout with `warm_total` warm marks.
pub fn judge(selection: [Mark; 3], warm_total: usize) -> Judgement {
    let requirement = Requirement::for_warm_total(warm_total);
    let distinct = selection.iter().all_unique();
    let conflict = selection.iter()
        .tuple_combinations()
        .any(|(a, b)| a.crosses(*b));

    let warm = selection.iter().filter(|mark| mark.is_warm()).count();
    let split = Requirement { warm, cold: selection.len() - warm };

    Judgement {
        correct: distinct && !conflict && requirement == Some(split),
        conflict,
        distinct,
        requirement,
    }
}

/// Every correct selection of positions from `layout`, each ascending, in lexicographic order.
pub fn answers(layout: &[Mark; POSITIONS], warm_total: usize) -> Vec<[usize; 3]> {
    (0..POSITIONS)
        .tuple_combinations()
        .filter(|(a, b, c)| judge([layout[*a], layout[*b], layout[*c]], warm_total).correct)
        .map(|(a, b, c)| [a, b, c])
        .collect_vec()
}
