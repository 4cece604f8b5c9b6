//! The nine two-faced cards.

use std::fmt::{Display, Formatter};

use itertools::Itertools;
use petgraph::graphmap::UnGraphMap;

use crate::mark::Mark;

/// One of the nine physical cards, identified `0..9` and displayed as `e1`..`e9`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Card(u8);

// face 0, face 1 for each card id
const FACES: [(Mark, Mark); Card::COUNT] = [
    (Mark::Maru, Mark::Cookie),
    (Mark::Maru, Mark::Sakura),
    (Mark::Maru, Mark::Brocco),
    (Mark::Lime, Mark::Hanabana),
    (Mark::Lime, Mark::Sakura),
    (Mark::Lime, Mark::Brocco),
    (Mark::Cookie, Mark::Hanabana),
    (Mark::Cookie, Mark::Sakura),
    (Mark::Hanabana, Mark::Brocco),
];

impl Card {
    /// Number of cards in a game.
    pub const COUNT: usize = 9;

    /// Every card in id order.
    pub const ALL: [Card; Card::COUNT] = [Card(0), Card(1), Card(2), Card(3), Card(4), Card(5), Card(6), Card(7), Card(8)];

    /// The card with the given id, if it exists.
    pub fn new(id: u8) -> Option<Self> {
        (usize::from(id) < Self::COUNT).then_some(Self(id))
    }

    /// The id in `0..9`; card `e1` has id 0.
    #[inline]
    pub fn id(self) -> u8 {
        self.0
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        usize::from(self.0)
    }

    /// The two marks printed on this card.
    pub fn faces(self) -> (Mark, Mark) {
        FACES[self.index()]
    }

    /// The mark shown when this card's pattern bit is `bit`.
    pub fn face(self, bit: bool) -> Mark {
        let (zero, one) = self.faces();
        if bit { one } else { zero }
    }

    /// The pattern bit which makes this card show `mark`, or [`None`] if `mark` is on neither face.
    pub fn face_bit(self, mark: Mark) -> Option<bool> {
        match self.faces() {
            (zero, _) if zero == mark => Some(false),
            (_, one) if one == mark => Some(true),
            _ => None,
        }
    }

    /// Whether `mark` is on either face.
    pub fn can_show(self, mark: Mark) -> bool {
        self.face_bit(mark).is_some()
    }

    /// The three cards able to display `mark`, in id order.
    pub fn showing(mark: Mark) -> [Card; 3] {
        let cards = Self::ALL.iter()
            .copied()
            .filter(|card| card.can_show(mark))
            .collect_vec();
        // every mark sits on exactly three cards
        [cards[0], cards[1], cards[2]]
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "e{}", self.0 + 1)
    }
}

/// The graph with a vertex per [`Mark`] and an edge per [`Card`] joining its two faces.
///
/// Every vertex has degree 3.
pub fn face_graph() -> UnGraphMap<Mark, Card> {
    let mut graph = UnGraphMap::with_capacity(Mark::COUNT, Card::COUNT);
    for card in Card::ALL {
        let (a, b) = card.faces();
        graph.add_edge(a, b, card);
    }

    graph
}

/// The marks which share a card with `mark`, sorted.
pub fn partners(mark: Mark) -> Vec<Mark> {
    face_graph().neighbors(mark).sorted().collect_vec()
}
