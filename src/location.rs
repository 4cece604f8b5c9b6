use ndarray::Ix;

use crate::arrangement::{GRID_SIZE, POSITIONS};

type Coord = usize;

#[derive(Clone, Eq, Hash, Copy, PartialEq, Ord, PartialOrd, Debug)]
/// A location `(x, y)` on the 3×3 grid. The top left corner is `Location(0, 0)`.
pub struct Location(pub Coord, pub Coord);

impl Location {
    /// The location of row-major grid position `position`.
    ///
    /// Panics if `position` is not on the grid.
    pub fn of_position(position: usize) -> Self {
        assert!(position < POSITIONS, "position {position} is off the grid");
        Self(position % GRID_SIZE, position / GRID_SIZE)
    }

    /// The row-major position of this location.
    pub fn position(&self) -> usize {
        self.1 * GRID_SIZE + self.0
    }
}

impl From<(Ix, Ix)> for Location {
    fn from(value: (Ix, Ix)) -> Self {
        Self(value.1, value.0)
    }
}
