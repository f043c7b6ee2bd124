use crate::model::Shape;

/// Visible tiles in a level; the ninth cell of the matrix is the one to solve.
pub const TILE_COUNT: usize = 8;

/// A single puzzle: a 3x3 matrix of shapes with the bottom-right one missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Level {
    tiles: [Shape; TILE_COUNT],
    solution: Shape,
}

impl Level {
    /// Create a level from its visible tiles, row-major, and the missing shape.
    #[must_use]
    pub fn new(tiles: [Shape; TILE_COUNT], solution: Shape) -> Self {
        Self { tiles, solution }
    }

    #[must_use]
    pub fn tiles(&self) -> &[Shape; TILE_COUNT] {
        &self.tiles
    }

    #[must_use]
    pub fn solution(&self) -> Shape {
        self.solution
    }

    #[must_use]
    pub fn is_solved_by(&self, answer: Shape) -> bool {
        answer == self.solution
    }
}

/// The fixed practice puzzle shown before the test.
///
/// Each row's third tile is the union of the first two. Bit 0 is the top-left cell.
#[must_use]
pub fn training_level() -> Level {
    let top = (Shape::from_bits(0b000_000_111), Shape::from_bits(0b000_111_000));
    let middle = (Shape::from_bits(0b001_001_001), Shape::from_bits(0b100_100_100));
    let bottom = (Shape::from_bits(0b000_010_000), Shape::from_bits(0b101_000_101));

    Level::new(
        [
            top.0,
            top.1,
            top.0.union(top.1),
            middle.0,
            middle.1,
            middle.0.union(middle.1),
            bottom.0,
            bottom.1,
        ],
        bottom.0.union(bottom.1),
    )
}
