use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Cells per row and per column of a shape grid.
pub const GRID_SIDE: usize = 3;
/// Total cells in a shape grid.
pub const GRID_CELLS: usize = GRID_SIDE * GRID_SIDE;

const FULL_MASK: u16 = (1 << GRID_CELLS) - 1;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ShapeError {
    #[error("cell index {index} is outside the 3x3 grid")]
    CellOutOfRange { index: usize },
}

/// A set of filled cells in a 3x3 grid, indexed row-major from the top left.
///
/// `Shape::empty()` is the "no shape selected" answer.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Shape(u16);

impl Shape {
    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    pub(crate) const fn from_bits(bits: u16) -> Self {
        Self(bits & FULL_MASK)
    }

    /// Build a shape from a list of filled cell indices.
    ///
    /// # Errors
    ///
    /// Returns `ShapeError::CellOutOfRange` for any index `>= GRID_CELLS`.
    pub fn from_cells(cells: &[usize]) -> Result<Self, ShapeError> {
        cells
            .iter()
            .try_fold(Self::empty(), |shape, &index| shape.with_cell(index))
    }

    /// Returns a copy with the given cell filled.
    ///
    /// # Errors
    ///
    /// Returns `ShapeError::CellOutOfRange` for an index `>= GRID_CELLS`.
    pub fn with_cell(self, index: usize) -> Result<Self, ShapeError> {
        Ok(Self(self.0 | Self::bit(index)?))
    }

    /// Returns a copy with the given cell flipped.
    ///
    /// # Errors
    ///
    /// Returns `ShapeError::CellOutOfRange` for an index `>= GRID_CELLS`.
    pub fn toggled(self, index: usize) -> Result<Self, ShapeError> {
        Ok(Self(self.0 ^ Self::bit(index)?))
    }

    #[must_use]
    pub fn contains(self, index: usize) -> bool {
        Self::bit(index).is_ok_and(|bit| self.0 & bit != 0)
    }

    #[must_use]
    pub fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Filled flags in row-major order.
    #[must_use]
    pub fn cells(self) -> [bool; GRID_CELLS] {
        std::array::from_fn(|index| self.contains(index))
    }

    fn bit(index: usize) -> Result<u16, ShapeError> {
        if index >= GRID_CELLS {
            return Err(ShapeError::CellOutOfRange { index });
        }
        Ok(1 << index)
    }
}

impl std::fmt::Debug for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rows = self
            .cells()
            .chunks(GRID_SIDE)
            .map(|row| {
                row.iter()
                    .map(|filled| if *filled { '#' } else { '.' })
                    .collect::<String>()
            })
            .collect::<Vec<_>>();
        write!(f, "Shape({})", rows.join("/"))
    }
}
