use iq_core::model::{GRID_CELLS, Level, Shape};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileVm {
    pub cells: [bool; GRID_CELLS],
    /// The missing ninth tile, filled in from the current answer.
    pub is_slot: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PuzzleGridVm {
    pub tiles: Vec<TileVm>,
    pub pad: [bool; GRID_CELLS],
    pub solved: bool,
}

#[must_use]
pub fn map_puzzle_grid(level: &Level, answer: Shape) -> PuzzleGridVm {
    let mut tiles = level
        .tiles()
        .iter()
        .map(|shape| TileVm {
            cells: shape.cells(),
            is_slot: false,
        })
        .collect::<Vec<_>>();
    tiles.push(TileVm {
        cells: answer.cells(),
        is_slot: true,
    });

    PuzzleGridVm {
        tiles,
        pad: answer.cells(),
        solved: level.is_solved_by(answer),
    }
}
