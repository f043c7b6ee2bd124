mod flow;
mod instructions;
mod puzzle_grid;
mod state;

pub use flow::{FlowView, SessionContext};
pub use instructions::{Instruction1, Instruction2, Instruction3, InstructionPanel};
pub use puzzle_grid::PuzzleGrid;
pub use state::{StartState, ViewError};

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
#[cfg(test)]
pub(crate) use flow::FlowTestHandles;
#[cfg(test)]
pub(crate) use instructions::PanelTestHandles;
#[cfg(test)]
pub(crate) use puzzle_grid::GridTestHandles;
