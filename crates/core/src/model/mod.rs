mod candidate;
mod flow;
mod level;
mod session;
mod shape;

pub use candidate::{CandidateEmail, EmailError};
pub use flow::FlowStep;
pub use level::{Level, TILE_COUNT, training_level};
pub use session::{SessionStart, StartedAt};
pub use shape::{GRID_CELLS, GRID_SIDE, Shape, ShapeError};
