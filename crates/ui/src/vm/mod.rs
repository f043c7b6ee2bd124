mod countdown_vm;
mod grid_vm;
mod time_fmt;

pub use countdown_vm::{Countdown, format_countdown};
pub use grid_vm::{PuzzleGridVm, TileVm, map_puzzle_grid};
pub use time_fmt::format_started_at;
