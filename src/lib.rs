pub mod algorithms;
pub mod array;
pub mod dims;
pub mod grid;

pub use algorithms::{generate_maze, GenerationError, MazeGenerator, Random, WallExtend};
pub use dims::Dims;
pub use grid::{CellState, Grid, GridError};
