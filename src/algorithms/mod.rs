mod wall_extend;

pub use wall_extend::{generate_maze, MazeGenerator, WallExtend};

use thiserror::Error;

use crate::{dims::Dims, grid::GridError};

/// Random number generator used for anything, where determinism is required.
pub type Random = rand_xoshiro::Xoshiro256StarStar;

/// The four unit displacements on the lattice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Right,
    Left,
    Up,
    Down,
}

impl Direction {
    pub fn to_coord(self) -> Dims {
        match self {
            Direction::Right => Dims(0, 1),
            Direction::Left => Dims(0, -1),
            Direction::Up => Dims(1, 0),
            Direction::Down => Dims(-1, 0),
        }
    }

    /// Fixed enumeration order; candidates gathered in this order are then
    /// shuffled, so the order only matters for seed reproducibility.
    pub fn get_in_order() -> [Direction; 4] {
        use Direction::*;
        [Right, Left, Up, Down]
    }
}

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error(transparent)]
    Grid(#[from] GridError),

    /// A builder-chosen start cell had no viable first move. The border ring
    /// guarantees every open even cell has one, so this means the grid state
    /// broke an invariant and the run must not continue.
    #[error("wall extension dead-ended immediately at start cell {0:?}")]
    DeadEnd(Dims),
}

#[cfg(test)]
mod tests {
    use super::{Dims, Direction};

    #[test]
    fn directions_are_the_four_unit_steps() {
        let mut coords: Vec<_> = Direction::get_in_order()
            .into_iter()
            .map(Direction::to_coord)
            .collect();
        coords.sort_by_key(|d| (d.0, d.1));

        assert_eq!(
            coords,
            vec![Dims(-1, 0), Dims(0, -1), Dims(0, 1), Dims(1, 0)]
        );
    }
}
