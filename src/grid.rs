use std::fmt;
use std::ops;

use thiserror::Error;

use crate::{array::Array2D, dims::Dims};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    Open,
    Wall,
}

impl CellState {
    pub fn is_wall(self) -> bool {
        matches!(self, CellState::Wall)
    }

    pub fn is_open(self) -> bool {
        matches!(self, CellState::Open)
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    #[error("grid size must be odd and at least 3 in both dimensions, got {0:?}")]
    InvalidDimensions(Dims),
    #[error("coordinate {0:?} is outside the grid")]
    OutOfBounds(Dims),
}

/// Boundary-walled lattice of [`CellState`] cells.
///
/// Starts with the whole interior open and the outer ring walled; the only
/// mutation is committing finished wall paths with [`Grid::set_wall`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Array2D<CellState>,
}

impl Grid {
    /// Creates a grid of the given `(height, width)`. Both dimensions must be
    /// odd and at least 3, otherwise the even-sublattice invariant of the
    /// wall-extension algorithm cannot hold.
    pub fn new(size: Dims) -> Result<Grid, GridError> {
        let Dims(height, width) = size;
        if height < 3 || width < 3 || height % 2 == 0 || width % 2 == 0 {
            return Err(GridError::InvalidDimensions(size));
        }

        let mut cells = Array2D::new(CellState::Open, height as usize, width as usize);
        for r in 0..height {
            cells[Dims(r, 0)] = CellState::Wall;
            cells[Dims(r, width - 1)] = CellState::Wall;
        }
        for c in 0..width {
            cells[Dims(0, c)] = CellState::Wall;
            cells[Dims(height - 1, c)] = CellState::Wall;
        }

        Ok(Grid { cells })
    }

    pub fn size(&self) -> Dims {
        self.cells.size()
    }

    pub fn get(&self, pos: Dims) -> Result<CellState, GridError> {
        self.cells
            .get(pos)
            .copied()
            .ok_or(GridError::OutOfBounds(pos))
    }

    /// Marks a cell as wall. A no-op if the cell already is one.
    pub fn set_wall(&mut self, pos: Dims) -> Result<(), GridError> {
        let cell = self
            .cells
            .get_mut(pos)
            .ok_or(GridError::OutOfBounds(pos))?;
        *cell = CellState::Wall;
        Ok(())
    }

    /// All still-open cells of the even sublattice, in row-major order.
    ///
    /// The order is fixed so that picking a candidate by index from a seeded
    /// RNG reproduces the same maze across runs.
    pub fn even_open_candidates(&self) -> Vec<Dims> {
        self.cells
            .iter_pos()
            .filter(|pos| pos.is_even() && self.cells[*pos].is_open())
            .collect()
    }

    /// Read-only view over every cell, for renderers and checks.
    pub fn iter(&self) -> impl Iterator<Item = (Dims, CellState)> + '_ {
        self.cells.iter_pos().map(move |pos| (pos, self.cells[pos]))
    }
}

impl ops::Index<Dims> for Grid {
    type Output = CellState;

    fn index(&self, index: Dims) -> &Self::Output {
        &self.cells[index]
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Dims(height, width) = self.size();
        for r in 0..height {
            for c in 0..width {
                let ch = if self.cells[Dims(r, c)].is_wall() {
                    '#'
                } else {
                    '.'
                };
                write!(f, "{}", ch)?;
            }
            if r != height - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{CellState, Dims, Grid, GridError};

    #[test]
    fn rejects_even_or_small_dimensions() {
        for size in [Dims(4, 5), Dims(5, 4), Dims(1, 1), Dims(3, 1), Dims(0, 0)] {
            assert_eq!(Grid::new(size), Err(GridError::InvalidDimensions(size)));
        }
    }

    #[test]
    fn new_grid_has_walled_ring_and_open_interior() {
        let grid = Grid::new(Dims(5, 7)).unwrap();

        for (pos, state) in grid.iter() {
            let Dims(r, c) = pos;
            let on_ring = r == 0 || r == 4 || c == 0 || c == 6;
            assert_eq!(state.is_wall(), on_ring, "unexpected state at {:?}", pos);
        }
    }

    #[test]
    fn get_out_of_bounds_fails() {
        let grid = Grid::new(Dims(5, 5)).unwrap();

        assert_eq!(grid.get(Dims(5, 0)), Err(GridError::OutOfBounds(Dims(5, 0))));
        assert_eq!(
            grid.get(Dims(0, -1)),
            Err(GridError::OutOfBounds(Dims(0, -1)))
        );
        assert_eq!(grid.get(Dims(4, 4)), Ok(CellState::Wall));
    }

    #[test]
    fn set_wall_is_idempotent() {
        let mut grid = Grid::new(Dims(5, 5)).unwrap();

        grid.set_wall(Dims(2, 2)).unwrap();
        assert_eq!(grid.get(Dims(2, 2)), Ok(CellState::Wall));
        grid.set_wall(Dims(2, 2)).unwrap();
        assert_eq!(grid.get(Dims(2, 2)), Ok(CellState::Wall));
    }

    #[test]
    fn candidates_are_interior_even_cells_in_row_major_order() {
        let grid = Grid::new(Dims(5, 7)).unwrap();

        assert_eq!(
            grid.even_open_candidates(),
            vec![Dims(2, 2), Dims(2, 4)]
        );
    }

    #[test]
    fn candidates_shrink_as_walls_are_committed() {
        let mut grid = Grid::new(Dims(5, 7)).unwrap();

        grid.set_wall(Dims(2, 2)).unwrap();
        assert_eq!(grid.even_open_candidates(), vec![Dims(2, 4)]);
    }

    #[test]
    fn display_renders_one_char_per_cell() {
        let grid = Grid::new(Dims(3, 3)).unwrap();
        assert_eq!(grid.to_string(), "###\n#.#\n###");
    }
}
