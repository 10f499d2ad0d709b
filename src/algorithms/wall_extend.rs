use std::fmt;

use rand::{seq::SliceRandom as _, thread_rng, Rng as _, SeedableRng as _};
use smallvec::SmallVec;

use crate::{
    dims::Dims,
    grid::{Grid, GridError},
};

use super::{Direction, GenerationError, Random};

pub trait MazeGenerator: fmt::Debug {
    fn generate(&self, size: Dims, rng: &mut Random) -> Result<Grid, GenerationError>;
}

/// Wall-extension ("wall-adder") maze generator.
///
/// Grows a new wall segment from a random open even cell until it touches
/// existing wall structure, backtracking on dead ends. Repeating until the
/// even sublattice is exhausted yields a perfect maze: the open cells form a
/// spanning tree.
#[derive(Debug)]
pub struct WallExtend;

impl MazeGenerator for WallExtend {
    fn generate(&self, size: Dims, rng: &mut Random) -> Result<Grid, GenerationError> {
        let mut grid = Grid::new(size)?;

        loop {
            let candidates = grid.even_open_candidates();
            let Some(&start) = candidates.choose(rng) else {
                return Ok(grid);
            };

            log::trace!(
                "extending wall from {:?}, {} candidates left",
                start,
                candidates.len()
            );

            let mut building = vec![start];
            if !extend_wall(&grid, start, &mut building, rng)? {
                return Err(GenerationError::DeadEnd(start));
            }

            for pos in building {
                grid.set_wall(pos)?;
            }
        }
    }
}

/// Seeded convenience entry point. With `seed` absent a fresh one is drawn,
/// so a single run is still internally deterministic.
pub fn generate_maze(size: Dims, seed: Option<u64>) -> Result<Grid, GenerationError> {
    let mut rng = Random::seed_from_u64(seed.unwrap_or_else(|| thread_rng().gen()));
    WallExtend.generate(size, &mut rng)
}

/// Grows `building` from `curr` until the segment reaches a wall two steps
/// away, recursing cell by cell.
///
/// Returns `Ok(true)` with the finished path appended to `building`, or
/// `Ok(false)` with `building` exactly as passed in when every direction from
/// `curr` dead-ends. Each frame shuffles its acceptable directions once and
/// tries them in that fixed order, so the deepest frame always fails first.
/// Recursion depth is bounded by the number of even cells of the grid.
pub(crate) fn extend_wall(
    grid: &Grid,
    curr: Dims,
    building: &mut Vec<Dims>,
    rng: &mut Random,
) -> Result<bool, GridError> {
    let mut dirs = acceptable_directions(grid, curr, building)?;
    if dirs.is_empty() {
        log::trace!("dead end at {:?}, backtracking", curr);
        return Ok(false);
    }
    dirs.shuffle(rng);

    for dir in dirs {
        let step = dir.to_coord();
        let doorway = curr + step;
        let landing = curr + step * 2;

        if grid.get(landing)?.is_wall() {
            // Reached existing structure: the segment is complete.
            building.push(doorway);
            return Ok(true);
        }

        let checkpoint = building.len();
        building.push(doorway);
        building.push(landing);
        if extend_wall(grid, landing, building, rng)? {
            return Ok(true);
        }
        building.truncate(checkpoint);
    }

    Ok(false)
}

/// A direction is acceptable when the doorway cell one step away is open and
/// neither the doorway nor the landing cell two steps away is already part of
/// the segment under construction. The last condition keeps the new wall from
/// touching itself, which would close a cycle or cut off an island.
fn acceptable_directions(
    grid: &Grid,
    curr: Dims,
    building: &[Dims],
) -> Result<SmallVec<[Direction; 4]>, GridError> {
    let mut dirs = SmallVec::new();

    for dir in Direction::get_in_order() {
        let step = dir.to_coord();
        let doorway = curr + step;
        let landing = curr + step * 2;

        if grid.get(doorway)?.is_open()
            && !building.contains(&doorway)
            && !building.contains(&landing)
        {
            dirs.push(dir);
        }
    }

    Ok(dirs)
}
