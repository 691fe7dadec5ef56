//! Food placement on a random free cell

use rand::Rng;

use super::grid::{Cell, Grid};
use crate::consts::MAX_FOOD_ATTEMPTS;

/// Pick a uniformly random cell of `grid` not in `occupied`.
///
/// Retries fresh random draws up to `MAX_FOOD_ATTEMPTS` times, then picks
/// uniformly among the remaining free cells. Returns `None` only when every
/// cell is occupied.
pub fn place_food<'a, R, I>(occupied: I, grid: &Grid, rng: &mut R) -> Option<Cell>
where
    R: Rng,
    I: IntoIterator<Item = &'a Cell> + Clone,
{
    let is_free = |cell: Cell| !occupied.clone().into_iter().any(|c| *c == cell);

    for _ in 0..MAX_FOOD_ATTEMPTS {
        let cell = grid.random_cell(rng);
        if is_free(cell) {
            return Some(cell);
        }
    }

    // Dense board: enumerate what's left
    let free: Vec<Cell> = grid.cells().filter(|c| is_free(*c)).collect();
    if free.is_empty() {
        return None;
    }
    Some(free[rng.random_range(0..free.len())])
}
