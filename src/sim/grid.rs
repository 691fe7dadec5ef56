//! Discrete grid coordinate space

use glam::IVec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A grid cell: `x` is the column, `y` is the row
pub type Cell = IVec2;

/// Bounds of the playfield, cells in `[0, width) x [0, height)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    pub width: i32,
    pub height: i32,
}

impl Grid {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Square grid with `size` cells per side
    pub const fn square(size: i32) -> Self {
        Self::new(size, size)
    }

    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.x < self.width && cell.y >= 0 && cell.y < self.height
    }

    /// Total number of cells
    pub fn cell_count(&self) -> usize {
        (self.width.max(0) as usize) * (self.height.max(0) as usize)
    }

    /// Center cell (rounded down)
    pub fn center(&self) -> Cell {
        IVec2::new(self.width / 2, self.height / 2)
    }

    /// Uniformly random cell within bounds
    pub fn random_cell<R: Rng>(&self, rng: &mut R) -> Cell {
        IVec2::new(
            rng.random_range(0..self.width),
            rng.random_range(0..self.height),
        )
    }

    /// All cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| IVec2::new(x, y)))
    }
}
