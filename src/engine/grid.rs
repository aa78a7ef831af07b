//! Double-buffered toroidal grid for Conway's Game of Life

use super::rules::LifeRules;
use itertools::Itertools;
use rand::Rng;
use rayon::prelude::*;
use std::fmt;
use thiserror::Error;

/// Errors raised by coordinate-accepting grid operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("coordinate ({x}, {y}) out of bounds for {width}x{height} grid")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
}

/// A Game of Life board with wrap-around edges.
///
/// Holds the current generation plus an equally-sized scratch buffer so a
/// generation step never reads a neighbor that was already updated within
/// the same step. The scratch buffer is internal working storage and is
/// never observable through the public API.
#[derive(Debug, Clone)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
    scratch: Vec<bool>,
}

impl PartialEq for Grid {
    fn eq(&self, other: &Self) -> bool {
        // Scratch contents are meaningless between steps
        self.width == other.width && self.height == other.height && self.cells == other.cells
    }
}

impl Eq for Grid {}

impl Grid {
    /// Create a new all-dead grid.
    ///
    /// A zero-sized dimension is accepted and yields an empty grid on which
    /// `step`, `seed_random` and `perturb` are no-ops.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![false; width * height],
            scratch: vec![false; width * height],
        }
    }

    /// Bulk-load a grid from row vectors (top row first)
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self, GridShapeError> {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.len());

        for (y, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(GridShapeError::RaggedRow {
                    row: y,
                    len: row.len(),
                    expected: width,
                });
            }
        }

        let cells: Vec<bool> = rows.into_iter().flatten().collect();
        Ok(Self {
            width,
            height,
            scratch: vec![false; cells.len()],
            cells,
        })
    }

    /// Bulk-load a grid from a flat row-major cell vector
    pub fn with_cells(width: usize, height: usize, cells: Vec<bool>) -> Result<Self, GridShapeError> {
        if cells.len() != width * height {
            return Err(GridShapeError::CellCount {
                len: cells.len(),
                width,
                height,
            });
        }
        Ok(Self {
            width,
            height,
            scratch: vec![false; cells.len()],
            cells,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    fn check_bounds(&self, x: usize, y: usize) -> Result<(), EngineError> {
        if x >= self.width || y >= self.height {
            return Err(EngineError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    /// Read a single cell; out-of-range coordinates are rejected, never clamped
    pub fn get(&self, x: usize, y: usize) -> Result<bool, EngineError> {
        self.check_bounds(x, y)?;
        Ok(self.cells[self.index(x, y)])
    }

    /// Flip a single cell's state
    pub fn toggle(&mut self, x: usize, y: usize) -> Result<(), EngineError> {
        self.check_bounds(x, y)?;
        let idx = self.index(x, y);
        self.cells[idx] = !self.cells[idx];
        Ok(())
    }

    /// Count live cells among the 8 toroidal neighbors of (x, y).
    ///
    /// Edges wrap to the opposite side. On degenerate dimensions the wrap
    /// can land back on (x, y) itself; that coordinate is never counted.
    pub fn count_neighbors(&self, x: usize, y: usize) -> u8 {
        let mut count = 0;

        for dy in [-1isize, 0, 1] {
            for dx in [-1isize, 0, 1] {
                if dx == 0 && dy == 0 {
                    continue;
                }

                let nx = (x as isize + dx).rem_euclid(self.width as isize) as usize;
                let ny = (y as isize + dy).rem_euclid(self.height as isize) as usize;

                // A cell is never its own neighbor, even after wrapping
                if nx == x && ny == y {
                    continue;
                }

                if self.cells[self.index(nx, ny)] {
                    count += 1;
                }
            }
        }

        count
    }

    /// Advance the board one generation.
    ///
    /// The next generation is computed entirely into the scratch buffer from
    /// the pre-step state, then the buffers are swapped. Neighbor lookups
    /// within one step therefore never observe an already-updated cell.
    pub fn step(&mut self) {
        if self.cells.is_empty() {
            return;
        }

        let mut next = std::mem::take(&mut self.scratch);
        next.resize(self.cells.len(), false);

        next.par_chunks_mut(self.width)
            .enumerate()
            .for_each(|(y, row)| {
                for (x, cell) in row.iter_mut().enumerate() {
                    let alive = self.cells[self.index(x, y)];
                    *cell = LifeRules::next_state(alive, self.count_neighbors(x, y));
                }
            });

        self.scratch = std::mem::replace(&mut self.cells, next);
    }

    /// Overwrite every cell, making it alive with the given probability.
    ///
    /// The probability is clamped to [0, 1]. Randomness comes from the
    /// injected source so callers can make runs reproducible.
    pub fn seed_random<R: Rng>(&mut self, rng: &mut R, probability: f64) {
        let probability = probability.clamp(0.0, 1.0);
        for cell in &mut self.cells {
            *cell = rng.random_bool(probability);
        }
    }

    /// Flip each cell independently with the given probability.
    ///
    /// Unlike `seed_random` this toggles rather than overwrites, so it
    /// disturbs a running pattern instead of replacing it.
    pub fn perturb<R: Rng>(&mut self, rng: &mut R, probability: f64) {
        let probability = probability.clamp(0.0, 1.0);
        for cell in &mut self.cells {
            if rng.random_bool(probability) {
                *cell = !*cell;
            }
        }
    }

    /// Kill every cell, keeping the dimensions
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Resize the board, preserving the overlapping region.
    ///
    /// Each row is independently truncated or dead-extended; rows beyond the
    /// old height start fully dead. The scratch buffer is reallocated to the
    /// new shape.
    pub fn resize(&mut self, new_width: usize, new_height: usize) {
        let mut cells = vec![false; new_width * new_height];

        for y in 0..self.height.min(new_height) {
            for x in 0..self.width.min(new_width) {
                cells[y * new_width + x] = self.cells[self.index(x, y)];
            }
        }

        self.width = new_width;
        self.height = new_height;
        self.cells = cells;
        self.scratch = vec![false; new_width * new_height];
    }

    /// Count total living cells
    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// Check whether no cell is alive
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&cell| !cell)
    }

    /// Coordinates of all living cells, row by row
    pub fn live_cells(&self) -> Vec<(usize, usize)> {
        (0..self.height)
            .cartesian_product(0..self.width)
            .filter(|&(y, x)| self.cells[self.index(x, y)])
            .map(|(y, x)| (x, y))
            .collect()
    }
}

/// Rejected bulk-load shapes
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridShapeError {
    #[error("row {row} has length {len}, expected {expected}")]
    RaggedRow {
        row: usize,
        len: usize,
        expected: usize,
    },
    #[error("{len} cells do not fill a {width}x{height} grid")]
    CellCount {
        len: usize,
        width: usize,
        height: usize,
    },
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            for x in 0..self.width {
                let alive = self.cells[self.index(x, y)];
                write!(f, "{}", if alive { '█' } else { '·' })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
