//! The evolution engine: pure functions that take the current generation and
//! produce the next one. All state lives in the `Grid` values passed in and
//! out; the engine keeps nothing between calls and never logs.

use rand::Rng;

use crate::model::error::SimError;
use crate::model::grid::Grid;

/// Counts the live cells among the 8 neighbors of `(row, col)`.
///
/// Wrapping is computed modulo the INTERIOR dimensions (`height - 2`,
/// `width - 2`) while the coordinates being wrapped are absolute grid
/// coordinates, border offset included. For cells near the border this does
/// not map cleanly onto "wrap to the opposite edge" -- a historical quirk of
/// the rule that is kept as-is for compatibility. The pin tests below encode
/// two concrete consequences of it.
///
/// Fails with `DegenerateGrid` when the interior region is empty, which the
/// modulo arithmetic cannot tolerate.
pub fn count_neighbors(grid: &Grid, row: u16, col: u16) -> Result<u8, SimError> {
    let inner_h = i32::from(grid.height()) - 2;
    let inner_w = i32::from(grid.width()) - 2;
    if inner_h < 1 || inner_w < 1 {
        return Err(SimError::DegenerateGrid {
            height: grid.height(),
            width: grid.width(),
        });
    }
    Ok(wrapped_count(grid, row, col, inner_h, inner_w))
}

fn wrapped_count(grid: &Grid, row: u16, col: u16, inner_h: i32, inner_w: i32) -> u8 {
    let mut count = 0;
    for di in -1..=1 {
        for dj in -1..=1 {
            if di == 0 && dj == 0 {
                continue;
            }
            // The +inner offset keeps the dividend non-negative.
            let i = (i32::from(row) + di + inner_h) % inner_h;
            let j = (i32::from(col) + dj + inner_w) % inner_w;
            if grid.get(i as u16, j as u16) {
                count += 1;
            }
        }
    }
    count
}

/// Computes the next generation.
///
/// Every interior cell follows the standard rule table (a live cell survives
/// with 2 or 3 live neighbors, a dead cell is born with exactly 3); border
/// cells come out dead no matter what went in. All neighbor counts are taken
/// against the input grid, never the output being built. Grids too small to
/// have an interior are returned unchanged.
pub fn evolve(grid: &Grid) -> Grid {
    if !grid.has_interior() {
        return grid.clone();
    }
    let inner_h = i32::from(grid.height()) - 2;
    let inner_w = i32::from(grid.width()) - 2;

    let mut next = Grid::new(grid.height(), grid.width());
    for row in 1..grid.height() - 1 {
        for col in 1..grid.width() - 1 {
            let neighbors = wrapped_count(grid, row, col, inner_h, inner_w);
            let alive = grid.get(row, col);
            let survives = matches!((alive, neighbors), (true, 2) | (true, 3) | (false, 3));
            if survives {
                next.set(row, col, true);
            }
        }
    }
    next
}

/// Returns a copy of `grid` with the cell at `(row, col)` alive. Out-of-range
/// coordinates, negative ones included, return the grid untouched; that
/// permissive contract is deliberate and relied on by the shell.
pub fn add_cell(grid: &Grid, row: i32, col: i32) -> Grid {
    let mut next = grid.clone();
    if grid.in_bounds(row, col) {
        next.set(row as u16, col as u16, true);
    }
    next
}

/// Seeds a fresh grid: every non-border cell is made alive independently with
/// probability `density`. The border stays dead. The caller supplies the RNG
/// so that runs can be made reproducible.
pub fn random_seed<R: Rng>(
    height: u16,
    width: u16,
    density: f64,
    rng: &mut R,
) -> Result<Grid, SimError> {
    if !(0.0..=1.0).contains(&density) {
        return Err(SimError::InvalidDensity(density));
    }
    let mut grid = Grid::new(height, width);
    if grid.has_interior() {
        for row in 1..grid.height() - 1 {
            for col in 1..grid.width() - 1 {
                if rng.gen::<f64>() < density {
                    grid.set(row, col, true);
                }
            }
        }
    }
    Ok(grid)
}
