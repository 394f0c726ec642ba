use rand::Rng;

use crate::grid::Grid;

/// Relative offsets of the 8 cells in the Moore neighborhood.
const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Fill the current generation with random cells.
///
/// Each cell is set alive with probability `alive_percent`/100. The RNG is
/// owned by the caller and seeded once per process, so repeated runs observe
/// different initial grids.
pub fn randomize<R: Rng>(grid: &mut Grid, alive_percent: u8, rng: &mut R) {
    for row in 0..grid.rows() as i32 {
        for col in 0..grid.columns() as i32 {
            let alive = rng.gen_range(0..100u32) < u32::from(alive_percent);
            grid.set(row, col, alive);
        }
    }
}

/// Count live cells among the 8 toroidally wrapped neighbors of (row, col).
///
/// The cell itself is excluded. This is the hot path: it runs
/// rows x columns x 8 times per generation.
pub fn count_live_neighbors(grid: &Grid, row: i32, col: i32) -> u8 {
    let mut count = 0;
    for (dr, dc) in NEIGHBOR_OFFSETS {
        if grid.get(row + dr, col + dc) {
            count += 1;
        }
    }
    count
}

/// Advance the grid one generation under B3/S23.
///
/// Every cell's next state is computed from the frozen current buffer and
/// written to the scratch buffer, so later cells in scan order never see
/// partially updated neighbors. The buffers swap roles after the full pass.
pub fn step(grid: &mut Grid) {
    for row in 0..grid.rows() as i32 {
        for col in 0..grid.columns() as i32 {
            let n = count_live_neighbors(grid, row, col);
            let next = match (grid.get(row, col), n) {
                // Underpopulation or overpopulation.
                (true, n) if n < 2 || n > 3 => false,
                // Survival with 2 or 3 neighbors.
                (true, _) => true,
                // Birth with exactly 3 neighbors.
                (false, 3) => true,
                (false, _) => false,
            };
            grid.set_next(row, col, next);
        }
    }
    grid.swap_buffers();
}
