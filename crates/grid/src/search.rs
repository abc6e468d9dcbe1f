// internal modules
use crate::grid::GridPoint;

/// Binary search for the lower bracket of `energy` on a unionized grid
///
/// Returns an index `i` in `0..=n-2` such that
/// `grid[i].energy <= energy <= grid[i + 1].energy` for any energy within the
/// grid. An entry exactly equal to `energy` is returned as soon as it is hit.
///
/// The interval is narrowed as `[min, max]` with `mid = min + (max - min) / 2`
/// until `max == min + 1`, at which point `min` is the lower bracket.
///
/// Energies outside the grid are not an error, but the result is just the
/// first or last interval and should not be relied upon.
///
/// ```rust
/// # use xstools_grid::{grid_search, GridPoint};
/// let grid = [1.0, 2.0, 3.0, 4.0]
///     .iter()
///     .map(|e| GridPoint { energy: *e })
///     .collect::<Vec<GridPoint>>();
///
/// assert_eq!(grid_search(&grid, 1.0), 0);
/// assert_eq!(grid_search(&grid, 1.5), 0);
/// assert_eq!(grid_search(&grid, 2.0), 1);
/// assert_eq!(grid_search(&grid, 3.9), 2);
/// assert_eq!(grid_search(&grid, 4.0), 2);
/// ```
#[inline]
pub fn grid_search(grid: &[GridPoint], energy: f64) -> usize {
    let mut min = 0;
    let mut max = grid.len().saturating_sub(1);

    while max > min + 1 {
        let mid = min + (max - min) / 2;
        let e = grid[mid].energy;

        if e < energy {
            min = mid;
        } else if e > energy {
            max = mid;
        } else {
            return mid;
        }
    }

    min
}
