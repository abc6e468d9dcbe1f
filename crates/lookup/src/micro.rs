// xstools modules
use xstools_data::{NuclideGridPoint, XsKind, XsVector};
use xstools_grid::UnionizedGrid;

/// Microscopic cross sections of one nuclide at `energy`
///
/// `index` is the lower bracket on the unionized grid, as returned by
/// [UnionizedGrid::search]. The cached bracket for `nuclide` at that entry
/// gives the two rows of the nuclide table to interpolate between.
///
/// Nothing is checked. An `index` that does not bracket `energy` silently
/// extrapolates, and an unknown `nuclide` or `index` panics on indexing.
///
/// ```rust
/// # use xstools_data::{NuclideGridPoint, NuclideTable, XsKind, XsVector};
/// # use xstools_grid::UnionizedGrid;
/// # use xstools_lookup::lookup_micro;
/// let table = NuclideTable::new(vec![
///     NuclideGridPoint::new(1.0, XsVector::from([2.0, 0.0, 0.0, 0.0, 0.0])),
///     NuclideGridPoint::new(3.0, XsVector::from([4.0, 0.0, 0.0, 0.0, 0.0])),
/// ])
/// .unwrap();
/// let grid = UnionizedGrid::new(vec![table]).unwrap();
///
/// let idx = grid.search(2.0);
/// let xs = lookup_micro(2.0, 0, idx, &grid);
/// assert_eq!(xs[XsKind::Total], 3.0);
/// ```
#[inline]
pub fn lookup_micro(energy: f64, nuclide: usize, index: usize, grid: &UnionizedGrid) -> XsVector {
    let rows = grid.nuclides()[nuclide].points();
    let low = grid.bracket(index, nuclide);
    interpolate(&rows[low], &rows[low + 1], energy)
}

/// Linear interpolation of all five cross sections between two rows
///
/// Evaluated for every channel as
///
/// ```text
/// xs_h - (e_h - energy) * (xs_h - xs_l) / (e_h - e_l)
/// ```
///
/// which is exact at `e_h` and must not be rearranged, as results are
/// compared bit-for-bit between implementations. Rows at the same energy
/// divide by zero.
///
/// ```rust
/// # use xstools_data::{NuclideGridPoint, XsVector};
/// # use xstools_lookup::interpolate;
/// let low = NuclideGridPoint::new(1.0, XsVector::from([1.0, 2.0, 3.0, 4.0, 5.0]));
/// let high = NuclideGridPoint::new(2.0, XsVector::from([2.0, 4.0, 6.0, 8.0, 10.0]));
///
/// let xs = interpolate(&low, &high, 1.5);
/// assert_eq!(xs.into_array(), [1.5, 3.0, 4.5, 6.0, 7.5]);
/// ```
#[inline]
pub fn interpolate(low: &NuclideGridPoint, high: &NuclideGridPoint, energy: f64) -> XsVector {
    let (e_l, e_h) = (low.energy, high.energy);
    let (xs_l, xs_h) = (low.xs(), high.xs());

    let mut xs = XsVector::zeros();
    for k in XsKind::ALL {
        xs[k] = xs_h[k] - (e_h - energy) * (xs_h[k] - xs_l[k]) / (e_h - e_l);
    }
    xs
}
