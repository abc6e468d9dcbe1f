// xstools modules
use xstools_data::{Material, XsVector};
use xstools_grid::UnionizedGrid;

// internal modules
use crate::micro::lookup_micro;

/// Macroscopic cross sections of a material at `energy`
///
/// Looks up `materials[material]` and defers to [material_xs]. Panics if the
/// material does not exist.
///
/// ```rust
/// # use xstools_data::{Material, NuclideGridPoint, NuclideTable, XsKind, XsVector};
/// # use xstools_grid::UnionizedGrid;
/// # use xstools_lookup::lookup_macro;
/// let rows = |a: f64, b: f64| {
///     NuclideTable::new(vec![
///         NuclideGridPoint::new(1.0, XsVector::from([a; 5])),
///         NuclideGridPoint::new(3.0, XsVector::from([b; 5])),
///     ])
///     .unwrap()
/// };
///
/// let grid = UnionizedGrid::new(vec![rows(2.0, 4.0), rows(10.0, 10.0)]).unwrap();
/// let materials = vec![Material::new().with(0, 1.0).with(1, 0.5)];
///
/// // 1.0 * 3.0 + 0.5 * 10.0
/// let xs = lookup_macro(2.0, 0, &grid, &materials);
/// assert_eq!(xs[XsKind::Total], 8.0);
/// ```
#[inline]
pub fn lookup_macro(
    energy: f64,
    material: usize,
    grid: &UnionizedGrid,
    materials: &[Material],
) -> XsVector {
    material_xs(energy, &materials[material], grid)
}

/// Macroscopic cross sections of any material at `energy`
///
/// One search on the unionized grid is shared by every constituent. Each
/// nuclide's microscopic cross sections are then added as
/// `result[k] += micro[k] * concentration`, in the order the constituents are
/// listed. A material with no constituents gives all zeros.
///
/// Useful when the material is not part of a library, such as a mixture
/// built on the fly.
///
/// ```rust
/// # use xstools_data::{Material, NuclideGridPoint, NuclideTable, XsVector};
/// # use xstools_grid::UnionizedGrid;
/// # use xstools_lookup::material_xs;
/// let table = NuclideTable::new(vec![
///     NuclideGridPoint::new(1.0, XsVector::from([1.0; 5])),
///     NuclideGridPoint::new(2.0, XsVector::from([1.0; 5])),
/// ])
/// .unwrap();
/// let grid = UnionizedGrid::new(vec![table]).unwrap();
///
/// let xs = material_xs(1.5, &Material::new(), &grid);
/// assert_eq!(xs, XsVector::zeros());
/// ```
#[inline]
pub fn material_xs(energy: f64, material: &Material, grid: &UnionizedGrid) -> XsVector {
    let mut xs = XsVector::zeros();
    let index = grid.search(energy);

    for constituent in material {
        let micro = lookup_micro(energy, constituent.nuclide, index, grid);
        xs.add_scaled(&micro, constituent.concentration);
    }

    xs
}
