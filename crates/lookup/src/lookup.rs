// xstools modules
use xstools_data::{Material, XsVector};
use xstools_grid::UnionizedGrid;

// internal modules
use crate::aggregate::{lookup_macro, material_xs};
use crate::micro::lookup_micro;

/// Borrowed view of everything a lookup needs
///
/// Holds nothing but two shared references, so it is `Copy` and can be handed
/// to every worker thread of a transport loop.
///
/// ```rust
/// # use xstools_data::{Material, NuclideGridPoint, NuclideTable, XsVector};
/// # use xstools_grid::UnionizedGrid;
/// # use xstools_lookup::Lookup;
/// # let table = NuclideTable::new(vec![
/// #     NuclideGridPoint::new(1.0, XsVector::from([1.0; 5])),
/// #     NuclideGridPoint::new(2.0, XsVector::from([3.0; 5])),
/// # ])
/// # .unwrap();
/// let grid = UnionizedGrid::new(vec![table]).unwrap();
/// let materials = vec![Material::new().with(0, 2.0)];
/// let lookup = Lookup::new(&grid, &materials);
///
/// std::thread::scope(|s| {
///     for _ in 0..4 {
///         s.spawn(move || assert_eq!(lookup.macro_xs(1.5, 0)[0], 4.0));
///     }
/// });
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Lookup<'a> {
    grid: &'a UnionizedGrid,
    materials: &'a [Material],
}

impl<'a> Lookup<'a> {
    /// Bundle a grid with the materials that refer to its nuclides
    pub fn new(grid: &'a UnionizedGrid, materials: &'a [Material]) -> Self {
        Self { grid, materials }
    }

    /// Microscopic cross sections of a single nuclide
    ///
    /// Searches the grid for `energy` then interpolates, see [lookup_micro].
    #[inline]
    pub fn micro(&self, energy: f64, nuclide: usize) -> XsVector {
        let index = self.grid.search(energy);
        lookup_micro(energy, nuclide, index, self.grid)
    }

    /// Macroscopic cross sections of a material by index
    #[inline]
    pub fn macro_xs(&self, energy: f64, material: usize) -> XsVector {
        lookup_macro(energy, material, self.grid, self.materials)
    }

    /// Macroscopic cross sections of a material that is not in the list
    #[inline]
    pub fn macro_xs_for(&self, energy: f64, material: &Material) -> XsVector {
        material_xs(energy, material, self.grid)
    }

    /// The unionized grid being searched
    pub fn grid(&self) -> &'a UnionizedGrid {
        self.grid
    }

    /// Materials available by index
    pub fn materials(&self) -> &'a [Material] {
        self.materials
    }
}
