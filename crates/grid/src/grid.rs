// xstools modules
use xstools_data::{Library, NuclideTable};

// internal modules
use crate::error::{Error, Result};
use crate::search::grid_search;

// external crates
use itertools::Itertools;
use log::debug;

/// One entry of the unionized energy grid
///
/// The cached bracket of every nuclide for this entry lives on the owning
/// [UnionizedGrid], see [UnionizedGrid::brackets].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridPoint {
    /// Energy of this grid entry
    pub energy: f64,
}

/// Unionized energy grid and the nuclide tables it indexes into
///
/// The grid owns the tables so that the cached bracket indices can never
/// refer to anything other than the tables they were computed from. Both are
/// immutable once built.
///
/// ### Memory use
///
/// Bracket indices are held in one contiguous block, one row of
/// `n_nuclides` indices per grid entry, so the cache is roughly
/// `8 * nuclides * total_points` bytes. For large nuclide counts this dwarfs
/// the nuclide tables themselves.
#[derive(Debug, Clone, PartialEq)]
pub struct UnionizedGrid {
    points: Vec<GridPoint>,
    /// Row-major `points.len() x nuclides.len()`
    brackets: Vec<usize>,
    nuclides: Vec<NuclideTable>,
}

impl UnionizedGrid {
    /// Merge every nuclide table into a unionized grid
    ///
    /// The grid has one entry per tabulated row over all nuclides, sorted by
    /// energy. Repeated energies are kept, so the length is always the total
    /// number of rows.
    ///
    /// Brackets are found with a single forward sweep per nuclide rather than
    /// a search per entry, which works because the grid is sorted.
    pub fn new(nuclides: Vec<NuclideTable>) -> Result<Self> {
        if nuclides.is_empty() {
            return Err(Error::NoNuclides);
        }

        let energies = nuclides
            .iter()
            .map(|table| table.energies())
            .kmerge_by(|a: &f64, b: &f64| a < b)
            .collect::<Vec<f64>>();

        debug!(
            "Building unionized grid of {} points for {} nuclides",
            energies.len(),
            nuclides.len()
        );

        let stride = nuclides.len();
        let mut brackets = vec![0; energies.len() * stride];

        for (nuclide, table) in nuclides.iter().enumerate() {
            let rows = table.points();
            let last_interval = rows.len() - 2;
            let mut idx = 0;

            for (i, energy) in energies.iter().enumerate() {
                while idx < last_interval && rows[idx + 1].energy <= *energy {
                    idx += 1;
                }
                brackets[i * stride + nuclide] = idx;
            }
        }

        let points = energies
            .into_iter()
            .map(|energy| GridPoint { energy })
            .collect();

        Ok(Self {
            points,
            brackets,
            nuclides,
        })
    }

    /// Build a grid from the nuclide tables of a library
    ///
    /// The library is validated first so that its materials are safe to look
    /// up on the resulting grid. Tables are cloned, the materials are left
    /// with the library.
    pub fn from_library(library: &Library) -> Result<Self> {
        library.validate()?;
        Self::new(library.nuclides.clone())
    }

    /// Lower bracket index of `energy` on the unionized grid
    ///
    /// See [grid_search] for details.
    #[inline]
    pub fn search(&self, energy: f64) -> usize {
        grid_search(&self.points, energy)
    }

    /// Cached lower bracket of every nuclide at grid entry `index`
    ///
    /// Element `n` is the row of nuclide `n`'s table at or below the entry's
    /// energy, always with a valid row after it.
    ///
    /// # Panics
    ///
    /// If `index` is not a valid grid entry.
    #[inline]
    pub fn brackets(&self, index: usize) -> &[usize] {
        let stride = self.n_nuclides();
        &self.brackets[index * stride..(index + 1) * stride]
    }

    /// Cached lower bracket of a single nuclide at grid entry `index`
    #[inline]
    pub fn bracket(&self, index: usize, nuclide: usize) -> usize {
        self.brackets(index)[nuclide]
    }

    /// Grid entries in ascending energy order
    pub fn points(&self) -> &[GridPoint] {
        &self.points
    }

    /// Nuclide tables, indexed by nuclide
    pub fn nuclides(&self) -> &[NuclideTable] {
        &self.nuclides
    }

    /// Number of grid entries
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Number of nuclides covered by the grid
    pub fn n_nuclides(&self) -> usize {
        self.nuclides.len()
    }

    /// Lowest and highest energy on the grid
    ///
    /// Lookups are only meaningful for energies in this range.
    pub fn energy_range(&self) -> (f64, f64) {
        (self.points[0].energy, self.points[self.len() - 1].energy)
    }

    /// Hand back the nuclide tables, dropping the grid
    pub fn into_nuclides(self) -> Vec<NuclideTable> {
        self.nuclides
    }
}
