// xstools modules
use xstools_utils::SliceExt;

// internal modules
use crate::error::{Error, Result};
use crate::xs::XsVector;

// external crates
use serde::{Deserialize, Serialize};

/// One tabulated row of a nuclide table
///
/// Cross sections are microscopic, in whatever units the library provides.
/// Nothing in the lookup core depends on the units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct NuclideGridPoint {
    /// Incident energy
    pub energy: f64,
    /// Total cross section
    pub total: f64,
    /// Elastic scattering cross section
    pub elastic: f64,
    /// Absorption cross section
    pub absorption: f64,
    /// Fission cross section
    pub fission: f64,
    /// Nu-fission cross section
    pub nu_fission: f64,
}

impl NuclideGridPoint {
    /// Row at `energy` with cross sections taken from `xs`
    ///
    /// ```rust
    /// # use xstools_data::{NuclideGridPoint, XsVector};
    /// let point = NuclideGridPoint::new(1.0, XsVector::from([2.0, 1.0, 1.0, 0.0, 0.0]));
    /// assert_eq!(point.total, 2.0);
    /// assert_eq!(point.elastic, 1.0);
    /// ```
    pub fn new(energy: f64, xs: XsVector) -> Self {
        let [total, elastic, absorption, fission, nu_fission] = xs.into_array();
        Self {
            energy,
            total,
            elastic,
            absorption,
            fission,
            nu_fission,
        }
    }

    /// Cross sections of this row in [XsKind](crate::XsKind) slot order
    #[inline]
    pub fn xs(&self) -> XsVector {
        XsVector::from([
            self.total,
            self.elastic,
            self.absorption,
            self.fission,
            self.nu_fission,
        ])
    }
}

/// Ascending table of rows for a single nuclide
///
/// A table can only be made through [NuclideTable::new], which guarantees:
///
/// - at least two rows, so every energy has a bracketing pair
/// - finite energies
/// - energies never decrease
/// - the last two energies differ, so the final interval has a width
///
/// ```rust
/// # use xstools_data::{NuclideGridPoint, NuclideTable, XsVector};
/// let rows = vec![
///     NuclideGridPoint::new(1.0, XsVector::from([2.0, 0.0, 0.0, 0.0, 0.0])),
///     NuclideGridPoint::new(3.0, XsVector::from([4.0, 0.0, 0.0, 0.0, 0.0])),
/// ];
///
/// let table = NuclideTable::new(rows).unwrap();
/// assert_eq!(table.len(), 2);
/// assert_eq!(table.energy_range(), (1.0, 3.0));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<NuclideGridPoint>", into = "Vec<NuclideGridPoint>")]
pub struct NuclideTable {
    points: Vec<NuclideGridPoint>,
}

impl NuclideTable {
    /// Minimum number of rows needed to interpolate
    pub const MIN_POINTS: usize = 2;

    /// Validate and wrap a list of rows
    ///
    /// Rows are expected to already be sorted. Unsorted input is an error
    /// rather than silently sorted, as that would usually hide a mistake in
    /// whatever produced the data.
    ///
    /// ```rust
    /// # use xstools_data::{NuclideGridPoint, NuclideTable, XsVector};
    /// let point = |e| NuclideGridPoint::new(e, XsVector::zeros());
    ///
    /// assert!(NuclideTable::new(vec![point(1.0)]).is_err());
    /// assert!(NuclideTable::new(vec![point(2.0), point(1.0)]).is_err());
    /// assert!(NuclideTable::new(vec![point(1.0), point(f64::NAN)]).is_err());
    /// assert!(NuclideTable::new(vec![point(1.0), point(2.0), point(2.0)]).is_err());
    ///
    /// // a step inside the table is fine
    /// assert!(NuclideTable::new(vec![point(1.0), point(2.0), point(2.0), point(3.0)]).is_ok());
    /// ```
    pub fn new(points: Vec<NuclideGridPoint>) -> Result<Self> {
        let energies = points.iter().map(|p| p.energy).collect::<Vec<f64>>();
        energies.check_min_length(Self::MIN_POINTS)?;
        energies.check_ascending()?;
        energies.check_open_end()?;
        Ok(Self { points })
    }

    /// Rows in ascending energy order
    pub fn points(&self) -> &[NuclideGridPoint] {
        &self.points
    }

    /// Number of rows, always at least [NuclideTable::MIN_POINTS]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Iterator over the tabulated energies
    pub fn energies(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.energy)
    }

    /// Lowest and highest tabulated energy
    pub fn energy_range(&self) -> (f64, f64) {
        // length is checked on construction
        (self.points[0].energy, self.points[self.len() - 1].energy)
    }

    /// Index of the lower row of the interval containing `energy`
    ///
    /// This is the largest `i` with `points[i].energy <= energy`, clamped to
    /// `0..=len-2` so that `i + 1` is always a valid row. Energies below the
    /// table use the first interval and energies at or above the last row use
    /// the final interval.
    ///
    /// ```rust
    /// # use xstools_data::{NuclideGridPoint, NuclideTable, XsVector};
    /// let point = |e| NuclideGridPoint::new(e, XsVector::zeros());
    /// let table = NuclideTable::new(vec![point(1.0), point(2.0), point(4.0)]).unwrap();
    ///
    /// assert_eq!(table.bracket(0.5), 0);
    /// assert_eq!(table.bracket(1.0), 0);
    /// assert_eq!(table.bracket(2.0), 1);
    /// assert_eq!(table.bracket(3.9), 1);
    /// assert_eq!(table.bracket(4.0), 1);
    /// assert_eq!(table.bracket(9.0), 1);
    /// ```
    pub fn bracket(&self, energy: f64) -> usize {
        let at_or_below = self.points.partition_point(|p| p.energy <= energy);
        at_or_below.saturating_sub(1).min(self.len() - 2)
    }
}

impl TryFrom<Vec<NuclideGridPoint>> for NuclideTable {
    type Error = Error;

    fn try_from(points: Vec<NuclideGridPoint>) -> Result<Self> {
        Self::new(points)
    }
}

impl From<NuclideTable> for Vec<NuclideGridPoint> {
    fn from(table: NuclideTable) -> Self {
        table.points
    }
}
