// external crates
use serde::{Deserialize, Serialize};

/// A nuclide and its concentration within a material
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Constituent {
    /// Index of the nuclide table in the library
    pub nuclide: usize,
    /// Number density of the nuclide, must be finite and non-negative
    pub concentration: f64,
}

/// Ordered list of constituents making up a material
///
/// The order does not change the physics but does change the order in which
/// contributions are summed, so it is always kept exactly as given.
///
/// ```rust
/// # use xstools_data::Material;
/// let water = Material::new()
///     .with(0, 6.69e-2)   // H1
///     .with(1, 3.34e-2);  // O16
///
/// assert_eq!(water.len(), 2);
/// assert_eq!(water.constituents[0].nuclide, 0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Constituents in summation order
    #[serde(default)]
    pub constituents: Vec<Constituent>,
}

impl Material {
    /// A material with no constituents
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a constituent, builder style
    pub fn with(mut self, nuclide: usize, concentration: f64) -> Self {
        self.push(nuclide, concentration);
        self
    }

    /// Append a constituent
    pub fn push(&mut self, nuclide: usize, concentration: f64) {
        self.constituents.push(Constituent {
            nuclide,
            concentration,
        });
    }

    /// Number of constituents
    pub fn len(&self) -> usize {
        self.constituents.len()
    }

    /// True if there are no constituents
    pub fn is_empty(&self) -> bool {
        self.constituents.is_empty()
    }

    /// Iterator over constituents in summation order
    pub fn iter(&self) -> std::slice::Iter<'_, Constituent> {
        self.constituents.iter()
    }
}

impl FromIterator<(usize, f64)> for Material {
    fn from_iter<I: IntoIterator<Item = (usize, f64)>>(iter: I) -> Self {
        Self {
            constituents: iter
                .into_iter()
                .map(|(nuclide, concentration)| Constituent {
                    nuclide,
                    concentration,
                })
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Material {
    type Item = &'a Constituent;
    type IntoIter = std::slice::Iter<'a, Constituent>;

    fn into_iter(self) -> Self::IntoIter {
        self.constituents.iter()
    }
}
