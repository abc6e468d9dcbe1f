// standard library
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

// internal modules
use crate::error::{Error, Result};
use crate::material::Material;
use crate::nuclide::NuclideTable;

// external crates
use log::{trace, warn};
use serde::{Deserialize, Serialize};

/// Every nuclide table and material needed for lookups
///
/// Nuclides are identified by their position in `nuclides`, and materials by
/// their position in `materials`. Tables are validated as they are
/// deserialised. Materials are checked against the tables by
/// [Library::validate], which both readers call before returning.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Library {
    /// One table per nuclide
    pub nuclides: Vec<NuclideTable>,
    /// Material compositions
    #[serde(default)]
    pub materials: Vec<Material>,
}

impl Library {
    /// Parse and validate a library from a JSON string
    ///
    /// ```rust
    /// # use xstools_data::Library;
    /// let json = r#"{
    ///     "nuclides": [[
    ///         {"energy": 1.0, "total": 2.0, "elastic": 0.0, "absorption": 0.0, "fission": 0.0, "nu_fission": 0.0},
    ///         {"energy": 3.0, "total": 4.0, "elastic": 0.0, "absorption": 0.0, "fission": 0.0, "nu_fission": 0.0}
    ///     ]],
    ///     "materials": [{"constituents": [{"nuclide": 0, "concentration": 1.0}]}]
    /// }"#;
    ///
    /// let library = Library::from_json_str(json).unwrap();
    /// assert_eq!(library.nuclides.len(), 1);
    /// assert_eq!(library.materials[0].len(), 1);
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self> {
        let library: Library = serde_json::from_str(json)?;
        library.validate()?;
        Ok(library)
    }

    /// Check materials only refer to known nuclides with usable concentrations
    ///
    /// A zero concentration is allowed since it contributes nothing, but is
    /// logged as it is more often a mistake than intended.
    pub fn validate(&self) -> Result<()> {
        let available = self.nuclides.len();

        for (m, material) in self.materials.iter().enumerate() {
            for constituent in material {
                if constituent.nuclide >= available {
                    return Err(Error::UnknownNuclide {
                        material: m,
                        nuclide: constituent.nuclide,
                        available,
                    });
                }

                let c = constituent.concentration;
                if !c.is_finite() || c < 0.0 {
                    return Err(Error::InvalidConcentration {
                        material: m,
                        nuclide: constituent.nuclide,
                        concentration: c,
                    });
                }

                if c == 0.0 {
                    warn!(
                        "Material {m} has zero concentration for nuclide {}",
                        constituent.nuclide
                    );
                }
            }
        }

        Ok(())
    }

    /// Total number of tabulated rows over every nuclide
    pub fn total_points(&self) -> usize {
        self.nuclides.iter().map(NuclideTable::len).sum()
    }
}

/// Read a JSON library from file
///
/// The `path` takes anything that can be turned into a `Path` reference, such
/// as a [&str], [String], [Path], etc...
///
/// Returns the validated [Library], see [Library::from_json_str] for the
/// expected layout.
///
/// ```rust, no_run
/// # use xstools_data::{read_json, Library};
/// let library: Library = read_json("path/to/library.json").unwrap();
/// ```
pub fn read_json<P: AsRef<Path>>(path: P) -> Result<Library> {
    let path: &Path = path.as_ref();
    trace!("Reading nuclear data library from {}", path.display());

    let reader = BufReader::new(File::open(path)?);
    let library: Library = serde_json::from_reader(reader)?;
    library.validate()?;

    trace!(
        "Loaded {} nuclides ({} points) and {} materials",
        library.nuclides.len(),
        library.total_points(),
        library.materials.len()
    );
    Ok(library)
}
