//! Result and Error types for xstools-data

/// Type alias for Result<T, data::Error>
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for the `xstools-data` crate
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("failed input/output stream")]
    IOError(#[from] std::io::Error),

    #[error("failed to (de)serialise")]
    FailedSerde(#[from] serde_json::Error),

    /// Table energies are too short, undefined, or out of order
    #[error("invalid nuclide table: {0}")]
    InvalidTable(#[from] xstools_utils::Error),

    /// Material refers to a nuclide index that has no table
    #[error("material {material} uses nuclide {nuclide} but only {available} tables exist")]
    UnknownNuclide {
        material: usize,
        nuclide: usize,
        available: usize,
    },

    /// Concentrations must be finite and non-negative
    #[error("material {material} has concentration {concentration} for nuclide {nuclide}")]
    InvalidConcentration {
        material: usize,
        nuclide: usize,
        concentration: f64,
    },
}
