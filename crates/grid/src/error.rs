//! Result and Error types for xstools-grid

/// Type alias for Result<T, grid::Error>
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for the `xstools-grid` crate
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A grid needs at least one nuclide table to merge
    #[error("no nuclide tables provided for the unionized grid")]
    NoNuclides,

    /// Library or table failed validation
    #[error("invalid reference data")]
    Data(#[from] xstools_data::Error),
}
