//! Result and Error types for the utils module

/// Type alias for `Result<T, utils::Error>`
pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, PartialEq)]
/// The error type for `xstools_utils`
pub enum Error {
    /// The slice of float values contains things like NAN or INFINITY
    SliceContainsUndefinedValues,

    /// For when a slice has fewer than the minimum required values
    BelowMinimumSliceLength {
        length: usize,
        minimum_required: usize,
    },

    /// A value is smaller than the one before it
    NotAscending {
        index: usize,
        previous: f64,
        value: f64,
    },

    /// The last two values are equal, leaving an interval of zero width
    ZeroWidthFinalInterval { index: usize, value: f64 },
}

// error boilerplate
impl core::fmt::Display for Error {
    fn fmt(&self, fmt: &mut core::fmt::Formatter) -> core::result::Result<(), core::fmt::Error> {
        match self {
            Self::NotAscending {
                index,
                previous,
                value,
            } => write!(
                fmt,
                "value {value} at index {index} is below the preceding {previous}"
            ),
            Self::BelowMinimumSliceLength {
                length,
                minimum_required,
            } => write!(
                fmt,
                "slice has {length} values but at least {minimum_required} are required"
            ),
            Self::ZeroWidthFinalInterval { index, value } => write!(
                fmt,
                "final interval from index {index} has zero width at {value}"
            ),
            _ => write!(fmt, "{self:?}"),
        }
    }
}

// implement standard error trait to use with ? operator
impl std::error::Error for Error {}
