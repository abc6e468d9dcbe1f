use crate::error::{Error, Result};

/// Extends functionality for slices of float arrays
///
/// Every energy table handed to the lookup core must be finite, ascending,
/// and long enough to bracket a value. These checks are done once when the
/// tables are built so that nothing needs checking on the hot path.
pub trait SliceExt<T> {
    /// Check that values never decrease
    ///
    /// Repeated values are fine, since a unionized grid routinely contains the
    /// same energy from more than one nuclide. Undefined values are rejected.
    ///
    /// ```rust
    /// # use xstools_utils::SliceExt;
    /// # use xstools_utils::Error;
    /// assert_eq!([1.0_f64, 2.0, 2.0, 5.0].check_ascending(), Ok(()));
    /// assert_eq!(
    ///     [1.0_f64, 3.0, 2.0].check_ascending(),
    ///     Err(Error::NotAscending { index: 2, previous: 3.0, value: 2.0 })
    /// );
    /// ```
    fn check_ascending(&self) -> Result<()>;

    /// Check the slice has at least `minimum` values
    ///
    /// ```rust
    /// # use xstools_utils::SliceExt;
    /// assert!([1.0_f64, 2.0].check_min_length(2).is_ok());
    /// assert!([1.0_f64].check_min_length(2).is_err());
    /// ```
    fn check_min_length(&self, minimum: usize) -> Result<()>;

    /// Check the last two values differ
    ///
    /// Repeated values mark a step inside a table, but a step as the very last
    /// pair leaves a final interval of zero width with nothing above it to
    /// interpolate towards.
    ///
    /// ```rust
    /// # use xstools_utils::SliceExt;
    /// # use xstools_utils::Error;
    /// assert_eq!([1.0_f64, 2.0, 2.0, 3.0].check_open_end(), Ok(()));
    /// assert_eq!(
    ///     [1.0_f64, 2.0, 2.0].check_open_end(),
    ///     Err(Error::ZeroWidthFinalInterval { index: 1, value: 2.0 })
    /// );
    /// ```
    fn check_open_end(&self) -> Result<()>;
}

impl SliceExt<f64> for [f64] {
    fn check_ascending(&self) -> Result<()> {
        if self.iter().any(|v| !v.is_finite()) {
            return Err(Error::SliceContainsUndefinedValues);
        };

        // report the first offending pair, index is of the later value
        match self.windows(2).position(|pair| pair[1] < pair[0]) {
            Some(i) => Err(Error::NotAscending {
                index: i + 1,
                previous: self[i],
                value: self[i + 1],
            }),
            None => Ok(()),
        }
    }

    fn check_min_length(&self, minimum: usize) -> Result<()> {
        if self.len() < minimum {
            return Err(Error::BelowMinimumSliceLength {
                length: self.len(),
                minimum_required: minimum,
            });
        }
        Ok(())
    }

    fn check_open_end(&self) -> Result<()> {
        match self {
            [.., low, high] if low == high => Err(Error::ZeroWidthFinalInterval {
                index: self.len() - 2,
                value: *high,
            }),
            _ => Ok(()),
        }
    }
}
