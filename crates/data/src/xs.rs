// standard library
use std::ops::{Index, IndexMut};

// xstools modules
use xstools_utils::{f, ValueExt};

// external crates
use serde::{Deserialize, Serialize};

/// Reaction channels carried by every lookup
///
/// The discriminant is the slot used in an [XsVector], so the order here is
/// the order of every result vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum XsKind {
    /// Total cross section
    Total = 0,
    /// Elastic scattering cross section
    Elastic = 1,
    /// Absorption cross section
    Absorption = 2,
    /// Fission cross section
    Fission = 3,
    /// Fission cross section multiplied by neutrons per fission
    NuFission = 4,
}

impl XsKind {
    /// Number of reaction channels
    pub const COUNT: usize = 5;

    /// Every channel in slot order
    ///
    /// ```rust
    /// # use xstools_data::XsKind;
    /// for (i, kind) in XsKind::ALL.iter().enumerate() {
    ///     assert_eq!(kind.index(), i);
    /// }
    /// ```
    pub const ALL: [XsKind; Self::COUNT] = [
        XsKind::Total,
        XsKind::Elastic,
        XsKind::Absorption,
        XsKind::Fission,
        XsKind::NuFission,
    ];

    /// Slot of this channel in an [XsVector]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Short lowercase name
    pub fn name(&self) -> &'static str {
        match self {
            XsKind::Total => "total",
            XsKind::Elastic => "elastic",
            XsKind::Absorption => "absorption",
            XsKind::Fission => "fission",
            XsKind::NuFission => "nu-fission",
        }
    }
}

impl std::fmt::Display for XsKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Five cross sections, one per [XsKind]
///
/// Results of both microscopic and macroscopic lookups. Every lookup returns a
/// fresh value, nothing is retained by the core.
///
/// ```rust
/// # use xstools_data::{XsKind, XsVector};
/// let mut xs = XsVector::zeros();
/// xs[XsKind::Fission] = 0.5;
///
/// assert_eq!(xs[3], 0.5);
/// assert_eq!(xs.into_array(), [0.0, 0.0, 0.0, 0.5, 0.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct XsVector([f64; XsKind::COUNT]);

impl XsVector {
    /// All channels set to zero
    pub const fn zeros() -> Self {
        Self([0.0; XsKind::COUNT])
    }

    /// Accumulate `other * factor` into every channel
    ///
    /// Each slot is updated as `self[k] += other[k] * factor`, in slot order.
    /// This is the accumulation used when summing nuclides into a material, so
    /// the rounding behaviour is the same whichever caller uses it.
    ///
    /// ```rust
    /// # use xstools_data::XsVector;
    /// let mut total = XsVector::zeros();
    /// total.add_scaled(&XsVector::from([1.0, 2.0, 3.0, 4.0, 5.0]), 0.5);
    /// total.add_scaled(&XsVector::from([1.0, 1.0, 1.0, 1.0, 1.0]), 2.0);
    ///
    /// assert_eq!(total.into_array(), [2.5, 3.0, 3.5, 4.0, 4.5]);
    /// ```
    #[inline]
    pub fn add_scaled(&mut self, other: &XsVector, factor: f64) {
        for (acc, value) in self.0.iter_mut().zip(other.0.iter()) {
            *acc += value * factor;
        }
    }

    /// Iterate over values in slot order
    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.0.iter()
    }

    /// Iterate over (channel, value) pairs in slot order
    pub fn channels(&self) -> impl Iterator<Item = (XsKind, f64)> + '_ {
        XsKind::ALL.into_iter().zip(self.0.iter().copied())
    }

    /// Borrow the underlying values
    pub fn as_array(&self) -> &[f64; XsKind::COUNT] {
        &self.0
    }

    /// Consume into the underlying values
    pub fn into_array(self) -> [f64; XsKind::COUNT] {
        self.0
    }
}

impl From<[f64; XsKind::COUNT]> for XsVector {
    fn from(values: [f64; XsKind::COUNT]) -> Self {
        Self(values)
    }
}

impl From<XsVector> for [f64; XsKind::COUNT] {
    fn from(xs: XsVector) -> Self {
        xs.0
    }
}

impl Index<XsKind> for XsVector {
    type Output = f64;

    #[inline]
    fn index(&self, kind: XsKind) -> &f64 {
        &self.0[kind.index()]
    }
}

impl IndexMut<XsKind> for XsVector {
    #[inline]
    fn index_mut(&mut self, kind: XsKind) -> &mut f64 {
        &mut self.0[kind.index()]
    }
}

impl Index<usize> for XsVector {
    type Output = f64;

    #[inline]
    fn index(&self, slot: usize) -> &f64 {
        &self.0[slot]
    }
}

impl IndexMut<usize> for XsVector {
    #[inline]
    fn index_mut(&mut self, slot: usize) -> &mut f64 {
        &mut self.0[slot]
    }
}

impl std::fmt::Display for XsVector {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let parts = self
            .channels()
            .map(|(kind, value)| f!("{kind} {}", value.sci(5, 2)))
            .collect::<Vec<String>>();

        write!(f, "[{}]", parts.join(", "))
    }
}
