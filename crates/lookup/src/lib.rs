//! Cross section lookups on a unionized energy grid
//!
#![doc = include_str!("../readme.md")]
//!
//! ## Quickstart example
//!
//! ```rust
//! # use xstools_data::{Material, NuclideGridPoint, NuclideTable, XsKind, XsVector};
//! # use xstools_grid::UnionizedGrid;
//! # use xstools_lookup::Lookup;
//! let table = NuclideTable::new(vec![
//!     NuclideGridPoint::new(1.0, XsVector::from([2.0, 1.0, 1.0, 0.0, 0.0])),
//!     NuclideGridPoint::new(3.0, XsVector::from([4.0, 2.0, 2.0, 0.0, 0.0])),
//! ])
//! .unwrap();
//!
//! let grid = UnionizedGrid::new(vec![table]).unwrap();
//! let materials = vec![Material::new().with(0, 1.0)];
//! let lookup = Lookup::new(&grid, &materials);
//!
//! // half way between the two rows
//! assert_eq!(lookup.micro(2.0, 0)[XsKind::Total], 3.0);
//! assert_eq!(lookup.macro_xs(2.0, 0)[XsKind::Total], 3.0);
//! ```

mod aggregate;
mod lookup;
mod micro;

#[doc(inline)]
pub use micro::{interpolate, lookup_micro};

#[doc(inline)]
pub use aggregate::{lookup_macro, material_xs};

#[doc(inline)]
pub use lookup::Lookup;
