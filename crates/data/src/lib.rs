//! Reference cross section data for the lookup core
//!
//! The lookup core never builds, checks, or changes any of its inputs. This
//! crate defines what those inputs look like, and provides the one place where
//! they are checked: on construction.
//!
//! ## Quickstart example
//!
//! ```rust, no_run
//! # use xstools_data::{read_json, Library};
//! // Read and validate a library of nuclide tables and materials
//! let library: Library = read_json("path/to/library.json").unwrap();
//! ```
//!
//! ## Core concepts
//!
//! A [Library] holds one [NuclideTable] per nuclide, indexed by position, and a
//! list of [Material]s that refer to those nuclides by the same index.
//!
//! Every table row is a [NuclideGridPoint], and every lookup produces an
//! [XsVector] of five values in the order given by [XsKind].
//!
//! ```rust
//! # use xstools_data::{XsKind, XsVector};
//! let xs = XsVector::from([3.0, 1.0, 2.0, 0.0, 0.0]);
//! assert_eq!(xs[XsKind::Total], 3.0);
//! assert_eq!(xs[XsKind::Absorption], 2.0);
//! ```

mod error;
mod library;
mod material;
mod nuclide;
mod xs;

#[doc(inline)]
pub use xs::{XsKind, XsVector};

#[doc(inline)]
pub use nuclide::{NuclideGridPoint, NuclideTable};

#[doc(inline)]
pub use material::{Constituent, Material};

#[doc(inline)]
pub use library::{read_json, Library};

#[doc(inline)]
pub use error::{Error, Result};
