//! Unionized energy grid for shared cross section searches
//!
#![doc = include_str!("../readme.md")]
//!
//! ## Quickstart example
//!
//! ```rust
//! # use xstools_data::{NuclideGridPoint, NuclideTable, XsVector};
//! # use xstools_grid::UnionizedGrid;
//! fn table(energies: &[f64]) -> NuclideTable {
//!     let rows = energies
//!         .iter()
//!         .map(|e| NuclideGridPoint::new(*e, XsVector::zeros()))
//!         .collect();
//!     NuclideTable::new(rows).unwrap()
//! }
//!
//! let grid = UnionizedGrid::new(vec![
//!     table(&[1.0, 3.0, 5.0]),
//!     table(&[2.0, 4.0, 6.0]),
//! ])
//! .unwrap();
//!
//! // one search brackets the energy on the unionized grid
//! let idx = grid.search(3.5);
//! assert_eq!(grid.points()[idx].energy, 3.0);
//!
//! // which also gives the lower row for every nuclide
//! assert_eq!(grid.brackets(idx), &[1, 0]);
//! ```

mod error;
mod grid;
mod search;

#[doc(inline)]
pub use grid::{GridPoint, UnionizedGrid};

#[doc(inline)]
pub use search::grid_search;

#[doc(inline)]
pub use error::{Error, Result};
