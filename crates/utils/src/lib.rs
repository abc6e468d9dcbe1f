//! Common utility for extended `std` types
//!
//! These are left public for convenience.
//!
//! Checking that a table of energies is usable, or printing cross sections in
//! a consistent scientific format, is needed by every crate in the toolkit.

// Alias for the format! macro
pub use std::format as f;

// Modules
mod error;
mod slice_ext;
mod value_ext;

// Flatten
pub use error::{Error, Result};
pub use slice_ext::SliceExt;
pub use value_ext::ValueExt;
