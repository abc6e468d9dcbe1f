//! `xstools` is a small toolkit for fast and reproducible cross section
//! lookups in Monte Carlo particle transport
//!
#![doc = include_str!("../readme.md")]
#![deny(missing_docs, missing_debug_implementations)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

// Re-exports of toolkit crates.
#[doc(inline)]
pub use xstools_data as data;

#[doc(inline)]
pub use xstools_utils as utils;

#[cfg(feature = "grid")]
#[cfg_attr(docsrs, doc(cfg(feature = "grid")))]
#[doc(inline)]
pub use xstools_grid as grid;

#[cfg(feature = "lookup")]
#[cfg_attr(docsrs, doc(cfg(feature = "lookup")))]
#[doc(inline)]
pub use xstools_lookup as lookup;
