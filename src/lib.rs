//! `dtools` is a toolkit of small libraries for neutron diffraction data
//! analysis
//!
#![doc = include_str!("../readme.md")]
#![deny(missing_docs, missing_debug_implementations)]

// Re-exports of toolkit crates.
#[doc(inline)]
pub use dtools_rescale as rescale;
