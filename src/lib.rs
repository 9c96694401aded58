//! valdiff - structural comparison of semi-structured data trees
//!
//! The crate compares two trees built from nested mappings, primitive
//! scalars, and homogeneous collections, and reports every discrepancy
//! between them. Comparison happens in two phases:
//!
//! 1. [`canonical::prepare::prepare`] normalizes each raw tree into a
//!    canonical form, turning lists of primitives into sets and lists of
//!    records into mappings keyed by a configured primary key.
//! 2. [`diff::comparator::diff`] walks both canonical trees in lock-step
//!    and builds a diff-result tree; an empty result means the inputs are
//!    structurally identical.
//!
//! The binary target wires these together with JSON file loading, a
//! configuration file, and a printer for the resulting diff.

pub mod canonical;
pub mod diff;
pub mod error;
pub mod logging;

pub use crate::error::{PrepareError, PrepareResult};
