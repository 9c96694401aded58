//! Canonicalization of raw input trees
//!
//! This module converts raw JSON trees into the canonical form the
//! comparator operates on:
//!
//! - `value`: the canonical value model (scalars, mappings, sets)
//! - `config`: the per-field configuration tree driving normalization
//! - `prepare`: the recursive preparation pass itself

pub mod config;
pub mod prepare;
pub mod value;
