//! Structural diffing of canonical values
//!
//! - `diff_node`: the diff-result tree and its canonical rendering
//! - `comparator`: the recursive lock-step comparison
//! - `printer`: flattens a diff result into one line block per leaf

pub mod comparator;
pub mod diff_node;
pub mod printer;
