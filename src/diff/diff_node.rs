//! Diff-result data model
//!
//! A diff result is a tree of [`DiffNode`]s describing every point of
//! divergence between two canonical values; the absence of a node means
//! "no diff". Each variant carries only its own fields, and its textual
//! rendering is a pure function of those fields, so two diff results are
//! equal exactly when their renderings are.
//!
//! [`MappingDiff`] children are stored in a `BTreeMap`, which fixes the
//! rendering and printing order to ascending key order regardless of the
//! order children were discovered in.

use crate::canonical::value::{CanonicalValue, Scalar};
use std::collections::BTreeMap;
use std::fmt;

/// Which side of the comparison lacks a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Source,
    Destination,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Source => write!(f, "SOURCE"),
            Side::Destination => write!(f, "DESTINATION"),
        }
    }
}

/// One point of divergence between two canonical values.
#[derive(Debug, Clone, PartialEq)]
pub enum DiffNode {
    /// The two sides have different runtime kinds at this position.
    TypeMismatch {
        source: CanonicalValue,
        destination: CanonicalValue,
    },
    /// Same scalar kind, unequal values.
    ValueMismatch {
        source: Scalar,
        destination: Scalar,
    },
    /// A key present on one side only. `side` names the side that lacks
    /// the key; `value` comes from the side that has it.
    Missing { side: Side, value: CanonicalValue },
    /// Child diffs of a mapping or set, keyed by mapping key or set
    /// element. Only keys with an actual child diff appear.
    Mapping(MappingDiff),
}

impl fmt::Display for DiffNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiffNode::TypeMismatch {
                source,
                destination,
            } => write!(
                f,
                "TYPE_MISMATCH:\n< {}: {source}\n---\n> {}: {destination}",
                source.kind(),
                destination.kind()
            ),
            DiffNode::ValueMismatch {
                source,
                destination,
            } => write!(f, "VALUE_MISMATCH:\n< {source}\n---\n> {destination}"),
            DiffNode::Missing { side, value } => {
                let marker = match side {
                    // the value shown comes from the side that has it
                    Side::Destination => '<',
                    Side::Source => '>',
                };
                write!(f, "MISS_{side}:\n{marker} {value}")
            }
            DiffNode::Mapping(mapping) => write!(f, "{mapping}"),
        }
    }
}

/// Child diffs collected while comparing two mappings or sets.
///
/// Built bottom-up during comparison and never mutated afterwards except
/// through [`MappingDiff::add_child`]. A `MappingDiff` with no children
/// is logically "no diff" and is never surfaced to a parent; use
/// [`MappingDiff::into_node`] to apply that collapse.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MappingDiff {
    children: BTreeMap<Scalar, DiffNode>,
}

impl MappingDiff {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the diff found under `key`. Keys come from a union of two
    /// key sets, so each key is inserted at most once.
    pub fn add_child(&mut self, key: Scalar, diff: DiffNode) {
        let previous = self.children.insert(key, diff);
        debug_assert!(previous.is_none(), "diff child inserted twice");
    }

    pub fn has_diff(&self) -> bool {
        !self.children.is_empty()
    }

    /// Children in ascending key order.
    pub fn children(&self) -> impl Iterator<Item = (&Scalar, &DiffNode)> {
        self.children.iter()
    }

    /// Collapse to "no diff" when empty, otherwise wrap into a node.
    pub fn into_node(self) -> Option<DiffNode> {
        self.has_diff().then_some(DiffNode::Mapping(self))
    }
}

impl fmt::Display for MappingDiff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (position, (key, child)) in self.children.iter().enumerate() {
            if position > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{key}: {child}")?;
        }
        write!(f, "}}")
    }
}
