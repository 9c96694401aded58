//! Recursive structural comparison of canonical values
//!
//! Both inputs must already be canonical (see
//! [`crate::canonical::prepare`]). Because canonical values form a
//! closed tagged union, every kind combination is covered below and the
//! comparison is total and infallible; the "unsupported type" failure of
//! a dynamically-typed implementation has no reachable counterpart here.

use crate::canonical::value::{CanonicalValue, Scalar};
use crate::diff::diff_node::{DiffNode, MappingDiff, Side};
use std::collections::{BTreeMap, BTreeSet};

/// Compare two canonical values; `None` means no divergence.
pub fn diff(source: &CanonicalValue, destination: &CanonicalValue) -> Option<DiffNode> {
    match (source, destination) {
        (CanonicalValue::Scalar(left), CanonicalValue::Scalar(right)) => {
            diff_scalars(left, right)
        }
        (CanonicalValue::Mapping(left), CanonicalValue::Mapping(right)) => {
            diff_mappings(left, right)
        }
        (CanonicalValue::Set(left), CanonicalValue::Set(right)) => diff_sets(left, right),
        // mapping vs set, scalar vs composite
        _ => Some(DiffNode::TypeMismatch {
            source: source.clone(),
            destination: destination.clone(),
        }),
    }
}

fn diff_scalars(source: &Scalar, destination: &Scalar) -> Option<DiffNode> {
    // a scalar subtype mismatch (integer vs string) is a type mismatch,
    // not a value mismatch
    if source.kind() != destination.kind() {
        return Some(DiffNode::TypeMismatch {
            source: CanonicalValue::Scalar(source.clone()),
            destination: CanonicalValue::Scalar(destination.clone()),
        });
    }
    if source != destination {
        return Some(DiffNode::ValueMismatch {
            source: source.clone(),
            destination: destination.clone(),
        });
    }
    None
}

fn diff_mappings(
    source: &BTreeMap<Scalar, CanonicalValue>,
    destination: &BTreeMap<Scalar, CanonicalValue>,
) -> Option<DiffNode> {
    let keys: BTreeSet<&Scalar> = source.keys().chain(destination.keys()).collect();

    let mut result = MappingDiff::new();
    for key in keys {
        match (source.get(key), destination.get(key)) {
            (Some(value), None) => result.add_child(
                key.clone(),
                DiffNode::Missing {
                    side: Side::Destination,
                    value: value.clone(),
                },
            ),
            (None, Some(value)) => result.add_child(
                key.clone(),
                DiffNode::Missing {
                    side: Side::Source,
                    value: value.clone(),
                },
            ),
            (Some(source_value), Some(destination_value)) => {
                if let Some(child) = diff(source_value, destination_value) {
                    result.add_child(key.clone(), child);
                }
            }
            // keys come from the union of both sides
            (None, None) => {}
        }
    }

    result.into_node()
}

/// Sets have no separate key and value; the element serves as both, so
/// only `Missing` children can arise.
fn diff_sets(source: &BTreeSet<Scalar>, destination: &BTreeSet<Scalar>) -> Option<DiffNode> {
    let mut result = MappingDiff::new();
    for element in source.union(destination) {
        if !source.contains(element) {
            result.add_child(
                element.clone(),
                DiffNode::Missing {
                    side: Side::Source,
                    value: CanonicalValue::Scalar(element.clone()),
                },
            );
        } else if !destination.contains(element) {
            result.add_child(
                element.clone(),
                DiffNode::Missing {
                    side: Side::Destination,
                    value: CanonicalValue::Scalar(element.clone()),
                },
            );
        }
    }

    result.into_node()
}
