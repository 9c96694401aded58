//! Canonical value model
//!
//! Canonical values are the only shape the comparator accepts: scalars
//! (integer, float, string), mappings with unique scalar keys, and sets
//! of unique scalars. Preparation produces them deterministically from
//! raw JSON input, so the comparator can dispatch on an explicit tag
//! instead of inspecting dynamically-typed data.
//!
//! ## Rendering
//!
//! `Display` produces a canonical string rendering: mapping keys and set
//! elements are always enumerated in ascending order and strings are
//! quoted. The rendering is stable across runs, which makes it usable as
//! a content-derived identity for records keyed by the hash sentinel.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// A primitive scalar value: integer, floating-point number, or string.
///
/// Scalars carry a total, deterministic ordering so they can serve as
/// mapping keys and set elements. Variants order before one another as
/// integer < float < string; values within a variant compare naturally
/// (floats via `total_cmp`).
#[derive(Debug, Clone)]
pub enum Scalar {
    Int(i64),
    Float(f64),
    Str(String),
}

impl Scalar {
    /// Name of the scalar's runtime kind, used in type-mismatch reports.
    pub fn kind(&self) -> &'static str {
        match self {
            Scalar::Int(_) => "integer",
            Scalar::Float(_) => "float",
            Scalar::Str(_) => "string",
        }
    }

    /// Render the scalar for use as a path segment in printed diffs.
    ///
    /// Unlike `Display`, strings are not quoted here; key paths read as
    /// `|outer|inner` rather than `|"outer"|"inner"`.
    pub fn as_path_segment(&self) -> String {
        match self {
            Scalar::Str(value) => value.clone(),
            other => other.to_string(),
        }
    }

    fn variant_rank(&self) -> u8 {
        match self {
            Scalar::Int(_) => 0,
            Scalar::Float(_) => 1,
            Scalar::Str(_) => 2,
        }
    }
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Scalar {}

impl PartialOrd for Scalar {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Scalar {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Scalar::Int(a), Scalar::Int(b)) => a.cmp(b),
            (Scalar::Float(a), Scalar::Float(b)) => a.total_cmp(b),
            (Scalar::Str(a), Scalar::Str(b)) => a.cmp(b),
            _ => self.variant_rank().cmp(&other.variant_rank()),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Int(value) => write!(f, "{value}"),
            // Whole floats render with a trailing ".0" so they stay
            // distinguishable from integers in canonical renderings.
            Scalar::Float(value) if value.is_finite() && value.fract() == 0.0 => {
                write!(f, "{value:.1}")
            }
            Scalar::Float(value) => write!(f, "{value}"),
            Scalar::Str(value) => write!(f, "{value:?}"),
        }
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Int(value)
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Float(value)
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Str(value.to_string())
    }
}

/// A fully normalized value, ready for comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CanonicalValue {
    Scalar(Scalar),
    Mapping(BTreeMap<Scalar, CanonicalValue>),
    Set(BTreeSet<Scalar>),
}

impl CanonicalValue {
    /// Canonical empty mapping, the preparation result for empty lists
    /// and empty objects.
    pub fn empty_mapping() -> Self {
        CanonicalValue::Mapping(BTreeMap::new())
    }

    /// Name of the value's runtime kind, used in type-mismatch reports.
    pub fn kind(&self) -> &'static str {
        match self {
            CanonicalValue::Scalar(scalar) => scalar.kind(),
            CanonicalValue::Mapping(_) => "mapping",
            CanonicalValue::Set(_) => "set",
        }
    }
}

impl fmt::Display for CanonicalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CanonicalValue::Scalar(scalar) => write!(f, "{scalar}"),
            CanonicalValue::Mapping(fields) => {
                write!(f, "{{")?;
                for (position, (key, value)) in fields.iter().enumerate() {
                    if position > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                write!(f, "}}")
            }
            CanonicalValue::Set(elements) => {
                write!(f, "{{")?;
                for (position, element) in elements.iter().enumerate() {
                    if position > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{element}")?;
                }
                write!(f, "}}")
            }
        }
    }
}

impl From<Scalar> for CanonicalValue {
    fn from(scalar: Scalar) -> Self {
        CanonicalValue::Scalar(scalar)
    }
}
