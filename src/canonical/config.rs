//! Configuration tree for the preparation pass
//!
//! A [`DiffConfig`] mirrors the shape of the data it configures, but only
//! at the positions where normalization is ambiguous: lists of records
//! need a primary key, and mappings may declare keys to ignore or nested
//! configs for their children. It is built once by the caller, stays
//! immutable, and is only consulted during preparation.
//!
//! Configurations deserialize from JSON, so the CLI can load them from a
//! file:
//!
//! ```json
//! {
//!   "primary_key": ["id", "name"],
//!   "ignore_keys": ["timestamp"],
//!   "children": { "items": { "primary_key": "__HASH__" } }
//! }
//! ```

use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet};

/// Sentinel primary-key value selecting content-derived record identity.
pub const HASH_PRIMARY_KEY: &str = "__HASH__";

/// How records in a list are assigned their mapping key.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "PrimaryKeySpec")]
pub enum PrimaryKey {
    /// Key each record by the canonical string rendering of its prepared
    /// form. Reproducible across runs, unlike a language-level hash.
    Hash,
    /// Ordered candidate field names; the first candidate present in a
    /// given record supplies that record's key.
    Candidates(Vec<String>),
}

impl PrimaryKey {
    /// Single-field convenience constructor.
    pub fn field(name: impl Into<String>) -> Self {
        PrimaryKey::Candidates(vec![name.into()])
    }
}

/// Accepted JSON spellings of a primary key: a single field name, a list
/// of candidate names, or the `__HASH__` sentinel.
#[derive(Deserialize)]
#[serde(untagged)]
enum PrimaryKeySpec {
    Single(String),
    Candidates(Vec<String>),
}

impl From<PrimaryKeySpec> for PrimaryKey {
    fn from(spec: PrimaryKeySpec) -> Self {
        match spec {
            PrimaryKeySpec::Single(name) if name == HASH_PRIMARY_KEY => PrimaryKey::Hash,
            PrimaryKeySpec::Single(name) => PrimaryKey::Candidates(vec![name]),
            PrimaryKeySpec::Candidates(names) => PrimaryKey::Candidates(names),
        }
    }
}

/// Per-field configuration tree consumed by the preparation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DiffConfig {
    /// Required when the configured position holds a list of records.
    pub primary_key: Option<PrimaryKey>,
    /// Mapping keys dropped during preparation, never compared.
    pub ignore_keys: BTreeSet<String>,
    /// Nested configs for mapping keys that need special handling below
    /// this point.
    pub children: BTreeMap<String, DiffConfig>,
}

impl DiffConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_primary_key(mut self, primary_key: PrimaryKey) -> Self {
        self.primary_key = Some(primary_key);
        self
    }

    pub fn ignore_key(mut self, key: impl Into<String>) -> Self {
        self.ignore_keys.insert(key.into());
        self
    }

    pub fn with_child(mut self, key: impl Into<String>, child: DiffConfig) -> Self {
        self.children.insert(key.into(), child);
        self
    }

    pub(crate) fn is_ignored(&self, key: &str) -> bool {
        self.ignore_keys.contains(key)
    }

    pub(crate) fn child(&self, key: &str) -> Option<&DiffConfig> {
        self.children.get(key)
    }
}
