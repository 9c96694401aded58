//! Preparation pass: raw JSON trees into canonical values
//!
//! Preparation resolves every ambiguity before comparison so the
//! comparator only ever sees canonical values:
//!
//! - an empty list becomes an empty mapping ("nothing here"),
//! - a list of primitives becomes a set (duplicates collapse),
//! - a list of records becomes a mapping keyed by the configured primary
//!   key, first-wins on key collisions,
//! - mappings recurse with ignored keys dropped and child configs
//!   dispatched by key,
//! - scalars pass through unchanged.
//!
//! Anything else (null, booleans, heterogeneous lists, lists of lists)
//! is a fatal [`PrepareError::UnsupportedType`]. The raw input is never
//! mutated; the canonical tree owns all of its structure.

use crate::canonical::config::{DiffConfig, PrimaryKey};
use crate::canonical::value::{CanonicalValue, Scalar};
use crate::error::{PrepareError, PrepareResult};
use serde_json::Value;
use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, BTreeSet};
use tracing::info;

/// Convert one raw side of a comparison into canonical form.
///
/// `config` is only required where the data is ambiguous; passing `None`
/// is fine for trees without record lists. Fails fast on unsupported
/// value types and on record lists with no usable primary key, producing
/// no partial result.
pub fn prepare(data: &Value, config: Option<&DiffConfig>) -> PrepareResult<CanonicalValue> {
    match data {
        Value::Array(items) => prepare_list(items, config),
        Value::Object(fields) => Ok(CanonicalValue::Mapping(prepare_fields(fields, config)?)),
        Value::Number(_) | Value::String(_) => Ok(CanonicalValue::Scalar(prepare_scalar(data)?)),
        Value::Null | Value::Bool(_) => Err(PrepareError::UnsupportedType(data.to_string())),
    }
}

fn prepare_scalar(data: &Value) -> PrepareResult<Scalar> {
    match data {
        Value::Number(number) => match number.as_i64() {
            Some(int) => Ok(Scalar::Int(int)),
            // u64 beyond i64::MAX and actual floats both land here
            None => number
                .as_f64()
                .map(Scalar::Float)
                .ok_or_else(|| PrepareError::UnsupportedType(data.to_string())),
        },
        Value::String(string) => Ok(Scalar::Str(string.clone())),
        other => Err(PrepareError::UnsupportedType(other.to_string())),
    }
}

/// Lists dispatch on their first element: primitives become a set,
/// records become a keyed mapping. Mixed lists are rejected.
fn prepare_list(items: &[Value], config: Option<&DiffConfig>) -> PrepareResult<CanonicalValue> {
    let Some(first) = items.first() else {
        return Ok(CanonicalValue::empty_mapping());
    };

    match first {
        Value::Number(_) | Value::String(_) => {
            let mut elements = BTreeSet::new();
            for item in items {
                elements.insert(prepare_scalar(item)?);
            }
            Ok(CanonicalValue::Set(elements))
        }
        Value::Object(_) => prepare_record_list(items, config),
        other => Err(PrepareError::UnsupportedType(other.to_string())),
    }
}

fn prepare_record_list(
    items: &[Value],
    config: Option<&DiffConfig>,
) -> PrepareResult<CanonicalValue> {
    let primary_key = config
        .and_then(|cfg| cfg.primary_key.as_ref())
        .ok_or_else(|| PrepareError::MissingPrimaryKey(render_items(items)))?;

    let mut result = BTreeMap::new();
    for item in items {
        let Value::Object(fields) = item else {
            return Err(PrepareError::UnsupportedType(item.to_string()));
        };

        // The list-level config also governs the records themselves, so
        // ignore_keys and children apply inside each record.
        let record = CanonicalValue::Mapping(prepare_fields(fields, config)?);
        let key = record_key(&record, primary_key)?;

        match result.entry(key) {
            Entry::Vacant(slot) => {
                slot.insert(record);
            }
            // First record observed for a key wins; later duplicates are
            // dropped with a diagnostic, not an error.
            Entry::Occupied(slot) => {
                info!("Duplicates found:\n{record}\n---\n{kept}", kept = slot.get());
            }
        }
    }

    Ok(CanonicalValue::Mapping(result))
}

fn record_key(record: &CanonicalValue, primary_key: &PrimaryKey) -> PrepareResult<Scalar> {
    let candidates = match primary_key {
        PrimaryKey::Hash => return Ok(Scalar::Str(record.to_string())),
        PrimaryKey::Candidates(candidates) => candidates,
    };

    let CanonicalValue::Mapping(fields) = record else {
        return Err(PrepareError::UnsupportedType(record.to_string()));
    };

    for candidate in candidates {
        let Some(value) = fields.get(&Scalar::Str(candidate.clone())) else {
            continue;
        };
        return match value {
            CanonicalValue::Scalar(scalar) => Ok(scalar.clone()),
            _ => Err(PrepareError::NonScalarPrimaryKey {
                key: candidate.clone(),
                record: record.to_string(),
            }),
        };
    }

    // A record with none of the candidate fields has no identity.
    // Silently merging all such records under one key would compare
    // unrelated data, so this is treated as a configuration error.
    Err(PrepareError::UnresolvedPrimaryKey {
        candidates: candidates.clone(),
        record: record.to_string(),
    })
}

fn prepare_fields(
    fields: &serde_json::Map<String, Value>,
    config: Option<&DiffConfig>,
) -> PrepareResult<BTreeMap<Scalar, CanonicalValue>> {
    let mut result = BTreeMap::new();
    for (key, value) in fields {
        if config.is_some_and(|cfg| cfg.is_ignored(key)) {
            continue;
        }
        let child_config = config.and_then(|cfg| cfg.child(key));
        result.insert(Scalar::Str(key.clone()), prepare(value, child_config)?);
    }
    Ok(result)
}

fn render_items(items: &[Value]) -> String {
    serde_json::to_string(items).unwrap_or_else(|_| "<unprintable>".to_string())
}
