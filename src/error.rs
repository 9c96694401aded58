//! Error types for the preparation pass.
//!
//! All variants are fatal: preparation aborts on the first unsupported
//! value or unusable configuration and never returns a partial result.
//! Duplicate primary keys are deliberately not an error; they are logged
//! and resolved first-wins during preparation.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PrepareError {
    /// A value outside the supported shapes (integer, float, string,
    /// mapping, list of primitives, list of mappings) was encountered.
    #[error("type not supported: {0}")]
    UnsupportedType(String),

    /// A list of mappings was encountered without a primary-key
    /// configuration for its position.
    #[error("primary key configuration missing for list of mappings: {0}")]
    MissingPrimaryKey(String),

    /// None of the configured candidate fields exist in a record, so the
    /// record cannot be assigned an identity.
    #[error("no primary key candidate of {candidates:?} found in record {record}")]
    UnresolvedPrimaryKey {
        candidates: Vec<String>,
        record: String,
    },

    /// The configured primary-key field resolved to a mapping or set,
    /// which cannot serve as a record identity.
    #[error("primary key field {key:?} is not a scalar in record {record}")]
    NonScalarPrimaryKey { key: String, record: String },
}

pub type PrepareResult<T> = Result<T, PrepareError>;
