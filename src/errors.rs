use thiserror::Error;

use crate::resource::SchemaVersion;

pub type ConvertResult<T> = Result<T, ConvertError>;

/// Errors surfaced by the conversion layer.
///
/// Only structural mapping failures and stash *encoding* failures are
/// errors. A stash payload that is absent, undecodable or recorded for a
/// different resource identity is not: those cases degrade to "no stash"
/// inside [`convert::stash`](crate::convert::stash), at most leaving a log
/// line behind.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// A manual remap could not produce a valid result, e.g. an undeclared
    /// enum literal or a union payload missing for its selected mode. Fails
    /// the whole conversion atomically; the caller rejects the operation.
    #[error("Mapping Error at {version}/{field}: {reason}")]
    Mapping {
        version: SchemaVersion,
        field: String,
        reason: String,
    },

    /// The hub snapshot could not be serialized into the stash annotation.
    #[error("Stash Encode Error: {0}")]
    StashEncode(#[source] serde_json::Error),
}

impl ConvertError {
    pub(crate) fn mapping(
        version: SchemaVersion,
        field: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        ConvertError::Mapping {
            version,
            field: field.into(),
            reason: reason.into(),
        }
    }
}
