//! Hub-and-spoke conversion between `FlowPipeline` schema versions.
//!
//! Only the hub version is ever persisted. A client writing at a spoke
//! version goes through [`UpConvert`] before storage; a client reading at a
//! spoke version gets the stored hub passed through [`DownConvert`], which
//! also refreshes the stash on the object it returns. Both directions are
//! synchronous pure functions of their inputs plus the built-in
//! default-metrics table; per-resource write/read ordering is the caller's
//! job.
//!
//! # Architecture
//!
//! Each spoke converter is the same three-layer sandwich:
//!
//! - [`fields::FieldMapper`] does the mechanical copy plus an explicit
//!   per-version table of remaps for the fields whose shape or spelling
//!   changed — enum respelling ([`case`]), metric-selection resolution
//!   ([`metrics`]) and endpoint-union flattening ([`loki`]).
//! - [`stash`] preserves the full hub spec across the lossy spoke schema.
//! - The converter merges the two on the way up: stash values land only in
//!   fields the spoke schema cannot see; anything spoke-visible keeps the
//!   spoke object's current value.
//!
//! # Example
//!
//! ```
//! use flowpipe_schema::convert::{DownConvert, UpConvert};
//! use flowpipe_schema::resource::{hub, v1};
//!
//! let stored = hub::FlowPipeline::default();
//! let served: v1::FlowPipeline = stored.down_convert()?;
//! let written_back = served.up_convert()?;
//! assert_eq!(written_back.spec, stored.spec);
//! # Ok::<(), flowpipe_schema::errors::ConvertError>(())
//! ```

pub mod case;
pub mod fields;
pub mod loki;
pub mod metrics;
pub mod stash;
pub mod v1;
pub mod v2;

use crate::errors::ConvertResult;
use crate::resource::SchemaVersion;
use crate::resource::hub::FlowPipelineSpec;

/// Conversion from a spoke version into the canonical hub.
///
/// Invoked by the storage layer on every write at a spoke version. An error
/// rejects the write; nothing is partially persisted.
pub trait UpConvert {
    type Hub;

    /// Produce the hub object this spoke object denotes, recovering
    /// hub-only fields from the stash when one is present and trusted.
    fn up_convert(&self) -> ConvertResult<Self::Hub>;
}

/// Conversion from the canonical hub down to a spoke version.
///
/// Invoked by the storage layer on every read at a spoke version. The
/// returned spoke object carries a freshly written stash so that a later
/// up-conversion can restore what the spoke schema drops.
pub trait DownConvert<Spoke>: Sized {
    fn down_convert(&self) -> ConvertResult<Spoke>;
}

/// Overlay stashed hub-only state onto a freshly mapped hub spec.
///
/// Only fields invisible to `version`'s schema are touched — with one
/// deliberate exception: a stashed explicit metric include-list always
/// wins, because an explicit list must survive round trips verbatim even
/// though the tags it outranks are spoke-visible.
fn restore_hub_only(spec: &mut FlowPipelineSpec, stashed: FlowPipelineSpec, version: SchemaVersion) {
    if version == SchemaVersion::V1 {
        // V2 exposes these; V1 does not.
        spec.agent.features = stashed.agent.features;
        spec.processor.conversation_end_timeout = stashed.processor.conversation_end_timeout;
    }
    spec.processor.conversation_heartbeat_interval =
        stashed.processor.conversation_heartbeat_interval;
    spec.processor.conversation_terminating_timeout =
        stashed.processor.conversation_terminating_timeout;
    if stashed.processor.metrics.include_list.is_some() {
        spec.processor.metrics.include_list = stashed.processor.metrics.include_list;
    }
    spec.loki = loki::merge_endpoint(spec.loki.clone(), &stashed.loki);
}
