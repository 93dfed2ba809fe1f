//! Prelude module for convenient imports.
//!
//! Re-exports the types and traits nearly every caller of the conversion
//! layer needs, so the storage/admission machinery can get by on a single
//! import.
//!
//! # Usage
//!
//! ```rust,ignore
//! use flowpipe_schema::prelude::*;
//! ```
//!
//! # What's Included
//!
//! ## Conversion
//!
//! - [`UpConvert`] / [`DownConvert`]: the per-spoke converter traits
//! - [`SchemaVersion`]: version tags for dispatch and error context
//!
//! ## Resource Model
//!
//! - [`hub`], [`v1`], [`v2`]: the versioned `FlowPipeline` modules
//! - [`ObjectMeta`]: the shared envelope metadata
//!
//! ## Error Handling
//!
//! - [`ConvertError`]: the conversion error taxonomy
//! - [`ConvertResult`]: result alias (`Result<T, ConvertError>`)
//!
//! # Not Included
//!
//! The component internals (enum respelling, the metric-tag resolver, the
//! endpoint flattener, the stash) stay behind their modules in
//! [`convert`](crate::convert); import them explicitly when poking at a
//! single conversion concern.

pub use crate::convert::{DownConvert, UpConvert};
pub use crate::errors::{ConvertError, ConvertResult};
pub use crate::resource::SchemaVersion;
pub use crate::resource::meta::ObjectMeta;
pub use crate::resource::{hub, v1, v2};
