//! # Flowpipe Schema
//!
//! The configuration-schema evolution layer of the Flowpipe cluster
//! configuration manager. One logical resource — the [`FlowPipeline`],
//! describing how a network-flow collection pipeline is deployed — is
//! exposed to clients under three schema versions: V1 (oldest), V2 and the
//! canonical hub. Only the hub is ever persisted; this crate converts on
//! the fly whenever a client reads or writes at an older version.
//!
//! ## Features
//!
//! - **Hub-and-spoke conversion**: one converter per spoke version,
//!   mechanical field copying plus explicit remaps for everything whose
//!   shape changed
//! - **Lossless round trips**: hub-only fields survive a pass through a
//!   lossy spoke schema via a serialized snapshot stashed on the spoke
//!   object's metadata
//! - **Enum respelling**: spoke `UPPER_SNAKE` literals and hub
//!   `PascalCase` literals are inverse images of each other over every
//!   declared domain
//! - **Derived endpoints**: the log-storage endpoint union flattens to the
//!   single shape old clients understand, deriving URLs that were never
//!   written down
//!
//! ## Quick Start
//!
//! ```
//! use flowpipe_schema::prelude::*;
//!
//! // A client reads the stored resource at V1...
//! let stored = hub::FlowPipeline::default();
//! let served: v1::FlowPipeline = stored.down_convert()?;
//!
//! // ...edits a V1-visible field and writes it back.
//! let mut edited = served;
//! edited.spec.agent.sampling = 10;
//! let written: hub::FlowPipeline = edited.up_convert()?;
//!
//! assert_eq!(written.spec.agent.sampling, 10);
//! // Nothing hub-only was lost in the spoke round trip.
//! assert_eq!(written.spec.loki, stored.spec.loki);
//! # Ok::<(), flowpipe_schema::errors::ConvertError>(())
//! ```
//!
//! [`FlowPipeline`]: crate::resource::hub::FlowPipeline

pub mod convert;
pub mod errors;
pub mod prelude;
pub mod resource;
