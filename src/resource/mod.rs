//! Versioned `FlowPipeline` resource model.
//!
//! One logical resource, three schemas: [`v1`] (oldest spoke), [`v2`]
//! (middle spoke) and [`hub`] (canonical, the only version ever persisted).
//! The hub is a strict superset: every spoke-expressible field has a hub
//! counterpart, while several hub fields have no spoke counterpart at all
//! and must ride the stash across spoke round trips.

pub mod hub;
pub mod meta;
pub mod v1;
pub mod v2;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// The declared schema versions, used for error context and version
/// dispatch at the crate's edges.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    AsRefStr,
    Display,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum SchemaVersion {
    V1,
    V2,
    Hub,
}

impl SchemaVersion {
    /// Whether this version is a spoke (converted on the fly) rather than
    /// the persisted hub.
    pub fn is_spoke(&self) -> bool {
        !matches!(self, SchemaVersion::Hub)
    }
}
