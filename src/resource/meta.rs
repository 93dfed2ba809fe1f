//! Object envelope metadata shared by every schema version.
//!
//! The conversion layer never interprets metadata beyond two points: the
//! resource `name` (the identity the stash payload is checked against) and
//! the `annotations` side-table (where the stash payload itself lives).
//! Everything else passes through conversions verbatim.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Envelope metadata carried by a [`FlowPipeline`](crate::resource::hub::FlowPipeline)
/// at any schema version.
///
/// # Examples
///
/// ```
/// use flowpipe_schema::resource::meta::ObjectMeta;
///
/// let meta = ObjectMeta::named("cluster");
/// assert_eq!(meta.name, "cluster");
/// assert!(meta.annotations.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ObjectMeta {
    /// Resource name. The resource is cluster-scoped and single-instance,
    /// so the name doubles as the conversion identity.
    pub name: String,

    /// Namespace, if the hosting API happens to scope the resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    /// Opaque unique id assigned by the storage layer. Carried verbatim,
    /// not part of the identity check.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,

    /// String-keyed side-table. The stash occupies one reserved key; all
    /// other entries pass through untouched.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub annotations: BTreeMap<String, String>,
}

impl ObjectMeta {
    /// Metadata with just a name set.
    pub fn named<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}
