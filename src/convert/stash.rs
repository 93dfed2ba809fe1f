//! Side-channel preservation of the full hub configuration on spoke
//! objects.
//!
//! A spoke schema cannot hold everything the hub can, so every
//! down-conversion serializes the complete hub spec into a reserved
//! annotation on the spoke object it returns. A later up-conversion reads
//! it back to recover the fields the spoke was never able to carry. The
//! payload records the resource identity it was written for; a payload
//! recorded for some other resource is stale by definition and ignored.
//!
//! Absence and unreadability are both non-fatal: a fresh object created at
//! an old version has no stash (hub-only fields then take their documented
//! defaults), and a corrupted or hand-edited payload degrades to the same
//! thing. The only difference is that corruption leaves a warning in the
//! log — the one observability signal this layer emits.

use serde::{Deserialize, Serialize};

use crate::errors::{ConvertError, ConvertResult};
use crate::resource::hub::{FlowPipeline, FlowPipelineSpec};
use crate::resource::meta::ObjectMeta;

/// Reserved annotation key the stash payload is stored under.
pub const STASH_KEY: &str = "flowpipe.dev/restored-config";

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StashPayload {
    /// Name of the resource the snapshot was taken from.
    identity: String,
    /// The full hub spec at down-conversion time.
    config: FlowPipelineSpec,
}

/// Serialize `hub` into the stash annotation on `meta`, replacing any
/// previous payload.
pub fn save(hub: &FlowPipeline, meta: &mut ObjectMeta) -> ConvertResult<()> {
    let payload = StashPayload {
        identity: hub.metadata.name.clone(),
        config: hub.spec.clone(),
    };
    let encoded = serde_json::to_string(&payload).map_err(ConvertError::StashEncode)?;
    meta.annotations.insert(STASH_KEY.into(), encoded);
    Ok(())
}

/// Read the stashed hub spec back off a spoke object's metadata.
///
/// Returns `None` when there is nothing trustworthy to restore: no
/// annotation, an undecodable payload (warned about, then treated as
/// absent) or a payload recorded for a different resource identity.
pub fn load(meta: &ObjectMeta) -> Option<FlowPipelineSpec> {
    let raw = meta.annotations.get(STASH_KEY)?;
    match serde_json::from_str::<StashPayload>(raw) {
        Ok(payload) if payload.identity == meta.name => Some(payload.config),
        Ok(payload) => {
            log::debug!(
                "ignoring stash recorded for \"{}\" on resource \"{}\"",
                payload.identity,
                meta.name
            );
            None
        }
        Err(err) => {
            log::warn!("ignoring undecodable stash on resource \"{}\": {err}", meta.name);
            None
        }
    }
}
