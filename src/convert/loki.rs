//! Log-storage endpoint conversion between the hub's discriminated union
//! and the flat shape the spoke schemas expose.
//!
//! Flattening derives concrete endpoint URLs for whichever variant is
//! active; unflattening always produces the `Manual` variant, since a spoke
//! write can express nothing else. The richer variants survive a spoke
//! round trip through the stash: on up-conversion the stashed union is
//! re-adopted only when the spoke's flat endpoint is still exactly what the
//! stashed variant would flatten to — any spoke-side edit wins and pins the
//! endpoint to `Manual`.

use std::str::FromStr;

use serde_json::Value;

use crate::convert::case::{to_hub_case, to_spoke_case};
use crate::resource::hub::{LokiAuthMode, LokiConfig, LokiManual, LokiMode};
use crate::resource::v1::LokiFlat;

/// Tenant injected when deriving endpoints from a LokiStack reference.
pub const LOKISTACK_TENANT: &str = "network";

/// Gateway endpoint of a LokiStack deployment, used for both ingestion and
/// queries.
pub fn lokistack_gateway_url(name: &str, namespace: &str) -> String {
    format!("https://{name}-gateway-http.{namespace}.svc:8080/api/logs/v1/network/")
}

/// Query-frontend endpoint of a LokiStack deployment, used for readiness.
pub fn lokistack_frontend_url(name: &str, namespace: &str) -> String {
    format!("https://{name}-query-frontend-http.{namespace}.svc:3100/")
}

/// Project the active union variant onto the flat `Manual` shape.
///
/// The selected mode's payload must be present; a union whose discriminator
/// points at a missing payload cannot be projected. After the per-variant
/// step, an empty querier URL falls back to the ingester URL.
pub fn flatten(loki: &LokiConfig) -> Result<LokiManual, String> {
    let mut flat = match loki.mode {
        LokiMode::Manual => loki
            .manual
            .clone()
            .ok_or("manual payload missing for mode Manual")?,
        LokiMode::LokiStack => {
            let stack = loki
                .loki_stack
                .as_ref()
                .ok_or("lokiStack payload missing for mode LokiStack")?;
            let gateway = lokistack_gateway_url(&stack.name, &stack.namespace);
            LokiManual {
                ingester_url: gateway.clone(),
                querier_url: gateway,
                status_url: lokistack_frontend_url(&stack.name, &stack.namespace),
                tenant_id: LOKISTACK_TENANT.into(),
                auth_mode: LokiAuthMode::ForwardUserToken,
            }
        }
        LokiMode::Monolithic => {
            let mono = loki
                .monolithic
                .as_ref()
                .ok_or("monolithic payload missing for mode Monolithic")?;
            LokiManual {
                ingester_url: mono.url.clone(),
                querier_url: mono.url.clone(),
                status_url: mono.url.clone(),
                tenant_id: mono.tenant_id.clone(),
                auth_mode: LokiAuthMode::Disabled,
            }
        }
        LokiMode::Microservices => {
            let micro = loki
                .microservices
                .as_ref()
                .ok_or("microservices payload missing for mode Microservices")?;
            LokiManual {
                ingester_url: micro.ingester_url.clone(),
                querier_url: micro.querier_url.clone(),
                status_url: micro.querier_url.clone(),
                tenant_id: micro.tenant_id.clone(),
                auth_mode: LokiAuthMode::Disabled,
            }
        }
    };
    if flat.querier_url.is_empty() {
        flat.querier_url = flat.ingester_url.clone();
    }
    Ok(flat)
}

/// Lift a spoke's flat endpoint into the union. Always the `Manual`
/// variant; the batching knobs take their documented defaults and are
/// overlaid from the stash by the converter, not here.
pub fn unflatten(flat: &LokiFlat) -> Result<LokiConfig, String> {
    let auth_literal = to_hub_case(&flat.auth_mode);
    let auth_mode = LokiAuthMode::from_str(&auth_literal)
        .map_err(|_| format!("undeclared enum literal \"{}\"", flat.auth_mode))?;
    let mut manual = LokiManual {
        ingester_url: flat.url.clone(),
        querier_url: flat.querier_url.clone(),
        status_url: flat.status_url.clone(),
        tenant_id: flat.tenant_id.clone(),
        auth_mode,
    };
    if manual.querier_url.is_empty() {
        manual.querier_url = manual.ingester_url.clone();
    }
    Ok(LokiConfig {
        enable: flat.enable,
        mode: LokiMode::Manual,
        manual: Some(manual),
        ..LokiConfig::default()
    })
}

/// Flatten back into the spoke shape, spoke spelling included.
pub fn to_flat(loki: &LokiConfig) -> Result<LokiFlat, String> {
    let manual = flatten(loki)?;
    Ok(LokiFlat {
        enable: loki.enable,
        url: manual.ingester_url,
        querier_url: manual.querier_url,
        status_url: manual.status_url,
        tenant_id: manual.tenant_id,
        auth_mode: to_spoke_case(manual.auth_mode.as_ref()),
    })
}

/// Restore the stashed union on up-conversion.
///
/// `mapped` is the Manual-shaped config the spoke's own fields produced;
/// `stashed` is the hub snapshot recovered from the stash. The batching
/// knobs are invisible to spokes and always come back from the stash. The
/// stashed union is re-adopted wholesale only when the spoke still carries
/// exactly its flattened projection — that also undoes the querier-URL
/// fallback for an untouched Manual endpoint. Any spoke-side edit wins and
/// pins the endpoint to the edited Manual shape.
pub(crate) fn merge_endpoint(mapped: LokiConfig, stashed: &LokiConfig) -> LokiConfig {
    let mut merged = mapped;
    merged.batch_size = stashed.batch_size;
    merged.batch_wait = stashed.batch_wait.clone();

    match flatten(stashed) {
        Ok(expected) if merged.manual.as_ref() == Some(&expected) => {
            merged.mode = stashed.mode;
            merged.manual = stashed.manual.clone();
            merged.loki_stack = stashed.loki_stack.clone();
            merged.monolithic = stashed.monolithic.clone();
            merged.microservices = stashed.microservices.clone();
        }
        Ok(_) => {
            log::debug!("flat log-storage endpoint was edited; keeping Manual mode");
        }
        Err(reason) => {
            log::warn!("stashed log-storage union is not projectable ({reason}); keeping Manual mode");
        }
    }
    merged
}

/// Value-tree remap for `loki` on up-conversion.
pub(crate) fn remap_to_hub(node: &mut Value) -> Result<(), String> {
    let flat: LokiFlat =
        serde_json::from_value(node.take()).map_err(|err| format!("bad flat endpoint: {err}"))?;
    let lifted = unflatten(&flat)?;
    *node = serde_json::to_value(lifted).map_err(|err| err.to_string())?;
    Ok(())
}

/// Value-tree remap for `loki` on down-conversion.
pub(crate) fn remap_to_spoke(node: &mut Value) -> Result<(), String> {
    let loki: LokiConfig =
        serde_json::from_value(node.take()).map_err(|err| format!("bad endpoint union: {err}"))?;
    let flat = to_flat(&loki)?;
    *node = serde_json::to_value(flat).map_err(|err| err.to_string())?;
    Ok(())
}
