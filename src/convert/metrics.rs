//! Metric-selection conversion between the legacy exclusion tags and the
//! hub's explicit include-list.
//!
//! The spoke schemas disable groups of processor metrics by category tag
//! (`"egress"`, `"packets"`, ...); the hub names the enabled metrics
//! outright. The two meet here: an up-conversion resolves the tag list
//! against the built-in table of default-enabled metrics, while an explicit
//! hub include-list always wins and is never regenerated from tags — the
//! reverse direction is lossy by design, with the stash carrying the
//! explicit list across spoke round trips.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use serde_json::Value;

/// One default-enabled metric and the category tags that can exclude it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricDef {
    pub name: &'static str,
    pub tags: &'static [&'static str],
}

/// The built-in table of default-enabled metrics. Immutable; built into the
/// binary and only ever read.
static DEFAULT_METRICS: &[MetricDef] = &[
    MetricDef { name: "node_ingress_bytes_total", tags: &["node", "ingress", "bytes"] },
    MetricDef { name: "node_egress_bytes_total", tags: &["node", "egress", "bytes"] },
    MetricDef { name: "node_flows_total", tags: &["node", "flows"] },
    MetricDef { name: "namespace_ingress_bytes_total", tags: &["namespace", "ingress", "bytes"] },
    MetricDef { name: "namespace_egress_bytes_total", tags: &["namespace", "egress", "bytes"] },
    MetricDef { name: "namespace_ingress_packets_total", tags: &["namespace", "ingress", "packets"] },
    MetricDef { name: "namespace_flows_total", tags: &["namespace", "flows"] },
    MetricDef { name: "workload_ingress_bytes_total", tags: &["workload", "ingress", "bytes"] },
    MetricDef { name: "workload_egress_bytes_total", tags: &["workload", "egress", "bytes"] },
    MetricDef { name: "workload_flows_total", tags: &["workload", "flows"] },
];

static DEFAULT_NAMES: LazyLock<BTreeSet<&'static str>> =
    LazyLock::new(|| DEFAULT_METRICS.iter().map(|m| m.name).collect());

/// The built-in default-enabled metric table.
pub fn default_metrics() -> &'static [MetricDef] {
    DEFAULT_METRICS
}

/// Compute the hub include-list from a spoke exclusion-tag list.
///
/// An explicit list short-circuits everything and is returned unchanged.
/// Otherwise the default table is filtered by `ignore_tags`; if nothing was
/// actually excluded the result is `None` ("use defaults"), keeping the
/// persisted hub canonical instead of materializing the default set. A
/// computed list comes back sorted, so equal inputs produce identical
/// output.
///
/// ```
/// use flowpipe_schema::convert::metrics::resolve_include_list;
///
/// assert_eq!(resolve_include_list(&[], None), None);
///
/// let narrowed = resolve_include_list(&["egress".into()], None).unwrap();
/// assert!(narrowed.iter().all(|name| !name.contains("egress")));
/// ```
pub fn resolve_include_list(
    ignore_tags: &[String],
    explicit: Option<&[String]>,
) -> Option<Vec<String>> {
    if let Some(list) = explicit {
        return Some(list.to_vec());
    }
    let enabled: BTreeSet<&'static str> = DEFAULT_METRICS
        .iter()
        .filter(|metric| !metric.tags.iter().any(|tag| ignore_tags.iter().any(|ig| ig == tag)))
        .map(|metric| metric.name)
        .collect();
    if enabled == *DEFAULT_NAMES {
        return None;
    }
    Some(enabled.into_iter().map(String::from).collect())
}

/// Value-tree remap for `processor.metrics` on up-conversion: derive
/// `includeList` from `ignoreTags`, leaving the tags in place (the hub
/// carries them verbatim as a deprecated field).
pub(crate) fn remap_to_hub(node: &mut Value) -> Result<(), String> {
    let Some(map) = node.as_object_mut() else {
        return Err("expected the metrics object".into());
    };
    let ignore_tags = match map.get("ignoreTags") {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| {
                item.as_str()
                    .map(String::from)
                    .ok_or_else(|| format!("non-string ignore tag {item}"))
            })
            .collect::<Result<Vec<_>, _>>()?,
        Some(other) => return Err(format!("ignoreTags is not a list: {other}")),
    };
    match resolve_include_list(&ignore_tags, None) {
        Some(list) => {
            map.insert("includeList".into(), Value::from(list));
        }
        None => {
            map.remove("includeList");
        }
    }
    Ok(())
}

/// Value-tree remap for `processor.metrics` on down-conversion: the spoke
/// schema has no include-list, so drop it. Lossy on purpose; the stash
/// restores it later.
pub(crate) fn remap_to_spoke(node: &mut Value) -> Result<(), String> {
    let Some(map) = node.as_object_mut() else {
        return Err("expected the metrics object".into());
    };
    map.remove("includeList");
    Ok(())
}
