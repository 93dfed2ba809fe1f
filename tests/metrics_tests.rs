// Metric-selection conversion between exclusion tags and the explicit
// include-list.

use flowpipe_schema::convert::metrics::{default_metrics, resolve_include_list};
use flowpipe_schema::prelude::*;

#[test]
fn test_default_selection_stays_canonical() {
    // A hub with no explicit list and nothing excluded must come back from
    // a spoke round trip with no explicit list either, not a materialized
    // copy of the defaults.
    let stored = hub::FlowPipeline {
        metadata: ObjectMeta::named("cluster"),
        ..Default::default()
    };
    assert!(stored.spec.processor.metrics.include_list.is_none());

    let served: v1::FlowPipeline = stored.down_convert().unwrap();
    assert!(served.spec.processor.metrics.ignore_tags.is_empty());

    let written = served.up_convert().unwrap();
    assert!(written.spec.processor.metrics.include_list.is_none());
}

#[test]
fn test_tags_resolve_to_explicit_include_list() {
    let mut spoke = v1::FlowPipeline {
        metadata: ObjectMeta::named("cluster"),
        ..Default::default()
    };
    spoke.spec.processor.metrics.ignore_tags = vec!["egress".into(), "packets".into()];
    let stored = spoke.up_convert().unwrap();

    let include = stored.spec.processor.metrics.include_list.unwrap();
    assert!(!include.is_empty());
    assert!(include.iter().all(|name| !name.contains("egress")));
    assert!(include.iter().all(|name| !name.contains("packets")));
    // The tags themselves are carried verbatim for the trip back down.
    assert_eq!(
        stored.spec.processor.metrics.ignore_tags,
        vec!["egress".to_string(), "packets".to_string()]
    );
}

#[test]
fn test_explicit_include_list_survives_round_trip_verbatim() {
    // Precedence: the explicit list wins over separately-present tags, in
    // both directions, byte for byte.
    let mut stored = hub::FlowPipeline {
        metadata: ObjectMeta::named("cluster"),
        ..Default::default()
    };
    stored.spec.processor.metrics.ignore_tags = vec!["egress".into()];
    stored.spec.processor.metrics.include_list =
        Some(vec!["workload_flows_total".into(), "node_flows_total".into()]);

    let served: v1::FlowPipeline = stored.down_convert().unwrap();
    // The spoke only ever sees the tags.
    assert_eq!(served.spec.processor.metrics.ignore_tags, vec!["egress".to_string()]);

    let written = served.up_convert().unwrap();
    assert_eq!(
        written.spec.processor.metrics.include_list,
        Some(vec!["workload_flows_total".to_string(), "node_flows_total".to_string()])
    );
    assert_eq!(written.spec.processor.metrics.ignore_tags, vec!["egress".to_string()]);
}

#[test]
fn test_explicit_empty_list_is_not_defaults() {
    // Some(vec![]) means "produce nothing", which is very different from
    // None ("produce the defaults"); it must survive as-is.
    let mut stored = hub::FlowPipeline {
        metadata: ObjectMeta::named("cluster"),
        ..Default::default()
    };
    stored.spec.processor.metrics.include_list = Some(vec![]);

    let served: v1::FlowPipeline = stored.down_convert().unwrap();
    let written = served.up_convert().unwrap();
    assert_eq!(written.spec.processor.metrics.include_list, Some(vec![]));
}

#[test]
fn test_resolved_set_collapsing_back_to_defaults_is_none() {
    // Tags that exclude nothing resolve to exactly the default set, which
    // must collapse to None rather than an equivalent explicit list.
    let mut spoke = v1::FlowPipeline {
        metadata: ObjectMeta::named("cluster"),
        ..Default::default()
    };
    spoke.spec.processor.metrics.ignore_tags = vec!["not_a_real_tag".into()];
    let stored = spoke.up_convert().unwrap();
    assert!(stored.spec.processor.metrics.include_list.is_none());
}

#[test]
fn test_resolver_is_deterministic() {
    let tags = vec!["bytes".to_string()];
    let first = resolve_include_list(&tags, None);
    let second = resolve_include_list(&tags, None);
    assert_eq!(first, second);
    let list = first.unwrap();
    let mut sorted = list.clone();
    sorted.sort();
    assert_eq!(list, sorted);
}

#[test]
fn test_default_table_is_consistent() {
    let table = default_metrics();
    assert!(!table.is_empty());
    // Every metric carries at least one tag, otherwise it could never be
    // excluded, and names are unique.
    let mut names: Vec<_> = table.iter().map(|m| m.name).collect();
    assert!(table.iter().all(|m| !m.tags.is_empty()));
    names.sort();
    names.dedup();
    assert_eq!(names.len(), table.len());
}
