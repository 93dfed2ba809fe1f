//! The middle spoke version of the `FlowPipeline` resource.
//!
//! V2 is V1 plus two additions: the agent feature list (spelled
//! `UPPER_SNAKE`, like every other V2 enum value) and the
//! conversation-end timeout. Log storage is still the flat `Manual` shape
//! and metrics are still selected by exclusion tags, so the remaining
//! hub-only state rides the stash exactly as it does for V1.
//!
//! The sections V2 shares with V1 reuse the V1 types; only the structs that
//! actually gained fields are redeclared here.

use serde::{Deserialize, Serialize};

use crate::resource::meta::ObjectMeta;
use crate::resource::v1;

/// A `FlowPipeline` as served to V2 clients.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FlowPipeline {
    pub metadata: ObjectMeta,
    pub spec: FlowPipelineSpec,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FlowPipelineSpec {
    pub namespace: String,
    /// `"DIRECT"` or `"KAFKA"`.
    pub deployment_model: String,
    pub agent: AgentSpec,
    pub kafka: v1::KafkaConfig,
    pub processor: ProcessorSpec,
    pub loki: v1::LokiFlat,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub exporters: Vec<v1::FlowExporter>,
}

impl Default for FlowPipelineSpec {
    fn default() -> Self {
        Self {
            namespace: "flowpipe".into(),
            deployment_model: "DIRECT".into(),
            agent: AgentSpec::default(),
            kafka: v1::KafkaConfig::default(),
            processor: ProcessorSpec::default(),
            loki: v1::LokiFlat::default(),
            exporters: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AgentSpec {
    /// `"EBPF"` or `"IPFIX"`.
    #[serde(rename = "type")]
    pub agent_type: String,
    pub sampling: i32,
    pub cache_max_flows: i32,
    pub cache_active_timeout: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub interfaces: Vec<String>,
    pub exclude_interfaces: Vec<String>,
    pub privileged: bool,
    /// `"PACKET_DROP"`, `"DNS_TRACKING"`, `"FLOW_RTT"`. New in V2.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<String>,
}

impl Default for AgentSpec {
    fn default() -> Self {
        let base = v1::AgentSpec::default();
        Self {
            agent_type: base.agent_type,
            sampling: base.sampling,
            cache_max_flows: base.cache_max_flows,
            cache_active_timeout: base.cache_active_timeout,
            interfaces: base.interfaces,
            exclude_interfaces: base.exclude_interfaces,
            privileged: base.privileged,
            features: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProcessorSpec {
    pub port: i32,
    pub log_level: String,
    pub cluster_name: String,
    pub metrics: v1::MetricsSpec,
    /// Conversation tracking end timeout. New in V2; the other conversation
    /// timeouts remain hub-only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversation_end_timeout: Option<String>,
    pub kafka_consumer_autoscaler: v1::AutoscalerSpec,
}

impl Default for ProcessorSpec {
    fn default() -> Self {
        let base = v1::ProcessorSpec::default();
        Self {
            port: base.port,
            log_level: base.log_level,
            cluster_name: base.cluster_name,
            metrics: base.metrics,
            conversation_end_timeout: None,
            kafka_consumer_autoscaler: base.kafka_consumer_autoscaler,
        }
    }
}
