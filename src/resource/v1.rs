//! The oldest spoke version of the `FlowPipeline` resource.
//!
//! V1 predates the log-storage endpoint union, the explicit metric
//! include-list, the agent feature list and every conversation-tracking
//! timeout. Its log-storage section is the flat `Manual` shape only, and
//! all enum-valued fields are free-form strings spelled `UPPER_SNAKE`
//! (`"EBPF"`, `"SCRAM_SHA512"`). Undeclared literals are only rejected when
//! the object is up-converted, which is where the closed hub domains are
//! enforced.

use serde::{Deserialize, Serialize};

use crate::resource::meta::ObjectMeta;

/// A `FlowPipeline` as served to V1 clients.
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
    pub kafka: KafkaConfig,
    pub processor: ProcessorSpec,
    pub loki: LokiFlat,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub exporters: Vec<FlowExporter>,
}

impl Default for FlowPipelineSpec {
    fn default() -> Self {
        Self {
            namespace: "flowpipe".into(),
            deployment_model: "DIRECT".into(),
            agent: AgentSpec::default(),
            kafka: KafkaConfig::default(),
            processor: ProcessorSpec::default(),
            loki: LokiFlat::default(),
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
}

impl Default for AgentSpec {
    fn default() -> Self {
        Self {
            agent_type: "EBPF".into(),
            sampling: super::hub::DEFAULT_SAMPLING,
            cache_max_flows: super::hub::DEFAULT_CACHE_MAX_FLOWS,
            cache_active_timeout: super::hub::DEFAULT_CACHE_ACTIVE_TIMEOUT.into(),
            interfaces: Vec::new(),
            exclude_interfaces: vec!["lo".into()],
            privileged: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClientTls {
    /// `"DISABLED"`, `"TLS"` or `"MUTUAL"`.
    pub mode: String,
    pub insecure_skip_verify: bool,
}

impl Default for ClientTls {
    fn default() -> Self {
        Self {
            mode: "DISABLED".into(),
            insecure_skip_verify: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SaslConfig {
    /// `"DISABLED"`, `"PLAIN"` or `"SCRAM_SHA512"`.
    #[serde(rename = "type")]
    pub sasl_type: String,
}

impl Default for SaslConfig {
    fn default() -> Self {
        Self {
            sasl_type: "DISABLED".into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct KafkaConfig {
    pub address: String,
    pub topic: String,
    pub tls: ClientTls,
    pub sasl: SaslConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AutoscalerSpec {
    /// `"DISABLED"` or `"ENABLED"`.
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_replicas: Option<i32>,
    pub max_replicas: i32,
}

impl Default for AutoscalerSpec {
    fn default() -> Self {
        Self {
            status: "DISABLED".into(),
            min_replicas: None,
            max_replicas: 3,
        }
    }
}

/// Metric selection, exclusion-tag style. V1 has no include-list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MetricsSpec {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ignore_tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProcessorSpec {
    pub port: i32,
    pub log_level: String,
    pub cluster_name: String,
    pub metrics: MetricsSpec,
    pub kafka_consumer_autoscaler: AutoscalerSpec,
}

impl Default for ProcessorSpec {
    fn default() -> Self {
        Self {
            port: super::hub::DEFAULT_PROCESSOR_PORT,
            log_level: "info".into(),
            cluster_name: String::new(),
            metrics: MetricsSpec::default(),
            kafka_consumer_autoscaler: AutoscalerSpec::default(),
        }
    }
}

/// Flat log-storage endpoint: the only shape V1 can express. `url` is the
/// ingester endpoint; an empty `querierUrl` falls back to it on
/// up-conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LokiFlat {
    pub enable: bool,
    pub url: String,
    pub querier_url: String,
    pub status_url: String,
    pub tenant_id: String,
    /// `"DISABLED"`, `"HOST_TOKEN"` or `"FORWARD_USER_TOKEN"`.
    pub auth_mode: String,
}

impl Default for LokiFlat {
    fn default() -> Self {
        Self {
            enable: true,
            url: super::hub::DEFAULT_LOKI_URL.into(),
            querier_url: String::new(),
            status_url: String::new(),
            tenant_id: String::new(),
            auth_mode: "DISABLED".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FlowExporter {
    /// `"KAFKA"` or `"IPFIX"`.
    #[serde(rename = "type")]
    pub exporter_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kafka: Option<KafkaConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ipfix: Option<ExporterIpfix>,
}

impl Default for FlowExporter {
    fn default() -> Self {
        Self {
            exporter_type: "KAFKA".into(),
            kafka: None,
            ipfix: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExporterIpfix {
    pub target_host: String,
    pub target_port: i32,
    pub transport: String,
}

impl Default for ExporterIpfix {
    fn default() -> Self {
        Self {
            target_host: String::new(),
            target_port: 0,
            transport: "TCP".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_v1_defaults_use_spoke_spelling() {
        let spec = FlowPipelineSpec::default();
        assert_eq!(spec.deployment_model, "DIRECT");
        assert_eq!(spec.agent.agent_type, "EBPF");
        assert_eq!(spec.loki.auth_mode, "DISABLED");
    }

    #[test]
    fn test_v1_ignores_hub_only_wire_fields() {
        // A hub-shaped document read at V1 simply drops what V1 cannot hold.
        let spec: FlowPipelineSpec = serde_json::from_str(
            r#"{"agent": {"type": "EBPF", "features": ["PACKET_DROP"]}}"#,
        )
        .unwrap();
        assert_eq!(spec.agent.agent_type, "EBPF");
    }
}
