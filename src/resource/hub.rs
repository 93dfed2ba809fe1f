//! The canonical (hub) schema version of the `FlowPipeline` resource.
//!
//! This is the only version the storage layer ever persists. Every field a
//! spoke version can express has a counterpart here; on top of that the hub
//! carries fields no spoke knows about (the agent feature list, the
//! conversation-tracking timeouts, the log-storage endpoint union and its
//! batching knobs, the explicit metric include-list). Those hub-only fields
//! are exactly what the stash exists to preserve across a round trip through
//! a lossy spoke schema.
//!
//! # Enum spelling
//!
//! Hub enum literals are spelled in `PascalCase` (`Ebpf`, `ScramSha512`,
//! `ForwardUserToken`). The spoke versions spell the same literals in
//! `UPPER_SNAKE` (`EBPF`, `SCRAM_SHA512`, `FORWARD_USER_TOKEN`); the
//! conversion layer respells them per field.
//!
//! # Construction
//!
//! All spec structs expose a `typed-builder` builder with the documented
//! defaults, so a canonical resource can be assembled without spelling out
//! every field:
//!
//! ```
//! use flowpipe_schema::resource::hub::{FlowPipelineSpec, LokiConfig, LokiMode, LokiStackRef};
//!
//! let spec = FlowPipelineSpec::builder()
//!     .loki(LokiConfig::builder()
//!         .mode(LokiMode::LokiStack)
//!         .manual(None)
//!         .loki_stack(Some(LokiStackRef {
//!             name: "logging".into(),
//!             namespace: "observability".into(),
//!         }))
//!         .build())
//!     .build();
//! assert_eq!(spec.agent.sampling, 50);
//! ```

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};
use typed_builder::TypedBuilder;

use crate::resource::meta::ObjectMeta;

/// Default sampling ratio applied by collection agents.
pub const DEFAULT_SAMPLING: i32 = 50;
/// Default flow-cache capacity per agent.
pub const DEFAULT_CACHE_MAX_FLOWS: i32 = 100_000;
/// Default flow-cache eviction period.
pub const DEFAULT_CACHE_ACTIVE_TIMEOUT: &str = "5s";
/// Default collector port on the processor.
pub const DEFAULT_PROCESSOR_PORT: i32 = 2055;
/// Default log-storage ingester endpoint.
pub const DEFAULT_LOKI_URL: &str = "http://loki:3100/";
/// Default log-storage write batch size, in bytes. Hub-only: spokes cannot
/// express it, so it is restored from the stash or falls back to this value.
pub const DEFAULT_LOKI_BATCH_SIZE: i64 = 102_400;

/// The canonical `FlowPipeline` resource: envelope metadata plus spec.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FlowPipeline {
    pub metadata: ObjectMeta,
    pub spec: FlowPipelineSpec,
}

/// Desired deployment of the whole flow-collection pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase", default)]
pub struct FlowPipelineSpec {
    /// Namespace the pipeline components are deployed into.
    #[builder(default = "flowpipe".into())]
    pub namespace: String,

    /// Whether flows go straight from agents to the processor (`Direct`) or
    /// through a Kafka stage (`Kafka`).
    #[builder(default)]
    pub deployment_model: DeploymentModel,

    #[builder(default)]
    pub agent: AgentSpec,

    /// Kafka stage configuration; consulted when `deployment_model` is
    /// `Kafka`.
    #[builder(default)]
    pub kafka: KafkaConfig,

    #[builder(default)]
    pub processor: ProcessorSpec,

    #[builder(default)]
    pub loki: LokiConfig,

    /// Additional flow export targets, on top of the built-in pipeline.
    #[builder(default)]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub exporters: Vec<FlowExporter>,
}

impl Default for FlowPipelineSpec {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Pipeline topology selector.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    AsRefStr,
    Display,
)]
pub enum DeploymentModel {
    #[default]
    Direct,
    Kafka,
}

/// Flow-capture technology used by the collection agents.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    AsRefStr,
    Display,
)]
pub enum AgentType {
    #[default]
    Ebpf,
    Ipfix,
}

/// Optional agent capabilities. Hub-only relative to V1; V2 exposes the
/// list with spoke spelling.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, EnumString, AsRefStr,
    Display,
)]
pub enum AgentFeature {
    PacketDrop,
    DnsTracking,
    FlowRtt,
}

/// Collection agent settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase", default)]
pub struct AgentSpec {
    #[serde(rename = "type")]
    #[builder(default)]
    pub agent_type: AgentType,

    /// One flow in `sampling` is kept. 0 or 1 means keep everything.
    #[builder(default = DEFAULT_SAMPLING)]
    pub sampling: i32,

    #[builder(default = DEFAULT_CACHE_MAX_FLOWS)]
    pub cache_max_flows: i32,

    #[builder(default = DEFAULT_CACHE_ACTIVE_TIMEOUT.into())]
    pub cache_active_timeout: String,

    /// Interfaces to collect from; empty means all.
    #[builder(default)]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub interfaces: Vec<String>,

    #[builder(default = vec!["lo".into()])]
    pub exclude_interfaces: Vec<String>,

    #[builder(default)]
    pub privileged: bool,

    /// Extra capture features to enable. No counterpart in V1.
    #[builder(default)]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<AgentFeature>,
}

impl Default for AgentSpec {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// TLS client mode for a Kafka connection.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    AsRefStr,
    Display,
)]
pub enum TlsMode {
    #[default]
    Disabled,
    Tls,
    Mutual,
}

/// SASL authentication mode for a Kafka connection.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    AsRefStr,
    Display,
)]
pub enum SaslType {
    #[default]
    Disabled,
    Plain,
    ScramSha512,
}

/// Client-side TLS settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase", default)]
pub struct ClientTls {
    #[builder(default)]
    pub mode: TlsMode,
    #[builder(default)]
    pub insecure_skip_verify: bool,
}

/// SASL settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase", default)]
pub struct SaslConfig {
    #[serde(rename = "type")]
    #[builder(default)]
    pub sasl_type: SaslType,
}

/// Kafka broker coordinates, shared by the pipeline stage and exporters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase", default)]
pub struct KafkaConfig {
    #[builder(default)]
    pub address: String,
    #[builder(default)]
    pub topic: String,
    #[builder(default)]
    pub tls: ClientTls,
    #[builder(default)]
    pub sasl: SaslConfig,
}

/// Horizontal autoscaler toggle for the Kafka consumer deployment.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    AsRefStr,
    Display,
)]
pub enum AutoscalerStatus {
    #[default]
    Disabled,
    Enabled,
}

/// Autoscaler settings for the processor's Kafka consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase", default)]
pub struct AutoscalerSpec {
    #[builder(default)]
    pub status: AutoscalerStatus,
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_replicas: Option<i32>,
    #[builder(default = 3)]
    pub max_replicas: i32,
}

impl Default for AutoscalerSpec {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Metric selection for the processor.
///
/// `ignore_tags` is the legacy exclusion mechanism the spoke versions still
/// expose; it is carried verbatim so spoke round trips are exact. When
/// `include_list` is set it takes precedence over anything the tags would
/// resolve to, and it must survive conversions unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase", default)]
pub struct MetricsSpec {
    /// Legacy category-tag exclusion list. Deprecated in the hub schema but
    /// still honored when no explicit include-list is present.
    #[builder(default)]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ignore_tags: Vec<String>,

    /// Explicit list of metric names to produce. `None` means "use the
    /// built-in defaults, minus whatever `ignore_tags` excludes".
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_list: Option<Vec<String>>,
}

/// Flow processor settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase", default)]
pub struct ProcessorSpec {
    #[builder(default = DEFAULT_PROCESSOR_PORT)]
    pub port: i32,

    #[builder(default = "info".into())]
    pub log_level: String,

    /// Name reported in multi-cluster flows; empty means unset.
    #[builder(default)]
    pub cluster_name: String,

    #[builder(default)]
    pub metrics: MetricsSpec,

    /// Conversation tracking: how long after the last seen flow a
    /// conversation is considered ended. No counterpart in V1.
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversation_end_timeout: Option<String>,

    /// Conversation tracking: interval between heartbeat records for
    /// long-lived conversations. Hub-only.
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversation_heartbeat_interval: Option<String>,

    /// Conversation tracking: grace period after a FIN before the
    /// conversation record is emitted. Hub-only.
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversation_terminating_timeout: Option<String>,

    #[builder(default)]
    pub kafka_consumer_autoscaler: AutoscalerSpec,
}

impl Default for ProcessorSpec {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Log-storage endpoint union discriminator.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    AsRefStr,
    Display,
)]
pub enum LokiMode {
    /// Endpoint URLs are given explicitly. The only shape the spoke
    /// versions can express.
    #[default]
    Manual,
    /// Endpoint URLs are derived from a LokiStack deployment reference.
    LokiStack,
    /// Single-binary Loki behind one URL.
    Monolithic,
    /// Separately-deployed ingester and querier.
    Microservices,
}

/// Token handling for Loki requests.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    AsRefStr,
    Display,
)]
pub enum LokiAuthMode {
    #[default]
    Disabled,
    /// Authenticate with the pipeline's own service token.
    HostToken,
    /// Forward the requesting user's token.
    ForwardUserToken,
}

/// Explicit endpoint URLs, the `Manual` union variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase", default)]
pub struct LokiManual {
    #[builder(default = DEFAULT_LOKI_URL.into())]
    pub ingester_url: String,

    /// Query endpoint. Empty falls back to `ingester_url`.
    #[builder(default)]
    pub querier_url: String,

    /// Readiness endpoint. Empty means not probed.
    #[builder(default)]
    pub status_url: String,

    #[builder(default)]
    pub tenant_id: String,

    #[builder(default)]
    pub auth_mode: LokiAuthMode,
}

impl Default for LokiManual {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Reference to a LokiStack deployment, the `LokiStack` union variant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase", default)]
pub struct LokiStackRef {
    #[builder(default)]
    pub name: String,
    #[builder(default)]
    pub namespace: String,
}

/// Single-binary Loki coordinates, the `Monolithic` union variant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase", default)]
pub struct LokiMonolithic {
    #[builder(default)]
    pub url: String,
    #[builder(default)]
    pub tenant_id: String,
}

/// Split ingester/querier coordinates, the `Microservices` union variant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase", default)]
pub struct LokiMicroservices {
    #[builder(default)]
    pub ingester_url: String,
    #[builder(default)]
    pub querier_url: String,
    #[builder(default)]
    pub tenant_id: String,
}

/// Log-storage configuration: a discriminated union of endpoint shapes plus
/// write-batching knobs.
///
/// Exactly one variant payload is meant to be populated, selected by `mode`.
/// The spoke versions only ever see the flattened `Manual` projection; the
/// other variants (and the batching knobs) survive spoke round trips through
/// the stash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase", default)]
pub struct LokiConfig {
    #[builder(default = true)]
    pub enable: bool,

    #[builder(default)]
    pub mode: LokiMode,

    #[builder(default = Some(LokiManual::default()))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manual: Option<LokiManual>,

    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loki_stack: Option<LokiStackRef>,

    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monolithic: Option<LokiMonolithic>,

    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub microservices: Option<LokiMicroservices>,

    /// Write batch size in bytes. Hub-only.
    #[builder(default = DEFAULT_LOKI_BATCH_SIZE)]
    pub batch_size: i64,

    /// Maximum wait before flushing a batch. Hub-only.
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub batch_wait: Option<String>,
}

impl Default for LokiConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Export target kind.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, EnumString, AsRefStr,
    Display,
)]
pub enum ExporterType {
    Kafka,
    Ipfix,
}

/// IPFIX export coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase", default)]
pub struct ExporterIpfix {
    #[builder(default)]
    pub target_host: String,
    #[builder(default)]
    pub target_port: i32,
    /// `"TCP"` or `"UDP"`. Spelled the same in every schema version.
    #[builder(default = "TCP".into())]
    pub transport: String,
}

impl Default for ExporterIpfix {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// One additional flow export target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase", default)]
pub struct FlowExporter {
    #[serde(rename = "type")]
    pub exporter_type: ExporterType,

    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kafka: Option<KafkaConfig>,

    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ipfix: Option<ExporterIpfix>,
}

impl Default for FlowExporter {
    fn default() -> Self {
        Self {
            exporter_type: ExporterType::Kafka,
            kafka: None,
            ipfix: None,
        }
    }
}
