//! Converter for the V1 spoke.
//!
//! V1 is the most lossy spoke: besides the shared shape changes (flat
//! endpoint, exclusion-tag metrics, `UPPER_SNAKE` enums) it also lacks the
//! agent feature list and every conversation-tracking timeout, so all of
//! those ride the stash.

use crate::convert::fields::{FieldMapper, FieldRemap, respell_to_hub, respell_to_spoke};
use crate::convert::{DownConvert, UpConvert, loki, metrics, restore_hub_only, stash};
use crate::errors::ConvertResult;
use crate::resource::SchemaVersion;
use crate::resource::hub::{
    AgentType, AutoscalerStatus, DeploymentModel, ExporterType, SaslType, TlsMode,
};
use crate::resource::{hub, v1};

/// Fields whose shape or spelling changes between V1 and the hub. Every
/// other field is copied structurally.
static UP_REMAPS: &[FieldRemap] = &[
    FieldRemap { path: "deploymentModel", apply: respell_to_hub::<DeploymentModel> },
    FieldRemap { path: "agent.type", apply: respell_to_hub::<AgentType> },
    FieldRemap { path: "kafka.tls.mode", apply: respell_to_hub::<TlsMode> },
    FieldRemap { path: "kafka.sasl.type", apply: respell_to_hub::<SaslType> },
    FieldRemap {
        path: "processor.kafkaConsumerAutoscaler.status",
        apply: respell_to_hub::<AutoscalerStatus>,
    },
    FieldRemap { path: "processor.metrics", apply: metrics::remap_to_hub },
    FieldRemap { path: "loki", apply: loki::remap_to_hub },
    FieldRemap { path: "exporters[].type", apply: respell_to_hub::<ExporterType> },
    FieldRemap { path: "exporters[].kafka.tls.mode", apply: respell_to_hub::<TlsMode> },
    FieldRemap { path: "exporters[].kafka.sasl.type", apply: respell_to_hub::<SaslType> },
];

static DOWN_REMAPS: &[FieldRemap] = &[
    FieldRemap { path: "deploymentModel", apply: respell_to_spoke },
    FieldRemap { path: "agent.type", apply: respell_to_spoke },
    FieldRemap { path: "kafka.tls.mode", apply: respell_to_spoke },
    FieldRemap { path: "kafka.sasl.type", apply: respell_to_spoke },
    FieldRemap { path: "processor.kafkaConsumerAutoscaler.status", apply: respell_to_spoke },
    FieldRemap { path: "processor.metrics", apply: metrics::remap_to_spoke },
    FieldRemap { path: "loki", apply: loki::remap_to_spoke },
    FieldRemap { path: "exporters[].type", apply: respell_to_spoke },
    FieldRemap { path: "exporters[].kafka.tls.mode", apply: respell_to_spoke },
    FieldRemap { path: "exporters[].kafka.sasl.type", apply: respell_to_spoke },
];

impl UpConvert for v1::FlowPipeline {
    type Hub = hub::FlowPipeline;

    fn up_convert(&self) -> ConvertResult<hub::FlowPipeline> {
        let mapper = FieldMapper::new(SchemaVersion::V1, UP_REMAPS);
        let mut spec: hub::FlowPipelineSpec = mapper.map(&self.spec)?;
        if let Some(stashed) = stash::load(&self.metadata) {
            restore_hub_only(&mut spec, stashed, SchemaVersion::V1);
        }
        Ok(hub::FlowPipeline {
            metadata: self.metadata.clone(),
            spec,
        })
    }
}

impl DownConvert<v1::FlowPipeline> for hub::FlowPipeline {
    fn down_convert(&self) -> ConvertResult<v1::FlowPipeline> {
        let mapper = FieldMapper::new(SchemaVersion::V1, DOWN_REMAPS);
        let spec: v1::FlowPipelineSpec = mapper.map(&self.spec)?;
        let mut metadata = self.metadata.clone();
        stash::save(self, &mut metadata)?;
        Ok(v1::FlowPipeline { metadata, spec })
    }
}
