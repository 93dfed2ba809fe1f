//! Converter for the V2 spoke.
//!
//! V2 shares V1's shape changes and additionally exposes the agent feature
//! list and the conversation-end timeout, which therefore convert
//! structurally (features still need respelling) and are never taken from
//! the stash — the spoke's own values win.

use crate::convert::fields::{FieldMapper, FieldRemap, respell_to_hub, respell_to_spoke};
use crate::convert::{DownConvert, UpConvert, loki, metrics, restore_hub_only, stash};
use crate::errors::ConvertResult;
use crate::resource::SchemaVersion;
use crate::resource::hub::{
    AgentFeature, AgentType, AutoscalerStatus, DeploymentModel, ExporterType, SaslType, TlsMode,
};
use crate::resource::{hub, v2};

static UP_REMAPS: &[FieldRemap] = &[
    FieldRemap { path: "deploymentModel", apply: respell_to_hub::<DeploymentModel> },
    FieldRemap { path: "agent.type", apply: respell_to_hub::<AgentType> },
    FieldRemap { path: "agent.features[]", apply: respell_to_hub::<AgentFeature> },
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
    FieldRemap { path: "agent.features[]", apply: respell_to_spoke },
    FieldRemap { path: "kafka.tls.mode", apply: respell_to_spoke },
    FieldRemap { path: "kafka.sasl.type", apply: respell_to_spoke },
    FieldRemap { path: "processor.kafkaConsumerAutoscaler.status", apply: respell_to_spoke },
    FieldRemap { path: "processor.metrics", apply: metrics::remap_to_spoke },
    FieldRemap { path: "loki", apply: loki::remap_to_spoke },
    FieldRemap { path: "exporters[].type", apply: respell_to_spoke },
    FieldRemap { path: "exporters[].kafka.tls.mode", apply: respell_to_spoke },
    FieldRemap { path: "exporters[].kafka.sasl.type", apply: respell_to_spoke },
];

impl UpConvert for v2::FlowPipeline {
    type Hub = hub::FlowPipeline;

    fn up_convert(&self) -> ConvertResult<hub::FlowPipeline> {
        let mapper = FieldMapper::new(SchemaVersion::V2, UP_REMAPS);
        let mut spec: hub::FlowPipelineSpec = mapper.map(&self.spec)?;
        if let Some(stashed) = stash::load(&self.metadata) {
            restore_hub_only(&mut spec, stashed, SchemaVersion::V2);
        }
        Ok(hub::FlowPipeline {
            metadata: self.metadata.clone(),
            spec,
        })
    }
}

impl DownConvert<v2::FlowPipeline> for hub::FlowPipeline {
    fn down_convert(&self) -> ConvertResult<v2::FlowPipeline> {
        let mapper = FieldMapper::new(SchemaVersion::V2, DOWN_REMAPS);
        let spec: v2::FlowPipelineSpec = mapper.map(&self.spec)?;
        let mut metadata = self.metadata.clone();
        stash::save(self, &mut metadata)?;
        Ok(v2::FlowPipeline { metadata, spec })
    }
}
