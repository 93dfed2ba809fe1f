// Common fixtures for the conversion test suites.

use flowpipe_schema::prelude::*;
use flowpipe_schema::resource::hub::{
    AgentFeature, AgentType, AutoscalerStatus, DeploymentModel, ExporterType, LokiAuthMode,
    LokiConfig, LokiManual, LokiMode, LokiStackRef, SaslType, TlsMode,
};

/// A V1 document with every spoke-visible field moved off its default.
pub fn v1_fixture(name: &str) -> v1::FlowPipeline {
    let mut pipeline = v1::FlowPipeline {
        metadata: ObjectMeta::named(name),
        spec: v1::FlowPipelineSpec {
            namespace: "flows".into(),
            deployment_model: "KAFKA".into(),
            ..Default::default()
        },
    };
    pipeline
        .metadata
        .annotations
        .insert("team".into(), "network".into());
    pipeline.spec.agent = v1::AgentSpec {
        agent_type: "IPFIX".into(),
        sampling: 10,
        cache_max_flows: 5000,
        cache_active_timeout: "10s".into(),
        interfaces: vec!["eth0".into()],
        exclude_interfaces: vec!["lo".into(), "tun0".into()],
        privileged: true,
    };
    pipeline.spec.kafka = v1::KafkaConfig {
        address: "kafka.flows:9092".into(),
        topic: "flows".into(),
        tls: v1::ClientTls {
            mode: "MUTUAL".into(),
            insecure_skip_verify: true,
        },
        sasl: v1::SaslConfig {
            sasl_type: "SCRAM_SHA512".into(),
        },
    };
    pipeline.spec.processor = v1::ProcessorSpec {
        port: 9999,
        log_level: "debug".into(),
        cluster_name: "west".into(),
        metrics: v1::MetricsSpec {
            ignore_tags: vec!["egress".into()],
        },
        kafka_consumer_autoscaler: v1::AutoscalerSpec {
            status: "ENABLED".into(),
            min_replicas: Some(2),
            max_replicas: 7,
        },
    };
    pipeline.spec.loki = v1::LokiFlat {
        enable: false,
        url: "http://loki.flows:3100/".into(),
        querier_url: "http://loki-query.flows:3100/".into(),
        status_url: "http://loki-status.flows:3100/".into(),
        tenant_id: "flows".into(),
        auth_mode: "HOST_TOKEN".into(),
    };
    pipeline.spec.exporters = vec![v1::FlowExporter {
        exporter_type: "KAFKA".into(),
        kafka: Some(v1::KafkaConfig {
            address: "export.kafka:9092".into(),
            topic: "export".into(),
            tls: v1::ClientTls {
                mode: "TLS".into(),
                insecure_skip_verify: false,
            },
            sasl: v1::SaslConfig {
                sasl_type: "PLAIN".into(),
            },
        }),
        ipfix: None,
    }];
    pipeline
}

/// A V2 document: the V1 fixture plus the fields V2 gained.
pub fn v2_fixture(name: &str) -> v2::FlowPipeline {
    let base = v1_fixture(name);
    let mut pipeline = v2::FlowPipeline {
        metadata: base.metadata,
        spec: v2::FlowPipelineSpec {
            namespace: base.spec.namespace,
            deployment_model: base.spec.deployment_model,
            kafka: base.spec.kafka,
            loki: base.spec.loki,
            exporters: base.spec.exporters,
            ..Default::default()
        },
    };
    pipeline.spec.agent = v2::AgentSpec {
        agent_type: base.spec.agent.agent_type,
        sampling: base.spec.agent.sampling,
        cache_max_flows: base.spec.agent.cache_max_flows,
        cache_active_timeout: base.spec.agent.cache_active_timeout,
        interfaces: base.spec.agent.interfaces,
        exclude_interfaces: base.spec.agent.exclude_interfaces,
        privileged: base.spec.agent.privileged,
        features: vec!["PACKET_DROP".into(), "DNS_TRACKING".into()],
    };
    pipeline.spec.processor = v2::ProcessorSpec {
        port: base.spec.processor.port,
        log_level: base.spec.processor.log_level,
        cluster_name: base.spec.processor.cluster_name,
        metrics: base.spec.processor.metrics,
        conversation_end_timeout: Some("10s".into()),
        kafka_consumer_autoscaler: base.spec.processor.kafka_consumer_autoscaler,
    };
    pipeline
}

/// A hub document with a LokiStack endpoint reference plus a non-default
/// batch size, everything else canonical defaults.
pub fn hub_lokistack(name: &str) -> hub::FlowPipeline {
    let mut pipeline = hub::FlowPipeline {
        metadata: ObjectMeta::named(name),
        ..Default::default()
    };
    pipeline.spec.loki = LokiConfig::builder()
        .mode(LokiMode::LokiStack)
        .manual(None)
        .loki_stack(Some(LokiStackRef {
            name: "lokiii".into(),
            namespace: "lokins".into(),
        }))
        .batch_size(1000)
        .build();
    pipeline
}

/// A hub document with every hub-only field off its default.
pub fn hub_with_extras(name: &str) -> hub::FlowPipeline {
    let mut pipeline = hub::FlowPipeline {
        metadata: ObjectMeta::named(name),
        ..Default::default()
    };
    pipeline.spec.deployment_model = DeploymentModel::Kafka;
    pipeline.spec.agent.agent_type = AgentType::Ebpf;
    pipeline.spec.agent.features = vec![AgentFeature::PacketDrop, AgentFeature::FlowRtt];
    pipeline.spec.kafka.tls.mode = TlsMode::Tls;
    pipeline.spec.kafka.sasl.sasl_type = SaslType::Plain;
    pipeline.spec.processor.conversation_end_timeout = Some("10s".into());
    pipeline.spec.processor.conversation_heartbeat_interval = Some("30s".into());
    pipeline.spec.processor.conversation_terminating_timeout = Some("5s".into());
    pipeline.spec.processor.kafka_consumer_autoscaler.status = AutoscalerStatus::Enabled;
    pipeline.spec.processor.metrics.include_list = Some(vec!["namespace_flows_total".into()]);
    pipeline.spec.loki = LokiConfig::builder()
        .manual(Some(LokiManual {
            ingester_url: "http://loki.flows:3100/".into(),
            querier_url: "http://loki-query.flows:3100/".into(),
            status_url: "http://loki-status.flows:3100/".into(),
            tenant_id: "flows".into(),
            auth_mode: LokiAuthMode::HostToken,
        }))
        .batch_size(5000)
        .batch_wait(Some("1s".into()))
        .build();
    pipeline.spec.exporters = vec![hub::FlowExporter {
        exporter_type: ExporterType::Ipfix,
        kafka: None,
        ipfix: Some(hub::ExporterIpfix {
            target_host: "collector.flows".into(),
            target_port: 4739,
            transport: "UDP".into(),
        }),
    }];
    pipeline
}
