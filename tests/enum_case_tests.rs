// Respelling round trips over every declared enum literal, plus generated
// inputs. Single-word all-uppercase literals are the classic trap here
// (EBPF, TLS, PLAIN): they must come back unchanged in both directions,
// which is verified literal by literal, never assumed.

use flowpipe_schema::convert::case::{to_hub_case, to_spoke_case};
use flowpipe_schema::resource::hub::{
    AgentFeature, AgentType, AutoscalerStatus, DeploymentModel, ExporterType, LokiAuthMode,
    LokiMode, SaslType, TlsMode,
};
use quickcheck::{Arbitrary, Gen};
use std::str::FromStr;
use strum::IntoEnumIterator;

fn assert_domain_round_trips<E>()
where
    E: IntoEnumIterator + AsRef<str> + FromStr + PartialEq + std::fmt::Debug,
{
    for literal in E::iter() {
        let hub = literal.as_ref();
        let spoke = to_spoke_case(hub);
        // Spoke -> hub -> spoke is the identity.
        assert_eq!(to_spoke_case(&to_hub_case(&spoke)), spoke, "via {hub}");
        // Hub -> spoke -> hub is the identity, and lands back in the domain.
        assert_eq!(to_hub_case(&spoke), hub);
        assert!(E::from_str(&to_hub_case(&spoke)).is_ok(), "{hub} left its domain");
    }
}

#[test]
fn test_agent_type_round_trips() {
    assert_domain_round_trips::<AgentType>();
}

#[test]
fn test_agent_feature_round_trips() {
    assert_domain_round_trips::<AgentFeature>();
}

#[test]
fn test_deployment_model_round_trips() {
    assert_domain_round_trips::<DeploymentModel>();
}

#[test]
fn test_tls_mode_round_trips() {
    assert_domain_round_trips::<TlsMode>();
}

#[test]
fn test_sasl_type_round_trips() {
    assert_domain_round_trips::<SaslType>();
}

#[test]
fn test_autoscaler_status_round_trips() {
    assert_domain_round_trips::<AutoscalerStatus>();
}

#[test]
fn test_loki_mode_round_trips() {
    assert_domain_round_trips::<LokiMode>();
}

#[test]
fn test_loki_auth_mode_round_trips() {
    assert_domain_round_trips::<LokiAuthMode>();
}

#[test]
fn test_exporter_type_round_trips() {
    assert_domain_round_trips::<ExporterType>();
}

#[test]
fn test_spoke_spellings_are_distinct_per_domain() {
    // The spoke projection must stay injective or two hub literals would
    // collide in the old schema.
    let spellings: Vec<String> = LokiAuthMode::iter()
        .map(|m| to_spoke_case(m.as_ref()))
        .collect();
    let mut deduped = spellings.clone();
    deduped.sort();
    deduped.dedup();
    assert_eq!(deduped.len(), spellings.len());
}

#[test]
fn test_expected_spoke_spellings() {
    assert_eq!(to_spoke_case("Ebpf"), "EBPF");
    assert_eq!(to_spoke_case("Ipfix"), "IPFIX");
    assert_eq!(to_spoke_case("Direct"), "DIRECT");
    assert_eq!(to_spoke_case("Kafka"), "KAFKA");
    assert_eq!(to_spoke_case("ForwardUserToken"), "FORWARD_USER_TOKEN");
    assert_eq!(to_hub_case("EBPF"), "Ebpf");
    assert_eq!(to_hub_case("IPFIX"), "Ipfix");
    assert_eq!(to_hub_case("DIRECT"), "Direct");
    assert_eq!(to_hub_case("KAFKA"), "Kafka");
    assert_eq!(to_hub_case("FORWARD_USER_TOKEN"), "ForwardUserToken");
}

/// An arbitrary well-formed `UPPER_SNAKE` literal: one to three segments of
/// uppercase ASCII letters.
#[derive(Debug, Clone)]
struct UpperSnake(String);

const UPPER: [char; 26] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

impl Arbitrary for UpperSnake {
    fn arbitrary(g: &mut Gen) -> Self {
        let segment_count = usize::arbitrary(g) % 3 + 1;
        let segments: Vec<String> = (0..segment_count)
            .map(|_| {
                let len = usize::arbitrary(g) % 6 + 1;
                (0..len).map(|_| *g.choose(&UPPER).unwrap_or(&'A')).collect()
            })
            .collect();
        UpperSnake(segments.join("_"))
    }
}

quickcheck::quickcheck! {
    fn prop_upper_snake_round_trips(literal: UpperSnake) -> bool {
        to_spoke_case(&to_hub_case(&literal.0)) == literal.0
    }

    fn prop_hub_case_is_pascal(literal: UpperSnake) -> bool {
        let hub = to_hub_case(&literal.0);
        hub.chars().next().is_some_and(|c| c.is_uppercase())
            && !hub.contains('_')
    }
}
