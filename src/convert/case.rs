//! Enum-literal respelling between the spoke and hub conventions.
//!
//! Spoke schemas spell closed-enum values `UPPER_SNAKE` (`"EBPF"`,
//! `"SCRAM_SHA512"`); the hub spells the same literals `PascalCase`
//! (`"Ebpf"`, `"ScramSha512"`). The two functions here form an inverse pair
//! over every declared literal domain — including single-word all-uppercase
//! literals, which must come back unchanged after a round trip. That
//! property is verified per literal in the test suite rather than assumed.

/// Respell an `UPPER_SNAKE` literal into the hub's `PascalCase` convention.
///
/// Splits on `_`, lowercases each segment except its first letter, and
/// concatenates. Unknown literals are respelled all the same; membership in
/// a declared domain is the caller's check.
///
/// ```
/// use flowpipe_schema::convert::case::to_hub_case;
///
/// assert_eq!(to_hub_case("EBPF"), "Ebpf");
/// assert_eq!(to_hub_case("SCRAM_SHA512"), "ScramSha512");
/// assert_eq!(to_hub_case("FORWARD_USER_TOKEN"), "ForwardUserToken");
/// ```
pub fn to_hub_case(literal: &str) -> String {
    let mut out = String::with_capacity(literal.len());
    for segment in literal.split('_').filter(|s| !s.is_empty()) {
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            for c in chars {
                out.extend(c.to_lowercase());
            }
        }
    }
    out
}

/// Respell a `PascalCase` literal into the spoke `UPPER_SNAKE` convention.
///
/// Splits at uppercase boundaries, uppercases each segment and joins with
/// `_`. Digits stick to the segment they follow.
///
/// ```
/// use flowpipe_schema::convert::case::to_spoke_case;
///
/// assert_eq!(to_spoke_case("Ebpf"), "EBPF");
/// assert_eq!(to_spoke_case("ScramSha512"), "SCRAM_SHA512");
/// assert_eq!(to_spoke_case("Tls"), "TLS");
/// ```
pub fn to_spoke_case(literal: &str) -> String {
    let mut out = String::with_capacity(literal.len() + 4);
    for (i, c) in literal.chars().enumerate() {
        if c.is_uppercase() && i > 0 {
            out.push('_');
        }
        out.extend(c.to_uppercase());
    }
    out
}
