//! Structural field mapping between schema versions.
//!
//! The bulk of a conversion is a mechanical 1:1 copy: both sides of every
//! stable-shape field use the same camelCase wire name, so serializing the
//! source version to a value tree and deserializing the tree into the
//! target version copies everything that did not change shape — absent
//! fields fall back to the target's documented defaults. The fields whose
//! shape or spelling *did* change are listed per version in an explicit
//! remap table; each entry rewrites one path in the tree before the final
//! deserialize. Anything not in the table gets the default structural copy,
//! which is what keeps the tables small and the mapping extensible without
//! a code generator.
//!
//! A remap that cannot produce a valid result fails the whole conversion
//! atomically; the half-rewritten tree is dropped, never observed.

use std::str::FromStr;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::convert::case::{to_hub_case, to_spoke_case};
use crate::errors::{ConvertError, ConvertResult};
use crate::resource::SchemaVersion;

/// Rewrites the value at one path of the tree. Errors are plain reasons;
/// the mapper attaches field and version context.
pub type RemapFn = fn(&mut Value) -> Result<(), String>;

/// One override entry: a dotted camelCase wire path plus the rewrite to
/// apply there. A `name[]` segment fans out over every element of the
/// array at `name`.
pub struct FieldRemap {
    pub path: &'static str,
    pub apply: RemapFn,
}

/// Applies a version's remap table between two serde representations.
pub struct FieldMapper {
    version: SchemaVersion,
    remaps: &'static [FieldRemap],
}

impl FieldMapper {
    pub const fn new(version: SchemaVersion, remaps: &'static [FieldRemap]) -> Self {
        Self { version, remaps }
    }

    /// Copy `source` into the target representation: default structural
    /// copy for every untouched field, table overrides for the rest.
    pub fn map<S, T>(&self, source: &S) -> ConvertResult<T>
    where
        S: Serialize,
        T: DeserializeOwned,
    {
        let mut tree = serde_json::to_value(source)
            .map_err(|err| ConvertError::mapping(self.version, "<resource>", err.to_string()))?;
        for remap in self.remaps {
            apply_at_path(&mut tree, remap.path, remap.apply)
                .map_err(|reason| ConvertError::mapping(self.version, remap.path, reason))?;
        }
        serde_json::from_value(tree)
            .map_err(|err| ConvertError::mapping(self.version, "<resource>", err.to_string()))
    }
}

/// Walk `path` down the tree and apply `f` to the node there. Paths that
/// lead nowhere are a no-op: the source version simply does not carry the
/// field, and the target's defaults take over.
fn apply_at_path(root: &mut Value, path: &str, f: RemapFn) -> Result<(), String> {
    let segments: Vec<&str> = path.split('.').collect();
    walk(root, &segments, f)
}

fn walk(node: &mut Value, segments: &[&str], f: RemapFn) -> Result<(), String> {
    let Some((head, rest)) = segments.split_first() else {
        if node.is_null() {
            return Ok(());
        }
        return f(node);
    };
    if let Some(name) = head.strip_suffix("[]") {
        let target = match node {
            Value::Object(map) => map.get_mut(name),
            Value::Null => return Ok(()),
            _ => return Err(format!("expected an object around {name}")),
        };
        match target {
            Some(Value::Array(items)) => {
                for item in items {
                    walk(item, rest, f)?;
                }
                Ok(())
            }
            Some(Value::Null) | None => Ok(()),
            Some(other) => Err(format!("expected a list at {name}, found {other}")),
        }
    } else {
        match node {
            Value::Object(map) => match map.get_mut(*head) {
                Some(child) => walk(child, rest, f),
                None => Ok(()),
            },
            Value::Null => Ok(()),
            _ => Err(format!("expected an object at {head}")),
        }
    }
}

/// Respell a spoke `UPPER_SNAKE` literal into the hub convention and check
/// it lands in the declared domain `E`. Instantiated per enum in the remap
/// tables.
pub(crate) fn respell_to_hub<E>(node: &mut Value) -> Result<(), String>
where
    E: FromStr,
{
    let Some(literal) = node.as_str() else {
        return Err(format!("expected an enum literal, found {node}"));
    };
    let hub = to_hub_case(literal);
    if E::from_str(&hub).is_err() {
        return Err(format!("undeclared enum literal \"{literal}\""));
    }
    *node = Value::String(hub);
    Ok(())
}

/// Respell a hub `PascalCase` literal into the spoke convention. The hub
/// side is typed, so the literal is declared by construction; only the
/// node's shape can be wrong.
pub(crate) fn respell_to_spoke(node: &mut Value) -> Result<(), String> {
    let Some(literal) = node.as_str() else {
        return Err(format!("expected an enum literal, found {node}"));
    };
    let spoke = to_spoke_case(literal);
    *node = Value::String(spoke);
    Ok(())
}
