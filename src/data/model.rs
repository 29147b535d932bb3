//! Typed representations of the organizational data files.
//!
//! Every struct mirrors its JSON shape field for field. Missing fields take
//! their default value and unknown fields are ignored, so older and newer data
//! files both parse. An explicit `null` is treated like a missing field; data
//! exported by other tools writes empty lists that way.

use serde::{Deserialize, Deserializer, Serialize};

/// Deserializes `null` as `T::default()`.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A product offered by the organization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Product {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
}

/// Envelope of `products.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ProductsData {
    #[serde(deserialize_with = "null_as_default")]
    pub products: Vec<Product>,
}

/// A node in the capability tree.
///
/// Children are owned by their parent; the tree is as deep as the source
/// document. See [`Capability::depth`] for the guard applied at load time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Capability {
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub capabilities: Vec<Capability>,
    /// Product ids.
    #[serde(deserialize_with = "null_as_default")]
    pub products: Vec<String>,
    /// Process ids.
    #[serde(deserialize_with = "null_as_default")]
    pub processes: Vec<String>,
}

impl Capability {
    /// Number of levels in this subtree, counting this node as 1.
    pub fn depth(&self) -> usize {
        1 + max_depth(&self.capabilities)
    }
}

/// Envelope of `capabilities.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct CapabilitiesData {
    #[serde(deserialize_with = "null_as_default")]
    pub capabilities: Vec<Capability>,
}

impl CapabilitiesData {
    /// Deepest nesting across all root capabilities; 0 when empty.
    pub fn depth(&self) -> usize {
        max_depth(&self.capabilities)
    }
}

fn max_depth(nodes: &[Capability]) -> usize {
    nodes.iter().map(Capability::depth).max().unwrap_or(0)
}

/// A team and the processes it owns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Team {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub processes: Vec<String>,
}

/// Envelope of `teams.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct TeamsData {
    #[serde(deserialize_with = "null_as_default")]
    pub teams: Vec<Team>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Component {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SoftwareSystem {
    #[serde(deserialize_with = "null_as_default")]
    pub components: Vec<Component>,
}

/// Envelope of `architecture.json`. Unlike the other files the root holds a
/// single object under `software-system`, not a list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Architecture {
    #[serde(rename = "software-system", deserialize_with = "null_as_default")]
    pub software_system: SoftwareSystem,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Pipeline {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
}

/// Envelope of `pipelines.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct PipelinesData {
    #[serde(deserialize_with = "null_as_default")]
    pub pipelines: Vec<Pipeline>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Valuestream {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
}

/// Envelope of `valuestreams.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ValuestreamsData {
    #[serde(deserialize_with = "null_as_default")]
    pub valuestreams: Vec<Valuestream>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capability_type_field_mapping() {
        let json = r#"{"type":"domain","name":"Billing","description":"d","products":["p1"],"processes":[]}"#;
        let cap: Capability = serde_json::from_str(json).unwrap();
        assert_eq!(cap.kind, "domain");
        assert_eq!(cap.products, vec!["p1".to_string()]);
        assert!(cap.capabilities.is_empty());

        let out = serde_json::to_value(&cap).unwrap();
        assert_eq!(out["type"], "domain");
        assert!(out.get("kind").is_none());
    }

    #[test]
    fn test_architecture_uses_hyphenated_key() {
        let json = r#"{"software-system":{"components":[{"name":"api","description":"edge"}]}}"#;
        let arch: Architecture = serde_json::from_str(json).unwrap();
        assert_eq!(arch.software_system.components.len(), 1);

        let out = serde_json::to_value(&arch).unwrap();
        assert!(out.get("software-system").is_some());
    }

    #[test]
    fn test_unknown_and_missing_fields() {
        let json = r#"{"teams":[{"name":"Ops","owner":"someone","extra":{"a":1}}]}"#;
        let teams: TeamsData = serde_json::from_str(json).unwrap();
        assert_eq!(teams.teams[0].name, "Ops");
        assert_eq!(teams.teams[0].description, "");
        assert!(teams.teams[0].processes.is_empty());
    }

    #[test]
    fn test_capability_depth() {
        let leaf = Capability { name: "leaf".into(), ..Default::default() };
        let mid = Capability { capabilities: vec![leaf.clone()], ..Default::default() };
        let data = CapabilitiesData { capabilities: vec![leaf, mid] };
        assert_eq!(data.depth(), 2);
        assert_eq!(CapabilitiesData::default().depth(), 0);
    }

    #[test]
    fn test_valuestream_fields_serialize() {
        let vs = Valuestream {
            id: "vs-1".into(),
            name: "Onboarding".into(),
            description: "From lead to customer".into(),
        };
        let out = serde_json::to_value(&vs).unwrap();
        assert_eq!(out["id"], "vs-1");
        assert_eq!(out["name"], "Onboarding");
    }
}
