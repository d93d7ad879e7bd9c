//! Wire shapes returned by the state registry.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Body of the registry's object listing.
#[derive(Debug, Clone, Deserialize)]
pub struct RegistryResponse {
    /// Every registry object, in upstream order.
    #[serde(rename = "Objects")]
    pub objects: Vec<RawRecord>,
}

/// One registry object exactly as the upstream sends it.
///
/// Attribute fields are free-form on the wire: numbers and booleans are kept
/// as their textual form, `null` and missing fields become `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RawRecord {
    #[serde(rename = "flBin", deserialize_with = "lenient_string")]
    pub bin: Option<String>,
    /// Backslash-delimited name hierarchy.
    #[serde(rename = "flNameRu", deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(rename = "flOpf", deserialize_with = "lenient_string")]
    pub opf: Option<String>,
    #[serde(rename = "flKfsL0", deserialize_with = "lenient_string")]
    pub kfs_l0: Option<String>,
    #[serde(rename = "flKfsL1", deserialize_with = "lenient_string")]
    pub kfs_l1: Option<String>,
    #[serde(rename = "flKfsL2", deserialize_with = "lenient_string")]
    pub kfs_l2: Option<String>,
    #[serde(rename = "flOkedL0", deserialize_with = "lenient_string")]
    pub oked_l0: Option<String>,
    #[serde(rename = "flStateInvolvement", deserialize_with = "lenient_string")]
    pub state_involvement: Option<String>,
    #[serde(rename = "flStatus", deserialize_with = "lenient_string")]
    pub status: Option<String>,
    #[serde(rename = "flOwnerBin", deserialize_with = "lenient_string")]
    pub owner_bin: Option<String>,
    #[serde(rename = "flOguBin", deserialize_with = "lenient_string")]
    pub ogu_bin: Option<String>,
}

impl RawRecord {
    /// Creates a record carrying only a name.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        other @ (Value::Array(_) | Value::Object(_)) => Some(other.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_registry_listing() {
        let body = r#"{
            "Objects": [
                {
                    "flBin": "990240000123",
                    "flNameRu": "Министерство финансов \\ Комитет казначейства",
                    "flOpf": "ГУ",
                    "flKfsL0": "2",
                    "flKfsL1": 242,
                    "flKfsL2": null,
                    "flOkedL0": "84",
                    "flStateInvolvement": "100",
                    "flStatus": "Действующее",
                    "flOwnerBin": "990240000001",
                    "flOguBin": "990240000002"
                },
                { "flNameRu": "Акимат", "extra": true }
            ],
            "Total": 2
        }"#;

        let response: RegistryResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.objects.len(), 2);

        let first = &response.objects[0];
        assert_eq!(first.bin.as_deref(), Some("990240000123"));
        assert_eq!(first.kfs_l1.as_deref(), Some("242"));
        assert_eq!(first.kfs_l2, None);
        assert_eq!(first.ogu_bin.as_deref(), Some("990240000002"));

        assert_eq!(response.objects[1], RawRecord::named("Акимат"));
    }

    #[test]
    fn test_missing_objects_is_an_error() {
        assert!(serde_json::from_str::<RegistryResponse>(r#"{"Total": 0}"#).is_err());
        assert!(serde_json::from_str::<RegistryResponse>(r#"[]"#).is_err());
    }

    #[test]
    fn test_missing_name_parses_as_none() {
        let response: RegistryResponse =
            serde_json::from_str(r#"{"Objects": [{"flBin": "1"}]}"#).unwrap();
        assert_eq!(response.objects[0].name, None);
    }
}
