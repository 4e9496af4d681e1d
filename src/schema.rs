//! The ECS-style semantic type schema loaded once at startup from a JSON
//! configuration document.

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

use crate::error::LogParError;

/// A semantic field type, as named in the schema configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SemanticType {
    Long,
    Double,
    Float,
    ScaledFloat,
    Byte,
    Keyword,
    Text,
    Object,
    GeoPoint,
    Nested,
    Boolean,
    Ip,
    Date,
    UserAgent,
    Url,
}

/// The on-disk shape of a schema configuration document.
#[derive(Debug, Deserialize)]
struct SchemaDocument {
    fields: HashMap<String, SemanticType>,
}

/// `field name -> semantic type`, immutable after construction.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    fields: HashMap<String, SemanticType>,
}

impl Schema {
    /// Loads the schema from a JSON document shaped `{"fields": {name: type, ...}}`.
    /// Field-type deserialization (unknown type names, non-string values) is
    /// handled by `serde`; the one rule it can't express is checked by hand:
    /// the `fields` map must be non-empty.
    pub fn from_json(document: &Value) -> Result<Self, LogParError> {
        if !document.is_object() {
            return Err(LogParError::configuration("configuration document must be an object"));
        }

        let parsed: SchemaDocument = serde_json::from_value(document.clone())
            .map_err(|err| LogParError::configuration(format!("invalid schema document: {err}")))?;

        if parsed.fields.is_empty() {
            return Err(LogParError::configuration("schema field types must not be empty"));
        }

        Ok(Schema { fields: parsed.fields })
    }

    pub fn lookup(&self, field_name: &str) -> Option<SemanticType> {
        self.fields.get(field_name).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn loads_valid_schema() {
        let doc = json!({"fields": {"client.ip": "ip", "user.name": "keyword"}});
        let schema = Schema::from_json(&doc).unwrap();
        assert_eq!(schema.lookup("client.ip"), Some(SemanticType::Ip));
        assert_eq!(schema.lookup("user.name"), Some(SemanticType::Keyword));
        assert_eq!(schema.lookup("missing"), None);
    }

    #[test]
    fn rejects_non_object_document() {
        assert!(Schema::from_json(&json!([1, 2, 3])).is_err());
    }

    #[test]
    fn rejects_missing_fields_key() {
        assert!(Schema::from_json(&json!({"other": {}})).is_err());
    }

    #[test]
    fn rejects_empty_fields() {
        assert!(Schema::from_json(&json!({"fields": {}})).is_err());
    }

    #[test]
    fn rejects_non_string_type_value() {
        assert!(Schema::from_json(&json!({"fields": {"a": 1}})).is_err());
    }

    #[test]
    fn rejects_unknown_type_name() {
        assert!(Schema::from_json(&json!({"fields": {"a": "not_a_type"}})).is_err());
    }
}
