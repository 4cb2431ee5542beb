//! Path-addressable container for field schemas.
//!
//! The create-metadata payload mixes fixed attributes (`required`, `name`,
//! `schema`) with custom field keys that are only known at runtime, so the
//! schemas are kept as raw JSON and read through typed accessors:
//!
//! ```
//! use jira_createmeta::FieldMap;
//!
//! let fields: FieldMap = serde_json::from_value(serde_json::json!({
//!     "customfield_10806": { "required": true, "name": "Epic Link" }
//! }))
//! .unwrap();
//!
//! assert!(fields.get_bool("customfield_10806/required").unwrap());
//! assert_eq!(fields.get_str("customfield_10806/name").unwrap(), "Epic Link");
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Separator between segments in a lookup path
pub const PATH_SEPARATOR: char = '/';

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("key not found: {path}")]
    KeyNotFound { path: String },

    #[error("value at {path} is not a {expected}")]
    TypeMismatch { path: String, expected: &'static str },
}

/// Field key → field schema blob
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldMap(Map<String, Value>);

impl FieldMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Field keys in ascending order
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Schema blob stored under a single field key
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(key.into(), value)
    }

    /// Look up a slash-delimited path such as `"customfield_10806/schema/type"`
    pub fn value(&self, path: &str) -> Result<&Value, FieldError> {
        let segments: Vec<&str> = path.split(PATH_SEPARATOR).collect();
        self.value_at(&segments)
    }

    /// Look up pre-split path segments. Segments are used as-is, so a key
    /// containing `/` can still be addressed.
    pub fn value_at(&self, segments: &[&str]) -> Result<&Value, FieldError> {
        let not_found = || FieldError::KeyNotFound {
            path: join(segments),
        };

        let (first, rest) = segments.split_first().ok_or_else(not_found)?;
        let mut current = self.0.get(*first).ok_or_else(not_found)?;
        for segment in rest {
            current = current
                .as_object()
                .and_then(|object| object.get(*segment))
                .ok_or_else(not_found)?;
        }
        Ok(current)
    }

    pub fn get_bool(&self, path: &str) -> Result<bool, FieldError> {
        let segments: Vec<&str> = path.split(PATH_SEPARATOR).collect();
        self.get_bool_at(&segments)
    }

    pub fn get_bool_at(&self, segments: &[&str]) -> Result<bool, FieldError> {
        self.value_at(segments)?
            .as_bool()
            .ok_or_else(|| FieldError::TypeMismatch {
                path: join(segments),
                expected: "bool",
            })
    }

    pub fn get_str(&self, path: &str) -> Result<&str, FieldError> {
        let segments: Vec<&str> = path.split(PATH_SEPARATOR).collect();
        self.get_str_at(&segments)
    }

    pub fn get_str_at(&self, segments: &[&str]) -> Result<&str, FieldError> {
        self.value_at(segments)?
            .as_str()
            .ok_or_else(|| FieldError::TypeMismatch {
                path: join(segments),
                expected: "string",
            })
    }
}

impl FromIterator<(String, Value)> for FieldMap {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a FieldMap {
    type Item = (&'a String, &'a Value);
    type IntoIter = serde_json::map::Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

fn join(segments: &[&str]) -> String {
    segments.join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn epic_link_fields() -> FieldMap {
        serde_json::from_value(json!({
            "customfield_10806": {
                "required": true,
                "schema": {
                    "type": "any",
                    "custom": "com.pyxis.greenhopper.jira:gh-epic-link",
                    "customId": 10806
                },
                "name": "Epic Link",
                "hasDefaultValue": false,
                "operations": ["set"]
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_nested_lookup() {
        let fields = epic_link_fields();

        assert!(fields.get_bool("customfield_10806/required").unwrap());
        assert_eq!(fields.get_str("customfield_10806/name").unwrap(), "Epic Link");
        assert_eq!(
            fields.get_str("customfield_10806/schema/type").unwrap(),
            "any"
        );
        assert_eq!(
            fields.value("customfield_10806/schema/customId").unwrap(),
            &json!(10806)
        );
    }

    #[test]
    fn test_missing_key() {
        let fields = epic_link_fields();

        assert_eq!(
            fields.get_bool("customfield_99999/required"),
            Err(FieldError::KeyNotFound {
                path: "customfield_99999/required".to_string()
            })
        );
        assert_eq!(
            fields.get_str("customfield_10806/description"),
            Err(FieldError::KeyNotFound {
                path: "customfield_10806/description".to_string()
            })
        );
    }

    #[test]
    fn test_descending_into_scalar_is_not_found() {
        let fields = epic_link_fields();

        let err = fields.value("customfield_10806/name/first").unwrap_err();
        assert_eq!(
            err,
            FieldError::KeyNotFound {
                path: "customfield_10806/name/first".to_string()
            }
        );
    }

    #[test]
    fn test_type_mismatch() {
        let fields = epic_link_fields();

        assert_eq!(
            fields.get_bool("customfield_10806/name"),
            Err(FieldError::TypeMismatch {
                path: "customfield_10806/name".to_string(),
                expected: "bool"
            })
        );
        // no coercion from numbers or arrays
        assert!(matches!(
            fields.get_str("customfield_10806/schema/customId"),
            Err(FieldError::TypeMismatch { .. })
        ));
        assert!(matches!(
            fields.get_bool("customfield_10806/operations"),
            Err(FieldError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_segments_allow_slash_in_key() {
        let mut fields = FieldMap::new();
        fields.insert("odd/key", json!({ "name": "Odd" }));

        assert_eq!(fields.get_str_at(&["odd/key", "name"]).unwrap(), "Odd");
        assert!(fields.get_str("odd/key/name").is_err());
    }

    #[test]
    fn test_empty_path() {
        let fields = epic_link_fields();
        assert!(matches!(
            fields.value_at(&[]),
            Err(FieldError::KeyNotFound { .. })
        ));
    }

    #[test]
    fn test_serializes_as_plain_object() {
        let fields: FieldMap = [("f1".to_string(), json!({ "name": "Summary" }))]
            .into_iter()
            .collect();

        assert_eq!(
            serde_json::to_value(&fields).unwrap(),
            json!({ "f1": { "name": "Summary" } })
        );
        assert_eq!(fields.len(), 1);
        assert_eq!(fields.keys().collect::<Vec<_>>(), vec!["f1"]);
    }
}
