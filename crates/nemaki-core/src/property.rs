//! Normalized CMIS property values.
//!
//! The Browser Binding encodes the same property in several ways depending on
//! the `succinct` flag and the server version:
//!
//! ```text
//! {"cmis:name": {"id": "cmis:name", "value": "a.txt"}}   full mode
//! {"cmis:name": "a.txt"}                                succinct mode
//! {"cmis:secondaryObjectTypeIds": ["x", "y"]}           multi-valued
//! {"cmis:checkinComment": null}                         not set
//! ```
//!
//! [`PropertyValue::from_json`] collapses all of them so callers never branch
//! on the wrapper shape.

use std::collections::BTreeMap;

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// A single CMIS property value after normalization.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PropertyValue {
    Scalar(Value),
    Multi(Vec<Value>),
    #[default]
    Absent,
}

/// Property id → normalized value.
pub type Properties = BTreeMap<String, PropertyValue>;

impl PropertyValue {
    /// Normalize a raw Browser Binding property value.
    #[must_use]
    pub fn from_json(raw: &Value) -> Self {
        match raw {
            Value::Null => Self::Absent,
            Value::Object(map) if map.contains_key("value") => {
                map.get("value").map_or(Self::Absent, Self::from_json)
            }
            Value::Array(items) if items.is_empty() => Self::Absent,
            Value::Array(items) => Self::Multi(items.clone()),
            other => Self::Scalar(other.clone()),
        }
    }

    /// Normalize every entry of a properties object. Non-object input yields
    /// an empty map.
    #[must_use]
    pub fn map_from_json(raw: &Value) -> Properties {
        raw.as_object()
            .map(|map| {
                map.iter()
                    .map(|(key, value)| (key.clone(), Self::from_json(value)))
                    .collect()
            })
            .unwrap_or_default()
    }

    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// First value of the property: the scalar itself, or the head of a
    /// multi-valued list.
    #[must_use]
    pub fn first(&self) -> Option<&Value> {
        match self {
            Self::Scalar(value) => Some(value),
            Self::Multi(values) => values.first(),
            Self::Absent => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        self.first().and_then(Value::as_str)
    }

    /// Integer view. Numeric strings are accepted because some bindings send
    /// `cmis:contentStreamLength` as a string.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self.first()? {
            Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self.first()? {
            Value::Bool(b) => Some(*b),
            Value::String(s) => match s.as_str() {
                "true" => Some(true),
                "false" => Some(false),
                _ => None,
            },
            _ => None,
        }
    }

    /// Datetime view. Accepts epoch milliseconds (Browser Binding) and
    /// RFC 3339 strings (REST endpoints).
    #[must_use]
    pub fn as_datetime(&self) -> Option<DateTime<Utc>> {
        match self.first()? {
            Value::Number(n) => n
                .as_i64()
                .and_then(|millis| Utc.timestamp_millis_opt(millis).single()),
            Value::String(s) => DateTime::parse_from_rfc3339(s)
                .map(|dt| dt.with_timezone(&Utc))
                .ok()
                .or_else(|| {
                    s.parse::<i64>()
                        .ok()
                        .and_then(|millis| Utc.timestamp_millis_opt(millis).single())
                }),
            _ => None,
        }
    }

    /// All values rendered as strings. Scalars become a one-element list.
    #[must_use]
    pub fn as_strings(&self) -> Vec<String> {
        let render = |value: &Value| match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        match self {
            Self::Scalar(value) => vec![render(value)],
            Self::Multi(values) => values.iter().map(render).collect(),
            Self::Absent => Vec::new(),
        }
    }
}

impl Serialize for PropertyValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Scalar(value) => value.serialize(serializer),
            Self::Multi(values) => values.serialize(serializer),
            Self::Absent => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for PropertyValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Value::deserialize(deserializer)?;
        Ok(Self::from_json(&raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case::wrapped(json!({"id": "cmis:name", "value": "a.txt"}), PropertyValue::Scalar(json!("a.txt")))]
    #[case::bare(json!("a.txt"), PropertyValue::Scalar(json!("a.txt")))]
    #[case::null(json!(null), PropertyValue::Absent)]
    #[case::wrapped_null(json!({"value": null}), PropertyValue::Absent)]
    #[case::empty_array(json!([]), PropertyValue::Absent)]
    #[case::single_item_array(json!(["x"]), PropertyValue::Multi(vec![json!("x")]))]
    #[case::wrapped_array(json!({"value": ["x", "y"]}), PropertyValue::Multi(vec![json!("x"), json!("y")]))]
    fn normalizes_binding_shapes(#[case] raw: Value, #[case] expected: PropertyValue) {
        assert_eq!(PropertyValue::from_json(&raw), expected);
    }

    #[test]
    fn object_without_value_key_is_kept_as_scalar() {
        let raw = json!({"canDeleteObject": true});
        assert_eq!(PropertyValue::from_json(&raw), PropertyValue::Scalar(raw));
    }

    #[test]
    fn integer_view_accepts_numeric_strings() {
        assert_eq!(PropertyValue::Scalar(json!("1024")).as_i64(), Some(1024));
        assert_eq!(PropertyValue::Scalar(json!(2048)).as_i64(), Some(2048));
        assert_eq!(PropertyValue::Scalar(json!("n/a")).as_i64(), None);
        assert_eq!(PropertyValue::Absent.as_i64(), None);
    }

    #[test]
    fn datetime_view_accepts_millis_and_rfc3339() {
        let from_millis = PropertyValue::Scalar(json!(1_700_000_000_000_i64))
            .as_datetime()
            .expect("millis");
        let from_text = PropertyValue::Scalar(json!("2023-11-14T22:13:20Z"))
            .as_datetime()
            .expect("rfc3339");
        assert_eq!(from_millis, from_text);
    }

    #[test]
    fn strings_view_flattens_scalars_and_lists() {
        assert_eq!(
            PropertyValue::Scalar(json!("a")).as_strings(),
            vec!["a".to_string()]
        );
        assert_eq!(
            PropertyValue::Multi(vec![json!("a"), json!(1)]).as_strings(),
            vec!["a".to_string(), "1".to_string()]
        );
        assert!(PropertyValue::Absent.as_strings().is_empty());
    }

    #[test]
    fn serializes_without_wrapper() {
        let props = PropertyValue::map_from_json(&json!({
            "cmis:name": {"value": "a.txt"},
            "cmis:secondaryObjectTypeIds": {"value": []},
        }));
        let out = serde_json::to_value(&props).expect("serialize");
        assert_eq!(
            out,
            json!({"cmis:name": "a.txt", "cmis:secondaryObjectTypeIds": null})
        );
    }
}
