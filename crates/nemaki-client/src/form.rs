//! Browser Binding form encoding.
//!
//! Actions are posted as flat form fields:
//!
//! ```text
//! cmisaction=updateProperties&succinct=true&objectId=...
//! propertyId[0]=cmis:name&propertyValue[0]=a.txt
//! propertyId[1]=tags&propertyValue[1][0]=x&propertyValue[1][1]=y
//! ```

use nemaki_core::PropertyValue;
use nemaki_core::property::Properties;
use serde_json::Value;

/// How absent property values are sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbsentValues {
    /// Leave the property out entirely (create actions).
    Skip,
    /// Send an empty value, which clears the property (update actions).
    Clear,
}

/// Ordered list of form fields for one Browser Binding action.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrowserForm {
    fields: Vec<(String, String)>,
    next_property: usize,
}

impl BrowserForm {
    /// Start a form for `action` with succinct responses.
    #[must_use]
    pub fn action(action: &str) -> Self {
        Self::default()
            .field("cmisaction", action)
            .field("succinct", "true")
    }

    #[must_use]
    pub fn field(mut self, name: &str, value: impl Into<String>) -> Self {
        self.fields.push((name.to_string(), value.into()));
        self
    }

    /// Append `value` only when present.
    #[must_use]
    pub fn optional(self, name: &str, value: Option<&str>) -> Self {
        match value {
            Some(value) => self.field(name, value),
            None => self,
        }
    }

    /// Append one property as `propertyId[i]`/`propertyValue[i]`.
    #[must_use]
    pub fn property(mut self, id: &str, value: &PropertyValue, absent: AbsentValues) -> Self {
        let index = self.next_property;
        match value {
            PropertyValue::Absent if absent == AbsentValues::Skip => return self,
            PropertyValue::Absent => {
                self = self
                    .field(&format!("propertyId[{index}]"), id)
                    .field(&format!("propertyValue[{index}]"), "");
            }
            PropertyValue::Scalar(value) => {
                self = self
                    .field(&format!("propertyId[{index}]"), id)
                    .field(&format!("propertyValue[{index}]"), render(value));
            }
            // An empty list is sent as a bare id: no values means "clear".
            PropertyValue::Multi(values) => {
                self = self.field(&format!("propertyId[{index}]"), id);
                for (sub, value) in values.iter().enumerate() {
                    self = self.field(&format!("propertyValue[{index}][{sub}]"), render(value));
                }
            }
        }
        self.next_property += 1;
        self
    }

    #[must_use]
    pub fn properties(self, properties: &Properties, absent: AbsentValues) -> Self {
        properties
            .iter()
            .fold(self, |form, (id, value)| form.property(id, value, absent))
    }

    #[must_use]
    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }

    /// `application/x-www-form-urlencoded` body.
    #[must_use]
    pub fn encode(&self) -> String {
        self.fields
            .iter()
            .map(|(name, value)| {
                format!(
                    "{}={}",
                    urlencoding::encode(name),
                    urlencoding::encode(value)
                )
            })
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Multipart body carrying the same fields, for actions with content.
    #[must_use]
    pub fn into_multipart(self) -> reqwest::multipart::Form {
        self.fields
            .into_iter()
            .fold(reqwest::multipart::Form::new(), |form, (name, value)| {
                form.text(name, value)
            })
    }
}

fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Parse `key=value` pairs into properties. A value wrapped in `[a,b]`
/// becomes multi-valued; an empty value becomes absent.
///
/// # Errors
///
/// Returns the offending input when it has no `=` or an empty key.
pub fn parse_assignments<'a, I>(pairs: I) -> Result<Properties, String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut properties = Properties::new();
    for pair in pairs {
        let (key, raw) = pair
            .split_once('=')
            .filter(|(key, _)| !key.trim().is_empty())
            .ok_or_else(|| pair.to_string())?;
        let raw = raw.trim();
        let value = if raw.is_empty() {
            PropertyValue::Absent
        } else if let Some(inner) = raw.strip_prefix('[').and_then(|r| r.strip_suffix(']')) {
            PropertyValue::Multi(
                inner
                    .split(',')
                    .map(str::trim)
                    .filter(|item| !item.is_empty())
                    .map(|item| Value::String(item.to_string()))
                    .collect(),
            )
        } else {
            PropertyValue::Scalar(Value::String(raw.to_string()))
        };
        properties.insert(key.trim().to_string(), value);
    }
    Ok(properties)
}
