//! Field values and equality filters

use uuid::Uuid;

/// A polymorphic field value that can hold different types
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    String(String),
    Integer(i64),
    Boolean(bool),
    Uuid(Uuid),
    Null,
}

impl FieldValue {
    /// Convert to the JSON representation used on the storage side.
    ///
    /// UUIDs are stored as their hyphenated string form.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            FieldValue::String(s) => serde_json::Value::String(s.clone()),
            FieldValue::Integer(i) => serde_json::Value::from(*i),
            FieldValue::Boolean(b) => serde_json::Value::Bool(*b),
            FieldValue::Uuid(u) => serde_json::Value::String(u.to_string()),
            FieldValue::Null => serde_json::Value::Null,
        }
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::String(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::String(value.to_string())
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Integer(value as i64)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Boolean(value)
    }
}

impl From<Uuid> for FieldValue {
    fn from(value: Uuid) -> Self {
        FieldValue::Uuid(value)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(FieldValue::Null)
    }
}

/// Conjunction of field equality conditions.
///
/// An empty filter matches every record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    conditions: Vec<(String, FieldValue)>,
}

impl Filter {
    /// Filter matching every record
    pub fn all() -> Self {
        Self::default()
    }

    /// Filter matching records whose `field` equals `value`
    pub fn eq(field: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        Self::default().and(field, value)
    }

    /// Add another equality condition
    pub fn and(mut self, field: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.conditions.push((field.into(), value.into()));
        self
    }

    pub fn conditions(&self) -> &[(String, FieldValue)] {
        &self.conditions
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// Evaluate the filter against a record through a field accessor.
    ///
    /// A field the accessor does not know compares as `Null`.
    pub fn matches<F>(&self, field_value: F) -> bool
    where
        F: Fn(&str) -> Option<FieldValue>,
    {
        self.conditions.iter().all(|(field, expected)| {
            let actual = field_value(field).unwrap_or(FieldValue::Null);
            actual == *expected
        })
    }
}
