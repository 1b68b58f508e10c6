//! Catalog records and their attribute values.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A raw catalog entry as read from the data source.
pub type RawRecord = serde_json::Map<String, Value>;

/// Attribute names used by the catalog files.
pub mod fields {
    pub const NAME: &str = "名称";
    pub const MODEL_NUMBERS: &str = "モデル番号";
    pub const CPU: &str = "CPU";
    pub const CAPACITY: &str = "容量";
    pub const COLOR: &str = "カラー";
    pub const SCREEN_SIZE: &str = "画面サイズ";
    pub const SERIES: &str = "シリーズ";
    pub const RELEASE_YEAR: &str = "発売年";
    pub const FEATURES: &str = "特徴";
    pub const FEATURES_ALT: &str = "特徴（見分け方）";
}

/// Value shown when an attribute could not be inferred.
pub const UNKNOWN: &str = "不明";

/// A single attribute value: one string or a list of strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Single(String),
    Multiple(Vec<String>),
}

impl FieldValue {
    /// The scalar text, if this is a single value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Single(s) => Some(s),
            Self::Multiple(_) => None,
        }
    }

    /// Render for display, joining lists with ", ".
    #[must_use]
    pub fn display(&self) -> String {
        match self {
            Self::Single(s) => s.clone(),
            Self::Multiple(items) => items.join(", "),
        }
    }

    /// Convert a JSON value. `null` and objects have no representation.
    fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Null | Value::Object(_) => None,
            Value::String(s) => Some(Self::Single(s.clone())),
            Value::Bool(_) | Value::Number(_) => Some(Self::Single(value.to_string())),
            Value::Array(items) => Some(Self::Multiple(
                items
                    .iter()
                    .filter(|item| !item.is_null())
                    .map(|item| match item {
                        Value::String(s) => s.clone(),
                        other => other.to_string(),
                    })
                    .collect(),
            )),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Single(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Single(value)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(value: Vec<String>) -> Self {
        Self::Multiple(value)
    }
}

/// One catalog entry: attribute name to value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: BTreeMap<String, FieldValue>,
}

impl Record {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a record from a raw JSON object.
    ///
    /// Returns the record and the keys that were dropped because their value
    /// was a nested object.
    #[must_use]
    pub fn from_raw(raw: &RawRecord) -> (Self, Vec<String>) {
        let mut fields = BTreeMap::new();
        let mut dropped = Vec::new();
        for (key, value) in raw {
            match FieldValue::from_json(value) {
                Some(field) => {
                    fields.insert(key.clone(), field);
                }
                None if value.is_object() => dropped.push(key.clone()),
                None => {}
            }
        }
        (Self { fields }, dropped)
    }

    /// Builder: set an attribute.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<FieldValue>) {
        self.fields.insert(key.into(), value.into());
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.get(key)
    }

    /// Scalar text of an attribute; lists yield `None`.
    #[must_use]
    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(FieldValue::as_text)
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.text(fields::NAME)
    }

    #[must_use]
    pub fn model_numbers(&self) -> Option<&FieldValue> {
        self.get(fields::MODEL_NUMBERS)
    }

    /// Feature description, preferring `特徴` over the alternate key.
    #[must_use]
    pub fn features(&self) -> Option<&str> {
        self.text(fields::FEATURES)
            .filter(|s| !s.is_empty())
            .or_else(|| self.text(fields::FEATURES_ALT).filter(|s| !s.is_empty()))
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
