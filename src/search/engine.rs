//! Query engine: free-text matching plus attribute filters.

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::catalog::record::{FieldValue, Record, fields};
use crate::error::{Result, RingoError};
use crate::search::filters::FilterSelection;
use crate::search::normalize::{normalize_model_token, normalize_name_token};

/// Separators inside a single model-number string.
const MODEL_SEPARATORS: [char; 2] = [',', '、'];

/// What the free text is matched against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    /// Model numbers (e.g. A1723)
    #[default]
    Model,
    /// Product names (e.g. iPad Pro)
    Name,
}

impl SearchMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Model => "model",
            Self::Name => "name",
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchMode {
    type Err = RingoError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "model" | "model_number" | "型番" => Ok(Self::Model),
            "name" | "名称" => Ok(Self::Name),
            other => Err(RingoError::Config(format!(
                "invalid search mode {other} (expected model|name)"
            ))),
        }
    }
}

/// A single search request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    pub text: String,
    pub mode: SearchMode,
    #[serde(default)]
    pub filters: FilterSelection,
}

impl Query {
    pub fn new(text: impl Into<String>, mode: SearchMode) -> Self {
        Self {
            text: text.into(),
            mode,
            filters: FilterSelection::new(),
        }
    }

    /// Query with only attribute filters.
    #[must_use]
    pub fn filters_only(filters: FilterSelection) -> Self {
        Self {
            filters,
            ..Self::default()
        }
    }

    /// Builder: replace the filter selection.
    #[must_use]
    pub fn with_filters(mut self, filters: FilterSelection) -> Self {
        self.filters = filters;
        self
    }

    /// Trimmed free text, if any.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        let trimmed = self.text.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }

    /// Neither free text nor an active filter.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text().is_none() && !self.filters.is_active()
    }
}

/// Match `query` against `records`.
///
/// Text matching runs first, then every active filter must hold. The result
/// keeps catalog order and may be empty.
///
/// # Errors
///
/// [`RingoError::EmptyQuery`] when the query has no text and no active filter.
pub fn search<'a>(records: &'a [Record], query: &Query) -> Result<Vec<&'a Record>> {
    if query.is_empty() {
        return Err(RingoError::EmptyQuery);
    }

    let needle = query.text().map(|text| match query.mode {
        SearchMode::Model => normalize_model_token(text),
        SearchMode::Name => normalize_name_token(text),
    });

    let results: Vec<&Record> = records
        .iter()
        .filter(|record| {
            needle.as_deref().is_none_or(|needle| match query.mode {
                SearchMode::Model => matches_model(record, needle),
                SearchMode::Name => matches_name(record, needle),
            })
        })
        .filter(|record| query.filters.matches(record))
        .collect();

    tracing::debug!(
        mode = %query.mode,
        text = query.text().unwrap_or_default(),
        filters = query.filters.iter().count(),
        candidates = records.len(),
        matched = results.len(),
        "search complete"
    );

    Ok(results)
}

/// Model-number containment against an already normalized needle.
#[must_use]
pub fn matches_model(record: &Record, needle: &str) -> bool {
    match record.model_numbers() {
        Some(FieldValue::Multiple(models)) => models
            .iter()
            .any(|m| normalize_model_token(m).contains(needle)),
        Some(FieldValue::Single(models)) => models
            .split(MODEL_SEPARATORS)
            .any(|m| normalize_model_token(m).contains(needle)),
        None => false,
    }
}

/// Name match against an already normalized needle.
///
/// Matches when the record's series equals the needle, its name contains the
/// needle, or the needle contains its (non-empty) name.
#[must_use]
pub fn matches_name(record: &Record, needle: &str) -> bool {
    if let Some(series) = record.text(fields::SERIES).filter(|s| !s.is_empty()) {
        if normalize_name_token(series) == needle {
            return true;
        }
    }

    let name = normalize_name_token(record.name().unwrap_or_default());
    if name.is_empty() {
        return false;
    }
    name.contains(needle) || needle.contains(&name)
}
