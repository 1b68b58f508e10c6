//! Attribute filters: the active selection and the available choices.
//!
//! A [`FilterSelection`] narrows results by exact attribute equality (AND of
//! all active filters). [`build_filter_choices`] lists the distinct values a
//! user can pick for each filterable attribute of a category.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::catalog::category::Category;
use crate::catalog::record::Record;
use crate::error::{Result, RingoError};

/// Active attribute filters, attribute name to required value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterSelection {
    values: BTreeMap<String, String>,
}

impl FilterSelection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: require `attribute == value`.
    #[must_use]
    pub fn with(mut self, attribute: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(attribute, value);
        self
    }

    /// Set a filter. An empty value clears it ("no constraint").
    pub fn set(&mut self, attribute: impl Into<String>, value: impl Into<String>) {
        let attribute = attribute.into();
        let value = value.into();
        if value.is_empty() {
            self.values.remove(&attribute);
        } else {
            self.values.insert(attribute, value);
        }
    }

    #[must_use]
    pub fn get(&self, attribute: &str) -> Option<&str> {
        self.values.get(attribute).map(String::as_str)
    }

    /// Whether any filter constrains the result.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Check that every filter names a filterable attribute of `category`.
    pub fn validate_for(&self, category: Category) -> Result<()> {
        for attribute in self.values.keys() {
            if !category.is_filterable(attribute) {
                return Err(RingoError::InvalidFilter(format!(
                    "'{attribute}' is not a filter for {} (available: {})",
                    category.label(),
                    category.filters().join(", ")
                )));
            }
        }
        Ok(())
    }

    /// Whether `record` satisfies every active filter.
    #[must_use]
    pub fn matches(&self, record: &Record) -> bool {
        self.values
            .iter()
            .all(|(attribute, wanted)| record.text(attribute) == Some(wanted.as_str()))
    }

    /// Parse `KEY=VALUE` pairs as given on the command line.
    pub fn parse_pairs<I, S>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut selection = Self::new();
        for pair in pairs {
            let pair = pair.as_ref();
            let (key, value) = pair.split_once('=').ok_or_else(|| {
                RingoError::InvalidFilter(format!("expected KEY=VALUE, got '{pair}'"))
            })?;
            let key = key.trim();
            if key.is_empty() {
                return Err(RingoError::InvalidFilter(format!(
                    "missing attribute name in '{pair}'"
                )));
            }
            selection.set(key, value.trim());
        }
        Ok(selection)
    }
}

/// Distinct values available for one filterable attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterChoice {
    pub attribute: String,
    pub values: Vec<String>,
}

/// Whether an attribute name denotes a release year.
#[must_use]
pub fn is_year_attribute(attribute: &str) -> bool {
    attribute.contains('年') || attribute.to_lowercase().contains("year")
}

/// Year value of a choice: its digits read as a positive integer.
fn year_value(value: &str) -> Option<u64> {
    let digits: String = value.chars().filter(char::is_ascii_digit).collect();
    digits.parse::<u64>().ok().filter(|n| *n > 0)
}

/// Sort distinct values for display.
///
/// Year attributes sort newest first when every value carries a year;
/// everything else sorts lexicographically.
#[must_use]
pub fn sort_choice_values(attribute: &str, values: BTreeSet<String>) -> Vec<String> {
    // BTreeSet iteration is already lexicographic.
    let values: Vec<String> = values.into_iter().collect();

    if is_year_attribute(attribute) {
        let years: Option<Vec<u64>> = values.iter().map(|v| year_value(v)).collect();
        if let Some(years) = years {
            let mut keyed: Vec<(u64, String)> = years.into_iter().zip(values).collect();
            keyed.sort_by(|(ya, a), (yb, b)| match yb.cmp(ya) {
                Ordering::Equal => a.cmp(b),
                other => other,
            });
            return keyed.into_iter().map(|(_, v)| v).collect();
        }
    }

    values
}

/// Build the filter choices for `category` from its processed records.
///
/// Attributes follow the category's declared order. Absent, empty and
/// list-valued attributes contribute no choice.
#[must_use]
pub fn build_filter_choices(category: Category, records: &[Record]) -> Vec<FilterChoice> {
    category
        .filters()
        .iter()
        .map(|attribute| {
            let distinct: BTreeSet<String> = records
                .iter()
                .filter_map(|record| record.text(attribute))
                .filter(|value| !value.is_empty())
                .map(ToString::to_string)
                .collect();
            FilterChoice {
                attribute: (*attribute).to_string(),
                values: sort_choice_values(attribute, distinct),
            }
        })
        .collect()
}
