//! Raw catalog data sources.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use serde_json::Value;

use crate::catalog::category::Category;
use crate::catalog::record::RawRecord;
use crate::error::{Result, RingoError};

/// Supplies raw records for a category.
///
/// `Ok(None)` means the category has no data; errors describe a source that
/// exists but could not be read. The catalog service treats both as an empty
/// catalog.
pub trait DataSource: Send + Sync {
    fn fetch(&self, category: Category) -> Result<Option<Vec<RawRecord>>>;
}

/// Reads `<dir>/<category>.json`, each a JSON array of objects.
#[derive(Debug, Clone)]
pub struct JsonDirSource {
    root: PathBuf,
}

impl JsonDirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Path of the JSON file backing `category`.
    #[must_use]
    pub fn path_for(&self, category: Category) -> PathBuf {
        self.root.join(format!("{}.json", category.spec().source))
    }
}

impl DataSource for JsonDirSource {
    fn fetch(&self, category: Category) -> Result<Option<Vec<RawRecord>>> {
        let path = self.path_for(category);
        if !path.exists() {
            return Ok(None);
        }

        let raw = fs::read_to_string(&path)?;
        let value: Value = serde_json::from_str(&raw)?;
        parse_records(category, value).map(Some)
    }
}

/// Split a JSON array into record objects.
pub fn parse_records(category: Category, value: Value) -> Result<Vec<RawRecord>> {
    let Value::Array(items) = value else {
        return Err(RingoError::DataSource {
            category: category.id().to_string(),
            reason: "expected a JSON array of records".to_string(),
        });
    };

    items
        .into_iter()
        .enumerate()
        .map(|(idx, item)| match item {
            Value::Object(map) => Ok(map),
            _ => Err(RingoError::DataSource {
                category: category.id().to_string(),
                reason: format!("entry {idx} is not an object"),
            }),
        })
        .collect()
}

/// In-memory records, keyed by category.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    records: HashMap<Category, Vec<RawRecord>>,
}

impl MemorySource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: register the records for a category.
    #[must_use]
    pub fn with(mut self, category: Category, records: Vec<RawRecord>) -> Self {
        self.insert(category, records);
        self
    }

    pub fn insert(&mut self, category: Category, records: Vec<RawRecord>) {
        self.records.insert(category, records);
    }

    /// Register records given as a JSON array.
    pub fn insert_json(&mut self, category: Category, value: Value) -> Result<()> {
        let records = parse_records(category, value)?;
        self.insert(category, records);
        Ok(())
    }
}

impl DataSource for MemorySource {
    fn fetch(&self, category: Category) -> Result<Option<Vec<RawRecord>>> {
        Ok(self.records.get(&category).cloned())
    }
}
