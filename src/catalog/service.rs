//! Catalog loading and the per-category cache.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::Level;

use crate::catalog::category::Category;
use crate::catalog::record::{RawRecord, Record, fields};
use crate::catalog::source::DataSource;
use crate::diagnostics::{DiagnosticSink, TracingSink};
use crate::search::filters::{FilterChoice, build_filter_choices};

/// The processed records of one category, derived attributes merged in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedCatalog {
    category: Category,
    records: Vec<Record>,
}

impl ProcessedCatalog {
    #[must_use]
    pub const fn new(category: Category, records: Vec<Record>) -> Self {
        Self { category, records }
    }

    #[must_use]
    pub const fn category(&self) -> Category {
        self.category
    }

    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Resolves categories to processed catalogs, computing each at most once.
///
/// The cache lock is held while a catalog is built so concurrent callers for
/// the same category wait for the first computation instead of repeating it.
pub struct CatalogService {
    source: Box<dyn DataSource>,
    diagnostics: Box<dyn DiagnosticSink>,
    cache: Mutex<HashMap<Category, Arc<ProcessedCatalog>>>,
}

impl CatalogService {
    pub fn new(source: impl DataSource + 'static) -> Self {
        Self {
            source: Box::new(source),
            diagnostics: Box::new(TracingSink),
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Builder: replace the diagnostic sink.
    #[must_use]
    pub fn with_diagnostics(mut self, sink: impl DiagnosticSink + 'static) -> Self {
        self.diagnostics = Box::new(sink);
        self
    }

    /// Processed catalog for `category`.
    ///
    /// The first call fetches and processes the raw records; later calls
    /// return the same `Arc`. A missing or unreadable source yields an empty
    /// catalog, which is cached like any other.
    pub fn load_category(&self, category: Category) -> Arc<ProcessedCatalog> {
        let mut cache = self.cache.lock();
        if let Some(catalog) = cache.get(&category) {
            return Arc::clone(catalog);
        }

        let records = match self.source.fetch(category) {
            Ok(Some(raw)) => process_records(category, &raw, self.diagnostics.as_ref()),
            Ok(None) => {
                self.diagnostics.log(
                    Level::WARN,
                    &format!("Data not found for {category}"),
                );
                Vec::new()
            }
            Err(err) => {
                self.diagnostics.log(
                    Level::WARN,
                    &format!("Data for {category} could not be loaded: {err}"),
                );
                Vec::new()
            }
        };

        self.diagnostics.log(
            Level::INFO,
            &format!("Loaded {} items for {category}", records.len()),
        );

        let catalog = Arc::new(ProcessedCatalog::new(category, records));
        cache.insert(category, Arc::clone(&catalog));
        catalog
    }

    /// Filter choices for `category`, loading its catalog if needed.
    pub fn filter_choices(&self, category: Category) -> Vec<FilterChoice> {
        let catalog = self.load_category(category);
        build_filter_choices(category, catalog.records())
    }

    /// Whether `category` has been loaded.
    #[must_use]
    pub fn is_cached(&self, category: Category) -> bool {
        self.cache.lock().contains_key(&category)
    }
}

impl std::fmt::Debug for CatalogService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cached: Vec<Category> = self.cache.lock().keys().copied().collect();
        f.debug_struct("CatalogService")
            .field("cached", &cached)
            .finish_non_exhaustive()
    }
}

/// Convert raw records and merge in the category's derived attributes.
///
/// Derivations always read the unmodified record; a failed derivation leaves
/// its attribute absent.
pub fn process_records(
    category: Category,
    raw: &[RawRecord],
    diagnostics: &dyn DiagnosticSink,
) -> Vec<Record> {
    let derivations = category.spec().derivations;

    raw.iter()
        .enumerate()
        .map(|(idx, raw_record)| {
            let (mut record, dropped) = Record::from_raw(raw_record);
            let label = record_label(&record, idx);

            for key in dropped {
                diagnostics.log(
                    Level::DEBUG,
                    &format!("Ignoring nested field {key} on {label}"),
                );
            }

            let derived: Vec<_> = derivations
                .iter()
                .filter_map(|d| match (d.derive)(&record) {
                    Ok(value) => Some((d.attribute, value)),
                    Err(err) => {
                        diagnostics.log(
                            Level::WARN,
                            &format!("Error computing property {} for {label}: {err}", d.attribute),
                        );
                        None
                    }
                })
                .collect();

            for (attribute, value) in derived {
                record.set(attribute, value);
            }
            record
        })
        .collect()
}

fn record_label(record: &Record, idx: usize) -> String {
    record.text(fields::NAME).map_or_else(
        || format!("record #{idx}"),
        ToString::to_string,
    )
}
