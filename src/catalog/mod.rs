//! Device catalogs: categories, records, derived attributes, and loading.

pub mod category;
pub mod derive;
pub mod record;
pub mod service;
pub mod source;

pub use category::{Category, CategorySpec};
pub use derive::{Derivation, DerivationFailure};
pub use record::{FieldValue, RawRecord, Record, UNKNOWN, fields};
pub use service::{CatalogService, ProcessedCatalog};
pub use source::{DataSource, JsonDirSource, MemorySource};
