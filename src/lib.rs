pub mod app;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod search;

pub use catalog::{Category, CatalogService, ProcessedCatalog, Record};
pub use error::{Result, RingoError};
pub use search::{Query, SearchMode, build_filter_choices, search};

/// Package version from Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
