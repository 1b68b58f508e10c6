//! Output formatters for CLI commands
//!
//! Each formatter renders to every output format (Human, JSON, JSONL, Plain,
//! TSV). JSON output is wrapped in the robot envelope.

mod category_list;
mod filter_choices;
mod search_results;

pub use category_list::CategoryList;
pub use filter_choices::FilterChoices;
pub use search_results::{DISPLAY_ROWS, SearchResults, model_line};
