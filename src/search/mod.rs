//! Search engine for device catalogs
//!
//! ```text
//!   Query text ──► normalize ──► model / name match ──┐
//!                                                      ├──► results (catalog order)
//!   FilterSelection ──────────► exact attribute AND ───┘
//! ```
//!
//! Filter choices for the UI come from [`build_filter_choices`].

pub mod engine;
pub mod filters;
pub mod normalize;

pub use engine::{Query, SearchMode, matches_model, matches_name, search};
pub use filters::{FilterChoice, FilterSelection, build_filter_choices, is_year_attribute};
pub use normalize::{normalize_model_token, normalize_name_token};
