//! ringo search - Search a device catalog
//!
//! Matches the query against model numbers or names, then narrows the result
//! with exact attribute filters.

use clap::Args;
use tracing::debug;

use crate::app::AppContext;
use crate::cli::commands::resolve_category;
use crate::cli::formatters::SearchResults;
use crate::cli::output::emit;
use crate::error::Result;
use crate::search::{FilterSelection, Query, SearchMode, search};

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Model number or product name (optional when filters are given)
    pub query: Option<String>,

    /// Category id (e.g. iphone, ipad, apple_watch)
    #[arg(long, short)]
    pub category: Option<String>,

    /// Match the query against model numbers or names
    #[arg(long, value_enum)]
    pub by: Option<SearchMode>,

    /// Attribute filter as KEY=VALUE (repeatable), e.g. --filter 発売年=2020
    #[arg(long, short)]
    pub filter: Vec<String>,
}

pub fn run(ctx: &AppContext, args: &SearchArgs) -> Result<()> {
    let category = resolve_category(ctx, args.category.as_deref())?;
    let mode = args.by.unwrap_or(ctx.config.search.default_mode);

    let filters = FilterSelection::parse_pairs(&args.filter)?;
    filters.validate_for(category)?;

    let query = Query::new(args.query.clone().unwrap_or_default(), mode).with_filters(filters);

    let catalog = ctx.catalogs.load_category(category);
    if catalog.is_empty() {
        debug!(
            category = %category,
            data_dir = %ctx.data_dir.display(),
            "no data loaded for category"
        );
    }

    let matched = search(catalog.records(), &query)?;
    let results = SearchResults::new(
        category,
        query,
        matched.into_iter().cloned().collect(),
        catalog.len(),
    );
    emit(&results, ctx.output_format);
    Ok(())
}
