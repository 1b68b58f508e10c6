//! CLI command implementations
//!
//! Each subcommand has its own module with:
//! - Args struct for command-line arguments
//! - `run()` function to execute the command

use crate::app::AppContext;
use crate::catalog::Category;
use crate::cli::Commands;
use crate::error::Result;

pub mod categories;
pub mod filters;
pub mod search;

/// Dispatch a command to its handler
pub fn run(ctx: &AppContext, command: &Commands) -> Result<()> {
    match command {
        Commands::Categories(args) => categories::run(ctx, args),
        Commands::Filters(args) => filters::run(ctx, args),
        Commands::Search(args) => search::run(ctx, args),
    }
}

/// Category named on the command line, or the configured default.
pub(crate) fn resolve_category(ctx: &AppContext, requested: Option<&str>) -> Result<Category> {
    requested.map_or(Ok(ctx.config.search.default_category), str::parse)
}
