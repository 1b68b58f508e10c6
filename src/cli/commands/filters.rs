//! ringo filters - Show filter choices for a category

use clap::Args;

use crate::app::AppContext;
use crate::cli::commands::resolve_category;
use crate::cli::formatters::FilterChoices;
use crate::cli::output::emit;
use crate::error::Result;

#[derive(Args, Debug)]
pub struct FiltersArgs {
    /// Category id (e.g. ipad, apple_watch); defaults to the configured category
    pub category: Option<String>,
}

pub fn run(ctx: &AppContext, args: &FiltersArgs) -> Result<()> {
    let category = resolve_category(ctx, args.category.as_deref())?;
    let choices = ctx.catalogs.filter_choices(category);
    emit(&FilterChoices::new(category, choices), ctx.output_format);
    Ok(())
}
