//! ringo categories - List device categories

use clap::Args;

use crate::app::AppContext;
use crate::catalog::Category;
use crate::cli::formatters::CategoryList;
use crate::cli::output::emit;
use crate::error::Result;

#[derive(Args, Debug)]
pub struct CategoriesArgs {
    /// Include the number of records loaded for each category
    #[arg(long)]
    pub counts: bool,
}

pub fn run(ctx: &AppContext, args: &CategoriesArgs) -> Result<()> {
    let mut list = CategoryList::new(Category::ALL.to_vec());
    if args.counts {
        for category in Category::ALL {
            let catalog = ctx.catalogs.load_category(category);
            list.set_count(category, catalog.len());
        }
    }
    emit(&list, ctx.output_format);
    Ok(())
}
