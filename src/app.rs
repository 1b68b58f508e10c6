//! Application context shared by CLI commands.

use std::path::PathBuf;

use crate::catalog::{CatalogService, JsonDirSource};
use crate::cli::{Cli, OutputFormat};
use crate::config::Config;
use crate::error::Result;

pub struct AppContext {
    pub config: Config,
    pub catalogs: CatalogService,
    pub data_dir: PathBuf,
    pub output_format: OutputFormat,
}

impl AppContext {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let project_root = std::env::current_dir()?;
        let config = Config::load(cli.config.as_deref(), &project_root)?;

        let data_dir = cli
            .data_dir
            .clone()
            .unwrap_or_else(|| config.data_dir(&project_root));

        let output_format = cli.output_format().unwrap_or(config.output.format);

        Ok(Self {
            catalogs: CatalogService::new(JsonDirSource::new(&data_dir)),
            config,
            data_dir,
            output_format,
        })
    }
}
