use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::catalog::Category;
use crate::cli::OutputFormat;
use crate::error::{Result, RingoError};
use crate::search::SearchMode;

/// Name of the project-local config file.
pub const PROJECT_CONFIG_FILE: &str = "ringo.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration.
    ///
    /// An explicit path (or `RINGO_CONFIG`) replaces the file lookup;
    /// otherwise the global config is patched by `ringo.toml` in
    /// `project_root`. Environment overrides apply last.
    pub fn load(explicit_path: Option<&Path>, project_root: &Path) -> Result<Self> {
        let mut config = Self::default();

        let explicit = explicit_path
            .map(PathBuf::from)
            .or_else(|| std::env::var("RINGO_CONFIG").ok().map(PathBuf::from));

        if let Some(path) = explicit {
            let patch = Self::load_patch(&path)?.ok_or_else(|| {
                RingoError::MissingConfig(format!("config file {} not found", path.display()))
            })?;
            config.merge_patch(patch);
        } else {
            if let Some(global) = Self::load_global()? {
                config.merge_patch(global);
            }
            if let Some(project) = Self::load_patch(&project_root.join(PROJECT_CONFIG_FILE))? {
                config.merge_patch(project);
            }
        }

        config.apply_env_overrides()?;

        Ok(config)
    }

    /// Path of the per-user config file, if a config directory exists.
    #[must_use]
    pub fn global_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("ringo/config.toml"))
    }

    fn load_global() -> Result<Option<ConfigPatch>> {
        match Self::global_path() {
            Some(path) => Self::load_patch(&path),
            None => Ok(None),
        }
    }

    fn load_patch(path: &Path) -> Result<Option<ConfigPatch>> {
        if !path.exists() {
            return Ok(None);
        }

        let raw = std::fs::read_to_string(path)
            .map_err(|err| RingoError::Config(format!("read config {}: {err}", path.display())))?;
        Self::parse_patch(&raw)
            .map(Some)
            .map_err(|err| RingoError::Config(format!("parse config {}: {err}", path.display())))
    }

    fn parse_patch(raw: &str) -> std::result::Result<ConfigPatch, toml::de::Error> {
        toml::from_str(raw)
    }

    fn merge_patch(&mut self, patch: ConfigPatch) {
        if let Some(patch) = patch.data {
            self.data.merge(patch);
        }
        if let Some(patch) = patch.search {
            self.search.merge(patch);
        }
        if let Some(patch) = patch.output {
            self.output.merge(patch);
        }
    }

    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Some(value) = env_string("RINGO_DATA_DIR") {
            self.data.dir = Some(PathBuf::from(value));
        }
        if let Some(value) = env_string("RINGO_SEARCH_DEFAULT_MODE") {
            self.search.default_mode = value.parse()?;
        }
        if let Some(value) = env_string("RINGO_SEARCH_DEFAULT_CATEGORY") {
            self.search.default_category = value
                .parse()
                .map_err(|_| RingoError::Config(format!("invalid default category {value}")))?;
        }
        if let Some(value) = env_string("RINGO_OUTPUT_FORMAT") {
            self.output.format = parse_output_format(&value)?;
        }
        Ok(())
    }

    /// Directory holding the per-category JSON files.
    ///
    /// Falls back to `./data` when nothing is configured.
    #[must_use]
    pub fn data_dir(&self, project_root: &Path) -> PathBuf {
        self.data
            .dir
            .clone()
            .unwrap_or_else(|| project_root.join("data"))
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

impl DataConfig {
    fn merge(&mut self, patch: DataPatch) {
        if let Some(dir) = patch.dir {
            self.dir = Some(dir);
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchConfig {
    #[serde(default)]
    pub default_mode: SearchMode,
    #[serde(default)]
    pub default_category: Category,
}

impl SearchConfig {
    fn merge(&mut self, patch: SearchPatch) {
        if let Some(mode) = patch.default_mode {
            self.default_mode = mode;
        }
        if let Some(category) = patch.default_category {
            self.default_category = category;
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

impl OutputConfig {
    fn merge(&mut self, patch: OutputPatch) {
        if let Some(format) = patch.format {
            self.format = format;
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ConfigPatch {
    data: Option<DataPatch>,
    search: Option<SearchPatch>,
    output: Option<OutputPatch>,
}

#[derive(Debug, Default, Deserialize)]
struct DataPatch {
    dir: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
struct SearchPatch {
    default_mode: Option<SearchMode>,
    default_category: Option<Category>,
}

#[derive(Debug, Default, Deserialize)]
struct OutputPatch {
    format: Option<OutputFormat>,
}

fn parse_output_format(value: &str) -> Result<OutputFormat> {
    match value.to_lowercase().as_str() {
        "human" => Ok(OutputFormat::Human),
        "json" => Ok(OutputFormat::Json),
        "jsonl" => Ok(OutputFormat::Jsonl),
        "plain" => Ok(OutputFormat::Plain),
        "tsv" => Ok(OutputFormat::Tsv),
        _ => Err(RingoError::Config(format!(
            "invalid output format {value} (expected human|json|jsonl|plain|tsv)"
        ))),
    }
}

fn env_string(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}
