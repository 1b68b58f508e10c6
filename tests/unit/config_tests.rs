use tempfile::TempDir;

use ringo::catalog::Category;
use ringo::cli::OutputFormat;
use ringo::config::{Config, PROJECT_CONFIG_FILE};
use ringo::search::SearchMode;

#[test]
fn project_file_is_read_from_root() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join(PROJECT_CONFIG_FILE),
        "[data]\ndir = \"catalogs\"\n\n[output]\nformat = \"tsv\"\n",
    )
    .unwrap();

    let explicit = dir.path().join(PROJECT_CONFIG_FILE);
    let config = Config::load(Some(&explicit), dir.path()).unwrap();
    assert_eq!(config.output.format, OutputFormat::Tsv);
    assert_eq!(config.search.default_mode, SearchMode::Model);
    assert_eq!(config.search.default_category, Category::Iphone);
    assert_eq!(
        config.data_dir(dir.path()),
        std::path::PathBuf::from("catalogs")
    );
}

#[test]
fn unknown_keys_in_sections_are_ignored() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("extra.toml");
    std::fs::write(&path, "[search]\ndefault_mode = \"name\"\nhighlight = true\n").unwrap();
    let config = Config::load(Some(&path), dir.path()).unwrap();
    assert_eq!(config.search.default_mode, SearchMode::Name);
}
