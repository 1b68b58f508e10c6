//! Load → derive → filter choices → search, through the public API.

use std::sync::Arc;

use serde_json::json;
use tracing::Level;

use ringo::catalog::record::{UNKNOWN, fields};
use ringo::catalog::{CatalogService, Category, MemorySource};
use ringo::diagnostics::RecordingSink;
use ringo::search::{FilterSelection, Query, SearchMode, search};

fn service() -> (CatalogService, Arc<RecordingSink>) {
    let mut source = MemorySource::new();
    source
        .insert_json(
            Category::AppleWatch,
            json!([
                {"名称": "Apple Watch Series ９", "モデル番号": ["A2978", "A2980"], "発売年": "2023"},
                {"名称": "Apple Watch Ultra 2", "モデル番号": "A2986", "発売年": "2023"},
                {"名称": "Apple Watch SE (第2世代)", "モデル番号": "A2722", "発売年": "2022"},
                {"モデル番号": "A1553", "発売年": "2015"}
            ]),
        )
        .unwrap();
    source
        .insert_json(
            Category::Ipad,
            json!([
                {"名称": "iPad mini (第6世代)", "モデル番号": "A2567", "特徴": "A15 Bionicチップ"},
                {"名称": "iPad (第1世代)", "モデル番号": "A1219"}
            ]),
        )
        .unwrap();

    let sink = Arc::new(RecordingSink::new());
    let service = CatalogService::new(source).with_diagnostics(Arc::clone(&sink));
    (service, sink)
}

#[test]
fn watch_series_derived_and_filterable() {
    let (service, _) = service();
    let catalog = service.load_category(Category::AppleWatch);
    let series: Vec<_> = catalog
        .records()
        .iter()
        .map(|r| r.text(fields::SERIES))
        .collect();
    assert_eq!(
        series,
        vec![
            Some("Series 9"),
            Some("Apple Watch Ultra"),
            Some("Apple Watch SE"),
            None
        ]
    );

    let query = Query::filters_only(FilterSelection::new().with(fields::SERIES, "Series 9"));
    let found = search(catalog.records(), &query).unwrap();
    assert_eq!(found.len(), 1);
}

#[test]
fn failed_derivation_is_reported_not_fatal() {
    let (service, sink) = service();
    let catalog = service.load_category(Category::AppleWatch);
    assert_eq!(catalog.len(), 4);
    let warnings = sink.messages_at(Level::WARN);
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains(fields::SERIES));
}

#[test]
fn ipad_without_features_gets_unknown_chip() {
    let (service, _) = service();
    let catalog = service.load_category(Category::Ipad);
    let chips: Vec<_> = catalog
        .records()
        .iter()
        .filter_map(|r| r.text(fields::CPU))
        .collect();
    assert_eq!(chips, vec!["A15 Bionic チップ", UNKNOWN]);
}

#[test]
fn filter_choices_follow_category_order() {
    let (service, _) = service();
    let choices = service.filter_choices(Category::AppleWatch);
    let attributes: Vec<_> = choices.iter().map(|c| c.attribute.as_str()).collect();
    assert_eq!(attributes, vec![fields::SERIES, fields::RELEASE_YEAR]);
    assert_eq!(choices[1].values, vec!["2023", "2022", "2015"]);
}

#[test]
fn loads_are_shared() {
    let (service, sink) = service();
    let first = service.load_category(Category::Ipad);
    let second = service.load_category(Category::Ipad);
    assert!(Arc::ptr_eq(&first, &second));
    let loaded = sink
        .messages_at(Level::INFO)
        .into_iter()
        .filter(|m| m.starts_with("Loaded"))
        .count();
    assert_eq!(loaded, 1);
}

#[test]
fn model_search_across_list_values() {
    let (service, _) = service();
    let catalog = service.load_category(Category::AppleWatch);
    let found = search(catalog.records(), &Query::new("a2980", SearchMode::Model)).unwrap();
    assert_eq!(found[0].name(), Some("Apple Watch Series ９"));
}
