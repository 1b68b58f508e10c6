use proptest::prelude::*;

use ringo::catalog::Category;
use ringo::catalog::record::{Record, fields};
use ringo::search::{FilterSelection, Query, SearchMode, build_filter_choices, search};

fn arb_record() -> impl Strategy<Value = Record> {
    (
        prop::sample::select(vec!["Apple TV HD", "Apple TV 4K", "Apple TV (第3世代)"]),
        "A[0-9]{4}",
        prop::sample::select(vec!["A8", "A12 Bionic", "A15 Bionic"]),
        prop::sample::select(vec!["2015", "2017", "2021", "2022"]),
    )
        .prop_map(|(name, model, cpu, year)| {
            Record::new()
                .with(fields::NAME, name)
                .with(fields::MODEL_NUMBERS, model)
                .with(fields::CPU, cpu)
                .with(fields::RELEASE_YEAR, year)
        })
}

fn positions(all: &[Record], found: &[&Record]) -> Vec<usize> {
    found
        .iter()
        .map(|r| all.iter().position(|c| std::ptr::eq(c, *r)).unwrap())
        .collect()
}

proptest! {
    #[test]
    fn adding_a_filter_never_widens_results(
        records in prop::collection::vec(arb_record(), 0..20),
        text in prop::sample::select(vec!["apple tv", "4k", "hd"]),
        cpu in prop::sample::select(vec!["A8", "A12 Bionic", "A15 Bionic"]),
        year in prop::sample::select(vec!["2015", "2017", "2021", "2022"]),
    ) {
        let base = Query::new(text, SearchMode::Name)
            .with_filters(FilterSelection::new().with(fields::CPU, cpu));
        let narrowed = base
            .clone()
            .with_filters(FilterSelection::new().with(fields::CPU, cpu).with(fields::RELEASE_YEAR, year));

        let wide = positions(&records, &search(&records, &base).unwrap());
        let narrow = positions(&records, &search(&records, &narrowed).unwrap());
        prop_assert!(narrow.iter().all(|idx| wide.contains(idx)));
    }

    #[test]
    fn results_keep_catalog_order(records in prop::collection::vec(arb_record(), 0..20)) {
        let query = Query::new("A", SearchMode::Model);
        let found = positions(&records, &search(&records, &query).unwrap());
        prop_assert_eq!(found.len(), records.len());
        prop_assert!(found.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn every_filter_choice_selects_something(records in prop::collection::vec(arb_record(), 1..20)) {
        for choice in build_filter_choices(Category::AppleTv, &records) {
            for value in &choice.values {
                let query = Query::filters_only(
                    FilterSelection::new().with(choice.attribute.clone(), value.clone()),
                );
                prop_assert!(!search(&records, &query).unwrap().is_empty());
            }
        }
    }

    #[test]
    fn year_choices_descend(records in prop::collection::vec(arb_record(), 1..20)) {
        let choices = build_filter_choices(Category::AppleTv, &records);
        let years = choices
            .iter()
            .find(|c| c.attribute == fields::RELEASE_YEAR)
            .unwrap();
        let parsed: Vec<u32> = years.values.iter().map(|v| v.parse().unwrap()).collect();
        prop_assert!(parsed.windows(2).all(|w| w[0] > w[1]));
    }
}
