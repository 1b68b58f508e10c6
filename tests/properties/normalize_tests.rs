use proptest::prelude::*;

use ringo::catalog::record::{Record, fields};
use ringo::search::{Query, SearchMode, normalize_model_token, normalize_name_token, search};

/// ASCII letters/digits plus their fullwidth forms, spaces and separators.
const TOKEN_CHARS: &str = r"[A-Za-z0-9Ａ-Ｚａ-ｚ０-９ ,]{0,24}";

fn to_fullwidth(s: &str) -> String {
    s.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                char::from_u32(c as u32 + 0xFEE0).unwrap_or(c)
            } else {
                c
            }
        })
        .collect()
}

proptest! {
    #[test]
    fn model_normalization_is_idempotent(input in TOKEN_CHARS) {
        let once = normalize_model_token(&input);
        prop_assert_eq!(normalize_model_token(&once), once);
    }

    #[test]
    fn name_normalization_is_idempotent(input in TOKEN_CHARS) {
        let once = normalize_name_token(&input);
        prop_assert_eq!(normalize_name_token(&once), once);
    }

    #[test]
    fn model_normalization_ignores_width_and_case(input in "[A-Za-z0-9]{1,12}") {
        let expected = normalize_model_token(&input);
        prop_assert_eq!(normalize_model_token(&to_fullwidth(&input)), expected.clone());
        prop_assert_eq!(normalize_model_token(&input.to_lowercase()), expected);
    }

    #[test]
    fn name_normalization_collapses_whitespace(words in prop::collection::vec("[a-z]{1,6}", 1..5)) {
        let spaced = format!("  {}  ", words.join("   "));
        prop_assert_eq!(normalize_name_token(&spaced), words.join(" "));
    }

    #[test]
    fn every_listed_model_is_found(models in prop::collection::vec("A[0-9]{4}", 1..5), pick in 0usize..5) {
        let record = Record::new()
            .with(fields::NAME, "Device")
            .with(fields::MODEL_NUMBERS, models.join("、"));
        let wanted = &models[pick % models.len()];
        let query = Query::new(to_fullwidth(wanted), SearchMode::Model);
        let records = [record];
        prop_assert_eq!(search(&records, &query).unwrap().len(), 1);
    }
}
