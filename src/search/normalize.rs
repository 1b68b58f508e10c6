//! Text normalization shared by model-number and name search.
//!
//! Both functions are total and idempotent: normalizing an already
//! normalized string returns it unchanged.

/// Offset between a fullwidth form and its ASCII counterpart.
const FULLWIDTH_OFFSET: u32 = 0xFEE0;

/// Map fullwidth Latin letters and digits to their half-width ASCII form.
///
/// Only `Ａ-Ｚ`, `ａ-ｚ` and `０-９` are touched; fullwidth punctuation is left
/// as is.
#[must_use]
pub fn to_halfwidth(c: char) -> char {
    match c {
        'Ａ'..='Ｚ' | 'ａ'..='ｚ' | '０'..='９' => {
            char::from_u32(c as u32 - FULLWIDTH_OFFSET).unwrap_or(c)
        }
        _ => c,
    }
}

/// Normalize a model-number token: trim, fold fullwidth forms, uppercase.
#[must_use]
pub fn normalize_model_token(input: &str) -> String {
    input
        .trim()
        .chars()
        .map(to_halfwidth)
        .collect::<String>()
        .to_uppercase()
}

/// Normalize a product name for comparison.
///
/// Lowercases, folds fullwidth forms and collapses whitespace runs to a
/// single space. Internal spacing survives so "Series 9" and "Series9" stay
/// distinct.
#[must_use]
pub fn normalize_name_token(input: &str) -> String {
    let folded: String = input
        .trim()
        .to_lowercase()
        .chars()
        .map(to_halfwidth)
        .collect();
    folded.split_whitespace().collect::<Vec<_>>().join(" ")
}
