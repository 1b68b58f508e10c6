//! Derived attributes computed from raw record fields.
//!
//! Every category with derived attributes owns a static list of
//! [`Derivation`]s. Each rule list is ordered; the first rule that matches
//! decides the value.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::catalog::record::{Record, UNKNOWN, fields};
use crate::search::normalize::to_halfwidth;

/// Why a derivation produced no value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DerivationFailure {
    #[error("required field '{0}' is missing")]
    MissingField(&'static str),

    #[error("field '{0}' is a list, expected text")]
    NotText(&'static str),
}

pub type DeriveFn = fn(&Record) -> Result<String, DerivationFailure>;

/// An attribute computed by a derivation function.
#[derive(Clone, Copy)]
pub struct Derivation {
    pub attribute: &'static str,
    pub derive: DeriveFn,
}

impl std::fmt::Debug for Derivation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Derivation")
            .field("attribute", &self.attribute)
            .finish_non_exhaustive()
    }
}

pub const IPAD: &[Derivation] = &[Derivation {
    attribute: fields::CPU,
    derive: chip_from_features,
}];

pub const AIRPODS: &[Derivation] = &[Derivation {
    attribute: fields::SERIES,
    derive: airpods_series,
}];

pub const APPLE_WATCH: &[Derivation] = &[Derivation {
    attribute: fields::SERIES,
    derive: watch_series,
}];

pub const IPOD: &[Derivation] = &[Derivation {
    attribute: fields::SERIES,
    derive: ipod_series,
}];

const CHIP_SUFFIX: &str = "チップ";

static M_CHIP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"M[0-9]+").unwrap());
static A_CHIP_QUALIFIED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"A[0-9]+[XZ]?(?:\s+(?:Bionic|Fusion))?").unwrap());
static A_CHIP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"A[0-9]+").unwrap());
static WATCH_SERIES_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Series\s*([0-9]+)").unwrap());
static WATCH_SERIES_FULLWIDTH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Series\s*([０-９]+)").unwrap());
static IPOD_GENERATION: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"第[0-9]+世代").unwrap());

fn required_text<'a>(
    record: &'a Record,
    field: &'static str,
) -> Result<&'a str, DerivationFailure> {
    match record.get(field) {
        None => Err(DerivationFailure::MissingField(field)),
        Some(value) => value.as_text().ok_or(DerivationFailure::NotText(field)),
    }
}

/// Chip identifier from the feature description.
///
/// M-series chips are tried first, then A-series with an optional X/Z suffix
/// and Bionic/Fusion branding, then a bare A-number. Missing or unmatched
/// text yields [`UNKNOWN`].
pub fn chip_from_features(record: &Record) -> Result<String, DerivationFailure> {
    let Some(features) = record.text(fields::FEATURES).filter(|s| !s.is_empty()) else {
        return Ok(UNKNOWN.to_string());
    };

    let found = [&*M_CHIP, &*A_CHIP_QUALIFIED, &*A_CHIP]
        .into_iter()
        .find_map(|re| re.find(features));

    Ok(found.map_or_else(
        || UNKNOWN.to_string(),
        |m| format!("{} {CHIP_SUFFIX}", m.as_str()),
    ))
}

pub fn airpods_series(record: &Record) -> Result<String, DerivationFailure> {
    let name = required_text(record, fields::NAME)?;
    let series = if name.contains("Max") {
        "AirPods Max"
    } else if name.contains("Pro") {
        "AirPods Pro"
    } else {
        "AirPods"
    };
    Ok(series.to_string())
}

/// Watch line from the product name: Ultra, SE, numbered Series, or the
/// first generation.
pub fn watch_series(record: &Record) -> Result<String, DerivationFailure> {
    let name = required_text(record, fields::NAME)?;

    if name.contains("Ultra") {
        return Ok("Apple Watch Ultra".to_string());
    }
    if name.contains("SE") {
        return Ok("Apple Watch SE".to_string());
    }
    if name.contains("Series") {
        if let Some(caps) = WATCH_SERIES_NUMBER.captures(name) {
            return Ok(format!("Series {}", &caps[1]));
        }
        if let Some(caps) = WATCH_SERIES_FULLWIDTH.captures(name) {
            let digits: String = caps[1].chars().map(to_halfwidth).collect();
            return Ok(format!("Series {digits}"));
        }
        return Ok("Series".to_string());
    }
    if name.contains("第1世代") || name == "Apple Watch" {
        return Ok("初代 / Series 1".to_string());
    }
    Ok("Other".to_string())
}

/// iPod line from the product name, case-insensitive.
pub fn ipod_series(record: &Record) -> Result<String, DerivationFailure> {
    let name = required_text(record, fields::NAME)?.to_lowercase();

    let series = if name.contains("touch") {
        "iPod touch"
    } else if name.contains("nano") {
        "iPod nano"
    } else if name.contains("shuffle") {
        "iPod shuffle"
    } else if name.contains("mini") {
        "iPod mini"
    } else if name.contains("classic") || IPOD_GENERATION.is_match(&name) {
        "iPod classic / Original"
    } else {
        "Other"
    };
    Ok(series.to_string())
}
