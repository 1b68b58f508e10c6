//! Device categories and their static configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog::derive::{self, Derivation};
use crate::catalog::record::fields;
use crate::error::RingoError;

/// One device family with its own catalog and filter set.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    #[default]
    Iphone,
    Ipad,
    Airpods,
    AppleTv,
    AppleWatch,
    Homepod,
    Imac,
    Ipod,
    MacMini,
    MacPro,
    MacStudio,
    MacbookAir,
    MacbookPro,
    Macbook,
}

/// Static settings for a category.
#[derive(Debug, Clone, Copy)]
pub struct CategorySpec {
    /// Human-readable label
    pub label: &'static str,
    /// File stem of the raw catalog in a data directory
    pub source: &'static str,
    /// Filterable attributes, in display order
    pub filters: &'static [&'static str],
    /// Derived attributes, applied in order
    pub derivations: &'static [Derivation],
    /// Example input shown for model-number search
    pub placeholder_model: &'static str,
    /// Example input shown for name search
    pub placeholder_name: &'static str,
}

const CPU_AND_YEAR: &[&str] = &[fields::CPU, fields::RELEASE_YEAR];
const SERIES_AND_YEAR: &[&str] = &[fields::SERIES, fields::RELEASE_YEAR];

impl Category {
    pub const ALL: [Self; 14] = [
        Self::Iphone,
        Self::Ipad,
        Self::Airpods,
        Self::AppleTv,
        Self::AppleWatch,
        Self::Homepod,
        Self::Imac,
        Self::Ipod,
        Self::MacMini,
        Self::MacPro,
        Self::MacStudio,
        Self::MacbookAir,
        Self::MacbookPro,
        Self::Macbook,
    ];

    /// Identifier used on the command line and in config files.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Iphone => "iphone",
            Self::Ipad => "ipad",
            Self::Airpods => "airpods",
            Self::AppleTv => "apple_tv",
            Self::AppleWatch => "apple_watch",
            Self::Homepod => "homepod",
            Self::Imac => "imac",
            Self::Ipod => "ipod",
            Self::MacMini => "mac_mini",
            Self::MacPro => "mac_pro",
            Self::MacStudio => "mac_studio",
            Self::MacbookAir => "macbook_air",
            Self::MacbookPro => "macbook_pro",
            Self::Macbook => "macbook",
        }
    }

    #[must_use]
    pub const fn spec(self) -> CategorySpec {
        match self {
            Self::Iphone => CategorySpec {
                label: "iPhone",
                source: "iphone",
                filters: &[fields::CPU],
                derivations: &[],
                placeholder_model: "例: A1723",
                placeholder_name: "例: iPhone SE",
            },
            Self::Ipad => CategorySpec {
                label: "iPad",
                source: "ipad",
                filters: &[fields::SERIES, fields::CPU],
                derivations: derive::IPAD,
                placeholder_model: "例: A2925",
                placeholder_name: "例: iPad Pro",
            },
            Self::Airpods => CategorySpec {
                label: "AirPods",
                source: "airpods",
                filters: &[fields::SERIES],
                derivations: derive::AIRPODS,
                placeholder_model: "例: A2096",
                placeholder_name: "例: AirPods Pro",
            },
            Self::AppleTv => CategorySpec {
                label: "Apple TV",
                source: "apple_tv",
                filters: CPU_AND_YEAR,
                derivations: &[],
                placeholder_model: "例: A1625",
                placeholder_name: "例: Apple TV 4K",
            },
            Self::AppleWatch => CategorySpec {
                label: "Apple Watch",
                source: "apple_watch",
                filters: SERIES_AND_YEAR,
                derivations: derive::APPLE_WATCH,
                placeholder_model: "例: A2980",
                placeholder_name: "例: Series 9",
            },
            Self::Homepod => CategorySpec {
                label: "HomePod",
                source: "homepod",
                filters: &[fields::RELEASE_YEAR],
                derivations: &[],
                placeholder_model: "例: A2384",
                placeholder_name: "例: HomePod mini",
            },
            Self::Imac => CategorySpec {
                label: "iMac",
                source: "imac",
                filters: CPU_AND_YEAR,
                derivations: &[],
                placeholder_model: "例: A2438",
                placeholder_name: "例: iMac M3",
            },
            Self::Ipod => CategorySpec {
                label: "iPod",
                source: "ipod",
                filters: SERIES_AND_YEAR,
                derivations: derive::IPOD,
                placeholder_model: "例: A1238",
                placeholder_name: "例: iPod classic",
            },
            Self::MacMini => CategorySpec {
                label: "Mac mini",
                source: "mac_mini",
                filters: CPU_AND_YEAR,
                derivations: &[],
                placeholder_model: "例: A2686",
                placeholder_name: "例: Mac mini M2",
            },
            Self::MacPro => CategorySpec {
                label: "Mac Pro",
                source: "mac_pro",
                filters: CPU_AND_YEAR,
                derivations: &[],
                placeholder_model: "例: A2786",
                placeholder_name: "例: Mac Pro",
            },
            Self::MacStudio => CategorySpec {
                label: "Mac Studio",
                source: "mac_studio",
                filters: CPU_AND_YEAR,
                derivations: &[],
                placeholder_model: "例: A2901",
                placeholder_name: "例: Mac Studio",
            },
            Self::MacbookAir => CategorySpec {
                label: "MacBook Air",
                source: "macbook_air",
                filters: CPU_AND_YEAR,
                derivations: &[],
                placeholder_model: "例: A3113",
                placeholder_name: "例: MacBook Air M3",
            },
            Self::MacbookPro => CategorySpec {
                label: "MacBook Pro",
                source: "macbook_pro",
                filters: CPU_AND_YEAR,
                derivations: &[],
                placeholder_model: "例: A2992",
                placeholder_name: "例: MacBook Pro 14-inch",
            },
            Self::Macbook => CategorySpec {
                label: "MacBook",
                source: "macbook",
                filters: CPU_AND_YEAR,
                derivations: &[],
                placeholder_model: "例: A1534",
                placeholder_name: "例: MacBook (Retina)",
            },
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        self.spec().label
    }

    #[must_use]
    pub const fn filters(self) -> &'static [&'static str] {
        self.spec().filters
    }

    /// Whether `attribute` can be used as a filter for this category.
    #[must_use]
    pub fn is_filterable(self, attribute: &str) -> bool {
        self.filters().contains(&attribute)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Category {
    type Err = RingoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace(['-', ' '], "_");
        Self::ALL
            .into_iter()
            .find(|category| category.id() == wanted)
            .ok_or_else(|| RingoError::UnknownCategory(s.to_string()))
    }
}
