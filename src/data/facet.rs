use std::collections::{BTreeMap, BTreeSet};

use super::extract::{extract_decimal, extract_number, option_value};
use super::model::{columns, Dataset, Record};

// ---------------------------------------------------------------------------
// Facet – one filter dimension
// ---------------------------------------------------------------------------

/// The filter dimensions, declared in the order they are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Facet {
    Usage,
    Cpu,
    Ram,
    Storage,
    PriceRange,
    Price,
    Battery,
    Display,
}

/// Selected option tokens per facet. An absent or empty set means the facet
/// imposes no constraint.
pub type FacetSelection = BTreeMap<Facet, BTreeSet<String>>;

/// Price option meaning "no minimum"; its presence disables the price facet.
pub const ANY_PRICE: &str = "0";

impl Facet {
    pub const ALL: [Facet; 8] = [
        Facet::Usage,
        Facet::Cpu,
        Facet::Ram,
        Facet::Storage,
        Facet::PriceRange,
        Facet::Price,
        Facet::Battery,
        Facet::Display,
    ];

    /// Name used by checkbox groups (`usage`, `priceRange`, ...).
    pub fn key(self) -> &'static str {
        match self {
            Facet::Usage => "usage",
            Facet::Cpu => "cpu",
            Facet::Ram => "ram",
            Facet::Storage => "storage",
            Facet::PriceRange => "priceRange",
            Facet::Price => "price",
            Facet::Battery => "battery",
            Facet::Display => "display",
        }
    }

    pub fn from_key(key: &str) -> Option<Facet> {
        Facet::ALL.into_iter().find(|f| f.key() == key)
    }

    /// Record column the facet reads.
    pub fn column(self) -> &'static str {
        match self {
            Facet::Usage => columns::JOB_CATEGORY,
            Facet::Cpu => columns::CPU,
            Facet::Ram => columns::RAM,
            Facet::Storage => columns::STORAGE,
            Facet::PriceRange => columns::PRICE_RANGE,
            Facet::Price => columns::PRICE_ILS,
            Facet::Battery => columns::BATTERY,
            Facet::Display => columns::DISPLAY,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Facet::Usage => "Usage",
            Facet::Cpu => "Processor",
            Facet::Ram => "RAM",
            Facet::Storage => "Storage",
            Facet::PriceRange => "Price range",
            Facet::Price => "Price (ILS)",
            Facet::Battery => "Battery life",
            Facet::Display => "Screen size",
        }
    }

    /// Whether this selection constrains anything at all.
    pub fn is_active(self, selected: &BTreeSet<String>) -> bool {
        match self {
            Facet::Price => !selected.is_empty() && !selected.contains(ANY_PRICE),
            _ => !selected.is_empty(),
        }
    }

    /// True if `record` satisfies at least one of the `selected` options.
    pub fn matches(self, record: &Record, selected: &BTreeSet<String>) -> bool {
        let field = record.get(self.column());
        match self {
            Facet::Usage => {
                let cat = field.to_lowercase();
                selected.iter().any(|v| cat.contains(usage_token(v).as_str()))
            }
            Facet::Cpu => {
                let cpu = field.to_lowercase();
                selected.iter().any(|v| cpu.contains(v.to_lowercase().as_str()))
            }
            Facet::Ram | Facet::Storage | Facet::Price => {
                let amount = extract_number(field) as f64;
                selected.iter().any(|v| amount >= option_value(v))
            }
            Facet::PriceRange => {
                let range = field.to_lowercase();
                let range = range.trim();
                selected.iter().any(|v| range.contains(v.to_lowercase().as_str()))
            }
            Facet::Battery => {
                let hours = extract_number(field);
                selected
                    .iter()
                    .filter_map(|v| BatteryBucket::from_token(v))
                    .any(|b| b.contains(hours))
            }
            Facet::Display => {
                let size = extract_decimal(field);
                selected
                    .iter()
                    .any(|v| DisplayBucket::from_min(option_value(v)).contains(size))
            }
        }
    }
}

/// Usage options read like `Gaming (High-end)`; only the part before the
/// first `(` is matched, lowercased and trimmed.
fn usage_token(v: &str) -> String {
    let head = v.split('(').next().unwrap_or("");
    head.to_lowercase().trim().to_string()
}

// ---------------------------------------------------------------------------
// Buckets
// ---------------------------------------------------------------------------

/// Battery life classes. `Long` and `Excellent` overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatteryBucket {
    Short,
    Medium,
    Long,
    Excellent,
}

impl BatteryBucket {
    /// Unknown tokens yield `None` and never match.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "short" => Some(BatteryBucket::Short),
            "medium" => Some(BatteryBucket::Medium),
            "long" => Some(BatteryBucket::Long),
            "excellent" => Some(BatteryBucket::Excellent),
            _ => None,
        }
    }

    pub fn contains(self, hours: u64) -> bool {
        match self {
            BatteryBucket::Short => hours > 0 && hours < 6,
            BatteryBucket::Medium => (6..10).contains(&hours),
            BatteryBucket::Long => hours >= 10,
            BatteryBucket::Excellent => hours >= 12,
        }
    }
}

/// Screen size classes keyed by their lower bound; any bound other than
/// 12, 14 or 15 means 17" and up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayBucket {
    Compact,
    Medium,
    Standard,
    Large,
}

impl DisplayBucket {
    pub fn from_min(min: f64) -> Self {
        if min == 12.0 {
            DisplayBucket::Compact
        } else if min == 14.0 {
            DisplayBucket::Medium
        } else if min == 15.0 {
            DisplayBucket::Standard
        } else {
            DisplayBucket::Large
        }
    }

    pub fn contains(self, size: f64) -> bool {
        match self {
            DisplayBucket::Compact => (12.0..14.0).contains(&size),
            DisplayBucket::Medium => (14.0..15.0).contains(&size),
            DisplayBucket::Standard => (15.0..17.0).contains(&size),
            DisplayBucket::Large => size >= 17.0,
        }
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Build a selection from `(facet key, option)` pairs; unknown keys are
/// dropped.
pub fn selection_from_pairs<'a, I>(pairs: I) -> FacetSelection
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut selection = FacetSelection::new();
    for (key, value) in pairs {
        match Facet::from_key(key) {
            Some(facet) => {
                selection.entry(facet).or_default().insert(value.to_string());
            }
            None => log::debug!("ignoring unknown facet {key:?}"),
        }
    }
    selection
}

/// How many records in the whole dataset a single option would keep on its
/// own. The price sentinel counts everything.
pub fn option_match_count(dataset: &Dataset, facet: Facet, option: &str) -> usize {
    let selected = BTreeSet::from([option.to_string()]);
    if !facet.is_active(&selected) {
        return dataset.len();
    }
    dataset
        .records
        .iter()
        .filter(|r| facet.matches(r, &selected))
        .count()
}
