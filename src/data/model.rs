use std::collections::{BTreeMap, BTreeSet};

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::config::{REVIEW_SEARCH_PARAM, REVIEW_SEARCH_URL};

// ---------------------------------------------------------------------------
// Well-known column names
// ---------------------------------------------------------------------------

/// Columns the catalogue is expected to carry. None of them are enforced.
pub mod columns {
    pub const BRAND: &str = "Brand";
    pub const MODEL: &str = "Model";
    pub const JOB_CATEGORY: &str = "JobCategory";
    pub const CPU: &str = "CPU";
    pub const RAM: &str = "RAM";
    pub const STORAGE: &str = "Storage";
    pub const PRICE_RANGE: &str = "PriceRange";
    pub const PRICE_ILS: &str = "Price_ILS_Estimated";
    pub const BATTERY: &str = "BatteryEstimate";
    pub const DISPLAY: &str = "Display";
    pub const URL: &str = "URL";

    pub const ALL: [&str; 11] = [
        BRAND,
        MODEL,
        JOB_CATEGORY,
        CPU,
        RAM,
        STORAGE,
        PRICE_RANGE,
        PRICE_ILS,
        BATTERY,
        DISPLAY,
        URL,
    ];
}

/// Everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )`, the set a browser's
/// `encodeURIComponent` leaves alone.
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

// ---------------------------------------------------------------------------
// Record – one row of the catalogue
// ---------------------------------------------------------------------------

/// One parsed row: column name → raw cell text.
///
/// Lookups of a column the row does not have yield `""`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: BTreeMap<String, String>,
}

impl Record {
    /// Raw value of `column`, or `""` if absent.
    pub fn get(&self, column: &str) -> &str {
        self.fields.get(column).map(String::as_str).unwrap_or("")
    }

    /// `Brand Model`, trimmed.
    pub fn title(&self) -> String {
        format!("{} {}", self.get(columns::BRAND), self.get(columns::MODEL))
            .trim()
            .to_string()
    }

    /// Purchase link, if the row has a non-empty URL.
    pub fn buy_url(&self) -> Option<&str> {
        Some(self.get(columns::URL)).filter(|u| !u.is_empty())
    }

    /// Video search for `"<title> review"`.
    pub fn review_url(&self) -> String {
        let query = format!("{} review", self.title());
        let encoded = utf8_percent_encode(&query, QUERY_COMPONENT);
        format!("{REVIEW_SEARCH_URL}?{REVIEW_SEARCH_PARAM}={encoded}")
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Record {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Dataset – the loaded catalogue
// ---------------------------------------------------------------------------

/// The full catalogue: header order plus rows in file order.
///
/// Built once per load and only ever read afterwards.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    /// Column names in header order.
    pub columns: Vec<String>,
    /// All records, in file order.
    pub records: Vec<Record>,
}

impl Dataset {
    pub fn new(columns: Vec<String>, records: Vec<Record>) -> Self {
        Dataset { columns, records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sorted distinct non-empty values of a column.
    pub fn unique_values(&self, column: &str) -> BTreeSet<String> {
        self.records
            .iter()
            .map(|r| r.get(column))
            .filter(|v| !v.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Expected columns missing from the header.
    pub fn missing_columns(&self) -> Vec<&'static str> {
        columns::ALL
            .into_iter()
            .filter(|c| !self.columns.iter().any(|h| h == c))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn laptop(brand: &str, model: &str, url: &str) -> Record {
        [
            (columns::BRAND, brand),
            (columns::MODEL, model),
            (columns::URL, url),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn missing_column_reads_empty() {
        let r = laptop("Dell", "XPS 13", "");
        assert_eq!(r.get(columns::CPU), "");
        assert_eq!(r.get("nonsense"), "");
    }

    #[test]
    fn title_is_trimmed() {
        assert_eq!(laptop("Dell", "XPS 13", "").title(), "Dell XPS 13");
        assert_eq!(laptop("", "XPS 13", "").title(), "XPS 13");
        assert_eq!(laptop("Dell", "", "").title(), "Dell");
        assert_eq!(laptop("", "", "").title(), "");
    }

    #[test]
    fn buy_url_omitted_when_empty() {
        assert_eq!(laptop("A", "B", "").buy_url(), None);
        assert_eq!(
            laptop("A", "B", "https://shop.example/a").buy_url(),
            Some("https://shop.example/a")
        );
    }

    #[test]
    fn review_url_encodes_title() {
        let url = laptop("Asus", "ROG & Co", "").review_url();
        assert_eq!(
            url,
            "https://www.youtube.com/results?search_query=Asus%20ROG%20%26%20Co%20review"
        );
    }

    #[test]
    fn review_url_keeps_component_safe_marks() {
        let url = laptop("Lenovo", "Yoga (2024)! ~Pro*'s_x-1.5", "").review_url();
        assert_eq!(
            url,
            "https://www.youtube.com/results?search_query=\
             Lenovo%20Yoga%20(2024)!%20~Pro*'s_x-1.5%20review"
        );

        let url = laptop("Asus", "Zenbook 14\" ÖLED/+", "").review_url();
        assert_eq!(
            url,
            "https://www.youtube.com/results?search_query=\
             Asus%20Zenbook%2014%22%20%C3%96LED%2F%2B%20review"
        );
    }

    #[test]
    fn unique_values_skip_empty() {
        let ds = Dataset::new(
            vec![columns::BRAND.into()],
            vec![
                laptop("Dell", "", ""),
                laptop("", "", ""),
                laptop("Acer", "", ""),
                laptop("Dell", "", ""),
            ],
        );
        let vals: Vec<String> = ds.unique_values(columns::BRAND).into_iter().collect();
        assert_eq!(vals, vec!["Acer".to_string(), "Dell".to_string()]);
    }

    #[test]
    fn missing_columns_lists_absent_headers() {
        let ds = Dataset::new(
            columns::ALL.iter().filter(|c| **c != columns::URL).map(|c| c.to_string()).collect(),
            Vec::new(),
        );
        assert_eq!(ds.missing_columns(), vec![columns::URL]);
    }
}
