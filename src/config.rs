//! Fixed application settings: data location, link templates and the facet
//! option catalogue shown in the side panel.

use crate::data::facet::Facet;

/// Dataset loaded at startup, relative to the working directory.
pub const DEFAULT_DATA_FILE: &str = "Final data.csv";

/// Search page used for the "Reviews" link; the query goes in `search_query`.
pub const REVIEW_SEARCH_URL: &str = "https://www.youtube.com/results";
pub const REVIEW_SEARCH_PARAM: &str = "search_query";

pub const WINDOW_SIZE: [f32; 2] = [1200.0, 800.0];
pub const MIN_WINDOW_SIZE: [f32; 2] = [600.0, 400.0];
pub const SIDE_PANEL_WIDTH: f32 = 240.0;

/// How often the UI polls a running background load.
pub const LOAD_POLL_MS: u64 = 50;

/// Label under which the result count is shown.
pub fn count_label(n: usize) -> String {
    format!("{n} laptop(s) found")
}

/// Checkbox options offered for each facet as `(value, label)` pairs.
///
/// Values are the tokens handed to the filter engine; labels are display only.
pub fn facet_options(facet: Facet) -> &'static [(&'static str, &'static str)] {
    match facet {
        Facet::Usage => &[
            ("Gaming (High-end)", "Gaming"),
            ("Programming (Developers)", "Programming"),
            ("Design (Graphic / Video)", "Design"),
            ("Office", "Office"),
            ("Student", "Student"),
            ("Business", "Business"),
        ],
        Facet::Cpu => &[
            ("i5", "Intel Core i5"),
            ("i7", "Intel Core i7"),
            ("i9", "Intel Core i9"),
            ("Ryzen 5", "AMD Ryzen 5"),
            ("Ryzen 7", "AMD Ryzen 7"),
            ("Ryzen 9", "AMD Ryzen 9"),
            ("M1", "Apple M1"),
            ("M2", "Apple M2"),
            ("M3", "Apple M3"),
        ],
        Facet::Ram => &[("8", "8 GB+"), ("16", "16 GB+"), ("32", "32 GB+")],
        Facet::Storage => &[("256", "256 GB+"), ("512", "512 GB+"), ("1024", "1 TB+")],
        Facet::PriceRange => &[
            ("Budget", "Budget"),
            ("Mid", "Mid-range"),
            ("High", "High-end"),
            ("Premium", "Premium"),
        ],
        Facet::Price => &[
            ("0", "Any price"),
            ("3000", "3,000 ILS+"),
            ("5000", "5,000 ILS+"),
            ("8000", "8,000 ILS+"),
        ],
        Facet::Battery => &[
            ("short", "Under 6 h"),
            ("medium", "6 – 10 h"),
            ("long", "10 h+"),
            ("excellent", "12 h+"),
        ],
        Facet::Display => &[
            ("12", "12\" – 13.9\""),
            ("14", "14\" – 14.9\""),
            ("15", "15\" – 16.9\""),
            ("17", "17\"+"),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_facet_has_options() {
        for facet in Facet::ALL {
            assert!(!facet_options(facet).is_empty(), "{facet:?}");
        }
    }

    #[test]
    fn count_label_format() {
        assert_eq!(count_label(0), "0 laptop(s) found");
        assert_eq!(count_label(12), "12 laptop(s) found");
    }
}
