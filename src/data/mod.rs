/// Data layer: core types, parsing, loading, and facet filtering.
///
/// Architecture:
/// ```text
///  Final data.csv / .json
///        │
///        ▼
///   ┌──────────────────┐
///   │ loader / parser  │  read + tokenize → Dataset
///   └──────────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ Dataset  │  header + Vec<Record>, read-only
///   └──────────┘
///        │   FacetSelection (from the side panel)
///        ▼
///   ┌──────────────────┐
///   │ facet / filter   │  per-facet predicates → surviving indices
///   └──────────────────┘
/// ```

pub mod extract;
pub mod facet;
pub mod filter;
pub mod loader;
pub mod model;
pub mod parser;
