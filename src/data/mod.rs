/// Data layer: core types, loading/cleaning, filtering, and aggregation.
///
/// Architecture:
/// ```text
///  googleplaystore.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse + clean rows → AppCatalog
///   └──────────┘
///        │
///        ▼
///   ┌────────────┐
///   │ AppCatalog  │  Vec<AppRecord>, filter-option lists (read-only)
///   └────────────┘
///        │
///        ▼
///   ┌──────────┐      ┌─────────────┐
///   │  filter   │ ───▶ │  aggregate   │  KPIs, grouped views, top-N
///   └──────────┘      └─────────────┘
/// ```

pub mod aggregate;
pub mod clean;
pub mod filter;
pub mod loader;
pub mod model;
