use std::collections::BTreeSet;

// ---------------------------------------------------------------------------
// AppRecord – one cleaned row of the Play Store export
// ---------------------------------------------------------------------------

/// A single cleaned application record.
///
/// The loader guarantees `rating` and `installs` are real values and
/// `category` is non-empty; rows where any of those failed to parse are
/// dropped before a record is ever constructed. `reviews` and `price` stay
/// optional all the way down.
#[derive(Debug, Clone, PartialEq)]
pub struct AppRecord {
    /// Application name, verbatim from the source.
    pub app: String,
    /// Category, verbatim from the source.
    pub category: String,
    /// Star rating (typically 1.0–5.0).
    pub rating: f64,
    /// Review count; absent when the source cell was unparsable.
    pub reviews: Option<i64>,
    /// Install count with `+`/`,` decoration removed.
    pub installs: u64,
    /// Normalized app type (`Free`, `Paid`, or `Nan` for a missing cell).
    pub app_type: String,
    /// Price in dollars; absent when the source cell was unparsable.
    pub price: Option<f64>,
}

impl AppRecord {
    /// Whether this record is a paid app (trim/lowercase comparison, matching
    /// how the aggregation layer selects the paid subset).
    pub fn is_paid(&self) -> bool {
        self.app_type.trim().eq_ignore_ascii_case("paid")
    }
}

// ---------------------------------------------------------------------------
// AppCatalog – the complete loaded dataset (the working set)
// ---------------------------------------------------------------------------

/// The full cleaned dataset with pre-computed filter-option lists.
///
/// Built once per load and treated as read-only afterwards: every interaction
/// derives fresh views from it, nothing ever writes back.
#[derive(Debug, Clone, Default)]
pub struct AppCatalog {
    /// All cleaned records, in source order.
    pub records: Vec<AppRecord>,
    /// Sorted distinct category values (filter options).
    pub categories: Vec<String>,
    /// Sorted distinct normalized type values (filter options).
    pub types: Vec<String>,
    /// How many source rows were dropped for missing rating/installs/category.
    pub rows_dropped: usize,
}

impl AppCatalog {
    /// Build the catalog and its filter-option lists from cleaned records.
    pub fn from_records(records: Vec<AppRecord>, rows_dropped: usize) -> Self {
        let mut categories: BTreeSet<String> = BTreeSet::new();
        let mut types: BTreeSet<String> = BTreeSet::new();

        for rec in &records {
            categories.insert(rec.category.clone());
            types.insert(rec.app_type.clone());
        }

        AppCatalog {
            records,
            categories: categories.into_iter().collect(),
            types: types.into_iter().collect(),
            rows_dropped,
        }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
