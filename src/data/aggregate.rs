use std::collections::BTreeMap;

use super::model::AppCatalog;

// ---------------------------------------------------------------------------
// DashboardSummary – everything the central panel renders, derived per
// interaction from the catalog and the current filtered indices
// ---------------------------------------------------------------------------

/// Derived aggregates over the filtered rows. Rebuilt from scratch on every
/// filter change; the catalog itself is never touched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardSummary {
    /// Mean rating over the filtered rows; `None` when the set is empty.
    pub mean_rating: Option<f64>,
    /// Sum of installs over the filtered rows.
    pub total_installs: u64,
    /// Mean price over the paid subset of the filtered rows; `None` when
    /// there are no paid rows with a price. The UI renders this as `$0.00`.
    pub mean_paid_price: Option<f64>,
    /// Per-category install sums, descending. Ties keep alphabetical
    /// category order.
    pub category_installs: Vec<(String, u64)>,
    /// Per-category mean price over the paid subset, descending by price.
    /// `None` (not an empty chart) when the paid subset is empty.
    pub paid_price_by_category: Option<Vec<(String, f64)>>,
    /// Indices (into the catalog) of the top rows by rating, descending,
    /// at most [`TOP_RATED_LIMIT`].
    pub top_rated: Vec<usize>,
}

/// How many rows the "top rated" table shows.
pub const TOP_RATED_LIMIT: usize = 10;

/// Compute all dashboard aggregates for the given filtered row indices.
pub fn summarize(catalog: &AppCatalog, indices: &[usize]) -> DashboardSummary {
    let rows = || indices.iter().map(|&i| &catalog.records[i]);

    // -- Scalar KPIs --

    let mean_rating = mean(rows().map(|r| r.rating));
    let total_installs: u64 = rows().map(|r| r.installs).sum();
    let mean_paid_price = mean(rows().filter(|r| r.is_paid()).filter_map(|r| r.price));

    // -- Installs per category, descending --

    let mut install_sums: BTreeMap<&str, u64> = BTreeMap::new();
    for rec in rows() {
        *install_sums.entry(rec.category.as_str()).or_default() += rec.installs;
    }
    let mut category_installs: Vec<(String, u64)> = install_sums
        .into_iter()
        .map(|(cat, sum)| (cat.to_string(), sum))
        .collect();
    // Stable sort over the alphabetical BTreeMap order, so ties stay
    // alphabetical.
    category_installs.sort_by(|a, b| b.1.cmp(&a.1));

    // -- Mean paid price per category, descending --

    let mut price_sums: BTreeMap<&str, (f64, usize)> = BTreeMap::new();
    for rec in rows().filter(|r| r.is_paid()) {
        if let Some(price) = rec.price {
            let entry = price_sums.entry(rec.category.as_str()).or_insert((0.0, 0));
            entry.0 += price;
            entry.1 += 1;
        }
    }
    let paid_price_by_category = if price_sums.is_empty() {
        None
    } else {
        let mut view: Vec<(String, f64)> = price_sums
            .into_iter()
            .map(|(cat, (sum, n))| (cat.to_string(), sum / n as f64))
            .collect();
        view.sort_by(|a, b| b.1.total_cmp(&a.1));
        Some(view)
    };

    // -- Top rows by rating --

    let mut top_rated: Vec<usize> = indices.to_vec();
    top_rated.sort_by(|&a, &b| {
        catalog.records[b]
            .rating
            .total_cmp(&catalog.records[a].rating)
    });
    top_rated.truncate(TOP_RATED_LIMIT);

    DashboardSummary {
        mean_rating,
        total_installs,
        mean_paid_price,
        category_installs,
        paid_price_by_category,
        top_rated,
    }
}

/// Arithmetic mean; `None` over an empty iterator instead of NaN.
fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let mut sum = 0.0;
    let mut count = 0usize;
    for v in values {
        sum += v;
        count += 1;
    }
    (count > 0).then(|| sum / count as f64)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
