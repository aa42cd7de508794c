use std::io::Read;
use std::path::Path;

use thiserror::Error;

use super::clean::{clean_installs, clean_price, normalize_header, normalize_type, parse_f64, parse_i64};
use super::model::{AppCatalog, AppRecord};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Fatal load failures. Per-cell parse problems are not errors — they make
/// the field absent and may get the row dropped — but an unreadable file or
/// an unrecognizable header aborts the whole load.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("opening {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("reading CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("CSV is missing required column '{0}'")]
    MissingColumn(&'static str),
}

// ---------------------------------------------------------------------------
// Column layout
// ---------------------------------------------------------------------------

/// Indices of the columns the dashboard uses, resolved from the normalized
/// header row. `app` and `reviews` are optional; the rest are required.
struct ColumnLayout {
    app: Option<usize>,
    category: usize,
    rating: usize,
    reviews: Option<usize>,
    installs: usize,
    app_type: usize,
    price: usize,
}

impl ColumnLayout {
    fn from_headers(headers: &csv::StringRecord) -> Result<Self, LoadError> {
        let normalized: Vec<String> = headers.iter().map(normalize_header).collect();
        let find = |name: &str| normalized.iter().position(|h| h == name);
        let require = |name: &'static str| find(name).ok_or(LoadError::MissingColumn(name));

        Ok(ColumnLayout {
            app: find("app"),
            category: require("category")?,
            rating: require("rating")?,
            reviews: find("reviews"),
            installs: require("installs")?,
            app_type: require("type")?,
            price: require("price")?,
        })
    }
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load and clean a Play Store CSV export from a file path.
pub fn load_csv(path: &Path) -> Result<AppCatalog, LoadError> {
    let file = std::fs::File::open(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let catalog = load_from_reader(file)?;
    log::info!(
        "Loaded {} apps from {} ({} malformed rows dropped)",
        catalog.len(),
        path.display(),
        catalog.rows_dropped
    );
    Ok(catalog)
}

/// Load and clean a Play Store CSV export from any reader.
///
/// Cleaning per field:
/// * `rating`  – parse-or-absent
/// * `reviews` – parse-or-absent (never required)
/// * `installs` – strip `+`/`,`, parse-or-absent
/// * `type`    – missing becomes `"nan"`, then trim + capitalize
/// * `price`   – strip `$`, substitute `free`/`everyone` → `0`, parse-or-absent
///
/// Rows missing `rating`, `installs`, or a non-empty `category` after
/// cleaning are dropped (counted, not kept).
pub fn load_from_reader<R: Read>(reader: R) -> Result<AppCatalog, LoadError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(reader);
    let layout = ColumnLayout::from_headers(csv_reader.headers()?)?;

    let mut records = Vec::new();
    let mut rows_dropped = 0usize;

    for result in csv_reader.records() {
        let row = result?;
        let cell = |idx: usize| row.get(idx).unwrap_or("");

        let category = cell(layout.category).to_string();
        let rating = parse_f64(cell(layout.rating));
        let installs = clean_installs(cell(layout.installs));

        // The validity invariant: no rating, no installs, or no category
        // means the row is noise and goes away entirely.
        let (Some(rating), Some(installs)) = (rating, installs) else {
            rows_dropped += 1;
            continue;
        };
        if category.is_empty() {
            rows_dropped += 1;
            continue;
        }

        records.push(AppRecord {
            app: layout.app.map(cell).unwrap_or("").to_string(),
            category,
            rating,
            reviews: layout.reviews.and_then(|idx| parse_i64(cell(idx))),
            installs,
            app_type: normalize_type(cell(layout.app_type)),
            price: clean_price(cell(layout.price)),
        });
    }

    Ok(AppCatalog::from_records(records, rows_dropped))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "App,Category,Rating,Reviews,Size,Installs,Type,Price,Content Rating\n";

    fn load(csv_text: &str) -> AppCatalog {
        load_from_reader(csv_text.as_bytes()).expect("load should succeed")
    }

    #[test]
    fn loads_and_cleans_well_formed_rows() {
        let catalog = load(&format!(
            "{HEADER}\
             Chess,GAME,4.5,1200,12M,\"10,000+\",free,0,Everyone\n\
             Ledger,FINANCE,3.9,80,5M,500+,PAID,$4.99,Everyone\n"
        ));

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.rows_dropped, 0);

        let chess = &catalog.records[0];
        assert_eq!(chess.app, "Chess");
        assert_eq!(chess.category, "GAME");
        assert_eq!(chess.rating, 4.5);
        assert_eq!(chess.reviews, Some(1200));
        assert_eq!(chess.installs, 10_000);
        assert_eq!(chess.app_type, "Free");
        assert_eq!(chess.price, Some(0.0));

        let ledger = &catalog.records[1];
        assert_eq!(ledger.installs, 500);
        assert_eq!(ledger.app_type, "Paid");
        assert_eq!(ledger.price, Some(4.99));
        assert!(ledger.is_paid());
    }

    #[test]
    fn drops_rows_missing_rating_installs_or_category() {
        let catalog = load(&format!(
            "{HEADER}\
             NoRating,GAME,,10,1M,100+,Free,0,Everyone\n\
             NoInstalls,GAME,4.0,10,1M,Free,Free,0,Everyone\n\
             NoCategory,,4.0,10,1M,100+,Free,0,Everyone\n\
             Kept,TOOLS,4.0,10,1M,100+,Free,0,Everyone\n"
        ));

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.rows_dropped, 3);
        assert_eq!(catalog.records[0].app, "Kept");
    }

    #[test]
    fn cleaned_records_satisfy_the_validity_invariant() {
        let catalog = load(&format!(
            "{HEADER}\
             A,GAME,4.5,x,1M,\"1,000+\",free,Free,Everyone\n\
             B,TOOLS,bad,10,1M,100+,Paid,$1.00,Everyone\n\
             C,TOOLS,3.0,10,1M,\"2,500+\",,not a price,Everyone\n"
        ));

        for rec in &catalog.records {
            assert!(rec.rating.is_finite());
            assert!(!rec.category.is_empty());
        }
        // Row B had an unparsable rating and is gone.
        assert_eq!(catalog.len(), 2);
        // Row A's unparsable reviews and row C's unparsable price stay absent
        // without dropping the rows.
        assert_eq!(catalog.records[0].reviews, None);
        assert_eq!(catalog.records[1].price, None);
        // Row C's missing type survives as the distinct value "Nan".
        assert_eq!(catalog.records[1].app_type, "Nan");
    }

    #[test]
    fn filter_option_lists_are_sorted_and_distinct() {
        let catalog = load(&format!(
            "{HEADER}\
             A,TOOLS,4.0,1,1M,1+,Free,0,Everyone\n\
             B,GAME,4.0,1,1M,1+,Paid,$1,Everyone\n\
             C,GAME,4.0,1,1M,1+,free,0,Everyone\n"
        ));

        assert_eq!(catalog.categories, vec!["GAME", "TOOLS"]);
        assert_eq!(catalog.types, vec!["Free", "Paid"]);
    }

    #[test]
    fn case_and_space_variant_headers_are_tolerated() {
        let catalog = load(
            "APP,CATEGORY,RATING,REVIEWS,INSTALLS,TYPE,PRICE\n\
             A,GAME,4.0,1,100+,Free,0\n",
        );
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn missing_required_column_is_fatal() {
        let err = load_from_reader("App,Category,Reviews,Installs,Type,Price\nA,GAME,1,1+,Free,0\n".as_bytes())
            .expect_err("missing rating column must fail");
        assert!(matches!(err, LoadError::MissingColumn("rating")));
    }

    #[test]
    fn missing_optional_columns_are_tolerated() {
        let catalog = load(
            "Category,Rating,Installs,Type,Price\n\
             GAME,4.0,100+,Free,0\n",
        );
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.records[0].app, "");
        assert_eq!(catalog.records[0].reviews, None);
    }
}
