// ---------------------------------------------------------------------------
// Field-level cleaning for the Play Store export
// ---------------------------------------------------------------------------
//
// The source CSV is messy in well-known ways: install counts carry `+` and
// thousands separators, prices carry `$` and textual placeholders, the type
// column mixes case and whitespace. Each routine here cleans exactly one
// field; parse failures yield `None`, never a default and never an error.

/// Normalize a header name: lowercase, internal spaces to underscores.
/// `"Content Rating"` → `"content_rating"`.
pub fn normalize_header(name: &str) -> String {
    name.to_lowercase().replace(' ', "_")
}

/// Parse a cell as `f64`. Unparsable or non-finite input (including the
/// literal string "nan") is absent.
pub fn parse_f64(cell: &str) -> Option<f64> {
    cell.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse a cell as `i64`. Unparsable input is absent.
pub fn parse_i64(cell: &str) -> Option<i64> {
    cell.trim().parse::<i64>().ok()
}

/// Clean an install-count cell: remove every `+` and `,`, then parse the
/// remainder as a non-negative integer.
///
/// `"10,000,000+"` → `Some(10000000)`, `"1+"` → `Some(1)`,
/// `"Free"` (malformed) → `None`, `""` → `None`.
pub fn clean_installs(cell: &str) -> Option<u64> {
    let stripped: String = cell
        .trim()
        .chars()
        .filter(|c| *c != '+' && *c != ',')
        .collect();
    stripped.parse::<u64>().ok()
}

/// Normalize an app-type cell.
///
/// A missing (empty/whitespace-only) cell becomes the literal string `"nan"`
/// first, mirroring a stringified missing value — so missing types surface as
/// the distinct filterable value `"Nan"` rather than vanishing. The value is
/// then trimmed and capitalized: first character uppercased, the rest
/// lowercased (`free`, `FREE`, ` Free ` all become `Free`).
///
/// Idempotent: normalizing an already-normalized value is a no-op.
pub fn normalize_type(cell: &str) -> String {
    let trimmed = cell.trim();
    let value = if trimmed.is_empty() { "nan" } else { trimmed };
    capitalize(value)
}

/// First character uppercased, everything after it lowercased.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

/// Clean a price cell. Order matters:
/// 1. every `$` is removed,
/// 2. every case-insensitive occurrence of the substring `free` becomes `0`,
/// 3. every case-insensitive occurrence of the substring `everyone` becomes `0`,
/// 4. the remainder is parsed as a decimal; failure → absent.
///
/// Steps 2–3 are substring substitutions, not whole-value comparisons: that is
/// how the source data was historically cleaned and downstream numbers depend
/// on it. A cell like `"not free"` becomes `"not 0"` and therefore parses to
/// absent rather than zero.
pub fn clean_price(cell: &str) -> Option<f64> {
    let no_dollar: String = cell.chars().filter(|c| *c != '$').collect();
    let substituted = replace_ignore_case(&replace_ignore_case(&no_dollar, "free", "0"), "everyone", "0");
    parse_f64(&substituted)
}

/// Replace every ASCII-case-insensitive occurrence of `pattern` in
/// `haystack`. ASCII lowering keeps byte offsets identical between the
/// search copy and the original, so slicing stays on char boundaries.
fn replace_ignore_case(haystack: &str, pattern: &str, replacement: &str) -> String {
    debug_assert!(!pattern.is_empty());
    let lower_haystack = haystack.to_ascii_lowercase();
    let lower_pattern = pattern.to_ascii_lowercase();

    let mut out = String::with_capacity(haystack.len());
    let mut pos = 0;
    while let Some(found) = lower_haystack[pos..].find(&lower_pattern) {
        let start = pos + found;
        out.push_str(&haystack[pos..start]);
        out.push_str(replacement);
        pos = start + lower_pattern.len();
    }
    out.push_str(&haystack[pos..]);
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_normalization() {
        assert_eq!(normalize_header("Content Rating"), "content_rating");
        assert_eq!(normalize_header("App"), "app");
        assert_eq!(normalize_header("Last Updated"), "last_updated");
    }

    #[test]
    fn f64_parsing_rejects_garbage_and_nan() {
        assert_eq!(parse_f64("4.5"), Some(4.5));
        assert_eq!(parse_f64(" 4.5 "), Some(4.5));
        assert_eq!(parse_f64("abc"), None);
        assert_eq!(parse_f64(""), None);
        // A literal "nan" cell parses as f64::NAN in Rust; it must still
        // count as absent, not as a number.
        assert_eq!(parse_f64("nan"), None);
        assert_eq!(parse_f64("inf"), None);
    }

    #[test]
    fn installs_cleaning() {
        assert_eq!(clean_installs("10,000,000+"), Some(10_000_000));
        assert_eq!(clean_installs("1+"), Some(1));
        assert_eq!(clean_installs("0"), Some(0));
        assert_eq!(clean_installs("Free"), None);
        assert_eq!(clean_installs(""), None);
        assert_eq!(clean_installs("+,"), None);
    }

    #[test]
    fn type_normalization() {
        assert_eq!(normalize_type("free"), "Free");
        assert_eq!(normalize_type("FREE"), "Free");
        assert_eq!(normalize_type(" Free "), "Free");
        assert_eq!(normalize_type("paid"), "Paid");
        // Missing cell becomes the distinct value "Nan", not absent.
        assert_eq!(normalize_type(""), "Nan");
        assert_eq!(normalize_type("   "), "Nan");
    }

    #[test]
    fn type_normalization_is_idempotent() {
        for raw in ["free", "FREE", " Paid ", "", "nan", "0"] {
            let once = normalize_type(raw);
            assert_eq!(normalize_type(&once), once, "raw = {raw:?}");
        }
    }

    #[test]
    fn price_cleaning() {
        assert_eq!(clean_price("$4.99"), Some(4.99));
        assert_eq!(clean_price("0"), Some(0.0));
        assert_eq!(clean_price("Free"), Some(0.0));
        assert_eq!(clean_price("FREE"), Some(0.0));
        assert_eq!(clean_price("Everyone"), Some(0.0));
        assert_eq!(clean_price(""), None);
        assert_eq!(clean_price("gibberish"), None);
    }

    #[test]
    fn price_substitution_is_substring_based() {
        // The "free" substitution happens inside larger strings too; the
        // leftover text then fails the numeric parse, so the cell is absent.
        assert_eq!(clean_price("not free"), None);
        // Two adjacent substitutions still parse ("FreeFree" → "00").
        assert_eq!(clean_price("FreeFree"), Some(0.0));
    }
}
