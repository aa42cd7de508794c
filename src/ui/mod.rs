/// Presentation layer: widgets that render [`crate::state::AppState`].
/// Nothing in here computes data; it only formats and draws the derived
/// views produced by the data layer.
pub mod charts;
pub mod panels;
pub mod table;

/// Format an integer with `,` thousands separators (`1234567` → `"1,234,567"`).
pub fn fmt_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Format an optional dollar amount; absent values render as a dash.
pub fn fmt_price(price: Option<f64>) -> String {
    match price {
        Some(p) => format!("${p:.2}"),
        None => "–".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_separators() {
        assert_eq!(fmt_thousands(0), "0");
        assert_eq!(fmt_thousands(999), "999");
        assert_eq!(fmt_thousands(1_000), "1,000");
        assert_eq!(fmt_thousands(10_000_000), "10,000,000");
    }

    #[test]
    fn price_formatting() {
        assert_eq!(fmt_price(Some(4.99)), "$4.99");
        assert_eq!(fmt_price(Some(0.0)), "$0.00");
        assert_eq!(fmt_price(None), "–");
    }
}
