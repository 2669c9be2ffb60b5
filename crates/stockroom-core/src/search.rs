//! # Search Terms
//!
//! A keyword is compared against all six product columns. Text columns
//! use the keyword as typed; numeric columns use it only when it reads as
//! a number of the right kind.
//!
//! ## Match Clauses (logical OR)
//! ```text
//! ┌──────────────┬──────────────────────────────┬────────────────────────┐
//! │ Column       │ Comparison                   │ Keyword form used      │
//! ├──────────────┼──────────────────────────────┼────────────────────────┤
//! │ id           │ equal                        │ integer (or skipped)   │
//! │ name         │ contains, case-sensitive     │ text                   │
//! │ price        │ equal                        │ real (or skipped)      │
//! │ quantity     │ equal                        │ integer (or skipped)   │
//! │ units        │ equal                        │ text                   │
//! │ description  │ contains, case-sensitive     │ text                   │
//! └──────────────┴──────────────────────────────┴────────────────────────┘
//! ```
//!
//! A keyword like `"kg"` has no numeric form, so the id/price/quantity
//! clauses simply never match; it is not an error.

use crate::types::Product;

/// A keyword with its numeric readings resolved up front.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchTerm {
    /// The keyword exactly as entered.
    pub text: String,

    /// Whole-number reading, used for `id` and `quantity`.
    pub integer: Option<i64>,

    /// Real-number reading, used for `price`.
    pub real: Option<f64>,
}

impl SearchTerm {
    /// Resolves the numeric readings of a keyword.
    ///
    /// Numbers are read from the trimmed keyword. `"5"`, `"+5"` and `"5.0"`
    /// all give `integer = Some(5)`; `"5.5"` gives only a real reading.
    ///
    /// ## Example
    /// ```rust
    /// use stockroom_core::SearchTerm;
    ///
    /// let term = SearchTerm::parse("20");
    /// assert_eq!(term.integer, Some(20));
    /// assert_eq!(term.real, Some(20.0));
    ///
    /// let term = SearchTerm::parse("kg");
    /// assert_eq!(term.integer, None);
    /// assert_eq!(term.real, None);
    /// ```
    pub fn parse(keyword: &str) -> Self {
        let trimmed = keyword.trim();

        let real = trimmed.parse::<f64>().ok().filter(|v| v.is_finite());
        let integer = trimmed
            .parse::<i64>()
            .ok()
            .or_else(|| real.and_then(whole_number));

        SearchTerm {
            text: keyword.to_string(),
            integer,
            real,
        }
    }

    /// Reference predicate: does `product` satisfy at least one clause?
    ///
    /// The store's SQL must select exactly the rows for which this is true.
    pub fn matches(&self, product: &Product) -> bool {
        self.integer == Some(product.id)
            || product.name.contains(&self.text)
            || self.real == Some(product.price)
            || self.integer == Some(product.quantity)
            || product.units == self.text
            || product.description.contains(&self.text)
    }
}

/// Converts a real number to i64 when it has no fractional part and fits.
fn whole_number(value: f64) -> Option<i64> {
    // i64::MAX as f64 rounds up to 2^63, hence the strict upper bound
    if value.fract() == 0.0 && value >= i64::MIN as f64 && value < i64::MAX as f64 {
        Some(value as i64)
    } else {
        None
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i64, name: &str, price: f64, quantity: i64, units: &str, desc: &str) -> Product {
        Product {
            id,
            name: name.to_string(),
            price,
            quantity,
            units: units.to_string(),
            description: desc.to_string(),
        }
    }

    #[test]
    fn test_parse_numeric_forms() {
        assert_eq!(SearchTerm::parse("5").integer, Some(5));
        assert_eq!(SearchTerm::parse(" 5 ").integer, Some(5));
        assert_eq!(SearchTerm::parse("+5").integer, Some(5));
        assert_eq!(SearchTerm::parse("5.0").integer, Some(5));
        assert_eq!(SearchTerm::parse("-3").integer, Some(-3));
        assert_eq!(SearchTerm::parse("5.5").integer, None);
        assert_eq!(SearchTerm::parse("5.5").real, Some(5.5));
        assert_eq!(SearchTerm::parse("1e30").integer, None);
        assert_eq!(SearchTerm::parse("inf").real, None);
        assert_eq!(SearchTerm::parse("").real, None);
        assert_eq!(SearchTerm::parse("kg").integer, None);
    }

    #[test]
    fn test_parse_keeps_text_verbatim() {
        assert_eq!(SearchTerm::parse(" Rice ").text, " Rice ");
    }

    #[test]
    fn test_large_integers_are_exact() {
        let term = SearchTerm::parse("9007199254740993");
        assert_eq!(term.integer, Some(9_007_199_254_740_993));
    }

    #[test]
    fn test_matches_each_clause() {
        let rice = product(1, "Rice", 10.0, 5, "kg", "Staple food");

        assert!(SearchTerm::parse("1").matches(&rice)); // id
        assert!(SearchTerm::parse("ic").matches(&rice)); // name substring
        assert!(SearchTerm::parse("10").matches(&rice)); // price
        assert!(SearchTerm::parse("10.00").matches(&rice)); // price
        assert!(SearchTerm::parse("5").matches(&rice)); // quantity
        assert!(SearchTerm::parse("kg").matches(&rice)); // units
        assert!(SearchTerm::parse("food").matches(&rice)); // description

        assert!(!SearchTerm::parse("99").matches(&rice));
        assert!(!SearchTerm::parse("k").matches(&rice)); // units need equality
    }

    #[test]
    fn test_substring_is_case_sensitive() {
        let rice = product(1, "Rice", 10.0, 5, "kg", "Staple");

        assert!(SearchTerm::parse("Rice").matches(&rice));
        assert!(!SearchTerm::parse("rice").matches(&rice));
        assert!(!SearchTerm::parse("staple").matches(&rice));
    }

    #[test]
    fn test_empty_keyword_matches_everything() {
        let rice = product(1, "Rice", 10.0, 5, "kg", "");
        assert!(SearchTerm::parse("").matches(&rice));
    }
}
