//! # Validation Module
//!
//! Turns the five raw strings of an add/update form into a [`NewProduct`].
//!
//! ## Validation Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      validate_product()                                 │
//! │                                                                         │
//! │  name ──► strip ' ' ──► empty or non-letter? ──► InvalidName           │
//! │   │                                                                     │
//! │   ▼                                                                     │
//! │  price ──► parse f64 (finite) ──► failed? ──► InvalidNumeric(price)    │
//! │   │                                                                     │
//! │   ▼                                                                     │
//! │  quantity ──► strip ',' ──► parse i64 ──► failed? ──► InvalidNumeric   │
//! │   │                                                                     │
//! │   ▼                                                                     │
//! │  units, description ──► taken as-is                                    │
//! │   │                                                                     │
//! │   ▼                                                                     │
//! │  Ok(NewProduct)                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A name error is always reported before a numeric error. Sign is never
//! checked: negative prices and quantities pass.
//!
//! ## Usage
//! ```rust
//! use stockroom_core::validation::{parse_quantity, validate_name};
//!
//! assert!(validate_name("Brown Sugar").is_ok());
//! assert_eq!(parse_quantity("12,000").unwrap(), 12_000);
//! ```

use unicode_general_category::{get_general_category, GeneralCategory};

use crate::error::{ValidationError, ValidationResult};
use crate::types::NewProduct;

// =============================================================================
// Record Validator
// =============================================================================

/// Validates a full product form.
///
/// ## Rules
/// - `name`: see [`validate_name`]; stored exactly as given
/// - `price`: see [`parse_price`]
/// - `quantity`: see [`parse_quantity`]
/// - `units`, `description`: accepted unchanged (both may be empty)
///
/// ## Example
/// ```rust
/// use stockroom_core::validation::validate_product;
/// use stockroom_core::ValidationError;
///
/// let p = validate_product("Rice", "10", "5", "kg", "Staple").unwrap();
/// assert_eq!(p.price, 10.0);
///
/// // Name is checked first even if price is also bad
/// let err = validate_product("R1ce", "ten", "5", "kg", "").unwrap_err();
/// assert!(matches!(err, ValidationError::InvalidName { .. }));
/// ```
pub fn validate_product(
    name: &str,
    price: &str,
    quantity: &str,
    units: &str,
    description: &str,
) -> ValidationResult<NewProduct> {
    validate_name(name)?;
    let price = parse_price(price)?;
    let quantity = parse_quantity(quantity)?;

    Ok(NewProduct {
        name: name.to_string(),
        price,
        quantity,
        units: units.to_string(),
        description: description.to_string(),
    })
}

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Space characters are ignored
/// - What remains must be non-empty
/// - What remains must be letters only: Unicode categories Lu, Ll, Lt,
///   Lm and Lo
///
/// Letter-numbers such as `Ⅻ` and combining marks are not letters. Tabs
/// and other whitespace are not spaces and fail the letter check.
pub fn validate_name(name: &str) -> ValidationResult<()> {
    let mut letters = name.chars().filter(|c| *c != ' ').peekable();

    if letters.peek().is_none() {
        return Err(ValidationError::invalid_name(name));
    }

    if !letters.all(is_letter) {
        return Err(ValidationError::invalid_name(name));
    }

    Ok(())
}

fn is_letter(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

/// Parses a price.
///
/// Surrounding whitespace is ignored. `inf` and `NaN` are rejected: the
/// column cannot hold them.
pub fn parse_price(price: &str) -> ValidationResult<f64> {
    match price.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ValidationError::invalid_numeric("price", price)),
    }
}

/// Parses a quantity after removing thousands separators.
///
/// ## Example
/// ```rust
/// use stockroom_core::validation::parse_quantity;
///
/// assert_eq!(parse_quantity("1,000").unwrap(), 1000);
/// assert_eq!(parse_quantity("-3").unwrap(), -3);
/// assert!(parse_quantity("2.5").is_err());
/// ```
pub fn parse_quantity(quantity: &str) -> ValidationResult<i64> {
    let digits: String = quantity.chars().filter(|c| *c != ',').collect();

    digits
        .trim()
        .parse::<i64>()
        .map_err(|_| ValidationError::invalid_numeric("quantity", quantity))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name() {
        // Valid names
        assert!(validate_name("Rice").is_ok());
        assert!(validate_name("Brown Rice").is_ok());
        assert!(validate_name("  padded  ").is_ok());
        assert!(validate_name("Crème Brûlée").is_ok());

        // Invalid names
        assert!(validate_name("").is_err());
        assert!(validate_name("   ").is_err());
        assert!(validate_name("Rice2").is_err());
        assert!(validate_name("Coca-Cola").is_err());
        assert!(validate_name("Rice\tBag").is_err());

        // Letter-numbers and combining marks
        assert!(validate_name("Vitamin Ⅻ").is_err());
        assert!(validate_name("Cafe\u{301}").is_err());
        assert!(validate_name("日本茶").is_ok());
    }

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price("10").unwrap(), 10.0);
        assert_eq!(parse_price("10.25").unwrap(), 10.25);
        assert_eq!(parse_price(" 3.5 ").unwrap(), 3.5);
        assert_eq!(parse_price("-2").unwrap(), -2.0);
        assert_eq!(parse_price("1e2").unwrap(), 100.0);

        assert!(parse_price("").is_err());
        assert!(parse_price("ten").is_err());
        assert!(parse_price("1,000.00").is_err());
        assert!(parse_price("inf").is_err());
        assert!(parse_price("NaN").is_err());
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("5").unwrap(), 5);
        assert_eq!(parse_quantity("1,234,567").unwrap(), 1_234_567);
        assert_eq!(parse_quantity(" 42 ").unwrap(), 42);
        assert_eq!(parse_quantity("0").unwrap(), 0);
        assert_eq!(parse_quantity("-7").unwrap(), -7);

        assert!(parse_quantity("").is_err());
        assert!(parse_quantity(",").is_err());
        assert!(parse_quantity("3.5").is_err());
        assert!(parse_quantity("five").is_err());
    }

    #[test]
    fn test_validate_product_keeps_raw_text_fields() {
        let product = validate_product(" Rice ", "10.0", "1,000", "kg", "").unwrap();

        assert_eq!(product.name, " Rice ");
        assert_eq!(product.price, 10.0);
        assert_eq!(product.quantity, 1000);
        assert_eq!(product.units, "kg");
        assert_eq!(product.description, "");
    }

    #[test]
    fn test_units_are_not_checked() {
        assert!(validate_product("Rice", "1", "1", "", "").is_ok());
        assert!(validate_product("Rice", "1", "1", "50 g / bag", "#1 seller!").is_ok());
    }

    #[test]
    fn test_name_error_wins_over_numeric_error() {
        let bad_names = ["", "  ", "Rice1", "Rice!", "12"];
        let prices = ["10", "ten", ""];
        let quantities = ["5", "five", ""];

        for name in bad_names {
            for price in prices {
                for quantity in quantities {
                    let err = validate_product(name, price, quantity, "kg", "").unwrap_err();
                    assert!(
                        matches!(err, ValidationError::InvalidName { .. }),
                        "name {name:?} with price {price:?} quantity {quantity:?} gave {err:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_numeric_errors_name_the_field() {
        let err = validate_product("Rice", "ten", "five", "kg", "").unwrap_err();
        assert_eq!(err, ValidationError::invalid_numeric("price", "ten"));

        let err = validate_product("Rice", "10", "five", "kg", "").unwrap_err();
        assert_eq!(err, ValidationError::invalid_numeric("quantity", "five"));
    }

    #[test]
    fn test_validation_is_repeatable() {
        let first = validate_product("Beans", "20", "3", "kg", "Staple");
        let second = validate_product("Beans", "20", "3", "kg", "Staple");
        assert_eq!(first, second);
    }
}
