//! # Rendering
//!
//! Turns an [`Outcome`] into text for stdout.
//!
//! ## Table Layout
//! ```text
//! ID  Name   Price  Quantity  Units  Descriptions
//! 1   Rice   10.0   5         kg     Staple
//! 2   Beans  20.0   3         kg
//! ```
//!
//! Columns are left-aligned and padded to the widest cell. Prices keep a
//! decimal point so a whole price still reads as a real number.

use crate::commands::Outcome;
use crate::error::AppError;
use stockroom_core::{Product, PRODUCT_COLUMNS};

/// Shown when a search matches nothing.
pub const NO_MATCHES: &str = "No products found matching the search criteria.";

/// Gap between columns.
const COLUMN_GAP: usize = 2;

/// Renders an outcome for a terminal.
pub fn render_text(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Table { note, products } => {
            let mut out = String::new();
            if let Some(note) = note {
                out.push_str(note);
                out.push('\n');
            }
            out.push_str(&render_table(products));
            out
        }
        Outcome::SearchResults { products, .. } if products.is_empty() => {
            format!("{}\n", NO_MATCHES)
        }
        Outcome::SearchResults { products, .. } => render_table(products),
        Outcome::Exported { path, rows } => {
            format!("Exported {} product(s) to {}\n", rows, path.display())
        }
    }
}

/// Renders an outcome as pretty JSON.
pub fn render_json(outcome: &Outcome) -> Result<String, AppError> {
    serde_json::to_string_pretty(outcome)
        .map(|json| json + "\n")
        .map_err(|e| AppError::internal(format!("Could not encode output: {}", e)))
}

fn cells(product: &Product) -> [String; 6] {
    [
        product.id.to_string(),
        product.name.clone(),
        format!("{:?}", product.price),
        product.quantity.to_string(),
        product.units.clone(),
        product.description.clone(),
    ]
}

/// Renders rows under the column header, aligned.
pub fn render_table(products: &[Product]) -> String {
    let rows: Vec<[String; 6]> = products.iter().map(cells).collect();

    let mut widths = PRODUCT_COLUMNS.map(|c| c.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let header = PRODUCT_COLUMNS.map(str::to_string);
    let mut out = String::new();
    for row in std::iter::once(&header).chain(rows.iter()) {
        let mut line = String::new();
        for (i, cell) in row.iter().enumerate() {
            line.push_str(cell);
            if i + 1 < row.len() {
                let pad = widths[i] - cell.chars().count() + COLUMN_GAP;
                line.extend(std::iter::repeat(' ').take(pad));
            }
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn rice() -> Product {
        Product {
            id: 1,
            name: "Rice".to_string(),
            price: 10.0,
            quantity: 5,
            units: "kg".to_string(),
            description: "Staple".to_string(),
        }
    }

    #[test]
    fn test_empty_table_has_header_only() {
        assert_eq!(
            render_table(&[]),
            "ID  Name  Price  Quantity  Units  Descriptions\n"
        );
    }

    #[test]
    fn test_rows_are_aligned() {
        let beans = Product {
            id: 2,
            name: "Beans".to_string(),
            price: 20.5,
            quantity: 3,
            units: "kg".to_string(),
            description: String::new(),
        };

        let text = render_table(&[rice(), beans]);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "ID  Name   Price  Quantity  Units  Descriptions");
        assert_eq!(lines[1], "1   Rice   10.0   5         kg     Staple");
        assert_eq!(lines[2], "2   Beans  20.5   3         kg");
    }

    #[test]
    fn test_empty_search_message() {
        let outcome = Outcome::SearchResults {
            keyword: "zzz".to_string(),
            products: vec![],
        };
        assert_eq!(render_text(&outcome), format!("{}\n", NO_MATCHES));
    }

    #[test]
    fn test_note_precedes_table() {
        let outcome = Outcome::Table {
            note: Some("Added product 1.".to_string()),
            products: vec![rice()],
        };
        assert!(render_text(&outcome).starts_with("Added product 1.\nID"));
    }

    #[test]
    fn test_json_output() {
        let outcome = Outcome::Exported {
            path: PathBuf::from("out.csv"),
            rows: 2,
        };
        let json: serde_json::Value =
            serde_json::from_str(&render_json(&outcome).unwrap()).unwrap();

        assert_eq!(json["kind"], "exported");
        assert_eq!(json["rows"], 2);
    }
}
