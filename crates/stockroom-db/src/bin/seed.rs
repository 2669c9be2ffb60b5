//! # Seed Data Generator
//!
//! Populates the database with sample products for development.
//!
//! ## Usage
//! ```bash
//! # Generate 200 products (default)
//! cargo run -p stockroom-db --bin seed
//!
//! # Generate custom amount
//! cargo run -p stockroom-db --bin seed -- --count 1000
//!
//! # Specify database path
//! cargo run -p stockroom-db --bin seed -- --db ./data/inventory.db
//! ```
//!
//! ## Generated Products
//! Every product goes through the same validator the front end uses, so
//! seeded rows obey the same rules as typed-in rows:
//! - Name: letters and spaces only (`{Adjective} {Item}`)
//! - Price: 0.50 - 49.99
//! - Quantity: 0 - 1,499 (written with a thousands separator)
//! - Units: per category

use std::env;
use stockroom_core::validation::validate_product;
use stockroom_db::{Database, DbConfig};

/// Item names with their unit label.
const ITEMS: &[(&str, &str)] = &[
    ("Rice", "kg"),
    ("Beans", "kg"),
    ("Flour", "kg"),
    ("Sugar", "kg"),
    ("Salt", "g"),
    ("Tea", "box"),
    ("Coffee", "jar"),
    ("Milk", "l"),
    ("Olive Oil", "l"),
    ("Eggs", "dozen"),
    ("Soap", "pcs"),
    ("Candles", "pcs"),
];

const ADJECTIVES: &[&str] = &[
    "Organic", "Premium", "Basic", "Whole", "Fresh", "Bulk", "Imported", "Local",
];

const DESCRIPTIONS: &[&str] = &["Staple", "Seasonal", "", "Best seller", "Back shelf, row two"];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args: Vec<String> = env::args().collect();
    let mut count: usize = 200;
    let mut db_path = "./inventory_dev.db".to_string();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--count" | "-c" => {
                if i + 1 < args.len() {
                    count = args[i + 1].parse().unwrap_or(200);
                    i += 1;
                }
            }
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Stockroom Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --count <N>    Number of products to generate (default: 200)");
                println!("  -d, --db <PATH>    Database file path (default: ./inventory_dev.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("Stockroom Seed Data Generator");
    println!("=============================");
    println!("Database: {}", db_path);
    println!("Products: {}", count);
    println!();

    let db = Database::new(DbConfig::new(&db_path)).await?;
    let result = seed(&db, count).await;
    db.close().await;
    result
}

async fn seed(db: &Database, count: usize) -> Result<(), Box<dyn std::error::Error>> {
    let existing = db.products().count().await?;
    if existing > 0 {
        println!("Database already has {} products", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    println!("Generating products...");
    let start = std::time::Instant::now();

    for n in 0..count {
        let (item, units) = ITEMS[n % ITEMS.len()];
        let adjective = ADJECTIVES[(n / ITEMS.len()) % ADJECTIVES.len()];
        let name = format!("{} {}", adjective, item);

        // Deterministic spread of prices and stock
        let price = format!("{}.{:02}", (n * 7) % 50, (n * 13 + 50) % 100);
        let quantity = format_thousands((n * 37) % 1500);
        let description = DESCRIPTIONS[n % DESCRIPTIONS.len()];

        let product = validate_product(&name, &price, &quantity, units, description)?;
        db.products().create(&product).await?;

        if (n + 1) % 100 == 0 {
            println!("  Generated {} products...", n + 1);
        }
    }

    let elapsed = start.elapsed();
    println!();
    println!("Generated {} products in {:?}", count, elapsed);

    let kg = db.products().search("kg").await?;
    println!("  Search 'kg': {} results", kg.len());

    println!();
    println!("Seed complete!");
    Ok(())
}

/// Formats a number with `,` thousands separators ("1,234").
fn format_thousands(value: usize) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    out
}
