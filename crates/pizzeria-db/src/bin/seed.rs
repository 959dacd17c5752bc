//! # Catalog Seeder
//!
//! Populates the database with the standard pizzeria menu.
//!
//! ## Usage
//! ```bash
//! # Seed the default database
//! cargo run -p pizzeria-db --bin seed
//!
//! # Specify database path
//! cargo run -p pizzeria-db --bin seed -- --db ./data/pizzeria.db
//! ```
//!
//! ## Seeded Menu
//! - 4 pizza bases (crusts): $8.00 - $14.00
//! - 4 pizza sizes: 10" - 16", $5.00 - $11.00
//! - 10 toppings: $1.00 - $2.50
//!
//! Seeding is skipped if the catalog already has rows, so the binary is safe
//! to run on every deploy.

use chrono::Utc;
use std::env;
use uuid::Uuid;

use pizzeria_core::{PizzaBase, PizzaSize, Topping};
use pizzeria_db::{Database, DbConfig};

/// (name, description, price_cents)
const BASES: &[(&str, &str, i64)] = &[
    ("Thin Crust", "Classic thin and crispy crust", 800),
    ("Thick Crust", "Fluffy deep-dish style crust", 1000),
    ("Stuffed Crust", "Crust stuffed with mozzarella", 1200),
    ("Gluten-Free", "Gluten-free cauliflower crust", 1400),
];

/// (name, inches, price_cents)
const SIZES: &[(&str, i64, i64)] = &[
    ("Small", 10, 500),
    ("Medium", 12, 700),
    ("Large", 14, 900),
    ("Extra Large", 16, 1100),
];

/// (name, description, price_cents)
const TOPPINGS: &[(&str, &str, i64)] = &[
    ("Pepperoni", "Spicy cured pepperoni slices", 250),
    ("Mushrooms", "Fresh sliced mushrooms", 150),
    ("Bell Peppers", "Mixed red and green peppers", 100),
    ("Onions", "Caramelized red onions", 100),
    ("Sausage", "Italian fennel sausage", 200),
    ("Bacon", "Smoked bacon crumbles", 250),
    ("Extra Cheese", "Double portion of mozzarella", 150),
    ("Olives", "Pitted kalamata olives", 150),
    ("Pineapple", "Sweet pineapple chunks", 150),
    ("Ham", "Honey-glazed ham strips", 200),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut db_path = String::from("./pizzeria_dev.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Pizzeria Catalog Seeder");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>    Database file path (default: ./pizzeria_dev.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("🍕 Pizzeria Catalog Seeder");
    println!("==========================");
    println!("Database: {}", db_path);
    println!();

    // Connect to database
    let config = DbConfig::new(&db_path);
    let db = Database::new(config).await?;

    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    // Check existing catalog rows
    let existing = db.bases().count().await? + db.sizes().count().await? + db.toppings().count().await?;
    if existing > 0 {
        println!("⚠ Catalog already has {} rows", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to reseed.");
        return Ok(());
    }

    println!();
    println!("Seeding catalog...");

    let now = Utc::now();

    for (name, description, price_cents) in BASES {
        let base = PizzaBase {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            description: Some(description.to_string()),
            price_cents: *price_cents,
            is_available: true,
            created_at: now,
            updated_at: now,
        };
        db.bases().insert(&base).await?;
    }
    println!("  ✓ {} pizza bases", BASES.len());

    for (name, inches, price_cents) in SIZES {
        let size = PizzaSize {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            inches: *inches,
            price_cents: *price_cents,
            is_available: true,
            created_at: now,
            updated_at: now,
        };
        db.sizes().insert(&size).await?;
    }
    println!("  ✓ {} pizza sizes", SIZES.len());

    for (name, description, price_cents) in TOPPINGS {
        let topping = Topping {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            description: Some(description.to_string()),
            price_cents: *price_cents,
            is_available: true,
            created_at: now,
            updated_at: now,
        };
        db.toppings().insert(&topping).await?;
    }
    println!("  ✓ {} toppings", TOPPINGS.len());

    println!();
    println!("✓ Seed complete!");

    Ok(())
}
