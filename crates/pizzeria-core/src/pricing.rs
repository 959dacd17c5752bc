//! # Pricing Module
//!
//! Pure price computation for order lines.
//!
//! ## Price Breakdown
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    How a Line is Priced                                 │
//! │                                                                         │
//! │  unit price = base.price + size.price + Σ (topping.price × topping qty) │
//! │  line total = unit price × item quantity                                │
//! │                                                                         │
//! │  Example (menu prices):                                                 │
//! │    Thin Crust $8.00 + Medium $7.00                                      │
//! │    + Pepperoni $2.50 × 2 + Mushrooms $1.50 × 1                          │
//! │    = $21.50 unit price                                                  │
//! │    × quantity 2 = $43.00 line total                                     │
//! │                                                                         │
//! │  Per topping line:                                                      │
//! │    unit  = raw topping price                                            │
//! │    total = topping price × topping quantity                             │
//! │    (NOT scaled by the item quantity; the unit price already folds       │
//! │     toppings in, so topping lines describe a single pizza)              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All arithmetic happens in integer cents via [`Money`]; there is no
//! intermediate rounding anywhere in this module.

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::types::{PizzaBase, PizzaSize, Topping};

// =============================================================================
// Inputs
// =============================================================================

/// One requested topping on an order line: which topping, and how many units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToppingRequest {
    pub topping_id: String,
    pub quantity: i64,
}

// =============================================================================
// Outputs
// =============================================================================

/// Computed prices for one topping line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToppingQuote {
    pub topping_id: String,
    pub quantity: i64,
    /// Raw topping price.
    pub unit_price: Money,
    /// unit_price × topping quantity.
    pub total_price: Money,
}

/// Computed prices for one order line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineQuote {
    /// base + size + toppings, for a single pizza.
    pub unit_price: Money,
    /// unit_price × item quantity.
    pub line_total: Money,
    /// Topping lines in request order.
    pub toppings: Vec<ToppingQuote>,
}

// =============================================================================
// Pricing
// =============================================================================

/// Computes the price breakdown for one order line from resolved components.
///
/// ## Preconditions
/// The caller (the validation engine) has already resolved every requested
/// topping id to an entry in `resolved_toppings`. If a resolved topping has
/// no matching request, its quantity defaults to 0; if a request has no
/// matching resolved topping, its price defaults to zero. Neither case is
/// normally reachable.
///
/// ## Example
/// ```rust
/// # use chrono::Utc;
/// # use pizzeria_core::money::Money;
/// # use pizzeria_core::pricing::quote_line;
/// # use pizzeria_core::types::{PizzaBase, PizzaSize};
/// # let now = Utc::now();
/// let base = PizzaBase {
///     id: "b".into(), name: "Thin Crust".into(), description: None,
///     price_cents: 800, is_available: true, created_at: now, updated_at: now,
/// };
/// let size = PizzaSize {
///     id: "s".into(), name: "Medium".into(), inches: 12,
///     price_cents: 700, is_available: true, created_at: now, updated_at: now,
/// };
/// let quote = quote_line(&base, &size, &[], &[], 2);
/// assert_eq!(quote.unit_price, Money::from_cents(1500));
/// assert_eq!(quote.line_total, Money::from_cents(3000));
/// ```
pub fn quote_line(
    base: &PizzaBase,
    size: &PizzaSize,
    resolved_toppings: &[Topping],
    requested: &[ToppingRequest],
    quantity: i64,
) -> LineQuote {
    // Toppings contribution to the unit price: resolved price × requested
    // quantity, summed over all resolved toppings. A missing request counts
    // as quantity 0.
    let toppings_price: Money = resolved_toppings
        .iter()
        .map(|topping| {
            let qty = requested
                .iter()
                .find(|r| r.topping_id == topping.id)
                .map(|r| r.quantity)
                .unwrap_or(0);
            topping.price().multiply_quantity(qty)
        })
        .sum();

    let unit_price = base.price() + size.price() + toppings_price;
    let line_total = unit_price.multiply_quantity(quantity);

    // Per-topping lines, in request order. A request without a resolved
    // topping prices at zero.
    let toppings = requested
        .iter()
        .map(|request| {
            let unit = resolved_toppings
                .iter()
                .find(|t| t.id == request.topping_id)
                .map(Topping::price)
                .unwrap_or_else(Money::zero);
            ToppingQuote {
                topping_id: request.topping_id.clone(),
                quantity: request.quantity,
                unit_price: unit,
                total_price: unit.multiply_quantity(request.quantity),
            }
        })
        .collect();

    LineQuote {
        unit_price,
        line_total,
        toppings,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn base(cents: i64) -> PizzaBase {
        let now = Utc::now();
        PizzaBase {
            id: "base-1".to_string(),
            name: "Thin Crust".to_string(),
            description: None,
            price_cents: cents,
            is_available: true,
            created_at: now,
            updated_at: now,
        }
    }

    fn size(cents: i64) -> PizzaSize {
        let now = Utc::now();
        PizzaSize {
            id: "size-1".to_string(),
            name: "Medium".to_string(),
            inches: 12,
            price_cents: cents,
            is_available: true,
            created_at: now,
            updated_at: now,
        }
    }

    fn topping(id: &str, name: &str, cents: i64) -> Topping {
        let now = Utc::now();
        Topping {
            id: id.to_string(),
            name: name.to_string(),
            description: None,
            price_cents: cents,
            is_available: true,
            created_at: now,
            updated_at: now,
        }
    }

    fn request(id: &str, qty: i64) -> ToppingRequest {
        ToppingRequest {
            topping_id: id.to_string(),
            quantity: qty,
        }
    }

    /// The menu scenario: base 8.00 + size 7.00 + (2.50×2 + 1.50×1) = 21.50
    /// unit price; quantity 2 gives a 43.00 line total.
    #[test]
    fn test_menu_scenario() {
        let toppings = [
            topping("t-pep", "Pepperoni", 250),
            topping("t-mush", "Mushrooms", 150),
        ];
        let requested = [request("t-pep", 2), request("t-mush", 1)];

        let quote = quote_line(&base(800), &size(700), &toppings, &requested, 2);

        assert_eq!(quote.unit_price, Money::from_cents(2150));
        assert_eq!(quote.line_total, Money::from_cents(4300));
    }

    /// Topping line totals are price × topping quantity only; the item
    /// quantity never scales them.
    #[test]
    fn test_topping_total_not_scaled_by_item_quantity() {
        let toppings = [topping("t-pep", "Pepperoni", 250)];
        let requested = [request("t-pep", 2)];

        let quote = quote_line(&base(800), &size(700), &toppings, &requested, 5);

        assert_eq!(quote.toppings.len(), 1);
        let line = &quote.toppings[0];
        assert_eq!(line.unit_price, Money::from_cents(250));
        // 2.50 × 2 = 5.00, regardless of quantity 5 on the item
        assert_eq!(line.total_price, Money::from_cents(500));
    }

    #[test]
    fn test_no_toppings() {
        let quote = quote_line(&base(800), &size(700), &[], &[], 3);

        assert_eq!(quote.unit_price, Money::from_cents(1500));
        assert_eq!(quote.line_total, Money::from_cents(4500));
        assert!(quote.toppings.is_empty());
    }

    /// Defensive defaults: a resolved topping without a request prices at
    /// quantity 0, a request without a resolved topping prices at zero.
    #[test]
    fn test_defensive_defaults() {
        let toppings = [topping("t-pep", "Pepperoni", 250)];
        let requested = [request("t-ghost", 3)];

        let quote = quote_line(&base(800), &size(700), &toppings, &requested, 1);

        // Pepperoni contributes 0 (no request), ghost contributes 0 (no price)
        assert_eq!(quote.unit_price, Money::from_cents(1500));
        assert_eq!(quote.toppings[0].unit_price, Money::zero());
        assert_eq!(quote.toppings[0].total_price, Money::zero());
    }

    #[test]
    fn test_quotes_preserve_request_order() {
        let toppings = [
            topping("t-a", "Olives", 150),
            topping("t-b", "Ham", 200),
        ];
        let requested = [request("t-b", 1), request("t-a", 1)];

        let quote = quote_line(&base(800), &size(700), &toppings, &requested, 1);

        assert_eq!(quote.toppings[0].topping_id, "t-b");
        assert_eq!(quote.toppings[1].topping_id, "t-a");
    }
}
