//! # Validation Module
//!
//! Input validation rules for order requests.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: HTTP deserialization (serde)                                 │
//! │  ├── Type/shape validation (rejects malformed JSON)                    │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE (pure functions)                                 │
//! │  ├── Field lengths, positivity, email/phone shape                      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  ├── NOT NULL / UNIQUE / FOREIGN KEY / CHECK constraints               │
//! │                                                                         │
//! │  Defense in depth: multiple layers catch different errors              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::MAX_ITEM_QUANTITY;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a customer name.
///
/// ## Rules
/// - Must not be empty after trimming
/// - Must be at most 100 characters
///
/// ## Example
/// ```rust
/// use pizzeria_core::validation::validate_customer_name;
///
/// assert!(validate_customer_name("Ada Lovelace").is_ok());
/// assert!(validate_customer_name("").is_err());
/// assert!(validate_customer_name(&"A".repeat(200)).is_err());
/// ```
pub fn validate_customer_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "customerName".to_string(),
        });
    }

    if name.chars().count() > 100 {
        return Err(ValidationError::TooLong {
            field: "customerName".to_string(),
            max: 100,
        });
    }

    Ok(())
}

/// Validates an email address.
///
/// ## Rules
/// Structural check only: exactly one `@`, non-empty local part, and a
/// domain containing a dot. Full RFC 5322 parsing is deliberately out of
/// scope for an order-intake field.
pub fn validate_email(email: &str) -> ValidationResult<()> {
    let email = email.trim();

    let mut parts = email.splitn(2, '@');
    let local = parts.next().unwrap_or("");
    let domain = parts.next().unwrap_or("");

    let well_formed = !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.');

    if !well_formed {
        return Err(ValidationError::InvalidFormat {
            field: "customerEmail".to_string(),
            reason: "must be a valid email address".to_string(),
        });
    }

    Ok(())
}

/// Validates a customer phone number.
///
/// ## Rules
/// - Must be between 10 and 15 characters
pub fn validate_phone(phone: &str) -> ValidationResult<()> {
    let phone = phone.trim();

    if phone.chars().count() < 10 {
        return Err(ValidationError::TooShort {
            field: "customerPhone".to_string(),
            min: 10,
        });
    }

    if phone.chars().count() > 15 {
        return Err(ValidationError::TooLong {
            field: "customerPhone".to_string(),
            max: 15,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a quantity value (item quantity or topping quantity).
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed MAX_ITEM_QUANTITY (999)
pub fn validate_quantity(field: &str, qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: field.to_string(),
        });
    }

    if qty > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 1,
            max: MAX_ITEM_QUANTITY,
        });
    }

    Ok(())
}

// =============================================================================
// Collection Validators
// =============================================================================

/// Validates the order item list.
///
/// ## Rules
/// - At least one item is required
pub fn validate_items_present(count: usize) -> ValidationResult<()> {
    if count == 0 {
        return Err(ValidationError::TooFew {
            field: "items".to_string(),
            min: 1,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_customer_name() {
        assert!(validate_customer_name("Ada Lovelace").is_ok());
        assert!(validate_customer_name("A").is_ok());
        assert!(validate_customer_name(&"A".repeat(100)).is_ok());

        assert!(validate_customer_name("").is_err());
        assert!(validate_customer_name("   ").is_err());
        assert!(validate_customer_name(&"A".repeat(101)).is_err());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("ada@example.com").is_ok());
        assert!(validate_email("a.b+c@mail.example.org").is_ok());

        assert!(validate_email("").is_err());
        assert!(validate_email("no-at-sign").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("ada@").is_err());
        assert!(validate_email("ada@nodot").is_err());
        assert!(validate_email("ada@.com").is_err());
    }

    #[test]
    fn test_validate_phone() {
        assert!(validate_phone("0123456789").is_ok());
        assert!(validate_phone("+12345678901234").is_ok());

        assert!(validate_phone("123").is_err());
        assert!(validate_phone("1234567890123456").is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity("quantity", 1).is_ok());
        assert!(validate_quantity("quantity", 999).is_ok());

        assert!(validate_quantity("quantity", 0).is_err());
        assert!(validate_quantity("quantity", -1).is_err());
        assert!(validate_quantity("quantity", 1000).is_err());
    }

    #[test]
    fn test_validate_items_present() {
        assert!(validate_items_present(1).is_ok());
        assert!(validate_items_present(0).is_err());
    }
}
