//! # Validation Module
//!
//! Input validation utilities for catalog records and checkout settings.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: View (size picker, disabled buttons)                          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Product → CartLine mapping                                    │
//! │  └── THIS MODULE: ids, sizes, prices                                    │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Cart / Wishlist reducers (never fail, no-op on unknown ids)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use angelica_core::validation::{validate_size, validate_whatsapp_number};
//!
//! assert!(validate_size("M").is_ok());
//! assert!(validate_size("  ").is_err());
//! assert!(validate_whatsapp_number("51906005773").is_ok());
//! ```

use crate::error::ValidationError;
use crate::money::Money;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

const MAX_PRODUCT_ID_LEN: usize = 128;
const MAX_NAME_LEN: usize = 200;
const MAX_PHONE_DIGITS: usize = 15;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a catalog product id.
///
/// CMS ids are opaque strings (`"4a1b…"`, `"drafts.4a1b…"`), so only
/// emptiness and length are checked.
pub fn validate_product_id(id: &str) -> ValidationResult<()> {
    let id = id.trim();

    if id.is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    if id.len() > MAX_PRODUCT_ID_LEN {
        return Err(ValidationError::TooLong {
            field: "id".to_string(),
            max: MAX_PRODUCT_ID_LEN,
        });
    }

    Ok(())
}

/// Validates a product name.
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a chosen size. Sizes are free-form labels (`XS`, `M`, `38`).
pub fn validate_size(size: &str) -> ValidationResult<()> {
    if size.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "size".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a unit price.
///
/// ## Rules
/// - Must be non-negative
/// - Zero is allowed (gifts, samples)
///
/// ```rust
/// use angelica_core::money::Money;
/// use angelica_core::validation::validate_price;
///
/// assert!(validate_price(Money::from_cents(8990)).is_ok());
/// assert!(validate_price(Money::zero()).is_ok());
/// assert!(validate_price(Money::from_cents(-100)).is_err());
/// ```
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::Negative {
            field: "price".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Checkout Validators
// =============================================================================

/// Validates a WhatsApp number in international format without `+`.
///
/// `wa.me` links only accept digits: country code followed by the number.
pub fn validate_whatsapp_number(number: &str) -> ValidationResult<()> {
    if number.is_empty() {
        return Err(ValidationError::Required {
            field: "whatsapp number".to_string(),
        });
    }

    if !number.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::InvalidFormat {
            field: "whatsapp number".to_string(),
            reason: "must contain only digits (country code first, no '+')".to_string(),
        });
    }

    if number.len() > MAX_PHONE_DIGITS {
        return Err(ValidationError::TooLong {
            field: "whatsapp number".to_string(),
            max: MAX_PHONE_DIGITS,
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
    fn test_validate_product_id() {
        assert!(validate_product_id("p1").is_ok());
        assert!(validate_product_id("drafts.4a1b2c").is_ok());

        assert!(validate_product_id("").is_err());
        assert!(validate_product_id("   ").is_err());
        assert!(validate_product_id(&"a".repeat(200)).is_err());
    }

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("Vestido Lino").is_ok());
        assert!(validate_product_name("").is_err());
        assert!(validate_product_name(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_size() {
        assert!(validate_size("XS").is_ok());
        assert!(validate_size("38").is_ok());
        assert!(validate_size("").is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(Money::zero()).is_ok());
        assert!(validate_price(Money::from_cents(1)).is_ok());
        assert!(validate_price(Money::from_cents(-1)).is_err());
    }

    #[test]
    fn test_validate_whatsapp_number() {
        assert!(validate_whatsapp_number("51906005773").is_ok());

        assert!(validate_whatsapp_number("").is_err());
        assert!(validate_whatsapp_number("+51906005773").is_err());
        assert!(validate_whatsapp_number("906 005 773").is_err());
        assert!(validate_whatsapp_number(&"9".repeat(20)).is_err());
    }
}
