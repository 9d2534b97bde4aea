//! # Error Types
//!
//! Domain-specific error types for angelica-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  angelica-core errors (this file)                                       │
//! │  ├── CoreError        - Catalog / checkout rule violations              │
//! │  └── ValidationError  - Input validation failures                       │
//! │                                                                         │
//! │  angelica-store errors (separate crate)                                 │
//! │  └── StoreError       - Hydration and slot write failures               │
//! │                                                                         │
//! │  CLI errors (in app)                                                    │
//! │  └── AppError         - What the shopper sees                           │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → StoreError → AppError              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Cart and wishlist reducers never fail: unknown ids are no-ops. Errors
//! here come from mapping catalog products into cart lines and from the
//! checkout hand-off.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The product is marked sold out in the catalog.
    #[error("{name} is sold out")]
    SoldOut { product_id: String, name: String },

    /// No size was chosen before adding to the cart.
    ///
    /// ## User Workflow
    /// ```text
    /// Product detail ──► "Añadir al carrito" (no size selected)
    ///      │
    ///      ▼
    /// SizeRequired ──► UI keeps the button disabled
    /// ```
    #[error("A size must be selected for {product_id}")]
    SizeRequired { product_id: String },

    /// The chosen size is not offered for this product.
    #[error("Size {size} is not available for {product_id}")]
    SizeUnavailable { product_id: String, size: String },

    /// The chosen color is not offered for this product.
    #[error("Color {color} is not available for {product_id}")]
    ColorUnavailable { product_id: String, color: String },

    /// Checkout was requested for an empty cart.
    #[error("Cannot check out an empty cart")]
    EmptyCart,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    Negative { field: String },

    /// Invalid format (e.g., a phone number with letters).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
