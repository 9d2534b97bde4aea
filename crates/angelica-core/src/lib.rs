//! # angelica-core: Pure Storefront Logic for Angelica Shop
//!
//! This crate is the **heart** of the storefront state. It contains the cart
//! and wishlist rules as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Angelica Shop Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              Views / drawers / CLI (external)                   │   │
//! │  │    Catalog ──► Product detail ──► Cart drawer ──► WhatsApp      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              angelica-store (CartStore, WishlistStore)          │   │
//! │  │         hydration, durable slots, mutate-then-persist           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ angelica-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌──────────────────┐  │   │
//! │  │   │  types   │ │  money   │ │   cart   │ │    wishlist      │  │   │
//! │  │   │ CartLine │ │  Money   │ │   Cart   │ │    Wishlist      │  │   │
//! │  │   │ Product  │ │ decimal  │ │ LineKey  │ │                  │  │   │
//! │  │   └──────────┘ └──────────┘ └──────────┘ └──────────────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STORAGE • NO NETWORK • PURE FUNCTIONS             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (CartLine, WishlistEntry, Product, Drawer)
//! - [`money`] - Money type with integer arithmetic
//! - [`cart`] - Cart reducer (add / remove / update quantity / totals)
//! - [`wishlist`] - Wishlist reducer (add / remove / toggle)
//! - [`checkout`] - Order summary message for the WhatsApp hand-off
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation
//!
//! ## Example Usage
//!
//! ```rust
//! use angelica_core::{Cart, CartLine, Money};
//!
//! let mut cart = Cart::new();
//! let dress = CartLine::new("p1", "Dress", Money::from_cents(10000), "i.png", "M", None);
//!
//! cart.add(dress.clone());
//! cart.add(dress);
//!
//! assert_eq!(cart.len(), 1);
//! assert_eq!(cart.count(), 2);
//! assert_eq!(cart.total(), Money::from_cents(20000));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod checkout;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;
pub mod wishlist;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, LineKey};
pub use checkout::OrderSummary;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;
pub use wishlist::Wishlist;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Durable slot holding the serialized cart.
///
/// The key is shared with data already written by the web storefront, so it
/// must never change.
pub const CART_SLOT_KEY: &str = "angelica-cart";

/// Durable slot holding the serialized wishlist.
pub const WISHLIST_SLOT_KEY: &str = "angelica-wishlist";

/// Currency symbol used when none is configured (Peruvian sol).
pub const DEFAULT_CURRENCY_SYMBOL: &str = "S/";
