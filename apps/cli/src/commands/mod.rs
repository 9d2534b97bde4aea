//! # Commands Module
//!
//! Everything the `angelica` binary can do.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs       ◄─── You are here (Report trait, shared parsing)
//! ├── cart.rs      ◄─── cart show/add/add-product/remove/update/clear
//! ├── wishlist.rs  ◄─── wishlist show/add/remove/toggle/move
//! └── checkout.rs  ◄─── WhatsApp order message and link
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  angelica cart add --id p1 --name "Vestido" --price 129.9 -s M          │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  commands::cart::add(                                                   │
//! │      storefront: &mut Storefront<S>,  ◄── hydrated from the slot dir    │
//! │      item, size, color,               ◄── parsed arguments              │
//! │  ) -> AppResult<CartResponse>                                           │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Report::render(&config)  or  serde_json (--json)                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Commands are generic over the slot backend so tests run them against
//! `MemoryStorage`.

pub mod cart;
pub mod checkout;
pub mod wishlist;

use angelica_core::validation::{validate_price, validate_product_id, validate_product_name};
use angelica_core::{Money, WishlistEntry};
use serde::Serialize;

use crate::cli::ItemArgs;
use crate::config::AppConfig;
use crate::error::{AppError, AppResult};

/// A command result that can be printed for a person.
pub trait Report: Serialize {
    fn render(&self, config: &AppConfig) -> String;
}

/// Parses a decimal price argument into Money.
pub fn parse_price(value: f64) -> AppResult<Money> {
    let price = Money::from_decimal(value)
        .ok_or_else(|| AppError::validation(format!("Price out of range: {}", value)))?;
    validate_price(price)?;
    Ok(price)
}

impl ItemArgs {
    /// Validated wishlist snapshot of the arguments.
    pub fn to_entry(&self) -> AppResult<WishlistEntry> {
        validate_product_id(&self.id)?;
        validate_product_name(&self.name)?;
        let price = parse_price(self.price)?;

        Ok(WishlistEntry::new(
            self.id.clone(),
            self.name.clone(),
            price,
            self.image.clone(),
        ))
    }
}
