//! # Cart Commands
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐                         │
//! │  │  Empty   │────►│ In Cart  │────►│ Checkout │                         │
//! │  │  Cart    │     │          │     │ (wa.me)  │                         │
//! │  └──────────┘     └──────────┘     └──────────┘                         │
//! │                        │                                                │
//! │                   add / add-product                                     │
//! │                   update / remove                                       │
//! │                        │                                                │
//! │                        ▼                                                │
//! │                   clear ─────────────────────► (back to empty)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::Path;

use angelica_core::validation::validate_size;
use angelica_core::{CartLine, LineKey, Money, Product};
use angelica_store::{SlotStorage, Storefront};
use serde::Serialize;
use tracing::debug;

use crate::cli::ItemArgs;
use crate::commands::Report;
use crate::config::AppConfig;
use crate::error::{AppError, AppResult};

/// Cart response including lines and totals.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<CartLine>,
    pub count: i64,
    #[serde(with = "angelica_core::money::decimal")]
    pub total: Money,
}

impl<S: SlotStorage + Clone> From<&Storefront<S>> for CartResponse {
    fn from(storefront: &Storefront<S>) -> Self {
        let store = storefront.cart();
        CartResponse {
            items: store.cart().lines().to_vec(),
            count: store.cart_count(),
            total: store.cart_total(),
        }
    }
}

impl Report for CartResponse {
    fn render(&self, config: &AppConfig) -> String {
        if self.items.is_empty() {
            return "Your cart is empty.".to_string();
        }

        let mut out = String::new();
        for line in &self.items {
            let variant = match &line.color {
                Some(color) => format!("{} / {}", line.size, color),
                None => line.size.clone(),
            };
            out.push_str(&format!(
                "{:>3}x {} ({}) [{}]  {}\n",
                line.quantity,
                line.name,
                variant,
                line.product_id,
                config.format_currency(line.line_total()),
            ));
        }
        out.push_str(&format!(
            "{} item(s)  Total: {}",
            self.count,
            config.format_currency(self.total)
        ));
        out
    }
}

/// Current cart contents.
pub fn show<S: SlotStorage + Clone>(storefront: &Storefront<S>) -> CartResponse {
    debug!("cart show command");
    CartResponse::from(storefront)
}

/// Adds one unit of a variant given on the command line.
pub fn add<S: SlotStorage + Clone>(
    storefront: &mut Storefront<S>,
    item: &ItemArgs,
    size: &str,
    color: Option<String>,
) -> AppResult<CartResponse> {
    debug!(product_id = %item.id, size, "cart add command");
    validate_size(size)?;

    let line = item.to_entry()?.to_cart_line(size);
    let line = CartLine { color, ..line };

    storefront.cart_mut().add_to_cart(line)?;
    Ok(CartResponse::from(&*storefront))
}

/// Adds one unit from a product record, enforcing its sizes, colors and
/// sold-out flag.
pub fn add_product<S: SlotStorage + Clone>(
    storefront: &mut Storefront<S>,
    product_path: &Path,
    size: &str,
    color: Option<&str>,
) -> AppResult<CartResponse> {
    debug!(path = %product_path.display(), size, "cart add-product command");

    let product = read_product(product_path)?;
    let line = product.cart_line(size, color)?;

    storefront.cart_mut().add_to_cart(line)?;
    Ok(CartResponse::from(&*storefront))
}

/// Removes lines for a product and size. With a color only that line goes.
///
/// Nothing matching is not an error: the unchanged cart is returned.
pub fn remove<S: SlotStorage + Clone>(
    storefront: &mut Storefront<S>,
    product_id: &str,
    size: &str,
    color: Option<String>,
) -> AppResult<CartResponse> {
    debug!(product_id, size, "cart remove command");

    let removed = match color {
        Some(color) => {
            let key = LineKey::new(product_id, size, Some(color));
            usize::from(storefront.cart_mut().remove_line(&key)?)
        }
        None => storefront.cart_mut().remove_from_cart(product_id, size)?,
    };

    if removed == 0 {
        debug!(product_id, size, "No cart line matched, cart unchanged");
    }
    Ok(CartResponse::from(&*storefront))
}

/// Changes quantity by `delta`; lines reaching zero are removed.
///
/// Like `remove`, an unknown line leaves the cart as it is.
pub fn update<S: SlotStorage + Clone>(
    storefront: &mut Storefront<S>,
    product_id: &str,
    size: &str,
    delta: i64,
) -> AppResult<CartResponse> {
    debug!(product_id, size, delta, "cart update command");

    if !storefront.cart_mut().update_quantity(product_id, size, delta)? {
        debug!(product_id, size, "No cart line matched, cart unchanged");
    }
    Ok(CartResponse::from(&*storefront))
}

/// Empties the cart.
pub fn clear<S: SlotStorage + Clone>(storefront: &mut Storefront<S>) -> AppResult<CartResponse> {
    debug!("cart clear command");

    storefront.cart_mut().clear_cart()?;
    Ok(CartResponse::from(&*storefront))
}

fn read_product(path: &Path) -> AppResult<Product> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| AppError::not_found("Product file", &format!("{} ({})", path.display(), e)))?;
    Ok(serde_json::from_str(&contents)?)
}
