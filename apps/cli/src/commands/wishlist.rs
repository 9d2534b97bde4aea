//! # Wishlist Commands
//!
//! Saved products and the move-to-cart hand-off.

use angelica_core::{Money, WishlistEntry};
use angelica_store::{SlotStorage, Storefront};
use serde::Serialize;
use tracing::debug;

use crate::cli::ItemArgs;
use crate::commands::cart::CartResponse;
use crate::commands::Report;
use crate::config::AppConfig;
use crate::error::{AppError, AppResult};

/// Wishlist response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistResponse {
    pub items: Vec<WishlistEntry>,
    pub count: usize,
    /// Sum of saved prices.
    #[serde(with = "angelica_core::money::decimal")]
    pub total: Money,
}

impl<S: SlotStorage + Clone> From<&Storefront<S>> for WishlistResponse {
    fn from(storefront: &Storefront<S>) -> Self {
        let store = storefront.wishlist();
        WishlistResponse {
            items: store.wishlist().entries().to_vec(),
            count: store.wishlist_count(),
            total: store.wishlist().entries().iter().map(|e| e.price).sum(),
        }
    }
}

impl Report for WishlistResponse {
    fn render(&self, config: &AppConfig) -> String {
        if self.items.is_empty() {
            return "Your wishlist is empty.".to_string();
        }

        let mut out = String::new();
        for entry in &self.items {
            out.push_str(&format!(
                "♡ {} [{}]  {}\n",
                entry.name,
                entry.product_id,
                config.format_currency(entry.price)
            ));
        }
        out.push_str(&format!("{} saved", self.count));
        out
    }
}

/// Result of a toggle: whether the product ended up saved.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleResponse {
    pub product_id: String,
    pub saved: bool,
    pub wishlist: WishlistResponse,
}

impl Report for ToggleResponse {
    fn render(&self, config: &AppConfig) -> String {
        let verb = if self.saved { "Saved" } else { "Removed" };
        format!("{} {}\n{}", verb, self.product_id, self.wishlist.render(config))
    }
}

/// Cart and wishlist after a move.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveResponse {
    pub cart: CartResponse,
    pub wishlist: WishlistResponse,
}

impl Report for MoveResponse {
    fn render(&self, config: &AppConfig) -> String {
        format!(
            "{}\n\n{}",
            self.cart.render(config),
            self.wishlist.render(config)
        )
    }
}

pub fn show<S: SlotStorage + Clone>(storefront: &Storefront<S>) -> WishlistResponse {
    debug!("wishlist show command");
    WishlistResponse::from(storefront)
}

/// Saves a product. Saving it again changes nothing.
pub fn add<S: SlotStorage + Clone>(
    storefront: &mut Storefront<S>,
    item: &ItemArgs,
) -> AppResult<WishlistResponse> {
    debug!(product_id = %item.id, "wishlist add command");

    storefront.wishlist_mut().add_to_wishlist(item.to_entry()?)?;
    Ok(WishlistResponse::from(&*storefront))
}

/// Forgets a saved product. Forgetting an unsaved one changes nothing.
pub fn remove<S: SlotStorage + Clone>(
    storefront: &mut Storefront<S>,
    product_id: &str,
) -> AppResult<WishlistResponse> {
    debug!(product_id, "wishlist remove command");

    if !storefront.wishlist_mut().remove_from_wishlist(product_id)? {
        debug!(product_id, "Product was not in the wishlist");
    }
    Ok(WishlistResponse::from(&*storefront))
}

pub fn toggle<S: SlotStorage + Clone>(
    storefront: &mut Storefront<S>,
    item: &ItemArgs,
) -> AppResult<ToggleResponse> {
    debug!(product_id = %item.id, "wishlist toggle command");

    let saved = storefront
        .wishlist_mut()
        .toggle_wishlist_item(item.to_entry()?)?;
    Ok(ToggleResponse {
        product_id: item.id.clone(),
        saved,
        wishlist: WishlistResponse::from(&*storefront),
    })
}

/// Moves a saved product into the cart in `size`.
///
/// The entry stays saved if the cart rejects it.
pub fn move_to_cart<S: SlotStorage + Clone>(
    storefront: &mut Storefront<S>,
    product_id: &str,
    size: &str,
) -> AppResult<MoveResponse> {
    debug!(product_id, size, "wishlist move command");

    let entry = storefront
        .wishlist()
        .wishlist()
        .get(product_id)
        .cloned()
        .ok_or_else(|| AppError::not_found("Wishlist item", product_id))?;

    storefront.move_to_cart(&entry, size)?;
    Ok(MoveResponse {
        cart: CartResponse::from(&*storefront),
        wishlist: WishlistResponse::from(&*storefront),
    })
}
