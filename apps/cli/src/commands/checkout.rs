//! # Checkout Command
//!
//! Orders are confirmed over WhatsApp: this renders the order message and
//! the `wa.me` link that opens a chat with it prefilled. The cart is left
//! as it is.

use angelica_core::Money;
use angelica_store::{SlotStorage, Storefront};
use serde::Serialize;
use tracing::{debug, info};

use crate::commands::Report;
use crate::config::AppConfig;
use crate::error::AppResult;

/// Message and link for the WhatsApp hand-off.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutResponse {
    pub message: String,
    pub url: String,
    #[serde(with = "angelica_core::money::decimal")]
    pub total: Money,
}

impl Report for CheckoutResponse {
    fn render(&self, _config: &AppConfig) -> String {
        format!("{}\n\n{}", self.message, self.url)
    }
}

/// Builds the order message and link for the current cart.
///
/// The total is rendered with [`AppConfig::format_currency`], like every
/// other price the CLI prints.
pub fn checkout<S: SlotStorage + Clone>(
    storefront: &Storefront<S>,
    config: &AppConfig,
) -> AppResult<CheckoutResponse> {
    debug!("checkout command");

    let summary = storefront.order_summary();
    let format_total = |total: Money| config.format_currency(total);
    let url = summary.whatsapp_url_with(&config.whatsapp_number, format_total)?;

    info!(lines = summary.lines.len(), total = %summary.total, "Checkout link built");
    Ok(CheckoutResponse {
        message: summary.message_with(format_total),
        url,
        total: summary.total,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use angelica_core::CartLine;
    use angelica_store::MemoryStorage;

    #[test]
    fn test_checkout_builds_link() {
        let mut sf = Storefront::open(MemoryStorage::new());
        let line = CartLine::new("p1", "Vestido Lino", Money::from_cents(12990), "", "M", None);
        sf.cart_mut().add_to_cart(line.clone()).unwrap();
        sf.cart_mut().add_to_cart(line).unwrap();

        let response = checkout(&sf, &AppConfig::default()).unwrap();
        assert!(response.message.contains("▪️ 2x Vestido Lino (Talla: M)"));
        assert!(response.message.contains("💰 Total a Pagar: S/ 259.80"));
        assert!(response.url.starts_with("https://wa.me/51906005773?text=Hola"));
        assert_eq!(response.total, Money::from_cents(25980));

        // Checkout does not clear the cart.
        assert_eq!(sf.cart().cart_count(), 2);
    }

    #[test]
    fn test_checkout_honours_currency_decimals() {
        let mut sf = Storefront::open(MemoryStorage::new());
        let line = CartLine::new("p1", "Vestido Lino", Money::from_cents(12990), "", "M", None);
        sf.cart_mut().add_to_cart(line.clone()).unwrap();
        sf.cart_mut().add_to_cart(line).unwrap();

        let config = AppConfig {
            currency_decimals: 0,
            ..AppConfig::default()
        };
        let response = checkout(&sf, &config).unwrap();
        assert!(response.message.contains("💰 Total a Pagar: S/ 260\n"));
        assert!(!response.message.contains("259.80"));
        assert!(response.url.contains("S%2F+260"));
    }

    #[test]
    fn test_checkout_empty_cart() {
        let sf = Storefront::open(MemoryStorage::new());
        let err = checkout(&sf, &AppConfig::default()).unwrap_err();
        assert_eq!(err.code, ErrorCode::EmptyCart);
    }
}
