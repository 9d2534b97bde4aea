//! # Checkout Hand-off
//!
//! The shop takes orders over WhatsApp. Checkout reads the cart, renders a
//! plain-text order message and wraps it in a `wa.me` link. Nothing here
//! mutates the cart.
//!
//! ## Message Format
//! ```text
//! Hola Angelica Shop! 🌸
//! Me encantaría confirmar el siguiente pedido:
//! ▪️ 2x Vestido Lino (Talla: M)
//! ▪️ 1x Top Seda (Talla: S)
//! 💰 Total a Pagar: S/ 309.70
//! Quedo a la espera de los datos de pago.
//! ```

use serde::Serialize;
use url::Url;

use crate::cart::Cart;
use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::validation::validate_whatsapp_number;

const WHATSAPP_BASE_URL: &str = "https://wa.me/";

/// One rendered line of the order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderLine {
    pub quantity: i64,
    pub name: String,
    pub size: String,
}

/// Read-only snapshot of a cart for checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderSummary {
    pub lines: Vec<OrderLine>,
    pub total: Money,
}

impl OrderSummary {
    /// Captures the cart's lines (in cart order) and its total.
    pub fn from_cart(cart: &Cart) -> Self {
        OrderSummary {
            lines: cart
                .lines()
                .iter()
                .map(|l| OrderLine {
                    quantity: l.quantity,
                    name: l.name.clone(),
                    size: l.size.clone(),
                })
                .collect(),
            total: cart.total(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Renders the human-readable order message with a two-decimal total.
    pub fn message(&self, currency_symbol: &str) -> String {
        self.message_with(|total| total.format_with_symbol(currency_symbol))
    }

    /// Renders the order message, formatting the total with `format_total`.
    pub fn message_with(&self, format_total: impl Fn(Money) -> String) -> String {
        let mut message = String::from(
            "Hola Angelica Shop! 🌸\nMe encantaría confirmar el siguiente pedido:\n",
        );
        for line in &self.lines {
            message.push_str(&format!(
                "▪️ {}x {} (Talla: {})\n",
                line.quantity, line.name, line.size
            ));
        }
        message.push_str(&format!(
            "💰 Total a Pagar: {}\n",
            format_total(self.total)
        ));
        message.push_str("Quedo a la espera de los datos de pago.");
        message
    }

    /// Builds the `https://wa.me/<number>?text=<message>` link.
    ///
    /// ## Errors
    /// - [`CoreError::EmptyCart`] when there is nothing to order
    /// - [`CoreError::Validation`] when `number` is not a bare digit string
    pub fn whatsapp_url(&self, number: &str, currency_symbol: &str) -> CoreResult<String> {
        self.whatsapp_url_with(number, |total| total.format_with_symbol(currency_symbol))
    }

    /// Same as [`OrderSummary::whatsapp_url`], with the total rendered by
    /// `format_total` as in [`OrderSummary::message_with`].
    pub fn whatsapp_url_with(
        &self,
        number: &str,
        format_total: impl Fn(Money) -> String,
    ) -> CoreResult<String> {
        if self.is_empty() {
            return Err(CoreError::EmptyCart);
        }
        validate_whatsapp_number(number)?;

        let base = format!("{}{}", WHATSAPP_BASE_URL, number);
        let url = Url::parse_with_params(&base, &[("text", self.message_with(format_total))])
            .map_err(|e| ValidationError::InvalidFormat {
                field: "whatsapp url".to_string(),
                reason: e.to_string(),
            })?;

        Ok(url.into())
    }
}
