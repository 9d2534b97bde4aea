//! # Domain Types
//!
//! Core domain types shared by the cart, the wishlist and the catalog.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │    CartLine     │   │ WishlistEntry   │       │
//! │  │  (CMS record)   │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  _id            │──►│  id             │   │  id             │       │
//! │  │  name, price    │   │  name, price    │◄──│  name, price    │       │
//! │  │  images[]       │   │  image          │   │  image          │       │
//! │  │  sizes[]        │   │  size, color?   │   └─────────────────┘       │
//! │  │  colors[]       │   │  quantity ≥ 1   │                             │
//! │  └─────────────────┘   └─────────────────┘   ┌─────────────────┐       │
//! │                                              │     Drawer      │       │
//! │                                              │  Closed | Open  │       │
//! │                                              └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! Cart lines and wishlist entries copy name, price and image from the
//! product when they are created. The drawers render from these copies and
//! never look the product up again.

use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::{self, Money};
use crate::validation::{validate_price, validate_product_id, validate_size};

// =============================================================================
// Cart Line
// =============================================================================

/// One purchasable line in the cart.
///
/// ## Persisted Shape
/// ```json
/// {"id":"p1","name":"Dress","price":100,"image":"i.png","size":"M","quantity":2}
/// ```
/// `color` is omitted when absent, exactly as the web storefront writes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CartLine {
    /// Catalog product id.
    #[serde(rename = "id")]
    pub product_id: String,

    /// Product name at time of adding (frozen).
    pub name: String,

    /// Unit price at time of adding (frozen).
    #[serde(with = "money::decimal")]
    #[ts(type = "number")]
    pub price: Money,

    /// Display image reference.
    pub image: String,

    /// Required variant dimension.
    pub size: String,

    /// Optional variant dimension.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub color: Option<String>,

    /// Always ≥ 1 while the line is in a cart.
    pub quantity: i64,
}

impl CartLine {
    /// Creates a line with quantity 1.
    pub fn new(
        product_id: impl Into<String>,
        name: impl Into<String>,
        price: Money,
        image: impl Into<String>,
        size: impl Into<String>,
        color: Option<String>,
    ) -> Self {
        CartLine {
            product_id: product_id.into(),
            name: name.into(),
            price,
            image: image.into(),
            size: size.into(),
            color,
            quantity: 1,
        }
    }

    /// Line total (unit price × quantity).
    #[inline]
    pub fn line_total(&self) -> Money {
        self.price.multiply_quantity(self.quantity)
    }

    /// True when this line belongs to `product_id` in `size`, whatever its color.
    #[inline]
    pub fn matches_size(&self, product_id: &str, size: &str) -> bool {
        self.product_id == product_id && self.size == size
    }
}

// =============================================================================
// Wishlist Entry
// =============================================================================

/// One saved product. No quantity and no variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct WishlistEntry {
    #[serde(rename = "id")]
    pub product_id: String,
    pub name: String,
    #[serde(with = "money::decimal")]
    #[ts(type = "number")]
    pub price: Money,
    pub image: String,
}

impl WishlistEntry {
    pub fn new(
        product_id: impl Into<String>,
        name: impl Into<String>,
        price: Money,
        image: impl Into<String>,
    ) -> Self {
        WishlistEntry {
            product_id: product_id.into(),
            name: name.into(),
            price,
            image: image.into(),
        }
    }

    /// Builds the cart line used by "move to cart": the entry's snapshot,
    /// the chosen size, no color, quantity 1.
    pub fn to_cart_line(&self, size: impl Into<String>) -> CartLine {
        CartLine::new(
            self.product_id.clone(),
            self.name.clone(),
            self.price,
            self.image.clone(),
            size,
            None,
        )
    }
}

// =============================================================================
// Drawer
// =============================================================================

/// Visibility of a side drawer (cart or wishlist).
///
/// ```text
///            open (idempotent)
///   ┌────────┐ ──────────────► ┌────────┐
///   │ CLOSED │                 │  OPEN  │
///   └────────┘ ◄────────────── └────────┘
///            close (idempotent)
///
///   toggle: CLOSED ⇄ OPEN
/// ```
///
/// Never persisted: every session starts closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Drawer {
    #[default]
    Closed,
    Open,
}

impl Drawer {
    #[inline]
    pub fn open(&mut self) {
        *self = Drawer::Open;
    }

    #[inline]
    pub fn close(&mut self) {
        *self = Drawer::Closed;
    }

    #[inline]
    pub fn toggle(&mut self) {
        *self = match self {
            Drawer::Closed => Drawer::Open,
            Drawer::Open => Drawer::Closed,
        };
    }

    #[inline]
    pub const fn is_open(&self) -> bool {
        matches!(self, Drawer::Open)
    }
}

// =============================================================================
// Product (CMS record)
// =============================================================================

/// A catalog product as returned by the CMS product query.
///
/// Optional arrays may come back as `null`; they deserialize as empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: String,

    pub name: String,

    #[serde(default)]
    pub slug: Option<String>,

    #[serde(with = "money::decimal")]
    #[ts(type = "number")]
    pub price: Money,

    #[serde(default)]
    pub description: Option<String>,

    /// Long-form copy shown under the product story section.
    #[serde(default)]
    pub story: Option<String>,

    #[serde(default)]
    pub is_sold_out: Option<bool>,

    /// Image URLs, first one is the primary image.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub images: Vec<String>,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub sizes: Vec<String>,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub colors: Vec<String>,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub related_products: Vec<Product>,

    #[serde(default)]
    pub category: Option<String>,
}

impl Product {
    /// First image URL, or an empty reference when the product has none.
    pub fn primary_image(&self) -> &str {
        self.images.first().map(String::as_str).unwrap_or_default()
    }

    pub fn is_sold_out(&self) -> bool {
        self.is_sold_out.unwrap_or(false)
    }

    /// Products without a size list accept any size label.
    pub fn offers_size(&self, size: &str) -> bool {
        self.sizes.is_empty() || self.sizes.iter().any(|s| s == size)
    }

    pub fn offers_color(&self, color: &str) -> bool {
        self.colors.iter().any(|c| c == color)
    }

    /// Maps the product into a cart line for the chosen variant.
    ///
    /// ## Rules
    /// - sold out products cannot be added
    /// - a size is always required and must be one the product lists
    /// - a color, when given, must be one the product lists
    pub fn cart_line(&self, size: &str, color: Option<&str>) -> CoreResult<CartLine> {
        validate_product_id(&self.id)?;
        validate_price(self.price)?;

        if self.is_sold_out() {
            return Err(CoreError::SoldOut {
                product_id: self.id.clone(),
                name: self.name.clone(),
            });
        }

        if validate_size(size).is_err() {
            return Err(CoreError::SizeRequired {
                product_id: self.id.clone(),
            });
        }

        if !self.offers_size(size) {
            return Err(CoreError::SizeUnavailable {
                product_id: self.id.clone(),
                size: size.to_string(),
            });
        }

        if let Some(color) = color {
            if !self.offers_color(color) {
                return Err(CoreError::ColorUnavailable {
                    product_id: self.id.clone(),
                    color: color.to_string(),
                });
            }
        }

        Ok(CartLine::new(
            self.id.clone(),
            self.name.clone(),
            self.price,
            self.primary_image(),
            size,
            color.map(str::to_string),
        ))
    }

    /// Maps the product into a wishlist entry.
    pub fn wishlist_entry(&self) -> WishlistEntry {
        WishlistEntry::new(
            self.id.clone(),
            self.name.clone(),
            self.price,
            self.primary_image(),
        )
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Vec<T>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

// =============================================================================
// Unit Tests
// =============================================================================
