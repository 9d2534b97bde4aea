//! # Cart
//!
//! The pure cart reducer: an ordered list of [`CartLine`]s plus the rules
//! for adding, removing and re-quantifying them.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Shopper Action            Operation                  Cart Change       │
//! │  ──────────────            ─────────                  ───────────       │
//! │                                                                         │
//! │  "Añadir al carrito" ────► add(line) ────────► new key: push, qty = 1   │
//! │                                                same key: qty += 1       │
//! │                                                                         │
//! │  − / + in drawer ────────► update_quantity() ─► qty += delta            │
//! │                                                qty ≤ 0: line removed    │
//! │                                                                         │
//! │  Trash icon ─────────────► remove(id, size) ──► all colors of that size │
//! │                                                                         │
//! │  After checkout ─────────► clear() ──────────► []                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Two Identities
//! A line is unique by `(product_id, size, color)` ([`LineKey`]). Removal and
//! quantity updates match on `(product_id, size)` only, so they touch every
//! color variant of that size. This mirrors what shoppers already have in
//! their persisted carts; [`Cart::remove_variant`] is the exact-key removal.

use serde::{Deserialize, Deserializer, Serialize};

use crate::money::Money;
use crate::types::CartLine;

// =============================================================================
// Line Key
// =============================================================================

/// The uniqueness key of a cart line.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LineKey {
    pub product_id: String,
    pub size: String,
    pub color: Option<String>,
}

impl LineKey {
    pub fn new(
        product_id: impl Into<String>,
        size: impl Into<String>,
        color: Option<String>,
    ) -> Self {
        LineKey {
            product_id: product_id.into(),
            size: size.into(),
            color,
        }
    }

    /// True when `line` has exactly this identity.
    pub fn matches(&self, line: &CartLine) -> bool {
        line.product_id == self.product_id && line.size == self.size && line.color == self.color
    }
}

impl CartLine {
    /// Returns this line's uniqueness key.
    pub fn key(&self) -> LineKey {
        LineKey::new(self.product_id.clone(), self.size.clone(), self.color.clone())
    }

    fn same_identity(&self, other: &CartLine) -> bool {
        self.product_id == other.product_id && self.size == other.size && self.color == other.color
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
///
/// ## Invariants
/// - Lines are unique by `(product_id, size, color)`
/// - Every line has `quantity ≥ 1`
/// - Order is the order lines were first added; quantity changes keep it
///
/// Serializes as the bare JSON array of lines. Deserializing re-establishes
/// the invariants: non-positive quantities are dropped and duplicate keys
/// are merged into the first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { lines: Vec::new() }
    }

    /// Builds a cart from raw lines, restoring the invariants.
    pub fn from_lines(lines: impl IntoIterator<Item = CartLine>) -> Self {
        let mut cart = Cart::new();
        for line in lines {
            if line.quantity < 1 {
                continue;
            }
            match cart.lines.iter_mut().find(|l| l.same_identity(&line)) {
                Some(existing) => existing.quantity = existing.quantity.saturating_add(line.quantity),
                None => cart.lines.push(line),
            }
        }
        cart
    }

    /// Adds a line, or bumps the quantity of the line with the same key.
    ///
    /// ## Behavior
    /// - New key: appended with quantity 1, whatever `line.quantity` says
    /// - Existing key: that line's quantity increases by exactly 1; the
    ///   incoming line's other fields are ignored
    pub fn add(&mut self, mut line: CartLine) {
        if let Some(existing) = self.lines.iter_mut().find(|l| l.same_identity(&line)) {
            existing.quantity = existing.quantity.saturating_add(1);
            return;
        }

        line.quantity = 1;
        self.lines.push(line);
    }

    /// Removes every line of `product_id` in `size`, whatever its color.
    ///
    /// Returns the number of lines removed (0 is a no-op, not an error).
    pub fn remove(&mut self, product_id: &str, size: &str) -> usize {
        let initial_len = self.lines.len();
        self.lines.retain(|l| !l.matches_size(product_id, size));
        initial_len - self.lines.len()
    }

    /// Removes exactly the line with `key`. Returns whether one was removed.
    pub fn remove_variant(&mut self, key: &LineKey) -> bool {
        let initial_len = self.lines.len();
        self.lines.retain(|l| !key.matches(l));
        self.lines.len() != initial_len
    }

    /// Adds `delta` to the quantity of every line of `product_id` in `size`.
    ///
    /// ## Behavior
    /// - New quantity ≤ 0: the line is deleted
    /// - Otherwise the quantity is set to the new value
    /// - No match: no-op
    ///
    /// Returns whether any line matched.
    pub fn update_quantity(&mut self, product_id: &str, size: &str, delta: i64) -> bool {
        let mut matched = false;
        self.lines.retain_mut(|line| {
            if !line.matches_size(product_id, size) {
                return true;
            }
            matched = true;
            let new_qty = line.quantity.saturating_add(delta);
            if new_qty <= 0 {
                return false;
            }
            line.quantity = new_qty;
            true
        });
        matched
    }

    /// Clears all lines from the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Finds the line with `key`.
    pub fn find(&self, key: &LineKey) -> Option<&CartLine> {
        self.lines.iter().find(|l| key.matches(l))
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Σ quantity over all lines (the badge count), saturating at `i64::MAX`.
    pub fn count(&self) -> i64 {
        self.lines
            .iter()
            .fold(0i64, |acc, l| acc.saturating_add(l.quantity))
    }

    /// Σ price × quantity over all lines, saturating like [`Money`] does.
    pub fn total(&self) -> Money {
        self.lines.iter().map(CartLine::line_total).sum()
    }
}

impl<'de> Deserialize<'de> for Cart {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Vec::<CartLine>::deserialize(deserializer).map(Cart::from_lines)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
