//! # Storefront
//!
//! Owns one cart store and one wishlist store over a shared backend,
//! replacing the web app's ambient providers with an explicit object.
//!
//! ```text
//!   Storefront::open(storage)
//!        │
//!        ├── CartStore::new(storage.clone()).hydrate()      "angelica-cart"
//!        └── WishlistStore::new(storage).hydrate()          "angelica-wishlist"
//! ```

use angelica_core::{OrderSummary, WishlistEntry};

use crate::cart_store::CartStore;
use crate::error::StoreResult;
use crate::slot::SlotStorage;
use crate::wishlist_store::WishlistStore;

/// Both stores of one shopper profile.
#[derive(Debug)]
pub struct Storefront<S: SlotStorage + Clone> {
    cart: CartStore<S>,
    wishlist: WishlistStore<S>,
}

impl<S: SlotStorage + Clone> Storefront<S> {
    /// Builds both stores over `storage` and hydrates them.
    pub fn open(storage: S) -> Self {
        let mut cart = CartStore::new(storage.clone());
        let mut wishlist = WishlistStore::new(storage);
        cart.hydrate();
        wishlist.hydrate();

        Storefront { cart, wishlist }
    }

    pub fn cart(&self) -> &CartStore<S> {
        &self.cart
    }

    pub fn cart_mut(&mut self) -> &mut CartStore<S> {
        &mut self.cart
    }

    pub fn wishlist(&self) -> &WishlistStore<S> {
        &self.wishlist
    }

    pub fn wishlist_mut(&mut self) -> &mut WishlistStore<S> {
        &mut self.wishlist
    }

    /// Moves a saved product into the cart in `size`.
    pub fn move_to_cart(&mut self, entry: &WishlistEntry, size: &str) -> StoreResult<()> {
        self.wishlist.move_to_cart(&mut self.cart, entry, size)
    }

    /// Read-only snapshot of the cart for checkout.
    pub fn order_summary(&self) -> OrderSummary {
        OrderSummary::from_cart(self.cart.cart())
    }
}
