//! # Wishlist Store
//!
//! Saved products plus the wishlist drawer flag, backed by the
//! `"angelica-wishlist"` slot. Follows the same lifecycle and
//! mutate-then-persist rule as [`CartStore`].
//!
//! ## Move To Cart
//! ```text
//!   move_to_cart(cart, entry, size)
//!        │
//!        ├── entry.to_cart_line(size) ──► cart.add_to_cart(line)
//!        │                                     │
//!        │                          Err ◄──────┤──────► Ok
//!        │                           │                   │
//!        │                  entry stays saved    remove_from_wishlist(id)
//!        ▼
//! ```

use angelica_core::{CoreError, Drawer, WishlistEntry, Wishlist, WISHLIST_SLOT_KEY};
use tracing::{debug, info};

use crate::cart_store::CartStore;
use crate::error::{StoreError, StoreResult};
use crate::slot::{load_slot, SlotStorage};
use crate::Phase;

/// Wishlist state bound to a slot backend.
#[derive(Debug)]
pub struct WishlistStore<S: SlotStorage> {
    storage: S,
    wishlist: Wishlist,
    drawer: Drawer,
    phase: Phase,
}

impl<S: SlotStorage> WishlistStore<S> {
    pub fn new(storage: S) -> Self {
        WishlistStore {
            storage,
            wishlist: Wishlist::new(),
            drawer: Drawer::Closed,
            phase: Phase::Uninitialized,
        }
    }

    /// Reads the wishlist slot. Runs once; later calls are no-ops.
    pub fn hydrate(&mut self) {
        if self.phase.is_hydrated() {
            return;
        }

        self.wishlist = load_slot(&self.storage, WISHLIST_SLOT_KEY);
        self.phase = Phase::Hydrated;

        info!(entries = self.wishlist.count(), "Wishlist hydrated");
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    // =========================================================================
    // Entry Mutations
    // =========================================================================

    /// Saves `entry`. Saving an already saved product changes nothing.
    ///
    /// Returns whether the entry was newly saved.
    pub fn add_to_wishlist(&mut self, entry: WishlistEntry) -> StoreResult<bool> {
        let mut next = self.staged()?;
        let added = next.add(entry);

        debug!(added, "Adding to wishlist");
        self.commit(next)?;
        Ok(added)
    }

    /// Forgets `product_id`. Returns whether it was saved.
    pub fn remove_from_wishlist(&mut self, product_id: &str) -> StoreResult<bool> {
        let mut next = self.staged()?;
        let removed = next.remove(product_id);

        debug!(product_id, removed, "Removing from wishlist");
        self.commit(next)?;
        Ok(removed)
    }

    /// Saves `entry` if absent, forgets it if present.
    ///
    /// Returns whether the product is saved after the call.
    pub fn toggle_wishlist_item(&mut self, entry: WishlistEntry) -> StoreResult<bool> {
        let mut next = self.staged()?;
        let product_id = entry.product_id.clone();
        let saved = next.toggle(entry);

        debug!(product_id = %product_id, saved, "Toggling wishlist item");
        self.commit(next)?;
        Ok(saved)
    }

    /// Adds `entry` to `cart` in `size`, then forgets it here.
    ///
    /// ## Errors
    /// - [`StoreError::NotHydrated`] if either store is not hydrated
    /// - [`CoreError::SizeRequired`] for an empty size
    /// - any cart write failure; the entry then stays saved
    pub fn move_to_cart<C: SlotStorage>(
        &mut self,
        cart: &mut CartStore<C>,
        entry: &WishlistEntry,
        size: &str,
    ) -> StoreResult<()> {
        self.staged()?;
        if size.trim().is_empty() {
            return Err(CoreError::SizeRequired {
                product_id: entry.product_id.clone(),
            }
            .into());
        }

        debug!(product_id = %entry.product_id, size, "Moving wishlist item to cart");
        cart.add_to_cart(entry.to_cart_line(size))?;
        self.remove_from_wishlist(&entry.product_id)?;
        Ok(())
    }

    // =========================================================================
    // Drawer
    // =========================================================================

    pub fn open_wishlist(&mut self) {
        self.drawer.open();
    }

    pub fn close_wishlist(&mut self) {
        self.drawer.close();
    }

    pub fn toggle_wishlist_drawer(&mut self) {
        self.drawer.toggle();
    }

    pub fn is_wishlist_open(&self) -> bool {
        self.phase.is_hydrated() && self.drawer.is_open()
    }

    // =========================================================================
    // Reads
    // =========================================================================

    pub fn wishlist(&self) -> &Wishlist {
        &self.wishlist
    }

    pub fn is_in_wishlist(&self, product_id: &str) -> bool {
        self.wishlist.contains(product_id)
    }

    pub fn wishlist_count(&self) -> usize {
        self.wishlist.count()
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    fn staged(&self) -> StoreResult<Wishlist> {
        if !self.phase.is_hydrated() {
            return Err(StoreError::NotHydrated {
                slot: WISHLIST_SLOT_KEY,
            });
        }
        Ok(self.wishlist.clone())
    }

    fn commit(&mut self, next: Wishlist) -> StoreResult<()> {
        let json = serde_json::to_string(&next)?;
        self.storage.write(WISHLIST_SLOT_KEY, &json)?;
        self.wishlist = next;
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
