//! # Cart Store
//!
//! The shopper's cart plus the cart drawer flag, backed by the
//! `"angelica-cart"` slot.
//!
//! ## Operation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Store Operations                                │
//! │                                                                         │
//! │  Shopper Action           Store Operation         Effect                │
//! │  ──────────────           ───────────────         ──────                │
//! │                                                                         │
//! │  Add to bag ─────────────► add_to_cart() ───────► merge/push + open     │
//! │                                                                         │
//! │  +/- buttons ────────────► update_quantity() ───► qty += delta          │
//! │                                                                         │
//! │  Remove ─────────────────► remove_from_cart() ──► drop (id, size)       │
//! │                                                                         │
//! │  After checkout ─────────► clear_cart() ────────► lines = []            │
//! │                                                                         │
//! │  Bag icon ───────────────► toggle_cart() ───────► drawer only           │
//! │                                                                         │
//! │  NOTE: every line mutation writes the full array to the slot BEFORE     │
//! │        the in-memory cart is replaced. A failed write changes nothing.  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The drawer is session state and is never persisted.

use angelica_core::{Cart, CartLine, Drawer, LineKey, Money, CART_SLOT_KEY};
use tracing::{debug, info};

use crate::error::{StoreError, StoreResult};
use crate::slot::{load_slot, SlotStorage};
use crate::Phase;

/// Cart state bound to a slot backend.
///
/// ## Lifecycle
/// `CartStore::new` does not touch storage. Until [`CartStore::hydrate`]
/// runs, reads report an empty cart and line mutations fail with
/// [`StoreError::NotHydrated`].
#[derive(Debug)]
pub struct CartStore<S: SlotStorage> {
    storage: S,
    cart: Cart,
    drawer: Drawer,
    phase: Phase,
}

impl<S: SlotStorage> CartStore<S> {
    pub fn new(storage: S) -> Self {
        CartStore {
            storage,
            cart: Cart::new(),
            drawer: Drawer::Closed,
            phase: Phase::Uninitialized,
        }
    }

    /// Reads the cart slot. Runs once; later calls are no-ops.
    pub fn hydrate(&mut self) {
        if self.phase.is_hydrated() {
            return;
        }

        self.cart = load_slot(&self.storage, CART_SLOT_KEY);
        self.phase = Phase::Hydrated;

        info!(
            lines = self.cart.len(),
            items = self.cart.count(),
            "Cart hydrated"
        );
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    // =========================================================================
    // Line Mutations
    // =========================================================================

    /// Adds one unit of `line` to the cart and opens the drawer.
    ///
    /// The incoming quantity is ignored: a new variant starts at 1, an
    /// existing one goes up by 1.
    pub fn add_to_cart(&mut self, line: CartLine) -> StoreResult<()> {
        let mut next = self.staged()?;

        debug!(
            product_id = %line.product_id,
            size = %line.size,
            color = ?line.color,
            "Adding to cart"
        );
        next.add(line);

        self.commit(next)?;
        self.drawer.open();
        Ok(())
    }

    /// Removes every line for `(product_id, size)`, whatever its color.
    ///
    /// Returns how many lines were dropped.
    pub fn remove_from_cart(&mut self, product_id: &str, size: &str) -> StoreResult<usize> {
        let mut next = self.staged()?;
        let removed = next.remove(product_id, size);

        debug!(product_id, size, removed, "Removing from cart");
        self.commit(next)?;
        Ok(removed)
    }

    /// Removes the single line identified by `key`, color included.
    pub fn remove_line(&mut self, key: &LineKey) -> StoreResult<bool> {
        let mut next = self.staged()?;
        let removed = next.remove_variant(key);

        debug!(
            product_id = %key.product_id,
            size = %key.size,
            color = ?key.color,
            removed,
            "Removing cart line"
        );
        self.commit(next)?;
        Ok(removed)
    }

    /// Adds `delta` to every line matching `(product_id, size)`.
    ///
    /// Lines that fall to zero or below are dropped. Returns whether any
    /// line matched.
    pub fn update_quantity(
        &mut self,
        product_id: &str,
        size: &str,
        delta: i64,
    ) -> StoreResult<bool> {
        let mut next = self.staged()?;
        let matched = next.update_quantity(product_id, size, delta);

        debug!(product_id, size, delta, matched, "Updating cart quantity");
        self.commit(next)?;
        Ok(matched)
    }

    /// Empties the cart. The drawer keeps its state.
    pub fn clear_cart(&mut self) -> StoreResult<()> {
        let mut next = self.staged()?;
        next.clear();

        debug!("Clearing cart");
        self.commit(next)
    }

    // =========================================================================
    // Drawer
    // =========================================================================

    pub fn open_cart(&mut self) {
        self.drawer.open();
    }

    pub fn close_cart(&mut self) {
        self.drawer.close();
    }

    pub fn toggle_cart(&mut self) {
        self.drawer.toggle();
    }

    pub fn is_cart_open(&self) -> bool {
        self.phase.is_hydrated() && self.drawer.is_open()
    }

    // =========================================================================
    // Reads
    // =========================================================================

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Sum of `price × quantity` over all lines.
    pub fn cart_total(&self) -> Money {
        self.cart.total()
    }

    /// Sum of quantities over all lines.
    pub fn cart_count(&self) -> i64 {
        self.cart.count()
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    /// Copy of the current cart to apply a mutation to.
    fn staged(&self) -> StoreResult<Cart> {
        if !self.phase.is_hydrated() {
            return Err(StoreError::NotHydrated {
                slot: CART_SLOT_KEY,
            });
        }
        Ok(self.cart.clone())
    }

    /// Writes `next` to the slot, then makes it current.
    fn commit(&mut self, next: Cart) -> StoreResult<()> {
        let json = serde_json::to_string(&next)?;
        self.storage.write(CART_SLOT_KEY, &json)?;
        self.cart = next;
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slot::MemoryStorage;

    fn line(id: &str, size: &str, color: Option<&str>, cents: i64) -> CartLine {
        CartLine::new(
            id,
            format!("Product {}", id),
            Money::from_cents(cents),
            "p.png",
            size,
            color.map(String::from),
        )
    }

    fn hydrated(storage: &MemoryStorage) -> CartStore<MemoryStorage> {
        let mut store = CartStore::new(storage.clone());
        store.hydrate();
        store
    }

    fn persisted(storage: &MemoryStorage) -> Cart {
        let raw = storage.read(CART_SLOT_KEY).unwrap().unwrap();
        serde_json::from_str(&raw).unwrap()
    }

    /// Backend whose writes always fail.
    #[derive(Debug, Default)]
    struct ReadOnlyStorage {
        inner: MemoryStorage,
    }

    impl SlotStorage for ReadOnlyStorage {
        fn read(&self, key: &str) -> StoreResult<Option<String>> {
            self.inner.read(key)
        }

        fn write(&mut self, key: &str, _value: &str) -> StoreResult<()> {
            Err(StoreError::io(
                key,
                std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
            ))
        }
    }

    #[test]
    fn test_uninitialized_reads_empty_and_rejects_mutations() {
        let mut storage = MemoryStorage::new();
        storage
            .write(CART_SLOT_KEY, r#"[{"id":"p1","name":"A","price":10,"image":"","size":"M","quantity":2}]"#)
            .unwrap();

        let mut store = CartStore::new(storage.clone());
        store.open_cart();

        assert_eq!(store.phase(), Phase::Uninitialized);
        assert!(store.cart().is_empty());
        assert_eq!(store.cart_count(), 0);
        assert!(store.cart_total().is_zero());
        assert!(!store.is_cart_open());

        let err = store.add_to_cart(line("p2", "S", None, 100)).unwrap_err();
        assert!(matches!(err, StoreError::NotHydrated { slot: CART_SLOT_KEY }));

        // The persisted cart was not overwritten.
        assert_eq!(persisted(&storage).count(), 2);
    }

    #[test]
    fn test_hydrate_restores_persisted_cart() {
        let storage = MemoryStorage::new();
        {
            let mut store = hydrated(&storage);
            store.add_to_cart(line("p1", "M", None, 12990)).unwrap();
            store.add_to_cart(line("p1", "M", None, 12990)).unwrap();
            store.add_to_cart(line("p2", "S", Some("Rosa"), 4990)).unwrap();
        }

        let store = hydrated(&storage);
        assert_eq!(store.phase(), Phase::Hydrated);
        assert_eq!(store.cart().len(), 2);
        assert_eq!(store.cart_count(), 3);
        assert_eq!(store.cart_total(), Money::from_cents(30970));
        // The drawer is not persisted.
        assert!(!store.is_cart_open());
    }

    #[test]
    fn test_hydrate_is_idempotent() {
        let mut storage = MemoryStorage::new();
        let mut store = hydrated(&storage);
        store.add_to_cart(line("p1", "M", None, 1000)).unwrap();

        // Another writer changes the slot; a second hydrate must not reload.
        storage.write(CART_SLOT_KEY, "[]").unwrap();
        store.hydrate();
        assert_eq!(store.cart_count(), 1);
    }

    #[test]
    fn test_corrupt_slot_starts_empty() {
        let mut storage = MemoryStorage::new();
        storage.write(CART_SLOT_KEY, "{{ not a cart").unwrap();

        let mut store = hydrated(&storage);
        assert_eq!(store.phase(), Phase::Hydrated);
        assert!(store.cart().is_empty());

        // The store is usable and overwrites the bad slot on first mutation.
        store.add_to_cart(line("p1", "M", None, 1000)).unwrap();
        assert_eq!(persisted(&storage).count(), 1);
    }

    #[test]
    fn test_every_mutation_persists() {
        let storage = MemoryStorage::new();
        let mut store = hydrated(&storage);

        store.add_to_cart(line("p1", "M", None, 1000)).unwrap();
        store.add_to_cart(line("p2", "L", Some("Negro"), 2000)).unwrap();
        assert_eq!(persisted(&storage), *store.cart());

        store.update_quantity("p1", "M", 4).unwrap();
        assert_eq!(persisted(&storage), *store.cart());
        assert_eq!(store.cart_count(), 6);

        store
            .remove_line(&LineKey::new("p2", "L", Some("Negro".to_string())))
            .unwrap();
        assert_eq!(persisted(&storage), *store.cart());

        store.remove_from_cart("p1", "M").unwrap();
        assert_eq!(persisted(&storage), *store.cart());
        assert!(store.cart().is_empty());
    }

    #[test]
    fn test_add_opens_drawer_clear_leaves_it() {
        let storage = MemoryStorage::new();
        let mut store = hydrated(&storage);
        assert!(!store.is_cart_open());

        store.add_to_cart(line("p1", "M", None, 1000)).unwrap();
        assert!(store.is_cart_open());

        store.clear_cart().unwrap();
        assert!(store.is_cart_open());
        assert!(store.cart().is_empty());
        assert_eq!(persisted(&storage), Cart::new());

        store.close_cart();
        store.clear_cart().unwrap();
        assert!(!store.is_cart_open());
    }

    #[test]
    fn test_drawer_toggle() {
        let mut store = hydrated(&MemoryStorage::new());
        store.toggle_cart();
        assert!(store.is_cart_open());
        store.toggle_cart();
        assert!(!store.is_cart_open());
        store.open_cart();
        store.open_cart();
        assert!(store.is_cart_open());
    }

    #[test]
    fn test_remove_and_update_ignore_color() {
        let mut store = hydrated(&MemoryStorage::new());
        store.add_to_cart(line("p1", "M", Some("Rosa"), 1000)).unwrap();
        store.add_to_cart(line("p1", "M", Some("Azul"), 1000)).unwrap();
        store.add_to_cart(line("p1", "S", Some("Rosa"), 1000)).unwrap();

        assert!(store.update_quantity("p1", "M", 1).unwrap());
        assert_eq!(store.cart_count(), 5);

        assert_eq!(store.remove_from_cart("p1", "M").unwrap(), 2);
        assert_eq!(store.cart().len(), 1);
        assert_eq!(store.cart().lines()[0].size, "S");
    }

    #[test]
    fn test_update_to_zero_removes_line() {
        let mut store = hydrated(&MemoryStorage::new());
        store.add_to_cart(line("p1", "M", None, 1000)).unwrap();

        assert!(store.update_quantity("p1", "M", -1).unwrap());
        assert!(store.cart().is_empty());
        assert!(!store.update_quantity("p1", "M", 1).unwrap());
    }

    #[test]
    fn test_failed_write_leaves_state_unchanged() {
        let mut store = CartStore::new(ReadOnlyStorage::default());
        store.hydrate();

        let err = store.add_to_cart(line("p1", "M", None, 1000)).unwrap_err();
        assert!(matches!(err, StoreError::Io { .. }));
        assert!(store.cart().is_empty());
        assert!(!store.is_cart_open());
    }

    #[test]
    fn test_hydrate_huge_quantity_slot() {
        let mut storage = MemoryStorage::new();
        storage
            .write(
                CART_SLOT_KEY,
                r#"[{"id":"p1","name":"A","price":10,"image":"","size":"M","quantity":9223372036854775807},{"id":"p2","name":"B","price":20,"image":"","size":"S","quantity":5}]"#,
            )
            .unwrap();

        let store = hydrated(&storage);
        assert_eq!(store.cart().len(), 2);
        assert_eq!(store.cart_count(), i64::MAX);
        assert_eq!(store.cart_total(), Money::from_cents(i64::MAX));
    }

    #[test]
    fn test_huge_update_keeps_total_bounded() {
        let storage = MemoryStorage::new();
        let mut store = hydrated(&storage);
        store.add_to_cart(line("p1", "M", None, 12990)).unwrap();

        assert!(store.update_quantity("p1", "M", i64::MAX / 50).unwrap());
        assert_eq!(store.cart_total(), Money::from_cents(i64::MAX));
        assert_eq!(persisted(&storage).count(), 1 + i64::MAX / 50);
    }
}
