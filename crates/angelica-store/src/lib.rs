//! # angelica-store: Durable Cart and Wishlist Stores
//!
//! Binds the pure reducers from `angelica-core` to durable slots and adds
//! the drawer flags and the hydration lifecycle.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       angelica-store                                    │
//! │                                                                         │
//! │   ┌──────────────────────────── Storefront ──────────────────────────┐  │
//! │   │                                                                  │  │
//! │   │   ┌────────────────────┐   move_to_cart   ┌──────────────────┐   │  │
//! │   │   │   WishlistStore    │ ───────────────► │    CartStore     │   │  │
//! │   │   │   Wishlist+Drawer  │                  │   Cart+Drawer    │   │  │
//! │   │   └─────────┬──────────┘                  └────────┬─────────┘   │  │
//! │   └─────────────┼──────────────────────────────────────┼─────────────┘  │
//! │                 ▼                                      ▼                │
//! │        "angelica-wishlist"        SlotStorage     "angelica-cart"       │
//! │                             (MemoryStorage / FileStorage)               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Lifecycle
//! ```text
//!   new(storage) ──► UNINITIALIZED ──── hydrate() ────► HYDRATED
//!                    reads: empty, closed               reads: real state
//!                    mutations: NotHydrated             mutations: persist
//! ```

pub mod cart_store;
pub mod error;
pub mod slot;
pub mod storefront;
pub mod wishlist_store;

pub use cart_store::CartStore;
pub use error::{StoreError, StoreResult};
pub use slot::{load_slot, FileStorage, MemoryStorage, SlotStorage};
pub use storefront::Storefront;
pub use wishlist_store::WishlistStore;

/// Hydration phase of a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Constructed; the slot has not been read.
    #[default]
    Uninitialized,
    /// The slot was read (or found missing/corrupt and treated as empty).
    Hydrated,
}

impl Phase {
    #[inline]
    pub const fn is_hydrated(&self) -> bool {
        matches!(self, Phase::Hydrated)
    }
}
