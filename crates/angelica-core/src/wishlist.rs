//! # Wishlist
//!
//! The pure wishlist reducer: saved products in the order they were saved,
//! unique by product id.
//!
//! Unlike the cart, adding is idempotent and `toggle` is symmetric:
//!
//! ```text
//!   add(p)    absent ──► [.., p]      present ──► unchanged
//!   toggle(p) absent ──► [.., p]      present ──► removed
//! ```

use serde::{Deserialize, Deserializer, Serialize};

use crate::types::WishlistEntry;

/// The shopper's wishlist.
///
/// Serializes as the bare JSON array of entries. Deserializing keeps the
/// first entry for any repeated product id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Wishlist {
    entries: Vec<WishlistEntry>,
}

impl Wishlist {
    pub fn new() -> Self {
        Wishlist {
            entries: Vec::new(),
        }
    }

    /// Builds a wishlist from raw entries, dropping repeated ids.
    pub fn from_entries(entries: impl IntoIterator<Item = WishlistEntry>) -> Self {
        let mut wishlist = Wishlist::new();
        for entry in entries {
            wishlist.add(entry);
        }
        wishlist
    }

    /// Appends `entry` unless its product id is already saved.
    ///
    /// Returns whether the wishlist changed.
    pub fn add(&mut self, entry: WishlistEntry) -> bool {
        if self.contains(&entry.product_id) {
            return false;
        }
        self.entries.push(entry);
        true
    }

    /// Removes the entry for `product_id`. Returns whether one was removed.
    pub fn remove(&mut self, product_id: &str) -> bool {
        let initial_len = self.entries.len();
        self.entries.retain(|e| e.product_id != product_id);
        self.entries.len() != initial_len
    }

    /// Removes the entry if present, appends it otherwise.
    ///
    /// Returns `true` when the entry is saved after the call.
    pub fn toggle(&mut self, entry: WishlistEntry) -> bool {
        if self.remove(&entry.product_id) {
            return false;
        }
        self.entries.push(entry);
        true
    }

    pub fn contains(&self, product_id: &str) -> bool {
        self.entries.iter().any(|e| e.product_id == product_id)
    }

    pub fn get(&self, product_id: &str) -> Option<&WishlistEntry> {
        self.entries.iter().find(|e| e.product_id == product_id)
    }

    /// Entries in the order they were saved.
    pub fn entries(&self) -> &[WishlistEntry] {
        &self.entries
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'de> Deserialize<'de> for Wishlist {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Vec::<WishlistEntry>::deserialize(deserializer).map(Wishlist::from_entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn entry(id: &str) -> WishlistEntry {
        WishlistEntry::new(id, format!("Product {}", id), Money::from_cents(5990), "w.png")
    }

    #[test]
    fn test_add_is_idempotent() {
        let mut wishlist = Wishlist::new();
        assert!(wishlist.add(entry("p1")));
        assert!(!wishlist.add(entry("p1")));

        assert_eq!(wishlist.count(), 1);
    }

    #[test]
    fn test_toggle_twice_is_noop() {
        let mut wishlist = Wishlist::new();
        wishlist.add(entry("p0"));
        let before = wishlist.clone();

        assert!(wishlist.toggle(entry("p1")));
        assert!(wishlist.contains("p1"));

        assert!(!wishlist.toggle(entry("p1")));
        assert!(!wishlist.contains("p1"));
        assert_eq!(wishlist, before);
    }

    #[test]
    fn test_remove() {
        let mut wishlist = Wishlist::new();
        wishlist.add(entry("p1"));
        wishlist.add(entry("p2"));

        assert!(wishlist.remove("p1"));
        assert!(!wishlist.remove("p1"));
        assert_eq!(wishlist.entries()[0].product_id, "p2");
    }

    #[test]
    fn test_insertion_order() {
        let mut wishlist = Wishlist::new();
        for id in ["p3", "p1", "p2"] {
            wishlist.add(entry(id));
        }
        let ids: Vec<&str> = wishlist.entries().iter().map(|e| e.product_id.as_str()).collect();
        assert_eq!(ids, ["p3", "p1", "p2"]);
    }

    #[test]
    fn test_round_trip_and_dedup_on_read() {
        let mut wishlist = Wishlist::new();
        wishlist.add(entry("p1"));
        wishlist.add(entry("p2"));

        let json = serde_json::to_string(&wishlist).unwrap();
        assert!(json.starts_with('['));
        let restored: Wishlist = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, wishlist);

        let duplicated = r#"[
            {"id":"p1","name":"A","price":10,"image":"a.png"},
            {"id":"p1","name":"B","price":20,"image":"b.png"}
        ]"#;
        let restored: Wishlist = serde_json::from_str(duplicated).unwrap();
        assert_eq!(restored.count(), 1);
        assert_eq!(restored.get("p1").unwrap().name, "A");
    }
}
