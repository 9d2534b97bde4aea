//! # Store Error Types
//!
//! Error types for store and slot operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error / serde_json::Error                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds the slot key as context                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  AppError (in the CLI) ← Code + message for the shopper                 │
//! │                                                                         │
//! │  EXCEPTION: failures while *hydrating* never surface. The slot is       │
//! │  logged and treated as empty (see `slot::load_slot`).                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use angelica_core::CoreError;
use thiserror::Error;

/// Store operation errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A mutation was attempted before the store read its slot.
    ///
    /// ## When This Occurs
    /// - Calling `add_to_cart` on a `CartStore::new(..)` without `hydrate()`
    ///
    /// Writing at this point would overwrite the shopper's persisted data
    /// with an empty placeholder, so the store refuses.
    #[error("Store for slot '{slot}' has not been hydrated")]
    NotHydrated { slot: &'static str },

    /// The backend failed to read or write a slot.
    ///
    /// ## When This Occurs
    /// - Data directory is read-only
    /// - Disk full
    #[error("Slot '{key}' I/O failed: {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// Slot payload could not be encoded.
    #[error("Slot serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Domain rule violation surfaced through a store operation.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl StoreError {
    /// Creates an Io error for a given slot key.
    pub fn io(key: impl Into<String>, source: std::io::Error) -> Self {
        StoreError::Io {
            key: key.into(),
            source,
        }
    }
}

/// Convenience type alias for Results with StoreError.
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = StoreError::NotHydrated {
            slot: "angelica-cart",
        };
        assert_eq!(
            err.to_string(),
            "Store for slot 'angelica-cart' has not been hydrated"
        );

        let err = StoreError::io(
            "angelica-wishlist",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
        );
        assert_eq!(err.to_string(), "Slot 'angelica-wishlist' I/O failed: read-only");
    }

    #[test]
    fn test_core_error_converts() {
        let err: StoreError = CoreError::EmptyCart.into();
        assert!(matches!(err, StoreError::Core(CoreError::EmptyCart)));
        assert_eq!(err.to_string(), "Cannot check out an empty cart");
    }
}
