//! In-memory storage layer for products.
//!
//! The store is the single source of truth shared by reference across both API
//! layers. It is deliberately small: three operations behind the
//! [`ProductStore`] trait so the in-memory backend can be swapped for a real
//! persistence backend without touching the API layers.
//!
//! ## Components
//!
//! - [`ProductStore`]: `list` / `get` / `insert` operations
//! - [`MemoryStore`]: the lock-guarded in-memory implementation
//! - [`SharedStore`]: the handle both servers hold

mod memory;

pub use memory::MemoryStore;

use std::sync::Arc;

use crate::error::Result;
use crate::model::{NewProduct, Product};

/// Storage interface shared by the REST and GraphQL layers.
///
/// Implementations own id assignment; callers never pick ids. The store does
/// not validate input, that happens at the API boundary before `insert` is
/// reached.
pub trait ProductStore: Send + Sync {
    /// All products in insertion order.
    fn list(&self) -> Result<Vec<Product>>;

    /// The product with the given id, or `None` if absent.
    fn get(&self, id: i64) -> Result<Option<Product>>;

    /// Assigns the next id, appends, and returns the new record.
    fn insert(&self, fields: NewProduct) -> Result<Product>;
}

/// Handle to the one store instance both servers share.
pub type SharedStore = Arc<dyn ProductStore>;
