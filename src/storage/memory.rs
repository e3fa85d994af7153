use std::sync::RwLock;

use crate::error::{CatalogError, Result};
use crate::model::{NewProduct, Product};

use super::ProductStore;

/// In-memory product store.
///
/// One lock guards both the records and the id counter, so the
/// read-counter/append sequence in [`ProductStore::insert`] is atomic even
/// under parallel requests from the two servers. Ids are monotonic and never
/// derived from the collection length; deriving them from length would hand
/// out duplicates as soon as deletion semantics were ever introduced.
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

struct Inner {
    products: Vec<Product>,
    next_id: i64,
}

impl MemoryStore {
    /// An empty store; ids start at 1.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                products: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// A store pre-populated with the two demo records every fresh process
    /// starts from.
    pub fn with_seed_data() -> Self {
        let store = Self::new();
        let seeds = [
            NewProduct::new("T-shirt", 20.5)
                .with_description("Cotton T-shirt")
                .with_tax(2.0),
            NewProduct::new("Shoes", 50.0)
                .with_description("Sport shoes")
                .with_tax(5.0),
        ];
        {
            let mut inner = store
                .inner
                .write()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            for fields in seeds {
                let id = inner.next_id;
                inner.next_id += 1;
                inner.products.push(fields.into_product(id));
            }
        }
        store
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductStore for MemoryStore {
    fn list(&self) -> Result<Vec<Product>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| CatalogError::Store("store lock poisoned".to_string()))?;
        Ok(inner.products.clone())
    }

    fn get(&self, id: i64) -> Result<Option<Product>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| CatalogError::Store("store lock poisoned".to_string()))?;
        Ok(inner.products.iter().find(|p| p.id == id).cloned())
    }

    fn insert(&self, fields: NewProduct) -> Result<Product> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| CatalogError::Store("store lock poisoned".to_string()))?;
        let id = inner.next_id;
        inner.next_id += 1;
        let product = fields.into_product(id);
        inner.products.push(product.clone());
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_data() {
        let store = MemoryStore::with_seed_data();
        let products = store.list().unwrap();

        assert_eq!(products.len(), 2);
        assert_eq!(products[0].id, 1);
        assert_eq!(products[0].name, "T-shirt");
        assert_eq!(products[1].id, 2);
        assert_eq!(products[1].name, "Shoes");
    }

    #[test]
    fn test_insert_assigns_monotonic_ids() {
        let store = MemoryStore::with_seed_data();

        let cap = store.insert(NewProduct::new("Cap", 9.99)).unwrap();
        let hat = store.insert(NewProduct::new("Hat", 10.0)).unwrap();

        assert_eq!(cap.id, 3);
        assert_eq!(hat.id, 4);
        assert_eq!(store.list().unwrap().len(), 4);
    }

    #[test]
    fn test_insert_preserves_optional_fields() {
        let store = MemoryStore::new();

        let bare = store.insert(NewProduct::new("Hat", 10.0)).unwrap();
        assert_eq!(bare.description, None);
        assert_eq!(bare.tax, None);

        let full = store
            .insert(
                NewProduct::new("Scarf", 12.0)
                    .with_description("Wool scarf")
                    .with_tax(1.2),
            )
            .unwrap();
        assert_eq!(full.description.as_deref(), Some("Wool scarf"));
        assert_eq!(full.tax, Some(1.2));
    }

    #[test]
    fn test_get_returns_inserted_record() {
        let store = MemoryStore::with_seed_data();
        let created = store.insert(NewProduct::new("Cap", 9.99)).unwrap();

        let fetched = store.get(created.id).unwrap().unwrap();
        assert_eq!(fetched, created);
    }

    #[test]
    fn test_get_missing_id() {
        let store = MemoryStore::with_seed_data();
        assert!(store.get(999_999).unwrap().is_none());
    }

    #[test]
    fn test_empty_store_starts_at_id_one() {
        let store = MemoryStore::new();
        let first = store.insert(NewProduct::new("Hat", 10.0)).unwrap();
        assert_eq!(first.id, 1);
    }

    #[test]
    fn test_parallel_inserts_never_duplicate_ids() {
        use std::sync::Arc;

        let store = Arc::new(MemoryStore::with_seed_data());
        let mut handles = Vec::new();

        for i in 0..8 {
            let store = Arc::clone(&store);
            handles.push(std::thread::spawn(move || {
                for j in 0..50 {
                    store
                        .insert(NewProduct::new(format!("p-{i}-{j}"), 1.0))
                        .unwrap();
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }

        let mut ids: Vec<i64> = store.list().unwrap().iter().map(|p| p.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 2 + 8 * 50);
    }
}
