//! Data model for the product catalog.
//!
//! [`Product`] is the only entity; [`NewProduct`] carries the caller-supplied
//! fields of a product before the store assigns an id.

mod product;

pub use product::{NewProduct, Product};
