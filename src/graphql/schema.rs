use async_graphql::{Context, EmptySubscription, Object, Schema};

use crate::model::NewProduct;
use crate::storage::SharedStore;
use crate::validation;

use super::types::Product;

pub type CatalogSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(store: SharedStore) -> CatalogSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(store)
        .finish()
}

fn get_store<'a>(ctx: &'a Context<'_>) -> &'a SharedStore {
    ctx.data::<SharedStore>().unwrap()
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Get all products
    async fn get_products(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Product>> {
        let store = get_store(ctx);
        let products = store.list()?;
        Ok(products.into_iter().map(|p| p.into()).collect())
    }

    /// Get a single product by ID, or null if absent
    async fn get_product_by_id(
        &self,
        ctx: &Context<'_>,
        id: i64,
    ) -> async_graphql::Result<Option<Product>> {
        let store = get_store(ctx);
        Ok(store.get(id)?.map(|p| p.into()))
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Create a new product; the store assigns the id
    async fn create_product(
        &self,
        ctx: &Context<'_>,
        name: String,
        description: Option<String>,
        price: f64,
        tax: Option<f64>,
    ) -> async_graphql::Result<Product> {
        let store = get_store(ctx);
        let fields = NewProduct {
            name,
            description,
            price,
            tax,
        };
        validation::validate_new_product(&fields)?;
        let product = store.insert(fields)?;
        Ok(product.into())
    }
}
