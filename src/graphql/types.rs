use async_graphql::SimpleObject;

use crate::model::Product as ModelProduct;

#[derive(SimpleObject)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub tax: Option<f64>,
}

impl From<ModelProduct> for Product {
    fn from(p: ModelProduct) -> Self {
        Self {
            id: p.id,
            name: p.name,
            description: p.description,
            price: p.price,
            tax: p.tax,
        }
    }
}
