use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use super::ErrorBody;
use crate::error::{CatalogError, Result};
use crate::model::{NewProduct, Product};
use crate::storage::SharedStore;
use crate::validation;

/// Get all products
#[utoipa::path(
    get,
    path = "/products",
    tag = "products",
    responses(
        (status = 200, description = "All products in insertion order", body = [Product])
    )
)]
pub async fn list_products(State(store): State<SharedStore>) -> Result<Json<Vec<Product>>> {
    Ok(Json(store.list()?))
}

/// Get a product by ID
///
/// The path segment is parsed here rather than by the extractor so a
/// non-numeric id gets the same structured 400 body as every other rejection.
#[utoipa::path(
    get,
    path = "/products/{id}",
    tag = "products",
    params(
        ("id" = i64, Path, description = "Product identifier")
    ),
    responses(
        (status = 200, description = "The matching product", body = Product),
        (status = 400, description = "Non-numeric id", body = ErrorBody),
        (status = 404, description = "No product with that id", body = ErrorBody)
    )
)]
pub async fn get_product(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
) -> Result<Json<Product>> {
    let id: i64 = id
        .parse()
        .map_err(|_| CatalogError::Validation(format!("Invalid product id: {id}")))?;
    match store.get(id)? {
        Some(product) => Ok(Json(product)),
        None => Err(CatalogError::NotFound),
    }
}

/// Create a product
#[utoipa::path(
    post,
    path = "/products",
    tag = "products",
    request_body = NewProduct,
    responses(
        (status = 201, description = "The created product", body = Product),
        (status = 400, description = "Validation failure", body = ErrorBody)
    )
)]
pub async fn create_product(
    State(store): State<SharedStore>,
    Json(fields): Json<NewProduct>,
) -> Result<(StatusCode, Json<Product>)> {
    validation::validate_new_product(&fields)?;
    let product = store.insert(fields)?;
    Ok((StatusCode::CREATED, Json(product)))
}
