//! REST API for the product catalog.
//!
//! Serves the same shared store as the GraphQL layer through path-based
//! routing, plus interactive API documentation:
//!
//! - `GET /products` — all products
//! - `GET /products/{id}` — one product, 404 with `{"message": "Product not found"}` if absent
//! - `POST /products` — create a product, 201 with the stored record
//! - `GET /api-docs` — Swagger UI over the generated OpenAPI document
//!
//! The OpenAPI document is derived from the handler annotations and the model
//! schemas in [`docs`], so it cannot drift from the route table.

pub mod docs;
mod handlers;

use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Serialize;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;
use utoipa::ToSchema;
use utoipa_swagger_ui::SwaggerUi;

use crate::error::{CatalogError, Result};
use crate::storage::SharedStore;

/// Wire shape of every REST error response.
#[derive(Serialize, ToSchema)]
pub struct ErrorBody {
    pub message: String,
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        let status = match &self {
            CatalogError::NotFound => StatusCode::NOT_FOUND,
            CatalogError::Validation(_) => StatusCode::BAD_REQUEST,
            CatalogError::Store(_) | CatalogError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = ErrorBody {
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Builds the REST router over the shared store.
pub fn router(store: SharedStore) -> Router {
    Router::new()
        .route(
            "/products",
            get(handlers::list_products).post(handlers::create_product),
        )
        .route("/products/{id}", get(handlers::get_product))
        .merge(SwaggerUi::new("/api-docs").url("/api-docs/openapi.json", docs::openapi()))
        .layer(TraceLayer::new_for_http())
        .with_state(store)
}

/// Serves the REST API on the given port until the process exits.
pub async fn run_server(store: SharedStore, bind: &str, port: u16) -> Result<()> {
    let app = router(store);

    let listener = TcpListener::bind((bind, port)).await?;
    info!("REST API listening on http://localhost:{port}/products");
    info!("Swagger UI available at http://localhost:{port}/api-docs");

    axum::serve(listener, app).await?;
    Ok(())
}
