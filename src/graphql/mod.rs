//! GraphQL schema and resolvers for the product catalog.
//!
//! Exposes the shared [`ProductStore`](crate::storage::ProductStore) over a
//! single endpoint; GET serves GraphiQL, POST executes operations. Resolvers
//! are thin pass-throughs to the store, malformed operations are rejected by
//! schema validation before a resolver ever runs.
//!
//! ## Schema
//!
//! - **Queries**: `getProducts`, `getProductById(id: Int!)`
//! - **Mutations**: `createProduct(name, description, price, tax)`
//!
//! ## Usage
//!
//! ```bash
//! # Start both servers, GraphQL on port 4000
//! catalogd --graphql-port 4000
//!
//! # Execute a query
//! curl -X POST http://localhost:4000 \
//!   -H 'content-type: application/json' \
//!   -d '{"query": "{ getProducts { id name price } }"}'
//! ```

mod schema;
mod types;

pub use schema::{CatalogSchema, MutationRoot, QueryRoot, build_schema};
pub use types::*;

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::GraphQL;
use axum::{
    Router,
    response::{Html, IntoResponse},
    routing::get,
};
use tokio::net::TcpListener;
use tracing::info;

use crate::error::Result;

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/").finish())
}

/// Serves the schema on the given port until the process exits.
pub async fn run_server(schema: CatalogSchema, bind: &str, port: u16) -> Result<()> {
    let app = Router::new().route("/", get(graphiql).post_service(GraphQL::new(schema)));

    let listener = TcpListener::bind((bind, port)).await?;
    info!("GraphQL server listening on http://localhost:{port}");
    info!("GraphiQL available at http://localhost:{port}");

    axum::serve(listener, app).await?;
    Ok(())
}
