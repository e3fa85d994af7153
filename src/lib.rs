//! # Catalogd - an in-memory product catalog over GraphQL and REST
//!
//! Catalogd is a small demonstration service exposing one product collection
//! through two parallel front ends. Both servers run in a single process and
//! share one store by reference; neither calls the other.
//!
//! ## Features
//!
//! - **Shared in-memory store**: one lock-guarded collection, the sole source
//!   of truth, injected into both API layers
//! - **GraphQL API**: `getProducts`, `getProductById`, `createProduct` with
//!   GraphiQL on GET
//! - **REST API**: `GET/POST /products`, `GET /products/{id}`, Swagger UI at
//!   `/api-docs` generated from the handler annotations
//!
//! ## Quick Start
//!
//! ```bash
//! # Start both servers (REST on 3000, GraphQL on 4000)
//! catalogd
//!
//! # List products over REST
//! curl http://localhost:3000/products
//!
//! # Create a product over GraphQL
//! curl -X POST http://localhost:4000 \
//!   -H 'content-type: application/json' \
//!   -d '{"query": "mutation { createProduct(name: \"Cap\", price: 9.99) { id } }"}'
//! ```
//!
//! ## Modules
//!
//! - [`error`]: Error types and result alias
//! - [`graphql`]: GraphQL schema, resolvers, and server
//! - [`model`]: Data model (Product, NewProduct)
//! - [`rest`]: REST routes, OpenAPI document, and server
//! - [`storage`]: The shared in-memory store
//! - [`validation`]: Boundary validation shared by both APIs

/// Error types and result aliases.
///
/// Defines the `CatalogError` enum and `Result<T>` type alias.
pub mod error;

/// GraphQL schema, resolvers, and the server that exposes them.
pub mod graphql;

pub mod logging;

/// Data model for catalog records.
pub mod model;

/// REST routes, generated OpenAPI documentation, and the server.
pub mod rest;

/// The shared in-memory store behind a small storage trait.
pub mod storage;

/// Input validation applied at both API boundaries.
pub mod validation;
