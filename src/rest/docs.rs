//! OpenAPI document for the REST surface.
//!
//! Generated from the same handler annotations and model schemas the router
//! executes; there is no hand-maintained parallel description.

use utoipa::OpenApi;

use super::ErrorBody;
use crate::model::{NewProduct, Product};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Product Catalog API",
        description = "REST front end over the shared in-memory product store. \
                       The same data is also served over GraphQL on its own port."
    ),
    paths(
        super::handlers::list_products,
        super::handlers::get_product,
        super::handlers::create_product,
    ),
    components(schemas(Product, NewProduct, ErrorBody)),
    tags(
        (name = "products", description = "Product catalog operations")
    )
)]
pub struct ApiDoc;

/// The document served at `/api-docs/openapi.json`.
pub fn openapi() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}
