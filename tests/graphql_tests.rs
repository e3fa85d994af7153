use std::sync::Arc;

use catalogd::graphql::{CatalogSchema, build_schema};
use catalogd::storage::MemoryStore;

fn seeded_schema() -> CatalogSchema {
    build_schema(Arc::new(MemoryStore::with_seed_data()))
}

// =============================================================================
// Queries
// =============================================================================

#[tokio::test]
async fn test_get_products_returns_seed_data() {
    let schema = seeded_schema();

    let resp = schema
        .execute("{ getProducts { id name description price tax } }")
        .await;
    assert!(resp.errors.is_empty(), "{:?}", resp.errors);

    let data = resp.data.into_json().unwrap();
    let products = data["getProducts"].as_array().unwrap();
    assert_eq!(products.len(), 2);
    assert_eq!(products[0]["id"], 1);
    assert_eq!(products[0]["name"], "T-shirt");
    assert_eq!(products[1]["id"], 2);
    assert_eq!(products[1]["name"], "Shoes");
}

#[tokio::test]
async fn test_get_product_by_id() {
    let schema = seeded_schema();

    let resp = schema
        .execute("{ getProductById(id: 1) { name price } }")
        .await;
    assert!(resp.errors.is_empty());

    let data = resp.data.into_json().unwrap();
    assert_eq!(data["getProductById"]["name"], "T-shirt");
    assert_eq!(data["getProductById"]["price"], 20.5);
}

#[tokio::test]
async fn test_get_product_by_id_missing_returns_null() {
    let schema = seeded_schema();

    let resp = schema
        .execute("{ getProductById(id: 999999) { name } }")
        .await;
    assert!(resp.errors.is_empty());

    let data = resp.data.into_json().unwrap();
    assert!(data["getProductById"].is_null());
}

#[tokio::test]
async fn test_malformed_query_rejected_by_schema_validation() {
    let schema = seeded_schema();

    // Unknown field never reaches a resolver
    let resp = schema.execute("{ getGadgets { id } }").await;
    assert!(!resp.errors.is_empty());

    // Missing required argument
    let resp = schema.execute("{ getProductById { name } }").await;
    assert!(!resp.errors.is_empty());
}

// =============================================================================
// Mutations
// =============================================================================

#[tokio::test]
async fn test_create_product_assigns_next_id_and_nulls_optionals() {
    let schema = seeded_schema();

    let resp = schema
        .execute(
            r#"mutation {
                createProduct(name: "Cap", price: 9.99) {
                    id name description price tax
                }
            }"#,
        )
        .await;
    assert!(resp.errors.is_empty(), "{:?}", resp.errors);

    let data = resp.data.into_json().unwrap();
    let created = &data["createProduct"];
    assert_eq!(created["id"], 3);
    assert_eq!(created["name"], "Cap");
    assert!(created["description"].is_null());
    assert_eq!(created["price"], 9.99);
    assert!(created["tax"].is_null());

    // The seeded scenario ends with three products
    let resp = schema.execute("{ getProducts { id } }").await;
    let data = resp.data.into_json().unwrap();
    assert_eq!(data["getProducts"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_create_product_with_all_fields() {
    let schema = seeded_schema();

    let resp = schema
        .execute(
            r#"mutation {
                createProduct(name: "Scarf", description: "Wool scarf", price: 12.0, tax: 1.2) {
                    id description tax
                }
            }"#,
        )
        .await;
    assert!(resp.errors.is_empty(), "{:?}", resp.errors);

    let data = resp.data.into_json().unwrap();
    assert_eq!(data["createProduct"]["description"], "Wool scarf");
    assert_eq!(data["createProduct"]["tax"], 1.2);
}

#[tokio::test]
async fn test_create_product_rejects_invalid_input() {
    let schema = seeded_schema();

    let resp = schema
        .execute(r#"mutation { createProduct(name: "", price: 1.0) { id } }"#)
        .await;
    assert!(!resp.errors.is_empty());
    assert!(resp.errors[0].message.contains("Name cannot be empty"));

    let resp = schema
        .execute(r#"mutation { createProduct(name: "Cap", price: -1.0) { id } }"#)
        .await;
    assert!(!resp.errors.is_empty());
    assert!(resp.errors[0].message.contains("Price cannot be negative"));

    // Rejected mutations must not have mutated the store
    let resp = schema.execute("{ getProducts { id } }").await;
    let data = resp.data.into_json().unwrap();
    assert_eq!(data["getProducts"].as_array().unwrap().len(), 2);
}
