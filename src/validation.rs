//! Input validation for product data.
//!
//! Both API layers call [`validate_new_product`] before the store is mutated;
//! the store itself accepts whatever it is given.

use crate::error::{CatalogError, Result};
use crate::model::NewProduct;

/// Maximum allowed length for a product name.
pub const MAX_NAME_LENGTH: usize = 200;

/// Maximum allowed length for a product description.
pub const MAX_DESCRIPTION_LENGTH: usize = 2_000;

/// Validates the caller-supplied fields of a product before insertion.
pub fn validate_new_product(fields: &NewProduct) -> Result<()> {
    validate_name(&fields.name)?;
    if let Some(ref description) = fields.description {
        validate_description(description)?;
    }
    validate_price(fields.price)?;
    if let Some(tax) = fields.tax {
        validate_tax(tax)?;
    }
    Ok(())
}

/// Validates a product name.
pub fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(CatalogError::Validation(
            "Name cannot be empty".to_string(),
        ));
    }
    if name.len() > MAX_NAME_LENGTH {
        return Err(CatalogError::Validation(format!(
            "Name exceeds maximum length of {} characters",
            MAX_NAME_LENGTH
        )));
    }
    Ok(())
}

/// Validates a product description.
pub fn validate_description(description: &str) -> Result<()> {
    if description.len() > MAX_DESCRIPTION_LENGTH {
        return Err(CatalogError::Validation(format!(
            "Description exceeds maximum length of {} characters",
            MAX_DESCRIPTION_LENGTH
        )));
    }
    Ok(())
}

/// Validates a price. JSON cannot carry NaN or infinities, but GraphQL float
/// coercion can, so the finiteness check stays here for both callers.
pub fn validate_price(price: f64) -> Result<()> {
    if !price.is_finite() {
        return Err(CatalogError::Validation(
            "Price must be a finite number".to_string(),
        ));
    }
    if price < 0.0 {
        return Err(CatalogError::Validation(
            "Price cannot be negative".to_string(),
        ));
    }
    Ok(())
}

/// Validates a tax amount.
pub fn validate_tax(tax: f64) -> Result<()> {
    if !tax.is_finite() {
        return Err(CatalogError::Validation(
            "Tax must be a finite number".to_string(),
        ));
    }
    if tax < 0.0 {
        return Err(CatalogError::Validation(
            "Tax cannot be negative".to_string(),
        ));
    }
    Ok(())
}
