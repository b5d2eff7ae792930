use chrono::Utc;
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::product::{NewProduct, UpdateProduct};
use crate::domain::types::{
    ProductDescription, ProductName, ProductPrice, StockCount, TypeConstraintError,
};

/// Empty or whitespace-only descriptions are stored as `NULL`.
fn normalize_description(
    value: Option<String>,
) -> Result<Option<ProductDescription>, TypeConstraintError> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(Some(ProductDescription::new(text)?)),
        _ => Ok(None),
    }
}

#[derive(Deserialize, Validate)]
pub struct AddProductForm {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    pub description: Option<String>,
    #[validate(range(min = 0.01, message = "Price must be greater than 0"))]
    pub price: f64,
    #[validate(range(min = 0, message = "Stock cannot be negative"))]
    pub stock: i32,
}

/// Validated data extracted from [`AddProductForm`].
#[derive(Debug, Clone, PartialEq)]
pub struct AddProductFormPayload {
    pub name: ProductName,
    pub description: Option<ProductDescription>,
    pub price: ProductPrice,
    pub stock: StockCount,
}

impl AddProductFormPayload {
    pub fn into_new_product(self) -> NewProduct {
        let now = Utc::now().naive_utc();
        NewProduct {
            name: self.name,
            description: self.description,
            price: self.price,
            stock: self.stock,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Error)]
pub enum AddProductFormError {
    #[error("Add product form validation failed: {0}")]
    Validation(String),
    #[error("Add product form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for AddProductFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for AddProductFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<AddProductForm> for AddProductFormPayload {
    type Error = AddProductFormError;

    fn try_from(value: AddProductForm) -> Result<Self, Self::Error> {
        value.validate()?;
        Ok(Self {
            name: ProductName::new(value.name)?,
            description: normalize_description(value.description)?,
            price: ProductPrice::new(value.price)?,
            stock: StockCount::new(value.stock)?,
        })
    }
}

#[derive(Deserialize, Validate)]
pub struct UpdateProductForm {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    pub description: Option<String>,
    #[validate(range(min = 0.01, message = "Price must be greater than 0"))]
    pub price: f64,
    #[validate(range(min = 0, message = "Stock cannot be negative"))]
    pub stock: i32,
}

/// Validated data extracted from [`UpdateProductForm`].
///
/// The target product id arrives through the URL path, not the form body.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateProductFormPayload {
    pub name: ProductName,
    pub description: Option<ProductDescription>,
    pub price: ProductPrice,
    pub stock: StockCount,
}

impl UpdateProductFormPayload {
    pub fn into_update_product(self) -> UpdateProduct {
        UpdateProduct {
            name: self.name,
            description: self.description,
            price: self.price,
            stock: self.stock,
        }
    }
}

#[derive(Debug, Error)]
pub enum UpdateProductFormError {
    #[error("Update product form validation failed: {0}")]
    Validation(String),
    #[error("Update product form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for UpdateProductFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for UpdateProductFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<UpdateProductForm> for UpdateProductFormPayload {
    type Error = UpdateProductFormError;

    fn try_from(value: UpdateProductForm) -> Result<Self, Self::Error> {
        value.validate()?;
        Ok(Self {
            name: ProductName::new(value.name)?,
            description: normalize_description(value.description)?,
            price: ProductPrice::new(value.price)?,
            stock: StockCount::new(value.stock)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn add_form(name: &str, price: f64, stock: i32) -> AddProductForm {
        AddProductForm {
            name: name.to_string(),
            description: Some("A widget".to_string()),
            price,
            stock,
        }
    }

    #[test]
    fn add_product_trims_name() {
        let payload: AddProductFormPayload = add_form("  Widget  ", 9.99, 10).try_into().unwrap();
        assert_eq!(payload.name.as_str(), "Widget");
        assert_eq!(payload.price, ProductPrice::new(9.99).unwrap());
        assert_eq!(payload.stock, 10);
    }

    #[test]
    fn add_product_requires_name() {
        let err = AddProductFormPayload::try_from(add_form("", 9.99, 10)).unwrap_err();
        assert!(err.to_string().contains("Name is required"));
    }

    #[test]
    fn add_product_rejects_whitespace_only_name() {
        // Passes the length rule but fails the domain constructor.
        let err = AddProductFormPayload::try_from(add_form("   ", 9.99, 10)).unwrap_err();
        assert!(matches!(err, AddProductFormError::TypeConstraint(_)));
    }

    #[test]
    fn add_product_requires_positive_price() {
        let err = AddProductFormPayload::try_from(add_form("Widget", 0.0, 10)).unwrap_err();
        assert!(err.to_string().contains("Price must be greater than 0"));

        assert!(AddProductFormPayload::try_from(add_form("Widget", 0.01, 10)).is_ok());
    }

    #[test]
    fn add_product_rejects_negative_stock() {
        let err = AddProductFormPayload::try_from(add_form("Widget", 9.99, -1)).unwrap_err();
        assert!(err.to_string().contains("Stock cannot be negative"));
    }

    #[test]
    fn empty_description_normalizes_to_none() {
        let form = AddProductForm {
            name: "Widget".to_string(),
            description: Some("   ".to_string()),
            price: 9.99,
            stock: 10,
        };
        let payload: AddProductFormPayload = form.try_into().unwrap();
        assert!(payload.description.is_none());
    }

    #[test]
    fn update_product_validates_like_add() {
        let form = UpdateProductForm {
            name: "Widget".to_string(),
            description: None,
            price: 19.99,
            stock: 0,
        };
        let payload: UpdateProductFormPayload = form.try_into().unwrap();

        let update = payload.into_update_product();
        assert_eq!(update.name.as_str(), "Widget");
        assert!(update.description.is_none());
        assert_eq!(update.stock, 0);
    }
}
