use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{ProductDescription, ProductId, ProductName, ProductPrice, StockCount};

/// A catalog product managed through the admin page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: ProductName,
    pub description: Option<ProductDescription>,
    pub price: ProductPrice,
    pub stock: StockCount,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Data required to insert a new [`Product`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewProduct {
    pub name: ProductName,
    pub description: Option<ProductDescription>,
    pub price: ProductPrice,
    pub stock: StockCount,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Replacement values for an existing [`Product`].
///
/// Updates replace every mutable field; `updated_at` is refreshed by the
/// store when the change is applied.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UpdateProduct {
    pub name: ProductName,
    pub description: Option<ProductDescription>,
    pub price: ProductPrice,
    pub stock: StockCount,
}
