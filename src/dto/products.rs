use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::product::Product;

/// Product representation rendered by templates and the JSON API.
///
/// The price is surfaced as a plain `f64` in currency units.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub stock: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<Product> for ProductDto {
    fn from(value: Product) -> Self {
        Self {
            id: value.id.get(),
            name: value.name.into_inner(),
            description: value.description.map(|d| d.into_inner()),
            price: value.price.get(),
            stock: value.stock.get(),
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}
