use crate::db::{DbConnection, DbPool};
use crate::domain::product::{NewProduct, Product, UpdateProduct};
use crate::domain::types::ProductId;

pub use crate::repository::errors::{RepositoryError, RepositoryResult};

pub mod errors;
pub mod product;

/// Repository implementation backed by Diesel and SQLite.
///
/// The underlying `r2d2::Pool` is cheap to clone, allowing the repository to
/// be passed around freely between handlers.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository from an established database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a pooled database connection.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Read-only operations for product entities.
pub trait ProductReader {
    /// List all products, newest first.
    fn list_products(&self) -> RepositoryResult<Vec<Product>>;
    /// Retrieve a product by its identifier.
    fn get_product_by_id(&self, id: ProductId) -> RepositoryResult<Option<Product>>;
}

/// Write operations for product entities.
pub trait ProductWriter {
    /// Persist a new product and return the stored row.
    fn create_product(&self, product: &NewProduct) -> RepositoryResult<Product>;
    /// Replace the mutable fields of an existing product and return the stored row.
    fn update_product(&self, id: ProductId, update: &UpdateProduct) -> RepositoryResult<Product>;
    /// Delete a product by id, returning the number of affected rows.
    fn delete_product(&self, id: ProductId) -> RepositoryResult<usize>;
}
