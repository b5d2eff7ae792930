use crate::dto::products::ProductDto;
use crate::repository::ProductReader;

use super::{ServiceError, ServiceResult};

/// Core business logic for the `/v1/products` API endpoint.
///
/// Always reads straight from the repository so API consumers never observe
/// the page cache.
pub fn api_v1_products<R>(repo: &R) -> ServiceResult<Vec<ProductDto>>
where
    R: ProductReader,
{
    match repo.list_products() {
        Ok(products) => Ok(products.into_iter().map(ProductDto::from).collect()),
        Err(e) => {
            log::error!("Failed to list products: {e}");
            Err(ServiceError::Internal)
        }
    }
}
