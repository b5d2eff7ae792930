use crate::cache::ListingCache;
use crate::domain::types::ProductId;
use crate::dto::products::ProductDto;
use crate::forms::products::{AddProductFormPayload, UpdateProductFormPayload};
use crate::repository::{ProductReader, ProductWriter};

use super::{ServiceError, ServiceResult};

/// Core business logic for rendering the product listing page.
///
/// Serves the cached listing when it is fresh; otherwise fetches all
/// products newest first, caches the result and returns it. Repository
/// errors are converted into `ServiceError` variants so that the HTTP route
/// can remain a thin wrapper.
pub fn show_products<R>(repo: &R, cache: &ListingCache) -> ServiceResult<Vec<ProductDto>>
where
    R: ProductReader,
{
    if let Some(products) = cache.get() {
        return Ok(products);
    }

    match repo.list_products() {
        Ok(products) => {
            let products: Vec<ProductDto> = products.into_iter().map(ProductDto::from).collect();
            cache.store(products.clone());
            Ok(products)
        }
        Err(e) => {
            log::error!("Failed to list products: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Persist a new product from an already validated payload.
///
/// Returns `Ok(false)` when the store rejects the insert; the listing cache
/// is only invalidated on success.
pub fn create_product<R>(
    payload: AddProductFormPayload,
    repo: &R,
    cache: &ListingCache,
) -> ServiceResult<bool>
where
    R: ProductWriter,
{
    let product = payload.into_new_product();
    match repo.create_product(&product) {
        Ok(_) => {
            cache.invalidate();
            Ok(true)
        }
        Err(e) => {
            log::error!("Failed to create product: {e}");
            Ok(false)
        }
    }
}

/// Replace the mutable fields of an existing product.
///
/// An unknown or non-positive id yields [`ServiceError::NotFound`]; a store
/// failure during the write is collapsed to `Ok(false)`.
pub fn update_product<R>(
    product_id: i32,
    payload: UpdateProductFormPayload,
    repo: &R,
    cache: &ListingCache,
) -> ServiceResult<bool>
where
    R: ProductReader + ProductWriter,
{
    let product_id = match ProductId::new(product_id) {
        Ok(product_id) => product_id,
        Err(_) => return Err(ServiceError::NotFound),
    };

    match repo.get_product_by_id(product_id) {
        Ok(Some(_)) => {}
        Ok(None) => return Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get product: {e}");
            return Err(ServiceError::Internal);
        }
    }

    let update = payload.into_update_product();
    match repo.update_product(product_id, &update) {
        Ok(_) => {
            cache.invalidate();
            Ok(true)
        }
        Err(e) => {
            log::error!("Failed to update product: {e}");
            Ok(false)
        }
    }
}

/// Delete a product by id.
///
/// There is no existence pre-check: deleting an id that no longer exists
/// affects zero rows and takes the same `Ok(false)` path as any other store
/// failure.
pub fn delete_product<R>(product_id: i32, repo: &R, cache: &ListingCache) -> ServiceResult<bool>
where
    R: ProductWriter,
{
    let product_id = match ProductId::new(product_id) {
        Ok(product_id) => product_id,
        Err(_) => return Ok(false),
    };

    match repo.delete_product(product_id) {
        Ok(0) => Ok(false),
        Ok(_) => {
            cache.invalidate();
            Ok(true)
        }
        Err(e) => {
            log::error!("Failed to delete product: {e}");
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::Product;
    use crate::domain::types::{ProductName, ProductPrice, StockCount};
    use crate::forms::products::{AddProductForm, UpdateProductForm};
    use crate::repository::test::TestRepository;
    use chrono::DateTime;

    fn sample_product(id: i32, name: &str) -> Product {
        Product {
            id: ProductId::new(id).unwrap(),
            name: ProductName::new(name).unwrap(),
            description: None,
            price: ProductPrice::new(9.99).unwrap(),
            stock: StockCount::new(10).unwrap(),
            created_at: DateTime::from_timestamp(id as i64, 0).unwrap().naive_utc(),
            updated_at: DateTime::from_timestamp(id as i64, 0).unwrap().naive_utc(),
        }
    }

    fn sample_add_payload(name: &str) -> AddProductFormPayload {
        AddProductForm {
            name: name.to_string(),
            description: Some("A widget".to_string()),
            price: 9.99,
            stock: 10,
        }
        .try_into()
        .unwrap()
    }

    fn sample_update_payload(name: &str) -> UpdateProductFormPayload {
        UpdateProductForm {
            name: name.to_string(),
            description: None,
            price: 19.99,
            stock: 0,
        }
        .try_into()
        .unwrap()
    }

    #[test]
    fn show_products_serves_cached_listing_until_invalidated() {
        let repo = TestRepository::new(vec![sample_product(1, "Widget")]);
        let cache = ListingCache::new();

        assert_eq!(show_products(&repo, &cache).unwrap().len(), 1);

        // Mutate the store behind the cache's back.
        repo.delete_product(ProductId::new(1).unwrap()).unwrap();
        assert_eq!(show_products(&repo, &cache).unwrap().len(), 1);

        cache.invalidate();
        assert!(show_products(&repo, &cache).unwrap().is_empty());
    }

    #[test]
    fn show_products_surfaces_listing_failures() {
        let repo = TestRepository::failing();
        let cache = ListingCache::new();

        let err = show_products(&repo, &cache).unwrap_err();
        assert_eq!(err, ServiceError::Internal);
    }

    #[test]
    fn create_product_invalidates_cached_listing() {
        let repo = TestRepository::new(Vec::new());
        let cache = ListingCache::new();

        assert!(show_products(&repo, &cache).unwrap().is_empty());
        assert!(create_product(sample_add_payload("Widget"), &repo, &cache).unwrap());

        let products = show_products(&repo, &cache).unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].name, "Widget");
        assert_eq!(products[0].description.as_deref(), Some("A widget"));
        assert_eq!(products[0].price, 9.99);
    }

    #[test]
    fn create_product_swallows_persistence_failures() {
        let repo = TestRepository::failing();
        let cache = ListingCache::new();
        cache.store(Vec::new());

        assert!(!create_product(sample_add_payload("Widget"), &repo, &cache).unwrap());
        // A failed mutation leaves the cached listing in place.
        assert_eq!(cache.get(), Some(Vec::new()));
    }

    #[test]
    fn update_product_requires_existing_id() {
        let repo = TestRepository::new(Vec::new());
        let cache = ListingCache::new();

        let err = update_product(1, sample_update_payload("Gadget"), &repo, &cache).unwrap_err();
        assert_eq!(err, ServiceError::NotFound);

        let err = update_product(0, sample_update_payload("Gadget"), &repo, &cache).unwrap_err();
        assert_eq!(err, ServiceError::NotFound);
    }

    #[test]
    fn update_product_replaces_mutable_fields() {
        let repo = TestRepository::new(vec![sample_product(1, "Widget")]);
        let cache = ListingCache::new();

        assert!(update_product(1, sample_update_payload("Gadget"), &repo, &cache).unwrap());

        let products = show_products(&repo, &cache).unwrap();
        assert_eq!(products[0].name, "Gadget");
        assert_eq!(products[0].description, None);
        assert_eq!(products[0].price, 19.99);
        assert_eq!(products[0].stock, 0);
    }

    #[test]
    fn delete_product_takes_generic_failure_path_on_missing_row() {
        let repo = TestRepository::new(vec![sample_product(1, "Widget")]);
        let cache = ListingCache::new();

        assert!(delete_product(1, &repo, &cache).unwrap());
        // The second delete affects no rows and reports a generic failure.
        assert!(!delete_product(1, &repo, &cache).unwrap());
        assert!(!delete_product(-1, &repo, &cache).unwrap());
    }
}
