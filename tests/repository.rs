use chrono::{NaiveDate, NaiveDateTime};
use pushkind_catalog::domain::product::{NewProduct, UpdateProduct};
use pushkind_catalog::domain::types::{
    ProductDescription, ProductId, ProductName, ProductPrice, StockCount,
};
use pushkind_catalog::repository::{DieselRepository, ProductReader, ProductWriter};

mod common;

fn timestamp(day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, day)
        .expect("valid date")
        .and_hms_opt(12, 0, 0)
        .expect("valid time")
}

fn sample_new_product(name: &str, created_at: NaiveDateTime) -> NewProduct {
    NewProduct {
        name: ProductName::new(name).expect("valid product name"),
        description: Some(ProductDescription::new("A widget").expect("valid description")),
        price: ProductPrice::new(9.99).expect("valid price"),
        stock: StockCount::new(10).expect("valid stock"),
        created_at,
        updated_at: created_at,
    }
}

#[test]
fn create_product_round_trips_all_fields() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let created = repo
        .create_product(&sample_new_product("Widget", timestamp(1)))
        .expect("should create product");

    assert!(created.id.get() >= 1);
    assert_eq!(created.name, "Widget");
    assert_eq!(
        created.description.as_ref().map(|d| d.as_str()),
        Some("A widget")
    );
    assert_eq!(created.price, 9.99);
    assert_eq!(created.stock, 10);
    assert_eq!(created.created_at, timestamp(1));
}

#[test]
fn list_products_orders_newest_first() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    repo.create_product(&sample_new_product("Oldest", timestamp(1)))
        .expect("should create product");
    repo.create_product(&sample_new_product("Middle", timestamp(2)))
        .expect("should create product");
    // Same timestamp as "Middle"; the higher id must win the tie.
    repo.create_product(&sample_new_product("Newest", timestamp(2)))
        .expect("should create product");

    let products = repo.list_products().expect("should list products");
    let names: Vec<&str> = products.iter().map(|p| p.name.as_str()).collect();

    assert_eq!(names, vec!["Newest", "Middle", "Oldest"]);
}

#[test]
fn get_product_by_id_finds_existing_rows() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let created = repo
        .create_product(&sample_new_product("Widget", timestamp(1)))
        .expect("should create product");

    let found = repo
        .get_product_by_id(created.id)
        .expect("should query product")
        .expect("created product should exist");
    assert_eq!(found.name, "Widget");

    let missing_id = ProductId::new(created.id.get() + 100).expect("valid product id");
    let missing = repo
        .get_product_by_id(missing_id)
        .expect("should query product");
    assert!(missing.is_none());
}

#[test]
fn update_product_replaces_mutable_fields() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let created = repo
        .create_product(&sample_new_product("Widget", timestamp(1)))
        .expect("should create product");

    let update = UpdateProduct {
        name: ProductName::new("Renamed").expect("valid product name"),
        description: None,
        price: ProductPrice::new(19.99).expect("valid price"),
        stock: StockCount::new(0).expect("valid stock"),
    };
    let updated = repo
        .update_product(created.id, &update)
        .expect("should update product");

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "Renamed");
    assert!(updated.description.is_none());
    assert_eq!(updated.price, 19.99);
    assert_eq!(updated.stock, 0);
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at > created.updated_at);

    let reloaded = repo
        .get_product_by_id(created.id)
        .expect("should query product")
        .expect("updated product should exist");
    assert_eq!(reloaded.name, "Renamed");
    assert!(reloaded.description.is_none());
}

#[test]
fn delete_product_reports_affected_rows() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let created = repo
        .create_product(&sample_new_product("Widget", timestamp(1)))
        .expect("should create product");

    assert_eq!(
        repo.delete_product(created.id).expect("should delete"),
        1usize
    );
    assert_eq!(
        repo.delete_product(created.id).expect("should delete"),
        0usize
    );
    assert!(repo.list_products().expect("should list").is_empty());
}
