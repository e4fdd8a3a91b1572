//! End-to-end catalogue scenarios driven through the JSON boundary shapes.

use catalogue_core::{AggregateRoot, CatalogueError, Entity, ProductId};
use catalogue_products::{BatchRequest, Catalogue, Product, SearchCriteria};
use serde_json::json;

fn product_from(value: serde_json::Value) -> Product {
    serde_json::from_value(value).unwrap()
}

fn stocked_catalogue() -> Catalogue {
    catalogue_observability::init();

    let mut catalogue = Catalogue::new("Test Catalogue");
    for value in [
        json!({"id": "A123", "name": "Product 1", "quantityInStock": 100, "reorderLevel": 10, "price": 10.0, "reorderAmount": 10}),
        json!({"id": "A124", "name": "Product 2", "quantityInStock": 100, "reorderLevel": 10, "price": 10}),
        json!({"id": "A125", "name": "Product 3", "quantityInStock": 100, "reorderLevel": 10, "price": 10.0, "reorderAmount": 10}),
    ] {
        catalogue.add_product(product_from(value));
    }
    catalogue
}

fn ids(list: &[ProductId]) -> Vec<String> {
    let mut ids: Vec<String> = list.iter().map(ToString::to_string).collect();
    ids.sort();
    ids
}

#[test]
fn lookup_and_removal_use_absence_not_errors() {
    let mut catalogue = stocked_catalogue();

    assert_eq!(catalogue.find_product_by_id("A123").unwrap().name(), "Product 1");
    assert!(catalogue.find_product_by_id("A321").is_none());

    let removed = catalogue.remove_product_by_id("A123").unwrap();
    assert_eq!(removed.id().as_str(), "A123");
    assert!(catalogue.find_product_by_id("A123").is_none());
    assert!(catalogue.remove_product_by_id("A321").is_none());
}

#[test]
fn json_batch_is_added_minus_zero_stock_entries() {
    let mut catalogue = stocked_catalogue();
    let batch: BatchRequest = serde_json::from_value(json!({
        "type": "Batch",
        "products": [
            {"id": "A126", "name": "Product 6", "quantityInStock": 100, "reorderLevel": 10, "price": 10.0, "reorderAmount": 10},
            {"id": "A127", "name": "Product 7", "quantityInStock": 100, "reorderLevel": 10, "price": 10.0, "reorderAmount": 10},
            {"id": "A128", "name": "Product 8", "quantityInStock": 0, "reorderLevel": 10, "price": 10.0, "reorderAmount": 10}
        ]
    }))
    .unwrap();

    let added = catalogue.batch_add_products(batch).unwrap();
    assert_eq!(added, 2);
    assert!(catalogue.find_product_by_id("A126").is_some());
    assert!(catalogue.find_product_by_id("A127").is_some());
    assert!(catalogue.find_product_by_id("A128").is_none());
}

#[test]
fn json_batch_with_existing_id_is_rejected_whole() {
    let mut catalogue = stocked_catalogue();
    let version = catalogue.version();
    let batch: BatchRequest = serde_json::from_value(json!({
        "type": "Batch",
        "products": [
            {"id": "A126", "name": "Product 6", "quantityInStock": 100, "reorderLevel": 10, "price": 10.0},
            {"id": "A127", "name": "Product 7", "quantityInStock": 100, "reorderLevel": 10, "price": 10.0},
            {"id": "A123", "name": "Product 8", "quantityInStock": 0, "reorderLevel": 10, "price": 10.0}
        ]
    }))
    .unwrap();

    let err = catalogue.batch_add_products(batch).unwrap_err();
    assert!(matches!(err, CatalogueError::BadBatch { .. }));
    assert!(err.to_string().starts_with("Bad Batch"));
    assert!(catalogue.find_product_by_id("A126").is_none());
    assert!(catalogue.find_product_by_id("A127").is_none());
    assert_eq!(catalogue.version(), version);
    assert_eq!(catalogue.len(), 3);
}

#[test]
fn reorder_report_serializes_product_ids() {
    let mut catalogue = stocked_catalogue();
    catalogue.add_product(product_from(
        json!({"id": "B123", "name": "Product 4", "quantityInStock": 10, "reorderLevel": 20, "price": 10.0}),
    ));
    catalogue.add_product(product_from(
        json!({"id": "B124", "name": "Product 5", "quantityInStock": 10, "reorderLevel": 30, "price": 10.0}),
    ));

    let report = catalogue.check_reorders();
    assert_eq!(ids(&report.product_ids), vec!["B123", "B124"]);

    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(value["productIds"].as_array().unwrap().len(), 2);
}

#[test]
fn json_search_criteria_select_price_or_keyword() {
    let mut catalogue = stocked_catalogue();
    for value in [
        json!({"id": "A129", "name": "noodle", "quantityInStock": 1, "reorderLevel": 10, "price": 11.0}),
        json!({"id": "A130", "name": "rice", "quantityInStock": 2, "reorderLevel": 10, "price": 25.0}),
        json!({"id": "A131", "name": "mantou", "quantityInStock": 2, "reorderLevel": 10, "price": 33.0}),
        json!({"id": "A132", "name": "steamed bun", "quantityInStock": 1, "reorderLevel": 10, "price": 13.0}),
    ] {
        catalogue.add_product(product_from(value));
    }

    let by_price: SearchCriteria = serde_json::from_value(json!({"price": 25.0})).unwrap();
    let result = catalogue.search(by_price).unwrap();
    assert_eq!(
        ids(&result.searched_products),
        vec!["A123", "A124", "A125", "A129", "A130", "A132"]
    );

    let by_keyword: SearchCriteria = serde_json::from_value(json!({"keyword": "bun"})).unwrap();
    let result = catalogue.search(by_keyword).unwrap();
    assert_eq!(ids(&result.searched_products), vec!["A132"]);
    let value = serde_json::to_value(&result).unwrap();
    assert_eq!(value["searchedProducts"], json!(["A132"]));

    let neither: SearchCriteria = serde_json::from_value(json!({})).unwrap();
    let err = catalogue.search(neither).unwrap_err();
    assert!(err.to_string().starts_with("Bad Search"));
}

#[test]
fn product_with_negative_price_cannot_be_deserialized() {
    let result = serde_json::from_value::<Product>(
        json!({"id": "X1", "name": "broken", "quantityInStock": 1, "reorderLevel": 1, "price": -1.0}),
    );
    assert!(result.is_err());
}
