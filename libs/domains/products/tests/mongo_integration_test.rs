//! Integration tests for MongoProductRepository
//!
//! Every test starts a fresh MongoDB container, clears the collection and
//! seeds a single product before exercising the repository.
//!
//! Run with: cargo test -p domain_products --test mongo_integration_test -- --ignored

use domain_products::*;
use test_utils::{assertions::assert_some, TestDataBuilder, TestMongo};

async fn seeded_repository(mongo: &TestMongo) -> (MongoProductRepository, Product) {
    let repo = MongoProductRepository::new(mongo.database());
    repo.delete_all().await.unwrap();

    let seeded = repo
        .create(CreateProduct {
            name: "Test Product".to_string(),
            quantity: 10,
            price: 100.0,
        })
        .await
        .unwrap();

    (repo, seeded)
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_list_returns_seeded_product() {
    let mongo = TestMongo::new().await;
    let (repo, seeded) = seeded_repository(&mongo).await;

    let products = repo.list().await.unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].id, seeded.id);
    assert_eq!(products[0].name, "Test Product");
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_list_is_in_creation_order() {
    let mongo = TestMongo::new().await;
    let (repo, seeded) = seeded_repository(&mongo).await;

    let second = repo
        .create(CreateProduct {
            name: "Second".to_string(),
            quantity: 1,
            price: 1.0,
        })
        .await
        .unwrap();

    let ids: Vec<_> = repo.list().await.unwrap().iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![seeded.id, second.id]);
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_get_by_id_round_trips_stored_document() {
    let mongo = TestMongo::new().await;
    let (repo, seeded) = seeded_repository(&mongo).await;

    let found = assert_some(repo.get_by_id(seeded.id).await.unwrap(), "seeded product");
    assert_eq!(found.id, seeded.id);
    assert_eq!(found.quantity, 10);
    assert_eq!(found.price, 100.0);

    let missing = TestDataBuilder::from_test_name("mongo_get_missing").id();
    assert!(repo.get_by_id(missing).await.unwrap().is_none());
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_update_keeps_id_and_returns_new_values() {
    let mongo = TestMongo::new().await;
    let (repo, seeded) = seeded_repository(&mongo).await;

    let updated = repo
        .update(
            seeded.id,
            UpdateProduct {
                name: Some("Updated Product".to_string()),
                quantity: Some(15),
                price: Some(150.0),
            },
        )
        .await
        .unwrap();

    let updated = assert_some(updated, "updated product");
    assert_eq!(updated.id, seeded.id);
    assert_eq!(updated.name, "Updated Product");
    assert_eq!(updated.quantity, 15);
    assert_eq!(updated.price, 150.0);
    assert!(updated.updated_at >= seeded.updated_at);
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_partial_update_leaves_other_fields() {
    let mongo = TestMongo::new().await;
    let (repo, seeded) = seeded_repository(&mongo).await;

    let updated = repo
        .update(
            seeded.id,
            UpdateProduct {
                quantity: Some(3),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.name, "Test Product");
    assert_eq!(updated.quantity, 3);
    assert_eq!(updated.price, 100.0);
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_update_missing_returns_none() {
    let mongo = TestMongo::new().await;
    let (repo, _) = seeded_repository(&mongo).await;

    let missing = TestDataBuilder::from_test_name("mongo_update_missing").id();
    let result = repo.update(missing, UpdateProduct::default()).await.unwrap();
    assert!(result.is_none());
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_delete_removes_document() {
    let mongo = TestMongo::new().await;
    let (repo, seeded) = seeded_repository(&mongo).await;

    assert!(repo.delete(seeded.id).await.unwrap());
    assert!(repo.get_by_id(seeded.id).await.unwrap().is_none());
    assert!(!repo.delete(seeded.id).await.unwrap());
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_delete_all_reports_count() {
    let mongo = TestMongo::new().await;
    let (repo, _) = seeded_repository(&mongo).await;

    assert_eq!(repo.delete_all().await.unwrap(), 1);
    assert!(repo.list().await.unwrap().is_empty());
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_custom_collection_is_isolated() {
    let mongo = TestMongo::new().await;
    let (default_repo, _) = seeded_repository(&mongo).await;
    let archive = MongoProductRepository::with_collection(mongo.database(), "products_archive");

    assert!(archive.list().await.unwrap().is_empty());
    assert_eq!(default_repo.collection().name(), PRODUCTS_COLLECTION);
    assert_eq!(archive.collection().name(), "products_archive");
}
