//! Product Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product, UpdateProduct};
use crate::repository::ProductRepository;

/// Product service providing business logic operations
///
/// The service layer validates input before it reaches the repository and
/// turns missing records into [`ProductError::NotFound`].
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    /// Create a new ProductService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// List all products in creation order
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> ProductResult<Vec<Product>> {
        self.repository.list().await
    }

    /// Get a product by ID
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: Uuid) -> ProductResult<Product> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    /// Create a new product
    #[instrument(skip(self, input), fields(product_name = %input.name))]
    pub async fn create_product(&self, input: CreateProduct) -> ProductResult<Product> {
        input
            .validate()
            .map_err(|e| ProductError::Validation(e.to_string()))?;

        self.repository.create(input).await
    }

    /// Update an existing product
    #[instrument(skip(self, input))]
    pub async fn update_product(&self, id: Uuid, input: UpdateProduct) -> ProductResult<Product> {
        input
            .validate()
            .map_err(|e| ProductError::Validation(e.to_string()))?;

        self.repository
            .update(id, input)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    /// Delete a product
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: Uuid) -> ProductResult<()> {
        if !self.repository.delete(id).await? {
            return Err(ProductError::NotFound(id));
        }
        Ok(())
    }
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockProductRepository;
    use mockall::predicate::eq;

    fn create_input() -> CreateProduct {
        CreateProduct {
            name: "Test Product".to_string(),
            quantity: 10,
            price: 100.0,
        }
    }

    #[tokio::test]
    async fn test_get_product_missing_is_not_found() {
        let mut mock_repo = MockProductRepository::new();
        let id = Uuid::now_v7();

        mock_repo
            .expect_get_by_id()
            .with(eq(id))
            .returning(|_| Ok(None));

        let service = ProductService::new(mock_repo);
        let err = service.get_product(id).await.unwrap_err();

        assert!(matches!(err, ProductError::NotFound(missing) if missing == id));
    }

    #[tokio::test]
    async fn test_create_product_passes_valid_input_through() {
        let mut mock_repo = MockProductRepository::new();

        mock_repo
            .expect_create()
            .times(1)
            .returning(|input| Ok(Product::new(input)));

        let service = ProductService::new(mock_repo);
        let product = service.create_product(create_input()).await.unwrap();

        assert_eq!(product.name, "Test Product");
        assert_eq!(product.quantity, 10);
        assert_eq!(product.price, 100.0);
    }

    #[tokio::test]
    async fn test_create_product_rejects_invalid_input_before_repository() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_create().never();

        let service = ProductService::new(mock_repo);
        let input = CreateProduct {
            quantity: -1,
            ..create_input()
        };
        let err = service.create_product(input).await.unwrap_err();

        assert!(matches!(err, ProductError::Validation(_)));
    }

    #[tokio::test]
    async fn test_update_product_rejects_invalid_input_before_repository() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_update().never();

        let service = ProductService::new(mock_repo);
        let input = UpdateProduct {
            name: Some(String::new()),
            ..Default::default()
        };
        let err = service
            .update_product(Uuid::now_v7(), input)
            .await
            .unwrap_err();

        assert!(matches!(err, ProductError::Validation(_)));
    }

    #[tokio::test]
    async fn test_update_product_missing_is_not_found() {
        let mut mock_repo = MockProductRepository::new();
        let id = Uuid::now_v7();

        mock_repo
            .expect_update()
            .withf(move |candidate, _| *candidate == id)
            .returning(|_, _| Ok(None));

        let service = ProductService::new(mock_repo);
        let err = service
            .update_product(id, UpdateProduct::default())
            .await
            .unwrap_err();

        assert!(matches!(err, ProductError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_product() {
        let mut mock_repo = MockProductRepository::new();
        let present = Uuid::now_v7();
        let absent = Uuid::now_v7();

        mock_repo
            .expect_delete()
            .with(eq(present))
            .returning(|_| Ok(true));
        mock_repo
            .expect_delete()
            .with(eq(absent))
            .returning(|_| Ok(false));

        let service = ProductService::new(mock_repo);

        assert!(service.delete_product(present).await.is_ok());
        assert!(matches!(
            service.delete_product(absent).await,
            Err(ProductError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_repository_errors_propagate() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_list()
            .returning(|| Err(ProductError::Database("connection refused".to_string())));

        let service = ProductService::new(mock_repo);
        let err = service.list_products().await.unwrap_err();

        assert!(matches!(err, ProductError::Database(_)));
    }
}
