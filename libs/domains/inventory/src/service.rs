//! Inventory Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product};
use crate::repository::ProductRepository;

/// Inventory service providing business logic operations
///
/// The service layer validates every record before it reaches storage and
/// orchestrates repository calls. It holds no state of its own beyond the
/// injected repository handle, and it never enforces roles; capability
/// checks belong to the presentation layer.
pub struct InventoryService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> InventoryService<R> {
    /// Create a new InventoryService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Add a new product; returns the stored record carrying the assigned id
    #[instrument(skip(self, input), fields(product_name = %input.name))]
    pub async fn add_product(&self, input: CreateProduct) -> ProductResult<Product> {
        input
            .validate()
            .map_err(|e| ProductError::Validation(e.to_string()))?;

        self.repository.create(input).await
    }

    /// Overwrite the product matching `product.id`.
    ///
    /// Returns false (not an error) when no such product exists.
    #[instrument(skip(self, product), fields(product_id = product.id))]
    pub async fn update_product(&self, product: &Product) -> ProductResult<bool> {
        product
            .validate()
            .map_err(|e| ProductError::Validation(e.to_string()))?;

        self.repository.update(product).await
    }

    /// Delete a product; false when it did not exist
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: i64) -> ProductResult<bool> {
        self.repository.delete(id).await
    }

    /// Get a product by id; absence is None, not an error
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: i64) -> ProductResult<Option<Product>> {
        self.repository.get_by_id(id).await
    }

    /// All products known to storage, unordered
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> ProductResult<Vec<Product>> {
        self.repository.list_all().await
    }

    /// Products whose category equals the argument exactly
    #[instrument(skip(self))]
    pub async fn search_by_category(&self, category: &str) -> ProductResult<Vec<Product>> {
        if category.trim().is_empty() {
            return Err(ProductError::Validation(
                "Category cannot be empty".to_string(),
            ));
        }

        self.repository.find_by_category(category).await
    }

    /// Products whose name contains the fragment, case-insensitively
    #[instrument(skip(self))]
    pub async fn search_by_name(&self, fragment: &str) -> ProductResult<Vec<Product>> {
        if fragment.trim().is_empty() {
            return Err(ProductError::Validation(
                "Name cannot be empty".to_string(),
            ));
        }

        self.repository.find_by_name(fragment).await
    }

    /// Products with `quantity <= threshold`
    #[instrument(skip(self))]
    pub async fn low_stock_products(&self, threshold: i32) -> ProductResult<Vec<Product>> {
        if threshold < 0 {
            return Err(ProductError::Validation(
                "Threshold cannot be negative".to_string(),
            ));
        }

        self.repository.find_low_stock(threshold).await
    }

    /// Replace the stock quantity of a single product.
    ///
    /// Returns false when no product with `id` exists; in that case no
    /// storage write happens. Full product validation is deliberately
    /// skipped here since only the quantity changes. The read-then-write
    /// pair is not isolated against concurrent writers.
    #[instrument(skip(self))]
    pub async fn update_stock_quantity(&self, id: i64, new_quantity: i32) -> ProductResult<bool> {
        if new_quantity < 0 {
            return Err(ProductError::Validation(
                "Quantity cannot be negative".to_string(),
            ));
        }

        let Some(mut product) = self.repository.get_by_id(id).await? else {
            return Ok(false);
        };

        product.quantity = new_quantity;
        self.repository.update(&product).await
    }

    /// Sorted set of distinct category strings across all products
    #[instrument(skip(self))]
    pub async fn categories(&self) -> ProductResult<Vec<String>> {
        self.repository.distinct_categories().await
    }
}

impl<R: ProductRepository> Clone for InventoryService<R> {
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
    use mockall::predicate;

    fn laptop_input() -> CreateProduct {
        CreateProduct {
            name: "Laptop".to_string(),
            quantity: 3,
            price: 999.99,
            category: "Electronics".to_string(),
        }
    }

    #[tokio::test]
    async fn test_add_product_assigns_id_and_keeps_fields() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_create()
            .returning(|input| Ok(Product::from_create(7, input)));

        let service = InventoryService::new(mock_repo);
        let created = service.add_product(laptop_input()).await.unwrap();

        assert_eq!(created.id, 7);
        assert_eq!(created.name, "Laptop");
        assert_eq!(created.quantity, 3);
        assert_eq!(created.category, "Electronics");
    }

    #[tokio::test]
    async fn test_add_product_blank_name_never_reaches_storage() {
        // No expectations on the mock: any repository call fails the test.
        let mock_repo = MockProductRepository::new();
        let service = InventoryService::new(mock_repo);

        let input = CreateProduct {
            name: "   ".to_string(),
            ..laptop_input()
        };
        let result = service.add_product(input).await;

        assert!(matches!(result, Err(ProductError::Validation(_))));
    }

    #[tokio::test]
    async fn test_add_product_non_positive_price_fails() {
        let mock_repo = MockProductRepository::new();
        let service = InventoryService::new(mock_repo);

        let input = CreateProduct {
            price: 0.0,
            ..laptop_input()
        };
        let result = service.add_product(input).await;

        assert!(matches!(result, Err(ProductError::Validation(_))));
    }

    #[tokio::test]
    async fn test_update_product_missing_record_is_false_not_error() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_update().returning(|_| Ok(false));

        let service = InventoryService::new(mock_repo);
        let product = Product {
            id: 99,
            name: "Laptop".to_string(),
            quantity: 3,
            price: 999.99,
            category: "Electronics".to_string(),
        };

        assert!(!service.update_product(&product).await.unwrap());
    }

    #[tokio::test]
    async fn test_update_stock_quantity_negative_always_fails() {
        // Fails before any storage call, whether or not the id exists.
        let mock_repo = MockProductRepository::new();
        let service = InventoryService::new(mock_repo);

        let result = service.update_stock_quantity(1, -1).await;
        assert!(matches!(result, Err(ProductError::Validation(_))));
    }

    #[tokio::test]
    async fn test_update_stock_quantity_missing_id_returns_false_without_write() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_get_by_id()
            .with(predicate::eq(42i64))
            .returning(|_| Ok(None));
        // expect_update deliberately absent: a write would panic the mock.

        let service = InventoryService::new(mock_repo);
        assert!(!service.update_stock_quantity(42, 5).await.unwrap());
    }

    #[tokio::test]
    async fn test_update_stock_quantity_persists_only_the_quantity() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_get_by_id().returning(|id| {
            Ok(Some(Product {
                id,
                name: "Laptop".to_string(),
                quantity: 3,
                price: 999.99,
                category: "Electronics".to_string(),
            }))
        });
        mock_repo
            .expect_update()
            .withf(|p| p.quantity == 9 && p.name == "Laptop" && p.id == 1)
            .returning(|_| Ok(true));

        let service = InventoryService::new(mock_repo);
        assert!(service.update_stock_quantity(1, 9).await.unwrap());
    }

    #[tokio::test]
    async fn test_search_by_category_blank_fails() {
        let mock_repo = MockProductRepository::new();
        let service = InventoryService::new(mock_repo);

        let result = service.search_by_category("  ").await;
        assert!(matches!(result, Err(ProductError::Validation(_))));
    }

    #[tokio::test]
    async fn test_search_by_name_blank_fails() {
        let mock_repo = MockProductRepository::new();
        let service = InventoryService::new(mock_repo);

        let result = service.search_by_name("").await;
        assert!(matches!(result, Err(ProductError::Validation(_))));
    }

    #[tokio::test]
    async fn test_low_stock_negative_threshold_fails() {
        let mock_repo = MockProductRepository::new();
        let service = InventoryService::new(mock_repo);

        let result = service.low_stock_products(-1).await;
        assert!(matches!(result, Err(ProductError::Validation(_))));
    }

    #[tokio::test]
    async fn test_get_product_absence_is_none() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_get_by_id()
            .with(predicate::eq(5i64))
            .returning(|_| Ok(None));

        let service = InventoryService::new(mock_repo);
        assert!(service.get_product(5).await.unwrap().is_none());
    }
}
