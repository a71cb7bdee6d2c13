use async_trait::async_trait;

use crate::error::ProductResult;
use crate::models::{CreateProduct, Product};

/// Repository trait for Product persistence
///
/// This is the storage contract the service layer depends on. Implementations
/// can use different backends; id assignment is the implementation's job.
/// Update and delete report whether a matching record existed rather than
/// failing when it did not.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Persist a new product and assign its id
    async fn create(&self, input: CreateProduct) -> ProductResult<Product>;

    /// Get a product by id
    async fn get_by_id(&self, id: i64) -> ProductResult<Option<Product>>;

    /// All products, unordered
    async fn list_all(&self) -> ProductResult<Vec<Product>>;

    /// Products whose category equals the argument exactly
    async fn find_by_category(&self, category: &str) -> ProductResult<Vec<Product>>;

    /// Products whose name contains the fragment, case-insensitively
    async fn find_by_name(&self, fragment: &str) -> ProductResult<Vec<Product>>;

    /// Products with `quantity <= threshold`
    async fn find_low_stock(&self, threshold: i32) -> ProductResult<Vec<Product>>;

    /// Overwrite the record matching `product.id`; false when no match
    async fn update(&self, product: &Product) -> ProductResult<bool>;

    /// Remove the record matching `id`; false when no match
    async fn delete(&self, id: i64) -> ProductResult<bool>;

    /// Sorted, deduplicated category strings across all products
    async fn distinct_categories(&self) -> ProductResult<Vec<String>>;
}
