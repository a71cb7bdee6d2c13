//! In-memory implementation of the product storage contract.

use async_trait::async_trait;
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::RwLock;

use crate::error::ProductResult;
use crate::models::{CreateProduct, Product};
use crate::repository::ProductRepository;

/// In-memory implementation of [`ProductRepository`].
///
/// Backs the binaries in this workspace and the integration tests; a durable
/// engine lives behind the same trait. Ids are assigned from a process-local
/// monotonically increasing counter, starting at 1.
#[derive(Debug)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<HashMap<i64, Product>>>,
    next_id: AtomicI64,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self {
            products: Arc::new(RwLock::new(HashMap::new())),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for InMemoryProductRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn create(&self, input: CreateProduct) -> ProductResult<Product> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let product = Product::from_create(id, input);

        let mut products = self.products.write().await;
        products.insert(id, product.clone());

        tracing::info!(product_id = id, name = %product.name, "Created product");
        Ok(product)
    }

    async fn get_by_id(&self, id: i64) -> ProductResult<Option<Product>> {
        let products = self.products.read().await;
        Ok(products.get(&id).cloned())
    }

    async fn list_all(&self) -> ProductResult<Vec<Product>> {
        let products = self.products.read().await;
        Ok(products.values().cloned().collect())
    }

    async fn find_by_category(&self, category: &str) -> ProductResult<Vec<Product>> {
        let products = self.products.read().await;
        Ok(products
            .values()
            .filter(|p| p.category == category)
            .cloned()
            .collect())
    }

    async fn find_by_name(&self, fragment: &str) -> ProductResult<Vec<Product>> {
        let needle = fragment.to_lowercase();
        let products = self.products.read().await;
        Ok(products
            .values()
            .filter(|p| p.name.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    async fn find_low_stock(&self, threshold: i32) -> ProductResult<Vec<Product>> {
        let products = self.products.read().await;
        Ok(products
            .values()
            .filter(|p| p.quantity <= threshold)
            .cloned()
            .collect())
    }

    async fn update(&self, product: &Product) -> ProductResult<bool> {
        let mut products = self.products.write().await;
        match products.get_mut(&product.id) {
            Some(existing) => {
                *existing = product.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: i64) -> ProductResult<bool> {
        let mut products = self.products.write().await;
        Ok(products.remove(&id).is_some())
    }

    async fn distinct_categories(&self) -> ProductResult<Vec<String>> {
        let products = self.products.read().await;
        let categories: BTreeSet<String> =
            products.values().map(|p| p.category.clone()).collect();
        Ok(categories.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(name: &str, quantity: i32, price: f64, category: &str) -> CreateProduct {
        CreateProduct {
            name: name.to_string(),
            quantity,
            price,
            category: category.to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let repo = InMemoryProductRepository::new();

        let first = repo
            .create(sample("Laptop", 3, 999.99, "Electronics"))
            .await
            .unwrap();
        let second = repo
            .create(sample("Desk", 7, 150.0, "Furniture"))
            .await
            .unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn test_default_construction_starts_ids_at_one() {
        let repo = InMemoryProductRepository::default();

        let first = repo
            .create(sample("Laptop", 3, 999.99, "Electronics"))
            .await
            .unwrap();

        assert_eq!(first.id, 1);
    }

    #[tokio::test]
    async fn test_create_then_get_returns_equal_record() {
        let repo = InMemoryProductRepository::new();

        let created = repo
            .create(sample("Laptop", 3, 999.99, "Electronics"))
            .await
            .unwrap();
        let fetched = repo.get_by_id(created.id).await.unwrap();

        assert_eq!(fetched, Some(created));
    }

    #[tokio::test]
    async fn test_find_by_name_is_case_insensitive_substring() {
        let repo = InMemoryProductRepository::new();
        for name in ["Laptop", "Desktop", "Notebook"] {
            repo.create(sample(name, 1, 10.0, "Electronics"))
                .await
                .unwrap();
        }

        let mut names: Vec<String> = repo
            .find_by_name("top")
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        names.sort();

        assert_eq!(names, vec!["Desktop", "Laptop"]);
    }

    #[tokio::test]
    async fn test_find_low_stock_includes_threshold_boundary() {
        let repo = InMemoryProductRepository::new();
        for (name, quantity) in [("A", 5), ("B", 10), ("C", 11)] {
            repo.create(sample(name, quantity, 1.0, "Misc"))
                .await
                .unwrap();
        }

        let low = repo.find_low_stock(10).await.unwrap();
        assert_eq!(low.len(), 2);
        assert!(low.iter().all(|p| p.quantity <= 10));
    }

    #[tokio::test]
    async fn test_find_by_category_exact_match() {
        let repo = InMemoryProductRepository::new();
        repo.create(sample("Lamp", 2, 25.0, "Furniture"))
            .await
            .unwrap();
        repo.create(sample("Cable", 9, 5.0, "Electronics"))
            .await
            .unwrap();

        let found = repo.find_by_category("Furniture").await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Lamp");

        // No partial or case-folded matching
        assert!(repo.find_by_category("furniture").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_distinct_categories_sorted_without_duplicates() {
        let repo = InMemoryProductRepository::new();
        for category in ["Electronics", "Electronics", "Furniture"] {
            repo.create(sample("X", 1, 1.0, category)).await.unwrap();
        }

        let categories = repo.distinct_categories().await.unwrap();
        assert_eq!(categories, vec!["Electronics", "Furniture"]);
    }

    #[tokio::test]
    async fn test_delete_twice_reports_existence_once() {
        let repo = InMemoryProductRepository::new();
        let created = repo
            .create(sample("Laptop", 3, 999.99, "Electronics"))
            .await
            .unwrap();

        assert!(repo.delete(created.id).await.unwrap());
        assert!(!repo.delete(created.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_update_missing_record_returns_false() {
        let repo = InMemoryProductRepository::new();
        let phantom = Product {
            id: 42,
            name: "Ghost".to_string(),
            quantity: 1,
            price: 1.0,
            category: "Misc".to_string(),
        };

        assert!(!repo.update(&phantom).await.unwrap());
    }
}
