//! In-memory implementation of ProductRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::product::Product;
use crate::errors::DomainError;

use super::trait_::ProductRepository;

/// Mock product repository backed by a HashMap
pub struct MockProductRepository {
    products: Arc<RwLock<HashMap<String, Product>>>,
}

impl MockProductRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            products: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for MockProductRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductRepository for MockProductRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<Product>, DomainError> {
        let products = self.products.read().await;
        Ok(products.get(id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Product>, DomainError> {
        let products = self.products.read().await;
        Ok(products.values().cloned().collect())
    }

    async fn create(&self, product: Product) -> Result<Product, DomainError> {
        let mut products = self.products.write().await;

        if products.contains_key(&product.id) {
            return Err(DomainError::Conflict {
                resource: format!("product {}", product.id),
            });
        }

        products.insert(product.id.clone(), product.clone());
        Ok(product)
    }

    async fn update(&self, product: Product) -> Result<Product, DomainError> {
        let mut products = self.products.write().await;

        if !products.contains_key(&product.id) {
            return Err(DomainError::NotFound {
                resource: format!("product {}", product.id),
            });
        }

        products.insert(product.id.clone(), product.clone());
        Ok(product)
    }

    async fn delete(&self, id: &str) -> Result<bool, DomainError> {
        let mut products = self.products.write().await;
        Ok(products.remove(id).is_some())
    }
}
