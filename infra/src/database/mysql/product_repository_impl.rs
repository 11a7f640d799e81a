//! MySQL implementation of the ProductRepository trait.

use async_trait::async_trait;
use sqlx::{MySqlPool, Row};

use ch_core::domain::entities::product::Product;
use ch_core::errors::DomainError;
use ch_core::repositories::ProductRepository;

/// MySQL-backed product repository
pub struct MySqlProductRepository {
    pool: MySqlPool,
}

impl MySqlProductRepository {
    /// Create a new MySQL product repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_product(row: &sqlx::mysql::MySqlRow) -> Result<Product, DomainError> {
        Ok(Product {
            id: row.try_get("id").map_err(|e| DomainError::Internal {
                message: format!("Failed to get id: {}", e),
            })?,
            name: row.try_get("name").map_err(|e| DomainError::Internal {
                message: format!("Failed to get name: {}", e),
            })?,
            category: row.try_get("category").map_err(|e| DomainError::Internal {
                message: format!("Failed to get category: {}", e),
            })?,
            price: row.try_get("price").map_err(|e| DomainError::Internal {
                message: format!("Failed to get price: {}", e),
            })?,
        })
    }
}

#[async_trait]
impl ProductRepository for MySqlProductRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<Product>, DomainError> {
        let row = sqlx::query("SELECT id, name, category, price FROM products WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to find product: {}", e),
            })?;

        row.as_ref().map(Self::row_to_product).transpose()
    }

    async fn find_all(&self) -> Result<Vec<Product>, DomainError> {
        let rows = sqlx::query("SELECT id, name, category, price FROM products")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to list products: {}", e),
            })?;

        rows.iter().map(Self::row_to_product).collect()
    }

    async fn create(&self, product: Product) -> Result<Product, DomainError> {
        sqlx::query("INSERT INTO products (id, name, category, price) VALUES (?, ?, ?, ?)")
            .bind(&product.id)
            .bind(&product.name)
            .bind(&product.category)
            .bind(product.price)
            .execute(&self.pool)
            .await
            .map_err(|e| match &e {
                sqlx::Error::Database(db) if db.is_unique_violation() => DomainError::Conflict {
                    resource: format!("product {}", product.id),
                },
                _ => DomainError::Internal {
                    message: format!("Failed to create product: {}", e),
                },
            })?;

        Ok(product)
    }

    async fn update(&self, product: Product) -> Result<Product, DomainError> {
        let result = sqlx::query("UPDATE products SET name = ?, category = ?, price = ? WHERE id = ?")
            .bind(&product.name)
            .bind(&product.category)
            .bind(product.price)
            .bind(&product.id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to update product: {}", e),
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound {
                resource: format!("product {}", product.id),
            });
        }

        Ok(product)
    }

    async fn delete(&self, id: &str) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM products WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to delete product: {}", e),
            })?;

        Ok(result.rows_affected() > 0)
    }
}
