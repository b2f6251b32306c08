//! Catalog Service - products for the storefront and the admin panel
//!
//! Public reads fall back to the built-in seed catalog while the
//! `products` collection is empty.

use shared::catalog::{CatalogQuery, apply_query, render_products_ts};
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Product, ProductInput};
use shared::seed::{seed_product, seed_products};
use shared::util::new_record_id;

use crate::db::repository::{ProductRepository, RepoError};

fn product_not_found(id: &str) -> AppError {
    AppError::new(ErrorCode::ProductNotFound).with_detail("id", id)
}

fn map_repo_error(id: &str, err: RepoError) -> AppError {
    match err {
        RepoError::NotFound(_) => product_not_found(id),
        other => other.into(),
    }
}

#[derive(Clone)]
pub struct CatalogService {
    products: ProductRepository,
}

impl CatalogService {
    pub fn new(products: ProductRepository) -> Self {
        Self { products }
    }

    /// Stored products, or the seed catalog when nothing is stored
    pub async fn all(&self) -> AppResult<Vec<Product>> {
        let products = self.products.find_all().await?;
        if products.is_empty() {
            tracing::debug!("Product collection empty, serving seed catalog");
            return Ok(seed_products());
        }
        Ok(products)
    }

    /// Catalog listing with search and filter applied
    pub async fn list(&self, query: &CatalogQuery) -> AppResult<Vec<Product>> {
        let products = self.all().await?;
        Ok(apply_query(&products, query))
    }

    /// Single product, falling back to the seed product with the same id
    pub async fn get(&self, id: &str) -> AppResult<Product> {
        if let Some(product) = self.products.find_by_id(id).await? {
            return Ok(product);
        }
        seed_product(id).ok_or_else(|| product_not_found(id))
    }

    pub async fn create(&self, input: ProductInput) -> AppResult<Product> {
        let product = input.into_product(new_record_id())?;
        let created = self.products.create(product).await?;
        tracing::info!(id = %created.id, name = %created.name, "Product created");
        Ok(created)
    }

    pub async fn update(&self, id: &str, input: ProductInput) -> AppResult<Product> {
        let product = input.into_product(id)?;
        let updated = self
            .products
            .update(product)
            .await
            .map_err(|e| map_repo_error(id, e))?;
        tracing::info!(id = %updated.id, name = %updated.name, "Product updated");
        Ok(updated)
    }

    pub async fn delete(&self, id: &str) -> AppResult<()> {
        self.products
            .delete(id)
            .await
            .map_err(|e| map_repo_error(id, e))?;
        tracing::info!(id = %id, "Product deleted");
        Ok(())
    }

    /// Write every seed product under its seed id
    ///
    /// Stops at the first failed write.
    pub async fn sync_seed(&self) -> AppResult<usize> {
        let seed = seed_products();
        let total = seed.len();
        for product in seed {
            let id = product.id.clone();
            self.products.upsert(product).await.map_err(|e| {
                tracing::error!(id = %id, error = %e, "Seed sync failed");
                AppError::from(e)
            })?;
        }
        tracing::info!(synced = total, "Seed catalog synced");
        Ok(total)
    }

    /// Render the stored products as `products.ts`
    pub async fn export(&self) -> AppResult<String> {
        let products = self.products.find_all().await?;
        tracing::info!(count = products.len(), "Products exported");
        Ok(render_products_ts(&products))
    }
}
