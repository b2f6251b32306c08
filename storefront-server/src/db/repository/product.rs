//! Product Repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::{Database, tables::PRODUCTS};
use serde::Serialize;
use shared::models::{Category, Product, Subcategory};

const SELECT_ALL: &str = "SELECT *, record::id(id) AS id FROM products";
const SELECT_ONE: &str = "SELECT *, record::id(id) AS id FROM type::thing('products', $id)";

/// Stored document body; the key lives in the record id
#[derive(Debug, Clone, Serialize)]
struct ProductContent {
    name: String,
    price: i64,
    image: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    images: Vec<String>,
    description: String,
    stock: i64,
    category: Category,
    #[serde(skip_serializing_if = "Option::is_none")]
    subcategory: Option<Subcategory>,
}

impl From<Product> for ProductContent {
    fn from(p: Product) -> Self {
        Self {
            name: p.name,
            price: p.price,
            image: p.image,
            images: p.images,
            description: p.description,
            stock: p.stock,
            category: p.category,
            subcategory: p.subcategory,
        }
    }
}

#[derive(Clone)]
pub struct ProductRepository {
    base: BaseRepository,
}

impl ProductRepository {
    pub fn new(db: Database) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all products in key order
    pub async fn find_all(&self) -> RepoResult<Vec<Product>> {
        let products: Vec<Product> = self.base.db().query(SELECT_ALL).await?.take(0)?;
        Ok(products)
    }

    /// Find product by key
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Product>> {
        let mut result = self
            .base
            .db()
            .query(SELECT_ONE)
            .bind(("id", id.to_string()))
            .await?;
        let product: Option<Product> = result.take(0)?;
        Ok(product)
    }

    pub async fn count(&self) -> RepoResult<usize> {
        #[derive(serde::Deserialize)]
        struct Count {
            count: usize,
        }
        let mut result = self
            .base
            .db()
            .query("SELECT count() AS count FROM products GROUP ALL")
            .await?;
        let row: Option<Count> = result.take(0)?;
        Ok(row.map(|r| r.count).unwrap_or(0))
    }

    /// Create a product under `product.id`
    pub async fn create(&self, product: Product) -> RepoResult<Product> {
        let id = product.id.clone();
        self.base
            .db()
            .query("CREATE type::thing($table, $id) CONTENT $data RETURN NONE")
            .bind(("table", PRODUCTS))
            .bind(("id", id.clone()))
            .bind(("data", ProductContent::from(product)))
            .await?
            .check()?;

        self.find_by_id(&id)
            .await?
            .ok_or_else(|| RepoError::Database(format!("Failed to create product {}", id)))
    }

    /// Replace an existing product's document
    pub async fn update(&self, product: Product) -> RepoResult<Product> {
        let id = product.id.clone();
        if self.find_by_id(&id).await?.is_none() {
            return Err(RepoError::NotFound(format!("Product {}", id)));
        }

        self.base
            .db()
            .query("UPDATE type::thing($table, $id) CONTENT $data RETURN NONE")
            .bind(("table", PRODUCTS))
            .bind(("id", id.clone()))
            .bind(("data", ProductContent::from(product)))
            .await?
            .check()?;

        self.find_by_id(&id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Product {}", id)))
    }

    /// Create or replace a product under its own key
    pub async fn upsert(&self, product: Product) -> RepoResult<()> {
        let id = product.id.clone();
        self.base
            .db()
            .query("UPSERT type::thing($table, $id) CONTENT $data RETURN NONE")
            .bind(("table", PRODUCTS))
            .bind(("id", id))
            .bind(("data", ProductContent::from(product)))
            .await?
            .check()?;
        Ok(())
    }

    /// Hard delete a product
    pub async fn delete(&self, id: &str) -> RepoResult<()> {
        if self.find_by_id(id).await?.is_none() {
            return Err(RepoError::NotFound(format!("Product {}", id)));
        }
        self.base
            .db()
            .query("DELETE type::thing($table, $id)")
            .bind(("table", PRODUCTS))
            .bind(("id", id.to_string()))
            .await?
            .check()?;
        Ok(())
    }
}
