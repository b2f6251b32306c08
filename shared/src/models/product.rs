//! Product Model

use super::category::{Category, Subcategory};
use crate::error::{AppError, AppResult, ErrorCode};
use crate::order::MAX_UNIT_PRICE;
use serde::{Deserialize, Serialize};

/// Catalog product
///
/// `price` is in whole rupiah. `image` is the legacy single-image field and
/// always mirrors the first gallery entry for products written by the admin
/// endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: i64,
    #[serde(default)]
    pub image: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,
    #[serde(default)]
    pub description: String,
    pub stock: i64,
    pub category: Category,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<Subcategory>,
}

impl Product {
    /// Images to display, in order
    pub fn gallery(&self) -> Vec<&str> {
        if !self.images.is_empty() {
            self.images.iter().map(String::as_str).collect()
        } else if !self.image.is_empty() {
            vec![self.image.as_str()]
        } else {
            Vec::new()
        }
    }

    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Category implied by the subcategory, falling back to the stored one
    pub fn effective_category(&self) -> Category {
        self.subcategory
            .map(|sub| sub.parent())
            .unwrap_or(self.category)
    }
}

/// Admin create/update payload
///
/// `category` is accepted for compatibility but ignored whenever a
/// subcategory is present.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductInput {
    pub name: String,
    pub price: i64,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub description: String,
    pub stock: i64,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub subcategory: Option<Subcategory>,
}

impl ProductInput {
    /// Check the payload and build the stored product
    ///
    /// Enforces: non-empty name, price within `0..=MAX_UNIT_PRICE`,
    /// non-negative stock, a subcategory, and at least one image. Category is always derived from the
    /// subcategory.
    pub fn into_product(self, id: impl Into<String>) -> AppResult<Product> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(
                AppError::with_message(ErrorCode::RequiredField, "Product name is required")
                    .with_detail("field", "name"),
            );
        }
        if !(0..=MAX_UNIT_PRICE).contains(&self.price) {
            return Err(AppError::new(ErrorCode::ProductInvalidPrice)
                .with_detail("field", "price")
                .with_detail("max", MAX_UNIT_PRICE));
        }
        if self.stock < 0 {
            return Err(
                AppError::with_message(ErrorCode::ValueOutOfRange, "Stock must not be negative")
                    .with_detail("field", "stock"),
            );
        }
        let subcategory = self
            .subcategory
            .ok_or_else(|| AppError::new(ErrorCode::ProductSubcategoryRequired))?;

        let mut images: Vec<String> = self
            .images
            .into_iter()
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .collect();
        if images.is_empty() {
            if let Some(image) = self.image.map(|url| url.trim().to_string()) {
                if !image.is_empty() {
                    images.push(image);
                }
            }
        }
        let image = images
            .first()
            .cloned()
            .ok_or_else(|| AppError::new(ErrorCode::ProductImageRequired))?;

        Ok(Product {
            id: id.into(),
            name,
            price: self.price,
            image,
            images,
            description: self.description,
            stock: self.stock,
            category: subcategory.parent(),
            subcategory: Some(subcategory),
        })
    }
}

impl From<&Product> for ProductInput {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            price: product.price,
            image: Some(product.image.clone()).filter(|s| !s.is_empty()),
            images: product.images.clone(),
            description: product.description.clone(),
            stock: product.stock,
            category: Some(product.category),
            subcategory: product.subcategory,
        }
    }
}
