//! Catalog view: fetch, filter, and card rendering
//!
//! The product list is fetched once; search and filter changes are applied
//! locally with the same functions the server uses for
//! `GET /api/products`.

use shared::catalog::{CatalogFilter, FilterOption, filter_options, filter_products, preview};
use shared::models::Product;
use shared::order::format_idr;
use shared::seed::seed_products;

use crate::http::HttpClient;

/// Where the loaded products came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogSource {
    Server,
    /// Built-in catalog, used when the server is unreachable or empty
    Seed,
}

/// Product card contents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCard {
    pub id: String,
    pub name: String,
    pub price: String,
    pub image: Option<String>,
    pub preview: String,
    pub in_stock: bool,
}

impl From<&Product> for ProductCard {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            price: format_idr(product.price),
            image: product.gallery().first().map(|s| s.to_string()),
            preview: preview(&product.description),
            in_stock: product.in_stock(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CatalogView {
    products: Vec<Product>,
    source: CatalogSource,
    search: String,
    filter: CatalogFilter,
}

impl CatalogView {
    /// Fetch the catalog, falling back to the seed products
    pub async fn load<C: HttpClient>(client: &C) -> Self {
        match client.get::<Vec<Product>>("/api/products").await {
            Ok(products) if !products.is_empty() => {
                tracing::debug!(count = products.len(), "Catalog loaded");
                Self::with_source(products, CatalogSource::Server)
            }
            Ok(_) => {
                tracing::info!("Server catalog empty, using seed products");
                Self::seed()
            }
            Err(e) => {
                tracing::warn!(error = %e, "Catalog fetch failed, using seed products");
                Self::seed()
            }
        }
    }

    pub fn seed() -> Self {
        Self::with_source(seed_products(), CatalogSource::Seed)
    }

    pub fn from_products(products: Vec<Product>) -> Self {
        Self::with_source(products, CatalogSource::Server)
    }

    fn with_source(products: Vec<Product>, source: CatalogSource) -> Self {
        Self {
            products,
            source,
            search: String::new(),
            filter: CatalogFilter::All,
        }
    }

    pub fn source(&self) -> CatalogSource {
        self.source
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn product(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    /// Select a filter menu entry by id (`all` or a subcategory)
    pub fn select_filter(&mut self, id: &str) {
        self.filter = CatalogFilter::parse(id);
    }

    pub fn selected_filter(&self) -> &str {
        self.filter.as_str()
    }

    pub fn filter_options(&self) -> Vec<FilterOption> {
        filter_options()
    }

    /// Products matching the current search and filter, in fetch order
    pub fn visible(&self) -> Vec<Product> {
        filter_products(&self.products, self.search.trim(), &self.filter)
    }

    pub fn cards(&self) -> Vec<ProductCard> {
        self.visible().iter().map(ProductCard::from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{Category, Subcategory};

    fn product(id: &str, name: &str, subcategory: Subcategory) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            price: 1_250_000,
            image: String::new(),
            images: vec![format!("/images/{id}.jpg")],
            description: "**Baru** dengan [garansi](https://example.com) resmi".to_string(),
            stock: 0,
            category: subcategory.parent(),
            subcategory: Some(subcategory),
        }
    }

    #[test]
    fn test_search_and_filter_combine() {
        let mut view = CatalogView::from_products(vec![
            product("a", "Logitech Mouse", Subcategory::Mouse),
            product("b", "Keychron Keyboard", Subcategory::Keyboard),
            product("c", "Razer Mouse Pad", Subcategory::Keyboard),
        ]);
        assert_eq!(view.visible().len(), 3);

        view.set_search("MOUSE");
        assert_eq!(view.visible().len(), 2);

        view.select_filter("keyboard");
        let visible = view.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "c");

        view.select_filter("all");
        view.set_search("");
        assert_eq!(view.visible().len(), 3);
    }

    #[test]
    fn test_unknown_filter_shows_nothing() {
        let mut view = CatalogView::seed();
        view.select_filter("toaster");
        assert_eq!(view.selected_filter(), "toaster");
        assert!(view.visible().is_empty());
    }

    #[test]
    fn test_card_contents() {
        let view = CatalogView::from_products(vec![product("a", "Webcam", Subcategory::Webcam)]);
        let card = &view.cards()[0];
        assert_eq!(card.price, "Rp 1.250.000");
        assert_eq!(card.image.as_deref(), Some("/images/a.jpg"));
        assert_eq!(card.preview, "Baru dengan garansi resmi");
        assert!(!card.in_stock);
    }

    #[test]
    fn test_seed_view() {
        let view = CatalogView::seed();
        assert_eq!(view.source(), CatalogSource::Seed);
        assert_eq!(view.products().len(), 9);
        assert_eq!(view.filter_options()[0].id, "all");
        assert_eq!(view.product("1").unwrap().category, Category::Gaming);
    }
}
