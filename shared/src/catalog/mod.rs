//! Catalog filtering
//!
//! A product is shown when it matches the search term (case-insensitive, on
//! name or description) and the selected filter (`all` or a subcategory).
//! The server's public list and the client catalog view share this code.

pub mod description;
pub mod export;

use crate::models::{Product, Subcategory};
use serde::{Deserialize, Serialize};

pub use description::{preview, strip_markdown, truncate};
pub use export::{EXPORT_FILE_NAME, render_products_ts};

/// Filter value meaning "no subcategory restriction"
pub const FILTER_ALL: &str = "all";

/// Selected catalog filter
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CatalogFilter {
    #[default]
    All,
    Subcategory(Subcategory),
    /// Value that names no subcategory; matches nothing
    Unknown(String),
}

impl CatalogFilter {
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value == FILTER_ALL {
            return Self::All;
        }
        match value.parse::<Subcategory>() {
            Ok(sub) => Self::Subcategory(sub),
            Err(_) => Self::Unknown(value.to_string()),
        }
    }

    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Self::All => true,
            Self::Subcategory(sub) => product.subcategory == Some(*sub),
            Self::Unknown(_) => false,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::All => FILTER_ALL,
            Self::Subcategory(sub) => sub.as_str(),
            Self::Unknown(value) => value,
        }
    }
}

/// Catalog query: free-text search plus filter
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogQuery {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

impl CatalogQuery {
    pub fn filter(&self) -> CatalogFilter {
        CatalogFilter::parse(self.category.as_deref().unwrap_or(FILTER_ALL))
    }

    /// Search text as typed; surrounding spaces are part of the term
    pub fn search_term(&self) -> &str {
        self.search.as_deref().unwrap_or("")
    }
}

pub fn matches_search(product: &Product, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    product.name.to_lowercase().contains(&needle)
        || product.description.to_lowercase().contains(&needle)
}

/// Filter products, preserving input order
pub fn filter_products(products: &[Product], search: &str, filter: &CatalogFilter) -> Vec<Product> {
    products
        .iter()
        .filter(|p| matches_search(p, search) && filter.matches(p))
        .cloned()
        .collect()
}

/// Apply a [`CatalogQuery`]
pub fn apply_query(products: &[Product], query: &CatalogQuery) -> Vec<Product> {
    filter_products(products, query.search_term(), &query.filter())
}

/// Entry in the catalog filter menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOption {
    pub id: String,
    pub name: String,
    pub icon: String,
}

/// Filter menu: `all` first, then every subcategory
pub fn filter_options() -> Vec<FilterOption> {
    [
        (FILTER_ALL, "Semua Produk", "apps"),
        ("mouse", "Mouse", "mouse"),
        ("keyboard", "Keyboard", "keyboard"),
        ("headset", "Audio", "headphones"),
        ("computer", "PC & Laptop", "computer"),
        ("laptop", "Laptop", "laptop"),
        ("webcam", "Webcam", "videocam"),
        ("monitor", "Monitor", "desktop_windows"),
        ("speaker", "Speaker", "volume_up"),
        ("microphone", "Microphone", "mic"),
        ("powerbank", "Power Bank", "battery_charging_full"),
        ("cable", "Cable", "cable"),
        ("storage", "Storage", "storage"),
    ]
    .into_iter()
    .map(|(id, name, icon)| FilterOption {
        id: id.to_string(),
        name: name.to_string(),
        icon: icon.to_string(),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use crate::seed::seed_products;

    fn product(id: &str, name: &str, category: Category, sub: Option<Subcategory>) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            price: 100_000,
            image: format!("/images/{id}.jpg"),
            images: Vec::new(),
            description: format!("Deskripsi {name}"),
            stock: 5,
            category,
            subcategory: sub,
        }
    }

    #[test]
    fn test_filter_by_subcategory_ignores_category_field() {
        let products = vec![
            product("a", "Mouse A", Category::Gaming, Some(Subcategory::Mouse)),
            // Category deliberately inconsistent
            product("b", "Mouse B", Category::Mobile, Some(Subcategory::Mouse)),
            product("c", "Keyboard", Category::Gaming, Some(Subcategory::Keyboard)),
            product("d", "Legacy Mouse", Category::Gaming, None),
        ];
        let hits = filter_products(&products, "", &CatalogFilter::parse("mouse"));
        let ids: Vec<_> = hits.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn test_search_is_case_insensitive_on_name_and_description() {
        let products = seed_products();
        let hits = filter_products(&products, "WIRELESS", &CatalogFilter::All);
        assert!(hits.len() >= 2);
        assert!(hits.iter().all(|p| {
            p.name.to_lowercase().contains("wireless")
                || p.description.to_lowercase().contains("wireless")
        }));

        let all = filter_products(&products, "", &CatalogFilter::All);
        assert_eq!(all.len(), products.len());
        assert_eq!(all[0].id, products[0].id);
    }

    #[test]
    fn test_unknown_filter_matches_nothing() {
        let products = vec![product("a", "Mouse", Category::Gaming, Some(Subcategory::Mouse))];
        let filter = CatalogFilter::parse("gadgets");
        assert_eq!(filter, CatalogFilter::Unknown("gadgets".to_string()));
        assert!(filter_products(&products, "", &filter).is_empty());
    }

    #[test]
    fn test_query_defaults() {
        let query = CatalogQuery::default();
        assert_eq!(query.filter(), CatalogFilter::All);
        assert_eq!(query.search_term(), "");
    }

    #[test]
    fn test_search_term_is_not_trimmed() {
        let products = vec![product("a", "Mouse", Category::Gaming, Some(Subcategory::Mouse))];
        let query = CatalogQuery {
            search: Some("mouse ".to_string()),
            ..Default::default()
        };
        assert_eq!(query.search_term(), "mouse ");
        assert!(apply_query(&products, &query).is_empty());

        let query = CatalogQuery {
            search: Some("mouse".to_string()),
            ..Default::default()
        };
        assert_eq!(apply_query(&products, &query).len(), 1);
    }

    #[test]
    fn test_filter_options_cover_all_subcategories() {
        let options = filter_options();
        assert_eq!(options[0].id, "all");
        assert_eq!(options.len(), Subcategory::ALL.len() + 1);
        for sub in Subcategory::ALL {
            assert!(options.iter().any(|o| o.id == sub.as_str()));
        }
    }
}
