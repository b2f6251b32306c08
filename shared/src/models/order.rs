//! Order Model

use super::product::Product;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Order lifecycle status
///
/// Transitions are unconstrained: an admin may set any status at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Confirmed,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::Confirmed,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Shipped => "shipped",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Confirmed => "Confirmed",
            Self::Shipped => "Shipped",
            Self::Delivered => "Delivered",
            Self::Cancelled => "Cancelled",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = super::category::UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| super::category::UnknownCategory {
                kind: "status",
                value: s.to_string(),
            })
    }
}

/// Customer order
///
/// `product` is a snapshot taken at order time; later catalog edits do not
/// touch it. `whatsapp` holds the normalised `62…` digits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub customer_name: String,
    pub whatsapp: String,
    pub address: String,
    pub product: Product,
    pub quantity: u32,
    pub total_price: i64,
    #[serde(default)]
    pub status: OrderStatus,
    /// Unix epoch milliseconds
    pub created_at: i64,
}

impl Order {
    /// Direct chat link to the customer
    pub fn customer_chat_url(&self) -> String {
        format!("https://wa.me/{}", self.whatsapp)
    }

    /// Case-insensitive match on customer or product name, substring on phone
    pub fn matches_search(&self, term: &str) -> bool {
        if term.is_empty() {
            return true;
        }
        let needle = term.to_lowercase();
        self.customer_name.to_lowercase().contains(&needle)
            || self.product.name.to_lowercase().contains(&needle)
            || self.whatsapp.contains(term)
    }
}

/// Per-status counts for the admin order board
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub total: usize,
    pub pending: usize,
    pub confirmed: usize,
    pub shipped: usize,
    pub delivered: usize,
    pub cancelled: usize,
}

impl OrderSummary {
    pub fn from_orders<'a>(orders: impl IntoIterator<Item = &'a Order>) -> Self {
        let mut summary = Self::default();
        for order in orders {
            summary.total += 1;
            match order.status {
                OrderStatus::Pending => summary.pending += 1,
                OrderStatus::Confirmed => summary.confirmed += 1,
                OrderStatus::Shipped => summary.shipped += 1,
                OrderStatus::Delivered => summary.delivered += 1,
                OrderStatus::Cancelled => summary.cancelled += 1,
            }
        }
        summary
    }
}

/// Status filter on the order board: `all` or one status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(OrderStatus),
}

impl StatusFilter {
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            None | Some("") | Some("all") => Self::All,
            Some(other) => other.parse().map(Self::Only).unwrap_or(Self::All),
        }
    }

    pub fn matches(&self, status: OrderStatus) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => *wanted == status,
        }
    }
}

/// Apply the board's status filter and search, preserving order
pub fn filter_orders<'a>(orders: &'a [Order], status: StatusFilter, search: &str) -> Vec<&'a Order> {
    orders
        .iter()
        .filter(|order| status.matches(order.status) && order.matches_search(search))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::seed_products;

    fn order(id: &str, name: &str, phone: &str, status: OrderStatus) -> Order {
        let product = seed_products().remove(0);
        Order {
            id: id.to_string(),
            customer_name: name.to_string(),
            whatsapp: phone.to_string(),
            address: "Jl. Merdeka No. 10, Bandung".to_string(),
            total_price: product.price,
            product,
            quantity: 1,
            status,
            created_at: 1_700_000_000_000,
        }
    }

    #[test]
    fn test_summary_counts() {
        let orders = vec![
            order("a", "Budi", "6281", OrderStatus::Pending),
            order("b", "Sari", "6282", OrderStatus::Pending),
            order("c", "Andi", "6283", OrderStatus::Shipped),
            order("d", "Dewi", "6284", OrderStatus::Cancelled),
        ];
        let summary = OrderSummary::from_orders(&orders);
        assert_eq!(summary.total, 4);
        assert_eq!(summary.pending, 2);
        assert_eq!(summary.shipped, 1);
        assert_eq!(summary.cancelled, 1);
        assert_eq!(summary.delivered, 0);
    }

    #[test]
    fn test_filter_by_status_and_search() {
        let orders = vec![
            order("a", "Budi Santoso", "6281234", OrderStatus::Pending),
            order("b", "Sari", "6289999", OrderStatus::Confirmed),
        ];

        let hits = filter_orders(&orders, StatusFilter::parse(Some("all")), "budi");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "a");

        let hits = filter_orders(&orders, StatusFilter::parse(Some("confirmed")), "");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "b");

        let hits = filter_orders(&orders, StatusFilter::All, "9999");
        assert_eq!(hits[0].id, "b");

        // Product name search
        let hits = filter_orders(&orders, StatusFilter::All, "gaming mouse");
        assert_eq!(hits.len(), 2);
    }

    #[test]
    fn test_status_serde() {
        let json = serde_json::to_string(&OrderStatus::Delivered).unwrap();
        assert_eq!(json, "\"delivered\"");
        assert_eq!("cancelled".parse::<OrderStatus>(), Ok(OrderStatus::Cancelled));
        assert!("lost".parse::<OrderStatus>().is_err());
        assert_eq!(OrderStatus::default(), OrderStatus::Pending);
    }

    #[test]
    fn test_customer_chat_url() {
        let o = order("a", "Budi", "6285864139786", OrderStatus::Pending);
        assert_eq!(o.customer_chat_url(), "https://wa.me/6285864139786");
    }
}
