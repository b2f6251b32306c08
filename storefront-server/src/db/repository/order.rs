//! Order Repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::{Database, tables::ORDERS};
use serde::Serialize;
use shared::models::{Order, OrderStatus, Product};

const SELECT_ONE: &str = "SELECT *, record::id(id) AS id FROM type::thing('orders', $id)";

/// Stored document body; the key lives in the record id
#[derive(Debug, Clone, Serialize)]
struct OrderContent {
    customer_name: String,
    whatsapp: String,
    address: String,
    product: Product,
    quantity: u32,
    total_price: i64,
    status: OrderStatus,
    created_at: i64,
}

impl From<Order> for OrderContent {
    fn from(o: Order) -> Self {
        Self {
            customer_name: o.customer_name,
            whatsapp: o.whatsapp,
            address: o.address,
            product: o.product,
            quantity: o.quantity,
            total_price: o.total_price,
            status: o.status,
            created_at: o.created_at,
        }
    }
}

#[derive(Clone)]
pub struct OrderRepository {
    base: BaseRepository,
}

impl OrderRepository {
    pub fn new(db: Database) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// All orders, newest first
    pub async fn find_all(&self) -> RepoResult<Vec<Order>> {
        let orders: Vec<Order> = self
            .base
            .db()
            .query("SELECT *, record::id(id) AS id FROM orders ORDER BY created_at DESC")
            .await?
            .take(0)?;
        Ok(orders)
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Order>> {
        let mut result = self
            .base
            .db()
            .query(SELECT_ONE)
            .bind(("id", id.to_string()))
            .await?;
        let order: Option<Order> = result.take(0)?;
        Ok(order)
    }

    /// Store a new order in a single statement
    pub async fn create(&self, order: Order) -> RepoResult<Order> {
        let id = order.id.clone();
        self.base
            .db()
            .query("CREATE type::thing($table, $id) CONTENT $data RETURN NONE")
            .bind(("table", ORDERS))
            .bind(("id", id.clone()))
            .bind(("data", OrderContent::from(order)))
            .await?
            .check()?;

        self.find_by_id(&id)
            .await?
            .ok_or_else(|| RepoError::Database(format!("Failed to create order {}", id)))
    }

    /// Set the status; any status may follow any other
    pub async fn update_status(&self, id: &str, status: OrderStatus) -> RepoResult<Order> {
        if self.find_by_id(id).await?.is_none() {
            return Err(RepoError::NotFound(format!("Order {}", id)));
        }

        self.base
            .db()
            .query("UPDATE type::thing($table, $id) MERGE { status: $status } RETURN NONE")
            .bind(("table", ORDERS))
            .bind(("id", id.to_string()))
            .bind(("status", status))
            .await?
            .check()?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Order {}", id)))
    }

    /// Hard delete an order
    pub async fn delete(&self, id: &str) -> RepoResult<()> {
        if self.find_by_id(id).await?.is_none() {
            return Err(RepoError::NotFound(format!("Order {}", id)));
        }
        self.base
            .db()
            .query("DELETE type::thing($table, $id)")
            .bind(("table", ORDERS))
            .bind(("id", id.to_string()))
            .await?
            .check()?;
        Ok(())
    }
}
