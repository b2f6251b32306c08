//! Order Service - checkout and the admin order board
//!
//! Checkout runs the same `validate_order_input` as the client wizard.
//! The customer fields are checked before anything touches the database;
//! the quantity check follows once the product is loaded.

use shared::client::{OrderQuery, SubmitOrderRequest, SubmitOrderResponse, ValidateOrderResponse};
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Order, OrderStatus, OrderSummary, StatusFilter, filter_orders};
use shared::order::{
    OrderInput, OrderMessage, REDIRECT_DELAY_MS, StoreProfile, total_price,
    validate_order_input, whatsapp_url,
};
use shared::util::{new_record_id, now_millis};

use super::CatalogService;
use crate::db::repository::{OrderRepository, RepoError};

fn order_not_found(id: &str) -> AppError {
    AppError::new(ErrorCode::OrderNotFound).with_detail("id", id)
}

fn map_repo_error(id: &str, err: RepoError) -> AppError {
    match err {
        RepoError::NotFound(_) => order_not_found(id),
        other => other.into(),
    }
}

#[derive(Clone)]
pub struct OrderService {
    orders: OrderRepository,
    catalog: CatalogService,
    store: StoreProfile,
}

impl OrderService {
    pub fn new(orders: OrderRepository, catalog: CatalogService, store: StoreProfile) -> Self {
        Self {
            orders,
            catalog,
            store,
        }
    }

    /// Customer-field check for leaving the customer-info step
    pub fn validate(input: &OrderInput) -> ValidateOrderResponse {
        match validate_order_input(input, None) {
            Ok(_) => ValidateOrderResponse {
                valid: true,
                errors: Default::default(),
            },
            Err(errors) => ValidateOrderResponse {
                valid: false,
                errors,
            },
        }
    }

    /// Persist a pending order and build the chat hand-off link
    pub async fn submit(&self, req: SubmitOrderRequest) -> AppResult<SubmitOrderResponse> {
        validate_order_input(&req.input, None)?;

        let product = self.catalog.get(&req.product_id).await?;
        let accepted = validate_order_input(&req.input, Some(&product))?;

        let total = total_price(product.price, accepted.quantity).ok_or_else(|| {
            AppError::new(ErrorCode::ProductInvalidPrice).with_detail("product_id", product.id.clone())
        })?;
        let message = OrderMessage {
            product_name: &product.name,
            unit_price: product.price,
            quantity: accepted.quantity,
            total_price: total,
            customer_name: &accepted.customer_name,
            whatsapp: &accepted.whatsapp_input,
            address: &accepted.address,
        }
        .render(&self.store);
        let url = whatsapp_url(&self.store.whatsapp, &message);

        let order = Order {
            id: new_record_id(),
            customer_name: accepted.customer_name,
            whatsapp: accepted.whatsapp,
            address: accepted.address,
            product,
            quantity: accepted.quantity,
            total_price: total,
            status: OrderStatus::Pending,
            created_at: now_millis(),
        };
        let order = self.orders.create(order).await?;

        tracing::info!(
            order_id = %order.id,
            product_id = %order.product.id,
            quantity = order.quantity,
            total_price = order.total_price,
            "Order submitted"
        );

        Ok(SubmitOrderResponse {
            order,
            whatsapp_url: url,
            redirect_after_ms: REDIRECT_DELAY_MS,
        })
    }

    /// Orders newest first, narrowed by status and search term
    pub async fn list(&self, query: &OrderQuery) -> AppResult<Vec<Order>> {
        let orders = self.orders.find_all().await?;
        let status = StatusFilter::parse(query.status.as_deref());
        let search = query.search.as_deref().map(str::trim).unwrap_or("");
        Ok(filter_orders(&orders, status, search)
            .into_iter()
            .cloned()
            .collect())
    }

    pub async fn summary(&self) -> AppResult<OrderSummary> {
        let orders = self.orders.find_all().await?;
        Ok(OrderSummary::from_orders(&orders))
    }

    pub async fn get(&self, id: &str) -> AppResult<Order> {
        self.orders
            .find_by_id(id)
            .await?
            .ok_or_else(|| order_not_found(id))
    }

    pub async fn update_status(&self, id: &str, status: OrderStatus) -> AppResult<Order> {
        let order = self
            .orders
            .update_status(id, status)
            .await
            .map_err(|e| map_repo_error(id, e))?;
        tracing::info!(order_id = %id, status = %status, "Order status updated");
        Ok(order)
    }

    pub async fn delete(&self, id: &str) -> AppResult<()> {
        self.orders
            .delete(id)
            .await
            .map_err(|e| map_repo_error(id, e))?;
        tracing::info!(order_id = %id, "Order deleted");
        Ok(())
    }
}
