//! Three-step order wizard
//!
//! Review → CustomerInfo → Payment. Leaving the customer-info step runs
//! `validate_order_input` without a product, the same check the server
//! applies on `POST /api/orders/validate`. Submission re-checks everything
//! including the quantity, then posts the order.

use std::time::Duration;

use shared::client::{SubmitOrderRequest, SubmitOrderResponse};
use shared::models::{Order, Product};
use shared::order::validation::VALIDATION_SUMMARY;
use shared::order::{
    Field, OrderInput, OrderMessage, StoreProfile, ValidationErrors, max_quantity, total_price,
    validate_order_input,
};

use crate::http::HttpClient;
use crate::{ClientError, ClientResult};

pub const RECHECK_NOTICE: &str = "Mohon periksa kembali data yang Anda masukkan";
pub const SUBMIT_FAILED_NOTICE: &str = "Gagal membuat pesanan. Silakan coba lagi.";
pub const SUBMIT_OK_NOTICE: &str = "Pesanan berhasil! Mengarahkan ke WhatsApp...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    Review,
    CustomerInfo,
    Payment,
}

impl WizardStep {
    /// 1-based position shown in the progress bar
    pub fn number(&self) -> u8 {
        match self {
            Self::Review => 1,
            Self::CustomerInfo => 2,
            Self::Payment => 3,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Review => "Detail Produk",
            Self::CustomerInfo => "Data Pembeli",
            Self::Payment => "Pembayaran",
        }
    }

    fn next(self) -> Self {
        match self {
            Self::Review => Self::CustomerInfo,
            Self::CustomerInfo | Self::Payment => Self::Payment,
        }
    }

    fn prev(self) -> Self {
        match self {
            Self::Review | Self::CustomerInfo => Self::Review,
            Self::Payment => Self::CustomerInfo,
        }
    }
}

/// A stored order and its chat hand-off
#[derive(Debug, Clone)]
pub struct CompletedOrder {
    pub order: Order,
    pub whatsapp_url: String,
    pub redirect_after: Duration,
}

impl From<SubmitOrderResponse> for CompletedOrder {
    fn from(resp: SubmitOrderResponse) -> Self {
        Self {
            order: resp.order,
            whatsapp_url: resp.whatsapp_url,
            redirect_after: Duration::from_millis(resp.redirect_after_ms),
        }
    }
}

#[derive(Debug, Clone)]
pub struct OrderWizard {
    product: Product,
    step: WizardStep,
    input: OrderInput,
    errors: ValidationErrors,
    notice: Option<String>,
    completed: Option<CompletedOrder>,
}

impl OrderWizard {
    pub fn new(product: Product) -> Self {
        Self {
            product,
            step: WizardStep::Review,
            input: OrderInput {
                quantity: 1,
                ..Default::default()
            },
            errors: ValidationErrors::default(),
            notice: None,
            completed: None,
        }
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn input(&self) -> &OrderInput {
        &self.input
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Latest toast-style message
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn completed(&self) -> Option<&CompletedOrder> {
        self.completed.as_ref()
    }

    pub fn max_quantity(&self) -> u32 {
        max_quantity(self.product.stock)
    }

    /// Set the quantity, clamped to `1..=max_quantity`
    pub fn set_quantity(&mut self, quantity: u32) {
        self.input.quantity = quantity.clamp(1, self.max_quantity().max(1));
    }

    pub fn increment_quantity(&mut self) {
        self.set_quantity(self.input.quantity.saturating_add(1));
    }

    pub fn decrement_quantity(&mut self) {
        self.set_quantity(self.input.quantity.saturating_sub(1));
    }

    /// `None` when price × quantity overflows
    pub fn total(&self) -> Option<i64> {
        total_price(self.product.price, self.input.quantity)
    }

    pub fn set_customer_name(&mut self, value: impl Into<String>) {
        self.input.customer_name = value.into();
        self.errors.fields.remove(&Field::CustomerName);
    }

    pub fn set_whatsapp(&mut self, value: impl Into<String>) {
        self.input.whatsapp = value.into();
        self.errors.fields.remove(&Field::Whatsapp);
    }

    pub fn set_address(&mut self, value: impl Into<String>) {
        self.input.address = value.into();
        self.errors.fields.remove(&Field::Address);
    }

    /// Advance one step; stays put when the customer fields are invalid
    pub fn next(&mut self) -> WizardStep {
        if self.step == WizardStep::CustomerInfo {
            match validate_order_input(&self.input, None) {
                Ok(_) => {
                    self.errors = ValidationErrors::default();
                    self.notice = None;
                }
                Err(errors) => {
                    self.errors = errors;
                    self.notice = Some(VALIDATION_SUMMARY.to_string());
                    return self.step;
                }
            }
        }
        self.step = self.step.next();
        self.step
    }

    pub fn back(&mut self) -> WizardStep {
        self.step = self.step.prev();
        self.step
    }

    /// Chat message as it will be sent, for the payment step
    pub fn message_preview(&self, store: &StoreProfile) -> Option<String> {
        let message = OrderMessage {
            product_name: &self.product.name,
            unit_price: self.product.price,
            quantity: self.input.quantity,
            total_price: self.total()?,
            customer_name: self.input.customer_name.trim(),
            whatsapp: &self.input.whatsapp,
            address: self.input.address.trim(),
        };
        Some(message.render(store))
    }

    /// Post the order from the payment step
    ///
    /// On failure the wizard stays on the payment step with its input
    /// untouched.
    pub async fn submit<C: HttpClient>(&mut self, client: &C) -> ClientResult<CompletedOrder> {
        if self.step != WizardStep::Payment {
            return Err(ClientError::Validation(
                "Order can only be submitted from the payment step".into(),
            ));
        }
        if let Err(errors) = validate_order_input(&self.input, Some(&self.product)) {
            self.errors = errors;
            self.notice = Some(RECHECK_NOTICE.to_string());
            return Err(ClientError::Validation(RECHECK_NOTICE.into()));
        }

        let request = SubmitOrderRequest {
            product_id: self.product.id.clone(),
            input: self.input.clone(),
        };
        match client.post::<SubmitOrderResponse, _>("/api/orders", &request).await {
            Ok(resp) => {
                let completed = CompletedOrder::from(resp);
                tracing::info!(order_id = %completed.order.id, "Order placed");
                self.notice = Some(SUBMIT_OK_NOTICE.to_string());
                self.completed = Some(completed.clone());
                Ok(completed)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Order submit failed");
                if let Some(errors) = e.validation_errors() {
                    self.errors = errors;
                }
                self.notice = Some(SUBMIT_FAILED_NOTICE.to_string());
                Err(e)
            }
        }
    }

    /// Wait out the redirect delay, then hand back the chat link
    pub async fn redirect_target(&self) -> Option<&str> {
        let completed = self.completed.as_ref()?;
        tokio::time::sleep(completed.redirect_after).await;
        Some(&completed.whatsapp_url)
    }
}
