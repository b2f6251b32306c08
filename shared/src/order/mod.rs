//! Order capture
//!
//! Validation, phone normalisation, pricing and the WhatsApp hand-off used
//! by the three-step order wizard and the order endpoints.

pub mod money;
pub mod phone;
pub mod validation;
pub mod whatsapp;

pub use money::{MAX_UNIT_PRICE, format_idr, total_price};
pub use validation::{
    Field, FieldError, FieldErrorKind, MAX_QUANTITY_PER_ORDER, OrderInput, ValidatedOrder,
    ValidationErrors, max_quantity, validate_order_input,
};
pub use whatsapp::{BankAccount, OrderMessage, REDIRECT_DELAY_MS, StoreProfile, whatsapp_url};
