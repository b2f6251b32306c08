//! Order input validation
//!
//! The one implementation of the customer-info rules. The client wizard,
//! `POST /api/orders/validate` and `POST /api/orders` all call
//! [`validate_order_input`], so identical input always gets an identical
//! verdict.

use super::phone;
use crate::error::AppError;
use crate::models::Product;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

/// Upper bound on units per order, on top of the stock limit
pub const MAX_QUANTITY_PER_ORDER: u32 = 10;

pub const NAME_MIN_CHARS: usize = 3;
pub const PHONE_MIN_DIGITS: usize = 10;
pub const PHONE_MAX_DIGITS: usize = 15;
pub const ADDRESS_MIN_CHARS: usize = 20;
pub const ADDRESS_MAX_CHARS: usize = 500;

static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z\s]+$").expect("valid name regex"));

/// Customer-entered order fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderInput {
    pub customer_name: String,
    pub whatsapp: String,
    pub address: String,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

fn default_quantity() -> u32 {
    1
}

/// Input field an error belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    CustomerName,
    Whatsapp,
    Address,
    Quantity,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CustomerName => "customer_name",
            Self::Whatsapp => "whatsapp",
            Self::Address => "address",
            Self::Quantity => "quantity",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a field was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldErrorKind {
    Required,
    TooShort,
    TooLong,
    InvalidCharacters,
    NonNumeric,
    WrongLength,
    WrongPrefix,
    OutOfRange,
    OutOfStock,
}

impl FieldErrorKind {
    /// Stable machine code
    pub fn code(&self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::TooShort => "too_short",
            Self::TooLong => "too_long",
            Self::InvalidCharacters => "invalid_characters",
            Self::NonNumeric => "non_numeric",
            Self::WrongLength => "wrong_length",
            Self::WrongPrefix => "wrong_prefix",
            Self::OutOfRange => "out_of_range",
            Self::OutOfStock => "out_of_stock",
        }
    }
}

/// A rejected field with its user-facing message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub code: FieldErrorKind,
    pub message: String,
}

impl FieldError {
    fn new(field: Field, kind: FieldErrorKind, max_quantity: u32) -> Self {
        Self {
            code: kind,
            message: message_for(field, kind, max_quantity),
        }
    }
}

fn message_for(field: Field, kind: FieldErrorKind, max_quantity: u32) -> String {
    use FieldErrorKind::*;
    let text = match (field, kind) {
        (Field::CustomerName, Required) => "Nama lengkap wajib diisi",
        (Field::CustomerName, TooShort) => "Nama lengkap minimal 3 karakter",
        (Field::CustomerName, _) => "Nama hanya boleh berisi huruf dan spasi",
        (Field::Whatsapp, Required) => "Nomor WhatsApp wajib diisi",
        (Field::Whatsapp, NonNumeric) => "Nomor WhatsApp hanya boleh berisi angka",
        (Field::Whatsapp, WrongLength) => "Nomor WhatsApp tidak valid (10-15 digit)",
        (Field::Whatsapp, _) => "Nomor WhatsApp harus dimulai dengan 08 atau 62",
        (Field::Address, Required) => "Alamat lengkap wajib diisi",
        (Field::Address, TooShort) => "Alamat terlalu singkat, minimal 20 karakter",
        (Field::Address, _) => "Alamat terlalu panjang, maksimal 500 karakter",
        (Field::Quantity, OutOfStock) => "Stok produk habis",
        (Field::Quantity, _) => {
            return format!("Jumlah pesanan harus antara 1 dan {max_quantity}");
        }
    };
    text.to_string()
}

/// Field-level failures, keyed by field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrors {
    pub fields: BTreeMap<Field, FieldError>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.fields.get(&field)
    }

    pub fn kind(&self, field: Field) -> Option<FieldErrorKind> {
        self.get(field).map(|e| e.code)
    }

    fn push(&mut self, field: Field, kind: FieldErrorKind, max_quantity: u32) {
        self.fields
            .insert(field, FieldError::new(field, kind, max_quantity));
    }
}

/// Summary shown when step 2 cannot be left
pub const VALIDATION_SUMMARY: &str = "Mohon lengkapi semua data dengan benar";

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let fields = serde_json::to_value(&errors.fields).unwrap_or_default();
        AppError::validation(VALIDATION_SUMMARY).with_detail("fields", fields)
    }
}

/// Accepted order input, trimmed and normalised
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedOrder {
    pub customer_name: String,
    /// Number as entered, for the chat message
    pub whatsapp_input: String,
    /// `62…` digits for storage
    pub whatsapp: String,
    pub address: String,
    pub quantity: u32,
}

pub fn check_name(raw: &str) -> Result<(), FieldErrorKind> {
    let name = raw.trim();
    if name.is_empty() {
        Err(FieldErrorKind::Required)
    } else if name.chars().filter(|c| !c.is_whitespace()).count() < NAME_MIN_CHARS {
        Err(FieldErrorKind::TooShort)
    } else if !NAME_PATTERN.is_match(name) {
        Err(FieldErrorKind::InvalidCharacters)
    } else {
        Ok(())
    }
}

pub fn check_phone(raw: &str) -> Result<(), FieldErrorKind> {
    if raw.trim().is_empty() {
        return Err(FieldErrorKind::Required);
    }
    let digits = phone::strip_separators(raw);
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        Err(FieldErrorKind::NonNumeric)
    } else if !(PHONE_MIN_DIGITS..=PHONE_MAX_DIGITS).contains(&digits.len()) {
        Err(FieldErrorKind::WrongLength)
    } else if !phone::has_accepted_prefix(&digits) {
        Err(FieldErrorKind::WrongPrefix)
    } else {
        Ok(())
    }
}

pub fn check_address(raw: &str) -> Result<(), FieldErrorKind> {
    let address = raw.trim();
    let len = address.chars().count();
    if len == 0 {
        Err(FieldErrorKind::Required)
    } else if len < ADDRESS_MIN_CHARS {
        Err(FieldErrorKind::TooShort)
    } else if len > ADDRESS_MAX_CHARS {
        Err(FieldErrorKind::TooLong)
    } else {
        Ok(())
    }
}

/// Largest quantity selectable for a product
pub fn max_quantity(stock: i64) -> u32 {
    let stock = u32::try_from(stock.max(0)).unwrap_or(u32::MAX);
    stock.min(MAX_QUANTITY_PER_ORDER)
}

pub fn check_quantity(quantity: u32, stock: i64) -> Result<(), FieldErrorKind> {
    let max = max_quantity(stock);
    if max == 0 {
        Err(FieldErrorKind::OutOfStock)
    } else if quantity < 1 || quantity > max {
        Err(FieldErrorKind::OutOfRange)
    } else {
        Ok(())
    }
}

/// Validate customer fields, and the quantity when the product is known
///
/// Without a product only the customer fields are checked; this is the
/// step-2 advance check, which runs before any stock lookup.
pub fn validate_order_input(
    input: &OrderInput,
    product: Option<&Product>,
) -> Result<ValidatedOrder, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    if let Err(kind) = check_name(&input.customer_name) {
        errors.push(Field::CustomerName, kind, 0);
    }
    if let Err(kind) = check_phone(&input.whatsapp) {
        errors.push(Field::Whatsapp, kind, 0);
    }
    if let Err(kind) = check_address(&input.address) {
        errors.push(Field::Address, kind, 0);
    }
    if let Some(product) = product {
        if let Err(kind) = check_quantity(input.quantity, product.stock) {
            errors.push(Field::Quantity, kind, max_quantity(product.stock));
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(ValidatedOrder {
        customer_name: input.customer_name.trim().to_string(),
        whatsapp_input: input.whatsapp.clone(),
        whatsapp: phone::normalize(&input.whatsapp),
        address: input.address.trim().to_string(),
        quantity: input.quantity,
    })
}
