//! Rupiah amounts

/// Highest unit price the admin form accepts (Rp 1 triliun)
pub const MAX_UNIT_PRICE: i64 = 1_000_000_000_000;

/// Line total for an order; `None` when it does not fit in an `i64`
pub fn total_price(unit_price: i64, quantity: u32) -> Option<i64> {
    unit_price.checked_mul(i64::from(quantity))
}

/// Format whole rupiah the Indonesian way: `Rp 150.000`
pub fn format_idr(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    if amount < 0 {
        format!("-Rp {grouped}")
    } else {
        format!("Rp {grouped}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_price() {
        assert_eq!(total_price(150_000, 3), Some(450_000));
        assert_eq!(total_price(35_000, 1), Some(35_000));
        assert_eq!(total_price(MAX_UNIT_PRICE, 10), Some(10_000_000_000_000));
    }

    #[test]
    fn test_total_price_overflow() {
        assert_eq!(total_price(i64::MAX / 5, 10), None);
        assert_eq!(total_price(i64::MAX, 1), Some(i64::MAX));
    }

    #[test]
    fn test_format_idr() {
        assert_eq!(format_idr(0), "Rp 0");
        assert_eq!(format_idr(999), "Rp 999");
        assert_eq!(format_idr(1_000), "Rp 1.000");
        assert_eq!(format_idr(150_000), "Rp 150.000");
        assert_eq!(format_idr(450_000), "Rp 450.000");
        assert_eq!(format_idr(12_500_000), "Rp 12.500.000");
    }
}
