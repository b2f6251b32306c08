//! WhatsApp hand-off
//!
//! After an order is stored the customer is sent to a `wa.me` link whose
//! text is the pre-filled order summary with the transfer instructions.

use super::money::format_idr;
use serde::{Deserialize, Serialize};

/// Delay before the client opens the chat link
pub const REDIRECT_DELAY_MS: u64 = 1500;

/// Bank account shown in the transfer instructions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankAccount {
    pub bank: String,
    pub number: String,
}

/// Store identity used in the order message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreProfile {
    /// Full store name, also the account holder name
    pub name: String,
    /// Short name used in the closing line
    pub brand: String,
    /// Store number in `62…` form
    pub whatsapp: String,
    pub bank_accounts: Vec<BankAccount>,
}

impl Default for StoreProfile {
    fn default() -> Self {
        Self {
            name: "NakuByte Store".to_string(),
            brand: "NakuByte".to_string(),
            whatsapp: "6285864139786".to_string(),
            bank_accounts: vec![
                BankAccount {
                    bank: "BCA".to_string(),
                    number: "1234567890".to_string(),
                },
                BankAccount {
                    bank: "BRI".to_string(),
                    number: "0987654321".to_string(),
                },
            ],
        }
    }
}

/// Fields rendered into the order message
#[derive(Debug, Clone, Copy)]
pub struct OrderMessage<'a> {
    pub product_name: &'a str,
    pub unit_price: i64,
    pub quantity: u32,
    pub total_price: i64,
    pub customer_name: &'a str,
    /// Number exactly as the customer typed it
    pub whatsapp: &'a str,
    pub address: &'a str,
}

impl OrderMessage<'_> {
    pub fn render(&self, store: &StoreProfile) -> String {
        let accounts = store
            .bank_accounts
            .iter()
            .map(|acc| format!("• {}: {} a.n. {}", acc.bank, acc.number, store.name))
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            "*PESANAN BARU - {store}*\n\
             \n\
             *PRODUK:*\n\
             {product}\n\
             {unit} x {qty} unit\n\
             \n\
             *TOTAL PEMBAYARAN:*\n\
             {total}\n\
             \n\
             *DATA CUSTOMER:*\n\
             Nama: {name}\n\
             WhatsApp: {phone}\n\
             Alamat: {address}\n\
             \n\
             *REKENING TRANSFER:*\n\
             {accounts}\n\
             \n\
             *LANGKAH SELANJUTNYA:*\n\
             1. Transfer sesuai total di atas\n\
             2. Screenshot bukti transfer\n\
             3. Kirim bukti ke nomor ini\n\
             4. Barang akan diproses dan dikirim\n\
             \n\
             Terima kasih sudah berbelanja di {brand}!",
            store = store.name,
            product = self.product_name,
            unit = format_idr(self.unit_price),
            qty = self.quantity,
            total = format_idr(self.total_price),
            name = self.customer_name,
            phone = self.whatsapp,
            address = self.address,
            accounts = accounts,
            brand = store.brand,
        )
    }
}

/// `https://wa.me/<number>?text=<percent-encoded message>`
pub fn whatsapp_url(number: &str, message: &str) -> String {
    format!("https://wa.me/{}?text={}", number, urlencoding::encode(message))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message() -> OrderMessage<'static> {
        OrderMessage {
            product_name: "Gaming Mouse RGB Pro X1",
            unit_price: 150_000,
            quantity: 3,
            total_price: 450_000,
            customer_name: "Budi Santoso",
            whatsapp: "0858-6413-9786",
            address: "Jl. Merdeka No. 10, Bandung, Jawa Barat",
        }
    }

    #[test]
    fn test_render_contains_order_lines() {
        let text = message().render(&StoreProfile::default());
        assert!(text.starts_with("*PESANAN BARU - NakuByte Store*\n\n*PRODUK:*\n"));
        assert!(text.contains("Gaming Mouse RGB Pro X1\nRp 150.000 x 3 unit"));
        assert!(text.contains("*TOTAL PEMBAYARAN:*\nRp 450.000"));
        assert!(text.contains("WhatsApp: 0858-6413-9786"));
        assert!(text.contains("• BCA: 1234567890 a.n. NakuByte Store\n• BRI: 0987654321 a.n. NakuByte Store"));
        assert!(text.ends_with("Terima kasih sudah berbelanja di NakuByte!"));
    }

    #[test]
    fn test_url_decodes_back_to_message() {
        let text = message().render(&StoreProfile::default());
        let url = whatsapp_url("6285864139786", &text);

        let query = url
            .strip_prefix("https://wa.me/6285864139786?text=")
            .unwrap();
        assert!(!query.contains(' '));
        assert!(!query.contains('\n'));
        assert_eq!(urlencoding::decode(query).unwrap(), text);
    }
}
