//! Built-in seed catalog
//!
//! Shown when the database is empty or unreachable, and written to the
//! database by the admin sync utility. Seed products carry no subcategory.

use crate::models::{Category, Product};

const SEED: [(&str, &str, i64, &str, &str, i64, Category); 9] = [
    (
        "1",
        "Gaming Mouse RGB Pro X1",
        150_000,
        "/images/mouse1.jpg",
        "Mouse gaming RGB dengan sensor precision tinggi, cocok untuk gaming competitive",
        25,
        Category::Gaming,
    ),
    (
        "2",
        "Mechanical Keyboard RGB",
        280_000,
        "/images/keyboard1.jpg",
        "Keyboard mechanical RGB dengan switch blue tactile untuk gaming dan typing",
        15,
        Category::Gaming,
    ),
    (
        "3",
        "Gaming Headset Surround",
        220_000,
        "/images/headset1.jpg",
        "Headset gaming 7.1 surround sound dengan mic noise cancelling",
        30,
        Category::Gaming,
    ),
    (
        "4",
        "Wireless Mouse Ergonomic",
        85_000,
        "/images/mouse2.jpg",
        "Mouse wireless ergonomis premium untuk produktivitas maksimal",
        40,
        Category::Office,
    ),
    (
        "5",
        "Webcam 1080p Full HD",
        195_000,
        "/images/webcam1.jpg",
        "Webcam 1080p dengan auto focus untuk meeting dan streaming",
        20,
        Category::Office,
    ),
    (
        "6",
        "USB Hub 7-Port",
        65_000,
        "/images/usbhub1.jpg",
        "USB Hub 7 port dengan LED indicator dan fast charging support",
        50,
        Category::Office,
    ),
    (
        "7",
        "Power Bank 20000mAh",
        125_000,
        "/images/powerbank1.jpg",
        "Power bank fast charging 20000mAh dengan dual output USB-C & USB-A",
        35,
        Category::Mobile,
    ),
    (
        "8",
        "Wireless Charger Stand",
        75_000,
        "/images/charger1.jpg",
        "Wireless charger stand 15W dengan cooling fan untuk HP Android & iPhone",
        25,
        Category::Mobile,
    ),
    (
        "9",
        "Phone Holder Adjustable",
        35_000,
        "/images/holder1.jpg",
        "Phone holder adjustable untuk desk, kompatibel dengan semua ukuran HP",
        60,
        Category::Mobile,
    ),
];

/// The full seed catalog, in display order
pub fn seed_products() -> Vec<Product> {
    SEED.iter()
        .map(|&(id, name, price, image, description, stock, category)| Product {
            id: id.to_string(),
            name: name.to_string(),
            price,
            image: image.to_string(),
            images: Vec::new(),
            description: description.to_string(),
            stock,
            category,
            subcategory: None,
        })
        .collect()
}

/// Seed product by id
pub fn seed_product(id: &str) -> Option<Product> {
    seed_products().into_iter().find(|p| p.id == id)
}
