//! `products.ts` export
//!
//! Renders the catalog as a TypeScript source file in the same shape as the
//! storefront's bundled product list, so it can replace that file directly.

use crate::models::Product;

/// Download name for the rendered file
pub const EXPORT_FILE_NAME: &str = "products.ts";

/// Body of a `'...'` string literal
fn single_quoted(text: &str) -> String {
    text.replace('\\', "\\\\").replace('\'', "\\'").replace('\n', "\\n")
}

/// Body of a template literal; `${` would otherwise start an interpolation
fn template_body(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('`', "\\`")
        .replace("${", "\\${")
}

fn render_entry(product: &Product) -> String {
    let mut entry = format!(
        "  {{\n    id: '{}',\n    name: '{}',\n    price: {},\n    image: '{}',\n    description: `{}`,\n    stock: {},\n    category: '{}'",
        single_quoted(&product.id),
        single_quoted(&product.name),
        product.price,
        single_quoted(&product.image),
        template_body(&product.description),
        product.stock,
        product.category,
    );
    if let Some(sub) = product.subcategory {
        entry.push_str(&format!(",\n    subcategory: '{sub}'"));
    }
    entry.push_str("\n  }");
    entry
}

/// Render products into the `products.ts` template
pub fn render_products_ts(products: &[Product]) -> String {
    let entries = products
        .iter()
        .map(render_entry)
        .collect::<Vec<_>>()
        .join(",\n");
    format!(
        "import {{ Product }} from '@/types';\n\nexport const products: Product[] = [\n{entries}\n];"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Subcategory;
    use crate::seed::seed_products;

    #[test]
    fn test_render_seed_entry() {
        let products = seed_products();
        let text = render_products_ts(&products[..1]);
        assert_eq!(
            text,
            "import { Product } from '@/types';\n\nexport const products: Product[] = [\n  {\n    id: '1',\n    name: 'Gaming Mouse RGB Pro X1',\n    price: 150000,\n    image: '/images/mouse1.jpg',\n    description: `Mouse gaming RGB dengan sensor precision tinggi, cocok untuk gaming competitive`,\n    stock: 25,\n    category: 'gaming'\n  }\n];"
        );
    }

    #[test]
    fn test_entries_joined_and_backticks_escaped() {
        let mut products = seed_products();
        products.truncate(2);
        products[1].description = "Pakai `Fn` key".to_string();
        products[1].subcategory = Some(Subcategory::Keyboard);

        let text = render_products_ts(&products);
        assert!(text.contains("  },\n  {\n    id: '2',"));
        assert!(text.contains("description: `Pakai \\`Fn\\` key`,"));
        assert!(text.contains("category: 'gaming',\n    subcategory: 'keyboard'\n  }"));
        assert!(text.ends_with("\n];"));
    }

    #[test]
    fn test_quotes_and_interpolation_escaped() {
        let mut product = seed_products().remove(0);
        product.name = "Logitech's Mouse".to_string();
        product.image = "/images/a\\b.jpg".to_string();
        product.description = "Harga ${price} turun".to_string();

        let text = render_products_ts(&[product]);
        assert!(text.contains("name: 'Logitech\\'s Mouse',"));
        assert!(text.contains("image: '/images/a\\\\b.jpg',"));
        assert!(text.contains("description: `Harga \\${price} turun`,"));
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(
            render_products_ts(&[]),
            "import { Product } from '@/types';\n\nexport const products: Product[] = [\n\n];"
        );
    }
}
