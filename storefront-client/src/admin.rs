//! Admin panel: sign-in, product form, order board

use shared::client::{
    AccountInfo, DeleteResult, LoginRequest, LoginResponse, OrderQuery, StatusUpdate, SyncResult,
};
use shared::models::{
    Category, Order, OrderStatus, OrderSummary, Product, ProductInput, Subcategory, UnknownCategory,
};

use crate::http::HttpClient;
use crate::{ClientError, ClientResult};

/// Message shown for a failed sign-in
pub fn login_error_message(err: &ClientError) -> String {
    match err.auth_code() {
        Some("auth/user-not-found") => "Email tidak terdaftar sebagai admin".to_string(),
        Some("auth/wrong-password") => "Password salah".to_string(),
        Some("auth/invalid-email") => "Format email tidak valid".to_string(),
        Some("auth/too-many-requests") => {
            "Terlalu banyak percobaan login. Coba lagi nanti.".to_string()
        }
        _ => format!("Login gagal: {}", err.message()),
    }
}

/// Signed-in admin session over any transport
pub struct AdminSession<C: HttpClient> {
    client: C,
    account: Option<AccountInfo>,
}

impl<C: HttpClient> AdminSession<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            account: None,
        }
    }

    pub fn account(&self) -> Option<&AccountInfo> {
        self.account.as_ref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.client.token().is_some()
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Sign in; the token is kept for later calls
    pub async fn login(&mut self, email: &str, password: &str) -> ClientResult<AccountInfo> {
        let req = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let resp: LoginResponse = self
            .client
            .post("/api/auth/login", &req)
            .await
            .inspect_err(|e| tracing::warn!(error = %e, "Admin login failed"))?;

        tracing::info!(email = %resp.user.email, "Admin signed in");
        self.client.set_token(Some(resp.token));
        self.account = Some(resp.user.clone());
        Ok(resp.user)
    }

    pub fn logout(&mut self) {
        self.client.set_token(None);
        self.account = None;
    }

    pub async fn me(&self) -> ClientResult<AccountInfo> {
        self.client.get("/api/auth/me").await
    }

    // ========== Products ==========

    pub async fn products(&self) -> ClientResult<Vec<Product>> {
        self.client.get("/api/products").await
    }

    pub async fn create_product(&self, form: &ProductForm) -> ClientResult<Product> {
        let input = form.to_input()?;
        self.client.post("/api/admin/products", &input).await
    }

    pub async fn update_product(&self, id: &str, form: &ProductForm) -> ClientResult<Product> {
        let input = form.to_input()?;
        self.client
            .put(&format!("/api/admin/products/{}", id), &input)
            .await
    }

    pub async fn delete_product(&self, id: &str) -> ClientResult<DeleteResult> {
        self.client
            .delete(&format!("/api/admin/products/{}", id))
            .await
    }

    /// Write the built-in catalog to the database
    pub async fn sync_seed(&self) -> ClientResult<usize> {
        let result: SyncResult = self.client.post_empty("/api/admin/products/sync-seed").await?;
        Ok(result.synced)
    }

    /// `products.ts` source for the current catalog
    pub async fn export_products(&self) -> ClientResult<String> {
        self.client.get_text("/api/admin/products/export").await
    }

    // ========== Orders ==========

    pub async fn orders(&self, query: &OrderQuery) -> ClientResult<Vec<Order>> {
        self.client.get(&orders_path(query)).await
    }

    pub async fn order_summary(&self) -> ClientResult<OrderSummary> {
        self.client.get("/api/admin/orders/summary").await
    }

    pub async fn order(&self, id: &str) -> ClientResult<Order> {
        self.client.get(&format!("/api/admin/orders/{}", id)).await
    }

    pub async fn update_order_status(&self, id: &str, status: OrderStatus) -> ClientResult<Order> {
        self.client
            .put(
                &format!("/api/admin/orders/{}/status", id),
                &StatusUpdate { status },
            )
            .await
    }

    pub async fn delete_order(&self, id: &str) -> ClientResult<DeleteResult> {
        self.client
            .delete(&format!("/api/admin/orders/{}", id))
            .await
    }
}

fn orders_path(query: &OrderQuery) -> String {
    let mut params = Vec::new();
    if let Some(status) = query.status.as_deref().filter(|s| !s.is_empty()) {
        params.push(format!("status={}", urlencoding::encode(status)));
    }
    if let Some(search) = query.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        params.push(format!("search={}", urlencoding::encode(search)));
    }
    if params.is_empty() {
        "/api/admin/orders".to_string()
    } else {
        format!("/api/admin/orders?{}", params.join("&"))
    }
}

/// Add/edit product form
///
/// Category has no setter of its own: picking a subcategory sets it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductForm {
    pub name: String,
    pub price: i64,
    pub description: String,
    pub stock: i64,
    images: Vec<String>,
    subcategory: Option<Subcategory>,
    category: Option<Category>,
}

impl ProductForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prefill from an existing product
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            price: product.price,
            description: product.description.clone(),
            stock: product.stock,
            images: product.gallery().into_iter().map(str::to_string).collect(),
            subcategory: product.subcategory,
            category: Some(product.effective_category()),
        }
    }

    pub fn set_subcategory(&mut self, subcategory: Subcategory) {
        self.subcategory = Some(subcategory);
        self.category = Some(subcategory.parent());
    }

    /// Select by menu id, e.g. `"laptop"`
    pub fn select_subcategory(&mut self, id: &str) -> Result<(), UnknownCategory> {
        let subcategory = id.parse::<Subcategory>()?;
        self.set_subcategory(subcategory);
        Ok(())
    }

    pub fn subcategory(&self) -> Option<Subcategory> {
        self.subcategory
    }

    pub fn category(&self) -> Option<Category> {
        self.category
    }

    /// Append an image URL; blanks and duplicates are ignored
    pub fn add_image(&mut self, url: &str) {
        let url = url.trim();
        if !url.is_empty() && !self.images.iter().any(|i| i == url) {
            self.images.push(url.to_string());
        }
    }

    pub fn remove_image(&mut self, index: usize) {
        if index < self.images.len() {
            self.images.remove(index);
        }
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    /// Payload for create/update, after the form-level checks
    pub fn to_input(&self) -> ClientResult<ProductInput> {
        let subcategory = self
            .subcategory
            .ok_or_else(|| ClientError::Validation("Please select a category!".into()))?;
        if self.images.is_empty() {
            return Err(ClientError::Validation(
                "Please add at least one product image!".into(),
            ));
        }
        Ok(ProductInput {
            name: self.name.clone(),
            price: self.price,
            image: self.images.first().cloned(),
            images: self.images.clone(),
            description: self.description.clone(),
            stock: self.stock,
            category: self.category,
            subcategory: Some(subcategory),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn auth_error(code: &str) -> ClientError {
        let mut details = HashMap::new();
        details.insert("auth_code".to_string(), serde_json::json!(code));
        ClientError::Api {
            code: 1007,
            message: "rejected".to_string(),
            details: Some(details),
        }
    }

    #[test]
    fn test_login_messages() {
        assert_eq!(
            login_error_message(&auth_error("auth/user-not-found")),
            "Email tidak terdaftar sebagai admin"
        );
        assert_eq!(login_error_message(&auth_error("auth/wrong-password")), "Password salah");
        assert_eq!(
            login_error_message(&auth_error("auth/invalid-email")),
            "Format email tidak valid"
        );
        assert_eq!(
            login_error_message(&auth_error("auth/too-many-requests")),
            "Terlalu banyak percobaan login. Coba lagi nanti."
        );
        assert_eq!(
            login_error_message(&auth_error("auth/network-request-failed")),
            "Login gagal: rejected"
        );
        assert_eq!(
            login_error_message(&ClientError::Internal("boom".into())),
            "Login gagal: Internal error: boom"
        );
    }

    #[test]
    fn test_subcategory_sets_category() {
        let mut form = ProductForm::new();
        assert_eq!(form.category(), None);

        form.set_subcategory(Subcategory::Webcam);
        assert_eq!(form.category(), Some(Category::Office));

        form.select_subcategory("powerbank").unwrap();
        assert_eq!(form.subcategory(), Some(Subcategory::Powerbank));
        assert_eq!(form.category(), Some(Subcategory::Powerbank.parent()));

        assert!(form.select_subcategory("toaster").is_err());
        assert_eq!(form.subcategory(), Some(Subcategory::Powerbank));
    }

    #[test]
    fn test_form_checks() {
        let mut form = ProductForm {
            name: "Powerbank 20000mAh".to_string(),
            price: 250_000,
            stock: 12,
            ..Default::default()
        };
        assert!(matches!(form.to_input(), Err(ClientError::Validation(_))));

        form.set_subcategory(Subcategory::Powerbank);
        assert!(matches!(form.to_input(), Err(ClientError::Validation(_))));

        form.add_image(" /images/pb.jpg ");
        form.add_image("/images/pb.jpg");
        form.add_image("");
        assert_eq!(form.images(), ["/images/pb.jpg".to_string()]);

        let input = form.to_input().unwrap();
        assert_eq!(input.image.as_deref(), Some("/images/pb.jpg"));
        assert_eq!(input.subcategory, Some(Subcategory::Powerbank));
    }

    #[test]
    fn test_orders_path() {
        assert_eq!(orders_path(&OrderQuery::default()), "/api/admin/orders");
        let query = OrderQuery {
            status: Some("shipped".to_string()),
            search: Some(" budi santoso ".to_string()),
        };
        assert_eq!(
            orders_path(&query),
            "/api/admin/orders?status=shipped&search=budi%20santoso"
        );
    }
}
