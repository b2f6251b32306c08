//! Client flows against an in-process storefront server

use shared::client::OrderQuery;
use shared::models::{OrderStatus, Subcategory};
use shared::order::Field;
use storefront_client::{
    AdminSession, CatalogSource, CatalogView, ClientError, NetworkHttpClient, OneshotHttpClient,
    OrderWizard, ProductForm, WizardStep, login_error_message,
};
use storefront_server::auth::JwtConfig;
use storefront_server::{Config, ServerState, build_app};

const ADMIN_EMAIL: &str = "admin@nakubyte.com";
const ADMIN_PASSWORD: &str = "rahasia-admin-123";

async fn client() -> OneshotHttpClient {
    let mut config = Config::for_tests(JwtConfig::for_tests());
    config.admin_password = Some(ADMIN_PASSWORD.to_string());
    let state = ServerState::for_tests(config).await.unwrap();
    OneshotHttpClient::new(build_app(state))
}

async fn admin() -> AdminSession<OneshotHttpClient> {
    let mut session = AdminSession::new(client().await);
    session.login(ADMIN_EMAIL, ADMIN_PASSWORD).await.unwrap();
    session
}

fn fill(wizard: &mut OrderWizard) {
    wizard.set_customer_name("Budi Santoso");
    wizard.set_whatsapp("0858-6413-9786");
    wizard.set_address("Jl. Merdeka No. 10, Bandung");
}

#[tokio::test]
async fn catalog_falls_back_to_seed() {
    let client = client().await;
    // the server itself answers with the seed list while empty
    let view = CatalogView::load(&client).await;
    assert_eq!(view.products().len(), 9);

    let unreachable = NetworkHttpClient::new("http://127.0.0.1:9").unwrap();
    let view = CatalogView::load(&unreachable).await;
    assert_eq!(view.source(), CatalogSource::Seed);
    assert_eq!(view.products().len(), 9);
}

#[tokio::test]
async fn wizard_places_order() {
    let client = client().await;
    let view = CatalogView::load(&client).await;
    let product = view.product("2").unwrap().clone();

    let mut wizard = OrderWizard::new(product);
    wizard.set_quantity(2);
    wizard.next();
    fill(&mut wizard);
    assert_eq!(wizard.next(), WizardStep::Payment);

    let done = wizard.submit(&client).await.unwrap();
    assert_eq!(done.order.total_price, 560_000);
    assert_eq!(done.order.status, OrderStatus::Pending);
    assert_eq!(done.redirect_after.as_millis(), 1500);
    assert!(done.whatsapp_url.starts_with("https://wa.me/6285864139786?text="));
    assert!(wizard.completed().is_some());
}

#[tokio::test]
async fn rejected_submit_keeps_wizard_state() {
    // the wizard holds a stale copy claiming more stock than is stored
    let session = admin().await;
    let mut form = ProductForm::new();
    form.name = "Kabel USB-C".to_string();
    form.price = 35_000;
    form.description = "Kabel data 1 meter".to_string();
    form.stock = 5;
    form.set_subcategory(Subcategory::Cable);
    form.add_image("/images/cable.jpg");
    let stored = session.create_product(&form).await.unwrap();

    let mut stale = stored.clone();
    stale.stock = 20;
    let mut wizard = OrderWizard::new(stale);
    wizard.next();
    fill(&mut wizard);
    wizard.next();
    wizard.set_quantity(8);

    let err = wizard.submit(session.client()).await.unwrap_err();
    assert!(matches!(err, ClientError::Api { .. }));
    assert_eq!(wizard.step(), WizardStep::Payment);
    assert_eq!(wizard.input().quantity, 8);
    assert_eq!(wizard.input().customer_name, "Budi Santoso");
    assert!(wizard.errors().get(Field::Quantity).is_some());
    assert!(wizard.completed().is_none());

    // nothing was stored
    let orders = session.orders(&OrderQuery::default()).await.unwrap();
    assert!(orders.is_empty());
}

#[tokio::test]
async fn login_failures_map_to_messages() {
    let mut session = AdminSession::new(client().await);

    let err = session.login(ADMIN_EMAIL, "salah").await.unwrap_err();
    assert_eq!(login_error_message(&err), "Password salah");

    let err = session.login("nobody@nakubyte.com", "x").await.unwrap_err();
    assert_eq!(login_error_message(&err), "Email tidak terdaftar sebagai admin");

    let err = session.login("bukan-email", "x").await.unwrap_err();
    assert_eq!(login_error_message(&err), "Format email tidak valid");
    assert!(!session.is_logged_in());

    let account = session.login(ADMIN_EMAIL, ADMIN_PASSWORD).await.unwrap();
    assert!(account.is_admin);
    assert_eq!(session.me().await.unwrap().email, ADMIN_EMAIL);

    session.logout();
    assert!(matches!(
        session.order_summary().await,
        Err(ClientError::Api { .. })
    ));
}

#[tokio::test]
async fn admin_manages_catalog_and_orders() {
    let session = admin().await;

    assert_eq!(session.sync_seed().await.unwrap(), 9);
    let export = session.export_products().await.unwrap();
    assert!(export.contains("export const products: Product[] = ["));

    let mut wizard = OrderWizard::new(session.products().await.unwrap()[0].clone());
    wizard.next();
    fill(&mut wizard);
    wizard.next();
    let placed = wizard.submit(session.client()).await.unwrap().order;

    let updated = session
        .update_order_status(&placed.id, OrderStatus::Confirmed)
        .await
        .unwrap();
    assert_eq!(updated.status, OrderStatus::Confirmed);

    let summary = session.order_summary().await.unwrap();
    assert_eq!(summary.total, 1);
    assert_eq!(summary.confirmed, 1);

    let query = OrderQuery {
        status: Some("confirmed".to_string()),
        search: Some("budi santoso".to_string()),
    };
    assert_eq!(session.orders(&query).await.unwrap().len(), 1);

    assert!(session.delete_order(&placed.id).await.unwrap().deleted);
    let err = session.order(&placed.id).await.unwrap_err();
    assert_eq!(err.error_code(), Some(shared::error::ErrorCode::OrderNotFound));
}
