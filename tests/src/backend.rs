//! In-process stand-in for the shop backend.
//!
//! Keeps articles, sales, purchases and the cash ledger in memory and
//! applies the same side effects as the real server: sales take stock and
//! add a `VENTA` movement when paid in cash, purchases add stock and update
//! costs, extractions take money out of the drawer.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use parking_lot::Mutex;
use pos_client::{ApiClient, ClientConfig, MemorySessionStore};
use pos_types::pricing::final_price;
use pos_types::{
    Article, CashMovement, CashMovementType, Category, Credentials, ExtractionData, PaymentMethod,
    Provider, PurchaseData, PurchaseDetail, PurchaseResponse, Role, SaleData, SaleDetail,
    SaleResponse, User,
};
use serde_json::{json, Value};
use tokio::net::TcpListener;

pub const ADMIN_PASSWORD: &str = "secret";
pub const SELLER_PASSWORD: &str = "seller-pass";

/// Every backend record date is on this day.
pub const TODAY: &str = "2024-03-05";

#[derive(Debug)]
struct Account {
    user: User,
    password: &'static str,
}

/// Backend state, shared between handlers and the test.
#[derive(Debug)]
pub struct Shop {
    accounts: Vec<Account>,
    pub articles: Vec<Article>,
    pub categories: Vec<Category>,
    pub providers: Vec<Provider>,
    pub sales: Vec<SaleResponse>,
    pub purchases: Vec<PurchaseResponse>,
    pub movements: Vec<CashMovement>,
    /// `METHOD path` of every request, in arrival order.
    pub requests: Vec<String>,
    next_id: i64,
}

pub type SharedShop = Arc<Mutex<Shop>>;

fn user(id: i64, username: &str, role: Role) -> User {
    User {
        id,
        username: username.to_string(),
        email: format!("{username}@oroverde.test"),
        role,
        created_at: "2024-01-01T00:00:00".to_string(),
        active: true,
    }
}

fn article(id: i64, title: &str, cost: i64, margin: i64, stock: i64) -> Article {
    Article {
        id,
        title: title.to_string(),
        content: String::new(),
        unit_price: cost,
        profit_margin: margin,
        final_price: final_price(cost, margin),
        stock,
        created_at: "2024-01-01T00:00:00".to_string(),
        category_id: 1,
        provider_id: 1,
        category: None,
        provider: None,
    }
}

impl Default for Shop {
    fn default() -> Self {
        Self {
            accounts: vec![
                Account {
                    user: user(1, "admin", Role::Admin),
                    password: ADMIN_PASSWORD,
                },
                Account {
                    user: user(2, "marta", Role::Seller),
                    password: SELLER_PASSWORD,
                },
                Account {
                    user: user(3, "julio", Role::Seller),
                    password: SELLER_PASSWORD,
                },
            ],
            articles: vec![
                article(1, "Vela 7 días roja", 400, 25, 10),
                article(2, "Incienso de sándalo", 200, 50, 3),
                article(3, "Collar de Changó", 1_500, 40, 0),
            ],
            categories: vec![Category {
                id: 1,
                name: "Velas".to_string(),
                articles: None,
            }],
            providers: vec![Provider {
                id: 1,
                name: "Distribuidora Yoruba".to_string(),
                contact_info: Some("11 4444-5555".to_string()),
                created_at: "2024-01-01T00:00:00".to_string(),
                articles: None,
            }],
            sales: vec![SaleResponse {
                id: 1,
                date: "2024-03-01T09:30:00".to_string(),
                client_name: Some("Ana".to_string()),
                total: 1_000,
                user_id: 3,
                seller_name: "julio".to_string(),
                payment_method: PaymentMethod::Transfer,
                details: Vec::new(),
            }],
            purchases: Vec::new(),
            movements: vec![CashMovement {
                id: 1,
                date: "2024-02-20T08:00:00".to_string(),
                kind: CashMovementType::ManualIncome,
                amount: 5_000,
                description: "Cambio inicial".to_string(),
                sale_id: None,
                purchase_id: None,
            }],
            requests: Vec::new(),
            next_id: 100,
        }
    }
}

impl Shop {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn caller(&self, headers: &HeaderMap) -> Option<User> {
        let token = headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())?
            .strip_prefix("Bearer tok-")?;
        let id: i64 = token.parse().ok()?;
        self.accounts
            .iter()
            .find(|a| a.user.id == id)
            .map(|a| a.user.clone())
    }

    fn push_movement(&mut self, kind: CashMovementType, amount: i64, description: String) -> i64 {
        let id = self.next_id();
        self.movements.push(CashMovement {
            id,
            date: format!("{TODAY}T12:00:00"),
            kind,
            amount,
            description,
            sale_id: None,
            purchase_id: None,
        });
        id
    }

    pub fn stock_of(&self, id: i64) -> Option<i64> {
        self.articles.iter().find(|a| a.id == id).map(|a| a.stock)
    }

    pub fn balance(&self) -> i64 {
        self.movements.iter().map(|m| m.amount).sum()
    }
}

fn error(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

fn unauthorized() -> Response {
    error(StatusCode::UNAUTHORIZED, "Token inválido o expirado")
}

fn forbidden() -> Response {
    error(StatusCode::FORBIDDEN, "Acceso denegado")
}

/// Resolve the caller or return the error response.
fn authenticate(shop: &mut Shop, headers: &HeaderMap, what: &str) -> Result<User, Response> {
    shop.requests.push(what.to_string());
    shop.caller(headers).ok_or_else(unauthorized)
}

fn authenticate_admin(shop: &mut Shop, headers: &HeaderMap, what: &str) -> Result<User, Response> {
    let user = authenticate(shop, headers, what)?;
    if user.role.is_admin() {
        Ok(user)
    } else {
        Err(forbidden())
    }
}

async fn login(State(shop): State<SharedShop>, Json(body): Json<Credentials>) -> Response {
    let mut shop = shop.lock();
    shop.requests.push("POST /auth/login".to_string());
    match shop
        .accounts
        .iter()
        .find(|a| a.user.username == body.username && a.password == body.password)
    {
        Some(account) => Json(json!({
            "token": format!("tok-{}", account.user.id),
            "user": account.user,
        }))
        .into_response(),
        None => error(StatusCode::UNAUTHORIZED, "Credenciales inválidas"),
    }
}

async fn list_articles(State(shop): State<SharedShop>, headers: HeaderMap) -> Response {
    let mut shop = shop.lock();
    match authenticate(&mut shop, &headers, "GET /article/articles") {
        Ok(_) => Json(shop.articles.clone()).into_response(),
        Err(response) => response,
    }
}

async fn list_categories(State(shop): State<SharedShop>, headers: HeaderMap) -> Response {
    let mut shop = shop.lock();
    match authenticate_admin(&mut shop, &headers, "GET /category/categories") {
        Ok(_) => Json(shop.categories.clone()).into_response(),
        Err(response) => response,
    }
}

async fn list_providers(State(shop): State<SharedShop>, headers: HeaderMap) -> Response {
    let mut shop = shop.lock();
    match authenticate_admin(&mut shop, &headers, "GET /provider/providers") {
        Ok(_) => Json(shop.providers.clone()).into_response(),
        Err(response) => response,
    }
}

async fn list_sales(State(shop): State<SharedShop>, headers: HeaderMap) -> Response {
    let mut shop = shop.lock();
    match authenticate(&mut shop, &headers, "GET /sale/sales") {
        Ok(_) => Json(shop.sales.clone()).into_response(),
        Err(response) => response,
    }
}

async fn create_sale(
    State(shop): State<SharedShop>,
    headers: HeaderMap,
    Json(sale): Json<SaleData>,
) -> Response {
    let mut shop = shop.lock();
    let seller = match authenticate(&mut shop, &headers, "POST /sale/sales") {
        Ok(user) => user,
        Err(response) => return response,
    };

    for item in &sale.items {
        let available = shop.stock_of(item.article_id).unwrap_or(0);
        if i64::from(item.units) > available {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "message": format!("Stock insuficiente para {}", item.title) })),
            )
                .into_response();
        }
    }

    let mut details = Vec::new();
    for item in &sale.items {
        if let Some(article) = shop.articles.iter_mut().find(|a| a.id == item.article_id) {
            article.stock -= i64::from(item.units);
        }
        let id = shop.next_id();
        details.push(SaleDetail {
            id,
            article_title: item.title.clone(),
            units: item.units,
            unit_price: item.unit_price,
            subtotal: item.subtotal().unwrap_or(i64::MAX),
        });
    }

    let id = shop.next_id();
    let total = sale.total();
    shop.sales.push(SaleResponse {
        id,
        date: format!("{TODAY}T12:00:00"),
        client_name: sale.client_name.clone(),
        total,
        user_id: seller.id,
        seller_name: seller.username.clone(),
        payment_method: sale.payment_method,
        details,
    });
    if sale.payment_method == PaymentMethod::Cash {
        shop.push_movement(CashMovementType::Sale, total, format!("Venta #{id}"));
    }

    (StatusCode::CREATED, Json(json!({ "message": "Venta registrada" }))).into_response()
}

async fn list_purchases(State(shop): State<SharedShop>, headers: HeaderMap) -> Response {
    let mut shop = shop.lock();
    match authenticate_admin(&mut shop, &headers, "GET /purchase/purchases") {
        Ok(_) => Json(shop.purchases.clone()).into_response(),
        Err(response) => response,
    }
}

async fn create_purchase(
    State(shop): State<SharedShop>,
    headers: HeaderMap,
    Json(purchase): Json<PurchaseData>,
) -> Response {
    let mut shop = shop.lock();
    if let Err(response) = authenticate_admin(&mut shop, &headers, "POST /purchase/purchases") {
        return response;
    }
    let Some(provider_name) = shop
        .providers
        .iter()
        .find(|p| p.id == purchase.provider_id)
        .map(|p| p.name.clone())
    else {
        return error(StatusCode::NOT_FOUND, "Proveedor no encontrado");
    };

    let mut details = Vec::new();
    let mut total = 0;
    for item in &purchase.items {
        if let Some(article) = shop.articles.iter_mut().find(|a| a.id == item.article_id) {
            article.stock += i64::from(item.units);
            article.unit_price = item.unit_price;
            article.profit_margin = item.profit_margin;
            article.final_price = item.final_price;
        }
        let subtotal = item.subtotal().unwrap_or(i64::MAX);
        total += subtotal;
        let id = shop.next_id();
        details.push(PurchaseDetail {
            id,
            article_title: item.title.clone(),
            units: item.units,
            unit_price: item.unit_price,
            subtotal,
        });
    }

    let id = shop.next_id();
    let date = purchase
        .date
        .clone()
        .map(|d| format!("{d}T00:00:00"))
        .unwrap_or_else(|| format!("{TODAY}T12:00:00"));
    shop.purchases.push(PurchaseResponse {
        id,
        date,
        provider_name,
        total,
        details,
    });
    if purchase.payment_method == Some(PaymentMethod::Cash) {
        shop.push_movement(CashMovementType::Purchase, -total, format!("Compra #{id}"));
    }

    (StatusCode::CREATED, Json(json!({ "message": "Compra registrada" }))).into_response()
}

async fn extraction(
    State(shop): State<SharedShop>,
    headers: HeaderMap,
    Json(body): Json<ExtractionData>,
) -> Response {
    let mut shop = shop.lock();
    if let Err(response) = authenticate_admin(&mut shop, &headers, "POST /cash/extraction") {
        return response;
    }
    if body.amount > shop.balance() {
        return error(StatusCode::BAD_REQUEST, "Saldo insuficiente en caja");
    }
    shop.push_movement(
        CashMovementType::Extraction,
        -body.amount,
        format!("{} - {}", body.reason, body.person),
    );
    Json(json!({ "msg": "Extracción registrada" })).into_response()
}

async fn movements(
    State(shop): State<SharedShop>,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    let mut shop = shop.lock();
    if let Err(response) = authenticate_admin(&mut shop, &headers, "GET /cash/movements") {
        return response;
    }
    let from = query.get("from_date").cloned().unwrap_or_default();
    let out: Vec<CashMovement> = shop
        .movements
        .iter()
        .filter(|m| m.date.as_str() >= from.as_str())
        .cloned()
        .collect();
    Json(out).into_response()
}

async fn balance(State(shop): State<SharedShop>, headers: HeaderMap) -> Response {
    let mut shop = shop.lock();
    match authenticate_admin(&mut shop, &headers, "GET /cash/balance") {
        Ok(_) => Json(json!({ "balance": shop.balance() })).into_response(),
        Err(response) => response,
    }
}

async fn sellers(State(shop): State<SharedShop>, headers: HeaderMap) -> Response {
    let mut shop = shop.lock();
    match authenticate_admin(&mut shop, &headers, "GET /user/vendedores") {
        Ok(_) => {
            let sellers: Vec<User> = shop
                .accounts
                .iter()
                .filter(|a| !a.user.role.is_admin())
                .map(|a| a.user.clone())
                .collect();
            Json(sellers).into_response()
        }
        Err(response) => response,
    }
}

/// A running backend.
pub struct TestBackend {
    pub addr: SocketAddr,
    pub shop: SharedShop,
}

impl TestBackend {
    pub async fn spawn() -> Self {
        let shop = SharedShop::default();
        let router = Router::new()
            .route("/auth/login", post(login))
            .route("/article/articles", get(list_articles))
            .route("/category/categories", get(list_categories))
            .route("/provider/providers", get(list_providers))
            .route("/sale/sales", get(list_sales).post(create_sale))
            .route("/purchase/purchases", get(list_purchases).post(create_purchase))
            .route("/cash/extraction", post(extraction))
            .route("/cash/movements", get(movements))
            .route("/cash/balance", get(balance))
            .route("/user/vendedores", get(sellers))
            .with_state(shop.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        Self { addr, shop }
    }

    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// A client with an empty in-memory session.
    pub fn client(&self) -> (ApiClient, Arc<MemorySessionStore>) {
        let store = Arc::new(MemorySessionStore::new());
        let mut config = ClientConfig {
            base_url: self.url(),
            timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(1),
            ..ClientConfig::default()
        };
        config.validate().unwrap();
        let api = ApiClient::new(&config, store.clone()).unwrap();
        (api, store)
    }

    /// Requests received so far.
    pub fn requests(&self) -> Vec<String> {
        self.shop.lock().requests.clone()
    }
}
