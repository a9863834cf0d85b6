//! Where dashboard data comes from.

use async_trait::async_trait;
use chrono::NaiveDate;
use pos_client::{ApiClient, ApiError};
use pos_reports::Window;
use pos_types::{
    Amount, Article, CashMovement, Category, Provider, PurchaseResponse, Role, SaleResponse, User,
};
use tracing::debug;

/// Read side of the backend as the dashboard uses it.
#[async_trait]
pub trait DashboardSource: Send + Sync {
    async fn fetch_articles(&self) -> Result<Vec<Article>, ApiError>;
    async fn fetch_categories(&self) -> Result<Vec<Category>, ApiError>;
    async fn fetch_providers(&self) -> Result<Vec<Provider>, ApiError>;
    async fn fetch_sales(&self) -> Result<Vec<SaleResponse>, ApiError>;
    async fn fetch_purchases(&self) -> Result<Vec<PurchaseResponse>, ApiError>;
    async fn fetch_movements(&self, from: Option<NaiveDate>) -> Result<Vec<CashMovement>, ApiError>;
    async fn fetch_balance(&self) -> Result<Amount, ApiError>;
    async fn fetch_sellers(&self) -> Result<Vec<User>, ApiError>;
}

#[async_trait]
impl DashboardSource for ApiClient {
    async fn fetch_articles(&self) -> Result<Vec<Article>, ApiError> {
        self.articles().list().await
    }

    async fn fetch_categories(&self) -> Result<Vec<Category>, ApiError> {
        self.categories().list().await
    }

    async fn fetch_providers(&self) -> Result<Vec<Provider>, ApiError> {
        self.providers().list().await
    }

    async fn fetch_sales(&self) -> Result<Vec<SaleResponse>, ApiError> {
        self.sales().list().await
    }

    async fn fetch_purchases(&self) -> Result<Vec<PurchaseResponse>, ApiError> {
        self.purchases().list().await
    }

    async fn fetch_movements(&self, from: Option<NaiveDate>) -> Result<Vec<CashMovement>, ApiError> {
        self.cash().movements(from).await
    }

    async fn fetch_balance(&self) -> Result<Amount, ApiError> {
        self.cash().balance().await
    }

    async fn fetch_sellers(&self) -> Result<Vec<User>, ApiError> {
        self.users().list_sellers().await
    }
}

/// Result of one refresh. `None` fields failed and keep their old value.
#[derive(Debug, Default)]
pub struct Refresh {
    pub articles: Option<Vec<Article>>,
    pub categories: Option<Vec<Category>>,
    pub providers: Option<Vec<Provider>>,
    pub sales: Option<Vec<SaleResponse>>,
    pub purchases: Option<Vec<PurchaseResponse>>,
    pub movements: Option<Vec<CashMovement>>,
    pub balance: Option<Amount>,
    pub sellers: Option<Vec<User>>,
    pub errors: Vec<String>,
    /// The backend answered 401; the stored session is gone.
    pub session_expired: bool,
}

impl Refresh {
    fn keep<T>(&mut self, what: &str, result: Result<T, ApiError>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(err) => {
                debug!(what, error = %err, "Dashboard fetch failed");
                if matches!(err, ApiError::Unauthorized { .. }) {
                    self.session_expired = true;
                }
                self.errors.push(format!("{what}: {}", err.user_message()));
                None
            }
        }
    }
}

/// Fetch everything `role` may see. Admin-only resources are skipped for
/// sellers.
pub async fn refresh(
    source: &dyn DashboardSource,
    role: Role,
    window: Window,
    today: NaiveDate,
) -> Refresh {
    let mut out = Refresh::default();

    let (articles, sales) = tokio::join!(source.fetch_articles(), source.fetch_sales());
    out.articles = out.keep("articles", articles);
    out.sales = out.keep("sales", sales);

    if role.is_admin() {
        let (categories, providers, purchases, movements, balance, sellers) = tokio::join!(
            source.fetch_categories(),
            source.fetch_providers(),
            source.fetch_purchases(),
            source.fetch_movements(window.from_date(today)),
            source.fetch_balance(),
            source.fetch_sellers(),
        );
        out.categories = out.keep("categories", categories);
        out.providers = out.keep("providers", providers);
        out.purchases = out.keep("purchases", purchases);
        out.movements = out.keep("movements", movements);
        out.balance = out.keep("balance", balance);
        out.sellers = out.keep("sellers", sellers);
    }

    out
}
