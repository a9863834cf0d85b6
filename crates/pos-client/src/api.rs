//! HTTP transport shared by every service.

use std::sync::Arc;

use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::{extract_message, ApiError};
use crate::guard::{self, View};
use crate::services::{
    ArticleService, AuthService, CashService, CategoryService, ProviderService, PurchaseService,
    SaleService, UserService,
};
use crate::session::{Session, SessionStore};

/// Client for the shop backend.
///
/// Cheap to clone; clones share the connection pool and the session store.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    session: Arc<dyn SessionStore>,
}

impl ApiClient {
    /// Build a client. `config` must already be validated.
    pub fn new(config: &ClientConfig, session: Arc<dyn SessionStore>) -> Result<Self, ApiError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()
            .map_err(|e| ApiError::Client(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            session,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Current session, if logged in.
    pub fn session(&self) -> Option<Session> {
        self.session.load()
    }

    pub fn session_store(&self) -> &Arc<dyn SessionStore> {
        &self.session
    }

    /// Fail unless an administrator is logged in.
    pub fn require_admin(&self, action: &str) -> Result<Session, ApiError> {
        let session = self.session();
        Ok(guard::require_admin(session.as_ref(), action)?.clone())
    }

    /// Fail unless the logged-in role may open `view`.
    pub fn require_view(&self, view: View) -> Result<Session, ApiError> {
        let session = self.session();
        Ok(guard::require_view(session.as_ref(), view)?.clone())
    }

    pub fn auth(&self) -> AuthService<'_> {
        AuthService::new(self)
    }

    pub fn articles(&self) -> ArticleService<'_> {
        ArticleService::new(self)
    }

    pub fn categories(&self) -> CategoryService<'_> {
        CategoryService::new(self)
    }

    pub fn providers(&self) -> ProviderService<'_> {
        ProviderService::new(self)
    }

    pub fn sales(&self) -> SaleService<'_> {
        SaleService::new(self)
    }

    pub fn purchases(&self) -> PurchaseService<'_> {
        PurchaseService::new(self)
    }

    pub fn cash(&self) -> CashService<'_> {
        CashService::new(self)
    }

    pub fn users(&self) -> UserService<'_> {
        UserService::new(self)
    }

    pub(crate) async fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        self.send(self.request(Method::GET, path), path).await
    }

    pub(crate) async fn get_with_query<Q, R>(&self, path: &str, query: &Q) -> Result<R, ApiError>
    where
        Q: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.send(self.request(Method::GET, path).query(query), path)
            .await
    }

    pub(crate) async fn post<B, R>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.send(self.request(Method::POST, path).json(body), path)
            .await
    }

    pub(crate) async fn put<B, R>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.send(self.request(Method::PUT, path).json(body), path)
            .await
    }

    /// PUT without a body, for action endpoints.
    pub(crate) async fn put_empty<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        self.send(self.request(Method::PUT, path), path).await
    }

    /// DELETE; the response body is ignored.
    pub(crate) async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.execute(self.request(Method::DELETE, path), path)
            .await
            .map(|_| ())
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        debug!(method = %method, path, "API request");
        let builder = self.http.request(method, format!("{}{}", self.base_url, path));
        match self.session.load() {
            Some(session) => builder.bearer_auth(session.token),
            None => builder,
        }
    }

    async fn send<R: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        path: &str,
    ) -> Result<R, ApiError> {
        let body = self.execute(builder, path).await?;
        decode(&body)
    }

    /// Run the request and return the body of a 2xx response.
    async fn execute(&self, builder: RequestBuilder, path: &str) -> Result<String, ApiError> {
        let response = builder.send().await.map_err(|e| {
            warn!(path, error = %e, "Backend unreachable");
            ApiError::Unreachable(e.to_string())
        })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;

        if status.is_success() {
            return Ok(body);
        }

        let message = extract_message(&body);
        if status == StatusCode::UNAUTHORIZED {
            warn!(path, %message, "Unauthorized, clearing session");
            if let Err(e) = self.session.clear() {
                warn!(error = %e, "Cannot clear session");
            }
            return Err(ApiError::Unauthorized { message });
        }

        debug!(path, status = status.as_u16(), %message, "API request failed");
        Err(ApiError::Status {
            status: status.as_u16(),
            message,
        })
    }
}

/// Decode a success body. Empty bodies read as `{}` so acknowledgement
/// types with defaults still decode.
fn decode<R: DeserializeOwned>(body: &str) -> Result<R, ApiError> {
    let body = if body.trim().is_empty() { "{}" } else { body };
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}
