use pos_telemetry::log_event;
use pos_types::{Category, CategoryDraft, CategoryId, Provider, ProviderDraft, ProviderId};

use crate::{ApiClient, ApiError};

/// Article categories. There is no delete endpoint.
pub struct CategoryService<'a> {
    api: &'a ApiClient,
}

impl<'a> CategoryService<'a> {
    pub(crate) fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// Open to every role; the article form needs it.
    pub async fn list(&self) -> Result<Vec<Category>, ApiError> {
        self.api.get("/category/categories").await
    }

    pub async fn create(&self, draft: &CategoryDraft) -> Result<Category, ApiError> {
        self.api.require_admin("create category")?;
        let payload = draft.validate()?;
        let category: Category = self.api.post("/category/categories", &payload).await?;
        log_event!(info, "categories", "Category created", id = category.id);
        Ok(category)
    }

    pub async fn update(&self, id: CategoryId, draft: &CategoryDraft) -> Result<Category, ApiError> {
        self.api.require_admin("update category")?;
        let payload = draft.validate()?;
        let category: Category = self
            .api
            .put(&format!("/category/categories/{id}"), &payload)
            .await?;
        log_event!(info, "categories", "Category updated", id);
        Ok(category)
    }
}

/// Suppliers.
pub struct ProviderService<'a> {
    api: &'a ApiClient,
}

impl<'a> ProviderService<'a> {
    pub(crate) fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    pub async fn list(&self) -> Result<Vec<Provider>, ApiError> {
        self.api.get("/provider/providers").await
    }

    pub async fn create(&self, draft: &ProviderDraft) -> Result<Provider, ApiError> {
        self.api.require_admin("create provider")?;
        let payload = draft.validate()?;
        let provider: Provider = self.api.post("/provider/providers", &payload).await?;
        log_event!(info, "providers", "Provider created", id = provider.id);
        Ok(provider)
    }

    pub async fn update(&self, id: ProviderId, draft: &ProviderDraft) -> Result<Provider, ApiError> {
        self.api.require_admin("update provider")?;
        let payload = draft.validate()?;
        let provider: Provider = self
            .api
            .put(&format!("/provider/providers/{id}"), &payload)
            .await?;
        log_event!(info, "providers", "Provider updated", id);
        Ok(provider)
    }

    pub async fn delete(&self, id: ProviderId) -> Result<(), ApiError> {
        self.api.require_admin("delete provider")?;
        self.api.delete(&format!("/provider/providers/{id}")).await?;
        log_event!(info, "providers", "Provider deleted", id);
        Ok(())
    }
}
