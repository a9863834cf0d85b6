use pos_telemetry::log_event;
use pos_types::{Article, ArticleDraft, ArticleId};

use crate::{ApiClient, ApiError};

/// Inventory articles. Reads are open to every role; writes need an admin.
pub struct ArticleService<'a> {
    api: &'a ApiClient,
}

impl<'a> ArticleService<'a> {
    pub(crate) fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    pub async fn list(&self) -> Result<Vec<Article>, ApiError> {
        self.api.get("/article/articles").await
    }

    pub async fn create(&self, draft: &ArticleDraft) -> Result<Article, ApiError> {
        self.api.require_admin("create article")?;
        let payload = draft.validate()?;
        let article: Article = self.api.post("/article/articles", &payload).await?;
        log_event!(info, "articles", "Article created", id = article.id, title = %article.title);
        Ok(article)
    }

    pub async fn update(&self, id: ArticleId, draft: &ArticleDraft) -> Result<Article, ApiError> {
        self.api.require_admin("update article")?;
        let payload = draft.validate()?;
        let article: Article = self
            .api
            .put(&format!("/article/articles/{id}"), &payload)
            .await?;
        log_event!(info, "articles", "Article updated", id);
        Ok(article)
    }

    pub async fn delete(&self, id: ArticleId) -> Result<(), ApiError> {
        self.api.require_admin("delete article")?;
        self.api.delete(&format!("/article/articles/{id}")).await?;
        log_event!(info, "articles", "Article deleted", id);
        Ok(())
    }
}
