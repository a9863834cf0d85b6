//! # Dashboard Flow
//!
//! `refresh` against the backend for each role, merged into the dashboard
//! `App`.

#[cfg(test)]
mod tests {
    use chrono::{Local, NaiveDate};
    use pos_admin::domain::{refresh, App};
    use pos_client::{Session, SessionStore, View};
    use pos_reports::Window;
    use pos_types::{Role, User};

    use crate::backend::{TestBackend, ADMIN_PASSWORD, SELLER_PASSWORD};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 5).unwrap()
    }

    #[tokio::test]
    async fn test_seller_refresh_skips_admin_resources() {
        let backend = TestBackend::spawn().await;
        let (api, _) = backend.client();
        let session = api.auth().login("marta", SELLER_PASSWORD).await.unwrap();

        let update = refresh(&api, Role::Seller, Window::Total, today()).await;
        assert!(update.errors.is_empty());
        assert!(update.balance.is_none());
        assert!(update.sellers.is_none());

        let mut app = App::new(session);
        app.apply_refresh(update, Local::now());
        assert_eq!(app.data.articles.len(), 3);
        assert_eq!(app.data.sales.len(), 1);
        assert!(app.visible_sales().is_empty());
        assert_eq!(app.views(), &[View::Articles, View::Sales]);

        let requests = backend.requests();
        assert!(requests.iter().all(|r| !r.contains("/cash/") && !r.contains("/user/")));
    }

    #[tokio::test]
    async fn test_admin_refresh_fills_every_section() {
        let backend = TestBackend::spawn().await;
        let (api, _) = backend.client();
        let session = api.auth().login("admin", ADMIN_PASSWORD).await.unwrap();

        let update = refresh(&api, Role::Admin, Window::Month, today()).await;
        assert!(update.errors.is_empty(), "{:?}", update.errors);

        let mut app = App::new(session);
        app.apply_refresh(update, Local::now());
        assert_eq!(app.data.balance, Some(5_000));
        assert_eq!(app.data.sellers.len(), 2);
        assert_eq!(app.data.providers.len(), 1);
        assert_eq!(app.data.categories.len(), 1);
        // February's opening cash is outside the month
        assert!(app.data.movements.is_empty());
        assert_eq!(app.summary().net(), 0);
        assert_eq!(app.visible_sales().len(), 1);
    }

    #[tokio::test]
    async fn test_expired_token_ends_dashboard() {
        let backend = TestBackend::spawn().await;
        let (api, store) = backend.client();
        let session = Session {
            token: "tok-99".to_string(),
            user: User {
                id: 99,
                username: "ghost".into(),
                email: String::new(),
                role: Role::Admin,
                created_at: String::new(),
                active: true,
            },
        };
        store.save(&session).unwrap();

        let update = refresh(&api, Role::Admin, Window::Total, today()).await;
        assert!(update.session_expired);
        assert!(store.load().is_none());

        let mut app = App::new(session);
        app.data.balance = Some(1);
        app.apply_refresh(update, Local::now());
        assert!(app.should_quit());
        assert!(app.exit_message.is_some());
        assert_eq!(app.data.balance, Some(1));
    }
}
