//! # Sale Flow
//!
//! Counter sale from catalog to ticket:
//!
//! 1. Seller logs in and loads the catalog
//! 2. `SaleCart` enforces stock locally and merges repeated articles
//! 3. Checkout body goes to `POST /sale/sales`, the backend takes stock
//! 4. Ticket is rendered from the same body
//! 5. History shows the seller only their own sales

#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, TimeZone};
    use pos_cart::{CartError, SaleCart, StockAdjustment};
    use pos_client::{AccessError, ApiError};
    use pos_reports::{search_sales, visible_sales, Ticket, TicketConfig};
    use pos_types::{Article, PaymentMethod, PurchaseData};

    use crate::backend::{TestBackend, SELLER_PASSWORD, TODAY};

    fn find(articles: &[Article], id: i64) -> &Article {
        articles.iter().find(|a| a.id == id).unwrap()
    }

    #[tokio::test]
    async fn test_seller_sale_ticket_and_history() {
        let backend = TestBackend::spawn().await;
        let (api, _) = backend.client();
        let session = api.auth().login("marta", SELLER_PASSWORD).await.unwrap();

        let articles = api.articles().list().await.unwrap();
        let vela = find(&articles, 1);
        let incienso = find(&articles, 2);
        let collar = find(&articles, 3);

        let mut cart = SaleCart::new();
        cart.add(vela, 2).unwrap();
        cart.add(incienso, 1).unwrap();
        cart.add(vela, 1).unwrap();
        assert_eq!(cart.lines().len(), 2);
        assert_eq!(cart.total(), 3 * 500 + 300);
        assert_eq!(
            cart.add(collar, 1),
            Err(CartError::OutOfStock { article_id: 3 })
        );

        let sale = cart.checkout("  ", Some(PaymentMethod::Cash)).unwrap();
        assert_eq!(sale.client_name, None);
        let response = api.sales().create(&sale).await.unwrap();
        assert_eq!(response.message, "Venta registrada");
        assert_eq!(backend.shop.lock().stock_of(1), Some(7));
        assert_eq!(backend.shop.lock().stock_of(2), Some(2));

        let issued = FixedOffset::west_opt(3 * 3600)
            .unwrap()
            .with_ymd_and_hms(2024, 3, 5, 12, 0, 0)
            .unwrap();
        let ticket = Ticket::for_sale(&sale, issued);
        let text = ticket.render(&TicketConfig::default());
        assert!(text.contains("Fecha: 05/03/2024 12:00"));
        assert!(text.contains("Cliente: Consumidor Final"));
        assert!(text.contains("Pago: EFECTIVO"));
        assert!(text.contains("TOTAL: $1.800"));
        assert_eq!(ticket.file_name(), "Ticket_1709650800000.pdf");
        let pdf = ticket.render_pdf(&TicketConfig::default()).unwrap();
        assert!(pdf.starts_with(b"%PDF"));

        let history = api.sales().list().await.unwrap();
        assert_eq!(history.len(), 2);
        let mine = visible_sales(&history, &session.user);
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].total, 1_800);
        assert_eq!(mine[0].seller_name, "marta");
        assert!(mine[0].date.starts_with(TODAY));

        // Ana bought from another seller
        assert!(search_sales(&history, &session.user, "ana").is_empty());
        assert_eq!(search_sales(&history, &session.user, "").len(), 1);
    }

    #[tokio::test]
    async fn test_cart_follows_refreshed_stock() {
        let backend = TestBackend::spawn().await;
        let (marta, _) = backend.client();
        let (julio, _) = backend.client();
        marta.auth().login("marta", SELLER_PASSWORD).await.unwrap();
        julio.auth().login("julio", SELLER_PASSWORD).await.unwrap();

        let articles = marta.articles().list().await.unwrap();
        let mut cart = SaleCart::new();
        cart.add(find(&articles, 2), 3).unwrap();
        cart.add(find(&articles, 1), 1).unwrap();

        // Another counter sells two incense sticks first
        let mut other = SaleCart::new();
        other.add(find(&articles, 2), 2).unwrap();
        let sale = other.checkout("Luis", Some(PaymentMethod::Transfer)).unwrap();
        julio.sales().create(&sale).await.unwrap();

        // The stale cart is refused as a whole
        let stale = cart.checkout("", Some(PaymentMethod::Cash)).unwrap();
        let err = marta.sales().create(&stale).await.unwrap_err();
        assert_eq!(err.status(), Some(400));
        assert_eq!(err.user_message(), "Stock insuficiente para Incienso de sándalo");
        assert_eq!(backend.shop.lock().stock_of(1), Some(10));

        let refreshed = marta.articles().list().await.unwrap();
        let adjustments = cart.reconcile(&refreshed);
        assert_eq!(
            adjustments,
            vec![StockAdjustment::Clamped {
                article_id: 2,
                title: "Incienso de sándalo".to_string(),
                from: 3,
                to: 1,
            }]
        );

        let sale = cart.checkout("", Some(PaymentMethod::Cash)).unwrap();
        marta.sales().create(&sale).await.unwrap();
        assert_eq!(backend.shop.lock().stock_of(2), Some(0));
        assert_eq!(backend.shop.lock().stock_of(1), Some(9));
    }

    #[tokio::test]
    async fn test_seller_cannot_reach_admin_endpoints() {
        let backend = TestBackend::spawn().await;
        let (api, _) = backend.client();
        api.auth().login("marta", SELLER_PASSWORD).await.unwrap();

        let purchase = PurchaseData {
            provider_id: 1,
            items: Vec::new(),
            payment_method: Some(PaymentMethod::Cash),
            date: None,
        };
        let err = api.purchases().create(&purchase).await.unwrap_err();
        assert!(matches!(err, ApiError::Access(AccessError::Forbidden(_))));

        let err = api.cash().balance().await.unwrap_err();
        assert!(matches!(err, ApiError::Access(_)));

        let requests = backend.requests();
        assert!(!requests.iter().any(|r| r.contains("/purchase/")));
        assert!(!requests.iter().any(|r| r.contains("/cash/")));
    }
}
