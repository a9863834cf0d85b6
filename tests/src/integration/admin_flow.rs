//! # Admin Flow
//!
//! Purchases restock the catalog and, when paid in cash, leave the drawer.
//! Extractions leave the drawer too. Statistics over a window must agree
//! with the backend balance.

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pos_cart::PurchaseCart;
    use pos_client::ApiError;
    use pos_reports::{extractions, CashSummary, Window};
    use pos_types::{CashMovementType, ExtractionDraft, PaymentMethod, ValidationError};

    use crate::backend::{TestBackend, ADMIN_PASSWORD};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 5).unwrap()
    }

    #[tokio::test]
    async fn test_purchase_extraction_and_statistics() {
        let backend = TestBackend::spawn().await;
        let (api, _) = backend.client();
        api.auth().login("admin", ADMIN_PASSWORD).await.unwrap();

        let articles = api.articles().list().await.unwrap();
        let incienso = articles.iter().find(|a| a.id == 2).unwrap();

        let mut cart = PurchaseCart::new();
        cart.add(incienso, 5, Some(250)).unwrap();
        assert_eq!(cart.total(), 1_250);
        assert_eq!(cart.lines()[0].final_price, 375);

        let purchase = cart
            .checkout(Some(1), Some(PaymentMethod::Cash), NaiveDate::from_ymd_opt(2024, 3, 4))
            .unwrap();
        let response = api.purchases().create(&purchase).await.unwrap();
        assert_eq!(response.message, "Compra registrada");

        let articles = api.articles().list().await.unwrap();
        let incienso = articles.iter().find(|a| a.id == 2).unwrap();
        assert_eq!(incienso.stock, 8);
        assert_eq!(incienso.unit_price, 250);
        assert_eq!(incienso.final_price, 375);

        let purchases = api.purchases().list().await.unwrap();
        assert_eq!(purchases.len(), 1);
        assert_eq!(purchases[0].provider_name, "Distribuidora Yoruba");
        assert!(purchases[0].date.starts_with("2024-03-04"));
        assert_eq!(api.cash().balance().await.unwrap(), 5_000 - 1_250);

        let draft = ExtractionDraft {
            amount: 750,
            reason: "Pago de luz".into(),
            person: "Rosa".into(),
            payment_method: Some(PaymentMethod::Cash),
        };
        let response = api.cash().extract(&draft).await.unwrap();
        assert_eq!(response.message, "Extracción registrada");
        let balance = api.cash().balance().await.unwrap();
        assert_eq!(balance, 3_000);

        // The month leaves out February's opening cash
        let month = api
            .cash()
            .movements(Window::Month.from_date(today()))
            .await
            .unwrap();
        let summary = CashSummary::from_movements(&month);
        assert_eq!(summary.movement_count, 2);
        assert_eq!(summary.income, 0);
        assert_eq!(summary.expenses, 2_000);
        assert_eq!(summary.by_type.get(&CashMovementType::Purchase), Some(&-1_250));

        let taken = extractions(&month);
        assert_eq!(taken.len(), 1);
        assert_eq!(taken[0].amount, -750);
        assert_eq!(taken[0].description, "Pago de luz - Rosa");

        let all = api.cash().movements(Window::Total.from_date(today())).await.unwrap();
        assert_eq!(CashSummary::from_movements(&all).net(), balance);
    }

    #[tokio::test]
    async fn test_extraction_errors() {
        let backend = TestBackend::spawn().await;
        let (api, _) = backend.client();
        api.auth().login("admin", ADMIN_PASSWORD).await.unwrap();

        let too_much = ExtractionDraft {
            amount: 9_999,
            reason: String::new(),
            person: "Rosa".into(),
            payment_method: None,
        };
        let err = api.cash().extract(&too_much).await.unwrap_err();
        assert_eq!(err.status(), Some(400));
        assert_eq!(err.user_message(), "Saldo insuficiente en caja");

        let nobody = ExtractionDraft {
            amount: 100,
            person: "   ".into(),
            ..too_much
        };
        let err = api.cash().extract(&nobody).await.unwrap_err();
        assert!(matches!(
            err,
            ApiError::Validation(ValidationError::MissingField("person"))
        ));
        let sent = backend
            .requests()
            .iter()
            .filter(|r| r.as_str() == "POST /cash/extraction")
            .count();
        assert_eq!(sent, 1);
        assert_eq!(backend.shop.lock().balance(), 5_000);
    }
}
