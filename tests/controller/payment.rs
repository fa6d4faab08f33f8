//! Tests for the payment endpoints.

use chrono::NaiveDate;
use entity::sea_orm_active_enums::{NotificationType, PaymentMethod};
use rust_decimal::Decimal;
use sea_orm::EntityTrait;
use strata::{
    model::{
        api::MonthQuery,
        payment::{CreatePaymentDto, PaymentDto},
    },
    server::controller::payment::{
        create_payment, list_payments_by_apartment, list_payments_by_month,
    },
};

use super::*;

fn month(m: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, m, 1).unwrap()
}

fn new_payment(apartment_id: i32, amount: &str) -> CreatePaymentDto {
    CreatePaymentDto {
        apartment_id,
        month: "2025-03".to_string(),
        amount: amount.to_string(),
        payment_date: NaiveDate::from_ymd_opt(2025, 3, 5).unwrap(),
        payment_method: PaymentMethod::BankTransfer,
        transaction_id: Some("TX-1001".to_string()),
        notes: None,
    }
}

mod create_payment {
    use super::*;

    /// Expect the payment and exactly one payment_received notification for its apartment
    #[tokio::test]
    async fn records_payment_with_notification() -> Result<(), TestError> {
        let test = TestBuilder::new().with_dashboard_tables().build().await?;
        login_user(&test, "manager").await?;
        let apartment = test.apartment().insert_mock_apartment(2, 3).await?;

        let resp = create_payment(
            State(test.app_state()),
            test.session.clone(),
            Json(new_payment(apartment.id, "2500")),
        )
        .await
        .into_response();

        assert_eq!(resp.status(), StatusCode::CREATED);
        let payment: PaymentDto = body_json(resp).await;
        assert_eq!(payment.apartment_id, apartment.id);
        assert_eq!(payment.month, month(3));
        assert_eq!(payment.amount, Decimal::new(2500, 0));

        let notifications = entity::prelude::Notification::find().all(&test.db).await?;
        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0].apartment_id, Some(apartment.id));
        assert_eq!(notifications[0].kind, NotificationType::PaymentReceived);
        assert!(notifications[0].content.contains("Owner 2-3"));
        assert!(notifications[0].content.contains("2025-03"));

        Ok(())
    }

    /// Expect 404 and nothing stored for an unknown apartment
    #[tokio::test]
    async fn rejects_unknown_apartment() -> Result<(), TestError> {
        let test = TestBuilder::new().with_dashboard_tables().build().await?;
        login_user(&test, "manager").await?;

        let resp = create_payment(
            State(test.app_state()),
            test.session.clone(),
            Json(new_payment(99, "2500")),
        )
        .await
        .into_response();

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert!(entity::prelude::Payment::find().all(&test.db).await?.is_empty());
        assert!(entity::prelude::Notification::find()
            .all(&test.db)
            .await?
            .is_empty());

        Ok(())
    }

    /// Expect 400 for an amount with more than two decimal places
    #[tokio::test]
    async fn rejects_malformed_amount() -> Result<(), TestError> {
        let test = TestBuilder::new().with_dashboard_tables().build().await?;
        login_user(&test, "manager").await?;
        let apartment = test.apartment().insert_mock_apartment(1, 1).await?;

        let resp = create_payment(
            State(test.app_state()),
            test.session.clone(),
            Json(new_payment(apartment.id, "12.345")),
        )
        .await
        .into_response();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        Ok(())
    }

    /// Expect 503 while the database is unavailable
    #[tokio::test]
    async fn fails_without_database() -> Result<(), TestError> {
        let test = TestBuilder::new().with_dashboard_tables().build().await?;
        login_user(&test, "manager").await?;

        let resp = create_payment(
            State(test.unavailable_app_state()),
            test.session.clone(),
            Json(new_payment(1, "2500")),
        )
        .await
        .into_response();

        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);

        Ok(())
    }
}

mod list_payments {
    use super::*;

    /// Expect only the payments of the queried month
    #[tokio::test]
    async fn filters_by_month() -> Result<(), TestError> {
        let test = TestBuilder::new().with_dashboard_tables().build().await?;
        login_user(&test, "manager").await?;
        let apartment = test.apartment().insert_mock_apartment(1, 1).await?;
        let payments = test.payment();
        payments
            .insert_mock_payment(apartment.id, month(2), Decimal::new(2500, 0))
            .await?;
        payments
            .insert_mock_payment(apartment.id, month(3), Decimal::new(2500, 0))
            .await?;

        let resp = list_payments_by_month(
            State(test.app_state()),
            test.session.clone(),
            Query(MonthQuery {
                month: "2025-02".to_string(),
            }),
        )
        .await
        .into_response();

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Vec<PaymentDto> = body_json(resp).await;
        assert_eq!(body.len(), 1);
        assert_eq!(body[0].month, month(2));

        Ok(())
    }

    /// Expect an apartment's payments with the newest month first
    #[tokio::test]
    async fn lists_apartment_history_newest_first() -> Result<(), TestError> {
        let test = TestBuilder::new().with_dashboard_tables().build().await?;
        login_user(&test, "manager").await?;
        let apartment = test.apartment().insert_mock_apartment(1, 1).await?;
        let other = test.apartment().insert_mock_apartment(1, 2).await?;
        let payments = test.payment();
        payments
            .insert_mock_payment(apartment.id, month(1), Decimal::new(2500, 0))
            .await?;
        payments
            .insert_mock_payment(apartment.id, month(3), Decimal::new(2500, 0))
            .await?;
        payments
            .insert_mock_payment(other.id, month(2), Decimal::new(2500, 0))
            .await?;

        let resp = list_payments_by_apartment(
            State(test.app_state()),
            test.session.clone(),
            Path(apartment.id),
        )
        .await
        .into_response();

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Vec<PaymentDto> = body_json(resp).await;
        let months: Vec<NaiveDate> = body.iter().map(|p| p.month).collect();
        assert_eq!(months, vec![month(3), month(1)]);

        Ok(())
    }
}
