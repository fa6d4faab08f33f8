//! Tests for the fee category and monthly fee endpoints.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use strata::{
    model::{
        api::MonthQuery,
        fee::{
            CreateFeeCategoryDto, CreateMonthlyFeeDto, FeeCategoryDto, MonthlyFeeDto,
            UpdateFeeCategoryDto, UpdateMonthlyFeeDto,
        },
    },
    server::controller::fee::{
        create_fee_category, create_monthly_fee, list_fee_categories, list_monthly_fees,
        update_fee_category, update_monthly_fee,
    },
};

use super::*;

mod list_fee_categories {
    use super::*;

    /// Expect only active categories
    #[tokio::test]
    async fn hides_inactive_categories() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_dashboard_tables()
            .with_fee_category("Maintenance")
            .with_fee_category("Cleaning")
            .build()
            .await?;
        login_user(&test, "manager").await?;
        test.fee().insert_inactive_fee_category("Elevator").await?;

        let resp = list_fee_categories(State(test.app_state()), test.session.clone())
            .await
            .into_response();

        assert_eq!(resp.status(), StatusCode::OK);
        let categories: Vec<FeeCategoryDto> = body_json(resp).await;
        assert_eq!(categories.len(), 2);
        assert!(categories.iter().all(|c| c.is_active));

        Ok(())
    }
}

mod create_fee_category {
    use super::*;

    /// Expect the new category to be created active
    #[tokio::test]
    async fn creates_active_category() -> Result<(), TestError> {
        let test = TestBuilder::new().with_dashboard_tables().build().await?;
        login_user(&test, "manager").await?;

        let resp = create_fee_category(
            State(test.app_state()),
            test.session.clone(),
            Json(CreateFeeCategoryDto {
                name: "Security".to_string(),
                description: Some("Night guard".to_string()),
            }),
        )
        .await
        .into_response();

        assert_eq!(resp.status(), StatusCode::CREATED);
        let category: FeeCategoryDto = body_json(resp).await;
        assert_eq!(category.name, "Security");
        assert!(category.is_active);

        Ok(())
    }

    /// Expect 400 for a blank name
    #[tokio::test]
    async fn rejects_blank_name() -> Result<(), TestError> {
        let test = TestBuilder::new().with_dashboard_tables().build().await?;
        login_user(&test, "manager").await?;

        let resp = create_fee_category(
            State(test.app_state()),
            test.session.clone(),
            Json(CreateFeeCategoryDto {
                name: " ".to_string(),
                description: None,
            }),
        )
        .await
        .into_response();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        Ok(())
    }
}

mod update_fee_category {
    use super::*;

    /// Expect a deactivated category to drop out of the list
    #[tokio::test]
    async fn deactivates_category() -> Result<(), TestError> {
        let test = TestBuilder::new().with_dashboard_tables().build().await?;
        login_user(&test, "manager").await?;
        let category = test.fee().insert_mock_fee_category("Maintenance").await?;

        let resp = update_fee_category(
            State(test.app_state()),
            test.session.clone(),
            Path(category.id),
            Json(UpdateFeeCategoryDto {
                is_active: Some(false),
                ..Default::default()
            }),
        )
        .await
        .into_response();

        assert_eq!(resp.status(), StatusCode::OK);
        let updated: FeeCategoryDto = body_json(resp).await;
        assert!(!updated.is_active);
        assert_eq!(updated.name, "Maintenance");

        let resp = list_fee_categories(State(test.app_state()), test.session.clone())
            .await
            .into_response();
        let categories: Vec<FeeCategoryDto> = body_json(resp).await;
        assert!(categories.is_empty());

        Ok(())
    }

    /// Expect 404 for an unknown ID
    #[tokio::test]
    async fn returns_not_found() -> Result<(), TestError> {
        let test = TestBuilder::new().with_dashboard_tables().build().await?;
        login_user(&test, "manager").await?;

        let resp = update_fee_category(
            State(test.app_state()),
            test.session.clone(),
            Path(99),
            Json(UpdateFeeCategoryDto {
                name: Some("Renamed".to_string()),
                ..Default::default()
            }),
        )
        .await
        .into_response();

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        Ok(())
    }
}

mod monthly_fees {
    use super::*;

    fn march() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
    }

    /// Expect the created fee to be stored against the first day of its month
    #[tokio::test]
    async fn creates_and_lists_fee_for_month() -> Result<(), TestError> {
        let test = TestBuilder::new().with_dashboard_tables().build().await?;
        login_user(&test, "manager").await?;
        let category = test.fee().insert_mock_fee_category("Maintenance").await?;

        let resp = create_monthly_fee(
            State(test.app_state()),
            test.session.clone(),
            Json(CreateMonthlyFeeDto {
                month: "2025-03-17".to_string(),
                fee_category_id: category.id,
                amount: "2500.00".to_string(),
            }),
        )
        .await
        .into_response();

        assert_eq!(resp.status(), StatusCode::CREATED);
        let fee: MonthlyFeeDto = body_json(resp).await;
        assert_eq!(fee.month, march());
        assert_eq!(fee.amount, Decimal::new(2500, 0));

        let resp = list_monthly_fees(
            State(test.app_state()),
            test.session.clone(),
            Query(MonthQuery {
                month: "2025-03".to_string(),
            }),
        )
        .await
        .into_response();

        assert_eq!(resp.status(), StatusCode::OK);
        let fees: Vec<MonthlyFeeDto> = body_json(resp).await;
        assert_eq!(fees.len(), 1);
        assert_eq!(fees[0].id, fee.id);

        Ok(())
    }

    /// Expect 404 when the fee category does not exist
    #[tokio::test]
    async fn rejects_unknown_category() -> Result<(), TestError> {
        let test = TestBuilder::new().with_dashboard_tables().build().await?;
        login_user(&test, "manager").await?;

        let resp = create_monthly_fee(
            State(test.app_state()),
            test.session.clone(),
            Json(CreateMonthlyFeeDto {
                month: "2025-03".to_string(),
                fee_category_id: 99,
                amount: "2500".to_string(),
            }),
        )
        .await
        .into_response();

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        Ok(())
    }

    /// Expect 400 for a negative amount
    #[tokio::test]
    async fn rejects_negative_amount() -> Result<(), TestError> {
        let test = TestBuilder::new().with_dashboard_tables().build().await?;
        login_user(&test, "manager").await?;
        let category = test.fee().insert_mock_fee_category("Maintenance").await?;

        let resp = create_monthly_fee(
            State(test.app_state()),
            test.session.clone(),
            Json(CreateMonthlyFeeDto {
                month: "2025-03".to_string(),
                fee_category_id: category.id,
                amount: "-10".to_string(),
            }),
        )
        .await
        .into_response();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        Ok(())
    }

    /// Expect 400 for a malformed month query
    #[tokio::test]
    async fn rejects_malformed_month() -> Result<(), TestError> {
        let test = TestBuilder::new().with_dashboard_tables().build().await?;
        login_user(&test, "manager").await?;

        let resp = list_monthly_fees(
            State(test.app_state()),
            test.session.clone(),
            Query(MonthQuery {
                month: "March".to_string(),
            }),
        )
        .await
        .into_response();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        Ok(())
    }

    /// Expect the amount to change and 404 for an unknown fee
    #[tokio::test]
    async fn updates_amount() -> Result<(), TestError> {
        let test = TestBuilder::new().with_dashboard_tables().build().await?;
        login_user(&test, "manager").await?;
        let category = test.fee().insert_mock_fee_category("Maintenance").await?;
        let fee = test
            .fee()
            .insert_mock_monthly_fee(category.id, march(), Decimal::new(2500, 0))
            .await?;

        let resp = update_monthly_fee(
            State(test.app_state()),
            test.session.clone(),
            Path(fee.id),
            Json(UpdateMonthlyFeeDto {
                amount: Some("2750.50".to_string()),
            }),
        )
        .await
        .into_response();

        assert_eq!(resp.status(), StatusCode::OK);
        let updated: MonthlyFeeDto = body_json(resp).await;
        assert_eq!(updated.amount, Decimal::new(275050, 2));

        let resp = update_monthly_fee(
            State(test.app_state()),
            test.session.clone(),
            Path(fee.id + 1),
            Json(UpdateMonthlyFeeDto {
                amount: Some("1".to_string()),
            }),
        )
        .await
        .into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        Ok(())
    }
}
