//! Tests for the report endpoints.

use chrono::NaiveDate;
use entity::sea_orm_active_enums::ApartmentStatus;
use rust_decimal::Decimal;
use strata::{
    model::{
        api::MonthQuery,
        apartment::ApartmentDto,
        report::{BuildingOverviewDto, CollectionRateDto, MonthlyRevenueDto},
    },
    server::{
        controller::report::{collection_rate, monthly_revenue, outstanding_payments, overview},
        util::time::current_month,
    },
};

use super::*;

fn june() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
}

fn june_query() -> Query<MonthQuery> {
    Query(MonthQuery {
        month: "2025-06".to_string(),
    })
}

/// Expect the sum and count of the month's payments
#[tokio::test]
async fn sums_monthly_revenue() -> Result<(), TestError> {
    let test = TestBuilder::new().with_dashboard_tables().build().await?;
    login_user(&test, "manager").await?;
    let apartments = test.apartment().insert_building(1, 3).await?;
    let payments = test.payment();
    payments
        .insert_mock_payment(apartments[0].id, june(), Decimal::new(250000, 2))
        .await?;
    payments
        .insert_mock_payment(apartments[1].id, june(), Decimal::new(125050, 2))
        .await?;

    let resp = monthly_revenue(State(test.app_state()), test.session.clone(), june_query())
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: MonthlyRevenueDto = body_json(resp).await;
    assert_eq!(body.total, Decimal::new(375050, 2));
    assert_eq!(body.count, 2);

    Ok(())
}

/// Expect 66.67 when 10000 of an expected 15000 has been collected
#[tokio::test]
async fn computes_collection_rate() -> Result<(), TestError> {
    let test = TestBuilder::new().with_dashboard_tables().build().await?;
    login_user(&test, "manager").await?;
    let apartments = test.apartment().insert_building(2, 3).await?;
    let category = test.fee().insert_mock_fee_category("Maintenance").await?;
    test.fee()
        .insert_mock_monthly_fee(category.id, june(), Decimal::new(2500, 0))
        .await?;
    for apartment in apartments.iter().take(4) {
        test.payment()
            .insert_mock_payment(apartment.id, june(), Decimal::new(2500, 0))
            .await?;
    }

    let resp = collection_rate(State(test.app_state()), test.session.clone(), june_query())
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: CollectionRateDto = body_json(resp).await;
    assert_eq!(body.expected, Decimal::new(15000, 0));
    assert_eq!(body.collected, Decimal::new(10000, 0));
    assert_eq!(body.rate, Decimal::new(6667, 2));

    Ok(())
}

/// Expect apartments without a payment for the month, in building order
#[tokio::test]
async fn lists_outstanding_apartments() -> Result<(), TestError> {
    let test = TestBuilder::new().with_dashboard_tables().build().await?;
    login_user(&test, "manager").await?;
    let apartments = test.apartment().insert_building(2, 2).await?;
    test.payment()
        .insert_mock_payment(apartments[1].id, june(), Decimal::new(2500, 0))
        .await?;
    // A payment for another month does not settle June
    test.payment()
        .insert_mock_payment(
            apartments[2].id,
            NaiveDate::from_ymd_opt(2025, 5, 1).unwrap(),
            Decimal::new(2500, 0),
        )
        .await?;

    let resp = outstanding_payments(State(test.app_state()), test.session.clone(), june_query())
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Vec<ApartmentDto> = body_json(resp).await;
    let ids: Vec<i32> = body.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![apartments[0].id, apartments[2].id, apartments[3].id]);

    Ok(())
}

/// Expect current month counts across apartment statuses and payments
#[tokio::test]
async fn summarizes_building() -> Result<(), TestError> {
    let test = TestBuilder::new().with_dashboard_tables().build().await?;
    login_user(&test, "manager").await?;
    let fixtures = test.apartment();
    let paid = fixtures.insert_mock_apartment(1, 1).await?;
    fixtures.insert_mock_apartment(1, 2).await?;
    fixtures
        .insert_mock_apartment_with_status(1, 3, ApartmentStatus::Vacant)
        .await?;
    let category = test.fee().insert_mock_fee_category("Maintenance").await?;
    test.fee()
        .insert_mock_monthly_fee(category.id, current_month(), Decimal::new(1000, 0))
        .await?;
    test.payment()
        .insert_mock_payment(paid.id, current_month(), Decimal::new(1000, 0))
        .await?;

    let resp = overview(State(test.app_state()), test.session.clone())
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: BuildingOverviewDto = body_json(resp).await;
    assert_eq!(body.month, current_month());
    assert_eq!(body.total_apartments, 3);
    assert_eq!(body.active_apartments, 2);
    assert_eq!(body.vacant_apartments, 1);
    assert_eq!(body.monthly_revenue, Decimal::new(1000, 0));
    assert_eq!(body.collection_count, 1);
    assert_eq!(body.collection_rate, Decimal::new(3333, 2));
    assert_eq!(body.outstanding_count, 2);

    Ok(())
}

/// Expect zeroed reports while the database is unavailable
#[tokio::test]
async fn returns_zeros_without_database() -> Result<(), TestError> {
    let test = TestBuilder::new().with_dashboard_tables().build().await?;
    login_user(&test, "manager").await?;

    let resp = collection_rate(
        State(test.unavailable_app_state()),
        test.session.clone(),
        june_query(),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: CollectionRateDto = body_json(resp).await;
    assert_eq!(body.collected, Decimal::ZERO);
    assert_eq!(body.rate, Decimal::ZERO);

    Ok(())
}
