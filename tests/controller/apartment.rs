//! Tests for the apartment endpoints.

use strata::{
    model::{
        api::SuccessDto,
        apartment::{ApartmentDto, CreateApartmentDto, SearchQuery, UpdateApartmentDto},
    },
    server::controller::apartment::{
        create_apartment, delete_apartment, get_apartment, list_apartments,
        list_apartments_by_floor, search_apartments, update_apartment,
    },
};

use super::*;

fn new_apartment(floor_number: i32, unit_number: i32) -> CreateApartmentDto {
    CreateApartmentDto {
        floor_number,
        unit_number,
        owner_name: "Layla Hassan".to_string(),
        owner_email: Some("layla@example.com".to_string()),
        owner_phone: Some("0790001122".to_string()),
        status: Default::default(),
        notes: None,
    }
}

mod list_apartments {
    use super::*;

    /// Expect apartments ordered by floor then unit
    #[tokio::test]
    async fn returns_apartments_in_building_order() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_dashboard_tables()
            .with_mock_apartment(2, 1)
            .with_mock_apartment(1, 2)
            .with_mock_apartment(1, 1)
            .build()
            .await?;
        login_user(&test, "manager").await?;

        let resp = list_apartments(State(test.app_state()), test.session.clone())
            .await
            .into_response();

        assert_eq!(resp.status(), StatusCode::OK);
        let apartments: Vec<ApartmentDto> = body_json(resp).await;
        let order: Vec<(i32, i32)> = apartments
            .iter()
            .map(|a| (a.floor_number, a.unit_number))
            .collect();
        assert_eq!(order, vec![(1, 1), (1, 2), (2, 1)]);

        Ok(())
    }

    /// Expect 401 unauthorized without a logged in user
    #[tokio::test]
    async fn rejects_anonymous_request() -> Result<(), TestError> {
        let test = TestBuilder::new().with_dashboard_tables().build().await?;

        let resp = list_apartments(State(test.app_state()), test.session.clone())
            .await
            .into_response();

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        Ok(())
    }

    /// Expect an empty list while the database is unavailable
    #[tokio::test]
    async fn returns_empty_without_database() -> Result<(), TestError> {
        let test = TestBuilder::new().with_dashboard_tables().build().await?;
        login_user(&test, "manager").await?;

        let resp = list_apartments(State(test.unavailable_app_state()), test.session.clone())
            .await
            .into_response();

        assert_eq!(resp.status(), StatusCode::OK);
        let apartments: Vec<ApartmentDto> = body_json(resp).await;
        assert!(apartments.is_empty());

        Ok(())
    }
}

mod get_apartment {
    use super::*;

    /// Expect the apartment with the requested ID
    #[tokio::test]
    async fn returns_apartment() -> Result<(), TestError> {
        let test = TestBuilder::new().with_dashboard_tables().build().await?;
        login_user(&test, "manager").await?;
        let apartment = test.apartment().insert_mock_apartment(3, 2).await?;

        let resp = get_apartment(
            State(test.app_state()),
            test.session.clone(),
            Path(apartment.id),
        )
        .await
        .into_response();

        assert_eq!(resp.status(), StatusCode::OK);
        let body: ApartmentDto = body_json(resp).await;
        assert_eq!(body.owner_name, "Owner 3-2");

        Ok(())
    }

    /// Expect 404 for an unknown ID
    #[tokio::test]
    async fn returns_not_found() -> Result<(), TestError> {
        let test = TestBuilder::new().with_dashboard_tables().build().await?;
        login_user(&test, "manager").await?;

        let resp = get_apartment(State(test.app_state()), test.session.clone(), Path(99))
            .await
            .into_response();

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        Ok(())
    }
}

mod list_apartments_by_floor {
    use super::*;

    /// Expect only the apartments on the requested floor
    #[tokio::test]
    async fn filters_by_floor() -> Result<(), TestError> {
        let test = TestBuilder::new().with_dashboard_tables().build().await?;
        login_user(&test, "manager").await?;
        test.apartment().insert_building(3, 4).await?;

        let resp =
            list_apartments_by_floor(State(test.app_state()), test.session.clone(), Path(2))
                .await
                .into_response();

        assert_eq!(resp.status(), StatusCode::OK);
        let apartments: Vec<ApartmentDto> = body_json(resp).await;
        assert_eq!(apartments.len(), 4);
        assert!(apartments.iter().all(|a| a.floor_number == 2));

        Ok(())
    }

    /// Expect 400 for a floor above the top floor
    #[tokio::test]
    async fn rejects_floor_out_of_range() -> Result<(), TestError> {
        let test = TestBuilder::new().with_dashboard_tables().build().await?;
        login_user(&test, "manager").await?;

        let resp =
            list_apartments_by_floor(State(test.app_state()), test.session.clone(), Path(16))
                .await
                .into_response();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        Ok(())
    }
}

mod search_apartments {
    use super::*;

    /// Expect matches on owner name, email or phone
    #[tokio::test]
    async fn matches_owner_details() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_dashboard_tables()
            .with_mock_apartment(1, 1)
            .with_mock_apartment(4, 3)
            .build()
            .await?;
        login_user(&test, "manager").await?;

        let resp = search_apartments(
            State(test.app_state()),
            test.session.clone(),
            Query(SearchQuery {
                term: "owner43@".to_string(),
            }),
        )
        .await
        .into_response();

        assert_eq!(resp.status(), StatusCode::OK);
        let apartments: Vec<ApartmentDto> = body_json(resp).await;
        assert_eq!(apartments.len(), 1);
        assert_eq!(apartments[0].floor_number, 4);

        Ok(())
    }

    /// Expect 400 for a blank search term
    #[tokio::test]
    async fn rejects_blank_term() -> Result<(), TestError> {
        let test = TestBuilder::new().with_dashboard_tables().build().await?;
        login_user(&test, "manager").await?;

        let resp = search_apartments(
            State(test.app_state()),
            test.session.clone(),
            Query(SearchQuery {
                term: "   ".to_string(),
            }),
        )
        .await
        .into_response();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        Ok(())
    }
}

mod create_apartment {
    use super::*;

    /// Expect 201 created with the stored apartment
    #[tokio::test]
    async fn creates_apartment() -> Result<(), TestError> {
        let test = TestBuilder::new().with_dashboard_tables().build().await?;
        login_user(&test, "manager").await?;

        let resp = create_apartment(
            State(test.app_state()),
            test.session.clone(),
            Json(new_apartment(5, 3)),
        )
        .await
        .into_response();

        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: ApartmentDto = body_json(resp).await;
        assert_eq!((body.floor_number, body.unit_number), (5, 3));
        assert_eq!(body.owner_name, "Layla Hassan");

        Ok(())
    }

    /// Expect 400 for a unit number beyond the units on a floor
    #[tokio::test]
    async fn rejects_unit_out_of_range() -> Result<(), TestError> {
        let test = TestBuilder::new().with_dashboard_tables().build().await?;
        login_user(&test, "manager").await?;

        let resp = create_apartment(
            State(test.app_state()),
            test.session.clone(),
            Json(new_apartment(1, 5)),
        )
        .await
        .into_response();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        Ok(())
    }

    /// Expect 400 for a malformed email address
    #[tokio::test]
    async fn rejects_invalid_email() -> Result<(), TestError> {
        let test = TestBuilder::new().with_dashboard_tables().build().await?;
        login_user(&test, "manager").await?;

        let mut apartment = new_apartment(1, 1);
        apartment.owner_email = Some("not-an-email".to_string());

        let resp = create_apartment(State(test.app_state()), test.session.clone(), Json(apartment))
            .await
            .into_response();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        Ok(())
    }

    /// Expect 503 for a write while the database is unavailable
    #[tokio::test]
    async fn fails_without_database() -> Result<(), TestError> {
        let test = TestBuilder::new().with_dashboard_tables().build().await?;
        login_user(&test, "manager").await?;

        let resp = create_apartment(
            State(test.unavailable_app_state()),
            test.session.clone(),
            Json(new_apartment(1, 1)),
        )
        .await
        .into_response();

        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);

        Ok(())
    }
}

mod update_apartment {
    use super::*;

    /// Expect only the provided fields to change
    #[tokio::test]
    async fn applies_partial_update() -> Result<(), TestError> {
        let test = TestBuilder::new().with_dashboard_tables().build().await?;
        login_user(&test, "manager").await?;
        let apartment = test.apartment().insert_mock_apartment(2, 2).await?;

        let changes = UpdateApartmentDto {
            owner_name: Some("New Owner".to_string()),
            ..Default::default()
        };

        let resp = update_apartment(
            State(test.app_state()),
            test.session.clone(),
            Path(apartment.id),
            Json(changes),
        )
        .await
        .into_response();

        assert_eq!(resp.status(), StatusCode::OK);
        let body: ApartmentDto = body_json(resp).await;
        assert_eq!(body.owner_name, "New Owner");
        assert_eq!(body.owner_email, apartment.owner_email);
        assert_eq!(body.floor_number, 2);

        Ok(())
    }

    /// Expect 404 rather than a silent no-op for an unknown ID
    #[tokio::test]
    async fn returns_not_found() -> Result<(), TestError> {
        let test = TestBuilder::new().with_dashboard_tables().build().await?;
        login_user(&test, "manager").await?;

        let changes = UpdateApartmentDto {
            owner_name: Some("New Owner".to_string()),
            ..Default::default()
        };

        let resp = update_apartment(
            State(test.app_state()),
            test.session.clone(),
            Path(99),
            Json(changes),
        )
        .await
        .into_response();

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        Ok(())
    }
}

mod delete_apartment {
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    use super::*;

    /// Expect success and the apartment gone afterwards
    #[tokio::test]
    async fn deletes_apartment() -> Result<(), TestError> {
        let test = TestBuilder::new().with_dashboard_tables().build().await?;
        login_user(&test, "manager").await?;
        let apartment = test.apartment().insert_mock_apartment(1, 1).await?;

        let resp = delete_apartment(
            State(test.app_state()),
            test.session.clone(),
            Path(apartment.id),
        )
        .await
        .into_response();

        assert_eq!(resp.status(), StatusCode::OK);
        let body: SuccessDto = body_json(resp).await;
        assert!(body.success);

        let resp = get_apartment(
            State(test.app_state()),
            test.session.clone(),
            Path(apartment.id),
        )
        .await
        .into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        Ok(())
    }

    /// Expect 404 for an unknown ID
    #[tokio::test]
    async fn returns_not_found() -> Result<(), TestError> {
        let test = TestBuilder::new().with_dashboard_tables().build().await?;
        login_user(&test, "manager").await?;

        let resp = delete_apartment(State(test.app_state()), test.session.clone(), Path(99))
            .await
            .into_response();

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        Ok(())
    }

    /// Expect 409 conflict while payments reference the apartment
    #[tokio::test]
    async fn refuses_apartment_with_payments() -> Result<(), TestError> {
        let test = TestBuilder::new().with_dashboard_tables().build().await?;
        login_user(&test, "manager").await?;
        let apartment = test.apartment().insert_mock_apartment(1, 1).await?;
        let month = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        test.payment()
            .insert_mock_payment(apartment.id, month, Decimal::new(250000, 2))
            .await?;

        let resp = delete_apartment(
            State(test.app_state()),
            test.session.clone(),
            Path(apartment.id),
        )
        .await
        .into_response();

        assert_eq!(resp.status(), StatusCode::CONFLICT);

        Ok(())
    }
}
