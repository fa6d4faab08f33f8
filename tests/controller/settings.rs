//! Tests for the building settings endpoints.

use serde_json::Value;
use strata::{
    model::settings::{BuildingSettingsDto, UpdateBuildingSettingsDto},
    server::controller::settings::{get_settings, update_settings},
};

use super::*;

fn settings(building_name: &str) -> UpdateBuildingSettingsDto {
    UpdateBuildingSettingsDto {
        building_name: building_name.to_string(),
        address: "12 Rainbow Street".to_string(),
        city: Some("Amman".to_string()),
        governorate: None,
        postal_code: None,
        phone_number: Some("0790001122".to_string()),
        email: Some("office@example.com".to_string()),
        manager_name: None,
        total_floors: None,
        units_per_floor: None,
        additional_info: None,
    }
}

/// Expect null before settings are first saved
#[tokio::test]
async fn returns_null_when_unset() -> Result<(), TestError> {
    let test = TestBuilder::new().with_dashboard_tables().build().await?;
    login_user(&test, "manager").await?;

    let resp = get_settings(State(test.app_state()), test.session.clone())
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = body_json(resp).await;
    assert!(body.is_null());

    Ok(())
}

/// Expect a second save to replace the single settings row
#[tokio::test]
async fn saves_and_replaces_settings() -> Result<(), TestError> {
    let test = TestBuilder::new().with_dashboard_tables().build().await?;
    login_user(&test, "manager").await?;

    let resp = update_settings(
        State(test.app_state()),
        test.session.clone(),
        Json(settings("Cedar Tower")),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let saved: BuildingSettingsDto = body_json(resp).await;
    assert_eq!(saved.total_floors, 15);
    assert_eq!(saved.units_per_floor, 4);

    let resp = update_settings(
        State(test.app_state()),
        test.session.clone(),
        Json(settings("Olive Court")),
    )
    .await
    .into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = get_settings(State(test.app_state()), test.session.clone())
        .await
        .into_response();
    let body: Option<BuildingSettingsDto> = body_json(resp).await;
    assert_eq!(body.map(|s| s.building_name).as_deref(), Some("Olive Court"));

    let rows = {
        use sea_orm::EntityTrait;
        entity::prelude::BuildingSettings::find().all(&test.db).await?
    };
    assert_eq!(rows.len(), 1);

    Ok(())
}

/// Expect 400 for a blank address
#[tokio::test]
async fn rejects_missing_address() -> Result<(), TestError> {
    let test = TestBuilder::new().with_dashboard_tables().build().await?;
    login_user(&test, "manager").await?;

    let mut changes = settings("Cedar Tower");
    changes.address = String::new();

    let resp = update_settings(State(test.app_state()), test.session.clone(), Json(changes))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 400 for zero floors
#[tokio::test]
async fn rejects_zero_floors() -> Result<(), TestError> {
    let test = TestBuilder::new().with_dashboard_tables().build().await?;
    login_user(&test, "manager").await?;

    let mut changes = settings("Cedar Tower");
    changes.total_floors = Some(0);

    let resp = update_settings(State(test.app_state()), test.session.clone(), Json(changes))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
