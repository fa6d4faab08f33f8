use serde_json::Value;
use strata::{model::user::UserDto, server::controller::auth::me};

use super::*;

/// Expect the logged in user's details
#[tokio::test]
async fn returns_logged_in_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_dashboard_tables().build().await?;
    let user = login_user(&test, "resident-open-id").await?;

    let resp = me(State(test.app_state()), test.session.clone())
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Option<UserDto> = body_json(resp).await;
    assert_eq!(body.map(|u| u.id), Some(user.id));

    Ok(())
}

/// Expect null when nobody is logged in
#[tokio::test]
async fn returns_null_without_session() -> Result<(), TestError> {
    let test = TestBuilder::new().with_dashboard_tables().build().await?;

    let resp = me(State(test.app_state()), test.session.clone())
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = body_json(resp).await;
    assert!(body.is_null());

    Ok(())
}

/// Expect null and a cleared session when the session's user no longer exists
#[tokio::test]
async fn returns_null_for_deleted_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_dashboard_tables().build().await?;
    test.session
        .insert(
            strata::server::model::session::user::SESSION_USER_ID_KEY,
            strata::server::model::session::user::SessionUserId("42".to_string()),
        )
        .await?;

    let resp = me(State(test.app_state()), test.session.clone())
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = body_json(resp).await;
    assert!(body.is_null());
    assert!(test.session.is_empty().await);

    Ok(())
}
