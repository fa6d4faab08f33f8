use strata::{model::api::SuccessDto, server::controller::auth::logout};

use super::*;

/// Expect success and an empty session after logging out
#[tokio::test]
async fn clears_session_of_logged_in_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_dashboard_tables().build().await?;
    login_user(&test, "resident-open-id").await?;

    let resp = logout(test.session.clone()).await.into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: SuccessDto = body_json(resp).await;
    assert!(body.success);
    assert!(test.session.is_empty().await);

    Ok(())
}

/// Expect success even when nobody is logged in
#[tokio::test]
async fn succeeds_without_session() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let resp = logout(test.session.clone()).await.into_response();

    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}
