use axum::http::header::LOCATION;
use strata::server::{controller::auth::login, model::session::auth::SessionAuthCsrf};
use strata_test_utils::constant::TEST_AUTHORIZE_PATH;

use super::*;

/// Expect 307 redirect to the provider's authorization URL
#[tokio::test]
async fn redirects_to_provider() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let resp = login(State(test.app_state()), test.session.clone())
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);

    let location = resp
        .headers()
        .get(LOCATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();
    let expected_prefix = format!("{}{}", test.server_url(), TEST_AUTHORIZE_PATH);
    assert!(location.starts_with(&expected_prefix), "unexpected location {}", location);
    assert!(location.contains("response_type=code"));

    Ok(())
}

/// Expect the CSRF state in the redirect URL to be stored in the session
#[tokio::test]
async fn stores_csrf_state_in_session() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let resp = login(State(test.app_state()), test.session.clone())
        .await
        .into_response();

    let stored = SessionAuthCsrf::get(&test.session).await;
    assert!(stored.is_ok());

    let location = resp
        .headers()
        .get(LOCATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();
    assert!(location.contains(&format!("state={}", stored.unwrap())));

    Ok(())
}
