mod common;

use axum::{
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use dealer_portal_api::{
    dto::{accounts::SetEnabledRequest, auth::LoginRequest},
    error::AppError,
    routes::create_app,
    services::{account_service, auth_service},
};
use serde_json::Value;
use tower::ServiceExt;

fn login_request(username: &str, password: &str) -> LoginRequest {
    LoginRequest {
        username: username.into(),
        password: password.into(),
    }
}

#[tokio::test]
async fn dealer_logs_in_and_reads_profile() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let dealer = common::register_dealer(&state, "acme", "acmepass", Some("0902")).await?;

    let login = auth_service::login(&state, login_request("acme", "acmepass"))
        .await?
        .into_data()
        .expect("login");
    assert_eq!(login.role, "dealer");
    assert!(login.token.starts_with("Bearer "));

    let app = create_app(state);
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/auth/me")
                .header(header::AUTHORIZATION, &login.token)
                .body(Body::empty())?,
        )
        .await?;
    assert_eq!(response.status(), StatusCode::OK);

    let body = to_bytes(response.into_body(), usize::MAX).await?;
    let json: Value = serde_json::from_slice(&body)?;
    assert_eq!(json["data"]["role"], "dealer");
    assert_eq!(json["data"]["dealer"]["id"], dealer.account_id);
    assert_eq!(json["data"]["dealer"]["phone"], "0902");
    assert!(json["data"].get("admin").is_none());
    Ok(())
}

#[tokio::test]
async fn bad_credentials_are_rejected_alike() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    common::register_dealer(&state, "acme", "acmepass", None).await?;

    let wrong_password = auth_service::login(&state, login_request("acme", "nope")).await;
    let unknown_user = auth_service::login(&state, login_request("ghost", "acmepass")).await;

    for result in [wrong_password, unknown_user] {
        match result {
            Err(AppError::BadRequest(message)) => {
                assert_eq!(message, "Invalid username or password")
            }
            _ => panic!("expected a bad request"),
        }
    }
    Ok(())
}

#[tokio::test]
async fn disabled_account_is_forbidden() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let admin = common::bootstrap_admin(&state, "root", "rootpass").await?;
    let dealer = common::register_dealer(&state, "acme", "acmepass", None).await?;

    account_service::set_account_enabled(
        &state,
        &admin,
        dealer.account_id,
        SetEnabledRequest { enabled: false },
    )
    .await?;

    let result = auth_service::login(&state, login_request("acme", "acmepass")).await;
    assert!(matches!(result, Err(AppError::Forbidden)));
    Ok(())
}

#[tokio::test]
async fn routes_require_a_valid_token() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let app = create_app(state);

    let missing = app
        .clone()
        .oneshot(Request::builder().uri("/api/cart").body(Body::empty())?)
        .await?;
    assert_eq!(missing.status(), StatusCode::BAD_REQUEST);

    let forged = app
        .oneshot(
            Request::builder()
                .uri("/api/cart")
                .header(header::AUTHORIZATION, "Bearer not-a-token")
                .body(Body::empty())?,
        )
        .await?;
    assert_eq!(forged.status(), StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn disabling_revokes_issued_tokens() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let admin = common::bootstrap_admin(&state, "root", "rootpass").await?;
    let dealer = common::register_dealer(&state, "acme", "acmepass", None).await?;

    let login = auth_service::login(&state, login_request("acme", "acmepass"))
        .await?
        .into_data()
        .expect("login");

    let app = create_app(state.clone());
    let cart = |token: String| {
        Request::builder()
            .uri("/api/cart")
            .header(header::AUTHORIZATION, token)
            .body(Body::empty())
    };

    let before = app.clone().oneshot(cart(login.token.clone())?).await?;
    assert_eq!(before.status(), StatusCode::OK);

    account_service::set_account_enabled(
        &state,
        &admin,
        dealer.account_id,
        SetEnabledRequest { enabled: false },
    )
    .await?;

    let after = app.oneshot(cart(login.token)?).await?;
    assert_eq!(after.status(), StatusCode::FORBIDDEN);
    Ok(())
}

#[tokio::test]
async fn login_trims_the_username() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    common::register_dealer(&state, " bob ", "bobpass1", None).await?;

    let login = auth_service::login(&state, login_request(" bob ", "bobpass1"))
        .await?
        .into_data()
        .expect("login");
    assert_eq!(login.role, "dealer");
    Ok(())
}
