use axum::http::StatusCode;
use httpmock::prelude::*;
use serde_json::json;
use test_utils::{
    builder::TestBuilder,
    factory::user::{auth_response, UserFactory},
};

use super::backend_client;
use crate::{
    model::auth::{LoginDto, RegisterDto},
    server::{
        error::AppError,
        middleware::session::AuthSession,
        service::auth::{AuthService, SessionAuthService},
    },
};

/// Tests a successful login.
///
/// Expected: token and user stored in the session
#[tokio::test]
async fn login_stores_credentials() {
    let mut test = TestBuilder::new().with_backend().with_session().build().await;
    let backend = backend_client(&mut test).await;
    let (server, session) = test.backend_and_session().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/auth/login")
                .json_body(json!({ "username": "ann", "password": "secret1" }));
            then.status(200).json_body(auth_response(
                "token-ann",
                UserFactory::new().username("ann").names("Ann", "Lee").build(),
            ));
        })
        .await;

    let service = SessionAuthService::new(&backend, session);
    let user = service
        .login(&LoginDto {
            username: "ann".to_string(),
            password: "secret1".to_string(),
        })
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(user.token, "token-ann");
    assert_eq!(user.user.full_name(), "Ann Lee");
    assert!(service.is_authenticated().await.unwrap());

    let stored = AuthSession::new(session).get_user().await.unwrap();
    assert_eq!(stored, Some(user));
}

/// Tests a login rejected by the backend.
///
/// Expected: Err(ApiError::Status 401) and the session stays anonymous
#[tokio::test]
async fn rejected_login_leaves_session_empty() {
    let mut test = TestBuilder::new().with_backend().with_session().build().await;
    let backend = backend_client(&mut test).await;
    let (server, session) = test.backend_and_session().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/auth/login");
            then.status(401)
                .json_body(json!({ "message": "Invalid credentials" }));
        })
        .await;

    let service = SessionAuthService::new(&backend, session);
    let result = service.login(&LoginDto::default()).await;

    match result {
        Err(AppError::ApiErr(err)) => assert_eq!(err.status(), Some(StatusCode::UNAUTHORIZED)),
        other => panic!("expected backend error, got {:?}", other.map(|u| u.token)),
    }
    assert!(!service.is_authenticated().await.unwrap());
}

/// Tests registration sends camelCase fields and signs the new account in.
///
/// Expected: Ok, session authenticated
#[tokio::test]
async fn register_signs_in() {
    let mut test = TestBuilder::new().with_backend().with_session().build().await;
    let backend = backend_client(&mut test).await;
    let (server, session) = test.backend_and_session().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/api/auth/register").json_body(json!({
                "username": "bob",
                "email": "bob@example.com",
                "password": "secret1",
                "firstName": "Bob",
                "lastName": "Stone",
                "phone": null,
                "address": null,
            }));
            then.status(200)
                .json_body(auth_response("token-bob", UserFactory::new().username("bob").build()));
        })
        .await;

    let service = SessionAuthService::new(&backend, session);
    service
        .register(&RegisterDto {
            username: "bob".to_string(),
            email: "bob@example.com".to_string(),
            password: "secret1".to_string(),
            first_name: "Bob".to_string(),
            last_name: "Stone".to_string(),
            phone: None,
            address: None,
        })
        .await
        .unwrap();

    mock.assert_async().await;
    assert!(service.is_authenticated().await.unwrap());
}

/// Tests that logout clears stored credentials.
///
/// Expected: not authenticated afterwards
#[tokio::test]
async fn logout_clears_session() {
    let mut test = TestBuilder::new().with_backend().with_session().build().await;
    let backend = backend_client(&mut test).await;
    let (server, session) = test.backend_and_session().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/auth/login");
            then.status(200)
                .json_body(auth_response("token", UserFactory::new().build()));
        })
        .await;

    let service = SessionAuthService::new(&backend, session);
    service.login(&LoginDto::default()).await.unwrap();
    service.logout().await.unwrap();

    assert!(!service.is_authenticated().await.unwrap());
}
