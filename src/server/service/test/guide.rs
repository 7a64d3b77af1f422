use axum::http::StatusCode;
use httpmock::prelude::*;
use test_utils::{builder::TestBuilder, factory};

use super::backend_client;
use crate::{
    model::guide::GuideRequestDto,
    server::service::guide::{GuideApi, GuideService},
};

/// Tests listing guides.
///
/// Expected: Ok with every guide returned by the backend
#[tokio::test]
async fn gets_all_guides() {
    let mut test = TestBuilder::new().with_backend().build().await;
    let backend = backend_client(&mut test).await;
    let mock = test
        .backend()
        .await
        .mock_async(|when, then| {
            when.method(GET).path("/api/guides");
            then.status(200).json_body(factory::guide::create_many(3));
        })
        .await;

    let guides = GuideApi::new(&backend, None).get_all_guides().await.unwrap();

    mock.assert_async().await;
    assert_eq!(guides.len(), 3);
}

/// Tests fetching a single guide by id.
///
/// Expected: Ok with matching id and full name
#[tokio::test]
async fn gets_guide_by_id() {
    let mut test = TestBuilder::new().with_backend().build().await;
    let backend = backend_client(&mut test).await;
    test.backend()
        .await
        .mock_async(|when, then| {
            when.method(GET).path("/api/guides/6");
            then.status(200).json_body(
                factory::guide::GuideFactory::new()
                    .id(6)
                    .names("Ana", "Silva")
                    .build(),
            );
        })
        .await;

    let guide = GuideApi::new(&backend, None).get_guide(6).await.unwrap();

    assert_eq!(guide.id, 6);
    assert_eq!(guide.full_name(), "Ana Silva");
}

/// Tests that a missing guide keeps the backend's 404.
///
/// Expected: Err with status 404
#[tokio::test]
async fn missing_guide_is_not_found() {
    let mut test = TestBuilder::new().with_backend().build().await;
    let backend = backend_client(&mut test).await;
    test.backend()
        .await
        .mock_async(|when, then| {
            when.method(GET).path("/api/guides/404");
            then.status(404);
        })
        .await;

    let err = GuideApi::new(&backend, None)
        .get_guide(404)
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
}

/// Tests that an update is sent as camelCase JSON with the token.
///
/// Expected: mock matching path, header and body is hit once
#[tokio::test]
async fn updates_guide_with_token() {
    let mut test = TestBuilder::new().with_backend().build().await;
    let backend = backend_client(&mut test).await;
    let mock = test
        .backend()
        .await
        .mock_async(|when, then| {
            when.method(PUT)
                .path("/api/guides/6")
                .header("Authorization", "Bearer admin-token")
                .json_body(serde_json::json!({
                    "firstName": "Ana",
                    "lastName": "Silva",
                    "email": "ana@example.com",
                    "phone": null,
                    "bio": null,
                    "yearsOfExperience": 7,
                }));
            then.status(204);
        })
        .await;

    let request = GuideRequestDto {
        first_name: "Ana".to_string(),
        last_name: "Silva".to_string(),
        email: "ana@example.com".to_string(),
        phone: None,
        bio: None,
        years_of_experience: 7,
    };
    GuideApi::new(&backend, Some("admin-token"))
        .update_guide(6, &request)
        .await
        .unwrap();

    mock.assert_async().await;
}
