use tracing_test::traced_test;

use super::*;

/// Tests logout on a signed-out session.
///
/// Verifies that `logout()` is never invoked when the session holds no credentials
/// and that a page model is still produced.
///
/// Expected: Ok(LogoutModel { signed_out: false }), zero logout calls
#[tokio::test]
async fn skips_logout_when_not_authenticated() {
    let auth = FakeAuth::new(false);

    let model = LogoutModel::on_get(&auth).await.unwrap();

    assert!(!model.signed_out);
    assert_eq!(auth.logout_calls(), 0);
}

/// Tests logout on an authenticated session.
///
/// Expected: Ok(LogoutModel { signed_out: true }), exactly one logout call
#[tokio::test]
async fn logs_out_authenticated_session_once() {
    let auth = FakeAuth::new(true);

    let model = LogoutModel::on_get(&auth).await.unwrap();

    assert!(model.signed_out);
    assert_eq!(auth.logout_calls(), 1);
    assert!(!auth.is_authenticated().await.unwrap());
}

/// Tests that logging out twice in a row is idempotent.
///
/// The second request sees a signed-out session and must not call `logout()` again.
///
/// Expected: both calls Ok, one logout call in total
#[tokio::test]
async fn second_logout_is_a_no_op() {
    let auth = FakeAuth::new(true);

    let first = LogoutModel::on_get(&auth).await.unwrap();
    let second = LogoutModel::on_get(&auth).await.unwrap();

    assert!(first.signed_out);
    assert!(!second.signed_out);
    assert_eq!(auth.logout_calls(), 1);
}

/// Tests that a failing logout propagates instead of rendering a confirmation.
///
/// Expected: Err(AppError::InternalError)
#[tokio::test]
async fn propagates_logout_failure() {
    let auth = FakeAuth::failing();

    let result = LogoutModel::on_get(&auth).await;

    assert!(matches!(result, Err(AppError::InternalError(_))));
    assert_eq!(auth.logout_calls(), 1);
}

/// Tests that ending a session is logged.
///
/// Expected: info entry for the logout
#[traced_test]
#[tokio::test]
async fn logs_successful_logout() {
    let auth = FakeAuth::new(true);

    LogoutModel::on_get(&auth).await.unwrap();

    assert!(logs_contain("INFO"));
    assert!(logs_contain("User logged out"));
}

/// Tests that nothing is logged when there was no session to end.
///
/// Expected: no logout entry
#[traced_test]
#[tokio::test]
async fn does_not_log_skipped_logout() {
    let auth = FakeAuth::new(false);

    LogoutModel::on_get(&auth).await.unwrap();

    assert!(!logs_contain("User logged out"));
}
