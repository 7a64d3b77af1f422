use test_utils::context::TestContext;

use crate::server::backend::BackendClient;

mod auth;
mod guide;
mod trip;

async fn backend_client(test: &mut TestContext) -> BackendClient {
    BackendClient::new(reqwest::Client::new(), test.backend_url().await)
}
