use std::sync::Arc;

use httpmock::MockServer;
use time::Duration;
use tower_sessions::{Expiry, MemoryStore, Session};
use url::Url;

/// Test context containing a mock backend API and a session.
///
/// Both are created lazily on first access and persist for the lifetime of the context.
#[derive(Default)]
pub struct TestContext {
    /// Mock HTTP server standing in for the backend API.
    pub backend: Option<MockServer>,

    /// Session backed by an in-memory store.
    pub session: Option<Session>,
}

impl TestContext {
    /// Creates a new empty test context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets or starts the mock backend server.
    pub async fn backend(&mut self) -> &MockServer {
        match self.backend {
            Some(ref backend) => backend,
            None => {
                let backend = MockServer::start_async().await;
                &*self.backend.insert(backend)
            }
        }
    }

    /// Base URL of the mock backend, with the trailing slash the application expects.
    pub async fn backend_url(&mut self) -> Url {
        let base = self.backend().await.base_url();
        Url::parse(&format!("{}/", base)).expect("mock server URL is valid")
    }

    /// Gets or creates the test session.
    ///
    /// The session uses the same 60 minute idle expiry as the application.
    ///
    /// # Example
    /// ```rust,ignore
    /// let mut test = TestContext::new();
    /// let session = test.session();
    /// session.insert("key", 123).await?;
    /// ```
    pub fn session(&mut self) -> &Session {
        match self.session {
            Some(ref session) => session,
            None => {
                let session = Session::new(
                    None,
                    Arc::new(MemoryStore::default()),
                    Some(Expiry::OnInactivity(Duration::minutes(60))),
                );
                &*self.session.insert(session)
            }
        }
    }

    /// Gets or creates both the mock backend and the session.
    ///
    /// Avoids borrow checker issues when calling `backend()` and `session()` separately.
    pub async fn backend_and_session(&mut self) -> (&MockServer, &Session) {
        self.backend().await;
        self.session();

        (
            self.backend.as_ref().expect("backend initialized above"),
            self.session.as_ref().expect("session initialized above"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn backend_url_ends_with_slash() {
        let mut test = TestContext::new();
        let url = test.backend_url().await;

        assert!(url.as_str().ends_with('/'));
    }

    #[tokio::test]
    async fn session_is_reused() {
        let mut test = TestContext::new();
        test.session().insert("key", 5).await.unwrap();

        let value: Option<i32> = test.session().get("key").await.unwrap();
        assert_eq!(value, Some(5));
    }
}
