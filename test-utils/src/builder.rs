use crate::context::TestContext;

/// Builder for creating test contexts.
///
/// Use the builder to opt into a mock backend and/or a session, then call `build()`.
/// Both resources are still created lazily by `TestContext` if a test asks for one
/// that was not requested up front.
///
/// # Example
///
/// ```rust,ignore
/// let mut test = TestBuilder::new()
///     .with_backend()
///     .with_session()
///     .build()
///     .await;
/// let (backend, session) = test.backend_and_session().await;
/// ```
#[derive(Default)]
pub struct TestBuilder {
    backend: bool,
    session: bool,
}

impl TestBuilder {
    /// Creates a new test builder with nothing configured.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a mock backend API server during `build()`.
    pub fn with_backend(mut self) -> Self {
        self.backend = true;
        self
    }

    /// Creates an in-memory session during `build()`.
    pub fn with_session(mut self) -> Self {
        self.session = true;
        self
    }

    /// Builds the test context, eagerly starting the requested resources.
    pub async fn build(self) -> TestContext {
        let mut context = TestContext::new();

        if self.backend {
            context.backend().await;
        }
        if self.session {
            context.session();
        }

        context
    }
}
