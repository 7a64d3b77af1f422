//! Tripboard Test Utils
//!
//! Provides shared testing utilities for the tripboard front-end. The crate offers a
//! builder for test contexts holding a mock backend API and an in-memory session, plus
//! factories producing the JSON payloads the backend would return.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the mock backend and session
//! - **factory**: Builders for backend JSON payloads with unique ids
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn lists_destinations() {
//!     let mut test = TestBuilder::new().with_backend().build().await;
//!     let backend = test.backend().await;
//!
//!     backend.mock(|when, then| {
//!         when.path("/api/destinations");
//!         then.status(200).json_body(factory::destination::create_many(2));
//!     });
//!     // Point the application's backend client at `test.backend_url().await`...
//! }
//! ```

pub mod builder;
pub mod context;
pub mod factory;
