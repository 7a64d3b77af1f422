//! Server side of the application.
//!
//! Every page is rendered here: handlers read the visitor's session, call the backend API
//! that owns all data, and render HTML. Nothing is persisted locally apart from the
//! in-memory session store.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP handlers: session, service calls, rendering
//! - **Page Layer** (`page/`) - Page models whose logic runs against service traits
//! - **Service Layer** (`service/`) - One trait and one backend proxy per resource
//! - **Backend** (`backend`) - Shared HTTP client for the backend API
//! - **Model Layer** (`model/`) - Form models and their validation
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Session wrapper and authentication guard
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state
//! - **Startup** (`startup`) - Logger, HTTP client and session layer setup
//! - **Router** (`router`) - Axum route configuration
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to the matching controller
//! 2. **Middleware** loads the session and, where required, the signed-in user
//! 3. **Controller** validates form input and calls a service or page model
//! 4. **Service** forwards the call to the backend with the visitor's bearer token
//! 5. **Controller** renders the page, re-renders a form with an error, or redirects

pub mod backend;
pub mod config;
pub mod controller;
pub mod error;
pub mod middleware;
pub mod model;
pub mod page;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
