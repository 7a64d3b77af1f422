//! Service layer fronting the backend API.
//!
//! Each backend resource is reached through an `async_trait` trait so page models can be
//! driven by in-process fakes, and through one concrete implementation that proxies to
//! the backend with `BackendClient`. Implementations borrow the shared client and the
//! current session's bearer token for the duration of a single request.

pub mod auth;
pub mod destination;
pub mod guide;
pub mod trip;
pub mod trip_registration;

#[cfg(test)]
mod test;
