//! Factories for backend API payloads.
//!
//! Each factory produces the `serde_json::Value` the backend would send for one record,
//! with unique ids and sensible defaults that can be overridden through builder methods.

pub mod destination;
pub mod guide;
pub mod helpers;
pub mod trip;
pub mod trip_registration;
pub mod user;
