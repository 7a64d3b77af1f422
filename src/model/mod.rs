//! Wire-level data transfer objects shared by the page handlers and the backend client.
//!
//! Every DTO mirrors the JSON shape of the backend API (camelCase field names). Request
//! DTOs are the bodies sent on create/update calls and omit server-assigned fields.

pub mod api;
pub mod auth;
pub mod datetime;
pub mod destination;
pub mod guide;
pub mod trip;
pub mod trip_registration;
pub mod user;
