//! Session access and authentication guards used by page handlers.

pub mod auth;
pub mod session;

#[cfg(test)]
mod test;
