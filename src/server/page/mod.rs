//! Page models.
//!
//! A page model runs the logic behind one page for a single request and produces the
//! state its view renders. Models receive their collaborators as trait objects so the
//! same flow runs against the backend in production and against fakes in tests.

pub mod api_test;
pub mod logout;

#[cfg(test)]
mod test;
