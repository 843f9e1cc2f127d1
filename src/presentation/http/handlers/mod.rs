//! HTTP Handlers
//!
//! Request handlers for all HTTP endpoints.

pub mod comment;
pub mod health;
pub mod thread;
