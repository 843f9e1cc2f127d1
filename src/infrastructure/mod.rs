//! Infrastructure Layer
//!
//! Contains implementations for external services:
//! - Database pool and migrations (PostgreSQL)
//! - Repository implementations of the domain contracts

pub mod database;
pub mod repositories;
