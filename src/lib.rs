//! # Forum Server Library
//!
//! A discussion-forum backend exposing threads and comments over HTTP,
//! backed by PostgreSQL.
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture principles:
//!
//! - **Domain Layer**: Entities (immutable, validated at construction) and
//!   repository traits
//! - **Application Layer**: Use-case orchestrators sequencing validation,
//!   authorization guards and repository calls
//! - **Infrastructure Layer**: PostgreSQL implementations of the repository
//!   traits
//! - **Presentation Layer**: HTTP routes, handlers and auth middleware
//!
//! ## Module Structure
//!
//! ```text
//! forum_server/
//! +-- config/         Configuration management
//! +-- domain/         Entities and repository traits
//! +-- application/    Use cases
//! +-- infrastructure/ Database pool and repositories
//! +-- presentation/   HTTP routes, handlers, middleware
//! +-- shared/         Common utilities (errors, id generation)
//! ```

// Configuration module
pub mod config;

// Domain layer - Core business rules
pub mod domain;

// Application layer - Use cases
pub mod application;

// Infrastructure layer - External implementations
pub mod infrastructure;

// Presentation layer - HTTP handlers and middleware
pub mod presentation;

// Shared utilities
pub mod shared;

// Application startup and state management
pub mod startup;

// Telemetry and observability
pub mod telemetry;
