//! # Domain Layer
//!
//! The domain layer contains the core business rules of the forum.
//! It is independent of any external frameworks or infrastructure concerns.
//!
//! ## Structure
//!
//! - **entities**: Immutable value objects (AddThread, DetailComment, ...)
//!   validated eagerly at construction
//! - Repository traits define data access contracts, implemented in the
//!   infrastructure layer (dependency inversion)

pub mod entities;

pub use entities::*;
