//! clearance-domain: Core access-control domain logic
//!
//! This crate contains the entity model and the authorization predicate:
//! - Users over a closed set of roles, each with its own field set
//! - Resources with a required access level
//! - Validation of names and access levels
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │              clearance-domain               │
//! ├─────────────────────────────────────────────┤
//! │  model/   - Users, roles, resources         │
//! │  error.rs - Validation error taxonomy       │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! Authorization is a derived relation, never stored: a user may access a
//! resource exactly when the user's access level meets the resource's
//! required level. See [`User::can_access`].

pub mod error;
pub mod model;

// Re-export commonly used types at the crate root
pub use error::{DomainError, DomainResult};
pub use model::{Resource, Role, User};
