//! Domain models and API data transfer objects.
//!
//! Each entity module defines the wire-facing DTOs (serialized as camelCase
//! JSON, documented via utoipa schemas), the domain model the service layer
//! works with, and the parameter types used for create operations. Entity
//! models from the database are converted to domain models at the repository
//! boundary and to DTOs at the controller boundary.

pub mod api;
pub mod item;
pub mod mover;
