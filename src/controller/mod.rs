//! HTTP request handlers.
//!
//! Controllers validate request shapes at the boundary, convert DTOs to
//! parameter types, call the service layer, and convert domain models back
//! to DTOs. Every handler carries a `utoipa::path` annotation feeding the
//! OpenAPI document served through Swagger UI.

pub mod health;
pub mod item;
pub mod mover;
