//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories automatically handle foreign key relationships,
//! making tests more concise and maintainable.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let item = factory::item::create_item(&db).await?;
//!     let mover = factory::mover::create_mover(&db).await?;
//!
//!     // Create a mover that already has items loaded
//!     let (mover, items) = factory::helpers::create_loaded_mover(&db, 2).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! use test_utils::factory::mover::MoverFactory;
//!
//! let mover = MoverFactory::new(&db)
//!     .name("Custom Mover")
//!     .weight_limit(5.0)
//!     .missions_completed(3)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `item` - Create cargo item entities
//! - `mover` - Create mover entities
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod helpers;
pub mod item;
pub mod mover;

// Re-export commonly used factory functions for concise usage
pub use item::{create_item, create_item_with_weight};
pub use mover::{create_mover, create_mover_with_limit};
