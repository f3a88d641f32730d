//! Business logic layer orchestrating repositories.
//!
//! The mover service owns the quest state machine, the capacity-checked
//! loading rule, and the activity log; the item service is a pass-through
//! over the item repository.

pub mod item;
pub mod mover;
