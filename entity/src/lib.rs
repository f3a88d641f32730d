//! SeaORM entity models for the moverboard database schema.
//!
//! Each module defines one table: cargo items, movers, the join table linking
//! loaded items to movers, and the append-only activity log. The `quest_state`
//! module holds the string-backed active enum shared by the mover state column
//! and the activity log action column.

pub mod activity_log;
pub mod item;
pub mod mover;
pub mod mover_item;
pub mod prelude;
pub mod quest_state;
