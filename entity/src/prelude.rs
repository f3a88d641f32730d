pub use super::activity_log::Entity as ActivityLog;
pub use super::item::Entity as Item;
pub use super::mover::Entity as Mover;
pub use super::mover_item::Entity as MoverItem;
pub use super::quest_state::QuestState;
