use crate::{data::mover::MoverRepository, model::mover::CreateMoverParams};
use entity::quest_state::QuestState;
use sea_orm::{ColumnTrait, DbErr, EntityTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod append_item;
mod get_loaded_items;
