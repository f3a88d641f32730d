use crate::{data::item::ItemRepository, model::item::CreateItemParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_by_id;
