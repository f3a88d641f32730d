use sea_orm::DatabaseConnection;

use crate::{
    data::item::ItemRepository,
    error::AppError,
    model::item::{CreateItemParams, Item},
};

/// Pass-through CRUD over the item store. No business rules beyond the
/// field validation performed at the HTTP boundary.
pub struct ItemService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ItemService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new item.
    pub async fn create(&self, params: CreateItemParams) -> Result<Item, AppError> {
        let repo = ItemRepository::new(self.db);

        Ok(repo.create(params).await?)
    }

    /// Gets all items.
    pub async fn get_all(&self) -> Result<Vec<Item>, AppError> {
        let repo = ItemRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Gets an item by ID, returning `None` rather than an error when absent.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Item>, AppError> {
        let repo = ItemRepository::new(self.db);

        Ok(repo.get_by_id(id).await?)
    }
}
