use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    error::AppError,
    model::{
        api::ErrorDto,
        item::{CreateItemDto, CreateItemParams, Item, ItemDto},
    },
    service::item::ItemService,
    state::AppState,
};

/// Tag for grouping item endpoints in OpenAPI documentation
pub static ITEM_TAG: &str = "items";

/// Create a new item.
///
/// Validates that a non-empty name and a weight of at least 0.1 were
/// provided, then stores the item. Items are immutable after creation.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Item creation data (name and weight)
///
/// # Returns
/// - `201 Created` - Successfully created item
/// - `400 Bad Request` - Missing or invalid name/weight
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/items",
    tag = ITEM_TAG,
    request_body = CreateItemDto,
    responses(
        (status = 201, description = "Successfully created item", body = ItemDto),
        (status = 400, description = "Missing or invalid field", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_item(
    State(state): State<AppState>,
    Json(payload): Json<CreateItemDto>,
) -> Result<impl IntoResponse, AppError> {
    let (Some(name), Some(weight)) = (payload.name, payload.weight) else {
        return Err(AppError::BadRequest(
            "Name and weight are required".to_string(),
        ));
    };

    let name = name.trim().to_string();
    if name.is_empty() {
        return Err(AppError::BadRequest("Item name is required".to_string()));
    }
    if weight < 0.1 {
        return Err(AppError::BadRequest(
            "Weight must be at least 0.1".to_string(),
        ));
    }

    let service = ItemService::new(&state.db);

    let item = service.create(CreateItemParams { name, weight }).await?;

    Ok((StatusCode::CREATED, Json(item.into_dto())))
}

/// Get all items.
///
/// # Returns
/// - `200 OK` - List of all items
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/items",
    tag = ITEM_TAG,
    responses(
        (status = 200, description = "List of all items", body = Vec<ItemDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_items(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = ItemService::new(&state.db);

    let items = service.get_all().await?;

    Ok((
        StatusCode::OK,
        Json(items.into_iter().map(Item::into_dto).collect::<Vec<_>>()),
    ))
}

/// Get an item by ID.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Item ID to fetch
///
/// # Returns
/// - `200 OK` - The item
/// - `404 Not Found` - No item with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/items/{id}",
    tag = ITEM_TAG,
    params(
        ("id" = i32, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "The item", body = ItemDto),
        (status = 404, description = "Item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_item_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = ItemService::new(&state.db);

    let item = service.get_by_id(id).await?;

    match item {
        Some(item) => Ok((StatusCode::OK, Json(item.into_dto()))),
        None => Err(AppError::NotFound("Item not found".to_string())),
    }
}
