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
        mover::{CreateMoverDto, CreateMoverParams, LoadItemDto, Mover, MoverDto},
    },
    service::mover::MoverService,
    state::AppState,
};

/// Tag for grouping mover endpoints in OpenAPI documentation
pub static MOVER_TAG: &str = "movers";

/// Create a new mover.
///
/// Validates that a non-empty name and a weight limit of at least 1 were
/// provided. New movers start resting with no items loaded and zero
/// completed missions.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Mover creation data (name and weight limit)
///
/// # Returns
/// - `201 Created` - Successfully created mover
/// - `400 Bad Request` - Missing or invalid name/weight limit
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/movers",
    tag = MOVER_TAG,
    request_body = CreateMoverDto,
    responses(
        (status = 201, description = "Successfully created mover", body = MoverDto),
        (status = 400, description = "Missing or invalid field", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_mover(
    State(state): State<AppState>,
    Json(payload): Json<CreateMoverDto>,
) -> Result<impl IntoResponse, AppError> {
    let (Some(name), Some(weight_limit)) = (payload.name, payload.weight_limit) else {
        return Err(AppError::BadRequest(
            "Name and weightLimit are required".to_string(),
        ));
    };

    let name = name.trim().to_string();
    if name.is_empty() {
        return Err(AppError::BadRequest("Mover name is required".to_string()));
    }
    if weight_limit < 1.0 {
        return Err(AppError::BadRequest(
            "Weight limit must be at least 1".to_string(),
        ));
    }

    let service = MoverService::new(&state.db);

    let mover = service
        .create(CreateMoverParams { name, weight_limit })
        .await?;

    Ok((StatusCode::CREATED, Json(mover.into_dto())))
}

/// Get all movers.
///
/// Returns every mover with its loaded items resolved, in store iteration
/// order.
///
/// # Returns
/// - `200 OK` - List of all movers
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/movers",
    tag = MOVER_TAG,
    responses(
        (status = 200, description = "List of all movers", body = Vec<MoverDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_movers(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = MoverService::new(&state.db);

    let movers = service.get_all().await?;

    Ok((
        StatusCode::OK,
        Json(movers.into_iter().map(Mover::into_dto).collect::<Vec<_>>()),
    ))
}

/// Get a mover by ID.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Mover ID to fetch
///
/// # Returns
/// - `200 OK` - The mover with its items resolved
/// - `404 Not Found` - No mover with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/movers/{id}",
    tag = MOVER_TAG,
    params(
        ("id" = i32, Path, description = "Mover ID")
    ),
    responses(
        (status = 200, description = "The mover", body = MoverDto),
        (status = 404, description = "Mover not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_mover_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = MoverService::new(&state.db);

    let mover = service.get_by_id(id).await?;

    match mover {
        Some(mover) => Ok((StatusCode::OK, Json(mover.into_dto()))),
        None => Err(AppError::NotFound("Mover not found".to_string())),
    }
}

/// Load an item onto a mover.
///
/// Rejected while the mover is on a mission, when the item is already
/// loaded, or when the item's weight would push the mover past its limit.
/// On success the mover enters (or stays in) the loading state and the
/// transition is recorded in the activity log.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Mover ID to load onto
/// - `payload` - Load data (the item ID)
///
/// # Returns
/// - `200 OK` - The updated mover with its items resolved
/// - `400 Bad Request` - Missing itemId, mover on mission, duplicate item, or capacity exceeded
/// - `404 Not Found` - Mover or item not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/movers/{id}/load",
    tag = MOVER_TAG,
    params(
        ("id" = i32, Path, description = "Mover ID")
    ),
    request_body = LoadItemDto,
    responses(
        (status = 200, description = "Item loaded successfully", body = MoverDto),
        (status = 400, description = "Invalid state, duplicate item, or capacity exceeded", body = ErrorDto),
        (status = 404, description = "Mover or item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn load_item(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<LoadItemDto>,
) -> Result<impl IntoResponse, AppError> {
    let Some(item_id) = payload.item_id else {
        return Err(AppError::BadRequest("itemId is required".to_string()));
    };

    let service = MoverService::new(&state.db);

    let mover = service.load_item(id, item_id).await?;

    Ok((StatusCode::OK, Json(mover.into_dto())))
}

/// Start a mission.
///
/// Transitions a loading mover into the on-mission state. Rejected if the
/// mover is already on a mission or has no items loaded.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Mover ID to send on a mission
///
/// # Returns
/// - `200 OK` - The updated mover
/// - `400 Bad Request` - Already on a mission or no items loaded
/// - `404 Not Found` - Mover not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/movers/{id}/start-mission",
    tag = MOVER_TAG,
    params(
        ("id" = i32, Path, description = "Mover ID")
    ),
    responses(
        (status = 200, description = "Mission started", body = MoverDto),
        (status = 400, description = "Already on a mission or no items loaded", body = ErrorDto),
        (status = 404, description = "Mover not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn start_mission(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = MoverService::new(&state.db);

    let mover = service.start_mission(id).await?;

    Ok((StatusCode::OK, Json(mover.into_dto())))
}

/// End a mission.
///
/// Unloads every item reference, returns the mover to the resting state, and
/// increments its completed-mission counter by one. Rejected unless the
/// mover is on a mission.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Mover ID ending its mission
///
/// # Returns
/// - `200 OK` - The updated mover with an empty item list
/// - `400 Bad Request` - Mover is not on a mission
/// - `404 Not Found` - Mover not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/movers/{id}/end-mission",
    tag = MOVER_TAG,
    params(
        ("id" = i32, Path, description = "Mover ID")
    ),
    responses(
        (status = 200, description = "Mission ended", body = MoverDto),
        (status = 400, description = "Mover is not on a mission", body = ErrorDto),
        (status = 404, description = "Mover not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn end_mission(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = MoverService::new(&state.db);

    let mover = service.end_mission(id).await?;

    Ok((StatusCode::OK, Json(mover.into_dto())))
}

/// Get the leaderboard.
///
/// Returns all movers sorted by completed missions descending. Ordering
/// among movers with equal counts is unspecified.
///
/// # Returns
/// - `200 OK` - Movers in leaderboard order
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/movers/leaderboard",
    tag = MOVER_TAG,
    responses(
        (status = 200, description = "Movers sorted by completed missions", body = Vec<MoverDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_leaderboard(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let service = MoverService::new(&state.db);

    let movers = service.leaderboard().await?;

    Ok((
        StatusCode::OK,
        Json(movers.into_iter().map(Mover::into_dto).collect::<Vec<_>>()),
    ))
}
