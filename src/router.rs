use axum::{
    routing::{get, post, put},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    controller::{
        health::health,
        item::{create_item, get_item_by_id, get_items},
        mover::{
            create_mover, end_mission, get_leaderboard, get_mover_by_id, get_movers, load_item,
            start_mission,
        },
    },
    model::{
        api::{ErrorDto, HealthDto},
        item::{CreateItemDto, ItemDto},
        mover::{CreateMoverDto, LoadItemDto, MoverDto},
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Moverboard API",
        description = "Fleet movers carrying cargo items through a resting → loading → on-mission lifecycle."
    ),
    paths(
        crate::controller::item::create_item,
        crate::controller::item::get_items,
        crate::controller::item::get_item_by_id,
        crate::controller::mover::create_mover,
        crate::controller::mover::get_movers,
        crate::controller::mover::get_mover_by_id,
        crate::controller::mover::load_item,
        crate::controller::mover::start_mission,
        crate::controller::mover::end_mission,
        crate::controller::mover::get_leaderboard,
        crate::controller::health::health,
    ),
    components(schemas(
        CreateItemDto,
        ItemDto,
        CreateMoverDto,
        LoadItemDto,
        MoverDto,
        ErrorDto,
        HealthDto
    )),
    tags(
        (name = "items", description = "Cargo item endpoints"),
        (name = "movers", description = "Mover lifecycle and leaderboard endpoints"),
        (name = "health", description = "Service health check")
    )
)]
struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/items", post(create_item).get(get_items))
        .route("/api/items/{id}", get(get_item_by_id))
        .route("/api/movers", post(create_mover).get(get_movers))
        .route("/api/movers/leaderboard", get(get_leaderboard))
        .route("/api/movers/{id}", get(get_mover_by_id))
        .route("/api/movers/{id}/load", post(load_item))
        .route("/api/movers/{id}/start-mission", put(start_mission))
        .route("/api/movers/{id}/end-mission", put(end_mission))
        .route("/health", get(health))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
