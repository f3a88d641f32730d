use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Quest lifecycle rule violations raised by the mover service.
///
/// Each failure mode is a distinct variant so the HTTP layer can dispatch on
/// kind instead of matching on message text. Messages are stable and safe to
/// return to clients.
#[derive(Error, Debug, PartialEq)]
pub enum QuestError {
    /// The referenced mover does not exist.
    ///
    /// Results in a 404 Not Found response.
    #[error("Mover not found")]
    MoverNotFound,

    /// The referenced item does not exist.
    ///
    /// Results in a 404 Not Found response.
    #[error("Item not found")]
    ItemNotFound,

    /// A load was attempted while the mover is on a mission.
    ///
    /// Results in a 400 Bad Request response.
    #[error("Cannot load items while on a mission")]
    LoadWhileOnMission,

    /// The item is already in the mover's loaded list.
    ///
    /// Results in a 400 Bad Request response.
    #[error("Item is already loaded on this mover")]
    AlreadyLoaded,

    /// Loading the item would push the mover past its weight limit.
    ///
    /// Results in a 400 Bad Request response.
    #[error("Weight limit exceeded. Current: {current}, Item: {item_weight}, Limit: {limit}")]
    CapacityExceeded {
        /// Combined weight of the items already loaded.
        current: f64,
        /// Weight of the item that was rejected.
        item_weight: f64,
        /// The mover's weight limit.
        limit: f64,
    },

    /// Start-mission was attempted while already on a mission.
    ///
    /// Results in a 400 Bad Request response.
    #[error("Mover is already on a mission")]
    AlreadyOnMission,

    /// Start-mission was attempted with no items loaded.
    ///
    /// Results in a 400 Bad Request response.
    #[error("Cannot start a mission with no items loaded")]
    NoItemsLoaded,

    /// End-mission was attempted while not on a mission.
    ///
    /// Results in a 400 Bad Request response.
    #[error("Mover is not on a mission")]
    NotOnMission,
}

/// Converts quest errors into HTTP responses.
///
/// Missing entities map to 404 Not Found; every state machine and capacity
/// violation maps to 400 Bad Request. The error message becomes the response
/// body's `error` field.
impl IntoResponse for QuestError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::MoverNotFound | Self::ItemNotFound => StatusCode::NOT_FOUND,
            Self::LoadWhileOnMission
            | Self::AlreadyLoaded
            | Self::CapacityExceeded { .. }
            | Self::AlreadyOnMission
            | Self::NoItemsLoaded
            | Self::NotOnMission => StatusCode::BAD_REQUEST,
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
