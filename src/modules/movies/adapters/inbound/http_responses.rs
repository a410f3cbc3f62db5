use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::modules::movies::adapters::outbound::movie_store::StoreError;

pub const MOVIE_NOT_FOUND: &str = "Movie not found";

#[derive(Debug, Serialize)]
pub struct MessageBody {
    pub message: &'static str,
}

// A miss on get or update is reported with 200, not 404.
pub fn movie_not_found() -> Response {
    Json(MessageBody {
        message: MOVIE_NOT_FOUND,
    })
    .into_response()
}

pub fn invalid_body(error: serde_json::Error) -> Response {
    tracing::debug!(%error, "rejected movie body");
    (StatusCode::BAD_REQUEST, error.to_string()).into_response()
}

pub fn store_failure(error: StoreError) -> Response {
    tracing::error!(%error, "movie store failed");
    StatusCode::INTERNAL_SERVER_ERROR.into_response()
}
