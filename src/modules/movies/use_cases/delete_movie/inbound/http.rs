use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};

use crate::modules::movies::adapters::inbound::http_responses::store_failure;
use crate::shell::state::AppState;

/// Responds with the movies left after the removal, whether or not `id` matched.
pub async fn handle(State(state): State<AppState>, Path(id): Path<String>) -> impl IntoResponse {
    match state.movies.remove(&id).await {
        Ok(remaining) => Json(remaining).into_response(),
        Err(error) => store_failure(error),
    }
}
