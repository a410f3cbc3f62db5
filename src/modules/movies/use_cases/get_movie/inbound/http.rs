use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};

use crate::modules::movies::adapters::inbound::http_responses::{movie_not_found, store_failure};
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>, Path(id): Path<String>) -> impl IntoResponse {
    match state.movies.find(&id).await {
        Ok(Some(movie)) => Json(movie).into_response(),
        Ok(None) => movie_not_found(),
        Err(error) => store_failure(error),
    }
}
