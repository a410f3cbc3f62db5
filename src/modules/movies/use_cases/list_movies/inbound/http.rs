use axum::{Json, extract::State, response::IntoResponse};

use crate::modules::movies::adapters::inbound::http_responses::store_failure;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    match state.movies.list().await {
        Ok(movies) => Json(movies).into_response(),
        Err(error) => store_failure(error),
    }
}
