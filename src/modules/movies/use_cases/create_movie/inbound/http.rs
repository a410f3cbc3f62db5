use axum::{Json, body::Bytes, extract::State, response::IntoResponse};

use crate::modules::movies::adapters::inbound::http_responses::{invalid_body, store_failure};
use crate::modules::movies::core::movie::MovieDraft;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>, body: Bytes) -> impl IntoResponse {
    let draft = match MovieDraft::from_json(&body) {
        Ok(draft) => draft,
        Err(error) => return invalid_body(error),
    };

    match state.movies.insert(draft).await {
        Ok(movie) => {
            tracing::info!(id = %movie.id, "movie created");
            Json(movie).into_response()
        }
        Err(error) => store_failure(error),
    }
}
