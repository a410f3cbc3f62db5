use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
    response::IntoResponse,
};

use crate::modules::movies::adapters::inbound::http_responses::{
    invalid_body, movie_not_found, store_failure,
};
use crate::modules::movies::core::movie::MovieDraft;
use crate::shell::state::AppState;

// The body is decoded before the store is touched, so a malformed update
// never loses the existing movie. An unknown id wins over a malformed body.
pub async fn handle(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> impl IntoResponse {
    let draft = match MovieDraft::from_json(&body) {
        Ok(draft) => draft,
        Err(error) => {
            return match state.movies.find(&id).await {
                Ok(Some(_)) => invalid_body(error),
                Ok(None) => movie_not_found(),
                Err(store_error) => store_failure(store_error),
            };
        }
    };

    match state.movies.replace(&id, draft).await {
        Ok(Some(movie)) => {
            tracing::info!(%id, "movie updated");
            Json(movie).into_response()
        }
        Ok(None) => movie_not_found(),
        Err(error) => store_failure(error),
    }
}
