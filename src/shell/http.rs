use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::modules::movies::use_cases::create_movie::inbound::http as create_http;
use crate::modules::movies::use_cases::delete_movie::inbound::http as delete_http;
use crate::modules::movies::use_cases::get_movie::inbound::http as get_http;
use crate::modules::movies::use_cases::list_movies::inbound::http as list_http;
use crate::modules::movies::use_cases::update_movie::inbound::http as update_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/movies", get(list_http::handle).post(create_http::handle))
        .route(
            "/movies/{id}",
            get(get_http::handle)
                .put(update_http::handle)
                .delete(delete_http::handle),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
