use axum::{
    body::Body,
    http::{Request, Response},
};
use http_body_util::BodyExt;
use std::sync::Arc;

use crate::modules::movies::adapters::outbound::movie_store_in_memory::InMemoryMovieStore;
use crate::modules::movies::core::movie::seed_movies;
use crate::shell::state::AppState;

pub fn make_test_state() -> AppState {
    AppState {
        movies: Arc::new(InMemoryMovieStore::with_movies(seed_movies())),
    }
}

pub fn make_offline_store_state() -> AppState {
    let mut store = InMemoryMovieStore::with_movies(seed_movies());
    store.toggle_offline();
    AppState {
        movies: Arc::new(store),
    }
}

pub fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}
