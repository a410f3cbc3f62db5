use crate::modules::movies::adapters::outbound::movie_store::MovieStore;
use crate::modules::movies::adapters::outbound::movie_store_in_memory::InMemoryMovieStore;
use crate::modules::movies::core::movie::seed_movies;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub movies: Arc<dyn MovieStore>,
}

impl AppState {
    /// State backed by an in-memory store holding the two seed movies.
    pub fn seeded() -> Self {
        Self {
            movies: Arc::new(InMemoryMovieStore::with_movies(seed_movies())),
        }
    }
}
