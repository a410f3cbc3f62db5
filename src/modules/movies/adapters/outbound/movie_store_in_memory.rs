use crate::modules::movies::adapters::outbound::movie_store::{MovieStore, StoreError};
use crate::modules::movies::core::movie::{Movie, MovieDraft};
use rand::Rng;
use tokio::sync::RwLock;

const ID_UPPER_BOUND: u32 = 1_000_000;

#[derive(Default)]
pub struct InMemoryMovieStore {
    movies: RwLock<Vec<Movie>>,
    is_offline: bool,
}

impl InMemoryMovieStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_movies(movies: Vec<Movie>) -> Self {
        Self {
            movies: RwLock::new(movies),
            is_offline: false,
        }
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), StoreError> {
        if self.is_offline {
            return Err(StoreError::Unavailable("Movie store offline".into()));
        }
        Ok(())
    }
}

// Draws until the id is free. Only called with the write lock held.
fn generate_id<R: Rng>(rng: &mut R, movies: &[Movie]) -> String {
    loop {
        let candidate = rng.random_range(0..ID_UPPER_BOUND).to_string();
        if !movies.iter().any(|movie| movie.id == candidate) {
            return candidate;
        }
    }
}

#[async_trait::async_trait]
impl MovieStore for InMemoryMovieStore {
    async fn list(&self) -> Result<Vec<Movie>, StoreError> {
        self.ensure_online()?;
        Ok(self.movies.read().await.clone())
    }

    async fn find(&self, id: &str) -> Result<Option<Movie>, StoreError> {
        self.ensure_online()?;
        let guard = self.movies.read().await;
        Ok(guard.iter().find(|movie| movie.id == id).cloned())
    }

    async fn insert(&self, draft: MovieDraft) -> Result<Movie, StoreError> {
        self.ensure_online()?;
        let mut guard = self.movies.write().await;
        let movie = draft.into_movie(generate_id(&mut rand::rng(), &guard));
        guard.push(movie.clone());
        Ok(movie)
    }

    async fn replace(&self, id: &str, draft: MovieDraft) -> Result<Option<Movie>, StoreError> {
        self.ensure_online()?;
        let mut guard = self.movies.write().await;
        let Some(index) = guard.iter().position(|movie| movie.id == id) else {
            return Ok(None);
        };
        guard.remove(index);
        let movie = draft.into_movie(id);
        guard.push(movie.clone());
        Ok(Some(movie))
    }

    async fn remove(&self, id: &str) -> Result<Vec<Movie>, StoreError> {
        self.ensure_online()?;
        let mut guard = self.movies.write().await;
        if let Some(index) = guard.iter().position(|movie| movie.id == id) {
            guard.remove(index);
        }
        Ok(guard.clone())
    }
}
