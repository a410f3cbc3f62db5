use crate::modules::movies::core::movie::{Movie, MovieDraft};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("movie store unavailable: {0}")]
    Unavailable(String),
}

/// Ordered collection of movies. Mutations keep insertion order, except that
/// a replaced movie moves to the end.
#[async_trait]
pub trait MovieStore: Send + Sync {
    async fn list(&self) -> Result<Vec<Movie>, StoreError>;

    async fn find(&self, id: &str) -> Result<Option<Movie>, StoreError>;

    /// Assigns a fresh id to the draft and appends it.
    async fn insert(&self, draft: MovieDraft) -> Result<Movie, StoreError>;

    /// Removes the first movie with `id` and appends the draft under the same
    /// id. Returns `None` and leaves the store untouched when there is no match.
    async fn replace(&self, id: &str, draft: MovieDraft) -> Result<Option<Movie>, StoreError>;

    /// Removes the first movie with `id`, if any, and returns what remains.
    async fn remove(&self, id: &str) -> Result<Vec<Movie>, StoreError>;
}
