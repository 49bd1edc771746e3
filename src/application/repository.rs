// Storage port - narrow capability traits per record kind
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("{kind} with id {id} not found")]
    NotFound { kind: &'static str, id: i32 },

    #[error("{0}")]
    Storage(String),
}

/// Persists a new record and returns it as stored, with its id assigned.
#[async_trait]
pub trait Inserter<T>: Send + Sync {
    async fn insert(&self, record: T) -> Result<T, RepositoryError>;
}

/// Returns every stored record. Order is not guaranteed.
#[async_trait]
pub trait Lister<T>: Send + Sync {
    async fn list(&self) -> Result<Vec<T>, RepositoryError>;
}

/// Removes a record and returns the snapshot that was removed.
#[async_trait]
pub trait Deleter<T>: Send + Sync {
    async fn delete(&self, id: i32) -> Result<T, RepositoryError>;
}

/// Anything that can insert, list and delete one record kind.
pub trait Repository<T>: Inserter<T> + Lister<T> + Deleter<T> {}

impl<T, R> Repository<T> for R where R: Inserter<T> + Lister<T> + Deleter<T> {}
