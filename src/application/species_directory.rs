// Species directory trait - external lookup used to enrich new fish
use crate::domain::species::{HeartbeatStatus, SpeciesDetails};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CollaboratorError {
    #[error("unable to query fishbase: {0}")]
    Request(String),

    #[error("unable to decode fishbase response: {0}")]
    Decode(String),

    #[error("{0}")]
    NotFound(String),
}

#[async_trait]
pub trait SpeciesDirectory: Send + Sync {
    /// Current reachability of the directory
    async fn get_heartbeat(&self) -> Result<HeartbeatStatus, CollaboratorError>;

    /// Species and ecosystem information for a scientific name
    async fn get_details(&self, genus: &str, species: &str) -> Result<SpeciesDetails, CollaboratorError>;
}
