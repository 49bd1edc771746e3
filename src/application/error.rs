// Errors returned by the service facade
use crate::application::repository::RepositoryError;
use crate::application::species_directory::CollaboratorError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("invalid request: {0}")]
    Validation(String),

    #[error("{context}: {source}")]
    Repository {
        context: &'static str,
        source: RepositoryError,
    },

    #[error("{context}: {source}")]
    Collaborator {
        context: &'static str,
        source: CollaboratorError,
    },
}

impl ServiceError {
    pub fn repository(context: &'static str) -> impl FnOnce(RepositoryError) -> Self {
        move |source| ServiceError::Repository { context, source }
    }

    pub fn collaborator(context: &'static str) -> impl FnOnce(CollaboratorError) -> Self {
        move |source| ServiceError::Collaborator { context, source }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ServiceError::Repository {
                source: RepositoryError::NotFound { .. },
                ..
            }
        )
    }
}
