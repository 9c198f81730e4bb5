use crate::errors::repository::RepositoryError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Repository error: {0}")]
    Repo(#[from] RepositoryError),

    #[error("{0}")]
    NotFound(String),

    #[error("Product ID mismatch: path {path}, body {body}")]
    IdMismatch { path: i32, body: i32 },

    #[error("Internal error: {0}")]
    Internal(String),
}
