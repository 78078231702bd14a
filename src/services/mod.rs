//! Service layer sitting between the routes and the sorting core.

use thiserror::Error;

use crate::forms::FormError;
use crate::repository::errors::RepositoryError;

pub mod api;
pub mod main;
pub mod sort;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),

    #[error("form error: {0}")]
    Form(#[from] FormError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
