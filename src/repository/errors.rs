use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Entity not found")]
    NotFound,

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Source error: {0}")]
    SourceError(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

impl From<csv::Error> for RepositoryError {
    fn from(err: csv::Error) -> Self {
        if err.is_io_error() {
            RepositoryError::SourceError(format!("Failed to read clients: {err}"))
        } else {
            RepositoryError::ValidationError(format!("Malformed clients file: {err}"))
        }
    }
}

impl From<std::io::Error> for RepositoryError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => RepositoryError::NotFound,
            _ => RepositoryError::SourceError(err.to_string()),
        }
    }
}
