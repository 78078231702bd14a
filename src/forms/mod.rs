//! Form definitions backing the sort editor routes.

use thiserror::Error;
use validator::ValidationErrors;

pub mod main;
pub mod sort;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),
}
