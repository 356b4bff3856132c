use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::error;

use crate::users::password::HashError;

/// Persistence-layer failure. Driver detail stays attached as the error
/// source for logging; callers only ever see the normalized message.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("error on repository")]
    Sql(#[from] sqlx::Error),
    #[error("error on repository")]
    Hash(#[from] HashError),
}

/// Orchestration-layer outcome for anything that is not a success value.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    /// Point lookup or update matched no row.
    #[error("no content")]
    NoContent,
    /// Unexpected failure, wrapped store errors included.
    #[error("error on service")]
    Internal,
}

impl From<StoreError> for ServiceError {
    fn from(e: StoreError) -> Self {
        error!(error = ?e, "store operation failed");
        ServiceError::Internal
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        match self {
            ServiceError::NoContent => StatusCode::NO_CONTENT.into_response(),
            ServiceError::Internal => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        }
    }
}
