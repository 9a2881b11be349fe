use actix_web::{ResponseError, http::StatusCode};

use super::super::helpers::error_chain_fmt;

#[derive(thiserror::Error)]
pub enum ProfileUpdateError {
    #[error("{0}")]
    ValidationError(String),
    #[error(transparent)]
    UpstreamError(#[from] anyhow::Error),
}

impl std::fmt::Debug for ProfileUpdateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for ProfileUpdateError {
    fn status_code(&self) -> StatusCode {
        match self {
            ProfileUpdateError::ValidationError(_) => StatusCode::BAD_REQUEST,
            ProfileUpdateError::UpstreamError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
