use crate::views;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use petclinic_application::error::AppError;
use petclinic_domain::error::DomainError;
use thiserror::Error;

/// 处理器错误：渲染为对应状态码的错误页面
#[derive(Debug, Error)]
pub enum WebError {
    #[error("{0} not found")]
    NotFound(String),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<AppError> for WebError {
    fn from(err: AppError) -> Self {
        if err.is_not_found() {
            return WebError::NotFound(err.to_string());
        }
        let message = err.to_string();
        match &err {
            AppError::Domain(DomainError::VersionConflict { .. }) => WebError::Conflict(message),
            AppError::Validation { .. } | AppError::Domain(DomainError::InvalidValue { .. }) => {
                WebError::BadRequest(message)
            }
            _ => WebError::Internal(message),
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            WebError::NotFound(_) => (StatusCode::NOT_FOUND, "The requested page was not found."),
            WebError::Conflict(_) => (
                StatusCode::CONFLICT,
                "The record was modified by someone else. Reload it and try again.",
            ),
            WebError::BadRequest(_) => (StatusCode::BAD_REQUEST, "The request could not be processed."),
            WebError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Something happened..."),
        };

        match status {
            StatusCode::INTERNAL_SERVER_ERROR => tracing::error!(error = %self, "request failed"),
            StatusCode::CONFLICT => tracing::warn!(error = %self, "request conflicted"),
            _ => tracing::debug!(error = %self, "request rejected"),
        }

        (status, views::error_page(status, message)).into_response()
    }
}
