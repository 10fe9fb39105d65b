use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::dto::{ErrorResponse, MessageResponse, ServerErrorResponse};

/// Failures raised by the document store layer.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Invalid document id: {0}")]
    InvalidId(#[from] uuid::Error),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{context}: {source}")]
    Store {
        context: &'static str,
        #[source]
        source: StoreError,
    },

    #[error("Not found: {0}")]
    NotFound(&'static str),

    #[error("Bad request: {0}")]
    BadRequest(&'static str),

    #[error("Invalid JSON body: {0}")]
    InvalidBody(#[from] JsonRejection),

    #[error("Unauthorized: {0}")]
    Unauthorized(&'static str),

    #[error("Server error: {0}")]
    Server(String),
}

impl AppError {
    /// Wraps a store failure with the message shown to the caller.
    pub fn store(context: &'static str) -> impl FnOnce(StoreError) -> AppError {
        move |source| AppError::Store { context, source }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Store { context, ref source } => {
                tracing::error!("{}: {:?}", context, source);
                let body = ErrorResponse {
                    error: context.to_string(),
                };
                (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
            }
            AppError::NotFound(msg) => {
                let body = ErrorResponse {
                    error: msg.to_string(),
                };
                (StatusCode::NOT_FOUND, Json(body)).into_response()
            }
            AppError::BadRequest(msg) => {
                let body = ErrorResponse {
                    error: msg.to_string(),
                };
                (StatusCode::BAD_REQUEST, Json(body)).into_response()
            }
            AppError::InvalidBody(rejection) => {
                let body = ErrorResponse {
                    error: rejection.body_text(),
                };
                (rejection.status(), Json(body)).into_response()
            }
            AppError::Unauthorized(msg) => {
                (StatusCode::UNAUTHORIZED, Json(MessageResponse::new(msg))).into_response()
            }
            AppError::Server(detail) => {
                tracing::error!("Server error: {}", detail);
                let body = ServerErrorResponse {
                    message: "Error en el servidor".to_string(),
                    error: detail,
                };
                (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
