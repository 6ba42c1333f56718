use axum::Json;
use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use mergington::data::ErrorResponse;
use mergington::errors::RegistryError;
use mergington::log;

/// Errors a handler can return; every one becomes a 400 with a `detail` body.
///
/// Registry errors are deliberately not split across status codes, clients
/// tell them apart by the message.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Registry(#[from] RegistryError),
    #[error("{}", .0.body_text())]
    Path(#[from] PathRejection),
    #[error("{}", .0.body_text())]
    Query(#[from] QueryRejection),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Registry(_) => StatusCode::BAD_REQUEST,
            AppError::Path(rejection) => rejection.status(),
            AppError::Query(rejection) => rejection.status(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = self.to_string();
        log::debug!("Rejecting request with {}: {}", status, detail);
        (status, Json(ErrorResponse { detail })).into_response()
    }
}
