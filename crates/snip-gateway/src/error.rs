use crate::model::ErrorResponse;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use snip_engine::EngineError;
use tracing::error;

pub type Result<T> = std::result::Result<T, ApiError>;

/// Request-boundary error translation.
///
/// Validation and tenant/key failures answer with the status/message
/// pairs of the original service; engine and store faults collapse into
/// an opaque internal error after being logged.
#[derive(Debug)]
pub enum ApiError {
    /// Shorten request without a matching (tenant, key) pair.
    ApiKeyNotFound,
    /// Shorten request without a usable `uri` parameter.
    MissingUri,
    /// Resolve request for an unconfigured tenant.
    UnknownApplication,
    /// Resolve request with an empty identifier.
    MissingShortCode,
    /// Identifier has no mapping for this tenant.
    CodeNotFound,
    /// Engine or store fault; details stay in the logs.
    Internal(EngineError),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::CodeNotFound => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> &'static str {
        match self {
            ApiError::ApiKeyNotFound => "API key not found!",
            ApiError::MissingUri => "Please provide an uri= GET parameter!",
            ApiError::UnknownApplication => "Application identifier not found!",
            ApiError::MissingShortCode => "Please provide a short code!",
            ApiError::CodeNotFound => "Short code not found!",
            ApiError::Internal(_) => "Internal server error!",
        }
    }
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        match err {
            // The engine re-checks the uri it was handed; report it the
            // same way as a missing parameter.
            EngineError::InvalidUri(_) => ApiError::MissingUri,
            other => ApiError::Internal(other),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(ref err) = self {
            error!(error = %err, "request failed");
        }

        let body = Json(ErrorResponse {
            error: self.message().to_string(),
        });
        (self.status(), body).into_response()
    }
}
