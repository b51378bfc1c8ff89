//! HTTP response handling for errors

use super::types::MarketError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};

impl ResponseError for MarketError {
    fn status_code(&self) -> StatusCode {
        match self {
            MarketError::Forbidden(_) => StatusCode::FORBIDDEN,
            MarketError::Validation(_) | MarketError::BadRequest(_) => StatusCode::BAD_REQUEST,
            MarketError::NotFound(_) => StatusCode::NOT_FOUND,
            MarketError::Conflict(_) => StatusCode::CONFLICT,
            MarketError::Config(_)
            | MarketError::Serialization(_)
            | MarketError::Yaml(_)
            | MarketError::Io(_)
            | MarketError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let (error_code, message) = match self {
            MarketError::Forbidden(_) => ("FORBIDDEN", self.to_string()),
            MarketError::Validation(_) => ("VALIDATION_ERROR", self.to_string()),
            MarketError::NotFound(_) => ("NOT_FOUND", self.to_string()),
            MarketError::Conflict(_) => ("CONFLICT", self.to_string()),
            MarketError::BadRequest(_) => ("BAD_REQUEST", self.to_string()),
            MarketError::Config(_) => ("CONFIG_ERROR", self.to_string()),
            _ => (
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            ),
        };

        let error_response = ErrorResponse {
            error: ErrorDetail {
                code: error_code.to_string(),
                message,
                timestamp: chrono::Utc::now().timestamp(),
            },
        };

        HttpResponse::build(self.status_code()).json(error_response)
    }
}

/// Standard error response format
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    pub timestamp: i64,
}
