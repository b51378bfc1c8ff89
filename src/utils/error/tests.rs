//! Tests for error handling

use super::types::MarketError;
use actix_web::ResponseError;
use actix_web::http::StatusCode;

#[test]
fn test_error_creation() {
    let error = MarketError::forbidden("agent cannot delete users");
    assert!(matches!(error, MarketError::Forbidden(_)));

    let error = MarketError::bad_request("Missing parameter");
    assert!(matches!(error, MarketError::BadRequest(_)));
}

#[test]
fn test_validation_helper() {
    let error = MarketError::validation("Invalid input");
    assert!(matches!(error, MarketError::Validation(msg) if msg == "Invalid input"));
}

#[test]
fn test_not_found_helper() {
    let error = MarketError::not_found("listing 42");
    assert!(matches!(error, MarketError::NotFound(msg) if msg == "listing 42"));
}

#[test]
fn test_error_display() {
    let error = MarketError::config("port must be non-zero");
    assert_eq!(error.to_string(), "Configuration error: port must be non-zero");
}

#[test]
fn test_status_codes() {
    assert_eq!(
        MarketError::forbidden("x").status_code(),
        StatusCode::FORBIDDEN
    );
    assert_eq!(
        MarketError::validation("x").status_code(),
        StatusCode::BAD_REQUEST
    );
    assert_eq!(
        MarketError::not_found("x").status_code(),
        StatusCode::NOT_FOUND
    );
    assert_eq!(
        MarketError::conflict("x").status_code(),
        StatusCode::CONFLICT
    );
    assert_eq!(
        MarketError::internal("x").status_code(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}

#[test]
fn test_client_error_classification() {
    assert!(MarketError::forbidden("x").is_client_error());
    assert!(MarketError::bad_request("x").is_client_error());
    assert!(!MarketError::internal("x").is_client_error());
    assert!(!MarketError::config("x").is_client_error());
}

#[test]
fn test_from_io_error() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    let error: MarketError = io.into();
    assert!(matches!(error, MarketError::Io(_)));
    assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
}
