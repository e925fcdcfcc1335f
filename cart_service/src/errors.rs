// cart_service/src/errors.rs

use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

use crate::response::{ApiResponse, Status};

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Resource Not Found: {0}")]
  NotFound(String),

  #[error("Bad Request: {0}")]
  BadRequest(String),

  #[error("Unprocessable Entity: {0}")]
  UnprocessableEntity(String),

  #[error("Internal Server Error: {0}")]
  Internal(String),

  #[error("Configuration Error: {0}")]
  Config(String),
}

impl AppError {
  /// Domain status this error is reported with.
  pub fn status(&self) -> Status {
    match self {
      AppError::NotFound(_) => Status::NotFound,
      AppError::BadRequest(_) => Status::BadRequest,
      AppError::UnprocessableEntity(_) => Status::UnprocessableEntity,
      AppError::Internal(_) | AppError::Config(_) => Status::InternalServerError,
    }
  }

  /// Text safe to hand back to a client.
  pub fn public_message(&self) -> String {
    match self {
      AppError::Config(_) => "Configuration issue".to_string(),
      other => other.to_string(),
    }
  }
}

impl ResponseError for AppError {
  fn status_code(&self) -> actix_web::http::StatusCode {
    self.status().http_status()
  }

  fn error_response(&self) -> HttpResponse {
    tracing::warn!(application_error = %self, "Responding with error");
    HttpResponse::build(self.status_code()).json(ApiResponse::rejection(self))
  }
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;
