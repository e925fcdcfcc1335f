// cart_service/src/response.rs

//! The uniform envelope every endpoint answers with.
//!
//! `{ "status": <domain status>, "data": <payload | null>, "message"?: <error text> }`

use actix_web::{body::BoxBody, http::StatusCode, HttpRequest, HttpResponse, Responder};
use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::errors::AppError;

/// Application-level status, mapped 1:1 onto HTTP status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
  Ok,
  Created,
  BadRequest,
  NotFound,
  UnprocessableEntity,
  InternalServerError,
}

impl Status {
  pub fn code(self) -> u16 {
    match self {
      Status::Ok => 200,
      Status::Created => 201,
      Status::BadRequest => 400,
      Status::NotFound => 404,
      Status::UnprocessableEntity => 422,
      Status::InternalServerError => 500,
    }
  }

  pub fn http_status(self) -> StatusCode {
    match self {
      Status::Ok => StatusCode::OK,
      Status::Created => StatusCode::CREATED,
      Status::BadRequest => StatusCode::BAD_REQUEST,
      Status::NotFound => StatusCode::NOT_FOUND,
      Status::UnprocessableEntity => StatusCode::UNPROCESSABLE_ENTITY,
      Status::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }
}

impl Serialize for Status {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u16(self.code())
  }
}

#[derive(Debug, Serialize)]
pub struct ApiResponse {
  status: Status,
  data: Option<Value>,
  #[serde(skip_serializing_if = "Option::is_none")]
  message: Option<String>,
  #[serde(skip)]
  error: Option<AppError>,
}

impl ApiResponse {
  /// Successful envelope. A payload that cannot be serialized turns into an internal error.
  pub fn success<T: Serialize>(status: Status, payload: T) -> Self {
    match serde_json::to_value(payload) {
      Ok(data) => Self {
        status,
        data: Some(data),
        message: None,
        error: None,
      },
      Err(e) => {
        tracing::error!(error = %e, "Failed to serialize response payload.");
        Self::error(AppError::Internal("Failed to serialize response payload.".to_string()))
      }
    }
  }

  pub fn error(err: AppError) -> Self {
    Self {
      status: err.status(),
      data: None,
      message: Some(err.public_message()),
      error: Some(err),
    }
  }

  /// Envelope body for an error owned elsewhere (e.g. an actix `ResponseError`).
  pub(crate) fn rejection(err: &AppError) -> Self {
    Self {
      status: err.status(),
      data: None,
      message: Some(err.public_message()),
      error: None,
    }
  }

  pub fn status(&self) -> Status {
    self.status
  }

  pub fn data(&self) -> Option<&Value> {
    self.data.as_ref()
  }

  /// The error behind a failed envelope, if it was built from one.
  pub fn err(&self) -> Option<&AppError> {
    self.error.as_ref()
  }
}

impl Responder for ApiResponse {
  type Body = BoxBody;

  fn respond_to(self, _req: &HttpRequest) -> HttpResponse<Self::Body> {
    HttpResponse::build(self.status.http_status()).json(&self)
  }
}
