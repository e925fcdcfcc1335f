// cart_service/src/models/mod.rs

//! Data structures representing the cart table and request-scoped criteria.

pub mod cart_item;
pub mod filter;

pub use cart_item::CartItem;
pub use filter::ItemFilter;

use crate::errors::AppError;

/// Field-level checks run on a decoded request before it reaches the use case.
pub trait Validate {
  fn validate(&self) -> Result<(), AppError>;
}

/// Fails with `BadRequest` when `value` is empty or whitespace.
pub fn require_non_blank(field: &str, value: &str) -> Result<(), AppError> {
  if value.trim().is_empty() {
    return Err(AppError::BadRequest(format!("Field '{}' is required.", field)));
  }
  Ok(())
}
