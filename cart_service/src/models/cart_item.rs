// cart_service/src/models/cart_item.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::errors::{AppError, Result};

/// One cart line item, as persisted in the cart table.
///
/// `product_code` is the business key used for add-or-increment and delete;
/// `id` is assigned by the database.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct CartItem {
  pub id: i64,
  #[serde(rename = "nama")]
  #[sqlx(rename = "nama")]
  pub name: String,
  #[serde(rename = "kodeProduk")]
  #[sqlx(rename = "kodeProduk")]
  pub product_code: String,
  #[serde(rename = "kuantitas")]
  #[sqlx(rename = "kuantitas")]
  pub quantity: i64,
  pub created_at: DateTime<Utc>,
  // Null until the first increment.
  pub update_at: Option<DateTime<Utc>>,
}

impl CartItem {
  /// A not-yet-persisted item stamped with the current time.
  pub fn new(name: impl Into<String>, product_code: impl Into<String>, quantity: i64) -> Self {
    Self {
      id: 0,
      name: name.into(),
      product_code: product_code.into(),
      quantity,
      created_at: Utc::now(),
      update_at: None,
    }
  }

  /// Copy of this item with `quantity` added and `update_at` refreshed.
  ///
  /// Fails with `BadRequest` if the new quantity does not fit in an `i64`.
  pub fn incremented_by(&self, quantity: i64) -> Result<Self> {
    let total = self.quantity.checked_add(quantity).ok_or_else(|| {
      AppError::BadRequest(format!(
        "Quantity {} for product code '{}' cannot be increased by {}.",
        self.quantity, self.product_code, quantity
      ))
    })?;
    Ok(Self {
      quantity: total,
      update_at: Some(Utc::now()),
      ..self.clone()
    })
  }
}
