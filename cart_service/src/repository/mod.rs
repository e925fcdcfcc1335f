// cart_service/src/repository/mod.rs

//! Persistence port for cart items.
//!
//! Implementations hide every driver detail: callers only ever see
//! `AppError::NotFound` or `AppError::Internal`.

mod sqlite;

pub use sqlite::SqliteCartRepository;

use async_trait::async_trait;

use crate::errors::Result;
use crate::models::{CartItem, ItemFilter};

/// Default table holding cart line items.
pub const DEFAULT_CART_TABLE: &str = "cart";

#[async_trait]
pub trait CartRepository: Send + Sync {
  /// Insert a new row and return its generated id. `item.id` is ignored.
  async fn add(&self, item: &CartItem) -> Result<i64>;

  /// Persist `item.quantity` and `item.update_at` for the row with `id`.
  ///
  /// Returns `NotFound` if no row was affected.
  async fn update_quantity(&self, id: i64, item: &CartItem) -> Result<()>;

  /// Returns `NotFound` if no row carries `product_code`.
  async fn find_by_product_code(&self, product_code: &str) -> Result<CartItem>;

  /// Every row, in storage order.
  async fn find_all(&self) -> Result<Vec<CartItem>>;

  /// Rows matching every set field of `filter` exactly.
  ///
  /// Returns `NotFound` when a narrowing filter matches nothing. With no field
  /// set this behaves like `find_all`.
  async fn find_by_filter(&self, filter: &ItemFilter) -> Result<Vec<CartItem>>;

  /// Returns `NotFound` if no row was affected.
  async fn delete(&self, id: i64) -> Result<()>;
}
