// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use async_trait::async_trait;
use cart_service::models::{CartItem, ItemFilter};
use cart_service::repository::{CartRepository, SqliteCartRepository};
use cart_service::response::{ApiResponse, Status};
use cart_service::services::CartUseCase;
use cart_service::{AppError, Result};
use once_cell::sync::Lazy;
use parking_lot::Mutex;
use serde_json::json;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use tracing::Level;

// --- Helper for Tracing Setup (call once per test run if needed) ---
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

// --- Database helpers ---

/// A private in-memory database. One connection, since every `:memory:` connection is its own database.
pub async fn memory_pool() -> SqlitePool {
  SqlitePoolOptions::new()
    .max_connections(1)
    .connect("sqlite::memory:")
    .await
    .expect("in-memory sqlite pool")
}

pub async fn sqlite_repository() -> (SqlitePool, SqliteCartRepository) {
  setup_tracing();
  let pool = memory_pool().await;
  let repo = SqliteCartRepository::new(pool.clone(), "cart").expect("valid table name");
  repo.create_table().await.expect("create cart table");
  (pool, repo)
}

pub async fn count_rows(pool: &SqlitePool) -> i64 {
  sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM cart")
    .fetch_one(pool)
    .await
    .expect("count cart rows")
}

pub fn item(name: &str, code: &str, quantity: i64) -> CartItem {
  CartItem::new(name, code, quantity)
}

// --- Mock repository ---

/// Canned result for one repository method. `Unexpected` panics when called.
#[derive(Debug, Clone)]
pub enum Outcome<T> {
  Ok(T),
  NotFound,
  Internal,
  Unexpected,
}

impl<T> Default for Outcome<T> {
  fn default() -> Self {
    Outcome::Unexpected
  }
}

impl<T: Clone> Outcome<T> {
  fn resolve(&self, method: &str) -> Result<T> {
    match self {
      Outcome::Ok(v) => Ok(v.clone()),
      Outcome::NotFound => Err(AppError::NotFound(format!("mock {}", method))),
      Outcome::Internal => Err(AppError::Internal(format!("mock {}", method))),
      Outcome::Unexpected => panic!("unexpected call to CartRepository::{}", method),
    }
  }
}

#[derive(Default)]
pub struct MockCartRepository {
  pub find_by_product_code: Outcome<CartItem>,
  pub add: Outcome<i64>,
  pub update_quantity: Outcome<()>,
  pub find_all: Outcome<Vec<CartItem>>,
  pub find_by_filter: Outcome<Vec<CartItem>>,
  pub delete: Outcome<()>,
  pub(crate) calls: Mutex<Vec<String>>,
  pub(crate) added: Mutex<Vec<CartItem>>,
  pub(crate) updated: Mutex<Vec<(i64, CartItem)>>,
  pub(crate) deleted: Mutex<Vec<i64>>,
}

impl MockCartRepository {
  pub fn calls(&self) -> Vec<String> {
    self.calls.lock().clone()
  }

  pub fn added(&self) -> Vec<CartItem> {
    self.added.lock().clone()
  }

  pub fn updated(&self) -> Vec<(i64, CartItem)> {
    self.updated.lock().clone()
  }

  pub fn deleted(&self) -> Vec<i64> {
    self.deleted.lock().clone()
  }

  fn record(&self, method: &str) {
    self.calls.lock().push(method.to_string());
  }
}

#[async_trait]
impl CartRepository for MockCartRepository {
  async fn add(&self, item: &CartItem) -> Result<i64> {
    self.record("add");
    self.added.lock().push(item.clone());
    self.add.resolve("add")
  }

  async fn update_quantity(&self, id: i64, item: &CartItem) -> Result<()> {
    self.record("update_quantity");
    self.updated.lock().push((id, item.clone()));
    self.update_quantity.resolve("update_quantity")
  }

  async fn find_by_product_code(&self, _product_code: &str) -> Result<CartItem> {
    self.record("find_by_product_code");
    self.find_by_product_code.resolve("find_by_product_code")
  }

  async fn find_all(&self) -> Result<Vec<CartItem>> {
    self.record("find_all");
    self.find_all.resolve("find_all")
  }

  async fn find_by_filter(&self, _filter: &ItemFilter) -> Result<Vec<CartItem>> {
    self.record("find_by_filter");
    self.find_by_filter.resolve("find_by_filter")
  }

  async fn delete(&self, id: i64) -> Result<()> {
    self.record("delete");
    self.deleted.lock().push(id);
    self.delete.resolve("delete")
  }
}

// --- Recording use case for the HTTP layer ---

/// Answers every call with `200 {"stub": true}` and remembers what it was asked.
#[derive(Default)]
pub struct RecordingUseCase {
  calls: Mutex<Vec<String>>,
}

impl RecordingUseCase {
  pub fn calls(&self) -> Vec<String> {
    self.calls.lock().clone()
  }
}

#[async_trait]
impl CartUseCase for RecordingUseCase {
  async fn add_item(&self, input: CartItem) -> ApiResponse {
    self.calls.lock().push(format!("add_item:{}", input.product_code));
    ApiResponse::success(Status::Created, json!({ "stub": true }))
  }

  async fn get_items(&self, filter: ItemFilter) -> ApiResponse {
    self.calls.lock().push(format!("get_items:{}:{}", filter.name, filter.quantity));
    ApiResponse::success(Status::Ok, json!({ "stub": true }))
  }

  async fn delete_item(&self, product_code: &str) -> ApiResponse {
    self.calls.lock().push(format!("delete_item:{}", product_code));
    ApiResponse::success(Status::Ok, json!({ "stub": true }))
  }
}
