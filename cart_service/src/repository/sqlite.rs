// cart_service/src/repository/sqlite.rs

use async_trait::async_trait;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use tracing::{debug, error, instrument, warn};

use super::CartRepository;
use crate::errors::{AppError, Result};
use crate::models::{CartItem, ItemFilter};

const COLUMNS: &str = "id, nama, kodeProduk, kuantitas, created_at, update_at";

/// `CartRepository` over a SQLite table whose name is fixed at construction.
#[derive(Debug, Clone)]
pub struct SqliteCartRepository {
  pool: SqlitePool,
  table: String,
}

/// One equality clause of a filtered listing.
enum Predicate {
  Name(String),
  Quantity(i64),
}

impl Predicate {
  fn from_filter(filter: &ItemFilter) -> Vec<Predicate> {
    let mut predicates = Vec::with_capacity(2);
    if let Some(name) = filter.name() {
      predicates.push(Predicate::Name(name.to_owned()));
    }
    if let Some(quantity) = filter.quantity() {
      predicates.push(Predicate::Quantity(quantity));
    }
    predicates
  }
}

impl SqliteCartRepository {
  /// Fails with `AppError::Config` if `table` is not a plain SQL identifier.
  pub fn new(pool: SqlitePool, table: impl Into<String>) -> Result<Self> {
    let table = table.into();
    validate_table_name(&table)?;
    Ok(Self { pool, table })
  }

  pub fn table(&self) -> &str {
    &self.table
  }

  /// Creates the cart table if it does not exist yet. Product codes are not unique.
  #[instrument(name = "repository::create_table", skip(self), fields(table = %self.table))]
  pub async fn create_table(&self) -> Result<()> {
    let ddl = format!(
      "CREATE TABLE IF NOT EXISTS {} (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        nama TEXT NOT NULL,
        kodeProduk TEXT NOT NULL,
        kuantitas INTEGER NOT NULL DEFAULT 0,
        created_at TEXT NOT NULL,
        update_at TEXT NULL
      )",
      self.table
    );
    sqlx::query(&ddl)
      .execute(&self.pool)
      .await
      .map_err(|e| internal("create cart table", e))?;
    debug!("Cart table is present.");
    Ok(())
  }
}

#[async_trait]
impl CartRepository for SqliteCartRepository {
  async fn add(&self, item: &CartItem) -> Result<i64> {
    let sql = format!(
      "INSERT INTO {} (nama, kodeProduk, kuantitas, created_at) VALUES (?, ?, ?, ?)",
      self.table
    );
    let result = sqlx::query(&sql)
      .bind(item.name.as_str())
      .bind(item.product_code.as_str())
      .bind(item.quantity)
      .bind(item.created_at)
      .execute(&self.pool)
      .await
      .map_err(|e| internal("insert cart item", e))?;

    Ok(result.last_insert_rowid())
  }

  async fn update_quantity(&self, id: i64, item: &CartItem) -> Result<()> {
    let sql = format!("UPDATE {} SET kuantitas = ?, update_at = ? WHERE id = ?", self.table);
    let result = sqlx::query(&sql)
      .bind(item.quantity)
      .bind(item.update_at)
      .bind(id)
      .execute(&self.pool)
      .await
      .map_err(|e| internal("update cart item quantity", e))?;

    if result.rows_affected() < 1 {
      return Err(AppError::NotFound(format!("cart item with id {}", id)));
    }
    Ok(())
  }

  async fn find_by_product_code(&self, product_code: &str) -> Result<CartItem> {
    let sql = format!(
      "SELECT {} FROM {} WHERE kodeProduk = ? ORDER BY id LIMIT 1",
      COLUMNS, self.table
    );
    let found = sqlx::query_as::<_, CartItem>(&sql)
      .bind(product_code)
      .fetch_optional(&self.pool)
      .await
      .map_err(|e| read_error("look up cart item by product code", e))?;

    found.ok_or_else(|| AppError::NotFound(format!("item with product code '{}'", product_code)))
  }

  async fn find_all(&self) -> Result<Vec<CartItem>> {
    let sql = format!("SELECT {} FROM {}", COLUMNS, self.table);
    sqlx::query_as::<_, CartItem>(&sql)
      .fetch_all(&self.pool)
      .await
      .map_err(|e| read_error("list cart items", e))
  }

  async fn find_by_filter(&self, filter: &ItemFilter) -> Result<Vec<CartItem>> {
    let predicates = Predicate::from_filter(filter);
    if predicates.is_empty() {
      return self.find_all().await;
    }

    let mut query = QueryBuilder::<Sqlite>::new(format!("SELECT {} FROM {}", COLUMNS, self.table));
    for (i, predicate) in predicates.into_iter().enumerate() {
      query.push(if i == 0 { " WHERE " } else { " AND " });
      match predicate {
        Predicate::Name(name) => query.push("nama = ").push_bind(name),
        Predicate::Quantity(quantity) => query.push("kuantitas = ").push_bind(quantity),
      };
    }
    debug!(sql = %query.sql(), "Filtering cart items.");

    let items = query
      .build_query_as::<CartItem>()
      .fetch_all(&self.pool)
      .await
      .map_err(|e| read_error("filter cart items", e))?;

    if items.is_empty() {
      return Err(AppError::NotFound("no cart items match the filter".to_string()));
    }
    Ok(items)
  }

  async fn delete(&self, id: i64) -> Result<()> {
    let sql = format!("DELETE FROM {} WHERE id = ?", self.table);
    let result = sqlx::query(&sql)
      .bind(id)
      .execute(&self.pool)
      .await
      .map_err(|e| internal("delete cart item", e))?;

    if result.rows_affected() < 1 {
      return Err(AppError::NotFound(format!("cart item with id {}", id)));
    }
    Ok(())
  }
}

fn internal(action: &str, e: sqlx::Error) -> AppError {
  error!(error = %e, "Failed to {}.", action);
  AppError::Internal(format!("Failed to {}.", action))
}

// A row that cannot be decoded is reported as missing rather than as a server fault.
fn read_error(action: &str, e: sqlx::Error) -> AppError {
  match e {
    sqlx::Error::RowNotFound | sqlx::Error::ColumnDecode { .. } | sqlx::Error::Decode(_) => {
      warn!(error = %e, "Could not {}: unreadable row.", action);
      AppError::NotFound("cart item could not be read".to_string())
    }
    other => internal(action, other),
  }
}

fn validate_table_name(name: &str) -> Result<()> {
  let mut chars = name.chars();
  let valid = match chars.next() {
    Some(first) if first.is_ascii_alphabetic() || first == '_' => {
      chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
    }
    _ => false,
  };
  if !valid {
    return Err(AppError::Config(format!("Invalid cart table name '{}'.", name)));
  }
  Ok(())
}
