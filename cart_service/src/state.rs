// cart_service/src/state.rs
use crate::services::CartUseCase;
use sqlx::SqlitePool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
  pub db_pool: SqlitePool,
  pub cart_use_case: Arc<dyn CartUseCase>,
}
