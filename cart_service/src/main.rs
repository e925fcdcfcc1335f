// cart_service/src/main.rs

use std::sync::Arc;

use actix_web::{web as actix_data, App, HttpServer};
use anyhow::Context;
use sqlx::SqlitePool;
use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

use cart_service::config::{AppConfig, LogFormat};
use cart_service::repository::SqliteCartRepository;
use cart_service::services::CartService;
use cart_service::state::AppState;
use cart_service::web::configure_app_routes;

fn init_tracing(format: LogFormat) {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
  let builder = tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_span_events(FmtSpan::CLOSE); // Log when spans close, showing duration

  match format {
    LogFormat::Text => builder.init(),
    LogFormat::Json => builder.json().init(),
  }
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
  let app_config = AppConfig::from_env().context("Failed to load application configuration")?;
  init_tracing(app_config.log_format);

  tracing::info!("Starting cart service...");

  let db_pool = SqlitePool::connect(&app_config.database_url)
    .await
    .context("Failed to connect to the database")?;
  tracing::info!("Successfully connected to the database.");

  let repository =
    SqliteCartRepository::new(db_pool.clone(), app_config.cart_table.as_str()).context("Invalid cart table")?;
  if app_config.init_schema {
    repository.create_table().await.context("Failed to create the cart table")?;
    tracing::info!(table = %repository.table(), "Cart table initialised.");
  }

  let app_state = AppState {
    db_pool,
    cart_use_case: Arc::new(CartService::new(Arc::new(repository))),
  };

  let server_address = app_config.server_address();
  tracing::info!("Attempting to bind server to {}...", server_address);

  HttpServer::new(move || {
    App::new()
      .app_data(actix_data::Data::new(app_state.clone())) // Share AppState with handlers
      .wrap(tracing_actix_web::TracingLogger::default()) // Actix middleware for tracing requests
      .configure(configure_app_routes)
  })
  .bind(&server_address)
  .with_context(|| format!("Failed to bind {}", server_address))?
  .run()
  .await
  .context("Server terminated with an error")
}
