// cart_service/src/web/routes.rs

use actix_web::{error::JsonPayloadError, web, HttpRequest};
use serde_json::json;
use tracing::error;

use crate::errors::AppError;
use crate::response::{ApiResponse, Status};
use crate::state::AppState;
use crate::web::handlers::cart_handlers;

// Pings the database so a broken pool shows up as unhealthy.
async fn health_check_handler(app_state: web::Data<AppState>) -> ApiResponse {
  match sqlx::query("SELECT 1").execute(&app_state.db_pool).await {
    Ok(_) => ApiResponse::success(Status::Ok, json!({ "status": "ok" })),
    Err(e) => {
      error!(error = %e, "Health check could not reach the database.");
      ApiResponse::error(AppError::Internal("Database unreachable.".to_string()))
    }
  }
}

fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
  AppError::UnprocessableEntity(format!("Invalid request body: {}", err)).into()
}

/// Bodies are decoded regardless of content type, GET included.
pub fn json_config() -> web::JsonConfig {
  web::JsonConfig::default()
    .content_type_required(false)
    .error_handler(json_error_handler)
}

// This function will be called in `main.rs` to configure services for the Actix App.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg
    .route("/health", web::get().to(health_check_handler))
    .service(
      web::scope("/cart").app_data(json_config()).service(
        web::resource("/items")
          .route(web::post().to(cart_handlers::add_item_handler))
          .route(web::get().to(cart_handlers::get_items_handler))
          .route(web::delete().to(cart_handlers::delete_item_handler)),
      ),
    );
}
