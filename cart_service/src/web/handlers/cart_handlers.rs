// cart_service/src/web/handlers/cart_handlers.rs

use actix_web::web;
use serde::Deserialize;
use tracing::{info, instrument, warn};

use crate::errors::AppError;
use crate::models::{require_non_blank, CartItem, ItemFilter, Validate};
use crate::response::ApiResponse;
use crate::state::AppState;

// --- Request DTOs ---
// Missing fields decode to their zero value; unknown fields are ignored.

#[derive(Deserialize, Debug, Default)]
pub struct AddItemRequest {
  #[serde(default, rename = "nama")]
  pub name: String,
  #[serde(default, rename = "kodeProduk")]
  pub product_code: String,
  #[serde(default, rename = "kuantitas")]
  pub quantity: i64,
}

impl Validate for AddItemRequest {
  fn validate(&self) -> Result<(), AppError> {
    require_non_blank("nama", &self.name)
  }
}

impl From<AddItemRequest> for CartItem {
  fn from(req: AddItemRequest) -> Self {
    CartItem::new(req.name, req.product_code, req.quantity)
  }
}

#[derive(Deserialize, Debug, Default)]
pub struct DeleteItemRequest {
  #[serde(default, rename = "kodeProduk")]
  pub product_code: String,
}

// --- Handler Implementation ---

#[instrument(
  name = "handler::add_item",
  skip(app_state, req_payload),
  fields(product_code = %req_payload.product_code, quantity = req_payload.quantity)
)]
pub async fn add_item_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<AddItemRequest>,
) -> ApiResponse {
  let input = req_payload.into_inner();

  if let Err(e) = input.validate() {
    warn!(error = %e, "Add item request failed validation.");
    return ApiResponse::error(e);
  }

  info!("Adding item to cart.");
  app_state.cart_use_case.add_item(input.into()).await
}

#[instrument(name = "handler::get_items", skip(app_state, filter))]
pub async fn get_items_handler(app_state: web::Data<AppState>, filter: web::Json<ItemFilter>) -> ApiResponse {
  let filter = filter.into_inner();
  info!(name = ?filter.name(), quantity = ?filter.quantity(), "Listing cart items.");
  app_state.cart_use_case.get_items(filter).await
}

#[instrument(
  name = "handler::delete_item",
  skip(app_state, req_payload),
  fields(product_code = %req_payload.product_code)
)]
pub async fn delete_item_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<DeleteItemRequest>,
) -> ApiResponse {
  info!("Deleting item from cart.");
  app_state.cart_use_case.delete_item(&req_payload.product_code).await
}
