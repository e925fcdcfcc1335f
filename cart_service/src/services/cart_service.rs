// cart_service/src/services/cart_service.rs

//! Cart business rules: add-or-increment by product code, filtered listing,
//! delete by product code. Every outcome is returned as an `ApiResponse`.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info, instrument, warn};

use crate::errors::AppError;
use crate::models::{CartItem, ItemFilter};
use crate::repository::CartRepository;
use crate::response::{ApiResponse, Status};

pub const DELETE_SUCCESS_MESSAGE: &str = "Success Delete Data";

#[async_trait]
pub trait CartUseCase: Send + Sync {
  async fn add_item(&self, input: CartItem) -> ApiResponse;
  async fn get_items(&self, filter: ItemFilter) -> ApiResponse;
  async fn delete_item(&self, product_code: &str) -> ApiResponse;
}

pub struct CartService {
  repo: Arc<dyn CartRepository>,
}

impl CartService {
  pub fn new(repo: Arc<dyn CartRepository>) -> Self {
    Self { repo }
  }
}

fn internal_error() -> ApiResponse {
  ApiResponse::error(AppError::Internal("Something went wrong.".to_string()))
}

#[async_trait]
impl CartUseCase for CartService {
  // Lookup then insert/update is not atomic: two concurrent first adds of a code can both insert.
  #[instrument(
    name = "cart_service::add_item",
    skip(self, input),
    fields(product_code = %input.product_code, quantity = input.quantity)
  )]
  async fn add_item(&self, input: CartItem) -> ApiResponse {
    match self.repo.find_by_product_code(&input.product_code).await {
      Ok(existing) => {
        let merged = match existing.incremented_by(input.quantity) {
          Ok(merged) => merged,
          Err(e) => {
            warn!(error = %e, item_id = existing.id, "Rejected quantity increment.");
            return ApiResponse::error(e);
          }
        };
        if let Err(e) = self.repo.update_quantity(merged.id, &merged).await {
          error!(error = %e, item_id = merged.id, "Failed to increment cart item quantity.");
          return internal_error();
        }
        info!(item_id = merged.id, quantity = merged.quantity, "Cart item quantity incremented.");
        ApiResponse::success(Status::Ok, merged)
      }
      Err(AppError::NotFound(_)) => {
        let mut item = CartItem::new(input.name, input.product_code, input.quantity);
        match self.repo.add(&item).await {
          Ok(id) => {
            item.id = id;
            info!(item_id = id, "Cart item created.");
            ApiResponse::success(Status::Created, item)
          }
          Err(e) => {
            error!(error = %e, "Failed to insert cart item.");
            internal_error()
          }
        }
      }
      Err(e) => {
        error!(error = %e, "Failed to look up cart item before adding.");
        internal_error()
      }
    }
  }

  #[instrument(name = "cart_service::get_items", skip(self))]
  async fn get_items(&self, filter: ItemFilter) -> ApiResponse {
    let result = if filter.is_active() {
      self.repo.find_by_filter(&filter).await
    } else {
      self.repo.find_all().await
    };

    match result {
      Ok(items) => {
        info!(count = items.len(), "Cart items fetched.");
        ApiResponse::success(Status::Ok, items)
      }
      Err(e @ AppError::NotFound(_)) => {
        warn!(error = %e, "No cart items found.");
        ApiResponse::error(e)
      }
      Err(e) => {
        error!(error = %e, "Failed to fetch cart items.");
        internal_error()
      }
    }
  }

  #[instrument(name = "cart_service::delete_item", skip(self))]
  async fn delete_item(&self, product_code: &str) -> ApiResponse {
    let item = match self.repo.find_by_product_code(product_code).await {
      Ok(item) => item,
      Err(e @ AppError::NotFound(_)) => {
        warn!(error = %e, "Cart item to delete was not found.");
        return ApiResponse::error(e);
      }
      Err(e) => {
        error!(error = %e, "Failed to look up cart item before deleting.");
        return internal_error();
      }
    };

    match self.repo.delete(item.id).await {
      Ok(()) => {
        info!(item_id = item.id, "Cart item deleted.");
        ApiResponse::success(Status::Ok, DELETE_SUCCESS_MESSAGE)
      }
      // Removed by someone else between lookup and delete.
      Err(e @ AppError::NotFound(_)) => ApiResponse::error(e),
      Err(e) => {
        error!(error = %e, item_id = item.id, "Failed to delete cart item.");
        internal_error()
      }
    }
  }
}
