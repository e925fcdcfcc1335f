// cart_service/src/web/handlers/mod.rs

pub mod cart_handlers;

pub use cart_handlers::{add_item_handler, delete_item_handler, get_items_handler};
