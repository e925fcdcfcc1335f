// cart_service/src/services/mod.rs

pub mod cart_service;

pub use cart_service::{CartService, CartUseCase};
