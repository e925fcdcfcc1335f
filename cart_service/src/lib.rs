// cart_service/src/lib.rs

//! Shopping-cart line items over a single SQL table.
//!
//! Requests flow handler → use case → repository:
//!  - `web` decodes and validates JSON bodies and writes the envelope.
//!  - `services` holds the add-or-increment, filter and delete rules.
//!  - `repository` issues parameter-bound SQL and maps driver errors to `AppError`.

pub mod config;
pub mod errors;
pub mod models;
pub mod repository;
pub mod response;
pub mod services;
pub mod state;
pub mod web;

pub use errors::{AppError, Result};
pub use response::{ApiResponse, Status};
