// cart_service/src/config.rs

use crate::errors::{AppError, Result};
use crate::repository::DEFAULT_CART_TABLE;
use dotenvy::dotenv;
use std::env;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
  Text,
  Json,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,
  pub database_url: String,
  pub cart_table: String,
  // Create the cart table on startup if it is missing.
  pub init_schema: bool,
  pub log_format: LogFormat,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present
    Self::from_lookup(|name| env::var(name).ok())
  }

  /// Builds the config from any variable source; unset variables fall back to defaults.
  pub fn from_lookup<F>(lookup: F) -> Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let get_env = |var_name: &str| {
      lookup(var_name).ok_or_else(|| AppError::Config(format!("Missing environment variable '{}'", var_name)))
    };

    let server_host = get_env("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let server_port = get_env("PORT")
      .unwrap_or_else(|_| "8080".to_string())
      .parse::<u16>()
      .map_err(|e| AppError::Config(format!("Invalid PORT: {}", e)))?;
    let database_url = get_env("DATABASE_URL")?;
    let cart_table = get_env("CART_TABLE").unwrap_or_else(|_| DEFAULT_CART_TABLE.to_string());

    let init_schema = get_env("INIT_SCHEMA")
      .unwrap_or_else(|_| "false".to_string())
      .parse::<bool>()
      .map_err(|e| AppError::Config(format!("Invalid INIT_SCHEMA value: {}", e)))?;

    let log_format = match get_env("LOG_FORMAT")
      .unwrap_or_else(|_| "text".to_string())
      .to_ascii_lowercase()
      .as_str()
    {
      "text" => LogFormat::Text,
      "json" => LogFormat::Json,
      other => return Err(AppError::Config(format!("Invalid LOG_FORMAT value: '{}'", other))),
    };

    Ok(Self {
      server_host,
      server_port,
      database_url,
      cart_table,
      init_schema,
      log_format,
    })
  }

  pub fn server_address(&self) -> String {
    format!("{}:{}", self.server_host, self.server_port)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::collections::HashMap;

  fn config_from(vars: &[(&str, &str)]) -> Result<AppConfig> {
    let vars: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
    AppConfig::from_lookup(|name| vars.get(name).cloned())
  }

  #[test]
  fn defaults_apply_when_only_database_url_is_set() {
    let cfg = config_from(&[("DATABASE_URL", "sqlite::memory:")]).unwrap();
    assert_eq!(cfg.server_address(), "127.0.0.1:8080");
    assert_eq!(cfg.cart_table, "cart");
    assert!(!cfg.init_schema);
    assert_eq!(cfg.log_format, LogFormat::Text);
  }

  #[test]
  fn database_url_is_required() {
    let err = config_from(&[("PORT", "9000")]).unwrap_err();
    assert!(matches!(err, AppError::Config(ref m) if m.contains("DATABASE_URL")));
  }

  #[test]
  fn explicit_values_are_used() {
    let cfg = config_from(&[
      ("DATABASE_URL", "sqlite://cart.db"),
      ("SERVER_HOST", "0.0.0.0"),
      ("PORT", "9000"),
      ("CART_TABLE", "keranjang"),
      ("INIT_SCHEMA", "true"),
      ("LOG_FORMAT", "JSON"),
    ])
    .unwrap();
    assert_eq!(cfg.server_address(), "0.0.0.0:9000");
    assert_eq!(cfg.cart_table, "keranjang");
    assert!(cfg.init_schema);
    assert_eq!(cfg.log_format, LogFormat::Json);
  }

  #[test]
  fn malformed_values_are_rejected() {
    assert!(config_from(&[("DATABASE_URL", "x"), ("PORT", "http")]).is_err());
    assert!(config_from(&[("DATABASE_URL", "x"), ("INIT_SCHEMA", "yes")]).is_err());
    assert!(config_from(&[("DATABASE_URL", "x"), ("LOG_FORMAT", "xml")]).is_err());
  }
}
