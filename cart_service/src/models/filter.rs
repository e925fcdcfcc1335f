// cart_service/src/models/filter.rs

use serde::Deserialize;

/// Exact-match criteria for listing cart items.
///
/// An empty name or a zero quantity means that field is not filtered on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ItemFilter {
  #[serde(default, rename = "nama")]
  pub name: String,
  #[serde(default, rename = "kuantitas")]
  pub quantity: i64,
}

impl ItemFilter {
  pub fn name(&self) -> Option<&str> {
    (!self.name.is_empty()).then_some(self.name.as_str())
  }

  pub fn quantity(&self) -> Option<i64> {
    (self.quantity != 0).then_some(self.quantity)
  }

  /// True when at least one field narrows the result.
  pub fn is_active(&self) -> bool {
    self.name().is_some() || self.quantity().is_some()
  }
}
