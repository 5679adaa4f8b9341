//! Tunables for a [`ServiceLocator`](crate::ServiceLocator).

/// The default limit on how deep a dependency chain may go.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Configuration for a [`ServiceLocator`](crate::ServiceLocator).
///
/// With the `serde` feature enabled the struct can be read from any serde
/// format; missing fields fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
  feature = "serde",
  derive(serde::Serialize, serde::Deserialize),
  serde(default)
)]
pub struct LocatorConfig {
  /// Maximum number of nested resolutions for a single `get`. Chains deeper
  /// than this fail with [`Error::DepthExceeded`](crate::Error::DepthExceeded).
  pub max_depth: usize,
}

impl Default for LocatorConfig {
  fn default() -> Self {
    Self {
      max_depth: DEFAULT_MAX_DEPTH,
    }
  }
}

impl LocatorConfig {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_max_depth(mut self, max_depth: usize) -> Self {
    self.max_depth = max_depth;
    self
  }
}
