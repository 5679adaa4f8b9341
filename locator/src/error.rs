//! Errors raised while binding and resolving identifiers.

use crate::key::Key;
use thiserror::Error;

/// The error type returned by every fallible `fibre_locator` operation.
#[derive(Debug, Error)]
pub enum Error {
  /// The identifier, requested directly or as a dependency, has no binding.
  #[error("no binding registered for {key}")]
  Unbound { key: Key },

  /// A producer could not be built from the arguments it was handed.
  #[error("cannot instantiate {key}: {reason}")]
  Instantiation { key: Key, reason: String },

  /// Resolving one of `key`'s dependencies failed.
  #[error("failed to resolve a dependency of {key}: {source}")]
  Dependency {
    key: Key,
    #[source]
    source: Box<Error>,
  },

  /// The binding graph loops back onto a key that is already being resolved.
  #[error("cyclic dependency detected: {}", format_path(.path))]
  CyclicDependency { path: Vec<Key> },

  /// The dependency chain grew past `LocatorConfig::max_depth`.
  #[error("resolving {key} exceeded the maximum resolution depth of {limit}")]
  DepthExceeded { key: Key, limit: usize },
}

/// A specialized `Result` type for `fibre_locator` operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
  pub(crate) fn instantiation(key: &Key, reason: impl Into<String>) -> Self {
    Error::Instantiation {
      key: key.clone(),
      reason: reason.into(),
    }
  }

  /// The innermost error, skipping every [`Error::Dependency`] layer.
  pub fn root_cause(&self) -> &Error {
    let mut current = self;
    while let Error::Dependency { source, .. } = current {
      current = source;
    }
    current
  }

  /// Whether resolution failed because something could not be instantiated:
  /// an unbound identifier, a failed build, or a runaway dependency chain.
  pub fn is_instantiation(&self) -> bool {
    matches!(
      self.root_cause(),
      Error::Unbound { .. } | Error::Instantiation { .. } | Error::DepthExceeded { .. }
    )
  }

  pub fn is_cyclic(&self) -> bool {
    matches!(self.root_cause(), Error::CyclicDependency { .. })
  }

  /// The identifier that had no binding, if that is what went wrong.
  pub fn unbound_key(&self) -> Option<&Key> {
    match self.root_cause() {
      Error::Unbound { key } => Some(key),
      _ => None,
    }
  }
}

fn format_path(path: &[Key]) -> String {
  path
    .iter()
    .map(ToString::to_string)
    .collect::<Vec<_>>()
    .join(" -> ")
}
