//! Identifiers for registry entries.

use std::any::{self, Any, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Identifies a binding inside a [`ServiceLocator`](crate::ServiceLocator).
///
/// A key is the identity of the requested type (a concrete type or a
/// `dyn Trait`) plus an optional name, so the same type can be bound several
/// times under different names. The type name is carried for diagnostics
/// only and takes no part in equality or hashing.
#[derive(Clone)]
pub struct Key {
  type_id: TypeId,
  type_name: &'static str,
  name: Option<String>,
}

impl Key {
  /// The unnamed key for `T`.
  pub fn of<T: ?Sized + Any>() -> Self {
    Self {
      type_id: TypeId::of::<T>(),
      type_name: any::type_name::<T>(),
      name: None,
    }
  }

  /// The key for `T` under `name`.
  pub fn named<T: ?Sized + Any>(name: impl Into<String>) -> Self {
    Self {
      type_id: TypeId::of::<T>(),
      type_name: any::type_name::<T>(),
      name: Some(name.into()),
    }
  }

  /// Returns the same type identity under `name`.
  pub fn with_name(mut self, name: impl Into<String>) -> Self {
    self.name = Some(name.into());
    self
  }

  pub fn type_id(&self) -> TypeId {
    self.type_id
  }

  pub fn type_name(&self) -> &'static str {
    self.type_name
  }

  pub fn name(&self) -> Option<&str> {
    self.name.as_deref()
  }

  /// Whether this key identifies `T`, regardless of its name.
  pub fn is<T: ?Sized + Any>(&self) -> bool {
    self.type_id == TypeId::of::<T>()
  }
}

impl PartialEq for Key {
  fn eq(&self, other: &Self) -> bool {
    self.type_id == other.type_id && self.name == other.name
  }
}

impl Eq for Key {}

impl Hash for Key {
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.type_id.hash(state);
    self.name.hash(state);
  }
}

impl fmt::Debug for Key {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match &self.name {
      Some(name) => write!(f, "Key({}, Name({}))", self.type_name, name),
      None => write!(f, "Key({})", self.type_name),
    }
  }
}

impl fmt::Display for Key {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match &self.name {
      Some(name) => write!(f, "{} (named '{}')", self.type_name, name),
      None => f.write_str(self.type_name),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::collections::HashSet;

  trait Marker {}

  #[test]
  fn names_distinguish_keys_of_the_same_type() {
    let mut keys = HashSet::new();
    keys.insert(Key::of::<String>());
    keys.insert(Key::named::<String>("greeting"));
    keys.insert(Key::named::<String>("greeting"));
    keys.insert(Key::of::<dyn Marker>());

    assert_eq!(keys.len(), 3);
    assert!(keys.contains(&Key::of::<String>().with_name("greeting")));
  }

  #[test]
  fn display_includes_type_and_name() {
    assert_eq!(Key::of::<u32>().to_string(), "u32");
    assert_eq!(Key::named::<u32>("port").to_string(), "u32 (named 'port')");
    assert!(Key::of::<dyn Marker>().is::<dyn Marker>());
    assert!(!Key::of::<dyn Marker>().is::<u32>());
  }
}
