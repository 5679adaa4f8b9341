//! Tracking of the keys a single resolution is currently inside of.

use crate::error::{Error, Result};
use crate::key::Key;
use std::ops::{Deref, DerefMut};

/// The chain of keys from the originally requested identifier down to the
/// one being resolved right now.
#[derive(Debug, Default)]
pub(crate) struct ResolutionPath {
  keys: Vec<Key>,
}

impl ResolutionPath {
  pub(crate) fn new() -> Self {
    Self::default()
  }

  /// Pushes `key` onto the path for as long as the returned guard lives.
  ///
  /// Fails if `key` is already on the path, or if the path would grow past
  /// `max_depth`.
  pub(crate) fn enter(&mut self, key: &Key, max_depth: usize) -> Result<ResolutionGuard<'_>> {
    if let Some(start) = self.keys.iter().position(|k| k == key) {
      let mut path = self.keys[start..].to_vec();
      path.push(key.clone());
      return Err(Error::CyclicDependency { path });
    }
    if self.keys.len() >= max_depth {
      return Err(Error::DepthExceeded {
        key: key.clone(),
        limit: max_depth,
      });
    }
    self.keys.push(key.clone());
    Ok(ResolutionGuard { path: self })
  }

  pub(crate) fn depth(&self) -> usize {
    self.keys.len()
  }
}

/// An RAII guard over one entry of a [`ResolutionPath`].
///
/// The key is popped when the guard is dropped, so every exit from a
/// resolution step, including early returns through `?`, leaves the path as
/// it found it. The guard derefs to the path so nested resolutions can enter
/// their own keys below it.
pub(crate) struct ResolutionGuard<'a> {
  path: &'a mut ResolutionPath,
}

impl Deref for ResolutionGuard<'_> {
  type Target = ResolutionPath;

  fn deref(&self) -> &ResolutionPath {
    self.path
  }
}

impl DerefMut for ResolutionGuard<'_> {
  fn deref_mut(&mut self) -> &mut ResolutionPath {
    self.path
  }
}

impl Drop for ResolutionGuard<'_> {
  fn drop(&mut self) {
    self.path.keys.pop();
  }
}
