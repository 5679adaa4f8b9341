//! Registry entries: what an identifier is bound to.

use crate::descriptor::Descriptor;
use crate::key::Key;
use once_cell::sync::OnceCell;
use std::any::Any;
use std::sync::Arc;

/// A resolved value with its type erased. It always holds an `Arc<I>` for the
/// `I` its key names, so cloning the outer `Arc` hands out the very same
/// inner allocation.
pub(crate) type Instance = Arc<dyn Any + Send + Sync>;

pub(crate) fn erase<I: ?Sized + Any + Send + Sync>(value: Arc<I>) -> Instance {
  Arc::new(value)
}

pub(crate) fn downcast<I: ?Sized + Any + Send + Sync>(instance: &Instance) -> Option<Arc<I>> {
  let any: &(dyn Any + Send + Sync) = &**instance;
  any.downcast_ref::<Arc<I>>().cloned()
}

/// How long an instance built by a producer binding lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lifetime {
  /// A new instance on every resolution.
  #[default]
  Transient,
  /// Built on the first successful resolution, then shared.
  Singleton,
}

pub(crate) enum Binding {
  Literal {
    value: Instance,
    type_name: &'static str,
  },
  Producer {
    descriptor: Descriptor,
    // Only ever filled for `Lifetime::Singleton`.
    cell: OnceCell<Instance>,
  },
}

impl Binding {
  pub(crate) fn literal<I: ?Sized + Any + Send + Sync>(value: Arc<I>) -> Self {
    Binding::Literal {
      value: erase(value),
      type_name: std::any::type_name::<I>(),
    }
  }

  pub(crate) fn producer(descriptor: Descriptor) -> Self {
    Binding::Producer {
      descriptor,
      cell: OnceCell::new(),
    }
  }

  pub(crate) fn info(&self) -> BindingInfo {
    match self {
      Binding::Literal { type_name, .. } => BindingInfo::Literal {
        type_name: *type_name,
      },
      Binding::Producer { descriptor, .. } => BindingInfo::Producer {
        producer: descriptor.producer(),
        lifetime: descriptor.lifetime(),
        dependencies: descriptor.dependencies().to_vec(),
      },
    }
  }

  pub(crate) fn dependencies(&self) -> &[Key] {
    match self {
      Binding::Literal { .. } => &[],
      Binding::Producer { descriptor, .. } => descriptor.dependencies(),
    }
  }
}

/// A read-only view of a binding, as returned by
/// [`ServiceLocator::lookup`](crate::ServiceLocator::lookup).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindingInfo {
  Literal {
    type_name: &'static str,
  },
  Producer {
    producer: &'static str,
    lifetime: Lifetime,
    dependencies: Vec<Key>,
  },
}

impl BindingInfo {
  pub fn is_literal(&self) -> bool {
    matches!(self, BindingInfo::Literal { .. })
  }

  pub fn is_producer(&self) -> bool {
    matches!(self, BindingInfo::Producer { .. })
  }
}
