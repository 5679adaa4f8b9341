//! Statically declared producers.

use crate::descriptor::Arguments;
use crate::error::Result;
use crate::key::Key;
use std::any::Any;
use std::sync::Arc;

/// A type the locator can construct on its own.
///
/// `Deps` lists what the constructor needs, in order: `()` for nothing,
/// `Arc<T>` for a single dependency, or a tuple of `Arc`s for several. Each
/// entry is resolved through the locator under the unnamed key of its type
/// before `construct` runs.
///
/// ```
/// use fibre_locator::{Component, ServiceLocator};
/// use std::sync::Arc;
///
/// struct Clock;
/// impl Component for Clock {
///   type Deps = ();
///   fn construct(_: ()) -> Self {
///     Clock
///   }
/// }
///
/// struct Scheduler {
///   clock: Arc<Clock>,
/// }
/// impl Component for Scheduler {
///   type Deps = Arc<Clock>;
///   fn construct(clock: Arc<Clock>) -> Self {
///     Scheduler { clock }
///   }
/// }
///
/// let locator = ServiceLocator::new();
/// locator.bind_self::<Clock>();
/// locator.bind_self::<Scheduler>();
///
/// let scheduler = locator.get::<Scheduler>().unwrap();
/// let _clock: &Clock = &scheduler.clock;
/// ```
pub trait Component: Any + Send + Sync + Sized {
  type Deps: Dependencies;

  fn construct(deps: Self::Deps) -> Self;
}

/// An ordered set of dependencies a [`Component`] is constructed from.
pub trait Dependencies: Sized {
  /// The identifiers to resolve, in argument order.
  fn keys() -> Vec<Key>;

  fn from_arguments(args: &mut Arguments) -> Result<Self>;
}

impl Dependencies for () {
  fn keys() -> Vec<Key> {
    Vec::new()
  }

  fn from_arguments(_: &mut Arguments) -> Result<Self> {
    Ok(())
  }
}

impl<T: ?Sized + Any + Send + Sync> Dependencies for Arc<T> {
  fn keys() -> Vec<Key> {
    vec![Key::of::<T>()]
  }

  fn from_arguments(args: &mut Arguments) -> Result<Self> {
    args.take::<T>()
  }
}

macro_rules! impl_dependencies_for_tuple {
  ($($dep:ident),+) => {
    impl<$($dep: ?Sized + Any + Send + Sync),+> Dependencies for ($(Arc<$dep>,)+) {
      fn keys() -> Vec<Key> {
        vec![$(Key::of::<$dep>()),+]
      }

      fn from_arguments(args: &mut Arguments) -> Result<Self> {
        Ok(($(args.take::<$dep>()?,)+))
      }
    }
  };
}

impl_dependencies_for_tuple!(A);
impl_dependencies_for_tuple!(A, B);
impl_dependencies_for_tuple!(A, B, C);
impl_dependencies_for_tuple!(A, B, C, D);
impl_dependencies_for_tuple!(A, B, C, D, E);
impl_dependencies_for_tuple!(A, B, C, D, E, F);
impl_dependencies_for_tuple!(A, B, C, D, E, F, G);
impl_dependencies_for_tuple!(A, B, C, D, E, F, G, H);

/// Marks `Self` as a valid producer for the identifier `I`.
///
/// Every type implements this for itself. For trait objects, implement it
/// with the [`implements!`](crate::implements) macro:
///
/// ```
/// use fibre_locator::implements;
///
/// trait Storage: Send + Sync {}
/// struct MemoryStorage;
/// impl Storage for MemoryStorage {}
///
/// implements!(MemoryStorage => dyn Storage);
/// ```
pub trait Implements<I: ?Sized>: Send + Sync + 'static {
  fn upcast(self: Arc<Self>) -> Arc<I>;
}

impl<T: Any + Send + Sync> Implements<T> for T {
  fn upcast(self: Arc<Self>) -> Arc<T> {
    self
  }
}
