//! Explicit producer descriptions: what a producer needs and how to build it.

use crate::binding::{downcast, erase, Instance, Lifetime};
use crate::component::{Component, Dependencies, Implements};
use crate::error::{Error, Result};
use crate::key::Key;
use std::any::{self, Any};
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

type BuildFn = Box<dyn Fn(&mut Arguments) -> Result<Instance> + Send + Sync>;

/// Describes a producer: the identifier it provides, the ordered list of
/// identifiers it depends on, and the function that builds it once those
/// dependencies have been resolved.
///
/// Types implementing [`Component`] get a descriptor for free through
/// [`Descriptor::component`]. Use [`Descriptor::builder`] when a producer
/// needs named dependencies or cannot implement `Component` itself.
///
/// ```
/// use fibre_locator::{Descriptor, Key, ServiceLocator};
/// use std::sync::Arc;
///
/// struct Banner(String);
///
/// let locator = ServiceLocator::new();
/// locator.bind_instance_named("title", String::from("fibre"));
/// locator.bind_descriptor(
///   Descriptor::builder::<Banner>()
///     .depends_on(Key::named::<String>("title"))
///     .build(|args| {
///       let title = args.take::<String>()?;
///       Ok(Arc::new(Banner(title.to_uppercase())))
///     }),
/// );
///
/// assert_eq!(locator.get::<Banner>().unwrap().0, "FIBRE");
/// ```
pub struct Descriptor {
  provides: Key,
  producer: &'static str,
  dependencies: Vec<Key>,
  lifetime: Lifetime,
  build: BuildFn,
}

impl Descriptor {
  /// Starts describing a producer for the identifier `I`.
  pub fn builder<I: ?Sized + Any + Send + Sync>() -> DescriptorBuilder<I> {
    DescriptorBuilder {
      producer: any::type_name::<I>(),
      dependencies: Vec::new(),
      lifetime: Lifetime::Transient,
      _marker: PhantomData,
    }
  }

  /// The descriptor of component `P` serving as a provider for `I`.
  pub fn component<I, P>() -> Self
  where
    I: ?Sized + Any + Send + Sync,
    P: Component + Implements<I>,
  {
    Self::builder::<I>()
      .producer::<P>()
      .depends_on_all(<P::Deps as Dependencies>::keys())
      .build(|args| {
        let deps = <P::Deps as Dependencies>::from_arguments(args)?;
        Ok(<P as Implements<I>>::upcast(Arc::new(P::construct(deps))))
      })
  }

  pub fn with_lifetime(mut self, lifetime: Lifetime) -> Self {
    self.lifetime = lifetime;
    self
  }

  pub fn provides(&self) -> &Key {
    &self.provides
  }

  /// Type name of the concrete producer.
  pub fn producer(&self) -> &'static str {
    self.producer
  }

  pub fn dependencies(&self) -> &[Key] {
    &self.dependencies
  }

  pub fn lifetime(&self) -> Lifetime {
    self.lifetime
  }

  pub(crate) fn with_name(mut self, name: &str) -> Self {
    self.provides = self.provides.with_name(name);
    self
  }

  pub(crate) fn build(&self, args: &mut Arguments) -> Result<Instance> {
    (self.build)(args)
  }
}

impl fmt::Debug for Descriptor {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Descriptor")
      .field("provides", &self.provides)
      .field("producer", &self.producer)
      .field("dependencies", &self.dependencies)
      .field("lifetime", &self.lifetime)
      .finish_non_exhaustive()
  }
}

/// Builder returned by [`Descriptor::builder`].
pub struct DescriptorBuilder<I: ?Sized> {
  producer: &'static str,
  dependencies: Vec<Key>,
  lifetime: Lifetime,
  _marker: PhantomData<fn() -> Arc<I>>,
}

impl<I: ?Sized + Any + Send + Sync> DescriptorBuilder<I> {
  /// Records `P` as the concrete producer, for diagnostics.
  pub fn producer<P: ?Sized + Any>(mut self) -> Self {
    self.producer = any::type_name::<P>();
    self
  }

  /// Appends a dependency. Dependencies are resolved, and handed to the
  /// build function, in the order they were declared.
  pub fn depends_on(mut self, key: Key) -> Self {
    self.dependencies.push(key);
    self
  }

  /// Appends the unnamed key of `T` as a dependency.
  pub fn depends_on_type<T: ?Sized + Any>(self) -> Self {
    self.depends_on(Key::of::<T>())
  }

  pub fn depends_on_all(mut self, keys: impl IntoIterator<Item = Key>) -> Self {
    self.dependencies.extend(keys);
    self
  }

  pub fn singleton(mut self) -> Self {
    self.lifetime = Lifetime::Singleton;
    self
  }

  pub fn build(
    self,
    build: impl Fn(&mut Arguments) -> Result<Arc<I>> + Send + Sync + 'static,
  ) -> Descriptor {
    Descriptor {
      provides: Key::of::<I>(),
      producer: self.producer,
      dependencies: self.dependencies,
      lifetime: self.lifetime,
      build: Box::new(move |args: &mut Arguments| build(args).map(erase)),
    }
  }
}

/// The resolved dependencies of a producer, handed out in declaration order.
pub struct Arguments {
  owner: Key,
  values: std::vec::IntoIter<(Key, Instance)>,
  total: usize,
}

impl Arguments {
  pub(crate) fn new(owner: Key, values: Vec<(Key, Instance)>) -> Self {
    Self {
      owner,
      total: values.len(),
      values: values.into_iter(),
    }
  }

  /// Takes the next argument as an `Arc<T>`.
  ///
  /// Fails with [`Error::Instantiation`] when the arguments are exhausted or
  /// the next one was declared as something other than `T`.
  pub fn take<T: ?Sized + Any + Send + Sync>(&mut self) -> Result<Arc<T>> {
    let position = self.total - self.values.len();
    let (key, value) = self.values.next().ok_or_else(|| {
      Error::instantiation(
        &self.owner,
        format!(
          "argument {} of type {} requested but only {} were declared",
          position,
          any::type_name::<T>(),
          self.total
        ),
      )
    })?;
    downcast::<T>(&value).ok_or_else(|| {
      Error::instantiation(
        &self.owner,
        format!(
          "argument {} is declared as {} but was taken as {}",
          position,
          key,
          any::type_name::<T>()
        ),
      )
    })
  }

  /// The number of arguments not yet taken.
  pub fn remaining(&self) -> usize {
    self.values.len()
  }

  /// The identifier being built.
  pub fn owner(&self) -> &Key {
    &self.owner
  }

  // Every declared argument must be consumed, otherwise the declared
  // dependencies and the build function disagree about arity.
  pub(crate) fn finish(self) -> Result<()> {
    match self.remaining() {
      0 => Ok(()),
      left => Err(Error::instantiation(
        &self.owner,
        format!("{} of {} declared arguments were never taken", left, self.total),
      )),
    }
  }
}
