//! The `ServiceLocator`: binding registry and resolver.

use crate::binding::{downcast, Binding, BindingInfo, Instance, Lifetime};
use crate::component::{Component, Implements};
use crate::config::LocatorConfig;
use crate::descriptor::{Arguments, Descriptor};
use crate::error::{Error, Result};
use crate::guard::ResolutionPath;
use crate::key::Key;
use dashmap::DashMap;
use std::any::Any;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tracing::{debug, trace};

/// A registry of bindings and the resolver that turns identifiers into
/// fully constructed object graphs.
///
/// Identifiers are bound either to a literal value, handed out as the same
/// `Arc` on every request, or to a producer, whose declared dependencies are
/// resolved recursively before it is constructed. Producers are transient
/// unless bound as singletons.
///
/// The locator is thread-safe: bindings may be added from any thread, and
/// rebinding an identifier replaces its previous binding.
#[derive(Default)]
pub struct ServiceLocator {
  bindings: DashMap<Key, Arc<Binding>>,
  config: LocatorConfig,
}

impl ServiceLocator {
  /// Creates a new, empty `ServiceLocator`.
  pub fn new() -> Self {
    Self::default()
  }

  /// Creates a new, empty `ServiceLocator` using `config`.
  pub fn with_config(config: LocatorConfig) -> Self {
    Self {
      bindings: DashMap::new(),
      config,
    }
  }

  pub fn config(&self) -> &LocatorConfig {
    &self.config
  }

  // --- PRIVATE HELPERS ---

  fn insert(&self, key: Key, binding: Binding) {
    let info = binding.info();
    let replaced = self.bindings.insert(key.clone(), Arc::new(binding)).is_some();
    debug!(key = %key, binding = ?info, replaced, "bound identifier");
  }

  fn bind_descriptor_internal(&self, name: Option<&str>, descriptor: Descriptor) {
    let descriptor = match name {
      Some(n) => descriptor.with_name(n),
      None => descriptor,
    };
    self.insert(descriptor.provides().clone(), Binding::producer(descriptor));
  }

  fn resolve(&self, key: &Key, path: &mut ResolutionPath) -> Result<Instance> {
    let mut path = path.enter(key, self.config.max_depth)?;
    trace!(key = %key, depth = path.depth(), "resolving");

    // Clone the binding out so the shard lock is released before recursing.
    let binding = self
      .bindings
      .get(key)
      .map(|entry| Arc::clone(entry.value()))
      .ok_or_else(|| Error::Unbound { key: key.clone() })?;

    match &*binding {
      Binding::Literal { value, .. } => {
        trace!(key = %key, "literal binding");
        Ok(Arc::clone(value))
      }
      Binding::Producer { descriptor, cell } => match descriptor.lifetime() {
        Lifetime::Transient => self.construct(key, descriptor, &mut path),
        Lifetime::Singleton => {
          // Another thread may hold a cell further along the cycle, so the
          // cycle must be found before this cell is locked.
          if cell.get().is_none() {
            self.check_cycles_from(key)?;
          }
          cell
            .get_or_try_init(|| self.construct(key, descriptor, &mut path))
            .map(Arc::clone)
        }
      },
    }
  }

  fn construct(
    &self,
    key: &Key,
    descriptor: &Descriptor,
    path: &mut ResolutionPath,
  ) -> Result<Instance> {
    let mut values = Vec::with_capacity(descriptor.dependencies().len());
    for dependency in descriptor.dependencies() {
      let value = self.resolve(dependency, path).map_err(|source| match source {
        // A cycle already carries the whole chain.
        Error::CyclicDependency { .. } => source,
        source => Error::Dependency {
          key: key.clone(),
          source: Box::new(source),
        },
      })?;
      values.push((dependency.clone(), value));
    }

    let mut args = Arguments::new(key.clone(), values);
    let instance = descriptor.build(&mut args)?;
    args.finish()?;
    trace!(key = %key, producer = descriptor.producer(), "constructed instance");
    Ok(instance)
  }

  // Walks the declared dependency graph reachable from `key` and fails on the
  // first cycle. Initialized singletons never resolve their dependencies
  // again, so the walk stops at them.
  fn check_cycles_from(&self, key: &Key) -> Result<()> {
    let dependencies = |k: &Key| {
      self
        .bindings
        .get(k)
        .map(|entry| match &**entry.value() {
          Binding::Producer { cell, .. } if cell.get().is_some() => Vec::new(),
          binding => binding.dependencies().to_vec(),
        })
        .unwrap_or_default()
    };

    let mut problems = Vec::new();
    find_cycles(
      &dependencies,
      key,
      &mut Vec::new(),
      &mut HashSet::new(),
      &mut problems,
    );
    match problems.into_iter().next() {
      Some(cycle) => Err(cycle),
      None => Ok(()),
    }
  }

  fn get_internal<I: ?Sized + Any + Send + Sync>(&self, key: &Key) -> Result<Arc<I>> {
    let instance = self
      .resolve(key, &mut ResolutionPath::new())
      .inspect_err(|err| debug!(key = %key, error = %err, "resolution failed"))?;
    downcast::<I>(&instance)
      .ok_or_else(|| Error::instantiation(key, "resolved value has an unexpected type"))
  }

  // --- PUBLIC API ---

  // --- Literal Registration ---

  /// Binds `T`'s identifier to `value`. Every resolution hands out the same
  /// `Arc`; the value is never reconstructed.
  pub fn bind_instance<T: Any + Send + Sync>(&self, value: T) {
    self.bind_shared(Arc::new(value));
  }
  pub fn bind_instance_named<T: Any + Send + Sync>(&self, name: &str, value: T) {
    self.bind_shared_named(name, Arc::new(value));
  }

  /// Binds `I`'s identifier to an already shared value, which may be a
  /// trait object. Resolutions return clones of this exact `Arc`.
  pub fn bind_shared<I: ?Sized + Any + Send + Sync>(&self, value: Arc<I>) {
    self.insert(Key::of::<I>(), Binding::literal(value));
  }
  pub fn bind_shared_named<I: ?Sized + Any + Send + Sync>(&self, name: &str, value: Arc<I>) {
    self.insert(Key::named::<I>(name), Binding::literal(value));
  }

  // --- Producer Registration ---

  /// Binds the identifier `I` to the producer `P`. Each resolution of `I`
  /// constructs a new `P` from freshly resolved dependencies.
  pub fn bind<I, P>(&self)
  where
    I: ?Sized + Any + Send + Sync,
    P: Component + Implements<I>,
  {
    self.bind_descriptor_internal(None, Descriptor::component::<I, P>());
  }
  pub fn bind_named<I, P>(&self, name: &str)
  where
    I: ?Sized + Any + Send + Sync,
    P: Component + Implements<I>,
  {
    self.bind_descriptor_internal(Some(name), Descriptor::component::<I, P>());
  }

  /// Binds `T` to itself.
  pub fn bind_self<T: Component>(&self) {
    self.bind::<T, T>();
  }

  /// Like [`bind`](Self::bind), but `P` is constructed once, on the first
  /// successful resolution, and shared afterwards.
  pub fn bind_singleton<I, P>(&self)
  where
    I: ?Sized + Any + Send + Sync,
    P: Component + Implements<I>,
  {
    let descriptor = Descriptor::component::<I, P>().with_lifetime(Lifetime::Singleton);
    self.bind_descriptor_internal(None, descriptor);
  }
  pub fn bind_singleton_named<I, P>(&self, name: &str)
  where
    I: ?Sized + Any + Send + Sync,
    P: Component + Implements<I>,
  {
    let descriptor = Descriptor::component::<I, P>().with_lifetime(Lifetime::Singleton);
    self.bind_descriptor_internal(Some(name), descriptor);
  }

  /// Binds the identifier the descriptor provides.
  pub fn bind_descriptor(&self, descriptor: Descriptor) {
    self.bind_descriptor_internal(None, descriptor);
  }
  pub fn bind_descriptor_named(&self, name: &str, descriptor: Descriptor) {
    self.bind_descriptor_internal(Some(name), descriptor);
  }

  // --- Lookup ---

  /// Describes the binding for `key` without constructing anything.
  pub fn lookup(&self, key: &Key) -> Option<BindingInfo> {
    self.bindings.get(key).map(|entry| entry.value().info())
  }

  pub fn contains(&self, key: &Key) -> bool {
    self.bindings.contains_key(key)
  }

  pub fn len(&self) -> usize {
    self.bindings.len()
  }

  pub fn is_empty(&self) -> bool {
    self.bindings.is_empty()
  }

  /// A snapshot of every bound identifier, in no particular order.
  pub fn keys(&self) -> Vec<Key> {
    self.bindings.iter().map(|entry| entry.key().clone()).collect()
  }

  // --- Resolution ---

  /// Resolves `I`, constructing producers and their dependencies as needed.
  ///
  /// Fails with [`Error::Unbound`] if `I`, or anything it transitively
  /// depends on, has no binding, and with [`Error::CyclicDependency`] if the
  /// bindings loop back on themselves.
  pub fn get<I: ?Sized + Any + Send + Sync>(&self) -> Result<Arc<I>> {
    self.get_internal(&Key::of::<I>())
  }
  pub fn get_named<I: ?Sized + Any + Send + Sync>(&self, name: &str) -> Result<Arc<I>> {
    self.get_internal(&Key::named::<I>(name))
  }

  /// Checks every binding's declared dependencies without constructing
  /// anything, returning one error per unbound dependency and per cycle.
  ///
  /// Resolution never calls this; bindings are only ever checked lazily.
  pub fn verify(&self) -> Vec<Error> {
    let graph: HashMap<Key, Vec<Key>> = self
      .bindings
      .iter()
      .map(|entry| (entry.key().clone(), entry.value().dependencies().to_vec()))
      .collect();

    let mut problems = Vec::new();
    for (key, dependencies) in &graph {
      for dependency in dependencies {
        if !graph.contains_key(dependency) {
          problems.push(Error::Dependency {
            key: key.clone(),
            source: Box::new(Error::Unbound {
              key: dependency.clone(),
            }),
          });
        }
      }
    }

    let dependencies = |k: &Key| graph.get(k).cloned().unwrap_or_default();
    let mut finished = HashSet::new();
    for key in graph.keys() {
      let mut stack = Vec::new();
      find_cycles(&dependencies, key, &mut stack, &mut finished, &mut problems);
    }
    problems
  }
}

// Depth-first walk reporting every back edge as a cycle. `finished` holds keys
// whose whole subgraph has already been walked.
fn find_cycles(
  dependencies: &dyn Fn(&Key) -> Vec<Key>,
  key: &Key,
  stack: &mut Vec<Key>,
  finished: &mut HashSet<Key>,
  problems: &mut Vec<Error>,
) {
  if finished.contains(key) {
    return;
  }
  if let Some(start) = stack.iter().position(|k| k == key) {
    let mut path = stack[start..].to_vec();
    path.push(key.clone());
    problems.push(Error::CyclicDependency { path });
    return;
  }

  stack.push(key.clone());
  for dependency in dependencies(key) {
    find_cycles(dependencies, &dependency, stack, finished, problems);
  }
  stack.pop();
  finished.insert(key.clone());
}
