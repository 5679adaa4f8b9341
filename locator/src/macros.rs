//! Public macros for ergonomic resolution and trait registration.

/// Resolves a service from a locator, panicking if it cannot be resolved.
///
/// Use this where a missing binding is a programming error. For a fallible
/// version, call [`ServiceLocator::get`](crate::ServiceLocator::get) or use
/// [`maybe_resolve!`].
///
/// # Panics
///
/// Panics with the type name and the resolution error if resolution fails.
///
/// # Examples
///
/// ```
/// use fibre_locator::{implements, resolve, Component, ServiceLocator};
/// use std::sync::Arc;
///
/// trait Greeter: Send + Sync { fn greet(&self) -> String; }
///
/// struct EnglishGreeter;
/// impl Greeter for EnglishGreeter { fn greet(&self) -> String { "Hello!".to_string() } }
/// impl Component for EnglishGreeter {
///   type Deps = ();
///   fn construct(_: ()) -> Self { EnglishGreeter }
/// }
/// implements!(EnglishGreeter => dyn Greeter);
///
/// let locator = ServiceLocator::new();
/// locator.bind::<dyn Greeter, EnglishGreeter>();
/// locator.bind_instance_named("motd", String::from("hello"));
///
/// assert_eq!(resolve!(&locator, trait Greeter).greet(), "Hello!");
/// assert_eq!(*resolve!(&locator, String, "motd"), "hello");
/// ```
#[macro_export]
macro_rules! resolve {
  // resolve!(locator, trait MyTrait)
  ($locator:expr, trait $trait_ident:ident) => {
    $locator
      .get::<dyn $trait_ident>()
      .unwrap_or_else(|err| {
        panic!(
          "Failed to resolve required trait service: {}: {}",
          std::any::type_name::<dyn $trait_ident>(),
          err
        )
      })
  };

  // resolve!(locator, trait MyTrait, "name")
  ($locator:expr, trait $trait_ident:ident, $name:expr) => {
    $locator
      .get_named::<dyn $trait_ident>($name)
      .unwrap_or_else(|err| {
        panic!(
          "Failed to resolve required trait service with name '{}': {}: {}",
          $name,
          std::any::type_name::<dyn $trait_ident>(),
          err
        )
      })
  };

  // resolve!(locator, MyService)
  ($locator:expr, $type:ty) => {
    $locator.get::<$type>().unwrap_or_else(|err| {
      panic!(
        "Failed to resolve required service: {}: {}",
        std::any::type_name::<$type>(),
        err
      )
    })
  };

  // resolve!(locator, MyService, "name")
  ($locator:expr, $type:ty, $name:expr) => {
    $locator.get_named::<$type>($name).unwrap_or_else(|err| {
      panic!(
        "Failed to resolve required service with name '{}': {}: {}",
        $name,
        std::any::type_name::<$type>(),
        err
      )
    })
  };
}

/// Resolves a service from a locator, returning `None` if it cannot be
/// resolved. Takes the same arguments as [`resolve!`].
#[macro_export]
macro_rules! maybe_resolve {
  ($locator:expr, trait $trait_ident:ident) => {
    $locator.get::<dyn $trait_ident>().ok()
  };
  ($locator:expr, trait $trait_ident:ident, $name:expr) => {
    $locator.get_named::<dyn $trait_ident>($name).ok()
  };
  ($locator:expr, $type:ty) => {
    $locator.get::<$type>().ok()
  };
  ($locator:expr, $type:ty, $name:expr) => {
    $locator.get_named::<$type>($name).ok()
  };
}

/// Declares that a concrete type can be served for one or more trait-object
/// identifiers, by implementing [`Implements`](crate::Implements).
///
/// ```
/// use fibre_locator::implements;
///
/// trait Reader: Send + Sync {}
/// trait Writer: Send + Sync {}
/// struct File;
/// impl Reader for File {}
/// impl Writer for File {}
///
/// implements!(File => dyn Reader, dyn Writer);
/// ```
#[macro_export]
macro_rules! implements {
  ($concrete:ty => $($iface:ty),+ $(,)?) => {
    $(
      impl $crate::Implements<$iface> for $concrete {
        fn upcast(self: ::std::sync::Arc<Self>) -> ::std::sync::Arc<$iface> {
          self
        }
      }
    )+
  };
}
