//! # Fibre Locator
//!
//! A service locator and dependency-injection container for Rust.
//!
//! Fibre Locator maps identifiers (concrete types, trait objects, or named
//! keys) to bindings, and resolves a requested identifier into a fully
//! constructed object graph, recursively satisfying every producer's own
//! dependencies.
//!
//! ## Core Concepts
//!
//! - **ServiceLocator**: the registry of bindings and the resolver. Construct
//!   one explicitly and hand it to whatever bootstraps your application.
//! - **Literal bindings**: a pre-built value, handed out as the same `Arc` on
//!   every resolution and never reconstructed.
//! - **Producer bindings**: a [`Component`] (or a hand-written [`Descriptor`])
//!   whose declared dependencies are resolved, in order, before it is built.
//!   A new instance is built per resolution unless bound as a singleton.
//! - **Polymorphism**: bind a trait object to any type that
//!   [`implements!`] it, and resolving the trait yields that type.
//! - **Errors**: an unbound identifier anywhere in the graph fails the whole
//!   resolution with [`Error::Unbound`]; cycles fail with
//!   [`Error::CyclicDependency`].
//!
//! ## Quick Start
//!
//! ```
//! use fibre_locator::{implements, resolve, Component, ServiceLocator};
//! use std::sync::Arc;
//!
//! trait Greeter: Send + Sync {
//!   fn greet(&self) -> String;
//! }
//!
//! struct Message(String);
//!
//! struct EnglishGreeter {
//!   message: Arc<Message>,
//! }
//!
//! impl Greeter for EnglishGreeter {
//!   fn greet(&self) -> String {
//!     self.message.0.clone()
//!   }
//! }
//!
//! impl Component for EnglishGreeter {
//!   type Deps = Arc<Message>;
//!   fn construct(message: Arc<Message>) -> Self {
//!     EnglishGreeter { message }
//!   }
//! }
//! implements!(EnglishGreeter => dyn Greeter);
//!
//! let locator = ServiceLocator::new();
//! locator.bind_instance(Message("Hello, World!".to_string()));
//! locator.bind::<dyn Greeter, EnglishGreeter>();
//!
//! let greeter = resolve!(&locator, trait Greeter);
//! assert_eq!(greeter.greet(), "Hello, World!");
//! ```

mod binding;
mod component;
mod config;
mod descriptor;
mod error;
mod guard;
mod key;
mod locator;
mod macros;

pub use binding::{BindingInfo, Lifetime};
pub use component::{Component, Dependencies, Implements};
pub use config::{LocatorConfig, DEFAULT_MAX_DEPTH};
pub use descriptor::{Arguments, Descriptor, DescriptorBuilder};
pub use error::{Error, Result};
pub use key::Key;
pub use locator::ServiceLocator;
