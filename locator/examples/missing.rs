use fibre_locator::{resolve, Component, ServiceLocator};
use std::panic;
use std::sync::Arc;

struct UnregisteredService;

struct Mailer {
  _transport: Arc<UnregisteredService>,
}
impl Component for Mailer {
  type Deps = Arc<UnregisteredService>;
  fn construct(transport: Arc<UnregisteredService>) -> Self {
    Mailer {
      _transport: transport,
    }
  }
}

fn main() {
  tracing_subscriber::fmt()
    .with_env_filter("fibre_locator=debug")
    .init();

  let locator = ServiceLocator::new();
  locator.bind_self::<Mailer>();

  // --- Using the panicking `resolve!` macro ---
  println!("Attempting to resolve a service that was never registered...");

  let result = panic::catch_unwind(|| {
    let locator = ServiceLocator::new();
    // This line will panic!
    let _service = resolve!(&locator, UnregisteredService);
  });

  assert!(result.is_err(), "resolve! should have panicked.");
  println!("Successfully caught the expected panic from resolve!.");

  // --- Using the fallible `get()` method ---
  println!("\nNow resolving a service whose dependency is missing...");

  match locator.get::<Mailer>() {
    Ok(_) => panic!("Should not have built the mailer!"),
    Err(err) => {
      println!("Resolution failed: {}", err);
      assert!(err.is_instantiation());
      println!(
        "Missing identifier: {}",
        err.unbound_key().map(ToString::to_string).unwrap_or_default()
      );
    }
  }
}
