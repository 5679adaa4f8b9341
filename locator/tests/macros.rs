//! Tests for the resolution and registration macros:
//! - `resolve!`
//! - `maybe_resolve!`
//! - `implements!`

use fibre_locator::{implements, maybe_resolve, resolve, Component, ServiceLocator};

// --- Test Fixtures ---

struct MacroTestService {
  value: i32,
}
trait MacroTestTrait: Send + Sync {
  fn value(&self) -> i32;
}
trait Describe: Send + Sync {
  fn describe(&self) -> String;
}
impl MacroTestTrait for MacroTestService {
  fn value(&self) -> i32 {
    self.value
  }
}
impl Describe for MacroTestService {
  fn describe(&self) -> String {
    format!("service #{}", self.value)
  }
}
impl Component for MacroTestService {
  type Deps = ();
  fn construct(_: ()) -> Self {
    MacroTestService { value: 7 }
  }
}
implements!(MacroTestService => dyn MacroTestTrait, dyn Describe);

struct UnregisteredService;

fn locator() -> ServiceLocator {
  let locator = ServiceLocator::new();
  locator.bind_self::<MacroTestService>();
  locator.bind_instance_named("named", MacroTestService { value: 43 });
  locator.bind::<dyn MacroTestTrait, MacroTestService>();
  locator.bind_named::<dyn Describe, MacroTestService>("named_trait");
  locator
}

// --- Tests ---

#[test]
fn test_resolve_all_arms() {
  let locator = locator();

  assert_eq!(resolve!(&locator, MacroTestService).value, 7);
  assert_eq!(resolve!(&locator, MacroTestService, "named").value, 43);
  assert_eq!(resolve!(&locator, trait MacroTestTrait).value(), 7);
  assert_eq!(
    resolve!(&locator, trait Describe, "named_trait").describe(),
    "service #7"
  );
}

#[test]
fn test_maybe_resolve() {
  let locator = locator();

  // Success cases
  assert_eq!(maybe_resolve!(&locator, MacroTestService).unwrap().value, 7);
  assert_eq!(
    maybe_resolve!(&locator, MacroTestService, "named")
      .unwrap()
      .value,
    43
  );
  assert_eq!(maybe_resolve!(&locator, trait MacroTestTrait).unwrap().value(), 7);

  // Failure cases
  assert!(maybe_resolve!(&locator, UnregisteredService).is_none());
  assert!(maybe_resolve!(&locator, MacroTestService, "missing_name").is_none());
  trait MissingTrait: Send + Sync {}
  assert!(maybe_resolve!(&locator, trait MissingTrait).is_none());
  assert!(maybe_resolve!(&locator, trait Describe).is_none());
}

#[test]
#[should_panic(expected = "Failed to resolve required service:")]
fn test_resolve_panics_on_missing_concrete_service() {
  let locator = ServiceLocator::new();
  resolve!(&locator, UnregisteredService);
}

#[test]
#[should_panic(expected = "no binding registered for")]
fn test_resolve_panic_carries_the_error() {
  let locator = ServiceLocator::new();
  resolve!(&locator, UnregisteredService, "anything");
}

#[test]
#[should_panic(expected = "Failed to resolve required trait service:")]
fn test_resolve_panics_on_missing_trait_service() {
  trait MissingTrait: Send + Sync {}
  let locator = ServiceLocator::new();
  resolve!(&locator, trait MissingTrait);
}
