use fibre_locator::{Component, Descriptor, ServiceLocator};
use std::sync::{
  atomic::{AtomicUsize, Ordering},
  Arc,
};

// A simple service that gets a unique ID upon creation.
struct RequestTracker {
  id: usize,
}

static ID_COUNTER: AtomicUsize = AtomicUsize::new(0);

impl Component for RequestTracker {
  type Deps = ();
  fn construct(_: ()) -> Self {
    println!("Creating RequestTracker...");
    RequestTracker {
      id: ID_COUNTER.fetch_add(1, Ordering::SeqCst),
    }
  }
}

fn main() {
  let locator = ServiceLocator::new();

  // Constructed once, on first resolution.
  locator.bind_singleton_named::<RequestTracker, RequestTracker>("singleton_tracker");
  // Constructed on every resolution.
  locator.bind_descriptor_named(
    "transient_tracker",
    Descriptor::component::<RequestTracker, RequestTracker>(),
  );

  println!("--- Resolving Singletons ---");
  let s1 = locator.get_named::<RequestTracker>("singleton_tracker").unwrap();
  let s2 = locator.get_named::<RequestTracker>("singleton_tracker").unwrap();
  println!("Singleton 1 ID: {}, Singleton 2 ID: {}", s1.id, s2.id);
  assert_eq!(s1.id, 0);
  assert!(Arc::ptr_eq(&s1, &s2), "Singleton instances should be identical");

  println!("--- Resolving Transients ---");
  let t1 = locator.get_named::<RequestTracker>("transient_tracker").unwrap();
  let t2 = locator.get_named::<RequestTracker>("transient_tracker").unwrap();
  println!("Transient 1 ID: {}, Transient 2 ID: {}", t1.id, t2.id);
  assert_eq!(t1.id, 1);
  assert_eq!(t2.id, 2);
  assert!(!Arc::ptr_eq(&t1, &t2), "Transient instances should be different");
}
