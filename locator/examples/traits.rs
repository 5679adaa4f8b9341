use fibre_locator::{implements, resolve, Component, LocatorConfig, ServiceLocator};
use std::sync::Arc;

// 1. Define the abstraction (the trait)
trait Logger: Send + Sync {
  fn log(&self, message: &str);
}

// 2. Define a concrete implementation
struct ConsoleLogger;
impl Logger for ConsoleLogger {
  fn log(&self, message: &str) {
    println!("[CONSOLE LOG]: {}", message);
  }
}
impl Component for ConsoleLogger {
  type Deps = ();
  fn construct(_: ()) -> Self {
    ConsoleLogger
  }
}
implements!(ConsoleLogger => dyn Logger);

struct ReportTitle(String);

// 3. Define a service that depends on the abstraction
struct ReportService {
  logger: Arc<dyn Logger>,
  title: Arc<ReportTitle>,
}

impl Component for ReportService {
  type Deps = (Arc<dyn Logger>, Arc<ReportTitle>);
  fn construct((logger, title): (Arc<dyn Logger>, Arc<ReportTitle>)) -> Self {
    ReportService { logger, title }
  }
}

impl ReportService {
  fn generate_report(&self) {
    self.logger.log(&format!("Starting report '{}'.", self.title.0));
    self.logger.log("Finished report generation.");
  }
}

fn main() {
  tracing_subscriber::fmt()
    .with_env_filter("fibre_locator=trace")
    .init();

  let locator = ServiceLocator::with_config(LocatorConfig::new().with_max_depth(16));

  // --- Registration ---
  // The locator builds a ConsoleLogger but serves it as Arc<dyn Logger>.
  locator.bind::<dyn Logger, ConsoleLogger>();
  locator.bind_instance(ReportTitle("Quarterly numbers".to_string()));
  // ReportService never creates its logger; the locator hands it one.
  locator.bind_self::<ReportService>();

  // --- Resolution and Usage ---
  println!("Resolving the high-level service...");
  let report_service = resolve!(&locator, ReportService);

  println!("Using the service...");
  report_service.generate_report();
}
