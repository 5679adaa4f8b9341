use fibre_locator::{implements, resolve, Component, ServiceLocator};

// --- Abstraction and Implementations ---
trait MessageSender: Send + Sync {
  fn send(&self, to: &str, message: &str) -> String;
}

struct EmailSender;
impl MessageSender for EmailSender {
  fn send(&self, to: &str, message: &str) -> String {
    format!("Sending email to {}: '{}'", to, message)
  }
}
impl Component for EmailSender {
  type Deps = ();
  fn construct(_: ()) -> Self {
    EmailSender
  }
}

struct SmsSender;
impl MessageSender for SmsSender {
  fn send(&self, to: &str, message: &str) -> String {
    format!("Sending SMS to {}: '{}'", to, message)
  }
}
impl Component for SmsSender {
  type Deps = ();
  fn construct(_: ()) -> Self {
    SmsSender
  }
}

implements!(EmailSender => dyn MessageSender);
implements!(SmsSender => dyn MessageSender);

fn main() {
  let locator = ServiceLocator::new();

  // --- Registration ---
  // Bind both implementations of the same abstraction under different names.
  locator.bind_named::<dyn MessageSender, EmailSender>("email");
  locator.bind_named::<dyn MessageSender, SmsSender>("sms");

  // --- Resolution ---
  let email_notifier = resolve!(&locator, trait MessageSender, "email");
  let sms_notifier = resolve!(&locator, trait MessageSender, "sms");

  let result1 = email_notifier.send("test@example.com", "Hello from Fibre!");
  let result2 = sms_notifier.send("+123456789", "Hello from Fibre!");

  println!("{}", result1);
  println!("{}", result2);

  assert!(result1.contains("email"));
  assert!(result2.contains("SMS"));
}
