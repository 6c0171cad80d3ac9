//! Traits & Injection - swapping implementations behind a trait

/// Something that can deliver a message to a recipient.
pub trait Notifier {
    fn send(&self, recipient: &str, message: &str) -> Result<(), String>;
}

/// "Sends" notifications by printing them.
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn send(&self, recipient: &str, message: &str) -> Result<(), String> {
        println!("to {}: {}", recipient, message);
        Ok(())
    }
}

/// Service that notifies through whatever Notifier it was given.
pub struct NotificationService<N: Notifier> {
    notifier: N,
}

impl<N: Notifier> NotificationService<N> {
    pub fn new(notifier: N) -> Self {
        Self { notifier }
    }

    /// Validate the recipient, then delegate to the injected notifier.
    pub fn notify(&self, recipient: &str, message: &str) -> Result<(), String> {
        if recipient.trim().is_empty() {
            return Err("recipient must not be empty".to_string());
        }
        self.notifier.send(recipient, message)
    }
}
