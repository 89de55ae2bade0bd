//! User-visible notification sink.
//!
//! The cart reports outcomes through fire-and-forget messages, the
//! server-side stand-in for a toast. Delivery is best-effort and ordered
//! only by call order relative to state changes.

use std::sync::{Arc, Mutex};

/// Fixed notification texts emitted by the cart store.
pub mod messages {
    /// Emitted when a requested quantity exceeds the available stock.
    pub const OUT_OF_STOCK: &str = "Requested quantity is out of stock";
    /// Emitted when adding a product fails for any other reason.
    pub const ADD_FAILED: &str = "Could not add product to cart";
    /// Emitted when removing a product fails.
    pub const REMOVE_FAILED: &str = "Could not remove product from cart";
    /// Emitted when changing a product quantity fails for any other reason.
    pub const UPDATE_FAILED: &str = "Could not change product quantity";
}

/// Sink for transient user-visible error messages.
pub trait Notifier {
    /// Report an error-severity message. Fire-and-forget, no return value.
    fn error(&self, message: &str);
}

/// Notifier that logs messages at ERROR level through `tracing`.
///
/// The default sink for headless embedders; a UI layer would subscribe to
/// the `shopcart::toast` target and surface these as toasts.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn error(&self, message: &str) {
        tracing::error!(target: "shopcart::toast", "{message}");
    }
}

/// Notifier that buffers messages in memory.
///
/// Clones share the same buffer, so a test can keep a handle while the
/// store owns another.
#[derive(Debug, Clone, Default)]
pub struct BufferedNotifier {
    buffer: Arc<Mutex<Vec<String>>>,
}

impl BufferedNotifier {
    /// Create an empty buffering notifier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All messages received so far, in call order.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.buffer.lock().map_or_else(|_| Vec::new(), |b| b.clone())
    }
}

impl Notifier for BufferedNotifier {
    fn error(&self, message: &str) {
        if let Ok(mut buffer) = self.buffer.lock() {
            buffer.push(message.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffered_notifier_records_in_order() {
        let notifier = BufferedNotifier::new();
        notifier.error("first");
        notifier.error("second");
        assert_eq!(notifier.messages(), vec!["first", "second"]);
    }

    #[test]
    fn test_buffered_notifier_clones_share_buffer() {
        let notifier = BufferedNotifier::new();
        let handle = notifier.clone();
        notifier.error(messages::OUT_OF_STOCK);
        assert_eq!(handle.messages(), vec![messages::OUT_OF_STOCK]);
    }
}
