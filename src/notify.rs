//! Inbound payment notification dispatch
//!
//! The API pushes completed incoming transfers to the webhook URL the
//! merchant registered with `webhooks.create`. This crate does not own an
//! HTTP listener; the consuming application's webhook transport receives
//! the delivery and hands the raw JSON payload to
//! [`NotificationSink::dispatch`], which forwards it to the handler
//! registered via [`NotificationSink::register`].
//!
//! The sink is a single slot: the last registration wins and there is no
//! unregister operation. A delivery that arrives while no handler is
//! registered is dropped silently.

use std::fmt;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde_json::Value;

/// Handler invoked with the raw payload of each inbound payment delivery
pub type PaymentHandler = dyn Fn(Value) + Send + Sync;

/// Reference-counted payment handler
pub type PaymentHandlerArc = Arc<PaymentHandler>;

/// Single-slot registration point for inbound payment deliveries
#[derive(Default)]
pub struct NotificationSink {
    slot: RwLock<Option<PaymentHandlerArc>>,
}

impl NotificationSink {
    /// Create an empty sink
    pub fn new() -> Self {
        Self {
            slot: RwLock::new(None),
        }
    }

    /// Store `handler`, replacing any previous registration
    pub fn register(&self, handler: PaymentHandlerArc) {
        *self.write_slot() = Some(handler);
    }

    /// Whether a handler is currently registered
    pub fn is_registered(&self) -> bool {
        self.read_slot().is_some()
    }

    /// Deliver `payload` to the registered handler, if any
    ///
    /// The payload is passed through verbatim; its shape is owned by the
    /// server, not this client. With no handler registered the delivery is
    /// dropped without error.
    pub fn dispatch(&self, payload: Value) {
        // Clone the handle and release the lock before invoking, so a
        // handler that re-registers does not deadlock against its own call.
        let handler = self.read_slot().clone();
        match handler {
            Some(handler) => handler(payload),
            None => tracing::debug!("payment delivery dropped: no handler registered"),
        }
    }

    fn read_slot(&self) -> RwLockReadGuard<'_, Option<PaymentHandlerArc>> {
        match self.slot.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn write_slot(&self) -> RwLockWriteGuard<'_, Option<PaymentHandlerArc>> {
        match self.slot.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl fmt::Debug for NotificationSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let registered = self.is_registered();
        f.debug_struct("NotificationSink")
            .field("handler", if registered { &"<handler>" } else { &"None" })
            .finish()
    }
}
