//! Host runtime surface: the event bus and the sizing callback
//!
//! The host owns both halves of the banner contract. It dispatches named
//! events with JSON detail payloads to whoever subscribed, and it hands the
//! component a [`SizeReporter`] through which the component communicates the
//! height it wants the host to allocate.

use parking_lot::Mutex;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender, channel};
use tracing::debug;
use uuid::Uuid;

#[derive(Debug, Default)]
struct Registry {
    listeners: HashMap<String, Vec<Listener>>,
}

#[derive(Debug)]
struct Listener {
    token: Uuid,
    tx: Sender<Value>,
}

/// In-process event bus with named events and JSON detail payloads.
///
/// Cloning is cheap; clones share the same listener registry.
#[derive(Debug, Clone, Default)]
pub struct EventBus {
    registry: Arc<Mutex<Registry>>,
}

impl EventBus {
    /// Create an empty bus.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener for `event`.
    ///
    /// The returned [`Subscription`] receives every payload dispatched under
    /// `event` until it is dropped; dropping it deregisters the listener.
    #[must_use]
    pub fn subscribe(&self, event: impl Into<String>) -> Subscription {
        let event = event.into();
        let token = Uuid::new_v4();
        let (tx, rx) = channel();
        self.registry
            .lock()
            .listeners
            .entry(event.clone())
            .or_default()
            .push(Listener { token, tx });
        debug!(%event, %token, "listener registered");
        Subscription {
            event,
            token,
            rx,
            registry: Arc::clone(&self.registry),
        }
    }

    /// Dispatch `detail` to every listener registered under `event`.
    ///
    /// Returns the number of listeners the payload reached.
    pub fn dispatch(&self, event: &str, detail: &Value) -> usize {
        let registry = self.registry.lock();
        let mut delivered = 0;
        if let Some(listeners) = registry.listeners.get(event) {
            for listener in listeners {
                if listener.tx.send(detail.clone()).is_ok() {
                    delivered += 1;
                }
            }
        }
        debug!(%event, delivered, "event dispatched");
        delivered
    }

    /// Number of live listeners registered under `event`.
    #[must_use]
    pub fn listener_count(&self, event: &str) -> usize {
        self.registry
            .lock()
            .listeners
            .get(event)
            .map_or(0, Vec::len)
    }
}

/// RAII guard for a registered listener.
///
/// Holds the receiving end of the listener queue; dropping the guard removes
/// the listener from the bus.
#[derive(Debug)]
pub struct Subscription {
    event: String,
    token: Uuid,
    rx: Receiver<Value>,
    registry: Arc<Mutex<Registry>>,
}

impl Subscription {
    /// Event name this subscription is registered under.
    #[must_use]
    pub fn event(&self) -> &str {
        &self.event
    }

    /// Take the next pending payload, if any. Never blocks.
    #[must_use]
    pub fn try_next(&self) -> Option<Value> {
        self.rx.try_recv().ok()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let mut registry = self.registry.lock();
        if let Some(listeners) = registry.listeners.get_mut(&self.event) {
            listeners.retain(|listener| listener.token != self.token);
            if listeners.is_empty() {
                registry.listeners.remove(&self.event);
            }
        }
        debug!(event = %self.event, token = %self.token, "listener deregistered");
    }
}

/// Host-provided sizing callback.
///
/// The banner calls this after every processed render event with the pixel
/// height it wants the host to allocate for it.
pub trait SizeReporter: fmt::Debug {
    /// Record the component's desired height in pixels.
    fn report_height(&self, height: u32);
}

/// [`SizeReporter`] backed by a shared cell.
///
/// The dashboard keeps one clone and reads the latest reported value when
/// computing layout.
#[derive(Debug, Clone, Default)]
pub struct SharedHeight {
    px: Arc<Mutex<u32>>,
}

impl SharedHeight {
    /// Create a cell holding 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Latest reported height in pixels.
    #[must_use]
    pub fn get(&self) -> u32 {
        *self.px.lock()
    }
}

impl SizeReporter for SharedHeight {
    fn report_height(&self, height: u32) {
        *self.px.lock() = height;
        debug!(height, "frame height reported");
    }
}
