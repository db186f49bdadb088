//! Connection-scoped push channel handle.
//!
//! ARCHITECTURE
//! ============
//! A `GameSocket` is created once per websocket connection and shared through
//! Leptos context. Listeners register per event name and get back a
//! `Subscription` guard; dropping or cancelling the guard removes exactly that
//! listener. A reconnect produces a new socket with a new identity, so
//! consumers can tell a fresh channel from the one they are already attached
//! to.

#[cfg(test)]
#[path = "socket_test.rs"]
mod socket_test;

use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError, Weak};

use futures::channel::mpsc::UnboundedSender;

use crate::net::types::{Frame, encode_frame};

type Handler = Arc<dyn Fn(&serde_json::Value) + Send + Sync>;

static NEXT_IDENTITY: AtomicU64 = AtomicU64::new(1);

#[derive(Default)]
struct Listeners {
    next_id: u64,
    by_event: HashMap<String, Vec<(u64, Handler)>>,
}

struct SocketInner {
    identity: u64,
    outbound: Option<UnboundedSender<String>>,
    listeners: Mutex<Listeners>,
}

impl SocketInner {
    fn remove(&self, event: &str, id: u64) {
        let mut listeners = self.listeners.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(handlers) = listeners.by_event.get_mut(event) {
            handlers.retain(|(handler_id, _)| *handler_id != id);
            if handlers.is_empty() {
                listeners.by_event.remove(event);
            }
        }
    }
}

/// Handle to one live connection's push channel and outbound queue.
#[derive(Clone)]
pub struct GameSocket {
    inner: Arc<SocketInner>,
}

impl GameSocket {
    /// Socket whose outbound frames are queued on `outbound` as JSON text.
    #[must_use]
    pub fn new(outbound: UnboundedSender<String>) -> Self {
        Self::build(Some(outbound))
    }

    /// Socket with no outbound transport; `emit` always reports failure.
    #[must_use]
    pub fn detached() -> Self {
        Self::build(None)
    }

    fn build(outbound: Option<UnboundedSender<String>>) -> Self {
        Self {
            inner: Arc::new(SocketInner {
                identity: NEXT_IDENTITY.fetch_add(1, Ordering::Relaxed),
                outbound,
                listeners: Mutex::new(Listeners::default()),
            }),
        }
    }

    /// Identity of the underlying connection. Unique per socket.
    #[must_use]
    pub fn identity(&self) -> u64 {
        self.inner.identity
    }

    /// Register `handler` for `event`. The listener lives as long as the guard.
    pub fn on(&self, event: &str, handler: impl Fn(&serde_json::Value) + Send + Sync + 'static) -> Subscription {
        let mut listeners = self.inner.listeners.lock().unwrap_or_else(PoisonError::into_inner);
        listeners.next_id += 1;
        let id = listeners.next_id;
        listeners
            .by_event
            .entry(event.to_owned())
            .or_default()
            .push((id, Arc::new(handler)));
        Subscription {
            socket: Arc::downgrade(&self.inner),
            identity: self.inner.identity,
            event: event.to_owned(),
            id,
        }
    }

    /// Number of live listeners for `event`.
    #[must_use]
    pub fn listener_count(&self, event: &str) -> usize {
        let listeners = self.inner.listeners.lock().unwrap_or_else(PoisonError::into_inner);
        listeners.by_event.get(event).map_or(0, Vec::len)
    }

    /// Deliver an inbound frame to the listeners for its syscall.
    ///
    /// Returns how many handlers ran. Handlers are called outside the lock,
    /// so they may subscribe or unsubscribe freely.
    pub fn dispatch(&self, frame: &Frame) -> usize {
        let handlers: Vec<Handler> = {
            let listeners = self.inner.listeners.lock().unwrap_or_else(PoisonError::into_inner);
            listeners
                .by_event
                .get(&frame.syscall)
                .map(|hs| hs.iter().map(|(_, h)| Arc::clone(h)).collect())
                .unwrap_or_default()
        };
        for handler in &handlers {
            handler(&frame.data);
        }
        handlers.len()
    }

    /// Queue a frame for the server. Fire-and-forget.
    ///
    /// Returns `false` when there is no transport or the connection is closed.
    pub fn emit(&self, frame: &Frame) -> bool {
        let Some(tx) = &self.inner.outbound else {
            return false;
        };
        match encode_frame(frame) {
            Ok(text) => tx.unbounded_send(text).is_ok(),
            Err(e) => {
                leptos::logging::warn!("failed to encode {} frame: {e}", frame.syscall);
                false
            }
        }
    }
}

impl PartialEq for GameSocket {
    fn eq(&self, other: &Self) -> bool {
        self.identity() == other.identity()
    }
}

impl fmt::Debug for GameSocket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameSocket")
            .field("identity", &self.inner.identity)
            .field("connected", &self.inner.outbound.is_some())
            .finish_non_exhaustive()
    }
}

/// Guard for one registered listener. Removing it is idempotent.
#[must_use = "dropping a Subscription removes its listener"]
pub struct Subscription {
    socket: Weak<SocketInner>,
    identity: u64,
    event: String,
    id: u64,
}

impl Subscription {
    /// Identity of the socket this listener is attached to.
    #[must_use]
    pub fn socket_identity(&self) -> u64 {
        self.identity
    }

    /// Remove the listener now.
    pub fn cancel(self) {
        drop(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.socket.upgrade() {
            inner.remove(&self.event, self.id);
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("socket", &self.identity)
            .field("event", &self.event)
            .field("id", &self.id)
            .finish()
    }
}
