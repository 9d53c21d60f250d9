#![forbid(unsafe_code)]

//! Interaction event delivery.
//!
//! At build time, each interactive element is paired with a [`PressCallback`]
//! registered through [`RenderContext::register`]. The callback captures only
//! the element's handle. When the host reports a press, the context assembles
//! the event payload — the handle under `id`, the current screen marker under
//! `screen`, plus any extra fields — and forwards it through the one
//! owner-supplied [`EventSink`]. Delivery is fire-and-forget: no batching, no
//! queuing, no return value.
//!
//! Replacing the active template does not invalidate callbacks registered
//! against the previous one; a stale callback fires with its
//! registration-time handle and whatever the screen marker is at fire time.

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use carui_model::InteractionHandle;

/// The payload delivered to the owner for one interaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionEvent {
    /// The pressed element's handle.
    pub id: InteractionHandle,
    /// The screen marker at fire time.
    pub screen: String,
    /// Extra fields supplied by the firing site.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl InteractionEvent {
    /// The payload as one JSON object: `{"id": ..., "screen": ..., ...extra}`.
    ///
    /// `id` and `screen` are written last, so extra fields can never mask
    /// them.
    #[must_use]
    pub fn to_value(&self) -> Value {
        let mut object = self.extra.clone();
        object.insert("id".to_string(), Value::from(self.id.0));
        object.insert("screen".to_string(), Value::from(self.screen.clone()));
        Value::Object(object)
    }
}

/// The owner-supplied sink every interaction event is forwarded through.
pub trait EventSink: Send + Sync {
    /// Receive one event. Called on the host's interaction-delivery thread.
    fn deliver(&self, event: InteractionEvent);
}

impl<F> EventSink for F
where
    F: Fn(InteractionEvent) + Send + Sync,
{
    fn deliver(&self, event: InteractionEvent) {
        self(event);
    }
}

struct ContextInner {
    sink: Box<dyn EventSink>,
    screen_marker: Mutex<String>,
}

/// Shared context tying interactive elements back to the owner.
///
/// Cheap to clone; all clones share the same sink and screen marker. The
/// marker is read at fire time, so events fired after a marker update carry
/// the new value even when their callback was registered earlier.
#[derive(Clone)]
pub struct RenderContext {
    inner: Arc<ContextInner>,
}

impl std::fmt::Debug for RenderContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderContext")
            .field("screen_marker", &self.screen_marker())
            .finish()
    }
}

impl RenderContext {
    /// Create a context from the initial screen marker and the owner's sink.
    #[must_use]
    pub fn new(screen_marker: impl Into<String>, sink: impl EventSink + 'static) -> Self {
        Self {
            inner: Arc::new(ContextInner {
                sink: Box::new(sink),
                screen_marker: Mutex::new(screen_marker.into()),
            }),
        }
    }

    /// The current screen marker.
    #[must_use]
    pub fn screen_marker(&self) -> String {
        let marker = match self.inner.screen_marker.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        marker.clone()
    }

    /// Replace the screen marker. Events fired afterwards carry the new
    /// marker, including events from callbacks registered before the change.
    pub fn set_screen_marker(&self, marker: impl Into<String>) {
        let mut guard = match self.inner.screen_marker.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        *guard = marker.into();
    }

    /// Register a handle, producing the callback the host stores on the
    /// built element.
    #[must_use]
    pub fn register(&self, handle: InteractionHandle) -> PressCallback {
        PressCallback {
            context: self.clone(),
            handle,
        }
    }

    /// Fire an interaction for the given handle with no extra fields.
    pub fn fire(&self, handle: InteractionHandle) {
        self.fire_with(handle, Map::new());
    }

    /// Fire an interaction for the given handle with extra payload fields.
    pub fn fire_with(&self, handle: InteractionHandle, extra: Map<String, Value>) {
        let event = InteractionEvent {
            id: handle,
            screen: self.screen_marker(),
            extra,
        };
        debug!(handle = handle.0, screen = %event.screen, "delivering interaction event");
        self.inner.sink.deliver(event);
    }
}

/// A zero-argument callback stored by the host for one interactive element.
///
/// Invoking it fires the captured handle through the owning context's sink.
#[derive(Debug, Clone)]
pub struct PressCallback {
    context: RenderContext,
    handle: InteractionHandle,
}

impl PressCallback {
    /// The captured handle.
    #[must_use]
    pub fn handle(&self) -> InteractionHandle {
        self.handle
    }

    /// Fire the captured handle.
    pub fn invoke(&self) {
        self.context.fire(self.handle);
    }
}
