//! Event listeners tied to Rust ownership
//!
//! A `Closure` handed to `addEventListener` must outlive the listener.
//! Rather than leaking it with `Closure::forget()`, [`EventListener`] keeps
//! the closure and removes the listener when dropped:
//!
//! ```ignore
//! let listener = EventListener::new(&document, "keydown", callback);
//! // ...
//! drop(listener); // listener detached
//! ```

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget};

/// A DOM event listener that removes itself when dropped.
pub struct EventListener {
    target: EventTarget,
    event_name: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl EventListener {
    /// Attaches `callback` to `target` for `event_name`.
    pub fn new(
        target: &EventTarget,
        event_name: &'static str,
        callback: impl FnMut(Event) + 'static,
    ) -> Self {
        let callback: Closure<dyn FnMut(Event)> = Closure::wrap(Box::new(callback));

        if let Err(e) =
            target.add_event_listener_with_callback(event_name, callback.as_ref().unchecked_ref())
        {
            tracing::warn!("Failed to attach {} listener: {:?}", event_name, e);
        }

        Self {
            target: target.clone(),
            event_name,
            callback,
        }
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        let _ = self.target.remove_event_listener_with_callback(
            self.event_name,
            self.callback.as_ref().unchecked_ref(),
        );
    }
}
