//! Event dispatch system
//!
//! Pointer and surface lifecycle events routed to widget handlers.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

/// Event type identifier
pub type EventType = u32;

/// Event types consumed by counter widgets
pub mod event_types {
    use super::EventType;

    pub const POINTER_DOWN: EventType = 1;
    pub const POINTER_UP: EventType = 2;
    pub const POINTER_ENTER: EventType = 3;
    pub const POINTER_LEAVE: EventType = 4;

    // Surface lifecycle events
    /// Surface finished loading; elements are resolvable
    pub const READY: EventType = 10;
    pub const UNMOUNT: EventType = 11;
}

/// Dispatcher target for surface-scoped lifecycle events.
///
/// Element targets are never zero, so the surface itself owns this slot.
pub const SURFACE_TARGET: u64 = 0;

/// A UI event with associated data
#[derive(Clone, Debug)]
pub struct Event {
    pub event_type: EventType,
    pub target: u64, // Element target ID
    pub data: EventData,
    pub propagation_stopped: bool,
}

/// Event-specific data
#[derive(Clone, Debug, Default)]
pub enum EventData {
    Pointer { x: f32, y: f32, button: u8 },
    #[default]
    None,
}

impl Event {
    /// A data-less lifecycle event.
    pub fn lifecycle(event_type: EventType, target: u64) -> Self {
        Self {
            event_type,
            target,
            data: EventData::None,
            propagation_stopped: false,
        }
    }

    /// A pointer event at the given surface coordinates.
    pub fn pointer(event_type: EventType, target: u64, x: f32, y: f32) -> Self {
        Self {
            event_type,
            target,
            data: EventData::Pointer { x, y, button: 0 },
            propagation_stopped: false,
        }
    }

    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }
}

/// Event handler function type
pub type EventHandler = Box<dyn Fn(&Event) + Send + Sync>;

/// Dispatches events to registered handlers
pub struct EventDispatcher {
    handlers: FxHashMap<(u64, EventType), SmallVec<[EventHandler; 2]>>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self {
            handlers: FxHashMap::default(),
        }
    }

    /// Register an event handler for a target and event type
    pub fn register<F>(&mut self, target: u64, event_type: EventType, handler: F)
    where
        F: Fn(&Event) + Send + Sync + 'static,
    {
        self.handlers
            .entry((target, event_type))
            .or_default()
            .push(Box::new(handler));
    }

    /// Dispatch an event to all registered handlers
    pub fn dispatch(&self, event: &mut Event) {
        if let Some(handlers) = self.handlers.get(&(event.target, event.event_type)) {
            for handler in handlers {
                if event.propagation_stopped {
                    break;
                }
                handler(event);
            }
        }
    }
}

impl Default for EventDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    const BUTTON: u64 = 7;

    #[test]
    fn test_dispatch_reaches_registered_handler() {
        let hits = Arc::new(AtomicU32::new(0));
        let hits_clone = hits.clone();

        let mut dispatcher = EventDispatcher::new();
        dispatcher.register(BUTTON, event_types::POINTER_UP, move |_| {
            hits_clone.fetch_add(1, Ordering::SeqCst);
        });

        let mut event = Event::pointer(event_types::POINTER_UP, BUTTON, 0.0, 0.0);
        dispatcher.dispatch(&mut event);
        dispatcher.dispatch(&mut event);
        assert_eq!(hits.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_dispatch_ignores_other_targets_and_types() {
        let hits = Arc::new(AtomicU32::new(0));
        let hits_clone = hits.clone();

        let mut dispatcher = EventDispatcher::new();
        dispatcher.register(BUTTON, event_types::POINTER_UP, move |_| {
            hits_clone.fetch_add(1, Ordering::SeqCst);
        });

        let mut other_target = Event::pointer(event_types::POINTER_UP, BUTTON + 1, 0.0, 0.0);
        dispatcher.dispatch(&mut other_target);
        let mut other_type = Event::pointer(event_types::POINTER_DOWN, BUTTON, 0.0, 0.0);
        dispatcher.dispatch(&mut other_type);
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_lifecycle_events_use_surface_target() {
        let hits = Arc::new(AtomicU32::new(0));
        let hits_clone = hits.clone();

        let mut dispatcher = EventDispatcher::new();
        dispatcher.register(SURFACE_TARGET, event_types::READY, move |_| {
            hits_clone.fetch_add(1, Ordering::SeqCst);
        });

        let mut ready = Event::lifecycle(event_types::READY, SURFACE_TARGET);
        dispatcher.dispatch(&mut ready);
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }
}
