//! UI surface abstraction
//!
//! The counter widget is written against [`Surface`], a small capability
//! trait: resolve named elements, render text into them, and subscribe to
//! ready and click events. [`HeadlessSurface`] is the in-process
//! implementation used by tests, the scenario runner, and the CLI; a
//! toolkit-backed surface would implement the same trait.

use crate::error::{Result, TallyError};
use rustc_hash::FxHashMap;
use slotmap::{new_key_type, Key, SlotMap};
use std::sync::{Mutex, RwLock};
use tally_core::events::{event_types, Event, EventDispatcher, EventHandler, SURFACE_TARGET};

new_key_type! {
    /// Unique identifier for an element registered on a surface
    pub struct ElementId;
}

impl ElementId {
    /// Dispatcher target for this element. Never zero, so it cannot
    /// collide with [`SURFACE_TARGET`].
    pub fn target(self) -> u64 {
        self.data().as_ffi()
    }
}

/// Roles an element can play for the counter widget
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ElementRole {
    /// Heading whose text mirrors the current count
    Display,
    /// Clickable control that advances the count
    Trigger,
}

/// An element registered on a surface
#[derive(Clone, Debug)]
pub struct Element {
    pub name: String,
    pub role: ElementRole,
    /// Rendered text content, `None` until something renders into it
    pub text: Option<String>,
}

/// Name-to-text snapshot of a surface, used by headless assertions.
#[derive(Debug, Clone, Default)]
pub struct SurfaceSnapshot {
    pub elements: FxHashMap<String, Option<String>>,
}

/// Capability trait the counter widget is wired against.
pub trait Surface: Send + Sync {
    /// Resolve an element by name.
    fn resolve(&self, name: &str) -> Result<ElementId>;

    /// Render text into an element.
    fn set_text(&self, id: ElementId, text: &str) -> Result<()>;

    /// Currently rendered text of an element, if any.
    fn text(&self, id: ElementId) -> Option<String>;

    /// Subscribe to the surface ready lifecycle event.
    fn on_ready(&self, handler: EventHandler);

    /// Subscribe to clicks on an element.
    fn on_click(&self, id: ElementId, handler: EventHandler);

    /// Deliver an event to subscribed handlers.
    fn emit(&self, event: Event);
}

/// In-process surface for tests, the scenario runner, and the CLI.
pub struct HeadlessSurface {
    elements: RwLock<SlotMap<ElementId, Element>>,
    by_name: RwLock<FxHashMap<String, ElementId>>,
    dispatcher: Mutex<EventDispatcher>,
}

impl HeadlessSurface {
    pub fn new() -> Self {
        Self {
            elements: RwLock::new(SlotMap::with_key()),
            by_name: RwLock::new(FxHashMap::default()),
            dispatcher: Mutex::new(EventDispatcher::new()),
        }
    }

    /// Register an element under a name. A later registration with the
    /// same name wins lookups.
    pub fn add_element(&self, name: &str, role: ElementRole) -> ElementId {
        let id = self.elements.write().unwrap().insert(Element {
            name: name.to_string(),
            role,
            text: None,
        });
        self.by_name.write().unwrap().insert(name.to_string(), id);
        id
    }

    /// Look up a registered element.
    pub fn element(&self, id: ElementId) -> Option<Element> {
        self.elements.read().unwrap().get(id).cloned()
    }

    /// Fire the surface ready lifecycle event.
    pub fn fire_ready(&self) {
        self.emit(Event::lifecycle(event_types::READY, SURFACE_TARGET));
    }

    /// Simulate a click: pointer down followed by pointer up on the target.
    pub fn click(&self, id: ElementId) {
        let target = id.target();
        self.emit(Event::pointer(event_types::POINTER_DOWN, target, 0.0, 0.0));
        self.emit(Event::pointer(event_types::POINTER_UP, target, 0.0, 0.0));
    }

    /// Name-to-text view of every registered element.
    pub fn snapshot(&self) -> SurfaceSnapshot {
        let elements = self.elements.read().unwrap();
        let mut snapshot = SurfaceSnapshot::default();
        for (_, element) in elements.iter() {
            snapshot
                .elements
                .insert(element.name.clone(), element.text.clone());
        }
        snapshot
    }
}

impl Default for HeadlessSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for HeadlessSurface {
    fn resolve(&self, name: &str) -> Result<ElementId> {
        self.by_name
            .read()
            .unwrap()
            .get(name)
            .copied()
            .ok_or_else(|| TallyError::MissingElement {
                name: name.to_string(),
            })
    }

    fn set_text(&self, id: ElementId, text: &str) -> Result<()> {
        let mut elements = self.elements.write().unwrap();
        match elements.get_mut(id) {
            Some(element) => {
                element.text = Some(text.to_string());
                Ok(())
            }
            None => Err(TallyError::MissingElement {
                name: format!("{id:?}"),
            }),
        }
    }

    fn text(&self, id: ElementId) -> Option<String> {
        self.elements.read().unwrap().get(id).and_then(|e| e.text.clone())
    }

    fn on_ready(&self, handler: EventHandler) {
        self.dispatcher
            .lock()
            .unwrap()
            .register(SURFACE_TARGET, event_types::READY, handler);
    }

    fn on_click(&self, id: ElementId, handler: EventHandler) {
        self.dispatcher
            .lock()
            .unwrap()
            .register(id.target(), event_types::POINTER_UP, handler);
    }

    fn emit(&self, event: Event) {
        let mut event = event;
        self.dispatcher.lock().unwrap().dispatch(&mut event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_resolve_registered_element() {
        let surface = HeadlessSurface::new();
        let id = surface.add_element("count-heading", ElementRole::Display);
        assert_eq!(surface.resolve("count-heading").unwrap(), id);
    }

    #[test]
    fn test_resolve_unknown_element_errors() {
        let surface = HeadlessSurface::new();
        let err = surface.resolve("count-heading").unwrap_err();
        assert!(matches!(err, TallyError::MissingElement { .. }));
    }

    #[test]
    fn test_set_text_and_snapshot() {
        let surface = HeadlessSurface::new();
        let id = surface.add_element("count-heading", ElementRole::Display);
        surface.set_text(id, "41").unwrap();

        assert_eq!(surface.text(id).as_deref(), Some("41"));
        let snapshot = surface.snapshot();
        assert_eq!(
            snapshot.elements.get("count-heading"),
            Some(&Some("41".to_string()))
        );
    }

    #[test]
    fn test_click_fires_pointer_up_handler() {
        let surface = HeadlessSurface::new();
        let button = surface.add_element("count-button", ElementRole::Trigger);

        let hits = Arc::new(AtomicU32::new(0));
        let hits_clone = hits.clone();
        surface.on_click(
            button,
            Box::new(move |_| {
                hits_clone.fetch_add(1, Ordering::SeqCst);
            }),
        );

        surface.click(button);
        surface.click(button);
        assert_eq!(hits.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_fire_ready_reaches_ready_handler() {
        let surface = HeadlessSurface::new();
        let hits = Arc::new(AtomicU32::new(0));
        let hits_clone = hits.clone();
        surface.on_ready(Box::new(move |_| {
            hits_clone.fetch_add(1, Ordering::SeqCst);
        }));

        surface.fire_ready();
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_element_target_is_never_surface_target() {
        let surface = HeadlessSurface::new();
        let id = surface.add_element("count-button", ElementRole::Trigger);
        assert_ne!(id.target(), tally_core::events::SURFACE_TARGET);
    }
}
