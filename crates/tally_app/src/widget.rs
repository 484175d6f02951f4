//! Counter widget wiring
//!
//! [`CounterWidget`] owns the counter's data flow: on ready, ensure the
//! slot exists and render it; on click, read, increment, render, persist.
//! The widget holds element names and resolves them per operation, so a
//! surface rebuilt on reload needs nothing beyond a fresh [`mount`].
//!
//! [`mount`]: CounterWidget::mount

use crate::error::Result;
use crate::surface::Surface;
use std::sync::Arc;
use tally_core::counter::{Count, ParsePolicy, COUNTER_SLOT};
use tally_store::SlotStore;

/// Configuration for mounting a counter widget.
#[derive(Clone, Debug)]
pub struct WidgetConfig {
    /// Slot the count persists under.
    pub slot: String,
    /// Name of the element that mirrors the count.
    pub display: String,
    /// Name of the element that advances the count.
    pub trigger: String,
    /// Handling of unparseable persisted text.
    pub policy: ParsePolicy,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            slot: COUNTER_SLOT.to_string(),
            display: "count-heading".to_string(),
            trigger: "count-button".to_string(),
            policy: ParsePolicy::default(),
        }
    }
}

/// The counter widget: one display element, one trigger element, one slot.
pub struct CounterWidget {
    store: Arc<dyn SlotStore>,
    config: WidgetConfig,
}

impl CounterWidget {
    pub fn new(store: Arc<dyn SlotStore>, config: WidgetConfig) -> Self {
        Self { store, config }
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    /// Register the ready and click handlers on a surface.
    ///
    /// Registration only; no store access happens until the surface fires
    /// ready or a click arrives. Failures inside handlers are logged.
    pub fn mount<S: Surface + 'static>(self: &Arc<Self>, surface: &Arc<S>) -> Result<()> {
        let trigger = surface.resolve(&self.config.trigger)?;

        let widget = Arc::clone(self);
        let surf = Arc::clone(surface);
        surface.on_ready(Box::new(move |_| {
            if let Err(err) = widget.initialize(surf.as_ref()) {
                tracing::error!("counter initialization failed: {err}");
            }
        }));

        let widget = Arc::clone(self);
        let surf = Arc::clone(surface);
        surface.on_click(
            trigger,
            Box::new(move |_| {
                if let Err(err) = widget.increment(surf.as_ref()) {
                    tracing::error!("counter increment failed: {err}");
                }
            }),
        );
        Ok(())
    }

    /// Ensure the slot exists, then render the persisted count.
    ///
    /// Idempotent: only the first call on an empty store writes anything.
    pub fn initialize(&self, surface: &dyn Surface) -> Result<()> {
        if self.store.get(&self.config.slot)?.is_none() {
            self.store.set(&self.config.slot, &Count::ZERO.render())?;
        }
        let count = self.current()?;
        tracing::debug!("counter initialized at {count}");
        self.render(surface, count)
    }

    /// Read, advance by one, render, persist.
    pub fn increment(&self, surface: &dyn Surface) -> Result<()> {
        let count = self.current()?.increment();
        self.render(surface, count)?;
        self.store.set(&self.config.slot, &count.render())?;
        Ok(())
    }

    /// The persisted count, without touching the surface.
    ///
    /// A never-written slot reads as zero; written text goes through the
    /// configured parse policy.
    pub fn current(&self) -> Result<Count> {
        match self.store.get(&self.config.slot)? {
            Some(raw) => Ok(Count::recover(&raw, self.config.policy)?),
            None => Ok(Count::ZERO),
        }
    }

    fn render(&self, surface: &dyn Surface, count: Count) -> Result<()> {
        let display = surface.resolve(&self.config.display)?;
        surface.set_text(display, &count.render())
    }
}
