//! Tally Application Framework
//!
//! Wires the counter widget to a UI surface and a slot store, and provides
//! the headless diagnostics harness used to exercise the widget without a
//! real UI toolkit.
//!
//! # Example
//!
//! ```ignore
//! use tally_app::prelude::*;
//! use std::sync::Arc;
//!
//! let store = Arc::new(MemoryStore::new());
//! let surface = Arc::new(HeadlessSurface::new());
//! surface.add_element("count-heading", ElementRole::Display);
//! surface.add_element("count-button", ElementRole::Trigger);
//!
//! let widget = Arc::new(CounterWidget::new(store, WidgetConfig::default()));
//! widget.mount(&surface)?;
//!
//! surface.fire_ready();                          // heading renders "0"
//! let button = surface.resolve("count-button")?;
//! surface.click(button);                         // heading renders "1"
//! ```

mod error;
pub mod headless_assert;
pub mod headless_report;
pub mod headless_runner;
pub mod headless_scenario;
pub mod surface;
pub mod widget;


pub use error::{Result, TallyError};
pub use surface::{Element, ElementId, ElementRole, HeadlessSurface, Surface, SurfaceSnapshot};
pub use widget::{CounterWidget, WidgetConfig};

/// Prelude module - import everything commonly needed
pub mod prelude {
    pub use crate::error::{Result, TallyError};
    pub use crate::surface::{ElementId, ElementRole, HeadlessSurface, Surface};
    pub use crate::widget::{CounterWidget, WidgetConfig};

    // Core types
    pub use tally_core::counter::{Count, ParsePolicy, COUNTER_SLOT};
    pub use tally_store::{FileStore, MemoryStore, SlotStore};
}
