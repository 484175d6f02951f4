//! Counter widget demo
//!
//! Run with:
//! `cargo run -p tally_app --example counter_demo`

use std::sync::Arc;
use tally_app::prelude::*;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let store = Arc::new(MemoryStore::new());
    let surface = Arc::new(HeadlessSurface::new());
    let heading = surface.add_element("count-heading", ElementRole::Display);
    let button = surface.add_element("count-button", ElementRole::Trigger);

    let widget = Arc::new(CounterWidget::new(store, WidgetConfig::default()));
    widget.mount(&surface)?;

    surface.fire_ready();
    println!("after load: {}", surface.text(heading).unwrap_or_default());

    for _ in 0..3 {
        surface.click(button);
    }
    println!("after 3 clicks: {}", surface.text(heading).unwrap_or_default());

    Ok(())
}
