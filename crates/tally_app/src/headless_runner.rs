//! Scenario runner that executes counter diagnostics goals.

use crate::headless_assert::{
    evaluate_assert_exists, evaluate_assert_stored, evaluate_assert_text, AssertionResult,
};
use crate::headless_report::HeadlessReport;
use crate::headless_scenario::{HeadlessScenario, ScenarioStep};
use crate::surface::{ElementRole, HeadlessSurface, Surface};
use crate::widget::{CounterWidget, WidgetConfig};
use anyhow::Result;
use std::sync::Arc;
use tally_store::{MemoryStore, SlotStore};

/// Final outcome of a scenario run.
#[derive(Debug, Clone)]
pub enum RunOutcome {
    Passed { report: HeadlessReport },
    Failed { report: HeadlessReport },
}

impl RunOutcome {
    pub fn report(&self) -> &HeadlessReport {
        match self {
            RunOutcome::Passed { report } => report,
            RunOutcome::Failed { report } => report,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, RunOutcome::Failed { .. })
    }
}

/// A mounted counter widget with its surface and store.
///
/// The surface is rebuilt on [`reload`]; the store is carried over.
///
/// [`reload`]: CounterFixture::reload
pub struct CounterFixture {
    store: Arc<dyn SlotStore>,
    surface: Arc<HeadlessSurface>,
    widget: Arc<CounterWidget>,
}

impl CounterFixture {
    /// Fixture over a fresh in-memory store with the default element names.
    pub fn new() -> Result<Self> {
        Self::with_store(Arc::new(MemoryStore::new()), WidgetConfig::default())
    }

    /// Fixture over an existing store, durable or in-memory.
    pub fn with_store(store: Arc<dyn SlotStore>, config: WidgetConfig) -> Result<Self> {
        let surface = Self::build_surface(&config);
        let widget = Arc::new(CounterWidget::new(Arc::clone(&store), config));
        widget.mount(&surface)?;
        Ok(Self {
            store,
            surface,
            widget,
        })
    }

    fn build_surface(config: &WidgetConfig) -> Arc<HeadlessSurface> {
        let surface = Arc::new(HeadlessSurface::new());
        surface.add_element(&config.display, ElementRole::Display);
        surface.add_element(&config.trigger, ElementRole::Trigger);
        surface
    }

    /// Simulated page load.
    pub fn load(&self) {
        self.surface.fire_ready();
    }

    /// Simulated page reload: fresh surface, same store, then ready.
    pub fn reload(&mut self) -> Result<()> {
        let surface = Self::build_surface(self.widget.config());
        self.widget.mount(&surface)?;
        self.surface = surface;
        self.load();
        Ok(())
    }

    /// Click an element by name.
    pub fn click(&self, name: &str) -> crate::Result<()> {
        let id = self.surface.resolve(name)?;
        self.surface.click(id);
        Ok(())
    }

    pub fn surface(&self) -> &Arc<HeadlessSurface> {
        &self.surface
    }

    pub fn store(&self) -> &Arc<dyn SlotStore> {
        &self.store
    }

    pub fn widget(&self) -> &Arc<CounterWidget> {
        &self.widget
    }
}

/// Execute scenario JSON against a fresh in-memory fixture.
pub fn run_scenario(input: &str) -> Result<RunOutcome> {
    let scenario = HeadlessScenario::from_json(input)?;
    let mut fixture = CounterFixture::new()?;
    run_loaded_scenario(&scenario, &mut fixture)
}

/// Execute a pre-loaded scenario against an existing fixture.
pub fn run_loaded_scenario(
    scenario: &HeadlessScenario,
    fixture: &mut CounterFixture,
) -> Result<RunOutcome> {
    for (step_index, step) in scenario.steps.iter().enumerate() {
        match step {
            ScenarioStep::Load => fixture.load(),
            ScenarioStep::Reload => fixture.reload()?,
            ScenarioStep::Click { id } => {
                if let Err(err) = fixture.click(id) {
                    let report = HeadlessReport::failed("click", step_index, err.to_string());
                    return Ok(RunOutcome::Failed { report });
                }
            }
            ScenarioStep::SeedSlot { slot, value } => fixture.store().set(slot, value)?,
            ScenarioStep::AssertExists { id } => {
                let result = evaluate_assert_exists(id, &fixture.surface().snapshot());
                if let AssertionResult::Failed { message, .. } = result {
                    let report = HeadlessReport::failed("assert_exists", step_index, message);
                    return Ok(RunOutcome::Failed { report });
                }
            }
            ScenarioStep::AssertText { id, value } => {
                let result = evaluate_assert_text(id, value, &fixture.surface().snapshot());
                if let AssertionResult::Failed { message, .. } = result {
                    let report = HeadlessReport::failed("assert_text", step_index, message);
                    return Ok(RunOutcome::Failed { report });
                }
            }
            ScenarioStep::AssertStored { slot, value } => {
                let stored = fixture.store().get(slot)?;
                let result = evaluate_assert_stored(slot, value, stored.as_deref());
                if let AssertionResult::Failed { message, .. } = result {
                    let report = HeadlessReport::failed("assert_stored", step_index, message);
                    return Ok(RunOutcome::Failed { report });
                }
            }
        }
    }

    Ok(RunOutcome::Passed {
        report: HeadlessReport::passed(scenario.steps.len()),
    })
}
