//! Scenario definition for counter widget headless diagnostics.

use anyhow::Result;
use serde::Deserialize;
use std::path::Path;

/// Sequence of headless diagnostic steps.
#[derive(Debug, Clone, Deserialize)]
pub struct HeadlessScenario {
    pub steps: Vec<ScenarioStep>,
}

impl HeadlessScenario {
    /// Load a scenario from JSON text.
    pub fn from_json(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    /// Load a scenario from file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }
}

/// Step set for driving a counter fixture.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScenarioStep {
    /// Fire the surface ready event (page load).
    Load,
    /// Rebuild the surface and remount the widget against the same store,
    /// then fire ready (page reload).
    Reload,
    /// Click an element by name.
    Click { id: String },
    /// Write a slot directly, bypassing the widget (seed or corrupt state).
    SeedSlot { slot: String, value: String },
    /// Assert an element is registered on the surface.
    AssertExists { id: String },
    /// Assert an element's rendered text, exact match.
    AssertText { id: String, value: String },
    /// Assert a slot's persisted value, exact match.
    AssertStored { slot: String, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenario_parses_all_step_kinds() {
        let input = r#"{
            "steps": [
                {"type": "seed_slot", "slot": "counter", "value": "41"},
                {"type": "load"},
                {"type": "assert_exists", "id": "count-heading"},
                {"type": "assert_text", "id": "count-heading", "value": "41"},
                {"type": "click", "id": "count-button"},
                {"type": "reload"},
                {"type": "assert_stored", "slot": "counter", "value": "42"}
            ]
        }"#;
        let scenario = HeadlessScenario::from_json(input).unwrap();
        assert_eq!(scenario.steps.len(), 7);
        assert!(matches!(scenario.steps[1], ScenarioStep::Load));
        assert!(matches!(scenario.steps[5], ScenarioStep::Reload));
    }

    #[test]
    fn test_unknown_step_is_rejected() {
        let input = r#"{"steps": [{"type": "warp"}]}"#;
        assert!(HeadlessScenario::from_json(input).is_err());
    }
}
