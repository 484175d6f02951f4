//! Assertion helpers for headless diagnostics goals.

use crate::surface::SurfaceSnapshot;

/// Assertion result with structured failure details.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssertionResult {
    Passed,
    Failed { code: String, message: String },
}

pub fn evaluate_assert_exists(id: &str, snapshot: &SurfaceSnapshot) -> AssertionResult {
    if snapshot.elements.contains_key(id) {
        AssertionResult::Passed
    } else {
        AssertionResult::Failed {
            code: "missing_element".to_string(),
            message: format!("{id}: element not found"),
        }
    }
}

pub fn evaluate_assert_text(id: &str, expected: &str, snapshot: &SurfaceSnapshot) -> AssertionResult {
    let Some(text) = snapshot.elements.get(id) else {
        return AssertionResult::Failed {
            code: "missing_element".to_string(),
            message: format!("{id}: element not found"),
        };
    };
    let Some(text) = text.as_deref() else {
        return AssertionResult::Failed {
            code: "missing_text".to_string(),
            message: format!("{id}: nothing rendered yet"),
        };
    };
    if text == expected {
        AssertionResult::Passed
    } else {
        AssertionResult::Failed {
            code: "text_mismatch".to_string(),
            message: format!("{id}: expected '{expected}', got '{text}'"),
        }
    }
}

pub fn evaluate_assert_stored(slot: &str, expected: &str, stored: Option<&str>) -> AssertionResult {
    let Some(value) = stored else {
        return AssertionResult::Failed {
            code: "missing_slot".to_string(),
            message: format!("{slot}: slot never written"),
        };
    };
    if value == expected {
        AssertionResult::Passed
    } else {
        AssertionResult::Failed {
            code: "slot_mismatch".to_string(),
            message: format!("{slot}: expected '{expected}', got '{value}'"),
        }
    }
}
