use crate::unit::Unit;
use serde::Serialize;

pub const DECREMENT_HINT: &str = "Value must greater than 0";
pub const INCREMENT_HINT: &str = "Value must smaller than 100";

/// Decrement is blocked once the value reaches zero, in every unit
pub fn decrement_disabled(value: f64) -> bool {
    value <= 0.0
}

/// Increment is blocked only at the top of a bounded unit
pub fn increment_disabled(value: f64, unit: Unit) -> bool {
    match unit.upper_bound() {
        Some(bound) => value >= bound,
        None => false,
    }
}

/// Snapshot of everything the presentation layer renders
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ControlView {
    pub text: String,
    pub unit: Unit,
    pub value: f64,
    pub increment_disabled: bool,
    pub decrement_disabled: bool,
    // Tooltip text, only while the matching stepper is disabled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub increment_hint: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decrement_hint: Option<&'static str>,
}

impl ControlView {
    pub fn new(text: String, unit: Unit, value: f64) -> Self {
        let increment_disabled = increment_disabled(value, unit);
        let decrement_disabled = decrement_disabled(value);
        Self {
            text,
            unit,
            value,
            increment_disabled,
            decrement_disabled,
            increment_hint: increment_disabled.then_some(INCREMENT_HINT),
            decrement_hint: decrement_disabled.then_some(DECREMENT_HINT),
        }
    }
}
