use crate::unit::Unit;
use serde::Serialize;

/// A committed `(value, unit)` pair, as reported to the observer
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ValueChange {
    pub value: f64,
    pub unit: Unit,
}

impl ValueChange {
    pub fn new(value: f64, unit: Unit) -> Self {
        Self { value, unit }
    }
}

/// Receives every committed value of a control
pub trait ValueObserver {
    fn on_value_change(&mut self, value: f64, unit: Unit);
}

impl<F> ValueObserver for F
where
    F: FnMut(f64, Unit),
{
    fn on_value_change(&mut self, value: f64, unit: Unit) {
        self(value, unit)
    }
}
