use crate::control::observer::{ValueChange, ValueObserver};
use crate::control::view::{self, ControlView};
use crate::input::{clamp, format_number, parse_number, sanitize};
use crate::unit::Unit;
use log::debug;
use std::fmt;

/// A numeric input with a unit toggle and stepper buttons
///
/// Holds the committed value, the text currently displayed (which may be an
/// unvalidated draft) and the last value that passed validation. Every
/// operation that commits returns the emitted [`ValueChange`] and reports it
/// to the observer, if one is set.
pub struct UnitControl {
    unit: Unit,
    value: String,
    draft: String,
    last_valid: String,
    observer: Option<Box<dyn ValueObserver>>,
}

impl UnitControl {
    pub fn new(default_value: &str, default_unit: Unit) -> Self {
        Self {
            unit: default_unit,
            value: default_value.to_string(),
            draft: default_value.to_string(),
            last_valid: default_value.to_string(),
            observer: None,
        }
    }

    pub fn with_observer<O>(mut self, observer: O) -> Self
    where
        O: ValueObserver + 'static,
    {
        self.set_observer(observer);
        self
    }

    pub fn set_observer<O>(&mut self, observer: O)
    where
        O: ValueObserver + 'static,
    {
        self.observer = Some(Box::new(observer));
    }

    pub fn clear_observer(&mut self) {
        self.observer = None;
    }

    /// Replace the displayed text; nothing is validated until `commit_edit`
    pub fn edit(&mut self, text: &str) {
        self.draft = text.to_string();
    }

    /// Validate the draft and promote it (or the last valid value) to the committed value
    pub fn commit_edit(&mut self) -> Option<ValueChange> {
        let sanitized = sanitize(&self.draft, &self.last_valid);
        let validated = clamp(&sanitized, self.unit, &self.last_valid);
        debug!("commit {:?} -> {:?} ({})", self.draft, validated, self.unit);
        Some(self.commit(validated))
    }

    /// Step up from the committed value; percent clamps forward to 100
    pub fn increment(&mut self) -> Option<ValueChange> {
        if self.is_increment_disabled() {
            return None;
        }

        let mut next = self.numeric_value() + self.unit.step();
        if let Some(bound) = self.unit.upper_bound() {
            next = next.min(bound);
        }

        debug!("increment {:?} -> {} ({})", self.value, next, self.unit);
        Some(self.commit(format_number(next)))
    }

    /// Step down from the committed value, never below zero
    pub fn decrement(&mut self) -> Option<ValueChange> {
        if self.is_decrement_disabled() {
            return None;
        }

        let next = (self.numeric_value() - self.unit.step()).max(0.0);

        debug!("decrement {:?} -> {} ({})", self.value, next, self.unit);
        Some(self.commit(format_number(next)))
    }

    /// Change unit, forcing the value down to the new unit's bound if needed
    ///
    /// Returns None only when the committed value does not parse.
    pub fn switch_unit(&mut self, unit: Unit) -> Option<ValueChange> {
        self.unit = unit;

        let current = parse_number(&self.value)?;

        if let Some(bound) = unit.upper_bound() {
            if current > bound {
                debug!("switch to {} caps {:?} at {}", unit, self.value, bound);
                return Some(self.commit(format_number(bound)));
            }
        }

        debug!("switch to {} keeps {:?}", unit, self.value);
        Some(self.notify(current))
    }

    /// Adopt a value set from outside the control, dropping any draft
    ///
    /// The observer is not notified. Returns false when `value` already is the
    /// committed value, in which case an in-progress draft is kept.
    pub fn sync_external_value(&mut self, value: &str) -> bool {
        if value == self.value {
            return false;
        }

        debug!("external value {:?} replaces {:?}", value, self.value);
        self.value = value.to_string();
        self.draft = value.to_string();
        self.last_valid = value.to_string();
        true
    }

    /// Text to render in the input field
    pub fn display_text(&self) -> &str {
        &self.draft
    }

    /// Committed value text
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    /// Committed value as a number, 0 when it does not parse
    pub fn numeric_value(&self) -> f64 {
        parse_number(&self.value).unwrap_or(0.0)
    }

    pub fn is_increment_disabled(&self) -> bool {
        view::increment_disabled(self.numeric_value(), self.unit)
    }

    pub fn is_decrement_disabled(&self) -> bool {
        view::decrement_disabled(self.numeric_value())
    }

    pub fn view(&self) -> ControlView {
        ControlView::new(self.draft.clone(), self.unit, self.numeric_value())
    }

    fn commit(&mut self, text: String) -> ValueChange {
        let value = parse_number(&text).unwrap_or(f64::NAN);
        self.draft = text.clone();
        self.last_valid = text.clone();
        self.value = text;
        self.notify(value)
    }

    fn notify(&mut self, value: f64) -> ValueChange {
        let change = ValueChange::new(value, self.unit);
        if let Some(observer) = self.observer.as_mut() {
            observer.on_value_change(change.value, change.unit);
        }
        change
    }
}

impl Default for UnitControl {
    fn default() -> Self {
        Self::new("0", Unit::Percent)
    }
}

impl fmt::Debug for UnitControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnitControl")
            .field("unit", &self.unit)
            .field("value", &self.value)
            .field("draft", &self.draft)
            .field("last_valid", &self.last_valid)
            .field("observer", &self.observer.is_some())
            .finish()
    }
}
