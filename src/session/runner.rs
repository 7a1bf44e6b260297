use crate::control::{ControlView, UnitControl, ValueChange};
use crate::session::event::ControlEvent;
use serde::Serialize;
use std::fmt;

/// Replays user actions against a single control
pub struct Session {
    control: UnitControl,
}

impl Session {
    pub fn new(control: UnitControl) -> Self {
        Self { control }
    }

    pub fn control(&self) -> &UnitControl {
        &self.control
    }

    pub fn into_control(self) -> UnitControl {
        self.control
    }

    /// Route one event to the matching control operation
    pub fn apply(&mut self, event: &ControlEvent) -> Option<ValueChange> {
        match event {
            ControlEvent::Edit(text) => {
                self.control.edit(text);
                None
            }
            ControlEvent::Commit => self.control.commit_edit(),
            ControlEvent::Increment => self.control.increment(),
            ControlEvent::Decrement => self.control.decrement(),
            ControlEvent::SwitchUnit(unit) => self.control.switch_unit(*unit),
            ControlEvent::Sync(text) => {
                self.control.sync_external_value(text);
                None
            }
        }
    }

    pub fn run<I>(&mut self, events: I) -> Transcript
    where
        I: IntoIterator<Item = ControlEvent>,
    {
        let initial = self.control.view();
        let steps = events
            .into_iter()
            .map(|event| {
                let change = self.apply(&event);
                Step {
                    event,
                    change,
                    view: self.control.view(),
                }
            })
            .collect();

        Transcript { initial, steps }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Step {
    pub event: ControlEvent,
    pub change: Option<ValueChange>,
    pub view: ControlView,
}

#[derive(Debug, Clone, Serialize)]
pub struct Transcript {
    pub initial: ControlView,
    pub steps: Vec<Step>,
}

impl Transcript {
    /// Every value reported to the observer, in order
    pub fn changes(&self) -> Vec<ValueChange> {
        self.steps.iter().filter_map(|step| step.change).collect()
    }

    pub fn final_view(&self) -> &ControlView {
        self.steps
            .last()
            .map(|step| &step.view)
            .unwrap_or(&self.initial)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for Transcript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:<16} {}", "(start)", ViewLine(&self.initial))?;
        for step in &self.steps {
            write!(f, "{:<16} {}", step.event.to_string(), ViewLine(&step.view))?;
            if let Some(change) = step.change {
                write!(f, "  -> onValueChange({}, {})", change.value, change.unit)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

struct ViewLine<'a>(&'a ControlView);

impl fmt::Display for ViewLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let view = self.0;
        let minus = if view.decrement_disabled { "-" } else { "[-]" };
        let plus = if view.increment_disabled { "+" } else { "[+]" };
        write!(f, "{} {:>8} {:<2} {}", minus, view.text, view.unit.label(), plus)
    }
}
