use crate::unit::error::UnitError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Measurement mode applied to a control's value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    /// Bounded to [0, 100]
    #[default]
    Percent,
    /// Bounded below by 0 only
    Pixel,
}

impl Unit {
    /// Toggle order: percent first, then pixel
    pub const ALL: [Unit; 2] = [Unit::Percent, Unit::Pixel];

    /// Short label shown on the unit toggle
    pub fn label(&self) -> &'static str {
        match self {
            Unit::Percent => "%",
            Unit::Pixel => "px",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Unit::Percent => "percent",
            Unit::Pixel => "pixel",
        }
    }

    /// Amount added or removed by one press of a stepper button
    pub fn step(&self) -> f64 {
        match self {
            Unit::Percent => 1.0,
            Unit::Pixel => 10.0,
        }
    }

    /// Inclusive upper bound, if the unit has one
    pub fn upper_bound(&self) -> Option<f64> {
        match self {
            Unit::Percent => Some(100.0),
            Unit::Pixel => None,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Unit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "%" | "percent" => Ok(Unit::Percent),
            "px" | "pixel" => Ok(Unit::Pixel),
            _ => Err(UnitError::UnknownUnit(s.to_string())),
        }
    }
}
