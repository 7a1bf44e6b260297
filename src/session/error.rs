use crate::unit::UnitError;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    EmptyEvent,
    UnknownEvent(String),
    InvalidUnit(UnitError),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::EmptyEvent => write!(f, "Event cannot be empty"),
            SessionError::UnknownEvent(s) => write!(
                f,
                "Unknown event: '{}' (expected edit:<text>, commit, inc, dec, unit:<unit> or sync:<text>)",
                s
            ),
            SessionError::InvalidUnit(e) => write!(f, "Invalid unit event: {}", e),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::InvalidUnit(e) => Some(e),
            _ => None,
        }
    }
}

impl From<UnitError> for SessionError {
    fn from(e: UnitError) -> Self {
        SessionError::InvalidUnit(e)
    }
}
