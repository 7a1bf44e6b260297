use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnitError {
    UnknownUnit(String),
}

impl fmt::Display for UnitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitError::UnknownUnit(label) => {
                write!(f, "Unknown unit: '{}' (expected '%' or 'px')", label)
            }
        }
    }
}

impl std::error::Error for UnitError {}
