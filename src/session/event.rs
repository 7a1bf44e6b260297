use crate::session::error::SessionError;
use crate::unit::Unit;
use serde::Serialize;
use std::fmt;

/// One user action against a control
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", content = "arg", rename_all = "snake_case")]
pub enum ControlEvent {
    // Keystrokes: "edit:12,5"
    Edit(String),
    // Focus lost: "commit"
    Commit,
    // Stepper buttons: "inc", "dec"
    Increment,
    Decrement,
    // Unit toggle: "unit:px"
    SwitchUnit(Unit),
    // Value pushed from outside the control: "sync:40"
    Sync(String),
}

impl fmt::Display for ControlEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControlEvent::Edit(text) => write!(f, "edit:{}", text),
            ControlEvent::Commit => write!(f, "commit"),
            ControlEvent::Increment => write!(f, "inc"),
            ControlEvent::Decrement => write!(f, "dec"),
            ControlEvent::SwitchUnit(unit) => write!(f, "unit:{}", unit),
            ControlEvent::Sync(text) => write!(f, "sync:{}", text),
        }
    }
}

pub fn parse_event(token: &str) -> Result<ControlEvent, SessionError> {
    if token.is_empty() {
        return Err(SessionError::EmptyEvent);
    }

    if let Some((kind, arg)) = token.split_once(':') {
        return match kind {
            "edit" => Ok(ControlEvent::Edit(arg.to_string())),
            "unit" => Ok(ControlEvent::SwitchUnit(arg.parse()?)),
            "sync" => Ok(ControlEvent::Sync(arg.to_string())),
            _ => Err(SessionError::UnknownEvent(token.to_string())),
        };
    }

    match token {
        "commit" | "blur" => Ok(ControlEvent::Commit),
        "inc" | "increment" => Ok(ControlEvent::Increment),
        "dec" | "decrement" => Ok(ControlEvent::Decrement),
        _ => Err(SessionError::UnknownEvent(token.to_string())),
    }
}

/// Parse a whitespace-separated event script
pub fn parse_events(script: &str) -> Result<Vec<ControlEvent>, SessionError> {
    script.split_whitespace().map(parse_event).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unit::UnitError;

    #[test]
    fn test_parse_simple_events() {
        assert_eq!(parse_event("commit").unwrap(), ControlEvent::Commit);
        assert_eq!(parse_event("blur").unwrap(), ControlEvent::Commit);
        assert_eq!(parse_event("inc").unwrap(), ControlEvent::Increment);
        assert_eq!(parse_event("decrement").unwrap(), ControlEvent::Decrement);
    }

    #[test]
    fn test_parse_events_with_arguments() {
        assert_eq!(
            parse_event("edit:12,5").unwrap(),
            ControlEvent::Edit("12,5".to_string())
        );
        assert_eq!(parse_event("edit:").unwrap(), ControlEvent::Edit(String::new()));
        assert_eq!(
            parse_event("edit:a:b").unwrap(),
            ControlEvent::Edit("a:b".to_string())
        );
        assert_eq!(
            parse_event("unit:px").unwrap(),
            ControlEvent::SwitchUnit(Unit::Pixel)
        );
        assert_eq!(
            parse_event("sync:40").unwrap(),
            ControlEvent::Sync("40".to_string())
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse_event(""), Err(SessionError::EmptyEvent));
        assert_eq!(
            parse_event("jump"),
            Err(SessionError::UnknownEvent("jump".to_string()))
        );
        assert_eq!(
            parse_event("move:3"),
            Err(SessionError::UnknownEvent("move:3".to_string()))
        );
        assert_eq!(
            parse_event("unit:em"),
            Err(SessionError::InvalidUnit(UnitError::UnknownUnit(
                "em".to_string()
            )))
        );
    }

    #[test]
    fn test_parse_script() {
        let events = parse_events("edit:5\ncommit  inc\tunit:%").unwrap();
        assert_eq!(
            events,
            vec![
                ControlEvent::Edit("5".to_string()),
                ControlEvent::Commit,
                ControlEvent::Increment,
                ControlEvent::SwitchUnit(Unit::Percent),
            ]
        );
        assert!(parse_events("inc nope").is_err());
        assert!(parse_events("").unwrap().is_empty());
    }

    #[test]
    fn test_display_round_trips_tokens() {
        for token in ["edit:12,5", "commit", "inc", "dec", "unit:px", "sync:7"] {
            assert_eq!(parse_event(token).unwrap().to_string(), token);
        }
    }
}
