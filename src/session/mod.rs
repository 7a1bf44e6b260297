// Scripted driver: feeds user actions to a control and records what it emits

pub mod error;
pub mod event;
pub mod runner;


pub use error::SessionError;
pub use event::{parse_event, parse_events, ControlEvent};
pub use runner::{Session, Step, Transcript};
