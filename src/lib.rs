pub mod config;
pub mod control;
pub mod input;
pub mod session;
pub mod unit;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use control::{ControlView, UnitControl, ValueChange, ValueObserver};
pub use unit::Unit;
