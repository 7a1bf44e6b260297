pub mod coordinator;
pub mod observer;
pub mod view;


pub use coordinator::UnitControl;
pub use observer::{ValueChange, ValueObserver};
pub use view::ControlView;
