pub mod error;
pub mod types;

pub use error::UnitError;
pub use types::Unit;
