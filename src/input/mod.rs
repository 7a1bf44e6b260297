// Text repair and unit bounds for values typed into a control

pub mod normalizer;
pub mod patterns;

#[cfg(test)]
mod tests;

pub use normalizer::{clamp, format_number, parse_number, sanitize};
