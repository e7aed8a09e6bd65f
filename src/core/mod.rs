//! Core types and constants for the robot driver

pub mod types;
pub mod constants;

pub use types::*;
pub use constants::*;
