//! User-facing driver API
//!
//! The blocking `Driver` facade is the only entry point calling programs
//! need; it owns the bus stack and the orientation engine and offers both
//! lenient and strict (`try_*`) operations.

pub mod driver;

pub use driver::Driver;
