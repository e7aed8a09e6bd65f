//! Hardware abstraction layer for the gated serial bus
//!
//! This module owns everything between the typed command layer and the host
//! board's pins: the raw bus trait, the frame transport with its timing
//! discipline, the single-slot arbiter, and a mock bus for tests.

pub mod bus;
pub mod transport;
pub mod arbiter;
pub mod mock;
pub mod error;

pub use bus::BusInterface;
pub use transport::FrameTransport;
pub use arbiter::BusArbiter;
pub use mock::{MockBus, MockBusHandle};
pub use error::{DriverError, DriverResult};
