//! Wheeled-robot peripheral driver
//!
//! Speaks the robot's fixed 16-byte command/response frame protocol over a
//! chip-select-gated synchronous byte bus, translates human-facing motion
//! commands into device velocity and tick values, caches and decodes the
//! sensor response, and turns host inertial readings into robot-frame
//! headings and poses.

pub mod core;
pub mod calibration;
pub mod hardware;
pub mod protocol;
pub mod motion;
pub mod sensors;
pub mod orientation;
pub mod api;

// Re-export commonly used types
pub use crate::core::{
    Axis, Frame, LedColor, MoveDirection, Opcode, Orientation, Side, TailPort, TurnDirection,
};
pub use crate::calibration::{CalibrationProfile, HardwareRevision, LightCorrection, PollTiming};
pub use crate::hardware::{
    BusArbiter, BusInterface, DriverError, DriverResult, FrameTransport, MockBus, MockBusHandle,
};
pub use crate::motion::PollPolicy;
pub use crate::sensors::{SensorCache, SensorSnapshot};
pub use crate::orientation::{InertialSensors, MockImu, OrientationEngine};
pub use crate::api::Driver;
