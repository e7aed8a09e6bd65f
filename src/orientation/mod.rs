//! Inertial frame rotation, compass heading, and pose classification

pub mod imu;
pub mod engine;

pub use imu::{InertialSensors, MockImu};
pub use engine::{OrientationEngine, POSE_THRESHOLD_MS2};
