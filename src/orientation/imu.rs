//! Host inertial sensor collaborator interface

use nalgebra::Vector3;

/// Calibrated inertial readings from the host board, in the host's own
/// axis frame: acceleration in m/s², magnetic field in microtesla, plus
/// the host gesture recognizer's discrete shake signal.
///
/// The driver only rotates and classifies; sampling, calibration, and
/// gesture detection stay on the host side of this trait.
pub trait InertialSensors {
    fn acceleration(&mut self) -> Vector3<f64>;
    fn magnetic_field(&mut self) -> Vector3<f64>;
    fn shake_detected(&mut self) -> bool;
}

/// Scriptable inertial source for tests and demos.
pub struct MockImu {
    pub accel: Vector3<f64>,
    pub mag: Vector3<f64>,
    pub shake: bool,
}

impl MockImu {
    /// Starts level and motionless with no field.
    pub fn new() -> Self {
        Self {
            accel: Vector3::new(0.0, 0.0, -9.81),
            mag: Vector3::zeros(),
            shake: false,
        }
    }
}

impl Default for MockImu {
    fn default() -> Self {
        Self::new()
    }
}

impl InertialSensors for MockImu {
    fn acceleration(&mut self) -> Vector3<f64> {
        self.accel
    }

    fn magnetic_field(&mut self) -> Vector3<f64> {
        self.mag
    }

    fn shake_detected(&mut self) -> bool {
        self.shake
    }
}
