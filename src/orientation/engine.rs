//! Mounting-angle rotation, tilt-compensated compass, pose classification
//!
//! The inertial chips sit on a daughterboard tilted about the shared X
//! axis relative to the chassis, and the accelerometer and magnetometer
//! are mounted with complementary sign conventions. Everything here first
//! rotates host readings into the robot's physical frame: X forward, Y
//! right, Z up, with an axis reading -g when it points at the sky; the
//! magnetometer reports the field on its own left/forward/vertical axes.

use crate::core::{Axis, Orientation};
use crate::orientation::InertialSensors;
use nalgebra::Vector3;

/// Pose threshold: 0.8 g expressed in m/s².
pub const POSE_THRESHOLD_MS2: f64 = 7.848;

/// Rotate a host-frame accelerometer vector into the robot frame by the
/// mounting angle (radians, about X).
pub fn rotate_accel_frame(v: Vector3<f64>, angle_rad: f64) -> Vector3<f64> {
    let (sin, cos) = angle_rad.sin_cos();
    Vector3::new(v.x, v.y * cos - v.z * sin, v.y * sin + v.z * cos)
}

/// Rotate a host-frame magnetometer vector into the robot frame. The chip
/// is mounted with the complementary sign convention, so this is the exact
/// inverse of [`rotate_accel_frame`] at the same angle.
pub fn rotate_mag_frame(v: Vector3<f64>, angle_rad: f64) -> Vector3<f64> {
    let (sin, cos) = angle_rad.sin_cos();
    Vector3::new(v.x, v.y * cos + v.z * sin, v.z * cos - v.y * sin)
}

/// Stateless orientation math over live host sensor reads.
pub struct OrientationEngine {
    imu: Box<dyn InertialSensors>,
    mounting_angle_rad: f64,
}

impl OrientationEngine {
    pub fn new(imu: Box<dyn InertialSensors>, mounting_angle_rad: f64) -> Self {
        Self {
            imu,
            mounting_angle_rad,
        }
    }

    /// Robot-frame acceleration on one axis (m/s²).
    pub fn acceleration(&mut self, axis: Axis) -> f64 {
        pick(self.rotated_acceleration(), axis)
    }

    /// Robot-frame magnetic field on one axis (microtesla).
    pub fn magnetic_field(&mut self, axis: Axis) -> f64 {
        pick(self.rotated_magnetic(), axis)
    }

    /// Tilt-compensated compass heading in integer degrees, [0, 360),
    /// increasing clockwise, 0 on the robot's forward axis.
    pub fn compass(&mut self) -> u16 {
        let a = self.rotated_acceleration();
        let m = self.rotated_magnetic();

        let phi = (-a.y / a.z).atan();
        let theta = (a.x / (a.y * phi.sin() + a.z * phi.cos())).atan();

        let yp = m.y * phi.cos() - m.z * phi.sin();
        let zp = m.y * phi.sin() + m.z * phi.cos();
        let xpp = m.x * theta.cos() + zp * theta.sin();

        let heading = 180.0 + xpp.atan2(yp).to_degrees();
        // Half-turn offset so the forward axis reads zero.
        let forward = (heading + 180.0).rem_euclid(360.0);
        (forward.round() as u16) % 360
    }

    /// Threshold test for one discrete pose. Shake defers to the host
    /// gesture recognizer.
    pub fn is_orientation(&mut self, kind: Orientation) -> bool {
        if kind == Orientation::Shake {
            return self.imu.shake_detected();
        }

        let a = self.rotated_acceleration();
        match kind {
            Orientation::BeakUp => a.x < -POSE_THRESHOLD_MS2,
            Orientation::BeakDown => a.x > POSE_THRESHOLD_MS2,
            Orientation::TiltLeft => a.y < -POSE_THRESHOLD_MS2,
            Orientation::TiltRight => a.y > POSE_THRESHOLD_MS2,
            Orientation::Level => a.z < -POSE_THRESHOLD_MS2,
            Orientation::UpsideDown => a.z > POSE_THRESHOLD_MS2,
            Orientation::Shake => unreachable!(),
        }
    }

    /// First matching pose, shake taking precedence; `None` between poses.
    pub fn classify(&mut self) -> Option<Orientation> {
        const POSES: [Orientation; 7] = [
            Orientation::Shake,
            Orientation::BeakUp,
            Orientation::BeakDown,
            Orientation::TiltLeft,
            Orientation::TiltRight,
            Orientation::UpsideDown,
            Orientation::Level,
        ];
        POSES.into_iter().find(|&pose| self.is_orientation(pose))
    }

    fn rotated_acceleration(&mut self) -> Vector3<f64> {
        rotate_accel_frame(self.imu.acceleration(), self.mounting_angle_rad)
    }

    fn rotated_magnetic(&mut self) -> Vector3<f64> {
        rotate_mag_frame(self.imu.magnetic_field(), self.mounting_angle_rad)
    }
}

fn pick(v: Vector3<f64>, axis: Axis) -> f64 {
    match axis {
        Axis::X => v.x,
        Axis::Y => v.y,
        Axis::Z => v.z,
    }
}
