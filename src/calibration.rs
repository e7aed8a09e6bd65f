//! Per-hardware-revision calibration profiles
//!
//! Motion and sensor scalars differ materially between device revisions
//! (tick geometry, speed scaling, battery divider), so every constant the
//! translation layers use lives in a named, swappable profile selected at
//! driver construction. Profiles serialize to JSON for storage alongside a
//! host program's own configuration.

use crate::core::LedColor;
use serde::{Deserialize, Serialize};

/// Fitted cross-term polynomial describing how much of the beak LED's own
/// light bleeds into one ambient light sensor, as a function of the beak
/// channel percentages.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LightCorrection {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub rg: f64,
    pub rb: f64,
    pub gb: f64,
    pub rgb: f64,
}

impl LightCorrection {
    /// Evaluate the bleed estimate for the given beak color, in raw sensor
    /// counts.
    pub fn evaluate(&self, beak: &LedColor) -> f64 {
        let r = beak.red as f64;
        let g = beak.green as f64;
        let b = beak.blue as f64;
        self.r * r
            + self.g * g
            + self.b * b
            + self.rg * r * g
            + self.rb * r * b
            + self.gb * g * b
            + self.rgb * r * g * b
    }
}

/// Poll cadence for the bus arbiter and the motion completion loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollTiming {
    /// Interval between bus-ready checks (milliseconds)
    pub arbiter_interval_ms: u32,
    /// Bus-ready checks before a command is dropped
    pub arbiter_attempts: u32,
    /// Wait after a motor frame before the first completion check
    pub settle_ms: u32,
    /// Interval between completion checks (milliseconds)
    pub poll_interval_ms: u32,
}

/// Calibration constants for one hardware revision. Immutable for the life
/// of a driver instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalibrationProfile {
    /// Human-readable revision name
    pub name: String,
    /// Encoder ticks per centimeter of wheel travel
    pub ticks_per_cm: f64,
    /// Encoder ticks per degree of in-place rotation
    pub ticks_per_degree: f64,
    /// Encoder ticks per full wheel rotation
    pub ticks_per_rotation: f64,
    /// Percent speed to device velocity magnitude
    pub speed_scale: f64,
    /// Smallest magnitude that reliably overcomes motor stall
    pub min_speed_magnitude: u8,
    /// Raw 16-bit range reading to centimeters
    pub distance_scale: f64,
    /// Raw battery byte to millivolts
    pub battery_scale: f64,
    /// Fixed millivolt offset added after scaling
    pub battery_offset_mv: f64,
    /// Fixed offset applied to the rescaled line reading
    pub line_offset: f64,
    /// Sensor board tilt relative to the forward axis (degrees)
    pub mounting_angle_deg: f64,
    /// Beak-bleed correction for the left light sensor
    pub light_correction_left: LightCorrection,
    /// Beak-bleed correction for the right light sensor
    pub light_correction_right: LightCorrection,
    /// Sensor snapshot staleness window (milliseconds)
    pub staleness_ms: u64,
    /// Arbiter and completion-poll cadence
    pub timing: PollTiming,
}

/// Known hardware revisions with shipped constant sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HardwareRevision {
    /// Original production run
    RevA,
    /// Later run with regeared wheels and a new battery divider
    RevB,
}

impl HardwareRevision {
    pub fn profile(self) -> CalibrationProfile {
        match self {
            HardwareRevision::RevA => CalibrationProfile::rev_a(),
            HardwareRevision::RevB => CalibrationProfile::rev_b(),
        }
    }
}

impl CalibrationProfile {
    pub fn rev_a() -> Self {
        Self {
            name: "rev-a".to_string(),
            ticks_per_cm: 49.7,
            ticks_per_degree: 4.335,
            ticks_per_rotation: 792.0,
            speed_scale: 0.36,
            min_speed_magnitude: 3,
            distance_scale: 0.0919,
            battery_scale: 9.37,
            battery_offset_mv: 0.0,
            line_offset: 0.0,
            mounting_angle_deg: 40.0,
            light_correction_left: LightCorrection {
                r: 1.06871493e-2,
                g: 1.94526614e-2,
                b: 6.12409825e-2,
                rg: 4.01343475e-4,
                rb: 4.25761981e-4,
                gb: 6.85920069e-4,
                rgb: -2.47670702e-6,
            },
            light_correction_right: LightCorrection {
                r: 6.40473070e-3,
                g: 1.41015162e-2,
                b: 5.05547817e-2,
                rg: 3.98301391e-4,
                rb: 4.41091223e-4,
                gb: 6.40756862e-4,
                rgb: -4.76971242e-6,
            },
            staleness_ms: 10,
            timing: PollTiming {
                arbiter_interval_ms: 10,
                arbiter_attempts: 25,
                settle_ms: 50,
                poll_interval_ms: 30,
            },
        }
    }

    pub fn rev_b() -> Self {
        Self {
            name: "rev-b".to_string(),
            ticks_per_cm: 61.4,
            ticks_per_degree: 5.12,
            ticks_per_rotation: 990.0,
            speed_scale: 0.45,
            min_speed_magnitude: 4,
            battery_scale: 1.758,
            battery_offset_mv: 320.0,
            line_offset: 2.0,
            ..Self::rev_a()
        }
    }

    /// Mounting angle in radians, as the orientation math consumes it.
    pub fn mounting_angle_rad(&self) -> f64 {
        self.mounting_angle_deg.to_radians()
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl Default for CalibrationProfile {
    fn default() -> Self {
        Self::rev_a()
    }
}
