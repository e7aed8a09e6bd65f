//! Motion translation: percent speeds and physical distances to device units

use crate::calibration::CalibrationProfile;
use crate::core::constants::MAX_TICKS;
use crate::core::{MoveDirection, TurnDirection};

/// Encode a percent speed (-100..=100, clamped) into the device's
/// sign+magnitude velocity byte: bit 7 set for forward, 7 magnitude bits.
///
/// Magnitudes that round to something below the profile's minimum are
/// floored up to it; below that the motors stall without turning. Zero
/// stays zero.
pub fn convert_speed(profile: &CalibrationProfile, percent: i32) -> u8 {
    let clamped = percent.clamp(-100, 100);
    let mut magnitude = ((clamped.unsigned_abs() as f64) * profile.speed_scale).round() as u8;
    if magnitude > 0 && magnitude < profile.min_speed_magnitude {
        magnitude = profile.min_speed_magnitude;
    }

    if clamped > 0 {
        0x80 | magnitude
    } else {
        0x7F & magnitude
    }
}

/// Ticks for a straight move of `cm` centimeters. Negative distances count
/// as zero; the result saturates at the 24-bit wire limit.
pub fn ticks_for_distance(profile: &CalibrationProfile, cm: f64) -> u32 {
    scale_ticks(cm, profile.ticks_per_cm)
}

/// Ticks for an in-place turn of `degrees`.
pub fn ticks_for_angle(profile: &CalibrationProfile, degrees: f64) -> u32 {
    scale_ticks(degrees, profile.ticks_per_degree)
}

fn scale_ticks(amount: f64, ticks_per_unit: f64) -> u32 {
    let ticks = (amount.max(0.0) * ticks_per_unit).round();
    if ticks >= MAX_TICKS as f64 {
        MAX_TICKS
    } else {
        ticks as u32
    }
}

/// Velocity byte for a straight move: the direction supplies the sign, the
/// percent supplies the magnitude.
pub fn move_velocity(profile: &CalibrationProfile, direction: MoveDirection, percent: i32) -> u8 {
    let magnitude = percent.clamp(-100, 100).abs();
    let signed = match direction {
        MoveDirection::Forward => magnitude,
        MoveDirection::Backward => -magnitude,
    };
    convert_speed(profile, signed)
}

/// Mirrored left/right velocity bytes for an in-place turn.
pub fn turn_velocities(
    profile: &CalibrationProfile,
    direction: TurnDirection,
    percent: i32,
) -> (u8, u8) {
    let magnitude = percent.clamp(-100, 100).abs();
    match direction {
        TurnDirection::Right => (
            convert_speed(profile, magnitude),
            convert_speed(profile, -magnitude),
        ),
        TurnDirection::Left => (
            convert_speed(profile, -magnitude),
            convert_speed(profile, magnitude),
        ),
    }
}

/// Cadence for waiting out a bounded move: settle, then poll the position
/// flag at a fixed interval, optionally giving up after a number of
/// attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollPolicy {
    pub settle_ms: u32,
    pub interval_ms: u32,
    /// `None` polls until the device reports completion, however long that
    /// takes.
    pub max_attempts: Option<u32>,
}

impl PollPolicy {
    /// The profile's cadence with no attempt limit.
    pub fn unbounded(profile: &CalibrationProfile) -> Self {
        Self {
            settle_ms: profile.timing.settle_ms,
            interval_ms: profile.timing.poll_interval_ms,
            max_attempts: None,
        }
    }

    /// The profile's cadence, giving up after `max_attempts` checks.
    pub fn bounded(profile: &CalibrationProfile, max_attempts: u32) -> Self {
        Self {
            max_attempts: Some(max_attempts.max(1)),
            ..Self::unbounded(profile)
        }
    }
}
