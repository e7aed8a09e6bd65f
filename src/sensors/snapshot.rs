//! Named channels of the 16-byte sensor response

use crate::calibration::CalibrationProfile;
use crate::core::constants::{FRAME_SIZE, POSITION_FLAG_BIT};
use crate::core::{Frame, LedColor, Side};

mod channel {
    pub const FIRMWARE: usize = 0;
    pub const DISTANCE_HI: usize = 2;
    pub const DISTANCE_LO: usize = 3;
    pub const LIGHT_LEFT: usize = 4;
    pub const LIGHT_RIGHT: usize = 5;
    pub const LINE_LEFT: usize = 6;
    pub const LINE_RIGHT: usize = 7;
    pub const BATTERY: usize = 8;
    pub const ENCODER_LEFT: usize = 9;
    pub const ENCODER_RIGHT: usize = 12;
}

/// One raw sensor response with calibrated accessors.
///
/// Starts zeroed at driver construction; until the first successful read,
/// getters derive their values from the zero frame, which callers cannot
/// distinguish from genuine zero readings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SensorSnapshot {
    raw: [u8; FRAME_SIZE],
}

impl SensorSnapshot {
    pub fn zeroed() -> Self {
        Self {
            raw: [0; FRAME_SIZE],
        }
    }

    pub fn from_frame(frame: &Frame) -> Self {
        Self {
            raw: *frame.as_bytes(),
        }
    }

    /// Firmware revision byte reported in every response.
    pub fn firmware_version(&self) -> u8 {
        self.raw[channel::FIRMWARE]
    }

    /// Rangefinder reading in whole centimeters.
    pub fn distance_cm(&self, profile: &CalibrationProfile) -> u32 {
        let raw = u32::from(self.raw[channel::DISTANCE_HI]) << 8
            | u32::from(self.raw[channel::DISTANCE_LO]);
        (raw as f64 * profile.distance_scale).round() as u32
    }

    /// Ambient light as a 0-100 percent, with the beak LED's bleed into the
    /// sensor subtracted out.
    pub fn light_percent(
        &self,
        side: Side,
        profile: &CalibrationProfile,
        beak: &LedColor,
    ) -> u8 {
        let (raw, correction) = match side {
            Side::Left => (
                self.raw[channel::LIGHT_LEFT],
                &profile.light_correction_left,
            ),
            Side::Right => (
                self.raw[channel::LIGHT_RIGHT],
                &profile.light_correction_right,
            ),
        };
        let corrected = (raw as f64 - correction.evaluate(beak)).round();
        corrected.clamp(0.0, 100.0) as u8
    }

    /// Line sensor whiteness as a 0-100 percent. Bit 7 of the left channel
    /// carries the position-control flag and is masked off first.
    pub fn line_percent(&self, side: Side, profile: &CalibrationProfile) -> u8 {
        let raw = match side {
            Side::Left => self.raw[channel::LINE_LEFT],
            Side::Right => self.raw[channel::LINE_RIGHT],
        } & !POSITION_FLAG_BIT;
        let rescaled = 100.0 - (raw as f64 * 100.0 / 127.0) - profile.line_offset;
        rescaled.round().clamp(0.0, 100.0) as u8
    }

    /// Battery voltage in millivolts.
    pub fn battery_millivolts(&self, profile: &CalibrationProfile) -> u32 {
        let raw = self.raw[channel::BATTERY] as f64;
        (raw * profile.battery_scale + profile.battery_offset_mv).round() as u32
    }

    /// Wheel encoder position in rotations, rounded to two decimals. The
    /// wire value is a 24-bit two's-complement tick count, MSB first.
    pub fn encoder_rotations(&self, side: Side, profile: &CalibrationProfile) -> f64 {
        let at = match side {
            Side::Left => channel::ENCODER_LEFT,
            Side::Right => channel::ENCODER_RIGHT,
        };
        let mut ticks = i32::from(self.raw[at]) << 16
            | i32::from(self.raw[at + 1]) << 8
            | i32::from(self.raw[at + 2]);
        if ticks >= 0x80_0000 {
            ticks -= 0x100_0000;
        }
        let rotations = ticks as f64 / profile.ticks_per_rotation;
        (rotations * 100.0).round() / 100.0
    }

    /// Device-reported bit for an in-progress bounded move or turn.
    pub fn position_flag(&self) -> bool {
        self.raw[channel::LINE_LEFT] & POSITION_FLAG_BIT != 0
    }
}
