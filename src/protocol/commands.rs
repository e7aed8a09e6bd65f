//! Command frame encoders
//!
//! Pure builders that lay typed arguments out into the device's fixed
//! frame shapes. Nothing here touches the bus; the driver routes the built
//! frames through the arbiter and transport.

use crate::core::constants::{FILLER_FF, FILLER_ZERO, MOTOR_CONTROL_MODE};
use crate::core::{Frame, LedColor, Opcode};
use crate::hardware::DriverResult;

/// Stop-everything frame, also used as the startup handshake.
pub fn stop() -> DriverResult<Frame> {
    Frame::command(Opcode::Stop, &[], FILLER_FF)
}

/// Full LED frame: beak color followed by all four tail slots.
pub fn set_all_leds(beak: &LedColor, tail: &[LedColor; 4]) -> DriverResult<Frame> {
    let mut payload = [0u8; 15];
    payload[0..3].copy_from_slice(&beak.wire_bytes());
    for (slot, color) in tail.iter().enumerate() {
        let at = 3 + slot * 3;
        payload[at..at + 3].copy_from_slice(&color.wire_bytes());
    }
    Frame::command(Opcode::SetAllLeds, &payload, FILLER_FF)
}

/// One LED by device port number, zero-filled tail.
pub fn set_single_led(port: u8, color: &LedColor) -> DriverResult<Frame> {
    let wire = color.wire_bytes();
    Frame::command(
        Opcode::SetSingleLed,
        &[port, wire[0], wire[1], wire[2]],
        FILLER_ZERO,
    )
}

/// Motor frame: mode byte, then per-side velocity and 24-bit tick count
/// (MSB first). Zero ticks means run continuously; bounded moves must
/// never pass zero here.
pub fn set_motors(
    left_velocity: u8,
    left_ticks: u32,
    right_velocity: u8,
    right_ticks: u32,
) -> DriverResult<Frame> {
    let lt = tick_bytes(left_ticks);
    let rt = tick_bytes(right_ticks);
    Frame::command(
        Opcode::SetMotors,
        &[
            MOTOR_CONTROL_MODE,
            left_velocity,
            lt[0],
            lt[1],
            lt[2],
            right_velocity,
            rt[0],
            rt[1],
            rt[2],
        ],
        FILLER_FF,
    )
}

/// Sensor poll frame; the response is the 16-channel snapshot.
pub fn read_sensors() -> DriverResult<Frame> {
    Frame::command(Opcode::ReadSensors, &[], FILLER_FF)
}

/// Zero both wheel encoders.
pub fn reset_encoders() -> DriverResult<Frame> {
    Frame::command(Opcode::ResetEncoders, &[], FILLER_FF)
}

fn tick_bytes(ticks: u32) -> [u8; 3] {
    [(ticks >> 16) as u8, (ticks >> 8) as u8, ticks as u8]
}
