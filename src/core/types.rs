//! Core data types shared across the driver

use crate::core::constants::FRAME_SIZE;
use crate::hardware::{DriverError, DriverResult};
use serde::{Deserialize, Serialize};

/// Device opcodes, one per supported command frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Opcode {
    /// Halt all outputs
    Stop = 0xCB,
    /// Set the beak LED and all four tail LEDs in one frame
    SetAllLeds = 0xD0,
    /// Set both motors (velocity + tick count per side)
    SetMotors = 0xD2,
    /// Set a single LED by port number
    SetSingleLed = 0xD3,
    /// Request the 16-byte sensor response
    ReadSensors = 0xD4,
    /// Zero both wheel encoders
    ResetEncoders = 0xD5,
}

impl Opcode {
    pub fn byte(self) -> u8 {
        self as u8
    }
}

/// Fixed-length command/response frame exchanged over the bus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    bytes: [u8; FRAME_SIZE],
}

impl Frame {
    /// Build a command frame: opcode first, then payload, padded out to the
    /// fixed length with `filler`. Payloads longer than the frame can hold
    /// are rejected without transmission.
    pub fn command(opcode: Opcode, payload: &[u8], filler: u8) -> DriverResult<Self> {
        if payload.len() > FRAME_SIZE - 1 {
            return Err(DriverError::PayloadTooLong {
                length: payload.len(),
                max: FRAME_SIZE - 1,
            });
        }

        let mut bytes = [filler; FRAME_SIZE];
        bytes[0] = opcode.byte();
        bytes[1..1 + payload.len()].copy_from_slice(payload);
        Ok(Self { bytes })
    }

    /// Wrap a raw 16-byte buffer (e.g. a received response).
    pub fn from_bytes(bytes: [u8; FRAME_SIZE]) -> Self {
        Self { bytes }
    }

    /// First byte of the frame.
    pub fn opcode_byte(&self) -> u8 {
        self.bytes[0]
    }

    /// Everything after the opcode byte.
    pub fn payload(&self) -> &[u8] {
        &self.bytes[1..]
    }

    pub fn as_bytes(&self) -> &[u8; FRAME_SIZE] {
        &self.bytes
    }

    pub fn into_bytes(self) -> [u8; FRAME_SIZE] {
        self.bytes
    }
}

/// Linear motion direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Forward,
    Backward,
}

/// Spin direction for in-place turns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnDirection {
    Left,
    Right,
}

/// Left/right selector for paired sensors and encoders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// Tail LED addressing: one of the four ports, or all of them at once
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TailPort {
    One,
    Two,
    Three,
    Four,
    All,
}

impl TailPort {
    /// Device port number for a single tail LED. The beak is port 0.
    pub fn port_number(self) -> Option<u8> {
        match self {
            TailPort::One => Some(1),
            TailPort::Two => Some(2),
            TailPort::Three => Some(3),
            TailPort::Four => Some(4),
            TailPort::All => None,
        }
    }
}

/// Robot-frame axis selector for inertial readings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// Discrete orientation states derived from the rotated acceleration vector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    BeakUp,
    BeakDown,
    TiltLeft,
    TiltRight,
    Level,
    UpsideDown,
    Shake,
}

/// An LED color as channel percentages (0-100)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LedColor {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl LedColor {
    pub const OFF: LedColor = LedColor {
        red: 0,
        green: 0,
        blue: 0,
    };

    /// Build a color from arbitrary integers, clamping each channel to the
    /// 0-100 percent range.
    pub fn from_percent(red: i32, green: i32, blue: i32) -> Self {
        Self {
            red: red.clamp(0, 100) as u8,
            green: green.clamp(0, 100) as u8,
            blue: blue.clamp(0, 100) as u8,
        }
    }

    /// Channel bytes as transmitted on the wire (0-100% scaled to 0-255).
    pub fn wire_bytes(&self) -> [u8; 3] {
        let scale = |p: u8| ((p as f64) * 2.55).round() as u8;
        [scale(self.red), scale(self.green), scale(self.blue)]
    }
}
