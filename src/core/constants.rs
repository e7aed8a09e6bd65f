//! Protocol constants and timing parameters

/// Every command and response frame is exactly this many bytes.
pub const FRAME_SIZE: usize = 16;

/// Conventional filler for motion and LED command payloads.
pub const FILLER_FF: u8 = 0xFF;

/// Filler for the single-LED payload tail.
pub const FILLER_ZERO: u8 = 0x00;

/// Mode byte selecting position/velocity control in a motor frame.
pub const MOTOR_CONTROL_MODE: u8 = 0x40;

/// Largest tick count the 3-byte wire field can carry.
pub const MAX_TICKS: u32 = 0x00FF_FFFF;

/// Bit flagging an in-progress bounded move in the left-line channel.
pub const POSITION_FLAG_BIT: u8 = 0x80;

/// Pause before the first startup frame, so the device firmware is past
/// its bootloader window.
pub const STARTUP_DELAY_MS: u32 = 2000;

/// Settle time after releasing chip-select during startup (microseconds).
pub const STARTUP_SELECT_US: u32 = 500;

/// Chip-select assertion/deassertion settle time (microseconds).
pub const SELECT_SETTLE_US: u32 = 4;

/// Gap between consecutive bytes of a frame (microseconds).
pub const BYTE_GAP_US: u32 = 100;
