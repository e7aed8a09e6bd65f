//! Frame-level transport over the gated byte bus

use crate::core::constants::{BYTE_GAP_US, FRAME_SIZE, SELECT_SETTLE_US};
use crate::core::Frame;
use crate::hardware::BusInterface;

/// Sends and receives fixed-length frames, one byte at a time, with the
/// chip-select sequencing and inter-byte gaps the device firmware needs.
///
/// No opcode interpretation happens here; bytes are exchanged
/// unconditionally and correctness of the exchange is the bus's business.
pub struct FrameTransport {
    bus: Box<dyn BusInterface>,
    select_settle_us: u32,
    byte_gap_us: u32,
}

impl FrameTransport {
    pub fn new(bus: Box<dyn BusInterface>) -> Self {
        Self {
            bus,
            select_settle_us: SELECT_SETTLE_US,
            byte_gap_us: BYTE_GAP_US,
        }
    }

    /// Transmit one command frame and collect the response frame exchanged
    /// on the same clock. Chip-select is asserted around the whole burst.
    pub fn transact(&mut self, command: &Frame) -> Frame {
        let mut response = [0u8; FRAME_SIZE];

        self.bus.select(true);
        self.bus.delay_us(self.select_settle_us);

        for (i, &tx) in command.as_bytes().iter().enumerate() {
            response[i] = self.bus.exchange(tx);
            if i + 1 < FRAME_SIZE {
                self.bus.delay_us(self.byte_gap_us);
            }
        }

        self.bus.delay_us(self.select_settle_us);
        self.bus.select(false);

        Frame::from_bytes(response)
    }

    /// Microsecond wait on the host delay primitive.
    pub fn delay_us(&mut self, micros: u32) {
        self.bus.delay_us(micros);
    }

    /// Millisecond wait on the host delay primitive.
    pub fn delay_ms(&mut self, millis: u32) {
        self.bus.delay_ms(millis);
    }
}
