//! Mock bus implementation for testing and development

use crate::core::constants::FRAME_SIZE;
use crate::hardware::BusInterface;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// In-memory bus double. Records every byte clocked out, delimited into
/// frames by the chip-select edges, and plays back scripted response
/// frames; when the script runs dry it answers with a fixed default frame
/// (all zeros unless changed).
///
/// Delays are counted instead of slept, so polling code runs instantly
/// under test.
pub struct MockBus {
    state: Rc<RefCell<MockBusState>>,
}

/// Inspection handle that stays usable after the bus itself has been boxed
/// into a transport.
#[derive(Clone)]
pub struct MockBusHandle {
    state: Rc<RefCell<MockBusState>>,
}

#[derive(Default)]
struct MockBusState {
    selected: bool,
    current_tx: Vec<u8>,
    sent_frames: Vec<Vec<u8>>,
    select_cycles: u32,
    responses: VecDeque<[u8; FRAME_SIZE]>,
    default_response: [u8; FRAME_SIZE],
    current_rx: [u8; FRAME_SIZE],
    rx_pos: usize,
    delay_us_total: u64,
}

impl MockBus {
    pub fn new() -> Self {
        Self {
            state: Rc::new(RefCell::new(MockBusState::default())),
        }
    }

    /// Queue one response frame; responses play back in FIFO order, one per
    /// chip-select cycle.
    pub fn queue_response(&mut self, frame: [u8; FRAME_SIZE]) {
        self.state.borrow_mut().responses.push_back(frame);
    }

    /// Frame returned once the scripted queue is empty.
    pub fn set_default_response(&mut self, frame: [u8; FRAME_SIZE]) {
        self.state.borrow_mut().default_response = frame;
    }

    /// Handle for inspecting traffic after the bus is handed to the driver.
    pub fn handle(&self) -> MockBusHandle {
        MockBusHandle {
            state: Rc::clone(&self.state),
        }
    }
}

impl Default for MockBus {
    fn default() -> Self {
        Self::new()
    }
}

impl MockBusHandle {
    /// All frames transmitted so far, oldest first.
    pub fn sent_frames(&self) -> Vec<Vec<u8>> {
        self.state.borrow().sent_frames.clone()
    }

    /// The most recently completed frame, if any.
    pub fn last_frame(&self) -> Option<Vec<u8>> {
        self.state.borrow().sent_frames.last().cloned()
    }

    /// Number of completed frames.
    pub fn frame_count(&self) -> usize {
        self.state.borrow().sent_frames.len()
    }

    /// Number of completed chip-select assert/deassert cycles.
    pub fn select_cycles(&self) -> u32 {
        self.state.borrow().select_cycles
    }

    /// Accumulated delay the driver requested, in microseconds.
    pub fn total_delay_us(&self) -> u64 {
        self.state.borrow().delay_us_total
    }

    /// Queue a response frame mid-test.
    pub fn queue_response(&self, frame: [u8; FRAME_SIZE]) {
        self.state.borrow_mut().responses.push_back(frame);
    }

    /// Forget recorded traffic (queued responses are kept).
    pub fn clear_traffic(&self) {
        let mut state = self.state.borrow_mut();
        state.sent_frames.clear();
        state.select_cycles = 0;
        state.delay_us_total = 0;
    }
}

impl BusInterface for MockBus {
    fn select(&mut self, asserted: bool) {
        let mut state = self.state.borrow_mut();
        if asserted && !state.selected {
            state.selected = true;
            state.current_tx.clear();
            state.current_rx = state
                .responses
                .pop_front()
                .unwrap_or(state.default_response);
            state.rx_pos = 0;
        } else if !asserted && state.selected {
            state.selected = false;
            state.select_cycles += 1;
            let frame = std::mem::take(&mut state.current_tx);
            state.sent_frames.push(frame);
        }
    }

    fn exchange(&mut self, tx: u8) -> u8 {
        let mut state = self.state.borrow_mut();
        state.current_tx.push(tx);
        let rx = state.current_rx.get(state.rx_pos).copied().unwrap_or(0);
        state.rx_pos += 1;
        rx
    }

    fn delay_us(&mut self, micros: u32) {
        self.state.borrow_mut().delay_us_total += micros as u64;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_select_delimited_frames() {
        let mut bus = MockBus::new();
        let handle = bus.handle();

        bus.select(true);
        bus.exchange(0xCB);
        bus.exchange(0xFF);
        bus.select(false);

        bus.select(true);
        bus.exchange(0xD4);
        bus.select(false);

        let frames = handle.sent_frames();
        assert_eq!(frames, vec![vec![0xCB, 0xFF], vec![0xD4]]);
        assert_eq!(handle.select_cycles(), 2);
    }

    #[test]
    fn test_scripted_responses_then_default() {
        let mut bus = MockBus::new();
        bus.queue_response([0x11; FRAME_SIZE]);

        bus.select(true);
        assert_eq!(bus.exchange(0x00), 0x11);
        bus.select(false);

        // Queue exhausted: falls back to the default all-zero frame.
        bus.select(true);
        assert_eq!(bus.exchange(0x00), 0x00);
        bus.select(false);
    }

    #[test]
    fn test_delays_are_counted_not_slept() {
        let mut bus = MockBus::new();
        let handle = bus.handle();
        bus.delay_us(100);
        bus.delay_ms(2);
        assert_eq!(handle.total_delay_us(), 2100);
    }
}
