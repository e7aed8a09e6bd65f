//! Raw bus collaborator interface

/// Host-side bus primitives the driver is built on: chip-select control,
/// single-byte synchronous exchange, and busy-wait delays.
///
/// The host board owns pin mapping and bus setup (clock polarity/phase, bit
/// order, clock rate) and hands the driver an already-configured bus. The
/// driver never touches pins outside this trait.
pub trait BusInterface {
    /// Drive the chip-select line (`true` = device selected).
    fn select(&mut self, asserted: bool);

    /// Clock one byte out and return the byte clocked in.
    fn exchange(&mut self, tx: u8) -> u8;

    /// Busy-wait for the given number of microseconds.
    fn delay_us(&mut self, micros: u32);

    /// Longer wait used between polls; cooperative schedulers may run other
    /// callbacks during it.
    fn delay_ms(&mut self, millis: u32) {
        self.delay_us(millis.saturating_mul(1000));
    }
}
