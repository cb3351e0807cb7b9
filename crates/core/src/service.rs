//! Capability traits the display engine consumes from the board.

use core::fmt::Debug;

use embedded_hal::blocking::spi::Write;
use embedded_hal::digital::v2::OutputPin;

/// Raw display bus.
///
/// Bytes written between [`enable`](Self::enable) and
/// [`disable`](Self::disable) must be delivered in order and without loss;
/// the chained chips latch the shifted data on the disable edge.
pub trait Transport {
    type Error: Debug;

    /// Acquires the bus and begins a framed transaction.
    fn enable(&mut self) -> Result<(), Self::Error>;
    /// Ends the transaction, releasing the bus and latching the frame.
    fn disable(&mut self) -> Result<(), Self::Error>;
    /// Shifts one byte into the chain.
    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error>;
}

/// Persistent last-write-wins storage for the power state.
///
/// Persistence is fire-and-forget: implementations report failures through
/// their own logging, never to the caller.
pub trait PowerStore {
    /// Returns the previously saved state, if any.
    fn load(&mut self) -> Option<bool>;
    /// Saves the state.
    fn save(&mut self, enabled: bool);
}

/// Passive sink notified about power state changes. Must not block.
pub trait StateObserver {
    fn publish(&mut self, enabled: bool);
}

/// Randomness capability of the board.
///
/// Injected rather than hardcoded so that tests can substitute a
/// deterministic seeded sequence.
pub trait Entropy {
    fn next_u32(&mut self) -> u32;
}

impl<T: Entropy + ?Sized> Entropy for &mut T {
    fn next_u32(&mut self) -> u32 {
        T::next_u32(self)
    }
}

/// [`Transport`] implementation over a blocking SPI bus with an active-low
/// chip-select pin, the usual way a MAX7219 chain is wired up.
pub struct SpiTransport<SPI, CS> {
    spi: SPI,
    cs: CS,
}

/// An error of the underlying SPI bus or of the chip-select pin.
#[derive(Debug)]
pub enum SpiTransportError<S, P> {
    Bus(S),
    Pin(P),
}

impl<SPI, CS> SpiTransport<SPI, CS> {
    pub fn new(spi: SPI, cs: CS) -> Self {
        Self { spi, cs }
    }

    /// Releases the underlying bus and pin.
    pub fn free(self) -> (SPI, CS) {
        (self.spi, self.cs)
    }
}

impl<SPI, CS> Transport for SpiTransport<SPI, CS>
where
    SPI: Write<u8>,
    CS: OutputPin,
    SPI::Error: Debug,
    CS::Error: Debug,
{
    type Error = SpiTransportError<SPI::Error, CS::Error>;

    fn enable(&mut self) -> Result<(), Self::Error> {
        self.cs.set_low().map_err(SpiTransportError::Pin)
    }

    fn disable(&mut self) -> Result<(), Self::Error> {
        self.cs.set_high().map_err(SpiTransportError::Pin)
    }

    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        self.spi.write(&[byte]).map_err(SpiTransportError::Bus)
    }
}
