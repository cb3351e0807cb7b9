//! Test helpers: deterministic stand-ins for every board capability.
//!
//! The stubs use interior mutability and implement the capability traits
//! for shared references, so a test can hand a component to the engine and
//! keep a handle for inspection.

use core::cell::{Cell, RefCell};
use core::convert::Infallible;

use crate::service::{Entropy, PowerStore, StateObserver, Transport};
use crate::time::Clock;

/// One framed bus transaction, bytes in wire order.
pub type Frame = heapless::Vec<u8, 64>;

/// A bounded log of framed transactions.
pub type Frames = heapless::Vec<Frame, 32>;

/// A [`Transport`] that records every framed transaction.
///
/// Panics on protocol violations: writing outside of a frame, or enabling
/// the bus while a frame is already open.
#[derive(Default)]
pub struct RecordingTransport {
    frames: RefCell<Frames>,
    open: RefCell<Option<Frame>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded frames, clearing the log.
    pub fn take_frames(&self) -> Frames {
        assert!(
            self.open.borrow().is_none(),
            "a framed transaction is still open"
        );
        core::mem::take(&mut *self.frames.borrow_mut())
    }

    /// Returns the number of recorded frames without clearing the log.
    pub fn frames_len(&self) -> usize {
        self.frames.borrow().len()
    }
}

impl Transport for &RecordingTransport {
    type Error = Infallible;

    fn enable(&mut self) -> Result<(), Self::Error> {
        let mut open = self.open.borrow_mut();
        assert!(open.is_none(), "transactions must not interleave");
        *open = Some(Frame::new());
        Ok(())
    }

    fn disable(&mut self) -> Result<(), Self::Error> {
        let frame = self
            .open
            .borrow_mut()
            .take()
            .expect("disable without a matching enable");
        self.frames
            .borrow_mut()
            .push(frame)
            .expect("frame log overflow, drain it with take_frames");
        Ok(())
    }

    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        self.open
            .borrow_mut()
            .as_mut()
            .expect("write outside of a framed transaction")
            .push(byte)
            .expect("frame longer than any real chain transaction");
        Ok(())
    }
}

/// A [`Clock`] whose time is advanced by hand.
#[derive(Default)]
pub struct ManualClock {
    now_ms: Cell<u32>,
}

impl ManualClock {
    pub fn new(now_ms: u32) -> Self {
        Self {
            now_ms: Cell::new(now_ms),
        }
    }

    pub fn set(&self, now_ms: u32) {
        self.now_ms.set(now_ms);
    }

    pub fn advance(&self, delta_ms: u32) {
        self.now_ms.set(self.now_ms.get().wrapping_add(delta_ms));
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u32 {
        self.now_ms.get()
    }
}

/// An in-memory [`PowerStore`].
#[derive(Default)]
pub struct MemoryStore {
    value: Cell<Option<bool>>,
}

impl MemoryStore {
    pub fn with_value(enabled: bool) -> Self {
        Self {
            value: Cell::new(Some(enabled)),
        }
    }

    pub fn value(&self) -> Option<bool> {
        self.value.get()
    }
}

impl PowerStore for &MemoryStore {
    fn load(&mut self) -> Option<bool> {
        self.value.get()
    }

    fn save(&mut self, enabled: bool) {
        self.value.set(Some(enabled));
    }
}

/// A [`StateObserver`] keeping every published state.
#[derive(Default)]
pub struct ObserverLog {
    published: RefCell<heapless::Vec<bool, 16>>,
}

impl ObserverLog {
    pub fn published(&self) -> heapless::Vec<bool, 16> {
        self.published.borrow().clone()
    }
}

impl StateObserver for &ObserverLog {
    fn publish(&mut self, enabled: bool) {
        self.published
            .borrow_mut()
            .push(enabled)
            .expect("observer log overflow");
    }
}

/// Deterministic xorshift32 [`Entropy`] source.
pub struct SeededRng {
    state: u32,
}

impl SeededRng {
    pub fn new(seed: u32) -> Self {
        assert_ne!(seed, 0, "xorshift needs a non-zero seed");
        Self { state: seed }
    }
}

impl Entropy for SeededRng {
    fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_transport_keeps_wire_order() {
        let transport = RecordingTransport::new();

        let mut bus = &transport;
        bus.enable().unwrap();
        bus.write_byte(0x0C).unwrap();
        bus.write_byte(0x01).unwrap();
        bus.disable().unwrap();

        let frames = transport.take_frames();
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].as_slice(), &[0x0C, 0x01]);
        assert_eq!(transport.frames_len(), 0);
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let mut a = SeededRng::new(0xDEAD_BEEF);
        let mut b = SeededRng::new(0xDEAD_BEEF);
        for _ in 0..64 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }
}
