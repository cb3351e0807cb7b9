#![cfg_attr(not(any(feature = "std", test)), no_std)]

//! WOPR blinkenlights engine.
//!
//! The engine renders the classic movie-prop "random blinking lights"
//! pattern on a chain of MAX7219 LED matrices. It owns the framebuffer and
//! the frame timing; the board supplies the raw capabilities — bus
//! transport, persistent storage, a state observer, a clock and an entropy
//! source — through the [`Board`] trait, and drives the engine by calling
//! [`App::poll`] from its main loop.

use serde::{Deserialize, Serialize};
use wopr_core::{Clock, Entropy, PowerStore, StateObserver, Transport, MAX_MATRIX_COUNT};

pub use crate::app::App;

mod animation;
mod app;
mod power;
mod scheduler;

/// Static engine configuration, fixed before [`App`] construction.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Number of chained MAX7219 chips.
    pub matrix_count: u8,
    /// Display brightness, `0..=15`, written once during initialization.
    pub intensity: u8,
    /// Lower bound of the random inter-frame delay.
    pub min_interval_ms: u32,
    /// Upper bound of the random inter-frame delay.
    pub max_interval_ms: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            matrix_count: 12,
            intensity: 0,
            min_interval_ms: 333,
            max_interval_ms: 1332,
        }
    }
}

impl Config {
    /// Checks the configuration invariants.
    ///
    /// # Panics
    ///
    /// On any violated invariant; a bad configuration is a programming
    /// error, not a runtime condition the engine recovers from.
    pub(crate) fn assert_valid(&self) {
        assert!(
            (1..=MAX_MATRIX_COUNT).contains(&(self.matrix_count as usize)),
            "matrix_count must be within 1..={}",
            MAX_MATRIX_COUNT
        );
        assert!(self.intensity <= 15, "intensity must be within 0..=15");
        assert!(
            self.min_interval_ms <= self.max_interval_ms,
            "min_interval_ms must not exceed max_interval_ms"
        );
    }
}

/// Board-specific capabilities consumed by the engine.
pub trait Board {
    /// Display bus transport.
    type Transport: Transport;
    /// Persistent power state storage.
    type Store: PowerStore;
    /// Sink notified about power state changes.
    type Observer: StateObserver;
    /// Millisecond clock.
    type Clock: Clock;
    /// Randomness source.
    type Rng: Entropy;

    /// Returns all board components.
    ///
    /// This method brings the component ownership to the caller and can be
    /// invoked only once.
    fn take_components(&mut self) -> Option<Components<Self>>;
}

/// The capability set handed over by [`Board::take_components`].
pub struct Components<B: Board + ?Sized> {
    pub transport: B::Transport,
    pub store: B::Store,
    pub observer: B::Observer,
    pub clock: B::Clock,
    pub rng: B::Rng,
}
