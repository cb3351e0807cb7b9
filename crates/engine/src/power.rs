//! Power state tracking with persistence and external notification.

use wopr_core::{PowerStore, StateObserver};

/// Tracks the enabled/disabled state of the display.
///
/// The controller restores the state from persistent storage at startup,
/// persists every change fire-and-forget, and mirrors the state to a
/// passive observer. The immediate clear-and-refresh on a disable
/// transition is orchestrated by [`crate::App`], which owns the chain.
pub struct PowerControl<S, O> {
    enabled: bool,
    store: S,
    observer: O,
}

impl<S: PowerStore, O: StateObserver> PowerControl<S, O> {
    pub fn new(store: S, observer: O) -> Self {
        Self {
            enabled: true,
            store,
            observer,
        }
    }

    /// Adopts the persisted state, defaulting to enabled when none was
    /// ever saved, and publishes the outcome.
    pub fn restore(&mut self) {
        match self.store.load() {
            Some(saved) => {
                self.enabled = saved;
                log::debug!("restored power state: {}", on_off(saved));
            }
            None => {
                self.enabled = true;
                log::debug!("no saved power state, defaulting to ON");
            }
        }
        self.observer.publish(self.enabled);
    }

    /// Switches the state, publishing and persisting the new value.
    pub fn set(&mut self, enabled: bool) {
        self.enabled = enabled;
        self.observer.publish(enabled);
        self.store.save(enabled);
        log::debug!("display {}", on_off(enabled));
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

fn on_off(enabled: bool) -> &'static str {
    if enabled {
        "ON"
    } else {
        "OFF"
    }
}
