//! Engine composition: framebuffer, chain, scheduler and power control
//! wired together behind a poll-driven interface.

use wopr_core::proto::Chain;
use wopr_core::{Clock, FrameBuffer, Result};

use crate::power::PowerControl;
use crate::scheduler::FrameScheduler;
use crate::{animation, Board, Components, Config};

/// The WOPR display engine.
///
/// Owns the framebuffer exclusively; the host drives the engine by calling
/// [`poll`](Self::poll) from its loop and [`set_enabled`](Self::set_enabled)
/// from its toggle handler. All operations run to completion on the calling
/// thread, nothing blocks or sleeps.
pub struct App<B: Board> {
    config: Config,
    framebuffer: FrameBuffer,
    chain: Chain<B::Transport>,
    scheduler: FrameScheduler,
    power: PowerControl<B::Store, B::Observer>,
    clock: B::Clock,
    rng: B::Rng,
}

impl<B: Board> App<B> {
    /// Creates a new engine instance from the board capabilities.
    ///
    /// # Panics
    ///
    /// If the configuration violates its invariants or the board
    /// components have already been taken.
    pub fn new(board: &mut B, config: Config) -> Self {
        config.assert_valid();

        let Components {
            transport,
            store,
            observer,
            clock,
            mut rng,
        } = board
            .take_components()
            .expect("board components have already been taken");

        let scheduler = FrameScheduler::new(
            clock.now_ms(),
            config.min_interval_ms,
            config.max_interval_ms,
            &mut rng,
        );

        Self {
            framebuffer: FrameBuffer::new(config.matrix_count as usize),
            chain: Chain::new(transport, config.matrix_count as usize),
            scheduler,
            power: PowerControl::new(store, observer),
            clock,
            rng,
            config,
        }
    }

    /// Initializes the chain and restores the persisted power state.
    ///
    /// The display comes up dark; the first animation frame appears on the
    /// next due [`poll`](Self::poll).
    pub fn setup(&mut self) -> Result<()> {
        self.chain
            .initialize(self.config.intensity, &self.framebuffer)?;
        self.power.restore();

        log::info!(
            "WOPR display: {} matrices ({}x8 pixels), intensity {}, frame interval {}..{} ms",
            self.config.matrix_count,
            self.framebuffer.width(),
            self.config.intensity,
            self.config.min_interval_ms,
            self.config.max_interval_ms,
        );
        Ok(())
    }

    /// Advances the engine; fires at most one animation frame.
    ///
    /// Returns whether a frame was rendered.
    pub fn poll(&mut self) -> Result<bool> {
        let now_ms = self.clock.now_ms();
        if !self.scheduler.frame_due(now_ms) {
            return Ok(false);
        }

        animation::tick(&mut self.framebuffer, &mut self.rng, self.power.is_enabled());
        self.chain.refresh(&self.framebuffer)?;
        self.scheduler.frame_fired(now_ms, &mut self.rng);
        Ok(true)
    }

    /// Switches the display on or off.
    ///
    /// Disabling darkens the physical display synchronously instead of
    /// waiting for the next scheduled frame; enabling lets the next due
    /// frame bring the pattern back.
    pub fn set_enabled(&mut self, enabled: bool) -> Result<()> {
        self.power.set(enabled);
        if !enabled {
            self.framebuffer.clear();
            self.chain.refresh(&self.framebuffer)?;
        }
        Ok(())
    }

    /// Returns the current power state.
    pub fn is_enabled(&self) -> bool {
        self.power.is_enabled()
    }
}
