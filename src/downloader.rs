use tokio::{
    runtime::Handle,
    sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel},
};
use tracing::info;

use crate::{
    model::DownloadState,
    progress::{Cadence, Generation, Tick, run_increments},
};

/// Owns the button state and the synthetic download feeding it.
///
/// The frame loop is the only writer: ticks from the increment task are
/// queued on a channel and applied in [`DownloadController::poll`].
pub struct DownloadController {
    state: DownloadState,
    generation: Generation,
    cadence: Cadence,
    runtime: Handle,
    tick_tx: UnboundedSender<Tick>,
    tick_rx: UnboundedReceiver<Tick>,
}

impl DownloadController {
    pub fn new(runtime: Handle, cadence: Cadence) -> Self {
        let (tick_tx, tick_rx) = unbounded_channel();
        Self {
            state: DownloadState::default(),
            generation: Generation::default(),
            cadence,
            runtime,
            tick_tx,
            tick_rx,
        }
    }

    pub fn state(&self) -> DownloadState {
        self.state
    }

    /// Handles a click: starts a fresh session or stops the running one.
    pub fn toggle(&mut self) {
        // Any task from an earlier session goes stale here, whichever way we flip.
        let own = self.generation.bump();
        let from = self.state.status();
        if self.state.toggle() {
            info!(generation = own, ?from, "download started");
            self.runtime.spawn(run_increments(
                self.generation.clone(),
                own,
                self.cadence,
                self.tick_tx.clone(),
            ));
        } else {
            info!(generation = own, ?from, "download stopped");
        }
    }

    /// Drains pending ticks. Returns true if the state changed.
    pub fn poll(&mut self) -> bool {
        let before = self.state;
        while let Ok(tick) = self.tick_rx.try_recv() {
            if !self.state.active || !self.generation.is_current(tick.generation) {
                continue;
            }
            let was_completed = self.state.completed();
            self.state.advance();
            if !was_completed && self.state.completed() {
                info!(generation = tick.generation, "download completed");
            }
        }
        self.state != before
    }
}
