use std::{
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
    time::Duration,
};
use tokio::sync::mpsc::UnboundedSender;
use tracing::debug;

/// One step of the increment process, tagged with the session it belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tick {
    pub generation: u64,
}

/// Cadence of the increment process
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cadence {
    /// Delay before each step
    pub step_delay: Duration,
    /// Number of steps in one session
    pub steps: u32,
}

impl Default for Cadence {
    fn default() -> Self {
        Self {
            step_delay: Duration::from_millis(20),
            steps: 101,
        }
    }
}

/// Session counter shared between the controller and its increment tasks.
///
/// Every toggle bumps the counter; a task only keeps going while the counter
/// still holds the generation it was started with.
#[derive(Clone, Debug, Default)]
pub struct Generation(Arc<AtomicU64>);

impl Generation {
    pub fn current(&self) -> u64 {
        self.0.load(Ordering::Acquire)
    }

    /// Invalidates every running task and returns the new generation.
    pub fn bump(&self) -> u64 {
        self.0.fetch_add(1, Ordering::AcqRel) + 1
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.current() == generation
    }
}

/// Sends `cadence.steps` ticks, sleeping `cadence.step_delay` before each.
/// Returns early once `generation` is stale or the receiver is gone.
pub async fn run_increments(
    generation: Generation,
    own: u64,
    cadence: Cadence,
    tick_tx: UnboundedSender<Tick>,
) {
    for step in 0..cadence.steps {
        tokio::time::sleep(cadence.step_delay).await;
        if !generation.is_current(own) {
            debug!(generation = own, step, "stale increment process exiting");
            return;
        }
        if tick_tx.send(Tick { generation: own }).is_err() {
            return;
        }
    }
    debug!(generation = own, "increment process finished");
}
