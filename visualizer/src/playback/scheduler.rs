use std::time::Duration;

use log::trace;
use tokio::{
    runtime::Handle,
    sync::mpsc,
    time::{self, Instant, MissedTickBehavior},
};
use tokio_util::sync::CancellationToken;

/// One firing of a recurring timer, stamped with the generation it was armed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    pub generation: u64,
}

/// A running recurring timer. Cancelling consumes the handle, so a cancelled timer can't be
/// touched again.
pub trait TimerHandle {
    fn cancel(self);
}

/// Arms recurring timers.
pub trait Scheduler {
    type Handle: TimerHandle;

    /// Starts firing `Tick { generation }` every `interval` until the returned handle is
    /// cancelled. The first tick fires one full interval after arming.
    fn schedule_every(&mut self, interval: Duration, generation: u64) -> Self::Handle;
}

/// Schedules ticks as tokio tasks and delivers them over an unbounded channel.
#[derive(Debug, Clone)]
pub struct TokioScheduler {
    runtime: Handle,
    tx: mpsc::UnboundedSender<Tick>,
}

impl TokioScheduler {
    /// Creates a new `TokioScheduler`.
    ///
    /// # Arguments
    /// * `runtime` - The runtime the ticker tasks are spawned on.
    ///
    /// # Returns
    /// The scheduler and the receiving end of its ticks.
    pub fn new(runtime: Handle) -> (Self, mpsc::UnboundedReceiver<Tick>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { runtime, tx }, rx)
    }
}

impl Scheduler for TokioScheduler {
    type Handle = TickerHandle;

    fn schedule_every(&mut self, interval: Duration, generation: u64) -> TickerHandle {
        let period = interval.max(Duration::from_millis(1));
        let token = CancellationToken::new();
        let cancelled = token.clone();
        let tx = self.tx.clone();

        self.runtime.spawn(async move {
            let mut ticker = time::interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    biased;
                    _ = cancelled.cancelled() => break,
                    _ = ticker.tick() => {
                        if tx.send(Tick { generation }).is_err() {
                            break;
                        }
                    }
                }
            }

            trace!(generation = generation; "ticker stopped");
        });

        TickerHandle { token }
    }
}

/// Handle to a tokio ticker task. Dropping it cancels the task as well.
#[derive(Debug)]
pub struct TickerHandle {
    token: CancellationToken,
}

impl TickerHandle {
    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }
}

impl TimerHandle for TickerHandle {
    fn cancel(self) {
        self.token.cancel();
    }
}

impl Drop for TickerHandle {
    fn drop(&mut self) {
        self.token.cancel();
    }
}
