use std::time::Duration;

use log::{debug, trace};

use super::{Playback, PlaybackState, Scheduler, Tick, TimerHandle};

/// Owns the playback state of one visualization and the timer that advances it.
///
/// The timer is armed only while playing and cancelled on every transition out of playing,
/// on trajectory replacement and on drop. Each arming gets a new generation, and ticks from
/// any other generation are discarded, so a tick already queued when its timer was cancelled
/// can't move the index.
pub struct AnimationController<S: Scheduler> {
    playback: Playback,
    scheduler: S,
    interval: Duration,
    timer: Option<S::Handle>,
    generation: u64,
}

impl<S: Scheduler> AnimationController<S> {
    /// Creates a paused controller at index 0.
    ///
    /// # Arguments
    /// * `len` - The length of the trajectory being played.
    /// * `interval` - The period between ticks while playing.
    /// * `scheduler` - Arms the recurring timer.
    pub fn new(len: usize, interval: Duration, scheduler: S) -> Self {
        Self {
            playback: Playback::new(len),
            scheduler,
            interval,
            timer: None,
            generation: 0,
        }
    }

    pub fn state(&self) -> PlaybackState {
        self.playback.state()
    }

    pub fn len(&self) -> usize {
        self.playback.len()
    }

    pub fn is_empty(&self) -> bool {
        self.playback.is_empty()
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Whether the current step is the last one of the trajectory.
    pub fn is_at_end(&self) -> bool {
        self.playback.is_at_end()
    }

    /// Whether a timer is currently armed.
    pub fn is_armed(&self) -> bool {
        self.timer.is_some()
    }

    pub fn play(&mut self) {
        self.playback.play();
        self.sync_timer();
    }

    pub fn pause(&mut self) {
        self.playback.pause();
        self.sync_timer();
    }

    /// Toggles between playing and paused.
    pub fn toggle(&mut self) {
        if self.playback.is_playing() {
            self.pause();
        } else {
            self.play();
        }
    }

    pub fn step(&mut self) {
        self.playback.step();
        self.sync_timer();
    }

    pub fn scrub(&mut self, index: i64) {
        self.playback.scrub(index);
        self.sync_timer();
    }

    pub fn reset(&mut self) {
        self.playback.reset();
        self.sync_timer();
    }

    /// Points the controller at a new trajectory, unconditionally resetting it.
    pub fn replace_trajectory(&mut self, len: usize) {
        debug!(len = len; "trajectory replaced, resetting playback");
        self.playback.replace(len);
        self.sync_timer();
    }

    /// Applies a timer tick.
    ///
    /// # Returns
    /// Whether the tick belonged to the armed timer and moved the step index.
    pub fn on_tick(&mut self, tick: Tick) -> bool {
        if self.timer.is_none() || tick.generation != self.generation {
            trace!(
                tick = tick.generation,
                current = self.generation;
                "discarding stale tick"
            );
            return false;
        }

        let before = self.playback.state().step_index;
        self.playback.tick();
        self.sync_timer();
        self.playback.state().step_index != before
    }

    fn sync_timer(&mut self) {
        match (self.playback.is_playing(), self.timer.is_some()) {
            (true, false) => {
                self.generation += 1;
                let handle = self.scheduler.schedule_every(self.interval, self.generation);
                self.timer = Some(handle);
            }
            (false, true) => self.cancel_timer(),
            _ => {}
        }
    }

    fn cancel_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.cancel();
        }
    }
}

impl<S: Scheduler> Drop for AnimationController<S> {
    fn drop(&mut self) {
        self.cancel_timer();
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::*;

    #[derive(Debug, Default)]
    struct Log {
        armed: Vec<u64>,
        cancelled: Vec<u64>,
    }

    #[derive(Default)]
    struct ManualScheduler {
        log: Rc<RefCell<Log>>,
    }

    struct ManualHandle {
        generation: u64,
        log: Rc<RefCell<Log>>,
    }

    impl TimerHandle for ManualHandle {
        fn cancel(self) {
            self.log.borrow_mut().cancelled.push(self.generation);
        }
    }

    impl Scheduler for ManualScheduler {
        type Handle = ManualHandle;

        fn schedule_every(&mut self, _interval: Duration, generation: u64) -> ManualHandle {
            self.log.borrow_mut().armed.push(generation);
            ManualHandle {
                generation,
                log: Rc::clone(&self.log),
            }
        }
    }

    fn controller(len: usize) -> (AnimationController<ManualScheduler>, Rc<RefCell<Log>>) {
        let scheduler = ManualScheduler::default();
        let log = Rc::clone(&scheduler.log);
        let controller = AnimationController::new(len, Duration::from_millis(10), scheduler);
        (controller, log)
    }

    #[test]
    fn play_arms_and_pause_cancels() {
        let (mut c, log) = controller(5);

        c.play();
        assert!(c.is_armed());
        c.play();
        assert_eq!(log.borrow().armed, vec![1]);

        c.pause();
        assert!(!c.is_armed());
        assert_eq!(log.borrow().cancelled, vec![1]);
    }

    #[test]
    fn ticks_advance_until_the_end_and_disarm() {
        let (mut c, log) = controller(3);
        c.play();

        assert!(c.on_tick(Tick { generation: 1 }));
        assert_eq!(c.state(), PlaybackState { step_index: 1, is_playing: true });

        assert!(c.on_tick(Tick { generation: 1 }));
        assert_eq!(c.state(), PlaybackState { step_index: 2, is_playing: false });
        assert!(!c.is_armed());
        assert_eq!(log.borrow().cancelled, vec![1]);

        assert!(!c.on_tick(Tick { generation: 1 }));
        assert_eq!(c.state().step_index, 2);
    }

    #[test]
    fn stale_generation_is_ignored() {
        let (mut c, _) = controller(10);
        c.play();
        c.pause();
        c.play();

        assert!(!c.on_tick(Tick { generation: 1 }));
        assert_eq!(c.state().step_index, 0);
        assert!(c.on_tick(Tick { generation: 2 }));
        assert_eq!(c.state().step_index, 1);
    }

    #[test]
    fn scrub_and_reset_cancel_the_timer() {
        let (mut c, log) = controller(10);
        c.play();
        c.scrub(4);
        assert_eq!(c.state(), PlaybackState { step_index: 4, is_playing: false });

        c.play();
        c.reset();
        assert_eq!(c.state(), PlaybackState::default());
        assert_eq!(log.borrow().cancelled, vec![1, 2]);
    }

    #[test]
    fn step_while_playing_keeps_the_timer() {
        let (mut c, log) = controller(10);
        c.play();
        c.step();
        assert!(c.is_armed());
        assert_eq!(c.state(), PlaybackState { step_index: 1, is_playing: true });
        assert!(log.borrow().cancelled.is_empty());
    }

    #[test]
    fn replacing_the_trajectory_resets() {
        let (mut c, log) = controller(10);
        c.scrub(9);
        c.scrub(5);
        c.play();
        c.replace_trajectory(4);

        assert_eq!(c.state(), PlaybackState::default());
        assert_eq!(c.len(), 4);
        assert_eq!(log.borrow().cancelled, vec![1]);
    }

    #[test]
    fn tick_after_stepping_onto_the_end_only_pauses() {
        let (mut c, log) = controller(3);
        c.play();
        c.step();
        c.step();
        assert!(c.is_at_end());
        assert_eq!(c.state(), PlaybackState { step_index: 2, is_playing: true });

        assert!(!c.on_tick(Tick { generation: 1 }));
        assert_eq!(c.state(), PlaybackState { step_index: 2, is_playing: false });
        assert!(!c.is_armed());
        assert_eq!(log.borrow().cancelled, vec![1]);
    }

    #[test]
    fn drop_cancels_the_timer() {
        let (mut c, log) = controller(10);
        c.play();
        drop(c);
        assert_eq!(log.borrow().cancelled, vec![1]);
    }
}
