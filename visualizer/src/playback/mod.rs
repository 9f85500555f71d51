//! Scrub and play controls over a precomputed trajectory.
//!
//! `Playback` is the pure state machine, `AnimationController` drives it from a recurring timer
//! armed through a `Scheduler`.

mod controller;
mod scheduler;
mod state;

pub use controller::AnimationController;
pub use scheduler::{Scheduler, Tick, TickerHandle, TimerHandle, TokioScheduler};
pub use state::{Phase, Playback, PlaybackState};
