/// The snapshot of playback the UI reflects.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackState {
    pub step_index: usize,
    pub is_playing: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Paused(usize),
    Playing(usize),
}

impl Phase {
    pub fn index(&self) -> usize {
        match *self {
            Phase::Paused(i) | Phase::Playing(i) => i,
        }
    }
}

/// Playback state machine over a trajectory of `len` states.
///
/// The step index is always inside `[0, len - 1]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playback {
    phase: Phase,
    len: usize,
}

impl Playback {
    /// Creates a paused `Playback` at index 0. A zero length is treated as one.
    pub fn new(len: usize) -> Self {
        Self {
            phase: Phase::Paused(0),
            len: len.max(1),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn state(&self) -> PlaybackState {
        PlaybackState {
            step_index: self.phase.index(),
            is_playing: self.is_playing(),
        }
    }

    pub fn is_playing(&self) -> bool {
        matches!(self.phase, Phase::Playing(_))
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn last_index(&self) -> usize {
        self.len - 1
    }

    pub fn is_at_end(&self) -> bool {
        self.phase.index() == self.last_index()
    }

    /// Starts playing. Does nothing at the last index, there is nothing left to play.
    pub fn play(&mut self) {
        if let Phase::Paused(i) = self.phase {
            if i < self.last_index() {
                self.phase = Phase::Playing(i);
            }
        }
    }

    pub fn pause(&mut self) {
        self.phase = Phase::Paused(self.phase.index());
    }

    /// Moves one state forward, keeping the play/pause status.
    pub fn step(&mut self) {
        let next = (self.phase.index() + 1).min(self.last_index());
        self.phase = match self.phase {
            Phase::Paused(_) => Phase::Paused(next),
            Phase::Playing(_) => Phase::Playing(next),
        };
    }

    /// Jumps to `index`, clamped into the trajectory, and pauses.
    pub fn scrub(&mut self, index: i64) {
        let index = index.clamp(0, self.last_index() as i64) as usize;
        self.phase = Phase::Paused(index);
    }

    pub fn reset(&mut self) {
        self.phase = Phase::Paused(0);
    }

    /// Advances a playing state by one, pausing once the last index is reached. Paused states
    /// are left untouched.
    pub fn tick(&mut self) {
        let Phase::Playing(i) = self.phase else {
            return;
        };

        let next = (i + 1).min(self.last_index());
        self.phase = if next == self.last_index() {
            Phase::Paused(next)
        } else {
            Phase::Playing(next)
        };
    }

    /// Swaps the underlying trajectory length and resets.
    pub fn replace(&mut self, len: usize) {
        self.len = len.max(1);
        self.reset();
    }
}
