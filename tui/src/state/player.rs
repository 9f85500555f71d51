use crossterm::event::KeyCode;
use log::info;
use visualizer::Session;

/// Factor the learning rate is multiplied or divided by on `+` and `-`.
const LR_FACTOR: f64 = 1.25;

pub enum Action {
    None,
    Quit,
}

/// Keyboard-driven wrapper around a [`Session`], plus the status line shown to the user.
pub struct Player {
    session: Session,
    status: String,
}

impl Player {
    pub fn new(session: Session) -> Self {
        Self {
            session,
            status: String::from("space: play/pause"),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    /// Applies the ticks delivered since the last frame.
    pub fn drain_ticks(&mut self) {
        self.session.drain_ticks();
    }

    pub fn handle_key(&mut self, key: KeyCode) -> Action {
        let index = self.session.playback().step_index as i64;

        match key {
            KeyCode::Char('q') | KeyCode::Esc => return Action::Quit,
            KeyCode::Char(' ') => self.session.toggle(),
            KeyCode::Right if self.session.is_at_end() => {
                self.status = String::from("already at the last step");
            }
            KeyCode::Right => self.session.step(),
            KeyCode::Left => self.session.scrub(index - 1),
            KeyCode::Home => self.session.scrub(0),
            KeyCode::End => self.session.scrub(i64::MAX),
            KeyCode::Char('r') => self.session.reset(),
            KeyCode::Char('+') | KeyCode::Char('=') => self.scale_learning_rate(LR_FACTOR),
            KeyCode::Char('-') => self.scale_learning_rate(1.0 / LR_FACTOR),
            KeyCode::Char(c) => {
                if let Some(d) = c.to_digit(10) {
                    // 0 jumps to the start and 9 to 90% of the run.
                    let last = self.session.scene().trajectory().last_index();
                    self.session.scrub((last * d as usize / 10) as i64);
                }
            }
            _ => {}
        }

        Action::None
    }

    fn scale_learning_rate(&mut self, factor: f64) {
        let lr = self.session.config().hyperparams.learning_rate * factor;

        self.status = match self.session.set_learning_rate(lr) {
            Ok(_) => {
                info!(learning_rate = lr; "learning rate changed");
                format!("learning rate set to {lr:.4}")
            }
            Err(e) => e.to_string(),
        };
    }
}
