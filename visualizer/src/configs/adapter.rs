use std::time::Duration;

use regression::{RawPoint, Scale};

use super::VisualizationConfig;
use crate::{
    error::{Result, VizError},
    scene::SceneKey,
};

/// Loop counts above this are rejected, the trajectory is kept in memory for scrubbing.
pub const MAX_LOOPS_LIMIT: usize = 1_000_000;

/// Validates configurations and turns them into the inputs of the computation layer.
#[derive(Debug, Default)]
pub struct Adapter;

impl Adapter {
    pub fn new() -> Self {
        Self
    }

    /// Validates the config and extracts the key the derived scene is memoized on.
    ///
    /// # Errors
    /// Returns `VizError::InvalidConfig` on out of range hyperparameters or an empty point list,
    /// and `VizError::Regression` on an invalid scale.
    pub fn scene_key(&self, config: &VisualizationConfig) -> Result<SceneKey> {
        if config.points.is_empty() {
            return Err(VizError::InvalidConfig(
                "at least one point is required".into(),
            ));
        }

        let lr = config.hyperparams.learning_rate;
        if !lr.is_finite() || lr <= 0.0 {
            return Err(VizError::InvalidConfig(format!(
                "learning_rate must be a positive number, got {lr}"
            )));
        }

        let max_loops = config.hyperparams.max_loops;
        if max_loops > MAX_LOOPS_LIMIT {
            return Err(VizError::InvalidConfig(format!(
                "max_loops must be at most {MAX_LOOPS_LIMIT}, got {max_loops}"
            )));
        }

        let scale = Scale::new(config.scale.feature, config.scale.target)?;
        let points: Vec<RawPoint> = config.points.iter().map(|&p| p.into()).collect();

        Ok(SceneKey::new(points, lr, max_loops, scale))
    }

    /// The period between playback ticks.
    ///
    /// # Errors
    /// Returns `VizError::InvalidConfig` if the interval is zero.
    pub fn tick_interval(&self, config: &VisualizationConfig) -> Result<Duration> {
        match config.tick_interval_ms {
            0 => Err(VizError::InvalidConfig(
                "tick_interval_ms must be greater than zero".into(),
            )),
            ms => Ok(Duration::from_millis(ms)),
        }
    }
}
