use std::sync::Arc;

use log::{debug, info, warn};
use regression::{ModelState, RawPoint};
use tokio::{runtime::Handle, sync::mpsc};

use crate::{
    configs::{Adapter, PointConfig, VisualizationConfig},
    error::Result,
    playback::{AnimationController, PlaybackState, Tick, TokioScheduler},
    scene::{Scene, SceneCache, SceneKey},
};

/// A live visualization: the current scene plus the playback walking through its trajectory.
///
/// Parameter changes go through a [`SceneCache`], so the scene is only recomputed when one of
/// its inputs actually changed, and any recomputation resets the playback.
pub struct Session {
    config: VisualizationConfig,
    cache: SceneCache,
    scene: Arc<Scene>,
    controller: AnimationController<TokioScheduler>,
    ticks: mpsc::UnboundedReceiver<Tick>,
}

impl Session {
    /// Creates a new `Session`, computing its first scene.
    ///
    /// # Arguments
    /// * `config` - The visualization's configuration.
    /// * `runtime` - The runtime the playback timer runs on.
    ///
    /// # Errors
    /// Returns a `VizError` if the config is invalid or its points can't be normalized.
    pub fn new(config: &VisualizationConfig, runtime: Handle) -> Result<Self> {
        let adapter = Adapter::new();
        let key = adapter.scene_key(config)?;
        let interval = adapter.tick_interval(config)?;

        let mut cache = SceneCache::new();
        let (scene, _) = cache.get(key)?;

        let (scheduler, ticks) = TokioScheduler::new(runtime);
        let controller = AnimationController::new(scene.trajectory().len(), interval, scheduler);

        info!(
            points = scene.dataset().len(),
            states = scene.trajectory().len(),
            interval_ms = interval.as_millis() as u64;
            "session ready"
        );

        Ok(Self {
            config: config.clone(),
            cache,
            scene,
            controller,
            ticks,
        })
    }

    /// The configuration the current scene was computed from.
    pub fn config(&self) -> &VisualizationConfig {
        &self.config
    }

    pub fn scene(&self) -> &Arc<Scene> {
        &self.scene
    }

    pub fn playback(&self) -> PlaybackState {
        self.controller.state()
    }

    /// Whether the current step is the last one, where stepping and playing do nothing.
    pub fn is_at_end(&self) -> bool {
        self.controller.is_at_end()
    }

    /// The state at the current step.
    pub fn current(&self) -> &ModelState {
        self.scene.state(self.playback().step_index)
    }

    /// The states from the start up to and including the current step.
    pub fn visible(&self) -> &[ModelState] {
        self.scene.trajectory().visible(self.playback().step_index)
    }

    pub fn play(&mut self) {
        self.controller.play();
    }

    pub fn pause(&mut self) {
        self.controller.pause();
    }

    pub fn toggle(&mut self) {
        self.controller.toggle();
    }

    pub fn step(&mut self) {
        self.controller.step();
    }

    pub fn scrub(&mut self, index: i64) {
        self.controller.scrub(index);
    }

    pub fn reset(&mut self) {
        self.controller.reset();
    }

    /// Changes the learning rate.
    ///
    /// # Returns
    /// Whether the scene was recomputed.
    ///
    /// # Errors
    /// Returns a `VizError` on an invalid learning rate, leaving the session untouched.
    pub fn set_learning_rate(&mut self, learning_rate: f64) -> Result<bool> {
        let mut config = self.config.clone();
        config.hyperparams.learning_rate = learning_rate;
        self.apply(config)
    }

    /// Changes the learning rate and the loop count at once.
    ///
    /// # Errors
    /// Returns a `VizError` on invalid hyperparameters, leaving the session untouched.
    pub fn set_hyperparams(&mut self, learning_rate: f64, max_loops: usize) -> Result<bool> {
        let mut config = self.config.clone();
        config.hyperparams.learning_rate = learning_rate;
        config.hyperparams.max_loops = max_loops;
        self.apply(config)
    }

    /// Replaces the data points.
    ///
    /// # Errors
    /// Returns a `VizError` if the points can't be normalized, leaving the session untouched.
    pub fn set_points(&mut self, points: Vec<RawPoint>) -> Result<bool> {
        let mut config = self.config.clone();
        config.points = points.into_iter().map(PointConfig::from).collect();
        self.apply(config)
    }

    /// Applies every tick already delivered by the timer without waiting.
    ///
    /// # Returns
    /// Whether the step index moved.
    pub fn drain_ticks(&mut self) -> bool {
        let mut advanced = false;
        while let Ok(tick) = self.ticks.try_recv() {
            advanced |= self.controller.on_tick(tick);
        }
        advanced
    }

    /// Waits for the next tick that advances the playback.
    ///
    /// # Returns
    /// The playback state after the tick, or `None` if nothing is playing.
    pub async fn next_tick(&mut self) -> Option<PlaybackState> {
        while self.controller.state().is_playing {
            let tick = self.ticks.recv().await?;
            if self.controller.on_tick(tick) {
                return Some(self.controller.state());
            }
        }

        None
    }

    /// How many times a scene was computed over the session's lifetime.
    pub fn recomputations(&self) -> usize {
        self.cache.recomputations()
    }

    fn apply(&mut self, config: VisualizationConfig) -> Result<bool> {
        let key = Adapter::new()
            .scene_key(&config)
            .inspect_err(|e| warn!("rejected parameter change: {e}"))?;
        let recomputed = self.recompute(key)?;
        self.config = config;
        Ok(recomputed)
    }

    fn recompute(&mut self, key: SceneKey) -> Result<bool> {
        let (scene, recomputed) = self.cache.get(key)?;
        if recomputed {
            self.controller.replace_trajectory(scene.trajectory().len());
            self.scene = scene;
        } else {
            debug!("parameters unchanged, keeping the scene");
        }
        Ok(recomputed)
    }
}
