use regression::RawPoint;
use serde::{Deserialize, Serialize};

pub const DEFAULT_LEARNING_RATE: f64 = 0.3;
pub const DEFAULT_MAX_LOOPS: usize = 140;
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 60;

/// Square meters and prices of a handful of houses, the lesson's running example.
const HOUSES: [(f64, f64); 8] = [
    (52.0, 210_000.0),
    (68.0, 265_000.0),
    (75.0, 255_000.0),
    (90.0, 310_000.0),
    (110.0, 365_000.0),
    (130.0, 390_000.0),
    (145.0, 460_000.0),
    (160.0, 455_000.0),
];

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointConfig {
    pub feature: f64,
    pub target: f64,
}

impl From<RawPoint> for PointConfig {
    fn from(p: RawPoint) -> Self {
        Self {
            feature: p.feature,
            target: p.target,
        }
    }
}

impl From<PointConfig> for RawPoint {
    fn from(p: PointConfig) -> Self {
        RawPoint::new(p.feature, p.target)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Hyperparams {
    pub learning_rate: f64,
    pub max_loops: usize,
}

impl Default for Hyperparams {
    fn default() -> Self {
        Self {
            learning_rate: DEFAULT_LEARNING_RATE,
            max_loops: DEFAULT_MAX_LOOPS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaleConfig {
    pub feature: f64,
    pub target: f64,
}

impl Default for ScaleConfig {
    fn default() -> Self {
        Self {
            feature: regression::Scale::DEFAULT_FEATURE,
            target: regression::Scale::DEFAULT_TARGET,
        }
    }
}

/// Everything a visualization instance is configured with. Missing JSON fields take the
/// defaults, which reproduce the lesson's example.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualizationConfig {
    pub points: Vec<PointConfig>,
    pub hyperparams: Hyperparams,
    pub scale: ScaleConfig,
    pub tick_interval_ms: u64,
}

impl Default for VisualizationConfig {
    fn default() -> Self {
        let points = HOUSES
            .iter()
            .map(|&(feature, target)| PointConfig { feature, target })
            .collect();

        Self {
            points,
            hyperparams: Hyperparams::default(),
            scale: ScaleConfig::default(),
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
        }
    }
}
