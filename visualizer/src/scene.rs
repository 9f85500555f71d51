use std::sync::Arc;

use log::{debug, info};
use regression::{
    ClosedForm, ContourGenerator, ContourLevel, Dataset, GradientDescentSimulator, ModelState,
    Optimum, RawPoint, Scale, ScaledPoint, Solution, Trajectory,
};

use crate::{
    bounds::{BOUNDS_PADDING, Bounds, Extent},
    error::Result,
};

/// Every input the derived scene depends on. Two equal keys always yield the same scene.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneKey {
    points: Vec<RawPoint>,
    learning_rate: f64,
    max_loops: usize,
    scale: Scale,
}

impl SceneKey {
    pub fn new(points: Vec<RawPoint>, learning_rate: f64, max_loops: usize, scale: Scale) -> Self {
        Self {
            points,
            learning_rate,
            max_loops,
            scale,
        }
    }

    pub fn points(&self) -> &[RawPoint] {
        &self.points
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    pub fn max_loops(&self) -> usize {
        self.max_loops
    }

    pub fn scale(&self) -> Scale {
        self.scale
    }

    /// The same key with another learning rate.
    pub fn with_learning_rate(&self, learning_rate: f64) -> Self {
        Self {
            learning_rate,
            ..self.clone()
        }
    }

    /// The same key with another loop count.
    pub fn with_max_loops(&self, max_loops: usize) -> Self {
        Self {
            max_loops,
            ..self.clone()
        }
    }
}

/// A read-only snapshot of everything the rendering layer draws, derived from a `SceneKey`.
#[derive(Debug, Clone)]
pub struct Scene {
    key: SceneKey,
    dataset: Dataset,
    solution: Solution,
    trajectory: Trajectory,
    contours: Vec<ContourLevel>,
    bounds: Bounds,
}

impl Scene {
    /// Runs the whole computation pipeline: normalization, closed form, simulation, contours
    /// and bounds.
    ///
    /// Contours are left out when the fit is degenerate, since a singular Hessian stretches
    /// them without bound.
    ///
    /// # Errors
    /// Returns `VizError::Regression` if the points can't be normalized.
    pub fn compute(key: SceneKey) -> Result<Self> {
        let dataset = Dataset::normalize(&key.points, key.scale)?;
        let solution = ClosedForm::new().fit(&dataset);
        let trajectory =
            GradientDescentSimulator::new(key.learning_rate, key.max_loops).simulate(&dataset);

        let contours = match solution {
            Solution::Unique(optimum) => ContourGenerator::default().generate(
                &dataset,
                &optimum,
                trajectory.first().loss,
            ),
            Solution::ConstantFeature(_) => Vec::new(),
        };
        let bounds = Bounds::enclosing(&trajectory, &contours);

        debug!(
            points = dataset.len(),
            states = trajectory.len(),
            contours = contours.len();
            "scene computed"
        );

        Ok(Self {
            key,
            dataset,
            solution,
            trajectory,
            contours,
            bounds,
        })
    }

    pub fn key(&self) -> &SceneKey {
        &self.key
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn solution(&self) -> Solution {
        self.solution
    }

    pub fn optimum(&self) -> Optimum {
        self.solution.optimum()
    }

    /// Whether the feature is constant and the optimum is only a fallback.
    pub fn is_degenerate(&self) -> bool {
        self.solution.is_degenerate()
    }

    pub fn trajectory(&self) -> &Trajectory {
        &self.trajectory
    }

    pub fn contours(&self) -> &[ContourLevel] {
        &self.contours
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    /// The padded extents of the scaled data, as `(feature, target)`. The target extent also
    /// holds zero, so fitted lines starting at the intercept stay in view.
    pub fn data_extents(&self) -> (Extent, Extent) {
        let (min_x, max_x, min_y, max_y) = self.dataset.extents();
        let x = Extent::new(min_x, max_x).padded(BOUNDS_PADDING);
        let y = Extent::new(min_y, max_y)
            .including(0.0)
            .padded(BOUNDS_PADDING);
        (x, y)
    }

    /// The extent of the finite losses along the trajectory, including the optimum's.
    pub fn loss_extent(&self) -> Extent {
        let losses = self.trajectory.iter().map(|s| s.loss);
        let optimum = self.optimum().loss;
        Extent::enclosing(losses)
            .unwrap_or(Extent::new(optimum, optimum))
            .including(optimum)
    }

    /// The two ends of the line predicted by the state at `index`, spanning the data extent.
    pub fn fit_line(&self, index: usize) -> [ScaledPoint; 2] {
        let params = self.trajectory.at(index).params();
        let (x, _) = self.data_extents();
        [x.min, x.max].map(|x| ScaledPoint {
            x,
            y: params.predict(x),
        })
    }

    /// The state at `index`, clamped to the trajectory.
    pub fn state(&self, index: usize) -> &ModelState {
        self.trajectory.at(index)
    }
}

/// Memoizes the last computed scene on its `SceneKey`.
#[derive(Debug, Default)]
pub struct SceneCache {
    scene: Option<Arc<Scene>>,
    recomputations: usize,
}

impl SceneCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the scene for `key`, recomputing it only if the key changed.
    ///
    /// # Returns
    /// The scene and whether it was recomputed.
    ///
    /// # Errors
    /// Returns `VizError::Regression` if the recomputation fails, in which case the previous
    /// scene is kept.
    pub fn get(&mut self, key: SceneKey) -> Result<(Arc<Scene>, bool)> {
        if let Some(scene) = &self.scene {
            if scene.key == key {
                return Ok((Arc::clone(scene), false));
            }
        }

        let scene = Arc::new(Scene::compute(key)?);
        self.recomputations += 1;
        info!(
            learning_rate = scene.key.learning_rate,
            max_loops = scene.key.max_loops;
            "recomputed scene"
        );

        self.scene = Some(Arc::clone(&scene));
        Ok((scene, true))
    }

    /// The last computed scene, if any.
    pub fn current(&self) -> Option<&Arc<Scene>> {
        self.scene.as_ref()
    }

    /// How many times a scene was computed.
    pub fn recomputations(&self) -> usize {
        self.recomputations
    }
}
