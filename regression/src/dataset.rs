use ndarray::Array1;

use crate::{
    arch::Params,
    error::{RegressionErr, Result},
};

/// A single training example, in the units it was collected in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawPoint {
    pub feature: f64,
    pub target: f64,
}

impl RawPoint {
    /// Returns a new `RawPoint`.
    pub fn new(feature: f64, target: f64) -> Self {
        Self { feature, target }
    }
}

/// A training example after dividing it by a `Scale`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaledPoint {
    pub x: f64,
    pub y: f64,
}

/// The pair of divisors that bring raw points into scaled units.
///
/// Every consumer of a dataset (the closed form, the simulator and the contour generator)
/// works on the output of the same `Scale`, so their parameters live in the same units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale {
    feature: f64,
    target: f64,
}

impl Scale {
    pub const DEFAULT_FEATURE: f64 = 100.0;
    pub const DEFAULT_TARGET: f64 = 1000.0;

    /// Creates a new `Scale`.
    ///
    /// # Arguments
    /// * `feature` - The divisor applied to every feature.
    /// * `target` - The divisor applied to every target.
    ///
    /// # Errors
    /// Returns `RegressionErr::InvalidScale` if any divisor is zero or not finite.
    pub fn new(feature: f64, target: f64) -> Result<Self> {
        for (axis, value) in [("feature", feature), ("target", target)] {
            if value == 0.0 || !value.is_finite() {
                return Err(RegressionErr::InvalidScale { axis, value });
            }
        }

        Ok(Self { feature, target })
    }

    pub fn feature(&self) -> f64 {
        self.feature
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    /// Divides a raw point by this scale.
    pub fn apply(&self, point: RawPoint) -> ScaledPoint {
        ScaledPoint {
            x: point.feature / self.feature,
            y: point.target / self.target,
        }
    }

    /// Converts parameters fitted on scaled data back into raw units, that is, the intercept
    /// in target units and the slope in target units per raw feature unit.
    pub fn unscale_params(&self, params: Params) -> Params {
        Params::new(
            params.theta0 * self.target,
            params.theta1 * self.target / self.feature,
        )
    }
}

impl Default for Scale {
    fn default() -> Self {
        Self {
            feature: Self::DEFAULT_FEATURE,
            target: Self::DEFAULT_TARGET,
        }
    }
}

/// A non empty set of scaled training examples stored column-wise.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    x: Array1<f64>,
    y: Array1<f64>,
}

impl Dataset {
    /// Rescales raw points into a new `Dataset`, preserving their order.
    ///
    /// # Arguments
    /// * `points` - The raw training examples.
    /// * `scale` - The divisors to apply to every point.
    ///
    /// # Errors
    /// Returns `RegressionErr::EmptyDataset` if there are no points, or
    /// `RegressionErr::NonFinite` if a point has a NaN or infinite coordinate.
    pub fn normalize(points: &[RawPoint], scale: Scale) -> Result<Self> {
        if let Some(index) = points
            .iter()
            .position(|p| !p.feature.is_finite() || !p.target.is_finite())
        {
            return Err(RegressionErr::NonFinite { index });
        }

        let scaled: Vec<_> = points.iter().map(|&p| scale.apply(p)).collect();
        Self::from_scaled(&scaled)
    }

    /// Builds a `Dataset` from points that are already in scaled units.
    ///
    /// # Errors
    /// Returns `RegressionErr::EmptyDataset` if there are no points.
    pub fn from_scaled(points: &[ScaledPoint]) -> Result<Self> {
        if points.is_empty() {
            return Err(RegressionErr::EmptyDataset);
        }

        let x = points.iter().map(|p| p.x).collect();
        let y = points.iter().map(|p| p.y).collect();
        Ok(Self { x, y })
    }

    /// The amount of points, never zero.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Always `false`, a `Dataset` can't be built without points.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn x(&self) -> &Array1<f64> {
        &self.x
    }

    pub fn y(&self) -> &Array1<f64> {
        &self.y
    }

    /// Iterates the points in their original order.
    pub fn points(&self) -> impl Iterator<Item = ScaledPoint> + '_ {
        self.x
            .iter()
            .zip(self.y.iter())
            .map(|(&x, &y)| ScaledPoint { x, y })
    }

    pub fn mean_x(&self) -> f64 {
        self.x.mean().unwrap_or_default()
    }

    pub fn mean_y(&self) -> f64 {
        self.y.mean().unwrap_or_default()
    }

    /// The population variance of the feature column.
    pub fn variance_x(&self) -> f64 {
        self.x.var(0.0)
    }

    /// The population covariance between both columns.
    pub fn covariance(&self) -> f64 {
        let dx = &self.x - self.mean_x();
        let dy = &self.y - self.mean_y();
        (dx * dy).mean().unwrap_or_default()
    }

    /// The smallest and largest scaled feature and target, as `(min_x, max_x, min_y, max_y)`.
    pub fn extents(&self) -> (f64, f64, f64, f64) {
        let fold = |a: &Array1<f64>| {
            a.iter()
                .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                    (lo.min(v), hi.max(v))
                })
        };

        let (min_x, max_x) = fold(&self.x);
        let (min_y, max_y) = fold(&self.y);
        (min_x, max_x, min_y, max_y)
    }
}
