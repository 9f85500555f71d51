use std::f64::consts::TAU;

use log::debug;

use crate::{
    arch::{Params, loss::Mse},
    closed_form::Optimum,
    dataset::Dataset,
};

/// The multiples of the loss range at which contours are drawn.
pub const DEFAULT_FACTORS: [f64; 7] = [0.06, 0.15, 0.3, 0.5, 0.75, 1.0, 1.35];

/// The amount of angles sampled around each ellipse.
pub const DEFAULT_SAMPLES: usize = 140;

/// A closed polyline of parameter pairs sharing the same loss.
#[derive(Debug, Clone, PartialEq)]
pub struct ContourLevel {
    pub level_loss: f64,
    /// `samples + 1` points, the last one repeating the first.
    pub points: Vec<Params>,
}

/// Generates nested iso-loss ellipses of the mean squared error.
#[derive(Debug, Clone)]
pub struct ContourGenerator {
    factors: Vec<f64>,
    samples: usize,
}

impl Default for ContourGenerator {
    fn default() -> Self {
        Self {
            factors: DEFAULT_FACTORS.to_vec(),
            samples: DEFAULT_SAMPLES,
        }
    }
}

impl ContourGenerator {
    /// Creates a new `ContourGenerator`.
    ///
    /// # Arguments
    /// * `factors` - The multiples of the loss range at which levels are placed.
    /// * `samples` - The amount of angles sampled per ellipse, at least 3 are used.
    pub fn new(factors: Vec<f64>, samples: usize) -> Self {
        Self {
            factors,
            samples: samples.max(3),
        }
    }

    /// Builds one contour per factor around the optimum.
    ///
    /// The level losses are `optimum.loss + Δ * factor` with
    /// `Δ = max(initial_loss - optimum.loss, 1)`, so they scale with how far the initial guess
    /// started and never collapse onto the optimum.
    ///
    /// # Arguments
    /// * `dataset` - The scaled points the loss is measured on.
    /// * `optimum` - The closed form optimum, center of every ellipse.
    /// * `initial_loss` - The loss of the first trajectory state.
    ///
    /// # Returns
    /// The contour levels, ordered from the innermost to the outermost.
    pub fn generate(
        &self,
        dataset: &Dataset,
        optimum: &Optimum,
        initial_loss: f64,
    ) -> Vec<ContourLevel> {
        let eigen = Mse.hessian(dataset).eigen();
        let [l1, l2] = eigen.values;
        let [v1, v2] = eigen.vectors;

        let delta = (initial_loss - optimum.loss).max(1.0);
        debug!(delta = delta, lambda1 = l1, lambda2 = l2; "generating contours");

        self.factors
            .iter()
            .map(|factor| {
                let excess = delta * factor;
                let r1 = (2.0 * excess / l1).sqrt();
                let r2 = (2.0 * excess / l2).sqrt();

                let points = (0..=self.samples)
                    .map(|i| {
                        let angle = TAU * (i % self.samples) as f64 / self.samples as f64;
                        let (a, b) = (r1 * angle.cos(), r2 * angle.sin());
                        Params::new(
                            optimum.theta0 + a * v1[0] + b * v2[0],
                            optimum.theta1 + a * v1[1] + b * v2[1],
                        )
                    })
                    .collect();

                ContourLevel {
                    level_loss: optimum.loss + excess,
                    points,
                }
            })
            .collect()
    }
}
