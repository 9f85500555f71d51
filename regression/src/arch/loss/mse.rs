use ndarray::Array1;

use super::LossFn;
use crate::{arch::Params, contour::Hessian, dataset::Dataset};

/// Mean squared error loss function.
#[derive(Debug, Default, Clone, Copy)]
pub struct Mse;

impl Mse {
    /// Returns a new `Mse`.
    pub fn new() -> Self {
        Self
    }

    /// The Hessian of the loss with respect to `(theta0, theta1)`. It does not depend on the
    /// parameters because the loss is exactly quadratic in them.
    ///
    /// # Arguments
    /// * `dataset` - The points the loss is measured on.
    pub fn hessian(&self, dataset: &Dataset) -> Hessian {
        let n = dataset.len() as f64;
        let x = dataset.x();

        Hessian::new(2.0, 2.0 / n * x.sum(), 2.0 / n * x.dot(x))
    }

    fn residuals(params: Params, dataset: &Dataset) -> Array1<f64> {
        dataset.x().mapv(|x| params.predict(x)) - dataset.y()
    }
}

impl LossFn for Mse {
    fn loss(&self, params: Params, dataset: &Dataset) -> f64 {
        Self::residuals(params, dataset)
            .mapv(|e| e.powi(2))
            .mean()
            .unwrap_or_default()
    }

    fn gradient(&self, params: Params, dataset: &Dataset) -> [f64; 2] {
        let err = Self::residuals(params, dataset);
        let k = 2.0 / dataset.len() as f64;

        [k * err.sum(), k * err.dot(dataset.x())]
    }
}
