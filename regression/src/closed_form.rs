use log::debug;

use crate::{
    arch::{
        Params,
        loss::{LossFn, Mse},
    },
    dataset::Dataset,
};

/// Relative tolerance under which the feature variance is considered zero.
const VARIANCE_EPS: f64 = 1e-12;

/// The exact least-squares solution and the loss it scores.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Optimum {
    pub theta0: f64,
    pub theta1: f64,
    pub loss: f64,
}

impl Optimum {
    pub fn params(&self) -> Params {
        Params::new(self.theta0, self.theta1)
    }
}

/// The outcome of a closed form fit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Solution {
    /// The feature has variance, the optimum is unique.
    Unique(Optimum),
    /// Every point shares the same feature, the slope is undefined. The returned optimum is the
    /// horizontal line through `mean(y)`, which is one of the infinitely many minimizers.
    ConstantFeature(Optimum),
}

impl Solution {
    pub fn optimum(&self) -> Optimum {
        match *self {
            Solution::Unique(optimum) | Solution::ConstantFeature(optimum) => optimum,
        }
    }

    pub fn is_degenerate(&self) -> bool {
        matches!(self, Solution::ConstantFeature(_))
    }
}

/// Solves the normal equations of a one feature linear regression.
#[derive(Debug, Default, Clone, Copy)]
pub struct ClosedForm<L: LossFn = Mse> {
    loss_fn: L,
}

impl ClosedForm {
    /// Returns a new `ClosedForm` measuring its optimum with `Mse`.
    pub fn new() -> Self {
        Self { loss_fn: Mse }
    }
}

impl<L: LossFn> ClosedForm<L> {
    /// Returns a new `ClosedForm` measuring its optimum with the given loss function.
    pub fn with_loss(loss_fn: L) -> Self {
        Self { loss_fn }
    }

    /// Computes the least-squares intercept and slope of the dataset.
    ///
    /// # Arguments
    /// * `dataset` - The scaled points to fit.
    ///
    /// # Returns
    /// `Solution::ConstantFeature` if the feature has no variance, `Solution::Unique` otherwise.
    pub fn fit(&self, dataset: &Dataset) -> Solution {
        let mean_x = dataset.mean_x();
        let mean_y = dataset.mean_y();
        let variance = dataset.variance_x();

        if variance <= VARIANCE_EPS * (1.0 + mean_x * mean_x) {
            debug!(variance = variance; "constant feature, falling back to a horizontal line");
            let params = Params::new(mean_y, 0.0);
            return Solution::ConstantFeature(self.optimum(params, dataset));
        }

        let slope = dataset.covariance() / variance;
        let intercept = mean_y - slope * mean_x;
        Solution::Unique(self.optimum(Params::new(intercept, slope), dataset))
    }

    fn optimum(&self, params: Params, dataset: &Dataset) -> Optimum {
        Optimum {
            theta0: params.theta0,
            theta1: params.theta1,
            loss: self.loss_fn.loss(params, dataset),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::ScaledPoint;

    #[test]
    fn recovers_an_exact_line() {
        let points: Vec<_> = (0..5)
            .map(|i| ScaledPoint {
                x: i as f64,
                y: 3.0 - 0.5 * i as f64,
            })
            .collect();
        let dataset = Dataset::from_scaled(&points).unwrap();

        let solution = ClosedForm::new().fit(&dataset);
        let optimum = solution.optimum();

        assert!(!solution.is_degenerate());
        assert!((optimum.theta0 - 3.0).abs() < 1e-12);
        assert!((optimum.theta1 + 0.5).abs() < 1e-12);
        assert!(optimum.loss < 1e-20);
    }

    #[test]
    fn explicit_loss_matches_the_default() {
        let points = [
            ScaledPoint { x: 0.0, y: 1.0 },
            ScaledPoint { x: 1.0, y: 2.5 },
            ScaledPoint { x: 2.0, y: 2.0 },
        ];
        let dataset = Dataset::from_scaled(&points).unwrap();

        let solution = ClosedForm::with_loss(Mse).fit(&dataset);

        assert_eq!(solution, ClosedForm::new().fit(&dataset));
        let optimum = solution.optimum();
        assert_eq!(optimum.loss, Mse.loss(optimum.params(), &dataset));
    }

    #[test]
    fn constant_feature_is_flagged_without_nan() {
        let points = [
            ScaledPoint { x: 2.0, y: 1.0 },
            ScaledPoint { x: 2.0, y: 3.0 },
        ];
        let dataset = Dataset::from_scaled(&points).unwrap();

        let solution = ClosedForm::new().fit(&dataset);
        let optimum = solution.optimum();

        assert!(solution.is_degenerate());
        assert_eq!(optimum.params(), Params::new(2.0, 0.0));
        assert_eq!(optimum.loss, 1.0);
    }

    #[test]
    fn single_point_is_degenerate() {
        let dataset = Dataset::from_scaled(&[ScaledPoint { x: 4.0, y: 7.0 }]).unwrap();
        let solution = ClosedForm::new().fit(&dataset);

        assert!(solution.is_degenerate());
        assert_eq!(solution.optimum().loss, 0.0);
    }
}
