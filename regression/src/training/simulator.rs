use log::{debug, warn};

use super::Trajectory;
use crate::{
    arch::{
        ModelState, Params,
        loss::{LossFn, Mse},
    },
    dataset::Dataset,
    optimization::{GradientDescent, Optimizer},
};

/// Replays full batch gradient descent over a dataset for a fixed amount of loops.
///
/// The run is deterministic: it always starts from the horizontal line through `mean(y)` and
/// never stops early, so the resulting trajectory has exactly `max_loops + 1` states. A learning
/// rate above `Hessian::stability_threshold` makes the loss grow, which is simulated as is.
#[derive(Debug, Clone)]
pub struct GradientDescentSimulator<O = GradientDescent, L = Mse>
where
    O: Optimizer,
    L: LossFn,
{
    optimizer: O,
    loss_fn: L,
    max_loops: usize,
}

impl GradientDescentSimulator {
    /// Returns a new `GradientDescentSimulator` using `GradientDescent` over `Mse`.
    ///
    /// # Arguments
    /// * `learning_rate` - The step length of every update.
    /// * `max_loops` - The amount of updates to run.
    pub fn new(learning_rate: f64, max_loops: usize) -> Self {
        Self::with_parts(GradientDescent::new(learning_rate), Mse, max_loops)
    }
}

impl<O, L> GradientDescentSimulator<O, L>
where
    O: Optimizer,
    L: LossFn,
{
    /// Returns a new `GradientDescentSimulator` out of its parts.
    ///
    /// # Arguments
    /// * `optimizer` - The update rule.
    /// * `loss_fn` - The loss to differentiate and report.
    /// * `max_loops` - The amount of updates to run.
    pub fn with_parts(optimizer: O, loss_fn: L, max_loops: usize) -> Self {
        Self {
            optimizer,
            loss_fn,
            max_loops,
        }
    }

    pub fn max_loops(&self) -> usize {
        self.max_loops
    }

    /// Runs the simulation.
    ///
    /// # Arguments
    /// * `dataset` - The scaled points to fit.
    ///
    /// # Returns
    /// The trajectory, where every state's loss is recomputed from scratch on the whole dataset.
    pub fn simulate(&mut self, dataset: &Dataset) -> Trajectory {
        let mut params = Params::new(dataset.mean_y(), 0.0).to_array();
        let mut states = Vec::with_capacity(self.max_loops + 1);
        states.push(self.state(params, dataset));

        for _ in 0..self.max_loops {
            let grad = self.loss_fn.gradient(Params::from_array(params), dataset);
            self.optimizer.update_params(&mut params, &grad);
            states.push(self.state(params, dataset));
        }

        let (first, last) = (states[0].loss, states[states.len() - 1].loss);
        if last > first || last.is_nan() {
            warn!(initial = first, last = last; "gradient descent diverged");
        }
        debug!(loops = self.max_loops, loss = last; "simulation finished");

        Trajectory { states }
    }

    fn state(&self, params: [f64; 2], dataset: &Dataset) -> ModelState {
        let params = Params::from_array(params);
        ModelState::new(params, self.loss_fn.loss(params, dataset))
    }
}
