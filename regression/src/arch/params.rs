/// The parameters of a line `y = theta0 + theta1 * x`.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Params {
    pub theta0: f64,
    pub theta1: f64,
}

impl Params {
    /// Returns a new `Params`.
    ///
    /// # Arguments
    /// * `theta0` - The intercept.
    /// * `theta1` - The slope.
    pub fn new(theta0: f64, theta1: f64) -> Self {
        Self { theta0, theta1 }
    }

    /// Evaluates the line at `x`.
    pub fn predict(&self, x: f64) -> f64 {
        self.theta0 + self.theta1 * x
    }

    pub fn to_array(self) -> [f64; 2] {
        [self.theta0, self.theta1]
    }

    pub fn from_array([theta0, theta1]: [f64; 2]) -> Self {
        Self { theta0, theta1 }
    }

    pub fn is_finite(&self) -> bool {
        self.theta0.is_finite() && self.theta1.is_finite()
    }
}

/// One point of a training trajectory: a pair of parameters and the loss they score on the
/// whole dataset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelState {
    pub theta0: f64,
    pub theta1: f64,
    pub loss: f64,
}

impl ModelState {
    pub fn new(params: Params, loss: f64) -> Self {
        Self {
            theta0: params.theta0,
            theta1: params.theta1,
            loss,
        }
    }

    pub fn params(&self) -> Params {
        Params::new(self.theta0, self.theta1)
    }
}
