use regression::{ContourLevel, Params, Trajectory};

/// Fraction of each axis span added on both sides of a bounding box.
pub const BOUNDS_PADDING: f64 = 0.08;

/// A closed interval on one axis, in model units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub min: f64,
    pub max: f64,
}

impl Extent {
    /// Creates a new `Extent`, swapping the ends if they come reversed.
    pub fn new(a: f64, b: f64) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// The smallest extent holding every finite value, `None` if there is none.
    pub fn enclosing<I: IntoIterator<Item = f64>>(values: I) -> Option<Self> {
        values
            .into_iter()
            .filter(|v| v.is_finite())
            .fold(None, |acc, v| match acc {
                None => Some(Self { min: v, max: v }),
                Some(e) => Some(Self {
                    min: e.min.min(v),
                    max: e.max.max(v),
                }),
            })
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Grows both ends by `fraction` of the span.
    pub fn padded(&self, fraction: f64) -> Self {
        let pad = self.span() * fraction;
        Self {
            min: self.min - pad,
            max: self.max + pad,
        }
    }

    /// Grows the extent so it holds `value`.
    pub fn including(&self, value: f64) -> Self {
        Self {
            min: self.min.min(value),
            max: self.max.max(value),
        }
    }
}

/// The parameter space rectangle shown by the contour plot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_theta0: f64,
    pub max_theta0: f64,
    pub min_theta1: f64,
    pub max_theta1: f64,
}

impl Bounds {
    /// The padded bounding box of every trajectory state and every contour point.
    ///
    /// Non finite states, as produced by a diverging run, are left out.
    pub fn enclosing(trajectory: &Trajectory, contours: &[ContourLevel]) -> Self {
        let params = trajectory
            .iter()
            .map(|s| s.params())
            .chain(contours.iter().flat_map(|c| c.points.iter().copied()));

        let (theta0, theta1): (Vec<_>, Vec<_>) =
            params.map(|p| (p.theta0, p.theta1)).unzip();

        // The first state is always finite, so both fall back to it only if it's all there is.
        let first = trajectory.first();
        let theta0 = Extent::enclosing(theta0)
            .unwrap_or(Extent::new(first.theta0, first.theta0))
            .padded(BOUNDS_PADDING);
        let theta1 = Extent::enclosing(theta1)
            .unwrap_or(Extent::new(first.theta1, first.theta1))
            .padded(BOUNDS_PADDING);

        Self::from_extents(theta0, theta1)
    }

    pub fn from_extents(theta0: Extent, theta1: Extent) -> Self {
        Self {
            min_theta0: theta0.min,
            max_theta0: theta0.max,
            min_theta1: theta1.min,
            max_theta1: theta1.max,
        }
    }

    pub fn theta0(&self) -> Extent {
        Extent::new(self.min_theta0, self.max_theta0)
    }

    pub fn theta1(&self) -> Extent {
        Extent::new(self.min_theta1, self.max_theta1)
    }

    pub fn contains(&self, params: Params) -> bool {
        self.theta0().contains(params.theta0) && self.theta1().contains(params.theta1)
    }
}
