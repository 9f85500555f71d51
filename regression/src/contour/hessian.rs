use super::SymmetricEigen;

/// The smallest eigenvalue handed out by `Hessian::eigen`.
pub const MIN_EIGENVALUE: f64 = 1e-9;

/// The 2×2 symmetric Hessian of a loss with respect to `(theta0, theta1)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hessian {
    h00: f64,
    h01: f64,
    h11: f64,
}

impl Hessian {
    pub fn new(h00: f64, h01: f64, h11: f64) -> Self {
        Self { h00, h01, h11 }
    }

    pub fn h00(&self) -> f64 {
        self.h00
    }

    pub fn h01(&self) -> f64 {
        self.h01
    }

    pub fn h11(&self) -> f64 {
        self.h11
    }

    /// Eigendecomposition with both eigenvalues clamped to `MIN_EIGENVALUE`, so a singular or
    /// noisy matrix never produces NaN radii downstream.
    pub fn eigen(&self) -> SymmetricEigen {
        let mut eigen = SymmetricEigen::new(self.h00, self.h01, self.h11);
        for value in eigen.values.iter_mut() {
            *value = value.max(MIN_EIGENVALUE);
        }
        eigen
    }

    /// The learning rate above which fixed step gradient descent diverges, `2 / λ1`.
    pub fn stability_threshold(&self) -> f64 {
        2.0 / self.eigen().values[0]
    }

    /// Evaluates `½ dᵀ H d`.
    pub fn half_quadratic_form(&self, d0: f64, d1: f64) -> f64 {
        0.5 * (self.h00 * d0 * d0 + 2.0 * self.h01 * d0 * d1 + self.h11 * d1 * d1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn singular_hessian_is_clamped() {
        let eigen = Hessian::new(2.0, 4.0, 8.0).eigen();
        assert_eq!(eigen.values[1], MIN_EIGENVALUE);
        assert!(eigen.values.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn stability_threshold_is_two_over_the_largest_eigenvalue() {
        let hessian = Hessian::new(2.0, 0.0, 4.0);
        assert_eq!(hessian.stability_threshold(), 0.5);
    }
}
