//! Iso-loss contours of the mean squared error around the closed form optimum.
//!
//! The loss of a linear regression is exactly quadratic in its parameters, so around the optimum
//! it reads `loss(θ) = loss* + ½ dᵀ H d` with `d = θ − θ*`. Every level set is therefore an
//! ellipse whose axes are the eigenvectors of the (constant) Hessian `H`.

mod eigen;
mod hessian;
mod levels;

pub use eigen::SymmetricEigen;
pub use hessian::Hessian;
pub use levels::{ContourGenerator, ContourLevel};
