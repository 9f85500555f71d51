pub mod arch;
pub mod closed_form;
pub mod contour;
pub mod dataset;
pub mod error;
pub mod optimization;
pub mod training;

pub use arch::{ModelState, Params};
pub use closed_form::{ClosedForm, Optimum, Solution};
pub use contour::{ContourGenerator, ContourLevel};
pub use dataset::{Dataset, RawPoint, Scale, ScaledPoint};
pub use error::{RegressionErr, Result};
pub use training::{GradientDescentSimulator, Trajectory};
