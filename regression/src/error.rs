use std::{
    error::Error,
    fmt::{self, Display},
};

/// The result type used in the entire regression module.
pub type Result<T> = std::result::Result<T, RegressionErr>;

/// The regression module's error type.
#[derive(Debug, Clone, PartialEq)]
pub enum RegressionErr {
    EmptyDataset,
    InvalidScale { axis: &'static str, value: f64 },
    NonFinite { index: usize },
}

impl Display for RegressionErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegressionErr::EmptyDataset => {
                write!(f, "The dataset is empty, at least one point is required")
            }
            RegressionErr::InvalidScale { axis, value } => write!(
                f,
                "The {axis} scale divisor must be finite and non-zero, got {value}"
            ),
            RegressionErr::NonFinite { index } => {
                write!(f, "The point at index {index} has a non finite coordinate")
            }
        }
    }
}

impl Error for RegressionErr {}
