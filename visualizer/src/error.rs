use std::{fmt, io};

use regression::RegressionErr;

/// The visualizer module's result type.
pub type Result<T> = std::result::Result<T, VizError>;

/// All errors that can occur while building or driving a visualization.
#[derive(Debug)]
pub enum VizError {
    /// Invalid configuration, caught before anything is computed.
    InvalidConfig(String),
    /// The points could not be turned into a dataset.
    Regression(RegressionErr),
    /// A configuration file is not valid JSON or has the wrong shape.
    Json(serde_json::Error),
    /// An underlying I/O error not covered by the above variants.
    Io(io::Error),
}

impl fmt::Display for VizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            Self::Regression(e) => write!(f, "regression error: {e}"),
            Self::Json(e) => write!(f, "json error: {e}"),
            Self::Io(e) => write!(f, "io error: {e}"),
        }
    }
}

impl std::error::Error for VizError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Regression(e) => Some(e),
            Self::Json(e) => Some(e),
            Self::Io(e) => Some(e),
            Self::InvalidConfig(_) => None,
        }
    }
}

impl From<RegressionErr> for VizError {
    fn from(e: RegressionErr) -> Self {
        Self::Regression(e)
    }
}

impl From<serde_json::Error> for VizError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

impl From<io::Error> for VizError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// Boundary conversion for binaries.
impl From<VizError> for io::Error {
    fn from(value: VizError) -> Self {
        match value {
            VizError::Io(e) => e,
            other => io::Error::new(io::ErrorKind::InvalidInput, other),
        }
    }
}
