mod adapter;
mod json;
mod visualization;

pub use adapter::Adapter;
pub use json::{from_json_str, load};
pub use visualization::{Hyperparams, PointConfig, ScaleConfig, VisualizationConfig};
