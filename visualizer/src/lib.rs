pub mod bounds;
pub mod configs;
pub mod error;
pub mod mapping;
pub mod playback;
pub mod scene;
mod session;

use log::info;
use tokio::runtime::Handle;

use configs::VisualizationConfig;

pub use error::{Result, VizError};
pub use session::Session;

/// Computes the scene of a configuration and returns a session ready to play it.
///
/// # Arguments
/// * `config` - The visualization's configuration.
/// * `runtime` - The runtime the playback timer runs on.
///
/// # Errors
/// Returns a `VizError` if the config is invalid or its points can't be normalized.
pub fn visualize(config: &VisualizationConfig, runtime: Handle) -> Result<Session> {
    info!("building visualization");
    Session::new(config, runtime)
}
