pub mod builder;
pub mod connector;
pub mod converters;

use crate::core::config::CloudConfig;
use crate::core::errors::CloudError;
use crate::core::kernel::ReqwestRest;

// Re-export main types for easier importing
pub use builder::{build_connector, LetvCloudBuilder};
pub use connector::player::render_play_interface;
pub use connector::LetvCloudConnector;

/// Create a cloud connector from environment variables with the given prefix
///
/// See `CloudConfig::from_env` for the variables read.
pub fn create_connector_from_env(
    prefix: &str,
) -> Result<LetvCloudConnector<ReqwestRest>, CloudError> {
    let config = CloudConfig::from_env(prefix)?;
    build_connector(config)
}
