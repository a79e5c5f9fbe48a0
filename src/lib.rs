//! Client SDK for the LeTV cloud video REST API.
//!
//! Requests are signed with the platform's MD5 scheme: every parameter key
//! immediately followed by its value, in ascending key order, with the shared
//! secret appended. Responses come back as raw bytes in the configured
//! `format`.
//!
//! ```rust,no_run
//! use letvcloud::{LetvCloudBuilder, VideoCatalog, VideoList, VideoStatus};
//!
//! # async fn example() -> Result<(), letvcloud::CloudError> {
//! let cloud = LetvCloudBuilder::new()
//!     .with_credentials("user_unique".to_string(), "secret_key".to_string())
//!     .with_get_timeout(10)
//!     .build()?;
//!
//! let body = cloud
//!     .video_list(&VideoList {
//!         size: Some(20),
//!         status: Some(VideoStatus::PlayOk),
//!         ..VideoList::default()
//!     })
//!     .await?;
//! println!("{}", String::from_utf8_lossy(&body));
//! # Ok(())
//! # }
//! ```

pub mod cloud;
pub mod core;

pub use crate::cloud::{build_connector, LetvCloudBuilder, LetvCloudConnector};
pub use crate::core::{
    config::CloudConfig,
    errors::CloudError,
    kernel::{ParameterSet, ReqwestRest, RestClient, Signer},
    traits::{CloudConnector, DataReporter, PlayerEmbed, RawResponse, VideoCatalog, VideoUploader},
    types::*,
};
