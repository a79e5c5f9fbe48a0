//! Request kernel - parameter canonicalization, signing and dispatch
//!
//! Everything the cloud API needs to accept a request lives here and nothing
//! endpoint-specific does.
//!
//! # Architecture
//!
//! ## Parameters
//! - `ParameterSet`: ordered string-to-string map for one call
//!
//! ## Authentication
//! - `Signer`: pluggable signing interface
//! - `Md5Signer`: sorted key/value concatenation plus secret, MD5, lowercase hex
//!
//! ## Encoding
//! - `encode`: form encoding with spaces rendered as `%20`
//!
//! ## Transport
//! - `RestClient`: signed GET and multipart upload
//! - `ReqwestRest`: reqwest implementation with per-request deadlines
//!
//! # Example
//! ```rust,no_run
//! use letvcloud::core::kernel::*;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let rest = RestClientBuilder::new(RestClientConfig::new().with_get_timeout(10)).build()?;
//! let signer = Md5Signer::new("secret".to_string());
//!
//! let mut params = ParameterSet::new();
//! params
//!     .insert("api", "video.get")
//!     .insert("video_id", "123")
//!     .insert("user_unique", "u1")
//!     .insert("timestamp", "1700000000000")
//!     .insert("ver", "2.0")
//!     .insert("format", "json");
//! signer.sign(&mut params);
//!
//! let url = build_url("http://api.letvcloud.com/open.php", &params);
//! let body = rest.fetch_signed(&url).await?;
//! println!("{}", String::from_utf8_lossy(&body));
//! # Ok(())
//! # }
//! ```

pub mod params;
pub mod query;
pub mod rest;
pub mod signer;

pub use params::ParameterSet;
pub use query::{build_url, encode};
pub use rest::{ReqwestRest, RestClient, RestClientBuilder, RestClientConfig, UPLOAD_FIELD};
pub use signer::{sign, Md5Signer, Signer, SIGN_FIELD};
