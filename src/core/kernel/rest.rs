use crate::core::config::{DEFAULT_GET_TIMEOUT_SECONDS, DEFAULT_UPLOAD_TIMEOUT_SECONDS};
use crate::core::errors::CloudError;
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Body, Client, RequestBuilder, Response};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, error, instrument, warn};

/// Multipart field name the upload endpoint expects the file under
pub const UPLOAD_FIELD: &str = "uploadfile";

/// REST client trait for dispatching requests
///
/// Both operations are single stateless exchanges: no retry, no partial-body
/// recovery. The raw response body is handed back untouched.
#[async_trait]
pub trait RestClient: Send + Sync {
    /// Issue a GET against a fully assembled, already signed URL
    ///
    /// # Arguments
    /// * `url` - Endpoint including the encoded query string
    ///
    /// # Returns
    /// The full response body
    async fn fetch_signed(&self, url: &str) -> Result<Vec<u8>, CloudError>;

    /// POST a local file as `multipart/form-data`
    ///
    /// # Arguments
    /// * `local_path` - File to stream; its base name is sent as the filename
    /// * `target_url` - Upload address handed out by the upload-init call
    ///
    /// # Returns
    /// The full response body
    async fn upload_file(&self, local_path: &Path, target_url: &str)
        -> Result<Vec<u8>, CloudError>;

    /// Change the signed GET deadline for subsequent requests; must be at least 1s
    fn set_get_timeout(&mut self, seconds: u64) -> Result<(), CloudError>;

    /// Change the upload deadline for subsequent requests; must be at least 1s
    fn set_upload_timeout(&mut self, seconds: u64) -> Result<(), CloudError>;
}

/// Reject a zero deadline: every request must give up eventually
pub(crate) fn check_timeout(seconds: u64, kind: &str) -> Result<(), CloudError> {
    if seconds == 0 {
        return Err(CloudError::ConfigurationError(format!(
            "{} timeout must be at least 1 second",
            kind
        )));
    }
    Ok(())
}

/// Configuration for the REST client
#[derive(Clone, Debug)]
pub struct RestClientConfig {
    /// Deadline for a signed GET in seconds, covering connect and body read
    pub get_timeout_seconds: u64,
    /// Deadline for a file upload in seconds
    pub upload_timeout_seconds: u64,
    /// User agent string to include in requests
    pub user_agent: String,
    /// Honour `HTTP_PROXY` and friends from the environment
    pub use_system_proxy: bool,
}

impl Default for RestClientConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl RestClientConfig {
    pub fn new() -> Self {
        Self {
            get_timeout_seconds: DEFAULT_GET_TIMEOUT_SECONDS,
            upload_timeout_seconds: DEFAULT_UPLOAD_TIMEOUT_SECONDS,
            user_agent: format!("letvcloud-rust/{}", env!("CARGO_PKG_VERSION")),
            use_system_proxy: true,
        }
    }

    /// Set the signed GET timeout
    pub fn with_get_timeout(mut self, seconds: u64) -> Self {
        self.get_timeout_seconds = seconds;
        self
    }

    /// Set the upload timeout
    pub fn with_upload_timeout(mut self, seconds: u64) -> Self {
        self.upload_timeout_seconds = seconds;
        self
    }

    /// Set the user agent string
    pub fn with_user_agent(mut self, user_agent: String) -> Self {
        self.user_agent = user_agent;
        self
    }

    /// Connect directly, ignoring proxy settings from the environment
    pub fn without_system_proxy(mut self) -> Self {
        self.use_system_proxy = false;
        self
    }
}

/// Builder for creating REST client instances
pub struct RestClientBuilder {
    config: RestClientConfig,
}

impl RestClientBuilder {
    pub fn new(config: RestClientConfig) -> Self {
        Self { config }
    }

    /// Build the REST client
    ///
    /// Deadlines are applied per request from the config, so they can be
    /// changed later without rebuilding the underlying HTTP client. Both
    /// must be non-zero.
    pub fn build(self) -> Result<ReqwestRest, CloudError> {
        check_timeout(self.config.get_timeout_seconds, "GET")?;
        check_timeout(self.config.upload_timeout_seconds, "upload")?;

        let mut builder = Client::builder().user_agent(&self.config.user_agent);
        if !self.config.use_system_proxy {
            builder = builder.no_proxy();
        }

        let client = builder.build().map_err(|e| {
            CloudError::ConfigurationError(format!("Failed to build HTTP client: {}", e))
        })?;

        Ok(ReqwestRest {
            client,
            config: self.config,
        })
    }
}

/// Implementation of `RestClient` using reqwest
#[derive(Clone)]
pub struct ReqwestRest {
    client: Client,
    config: RestClientConfig,
}

impl std::fmt::Debug for ReqwestRest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReqwestRest")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl ReqwestRest {
    /// Create a `ReqwestRest` with default settings
    pub fn new() -> Result<Self, CloudError> {
        RestClientBuilder::new(RestClientConfig::new()).build()
    }

    pub fn config(&self) -> &RestClientConfig {
        &self.config
    }

    fn with_deadline(request: RequestBuilder, seconds: u64) -> RequestBuilder {
        request.timeout(Duration::from_secs(seconds))
    }

    /// Drain the response body, whatever the status code
    ///
    /// The API reports its own errors inside the body, so a non-2xx status
    /// is logged and the body is still returned.
    async fn read_body(response: Response, timeout_seconds: u64) -> Result<Vec<u8>, CloudError> {
        let status = response.status();
        if !status.is_success() {
            warn!(status = %status, "Server answered with non-success status");
        }

        let body = response.bytes().await.map_err(|e| {
            error!("Failed to read response body: {}", e);
            CloudError::from_transport(&e, timeout_seconds)
        })?;

        debug!(status = %status, bytes = body.len(), "Response received");
        Ok(body.to_vec())
    }
}

fn file_access_error(path: &Path, source: std::io::Error) -> CloudError {
    error!(path = %path.display(), "Cannot open upload file: {}", source);
    CloudError::FileAccess {
        path: path.to_path_buf(),
        source,
    }
}

#[async_trait]
impl RestClient for ReqwestRest {
    #[instrument(skip(self, url), fields(timeout = self.config.get_timeout_seconds))]
    async fn fetch_signed(&self, url: &str) -> Result<Vec<u8>, CloudError> {
        let timeout = self.config.get_timeout_seconds;
        let request = Self::with_deadline(self.client.get(url), timeout);

        let response = request.send().await.map_err(|e| {
            error!("Signed GET failed: {}", e);
            CloudError::from_transport(&e, timeout)
        })?;

        Self::read_body(response, timeout).await
    }

    #[instrument(skip(self, local_path), fields(file = %local_path.display(), timeout = self.config.upload_timeout_seconds))]
    async fn upload_file(
        &self,
        local_path: &Path,
        target_url: &str,
    ) -> Result<Vec<u8>, CloudError> {
        let file = tokio::fs::File::open(local_path)
            .await
            .map_err(|e| file_access_error(local_path, e))?;

        let metadata = file
            .metadata()
            .await
            .map_err(|e| file_access_error(local_path, e))?;
        if !metadata.is_file() {
            return Err(file_access_error(
                local_path,
                std::io::Error::new(std::io::ErrorKind::InvalidInput, "not a regular file"),
            ));
        }

        let file_name = local_path
            .file_name()
            .map_or_else(|| "upload".to_string(), |n| n.to_string_lossy().into_owned());

        // The body owns the handle from here on; it is closed once the request
        // finishes or its future is dropped.
        let part = Part::stream_with_length(Body::from(file), metadata.len()).file_name(file_name);
        let form = Form::new().part(UPLOAD_FIELD, part);

        let timeout = self.config.upload_timeout_seconds;
        let request = Self::with_deadline(self.client.post(target_url).multipart(form), timeout);

        let response = request.send().await.map_err(|e| {
            error!("File upload failed: {}", e);
            CloudError::from_transport(&e, timeout)
        })?;

        Self::read_body(response, timeout).await
    }

    fn set_get_timeout(&mut self, seconds: u64) -> Result<(), CloudError> {
        check_timeout(seconds, "GET")?;
        self.config.get_timeout_seconds = seconds;
        Ok(())
    }

    fn set_upload_timeout(&mut self, seconds: u64) -> Result<(), CloudError> {
        check_timeout(seconds, "upload")?;
        self.config.upload_timeout_seconds = seconds;
        Ok(())
    }
}
