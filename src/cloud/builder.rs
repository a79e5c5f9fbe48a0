use crate::cloud::connector::LetvCloudConnector;
use crate::core::config::CloudConfig;
use crate::core::errors::CloudError;
use crate::core::kernel::{ReqwestRest, RestClientBuilder, RestClientConfig, Signer};
use std::sync::Arc;

/// Builder for creating cloud connectors
///
/// Collects credentials, endpoint settings and transport options, then wires
/// a `ReqwestRest` dispatcher and an MD5 signer into a `LetvCloudConnector`.
pub struct LetvCloudBuilder {
    config: CloudConfig,
    user_agent: Option<String>,
    use_system_proxy: bool,
    signer: Option<Arc<dyn Signer>>,
}

impl Default for LetvCloudBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LetvCloudBuilder {
    /// Create a new `LetvCloudBuilder` with default settings
    pub fn new() -> Self {
        Self {
            config: CloudConfig::new(String::new(), String::new()),
            user_agent: None,
            use_system_proxy: true,
            signer: None,
        }
    }

    /// Set the whole configuration
    pub fn with_config(mut self, config: CloudConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the account identifier and shared secret
    pub fn with_credentials(mut self, user_unique: String, secret_key: String) -> Self {
        self.config.user_unique = user_unique;
        self.config.secret_key = secrecy::Secret::new(secret_key);
        self
    }

    pub fn with_rest_url(mut self, rest_url: String) -> Self {
        self.config.rest_url = rest_url;
        self
    }

    pub fn with_format(mut self, format: String) -> Self {
        self.config.format = format;
        self
    }

    pub fn with_api_version(mut self, api_version: String) -> Self {
        self.config.api_version = api_version;
        self
    }

    pub fn with_get_timeout(mut self, seconds: u64) -> Self {
        self.config.get_timeout_seconds = seconds;
        self
    }

    pub fn with_upload_timeout(mut self, seconds: u64) -> Self {
        self.config.upload_timeout_seconds = seconds;
        self
    }

    pub fn with_user_agent(mut self, user_agent: String) -> Self {
        self.user_agent = Some(user_agent);
        self
    }

    /// Ignore proxy settings from the environment
    pub fn without_system_proxy(mut self) -> Self {
        self.use_system_proxy = false;
        self
    }

    /// Sign with a custom signer instead of the MD5 one built from the secret
    pub fn with_signer(mut self, signer: Arc<dyn Signer>) -> Self {
        self.signer = Some(signer);
        self
    }

    /// Build a connector backed by reqwest
    pub fn build(self) -> Result<LetvCloudConnector<ReqwestRest>, CloudError> {
        if self.config.user_unique.is_empty() {
            return Err(CloudError::ConfigurationError(
                "user_unique is required".to_string(),
            ));
        }
        if self.signer.is_none() && !self.config.has_credentials() {
            return Err(CloudError::ConfigurationError(
                "secret_key is required".to_string(),
            ));
        }

        let mut rest_config = RestClientConfig::new()
            .with_get_timeout(self.config.get_timeout_seconds)
            .with_upload_timeout(self.config.upload_timeout_seconds);
        if let Some(user_agent) = self.user_agent {
            rest_config = rest_config.with_user_agent(user_agent);
        }
        if !self.use_system_proxy {
            rest_config = rest_config.without_system_proxy();
        }

        let rest = RestClientBuilder::new(rest_config).build()?;

        match self.signer {
            Some(signer) => LetvCloudConnector::with_signer(rest, self.config, signer),
            None => LetvCloudConnector::new(rest, self.config),
        }
    }
}

/// Create a connector straight from a configuration
pub fn build_connector(config: CloudConfig) -> Result<LetvCloudConnector<ReqwestRest>, CloudError> {
    LetvCloudBuilder::new().with_config(config).build()
}
