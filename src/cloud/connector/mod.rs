pub mod data;
pub mod player;
pub mod upload;
pub mod video;

use crate::core::{
    config::CloudConfig,
    errors::CloudError,
    kernel::{build_url, Md5Signer, ParameterSet, RestClient, Signer},
    traits::{CloudConnector, RawResponse},
};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Cloud connector: injects identity fields, signs and dispatches
///
/// All API calls take `&self` and share nothing mutable, so one connector can
/// serve concurrent tasks. Reconfiguring it needs `&mut self`.
pub struct LetvCloudConnector<R: RestClient> {
    rest: R,
    signer: Arc<dyn Signer>,
    /// Set when the signer came from `with_signer` rather than the secret
    custom_signer: bool,
    config: CloudConfig,
}

impl<R: RestClient> LetvCloudConnector<R> {
    /// Create a connector signing with the config's shared secret
    ///
    /// The config's deadlines are applied to `rest`, replacing whatever it
    /// was built with. Zero deadlines are rejected.
    pub fn new(rest: R, config: CloudConfig) -> Result<Self, CloudError> {
        let signer = Arc::new(Md5Signer::new(config.secret_key().to_string()));
        Self::assemble(rest, config, signer, false)
    }

    /// Create a connector with a custom signer
    pub fn with_signer(
        rest: R,
        config: CloudConfig,
        signer: Arc<dyn Signer>,
    ) -> Result<Self, CloudError> {
        Self::assemble(rest, config, signer, true)
    }

    fn assemble(
        mut rest: R,
        config: CloudConfig,
        signer: Arc<dyn Signer>,
        custom_signer: bool,
    ) -> Result<Self, CloudError> {
        rest.set_get_timeout(config.get_timeout_seconds)?;
        rest.set_upload_timeout(config.upload_timeout_seconds)?;
        Ok(Self {
            rest,
            signer,
            custom_signer,
            config,
        })
    }

    pub fn config(&self) -> &CloudConfig {
        &self.config
    }

    pub fn rest(&self) -> &R {
        &self.rest
    }

    pub fn set_user_unique(&mut self, user_unique: String) {
        self.config.user_unique = user_unique;
    }

    /// Replace the shared secret; subsequent requests are signed with it
    ///
    /// A signer installed through `with_signer` is kept as is; only the
    /// stored secret changes.
    pub fn set_secret_key(&mut self, secret_key: String) {
        if self.custom_signer {
            debug!("Custom signer in use, keeping it");
        } else {
            self.signer = Arc::new(Md5Signer::new(secret_key.clone()));
        }
        self.config.secret_key = secrecy::Secret::new(secret_key);
    }

    pub fn set_rest_url(&mut self, rest_url: String) {
        self.config.rest_url = rest_url;
    }

    pub fn set_format(&mut self, format: String) {
        self.config.format = format;
    }

    pub fn set_api_version(&mut self, api_version: String) {
        self.config.api_version = api_version;
    }

    /// Add the SDK fields to `params`, sign them and return the request URL
    ///
    /// The timestamp is taken at call time, in milliseconds since the epoch.
    pub fn signed_url(&self, api: &str, params: ParameterSet) -> String {
        self.signed_url_at(api, params, chrono::Utc::now().timestamp_millis())
    }

    pub(crate) fn signed_url_at(&self, api: &str, mut params: ParameterSet, timestamp: i64) -> String {
        params
            .insert("user_unique", self.config.user_unique.as_str())
            .insert("timestamp", timestamp.to_string())
            .insert("ver", self.config.api_version.as_str())
            .insert("format", self.config.format.as_str())
            .insert("api", api);
        self.signer.sign(&mut params);

        build_url(&self.config.rest_url, &params)
    }

    /// Sign and send an arbitrary API call
    ///
    /// Every enumerated endpoint goes through here; it is public for APIs
    /// this crate has no dedicated method for.
    #[instrument(skip(self, params), fields(api = %api, param_count = params.len()))]
    pub async fn signed_get(&self, api: &str, params: ParameterSet) -> RawResponse {
        let url = self.signed_url(api, params);
        debug!("Dispatching signed request");
        self.rest.fetch_signed(&url).await
    }

    /// Change the signed GET deadline for subsequent requests
    pub fn set_get_timeout(&mut self, seconds: u64) -> Result<(), CloudError> {
        self.rest.set_get_timeout(seconds)?;
        self.config.get_timeout_seconds = seconds;
        Ok(())
    }

    /// Change the upload deadline for subsequent requests
    pub fn set_upload_timeout(&mut self, seconds: u64) -> Result<(), CloudError> {
        self.rest.set_upload_timeout(seconds)?;
        self.config.upload_timeout_seconds = seconds;
        Ok(())
    }
}

impl<R: RestClient> CloudConnector for LetvCloudConnector<R> {}

impl<R: RestClient> std::fmt::Debug for LetvCloudConnector<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LetvCloudConnector")
            .field("user_unique", &self.config.user_unique)
            .field("rest_url", &self.config.rest_url)
            .finish_non_exhaustive()
    }
}
