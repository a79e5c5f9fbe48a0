use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::env;

pub const DEFAULT_REST_URL: &str = "http://api.letvcloud.com/open.php";
pub const DEFAULT_FORMAT: &str = "json";
pub const DEFAULT_API_VERSION: &str = "2.0";
pub const DEFAULT_GET_TIMEOUT_SECONDS: u64 = 30;
pub const DEFAULT_UPLOAD_TIMEOUT_SECONDS: u64 = 300;

#[derive(Debug, Clone)]
pub struct CloudConfig {
    pub user_unique: String,
    pub secret_key: Secret<String>,
    pub rest_url: String,
    pub format: String,
    pub api_version: String,
    pub get_timeout_seconds: u64,
    pub upload_timeout_seconds: u64,
}

// Custom Serialize implementation - never expose the secret in serialization
impl Serialize for CloudConfig {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("CloudConfig", 7)?;
        state.serialize_field("user_unique", &self.user_unique)?;
        state.serialize_field("secret_key", "[REDACTED]")?;
        state.serialize_field("rest_url", &self.rest_url)?;
        state.serialize_field("format", &self.format)?;
        state.serialize_field("api_version", &self.api_version)?;
        state.serialize_field("get_timeout_seconds", &self.get_timeout_seconds)?;
        state.serialize_field("upload_timeout_seconds", &self.upload_timeout_seconds)?;
        state.end()
    }
}

impl<'de> Deserialize<'de> for CloudConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct CloudConfigHelper {
            user_unique: String,
            secret_key: String,
            rest_url: Option<String>,
            format: Option<String>,
            api_version: Option<String>,
            get_timeout_seconds: Option<u64>,
            upload_timeout_seconds: Option<u64>,
        }

        let helper = CloudConfigHelper::deserialize(deserializer)?;
        Ok(Self {
            user_unique: helper.user_unique,
            secret_key: Secret::new(helper.secret_key),
            rest_url: helper
                .rest_url
                .unwrap_or_else(|| DEFAULT_REST_URL.to_string()),
            format: helper.format.unwrap_or_else(|| DEFAULT_FORMAT.to_string()),
            api_version: helper
                .api_version
                .unwrap_or_else(|| DEFAULT_API_VERSION.to_string()),
            get_timeout_seconds: helper
                .get_timeout_seconds
                .unwrap_or(DEFAULT_GET_TIMEOUT_SECONDS),
            upload_timeout_seconds: helper
                .upload_timeout_seconds
                .unwrap_or(DEFAULT_UPLOAD_TIMEOUT_SECONDS),
        })
    }
}

impl CloudConfig {
    /// Create a new configuration with the account identifier and shared secret
    #[must_use]
    pub fn new(user_unique: String, secret_key: String) -> Self {
        Self {
            user_unique,
            secret_key: Secret::new(secret_key),
            rest_url: DEFAULT_REST_URL.to_string(),
            format: DEFAULT_FORMAT.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            get_timeout_seconds: DEFAULT_GET_TIMEOUT_SECONDS,
            upload_timeout_seconds: DEFAULT_UPLOAD_TIMEOUT_SECONDS,
        }
    }

    /// Create configuration from environment variables
    ///
    /// Expected environment variables:
    /// - `{PREFIX}_USER_UNIQUE` (e.g., `LETV_USER_UNIQUE`)
    /// - `{PREFIX}_SECRET_KEY` (e.g., `LETV_SECRET_KEY`)
    /// - `{PREFIX}_REST_URL` (optional)
    /// - `{PREFIX}_FORMAT` (optional, defaults to `json`)
    /// - `{PREFIX}_API_VERSION` (optional, defaults to `2.0`)
    /// - `{PREFIX}_GET_TIMEOUT` (optional, seconds)
    /// - `{PREFIX}_UPLOAD_TIMEOUT` (optional, seconds)
    pub fn from_env(prefix: &str) -> Result<Self, ConfigError> {
        let prefix = prefix.to_uppercase();
        let user_unique_var = format!("{}_USER_UNIQUE", prefix);
        let secret_key_var = format!("{}_SECRET_KEY", prefix);

        let user_unique = env::var(&user_unique_var)
            .map_err(|_| ConfigError::MissingEnvironmentVariable(user_unique_var))?;

        let secret_key = env::var(&secret_key_var)
            .map_err(|_| ConfigError::MissingEnvironmentVariable(secret_key_var))?;

        let mut config = Self::new(user_unique, secret_key);

        if let Ok(rest_url) = env::var(format!("{}_REST_URL", prefix)) {
            config.rest_url = rest_url;
        }
        if let Ok(format) = env::var(format!("{}_FORMAT", prefix)) {
            config.format = format;
        }
        if let Ok(api_version) = env::var(format!("{}_API_VERSION", prefix)) {
            config.api_version = api_version;
        }
        if let Some(seconds) = parse_seconds(&format!("{}_GET_TIMEOUT", prefix))? {
            config.get_timeout_seconds = seconds;
        }
        if let Some(seconds) = parse_seconds(&format!("{}_UPLOAD_TIMEOUT", prefix))? {
            config.upload_timeout_seconds = seconds;
        }

        Ok(config)
    }

    /// Create configuration from .env file and environment variables
    ///
    /// **Security Warning**: Never commit .env files to version control!
    #[cfg(feature = "env-file")]
    pub fn from_env_file(prefix: &str) -> Result<Self, ConfigError> {
        Self::from_env_file_with_path(prefix, ".env")
    }

    /// Create configuration from a specific .env file path
    ///
    /// A missing file is not an error; the process environment is used as-is.
    #[cfg(feature = "env-file")]
    pub fn from_env_file_with_path(prefix: &str, env_file_path: &str) -> Result<Self, ConfigError> {
        match dotenv::from_path(env_file_path) {
            Ok(()) => {}
            Err(dotenv::Error::Io(io_err)) if io_err.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => {
                return Err(ConfigError::InvalidConfiguration(format!(
                    "Failed to load .env file '{}': {}",
                    env_file_path, e
                )));
            }
        }

        Self::from_env(prefix)
    }

    /// Check if this configuration can sign requests
    #[must_use]
    pub fn has_credentials(&self) -> bool {
        !self.user_unique.is_empty() && !self.secret_key.expose_secret().is_empty()
    }

    /// Set the REST endpoint URL
    #[must_use]
    pub fn rest_url(mut self, rest_url: String) -> Self {
        self.rest_url = rest_url;
        self
    }

    /// Set the response format tag
    #[must_use]
    pub fn format(mut self, format: String) -> Self {
        self.format = format;
        self
    }

    /// Set the API version tag
    #[must_use]
    pub fn api_version(mut self, api_version: String) -> Self {
        self.api_version = api_version;
        self
    }

    /// Set the signed GET timeout; zero is rejected when the connector is built
    #[must_use]
    pub const fn get_timeout(mut self, seconds: u64) -> Self {
        self.get_timeout_seconds = seconds;
        self
    }

    /// Set the file upload timeout; zero is rejected when the connector is built
    #[must_use]
    pub const fn upload_timeout(mut self, seconds: u64) -> Self {
        self.upload_timeout_seconds = seconds;
        self
    }

    /// Get the shared secret (use carefully - exposes secret)
    pub fn secret_key(&self) -> &str {
        self.secret_key.expose_secret()
    }
}

fn parse_seconds(var: &str) -> Result<Option<u64>, ConfigError> {
    let Ok(raw) = env::var(var) else {
        return Ok(None);
    };
    let seconds = raw.trim().parse::<u64>().map_err(|e| {
        ConfigError::InvalidConfiguration(format!("{} must be whole seconds: {}", var, e))
    })?;
    if seconds == 0 {
        return Err(ConfigError::InvalidConfiguration(format!(
            "{} must be at least 1 second",
            var
        )));
    }
    Ok(Some(seconds))
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvironmentVariable(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CloudConfig::new("u1".to_string(), "k".to_string());
        assert_eq!(config.rest_url, DEFAULT_REST_URL);
        assert_eq!(config.format, "json");
        assert_eq!(config.api_version, "2.0");
        assert_eq!(config.get_timeout_seconds, 30);
        assert_eq!(config.upload_timeout_seconds, 300);
        assert!(config.has_credentials());
    }

    #[test]
    fn test_missing_secret_means_no_credentials() {
        let config = CloudConfig::new("u1".to_string(), String::new());
        assert!(!config.has_credentials());
    }

    #[test]
    fn test_serialize_redacts_secret() {
        let config = CloudConfig::new("u1".to_string(), "very-secret".to_string());
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("very-secret"));
        assert!(json.contains("[REDACTED]"));
        assert!(json.contains("\"user_unique\":\"u1\""));
    }

    #[test]
    fn test_deserialize_applies_defaults() {
        let config: CloudConfig =
            serde_json::from_str(r#"{"user_unique":"u1","secret_key":"k","get_timeout_seconds":5}"#)
                .unwrap();
        assert_eq!(config.secret_key(), "k");
        assert_eq!(config.get_timeout_seconds, 5);
        assert_eq!(config.upload_timeout_seconds, DEFAULT_UPLOAD_TIMEOUT_SECONDS);
        assert_eq!(config.format, DEFAULT_FORMAT);
    }

    #[test]
    fn test_from_env() {
        env::set_var("LETVCFGTEST_USER_UNIQUE", "env-user");
        env::set_var("LETVCFGTEST_SECRET_KEY", "env-secret");
        env::set_var("LETVCFGTEST_GET_TIMEOUT", "7");

        let config = CloudConfig::from_env("letvcfgtest").unwrap();
        assert_eq!(config.user_unique, "env-user");
        assert_eq!(config.secret_key(), "env-secret");
        assert_eq!(config.get_timeout_seconds, 7);
        assert_eq!(config.upload_timeout_seconds, DEFAULT_UPLOAD_TIMEOUT_SECONDS);
    }

    #[test]
    fn test_from_env_rejects_bad_timeout() {
        env::set_var("LETVBADTIMEOUT_USER_UNIQUE", "u");
        env::set_var("LETVBADTIMEOUT_SECRET_KEY", "k");
        env::set_var("LETVBADTIMEOUT_UPLOAD_TIMEOUT", "soon");

        let result = CloudConfig::from_env("letvbadtimeout");
        assert!(matches!(result, Err(ConfigError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_from_env_rejects_zero_timeout() {
        env::set_var("LETVZEROTIMEOUT_USER_UNIQUE", "u");
        env::set_var("LETVZEROTIMEOUT_SECRET_KEY", "k");
        env::set_var("LETVZEROTIMEOUT_GET_TIMEOUT", "0");

        let result = CloudConfig::from_env("letvzerotimeout");
        assert!(matches!(result, Err(ConfigError::InvalidConfiguration(msg)) if msg.contains("at least 1 second")));
    }

    #[test]
    fn test_from_env_missing_variable() {
        let result = CloudConfig::from_env("LETV_DEFINITELY_UNSET_PREFIX");
        assert!(matches!(
            result,
            Err(ConfigError::MissingEnvironmentVariable(var)) if var == "LETV_DEFINITELY_UNSET_PREFIX_USER_UNIQUE"
        ));
    }
}
