use crate::constants::{DEFAULT_LOGIN_URL, DEFAULT_TIMEOUT_SECS};
use crate::error::AppError;
use crate::utils::config::{get_env_or_default, get_env_or_none};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Authentication credentials for the SensorPro API
///
/// Use an API user: API users have perpetual passwords.
pub struct Credentials {
    /// API key sent in the `x-apikey` header on sign-in
    pub api_key: String,
    /// Organization the API user belongs to
    pub organization: String,
    /// API user name
    pub user: String,
    /// API user password, never serialized
    #[serde(skip_serializing, default)]
    pub password: String,
}

impl Credentials {
    /// Creates a new set of credentials
    pub fn new(
        api_key: impl Into<String>,
        organization: impl Into<String>,
        user: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            organization: organization.into(),
            user: user.into(),
            password: password.into(),
        }
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL of the host serving the sign-in endpoint
    pub login_url: String,
    /// Timeout in seconds for REST API requests
    pub timeout: u64,
}

impl Default for RestApiConfig {
    fn default() -> Self {
        Self {
            login_url: DEFAULT_LOGIN_URL.to_string(),
            timeout: DEFAULT_TIMEOUT_SECS,
        }
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Main configuration for the SensorPro API client
pub struct Config {
    /// Authentication credentials
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
}

impl Config {
    /// Creates a configuration for the given credentials with the default login host
    #[must_use]
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            rest_api: RestApiConfig::default(),
        }
    }

    /// Overrides the login host, e.g. to point at a test server
    #[must_use]
    pub fn with_login_url(mut self, login_url: impl Into<String>) -> Self {
        self.rest_api.login_url = login_url.into();
        self
    }

    /// Loads the configuration from the environment and an optional `.env` file
    ///
    /// Required: `SENSORPRO_API_KEY`, `SENSORPRO_ORGANIZATION`, `SENSORPRO_USER`,
    /// `SENSORPRO_PASSWORD`. Optional: `SENSORPRO_LOGIN_URL`, `SENSORPRO_TIMEOUT`.
    ///
    /// # Returns
    /// * `Ok(Config)` - If every required variable is set
    /// * `Err(AppError::InvalidInput)` - Naming the first missing variable
    pub fn from_env() -> Result<Self, AppError> {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let credentials = Credentials {
            api_key: required_env("SENSORPRO_API_KEY")?,
            organization: required_env("SENSORPRO_ORGANIZATION")?,
            user: required_env("SENSORPRO_USER")?,
            password: required_env("SENSORPRO_PASSWORD")?,
        };

        let config = Config {
            credentials,
            rest_api: RestApiConfig {
                login_url: get_env_or_default(
                    "SENSORPRO_LOGIN_URL",
                    String::from(DEFAULT_LOGIN_URL),
                ),
                timeout: get_env_or_default("SENSORPRO_TIMEOUT", DEFAULT_TIMEOUT_SECS),
            },
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks that every credential field is present
    ///
    /// # Returns
    /// * `Ok(())` - If the configuration is usable
    /// * `Err(AppError::InvalidInput)` - Naming the first empty field
    pub fn validate(&self) -> Result<(), AppError> {
        let fields = [
            ("api_key", &self.credentials.api_key),
            ("organization", &self.credentials.organization),
            ("user", &self.credentials.user),
            ("password", &self.credentials.password),
            ("login_url", &self.rest_api.login_url),
        ];
        for (name, value) in fields {
            if value.trim().is_empty() {
                return Err(AppError::InvalidInput(format!("{name} must not be empty")));
            }
        }
        Ok(())
    }

    /// Full URL of the sign-in endpoint
    #[must_use]
    pub fn signin_url(&self) -> String {
        format!(
            "{}/{}",
            self.rest_api.login_url.trim_end_matches('/'),
            crate::constants::SIGNIN_PATH
        )
    }
}

fn required_env(name: &str) -> Result<String, AppError> {
    match get_env_or_none::<String>(name) {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => {
            error!("{} not found in environment variables or .env file", name);
            Err(AppError::InvalidInput(format!("{name} is not set")))
        }
    }
}
