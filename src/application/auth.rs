/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Session management for the SensorPro API
//!
//! This module owns the session lifecycle:
//! - Sign-in with the configured credentials
//! - Expiry tracking (checked lazily, never actively cleared)
//! - Bounded sign-in retry
//! - Best-effort sign-off

use crate::application::config::Config;
use crate::constants::{API_KEY_HEADER, LOGIN_ATTEMPTS, LOGOFF_PATH};
use crate::error::AppError;
use crate::model::auth::{LoginRequest, LoginResponse};
use crate::model::http::Transport;
use chrono::{DateTime, Utc};
use reqwest::Method;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, error, info, warn};

/// Session established by a successful sign-in
///
/// A session always has a token, an expiry and an API endpoint; the absence of a
/// session is represented by `None` in [`Auth`].
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    token: String,
    expires_at: DateTime<Utc>,
    api_endpoint: String,
}

impl Session {
    pub(crate) fn new(token: String, expires_at: DateTime<Utc>, api_endpoint: String) -> Self {
        Self {
            token,
            expires_at,
            api_endpoint,
        }
    }

    /// Session token
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Instant at which the token stops being valid
    #[must_use]
    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    /// Per-organization API base URL
    #[must_use]
    pub fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    /// Checks whether the session is still valid at `now`
    ///
    /// The expiry instant itself is already expired.
    #[must_use]
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }

    /// Checks whether the session is still valid
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.is_valid_at(Utc::now())
    }

    /// Builds the URL of an endpoint: `{api_endpoint}{path}/{token}`
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}/{}", self.api_endpoint, path, self.token)
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("token", &"***")
            .field("expires_at", &self.expires_at)
            .field("api_endpoint", &self.api_endpoint)
            .finish()
    }
}

/// Session manager for the SensorPro API
///
/// Holds the credentials and the current session. The session is replaced in a
/// single assignment on sign-in and cleared on sign-off; the lock is never held
/// across a network call.
pub struct Auth<T: Transport> {
    config: Arc<Config>,
    transport: Arc<T>,
    session: RwLock<Option<Session>>,
}

impl<T: Transport> Auth<T> {
    /// Creates a new session manager, initially logged out
    ///
    /// # Arguments
    /// * `config` - Configuration containing credentials and the login host
    /// * `transport` - Transport used for sign-in and sign-off
    pub fn new(config: Arc<Config>, transport: Arc<T>) -> Self {
        Self {
            config,
            transport,
            session: RwLock::new(None),
        }
    }

    /// Whether a session exists and has not expired
    pub async fn is_logged_in(&self) -> bool {
        self.session
            .read()
            .await
            .as_ref()
            .is_some_and(Session::is_valid)
    }

    /// Returns the current session if it is still valid
    pub async fn current_session(&self) -> Option<Session> {
        self.session
            .read()
            .await
            .as_ref()
            .filter(|s| s.is_valid())
            .cloned()
    }

    /// Returns a valid session, signing in first when there is none
    ///
    /// At most one sign-in sequence (see [`Auth::login_with_retry`]) runs per call;
    /// the session it produces is returned directly.
    ///
    /// # Returns
    /// * `Ok(Session)` - Valid session
    /// * `Err(AppError)` - Error of the last failed sign-in attempt
    pub async fn ensure_session(&self) -> Result<Session, AppError> {
        if let Some(session) = self.current_session().await {
            return Ok(session);
        }

        info!("No active session, logging in");
        self.login_with_retry().await
    }

    /// Performs a single sign-in
    ///
    /// # Returns
    /// * `Ok(Session)` - The new session, also stored as the current one
    /// * `Err(AppError::Transport)` - If the server answered with a non-success status
    /// * `Err(AppError::SensorPro)` - If the API rejected the credentials
    pub async fn login(&self) -> Result<Session, AppError> {
        let url = self.config.signin_url();
        let credentials = &self.config.credentials;
        let body = serde_json::to_value(LoginRequest::from(credentials))?;

        debug!("Sending login request to: {}", url);

        let headers = vec![
            ("Content-Type", "application/json"),
            (API_KEY_HEADER, credentials.api_key.as_str()),
        ];

        let response = self
            .transport
            .request(Method::POST, &url, headers, Some(&body))
            .await?;

        if !response.status.is_success() {
            error!("Login request failed with status {}", response.status);
            return Err(AppError::Transport(response.status));
        }

        let response: LoginResponse = serde_json::from_str(&response.body)?;
        let session = response.into_session(Utc::now())?;

        let mut current = self.session.write().await;
        *current = Some(session.clone());

        info!(
            "✓ Login successful, organization: {}, session expires at {}",
            credentials.organization,
            session.expires_at()
        );
        Ok(session)
    }

    /// Signs in, trying up to three times without delay
    ///
    /// Every failed attempt is logged; only the error of the last attempt is returned.
    pub async fn login_with_retry(&self) -> Result<Session, AppError> {
        let mut attempt = 1;
        loop {
            match self.login().await {
                Ok(session) => return Ok(session),
                Err(e) => {
                    error!(
                        "SensorPro login attempt {}/{} failed: {}",
                        attempt, LOGIN_ATTEMPTS, e
                    );
                    if attempt >= LOGIN_ATTEMPTS {
                        return Err(e);
                    }
                    attempt += 1;
                }
            }
        }
    }

    /// Signs off and clears the session
    ///
    /// Does nothing when not logged in. The sign-off request is best effort: its
    /// failure is logged and the local session is cleared regardless.
    pub async fn logout(&self) {
        let Some(session) = self.current_session().await else {
            debug!("Not logged in, nothing to log out");
            return;
        };

        info!("Logging out");

        let url = session.url_for(LOGOFF_PATH);
        let headers = vec![("Content-Type", "application/json")];
        match self.transport.request(Method::POST, &url, headers, None).await {
            Ok(response) if !response.status.is_success() => {
                warn!("Logoff request returned status {}", response.status);
            }
            Ok(_) => {}
            Err(e) => warn!("Logoff request failed: {}", e),
        }

        let mut current = self.session.write().await;
        *current = None;

        info!("✓ Logged out successfully");
    }

    /// The configuration this session manager signs in with
    pub fn config(&self) -> &Config {
        &self.config
    }
}
