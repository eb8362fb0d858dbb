/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Client for the SensorPro API
//!
//! Every operation follows the same sequence: make sure a valid session exists
//! (signing in when needed), send the request with the session token embedded in
//! the URL, decode the response and check its `Result` object.
//!
//! An API-reported failure is returned as-is even when it might stem from a
//! rejected token; the payload does not tell authorization failures apart from
//! validation failures, so no re-login is attempted on that path.

use crate::application::auth::{Auth, Session};
use crate::application::config::Config;
use crate::application::interfaces::campaign::CampaignService;
use crate::application::interfaces::contact::ContactService;
use crate::constants::{
    ADD_CONTACT_PATH, CHANGE_OPT_OUT_STATUS_PATH, GET_CONTACTS_PATH, TRIGGER_EMAIL_PATH,
    UPDATE_CONTACT_PATH,
};
use crate::error::AppError;
use crate::model::http::{ReqwestTransport, Transport};
use crate::model::responses::decode_api_response;
use async_trait::async_trait;
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

/// Client for the SensorPro API with automatic session handling
pub struct Client<T: Transport = ReqwestTransport> {
    auth: Auth<T>,
    transport: Arc<T>,
}

impl Client<ReqwestTransport> {
    /// Creates a client using the `reqwest` transport
    ///
    /// No request is sent: the first operation signs in.
    ///
    /// # Returns
    /// * `Ok(Client)` - Client ready to use
    /// * `Err(AppError)` - If the configuration is invalid or the HTTP client cannot be built
    pub fn new(config: Config) -> Result<Self, AppError> {
        config.validate()?;
        let transport = Arc::new(ReqwestTransport::new(&config)?);
        Ok(Self::with_transport(config, transport))
    }

    /// Creates a client from the environment, see [`Config::from_env`]
    pub fn from_env() -> Result<Self, AppError> {
        Self::new(Config::from_env()?)
    }
}

impl<T: Transport> Client<T> {
    /// Creates a client on top of a custom transport
    pub fn with_transport(config: Config, transport: Arc<T>) -> Self {
        let auth = Auth::new(Arc::new(config), transport.clone());
        Self { auth, transport }
    }

    /// Whether the client currently holds a valid session
    pub async fn is_logged_in(&self) -> bool {
        self.auth.is_logged_in().await
    }

    /// Signs in now instead of waiting for the first operation
    pub async fn login(&self) -> Result<Session, AppError> {
        self.auth.login_with_retry().await
    }

    /// Signs off and clears the session, see [`Auth::logout`]
    pub async fn logout(&self) {
        self.auth.logout().await
    }

    /// Gets a reference to the underlying session manager
    pub fn auth(&self) -> &Auth<T> {
        &self.auth
    }

    /// Sends a request to a business endpoint and returns the checked response body
    ///
    /// # Arguments
    /// * `method` - HTTP method
    /// * `path` - Endpoint path relative to the API endpoint, without the token
    /// * `body` - Payload, serialized as the JSON request body
    ///
    /// # Returns
    /// * `Ok(Value)` - Decoded response whose `Result` reports no errors
    /// * `Err(AppError::SensorPro)` - If `Result.TotalErrors > 0`
    /// * `Err(AppError)` - If signing in or sending the request failed
    pub async fn request<B: Serialize + ?Sized + Sync>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<Value, AppError> {
        let body = serde_json::to_value(body)?;
        let session = self.auth.ensure_session().await?;
        let url = session.url_for(path);

        debug!("{} {}", method, path);

        let headers = vec![("Content-Type", "application/json")];
        let response = self
            .transport
            .request(method, &url, headers, Some(&body))
            .await?;

        decode_api_response(response)
    }
}

#[async_trait]
impl<T: Transport + 'static> ContactService for Client<T> {
    async fn get_contacts(&self, body: &Value) -> Result<Value, AppError> {
        info!("Getting contacts");
        let response = self.request(Method::POST, GET_CONTACTS_PATH, body).await?;
        debug!("Contacts obtained");
        Ok(response)
    }

    async fn add(&self, body: &Value) -> Result<(), AppError> {
        info!("Adding contacts");
        self.request(Method::POST, ADD_CONTACT_PATH, body).await?;
        Ok(())
    }

    async fn update(&self, body: &Value) -> Result<(), AppError> {
        info!("Updating contacts");
        self.request(Method::PUT, UPDATE_CONTACT_PATH, body).await?;
        Ok(())
    }

    async fn change_opt_out_status(&self, body: &Value) -> Result<(), AppError> {
        info!("Changing contact opt-out status");
        self.request(Method::PUT, CHANGE_OPT_OUT_STATUS_PATH, body)
            .await?;
        Ok(())
    }
}

#[async_trait]
impl<T: Transport + 'static> CampaignService for Client<T> {
    async fn trigger_email(&self, body: &Value) -> Result<(), AppError> {
        info!("Triggering email campaign");
        self.request(Method::POST, TRIGGER_EMAIL_PATH, body).await?;
        Ok(())
    }
}
