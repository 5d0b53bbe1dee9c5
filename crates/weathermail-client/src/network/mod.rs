mod api;
mod transport;

pub use transport::{
    ApiRequest, ApiResponse, Body, HttpTransport, Method, Transport, TransportError,
};

use crate::config::ClientConfig;
use std::sync::Arc;
use thiserror::Error;
use weathermail_protocol::{
    endpoints, DetailResponse, LoginRequest, RegisterRequest, RegisterResponse, TokenResponse,
    UserProfile,
};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The backend answered with a non-success status and a `detail` body
    #[error("{detail}")]
    Application { status: u16, detail: String },

    /// The request failed or a response body could not be parsed
    #[error("{0}")]
    Transport(String),
}

/// Typed access to the weatherMail backend
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    transport: Arc<dyn Transport>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, transport: Arc<dyn Transport>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            transport,
        }
    }

    /// Client over the real HTTP transport
    pub fn from_config(config: &ClientConfig) -> Result<Self, TransportError> {
        let transport = HttpTransport::new(config.request_timeout)?;
        Ok(Self::new(config.api_base_url.clone(), Arc::new(transport)))
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    // Account

    pub async fn register(&self, request: &RegisterRequest) -> Result<RegisterResponse, ApiError> {
        tracing::debug!("Registering {}", request.email);
        api::post(
            self.transport.as_ref(),
            &self.url(endpoints::REGISTER),
            request,
            None,
        )
        .await
    }

    pub async fn login(&self, request: &LoginRequest) -> Result<TokenResponse, ApiError> {
        tracing::debug!("Requesting token for {}", request.username);

        let fields = vec![
            ("username".to_string(), request.username.clone()),
            ("password".to_string(), request.password.clone()),
        ];

        api::post_form(self.transport.as_ref(), &self.url(endpoints::TOKEN), fields).await
    }

    pub async fn current_user(&self, token: &str) -> Result<UserProfile, ApiError> {
        api::get(self.transport.as_ref(), &self.url(endpoints::ME), Some(token)).await
    }

    // Subscription

    pub async fn unsubscribe(&self, token: &str) -> Result<DetailResponse, ApiError> {
        api::post_empty(
            self.transport.as_ref(),
            &self.url(endpoints::UNSUBSCRIBE),
            Some(token),
        )
        .await
    }

    pub async fn resubscribe(&self, token: &str) -> Result<DetailResponse, ApiError> {
        api::post_empty(
            self.transport.as_ref(),
            &self.url(endpoints::RESUBSCRIBE),
            Some(token),
        )
        .await
    }
}
