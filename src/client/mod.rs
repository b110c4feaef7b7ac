//! Admin-side client layer.
//!
//! The pieces of the dashboard that are independent of any UI framework: a
//! reqwest-backed resource client, the generic list controller, the shell's
//! tab routing and stats, and the public-site sample fallbacks.

pub mod controller;
pub mod dashboard;
pub mod resources;
pub mod sample;

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::models::{LoginRequest, LoginResponse};
use self::resources::ResourceAdapter;

/// Error produced by the resource client.
#[derive(Debug, Clone)]
pub enum ClientError {
    /// The request never completed or the body could not be decoded.
    Transport(String),
    /// The backend answered with an error envelope.
    Api { code: String, message: String },
}

impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClientError::Transport(msg) => write!(f, "transport error: {}", msg),
            ClientError::Api { code, message } => write!(f, "{}: {}", code, message),
        }
    }
}

impl std::error::Error for ClientError {}

/// Response envelope shared by every endpoint.
#[derive(Debug, Deserialize)]
struct Envelope {
    success: bool,
    #[serde(default)]
    data: Value,
    #[serde(default)]
    error: Option<EnvelopeError>,
}

#[derive(Debug, Default, Deserialize)]
struct EnvelopeError {
    #[serde(default)]
    code: String,
    #[serde(default)]
    message: String,
}

/// HTTP facade over the backend, one instance per signed-in admin.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            token: None,
        }
    }

    /// Whether a session token is currently attached.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Issue a request and unwrap the response envelope.
    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Value, ClientError> {
        let url = format!("{}{}", self.base_url, path);

        let mut builder = self.http.request(method, &url);
        if let Some(token) = &self.token {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;
        let status = response.status();

        let envelope: Envelope = response
            .json()
            .await
            .map_err(|e| ClientError::Transport(format!("invalid response body: {}", e)))?;

        if !envelope.success {
            let error = envelope.error.unwrap_or_default();
            let message = if error.message.is_empty() {
                format!("HTTP error, status {}", status)
            } else {
                error.message
            };
            return Err(ClientError::Api {
                code: error.code,
                message,
            });
        }

        Ok(envelope.data)
    }

    fn decode<T: DeserializeOwned>(data: Value) -> Result<T, ClientError> {
        serde_json::from_value(data)
            .map_err(|e| ClientError::Transport(format!("unexpected response shape: {}", e)))
    }

    // ---- Resource verbs ----

    /// Fetch the full collection for a resource.
    pub async fn list<A: ResourceAdapter>(&self) -> Result<Vec<A::Record>, ClientError> {
        let data = self.request(Method::GET, &A::collection_path(), None).await?;
        Self::decode(data)
    }

    /// Fetch the collection, swallowing failures into an empty list.
    ///
    /// Callers cannot distinguish "empty" from "failed"; the error is only
    /// logged. Views that need the distinction use [`Self::list`].
    pub async fn list_or_empty<A: ResourceAdapter>(&self) -> Vec<A::Record> {
        match self.list::<A>().await {
            Ok(records) => records,
            Err(e) => {
                tracing::error!("Error fetching {}: {}", A::NAME, e);
                Vec::new()
            }
        }
    }

    /// Insert a record; the backend assigns the durable id and timestamps.
    pub async fn create<A: ResourceAdapter>(&self, record: &A::Record) -> Option<A::Record> {
        let body = match serde_json::to_value(record) {
            Ok(body) => body,
            Err(e) => {
                tracing::error!("Error encoding {}: {}", A::NAME, e);
                return None;
            }
        };

        match self
            .request(Method::POST, &A::collection_path(), Some(&body))
            .await
            .and_then(Self::decode)
        {
            Ok(created) => Some(created),
            Err(e) => {
                tracing::error!("Error creating {}: {}", A::NAME, e);
                None
            }
        }
    }

    /// Replace a record by its id.
    pub async fn update<A: ResourceAdapter>(&self, record: &A::Record) -> Option<A::Record> {
        let id = A::id(record).to_string();
        let body = match serde_json::to_value(record) {
            Ok(body) => body,
            Err(e) => {
                tracing::error!("Error encoding {}: {}", A::NAME, e);
                return None;
            }
        };

        match self
            .request(Method::PUT, &A::record_path(&id), Some(&body))
            .await
            .and_then(Self::decode)
        {
            Ok(updated) => Some(updated),
            Err(e) => {
                tracing::error!("Error updating {} {}: {}", A::NAME, id, e);
                None
            }
        }
    }

    /// Delete a record by id; reports whether the backend accepted it.
    pub async fn delete<A: ResourceAdapter>(&self, id: &str) -> bool {
        match self
            .request(Method::DELETE, &A::record_path(id), None)
            .await
        {
            Ok(_) => true,
            Err(e) => {
                tracing::error!("Error deleting {} {}: {}", A::NAME, id, e);
                false
            }
        }
    }

    // ---- Authentication ----

    /// Sign in and attach the issued session token to this client.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<LoginResponse, ClientError> {
        let body = serde_json::to_value(LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        })
        .map_err(|e| ClientError::Transport(e.to_string()))?;

        let data = self
            .request(Method::POST, "/api/auth/login", Some(&body))
            .await?;
        let response: LoginResponse = Self::decode(data)?;

        self.token = Some(response.token.clone());
        Ok(response)
    }

    /// Revoke the session and detach the token.
    pub async fn logout(&mut self) -> Result<(), ClientError> {
        self.request(Method::POST, "/api/auth/logout", None).await?;
        self.token = None;
        Ok(())
    }

    /// Fetch the dashboard stats aggregate.
    pub async fn site_stats(&self) -> Result<crate::models::SiteStats, ClientError> {
        let data = self.request(Method::GET, "/api/admin/stats", None).await?;
        Self::decode(data)
    }
}
