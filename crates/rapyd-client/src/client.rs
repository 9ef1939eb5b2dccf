//! # Rapyd Client
//!
//! Executes any `Endpoint` against the Rapyd API: computes the path, signs
//! the request, sends it through a `Transport`, and resolves the response
//! envelope into the operation's output type.

use crate::config::RapydConfig;
use crate::signature;
use async_trait::async_trait;
use chrono::Utc;
use rapyd_core::{Empty, Endpoint, Method, RapydError, RapydResult, Response};
use reqwest::Client;
use std::sync::Arc;
use tracing::{debug, error, instrument};
use uuid::Uuid;

/// A fully prepared outgoing request
#[derive(Debug, Clone)]
pub struct TransportRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// Raw response handed back by a transport
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// The network seam. Performs the actual call and nothing else; signing and
/// envelope handling stay in `RapydClient`.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: TransportRequest) -> RapydResult<TransportResponse>;
}

/// Default `reqwest`-based transport
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: TransportRequest) -> RapydResult<TransportResponse> {
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        };

        let mut builder = self.client.request(method, &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        if let Some(body) = request.body {
            builder = builder
                .header("Content-Type", "application/json")
                .body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| RapydError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| RapydError::Network(e.to_string()))?
            .to_vec();

        Ok(TransportResponse { status, body })
    }
}

/// Client for the Rapyd API.
///
/// Constructed once with a `RapydConfig` and shared by reference; the config
/// is read on every call and never mutated.
pub struct RapydClient {
    config: RapydConfig,
    transport: Arc<dyn Transport>,
}

impl RapydClient {
    /// Create a client using the default HTTP transport
    pub fn new(config: RapydConfig) -> Self {
        Self {
            config,
            transport: Arc::new(HttpTransport::new()),
        }
    }

    /// Create a client with a caller-supplied transport
    pub fn with_transport(config: RapydConfig, transport: Arc<dyn Transport>) -> Self {
        Self { config, transport }
    }

    /// Create from environment variables
    pub fn from_env() -> RapydResult<Self> {
        Ok(Self::new(RapydConfig::from_env()?))
    }

    /// Execute an operation: params shape the path, input becomes the body.
    ///
    /// Returns the envelope's `data` payload, or `RapydError::Api` when the
    /// status block reports failure. Rapyd sends error envelopes with non-2xx
    /// status codes too, so the body is parsed before the status is consulted.
    #[instrument(skip_all, fields(method = %E::METHOD))]
    pub async fn execute<E: Endpoint>(
        &self,
        params: &E::Params,
        input: &E::Input,
    ) -> RapydResult<E::Output> {
        let path = E::path(params)?;

        let body = match E::METHOD {
            Method::Get | Method::Delete => String::new(),
            Method::Post | Method::Put => {
                serde_json::to_string(input).map_err(|e| RapydError::Encode(e.to_string()))?
            }
        };

        let signed_path = format!("/v1/{path}");
        let timestamp = Utc::now().timestamp();
        let signature = signature::sign(
            &self.config.access_key,
            &self.config.secret_key,
            E::METHOD,
            &signed_path,
            timestamp,
            &body,
        );

        let headers = vec![
            ("access_key".to_string(), self.config.access_key.clone()),
            ("salt".to_string(), signature.salt),
            ("timestamp".to_string(), timestamp.to_string()),
            ("signature".to_string(), signature.signature),
            (
                "idempotency".to_string(),
                Uuid::new_v4().simple().to_string(),
            ),
        ];

        debug!(path = %signed_path, "sending rapyd request");

        let response = self
            .transport
            .send(TransportRequest {
                method: E::METHOD,
                url: format!("{}{}", self.config.api_base_url, signed_path),
                headers,
                body: (!body.is_empty()).then_some(body),
            })
            .await?;

        let envelope: Response<E::Output> =
            serde_json::from_slice(&response.body).map_err(|e| {
                if (200..300).contains(&response.status) {
                    RapydError::Decode(e.to_string())
                } else {
                    // non-2xx with no parseable envelope is a transport-level failure
                    RapydError::Network(format!(
                        "HTTP {}: {}",
                        response.status,
                        String::from_utf8_lossy(&response.body)
                    ))
                }
            })?;

        let result = envelope.into_result();
        if let Err(RapydError::Api { error_code, .. }) = &result {
            error!(path = %signed_path, %error_code, "rapyd api error");
        }
        result
    }

    /// Convenience wrapper for bodiless operations
    pub async fn get<E>(&self, params: &E::Params) -> RapydResult<E::Output>
    where
        E: Endpoint<Input = Empty>,
    {
        self.execute::<E>(params, &Empty).await
    }
}
