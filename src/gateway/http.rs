use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};
use serde_json::{Map, Value};

use crate::config::ApiConfig;

use super::error::{GatewayError, SERVER_ERROR_MESSAGE};
use super::{Gateway, GatewayResult, Method};

/// [`Gateway`] backed by `reqwest`.
pub struct HttpGateway {
    client: Client,
    base_url: String,
}

impl HttpGateway {
    pub fn new(config: &ApiConfig) -> Result<Self, GatewayError> {
        let client = Client::builder()
            .connect_timeout(config.connect_timeout())
            .timeout(config.timeout())
            .build()
            .map_err(GatewayError::Client)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> Result<Map<String, Value>, GatewayError> {
        let url = format!("{}{}", self.base_url, path);
        let mut builder = self
            .client
            .request(to_reqwest(method), &url)
            .header(CONTENT_TYPE, "application/json");

        if let Some(token) = token {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = body {
            builder = builder.json(&body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| GatewayError::from_reqwest(&url, e))?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| GatewayError::from_reqwest(&url, e))?;

        if !status.is_success() {
            return Err(GatewayError::Server {
                status: status.as_u16(),
                message: rejection_message(status, &bytes),
            });
        }

        Ok(success_fields(&bytes))
    }
}

#[async_trait]
impl Gateway for HttpGateway {
    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> GatewayResult {
        match self.send(method, path, body, token).await {
            Ok(data) => {
                tracing::debug!(%method, path, "gateway request succeeded");
                GatewayResult::Success(data)
            }
            Err(err) => {
                tracing::debug!(%method, path, error = %err, "gateway request rejected");
                GatewayResult::Rejected {
                    reason: err.reason(),
                }
            }
        }
    }
}

fn to_reqwest(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Put => reqwest::Method::PUT,
        Method::Patch => reqwest::Method::PATCH,
        Method::Delete => reqwest::Method::DELETE,
    }
}

/// Message for a non-success response: the body's `message` field, else the
/// HTTP status, else a generic server error when the body is not JSON.
fn rejection_message(status: StatusCode, body: &[u8]) -> String {
    let Ok(parsed) = serde_json::from_slice::<Value>(body) else {
        return SERVER_ERROR_MESSAGE.to_string();
    };

    match parsed.get("message") {
        Some(Value::String(message)) => message.clone(),
        Some(Value::Null) | None => format!("HTTP {}", status.as_u16()),
        Some(other) => other.to_string(),
    }
}

/// Top-level fields of a success body; anything that is not a JSON object
/// yields no fields.
fn success_fields(body: &[u8]) -> Map<String, Value> {
    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(fields)) => fields,
        _ => Map::new(),
    }
}
