//! HTTP gateway to the reservations API.
//!
//! The dispatcher only sees the [`Gateway`] trait and the normalized
//! [`GatewayResult`]; [`HttpGateway`] is the production implementation.

mod error;
mod http;

use std::fmt;

use async_trait::async_trait;
use serde_json::{Map, Value};

pub use error::GatewayError;
pub use http::HttpGateway;

/// Methods the API is called with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a gateway call.
///
/// `Success` holds the top-level fields of the JSON response body (empty
/// when the body was missing or not an object). `Rejected` holds a
/// human-readable reason.
#[derive(Debug, Clone, PartialEq)]
pub enum GatewayResult {
    Success(Map<String, Value>),
    Rejected { reason: String },
}

impl GatewayResult {
    pub fn is_success(&self) -> bool {
        matches!(self, GatewayResult::Success(_))
    }

    /// A field of a successful response. `None` for rejections, missing
    /// fields and explicit `null`.
    pub fn field(&self, name: &str) -> Option<&Value> {
        match self {
            GatewayResult::Success(data) => data.get(name).filter(|value| !value.is_null()),
            GatewayResult::Rejected { .. } => None,
        }
    }
}

#[async_trait]
pub trait Gateway: Send + Sync {
    /// Perform a request. Never fails: transport and server errors come back
    /// as [`GatewayResult::Rejected`].
    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> GatewayResult;

    async fn get(&self, path: &str, token: Option<&str>) -> GatewayResult {
        self.request(Method::Get, path, None, token).await
    }

    async fn post(&self, path: &str, body: Value, token: Option<&str>) -> GatewayResult {
        self.request(Method::Post, path, Some(body), token).await
    }

    async fn put(&self, path: &str, body: Value, token: Option<&str>) -> GatewayResult {
        self.request(Method::Put, path, Some(body), token).await
    }

    async fn patch(&self, path: &str, body: Value, token: Option<&str>) -> GatewayResult {
        self.request(Method::Patch, path, Some(body), token).await
    }

    async fn delete(&self, path: &str, token: Option<&str>) -> GatewayResult {
        self.request(Method::Delete, path, None, token).await
    }
}
