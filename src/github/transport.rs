use std::time::Duration;

use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use reqwest::{Client, Url};
use serde_json::{Value, json};
use tracing::debug;

use super::error::ApiError;
use super::queries::Document;

/// Sends one GraphQL document and returns the response's `data` member.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, document: &Document, variables: &Value) -> Result<Value, ApiError>;
}

/// Transport over HTTPS with a bearer token fixed at construction.
pub struct HttpTransport {
    client: Client,
    api_url: Url,
    token: String,
}

impl HttpTransport {
    pub fn new(api_url: &str, token: &str, timeout: Duration) -> Result<Self> {
        let api_url = validate_api_url(api_url)?;

        let client = Client::builder()
            .user_agent(concat!("repostar/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            api_url,
            token: token.to_string(),
        })
    }
}

/// Require HTTPS, except plain HTTP to a loopback host.
pub fn validate_api_url(api_url: &str) -> Result<Url> {
    let url = Url::parse(api_url).with_context(|| format!("Invalid API URL: {api_url}"))?;

    match url.scheme() {
        "https" => Ok(url),
        "http" if is_loopback(&url) => Ok(url),
        _ => bail!("GitHub API URL must use HTTPS: {}", api_url),
    }
}

fn is_loopback(url: &Url) -> bool {
    matches!(
        url.host_str(),
        Some("localhost") | Some("127.0.0.1") | Some("[::1]")
    )
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, document: &Document, variables: &Value) -> Result<Value, ApiError> {
        let body = json!({
            "query": document.source,
            "operationName": document.operation,
            "variables": variables,
        });

        debug!(operation = document.operation, "Sending GraphQL request");

        let resp = self
            .client
            .post(self.api_url.clone())
            .bearer_auth(&self.token)
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(ApiError::Network(format!(
                "GitHub API returned {}: {}",
                status,
                text.trim()
            )));
        }

        let mut payload: Value = resp.json().await?;

        if let Some(errors) = payload.get("errors").and_then(|e| e.as_array())
            && !errors.is_empty()
        {
            let error_msg = errors
                .first()
                .and_then(|e| e.get("message"))
                .and_then(|m| m.as_str())
                .unwrap_or("Unknown GraphQL error");
            debug!(operation = document.operation, error = error_msg, "GraphQL error");
            return Err(ApiError::GraphQl(error_msg.to_string()));
        }

        Ok(payload
            .get_mut("data")
            .map(Value::take)
            .unwrap_or(Value::Null))
    }
}
