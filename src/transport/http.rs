use crate::config::GatewayConfig;
use crate::gateway::{classify, OperationDescriptor};
use crate::{Error, Result};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use std::time::Instant;
use tracing::{debug, info};
use uuid::Uuid;

/// Issues a single network call with a deadline.
///
/// The deadline is enforced by the HTTP client: whichever of response and
/// timer resolves first wins, and the loser is cancelled rather than left
/// in flight. Exceeding the deadline surfaces as [`Error::Timeout`].
pub struct HttpExecutor {
    client: reqwest::Client,
    base_url: String,
}

impl HttpExecutor {
    pub fn new(config: &GatewayConfig) -> Result<Self> {
        // Fail at construction, not on the first request, if the base URL
        // is unusable.
        url::Url::parse(&config.base_url).map_err(|e| Error::Unknown {
            message: format!("invalid base URL `{}`: {e}", config.base_url),
        })?;

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .pool_max_idle_per_host(config.pool_max_idle_per_host)
            .pool_idle_timeout(Some(config.pool_idle_timeout))
            .build()
            .map_err(|e| Error::Unknown {
                message: format!("failed to build HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Execute one request and decode its body.
    ///
    /// A non-2xx status is always an error, never a value. A 2xx with an
    /// empty body (204-style) decodes to JSON `null`.
    pub async fn execute(
        &self,
        descriptor: &OperationDescriptor,
        token: Option<&str>,
    ) -> Result<serde_json::Value> {
        let url = format!("{}{}", self.base_url, descriptor.endpoint);
        let request_id = Uuid::new_v4();
        let start = Instant::now();

        let mut req = self
            .client
            .request(descriptor.method.as_reqwest(), url.as_str())
            .headers(self.build_headers(descriptor, token, &request_id)?);

        if let Some(body) = &descriptor.body {
            req = req.json(body);
        }

        let resp = req.send().await.map_err(classify::from_transport)?;
        let status = resp.status().as_u16();

        if !resp.status().is_success() {
            let body = resp.text().await.unwrap_or_default();
            let err = classify::from_http_status(status, &body);
            info!(
                http_status = status,
                endpoint = descriptor.endpoint.as_str(),
                request_id = %request_id,
                duration_ms = start.elapsed().as_millis() as u64,
                "propgate request failed"
            );
            return Err(err);
        }

        let text = resp.text().await.map_err(classify::from_transport)?;
        let payload = if text.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_str(&text).map_err(|e| Error::Decode {
                detail: format!("{e} (endpoint {})", descriptor.endpoint),
            })?
        };

        debug!(
            http_status = status,
            endpoint = descriptor.endpoint.as_str(),
            request_id = %request_id,
            duration_ms = start.elapsed().as_millis() as u64,
            "propgate request completed"
        );

        Ok(payload)
    }

    /// Fixed headers first, bearer token when present, caller-supplied
    /// headers last so they win on conflict.
    fn build_headers(
        &self,
        descriptor: &OperationDescriptor,
        token: Option<&str>,
        request_id: &Uuid,
    ) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Ok(id) = HeaderValue::try_from(request_id.to_string()) {
            headers.insert("x-request-id", id);
        }

        if let Some(token) = token {
            let bearer =
                HeaderValue::try_from(format!("Bearer {token}")).map_err(|_| Error::Unknown {
                    message: "session token contains invalid header characters".to_string(),
                })?;
            headers.insert(AUTHORIZATION, bearer);
        }

        for (name, value) in &descriptor.headers {
            let name = HeaderName::try_from(name.as_str()).map_err(|_| Error::Unknown {
                message: format!("invalid header name `{name}`"),
            })?;
            let value = HeaderValue::try_from(value.as_str()).map_err(|_| Error::Unknown {
                message: format!("invalid value for header `{name}`"),
            })?;
            headers.insert(name, value);
        }

        Ok(headers)
    }
}
