//! HTTP implementation of the review item gateway.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::ACCEPT;
use url::Url;

use super::ReviewItemGateway;
use crate::review::TransportError;

const EMAILS_PATH: &str = "emails";
const ERROR_BODY_PREVIEW_CHARS: usize = 160;

/// Builds `<base>/emails` from the configured backend base URL.
///
/// # Errors
///
/// Returns [`TransportError::Configuration`] when the base URL is missing,
/// blank, unparsable, not `http`/`https`, or carries a query or fragment.
pub fn emails_endpoint(base_url: Option<&str>) -> Result<Url, TransportError> {
    let base = base_url
        .map(str::trim)
        .filter(|base| !base.is_empty())
        .ok_or_else(|| TransportError::Configuration {
            message: "backend URL is not set (use --backend-url or DRAFTDESK_BACKEND_URL)"
                .to_owned(),
        })?;
    let refuse = |reason: String| TransportError::Configuration {
        message: format!("backend URL `{base}` {reason}"),
    };

    let mut endpoint = Url::parse(base).map_err(|error| refuse(format!("is invalid: {error}")))?;
    if !matches!(endpoint.scheme(), "http" | "https") {
        return Err(refuse("must use http or https".to_owned()));
    }
    if endpoint.query().is_some() || endpoint.fragment().is_some() {
        return Err(refuse("must not carry a query or fragment".to_owned()));
    }

    endpoint
        .path_segments_mut()
        .map_err(|()| refuse("cannot be used as a base".to_owned()))?
        .pop_if_empty()
        .push(EMAILS_PATH);

    Ok(endpoint)
}

/// Loads review items with a GET to the backend's `/emails` route.
///
/// An unusable endpoint does not prevent construction; it is reported when a
/// load is attempted so the session can show it as a failed load.
#[derive(Debug, Clone)]
pub struct HttpReviewItemGateway {
    client: Client,
    endpoint: Result<Url, TransportError>,
}

impl HttpReviewItemGateway {
    /// Creates a gateway for the given base URL and request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Configuration`] when the HTTP client cannot
    /// be built.
    pub fn new(base_url: Option<&str>, timeout: Duration) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|error| TransportError::Configuration {
                message: format!("failed to configure HTTP client: {error}"),
            })?;

        Ok(Self {
            client,
            endpoint: emails_endpoint(base_url),
        })
    }

    /// Returns the resolved endpoint, if the base URL was usable.
    #[must_use]
    pub fn endpoint(&self) -> Option<&Url> {
        self.endpoint.as_ref().ok()
    }
}

#[async_trait]
impl ReviewItemGateway for HttpReviewItemGateway {
    async fn fetch_review_items(&self) -> Result<String, TransportError> {
        let endpoint = self.endpoint.clone()?;
        tracing::debug!(%endpoint, "requesting review items");

        let response = self
            .client
            .get(endpoint)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_send_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.map_or_else(
                |_| "(failed to read error response body)".to_owned(),
                |content| preview(&content, ERROR_BODY_PREVIEW_CHARS),
            );
            return Err(TransportError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response.text().await.map_err(|error| {
            if error.is_timeout() {
                TransportError::Timeout {
                    message: error.to_string(),
                }
            } else {
                TransportError::Body {
                    message: error.to_string(),
                }
            }
        })
    }
}

fn map_send_error(error: reqwest::Error) -> TransportError {
    if error.is_timeout() {
        TransportError::Timeout {
            message: error.to_string(),
        }
    } else {
        TransportError::Unreachable {
            message: error.to_string(),
        }
    }
}

fn preview(message: &str, max_chars: usize) -> String {
    let mut chars = message.trim().chars();
    let mut output: String = chars.by_ref().take(max_chars).collect();
    if chars.next().is_some() {
        output.push_str("...");
    }
    output
}

#[cfg(test)]
#[path = "http_tests.rs"]
mod tests;
