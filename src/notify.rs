//! Ingestion summary notification.
//!
//! Posts `{"inserted": N}` to a configured endpoint. TLS certificates are
//! always verified and every request carries the client's timeout. Any
//! non-2xx answer is returned as an error rather than swallowed.

use log::debug;
use reqwest::StatusCode;
use url::Url;

use crate::error_handling::NotifyError;
use crate::models::Summary;

/// Sends ingestion summaries to one endpoint.
#[derive(Debug, Clone)]
pub struct Notifier {
    client: reqwest::Client,
    url: Url,
}

impl Notifier {
    /// Creates a notifier for `url`.
    ///
    /// # Errors
    ///
    /// Returns [`NotifyError::InvalidUrl`] unless `url` is an absolute
    /// `http` or `https` URL.
    pub fn new(client: reqwest::Client, url: &str) -> Result<Self, NotifyError> {
        let parsed = Url::parse(url).map_err(|e| NotifyError::InvalidUrl {
            url: url.to_string(),
            reason: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(NotifyError::InvalidUrl {
                url: url.to_string(),
                reason: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }
        Ok(Notifier {
            client,
            url: parsed,
        })
    }

    /// Endpoint this notifier posts to.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Posts `summary` as JSON and returns the response status.
    ///
    /// # Errors
    ///
    /// - [`NotifyError::Status`] for any non-2xx response
    /// - [`NotifyError::Transport`] if no response arrives (connect, TLS, timeout)
    pub async fn send(&self, summary: &Summary) -> Result<StatusCode, NotifyError> {
        debug!("POST {} {:?}", self.url, summary);
        let response = self
            .client
            .post(self.url.clone())
            .json(summary)
            .send()
            .await
            .map_err(|source| NotifyError::Transport {
                url: self.url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(NotifyError::Status {
                url: self.url.to_string(),
                status,
            });
        }
        Ok(status)
    }
}
