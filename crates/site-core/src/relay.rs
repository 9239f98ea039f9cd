//! Form relay client
//!
//! Delivers contact submissions to the third-party relay. A single attempt
//! is made; the caller decides what a failure means for the visitor.

use async_trait::async_trait;

use crate::{SiteError, SiteResult, SubmissionPayload};

/// Destination for contact form submissions
///
/// Futures are not `Send` because the browser fetch backend is not.
#[async_trait(?Send)]
pub trait FormRelay {
    /// Deliver one submission. `Ok` only for a 2xx response.
    async fn deliver(&self, payload: &SubmissionPayload) -> SiteResult<()>;
}

#[async_trait(?Send)]
impl<R: FormRelay + ?Sized> FormRelay for &R {
    async fn deliver(&self, payload: &SubmissionPayload) -> SiteResult<()> {
        (**self).deliver(payload).await
    }
}

/// Posts submissions as JSON over HTTP
#[derive(Debug, Clone)]
pub struct HttpFormRelay {
    endpoint: String,
    client: reqwest::Client,
}

impl HttpFormRelay {
    /// No timeout is configured; the request settles when the network stack
    /// gives up.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_client(endpoint, reqwest::Client::new())
    }

    pub fn with_client(endpoint: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            endpoint: endpoint.into(),
            client,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait(?Send)]
impl FormRelay for HttpFormRelay {
    async fn deliver(&self, payload: &SubmissionPayload) -> SiteResult<()> {
        tracing::debug!("Posting contact submission to {}", self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SiteError::RelayStatus(status.as_u16()));
        }

        tracing::debug!("Form relay accepted submission ({})", status);
        Ok(())
    }
}
