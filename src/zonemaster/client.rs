//! Client for the hosted Zonemaster data call.
//!
//! Every method performs exactly one GET request. Nothing is retried.

use log::{debug, warn};
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::{
    DECODE_ERROR_SNIPPET_LEN, METHOD_DETAILS, METHOD_TEST, PARAM_METHOD, PARAM_RESOURCE,
};
use crate::error_handling::ApiError;
use crate::zonemaster::models::{DetailsEnvelope, DetailsResult, ScanSummary, SummaryEnvelope};

/// Thin client over the three request shapes of the data call.
#[derive(Debug, Clone)]
pub struct ZonemasterClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl ZonemasterClient {
    /// Creates a client for the given endpoint.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidEndpoint` if `endpoint` is not an absolute URL.
    pub fn new(http: reqwest::Client, endpoint: &str) -> Result<Self, ApiError> {
        let endpoint = Url::parse(endpoint).map_err(|source| ApiError::InvalidEndpoint {
            endpoint: endpoint.to_string(),
            source,
        })?;
        Ok(Self { http, endpoint })
    }

    /// Looks up the known scans for a domain.
    pub async fn fetch_summary(&self, resource_id: &str) -> Result<ScanSummary, ApiError> {
        let url = self.request_url(resource_id, None);
        let envelope: SummaryEnvelope = self.get_json(url).await?;
        let summary = ScanSummary::from(envelope);
        debug!(
            "Summary for {}: {} scan(s), version={:?}, cached={:?}, status={:?}",
            resource_id,
            summary.handles.len(),
            summary.version,
            summary.cached,
            summary.status
        );
        Ok(summary)
    }

    /// Fetches the findings of a scan.
    ///
    /// `resource_id` is a scan identifier from [`ScanSummary`], not a domain.
    pub async fn fetch_details(&self, resource_id: &str) -> Result<DetailsResult, ApiError> {
        let url = self.request_url(resource_id, Some(METHOD_DETAILS));
        let envelope: DetailsEnvelope = self.get_json(url).await?;
        let details = DetailsResult::from(envelope);
        debug!("Scan {} returned {} record(s)", resource_id, details.len());
        Ok(details)
    }

    /// Asks the service to start a new scan for `domain`.
    ///
    /// This is fire-and-forget: once the request completes, the scan is
    /// considered started whatever the response. A non-success status is only
    /// logged. Only a transport failure is an error.
    pub async fn trigger_scan(&self, domain: &str) -> Result<(), ApiError> {
        let url = self.request_url(domain, Some(METHOD_TEST));
        debug!("GET {}", url);
        let response = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(|source| transport(&url, source))?;

        let status = response.status();
        if !status.is_success() {
            warn!(
                "Scan request for {} answered with HTTP {}; the scan may not have started",
                domain, status
            );
        }
        Ok(())
    }

    fn request_url(&self, resource_id: &str, method: Option<&str>) -> Url {
        let mut url = self.endpoint.clone();
        {
            let mut query = url.query_pairs_mut();
            query.append_pair(PARAM_RESOURCE, resource_id);
            if let Some(method) = method {
                query.append_pair(PARAM_METHOD, method);
            }
        }
        url
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ApiError> {
        debug!("GET {}", url);
        let response = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(|source| transport(&url, source))?;

        // The body is decoded whatever the status; error pages fail to decode.
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|source| transport(&url, source))?;

        serde_json::from_str(&body).map_err(|source| ApiError::Decode {
            url: url.to_string(),
            status: status.as_u16(),
            snippet: snippet(&body),
            source,
        })
    }
}

fn transport(url: &Url, source: reqwest::Error) -> ApiError {
    ApiError::Transport {
        url: url.to_string(),
        source,
    }
}

/// Leading part of a response body, cut on a char boundary.
fn snippet(body: &str) -> String {
    body.chars().take(DECODE_ERROR_SNIPPET_LEN).collect()
}
