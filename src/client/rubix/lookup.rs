//! Identifier lookup for RubixClient.

use reqwest::StatusCode;
use serde_json::Value;

use super::RubixClient;
use crate::domain::{FetchError, TokenInfo, normalize};

impl RubixClient {
    /// Look up an identifier and normalize the answer.
    ///
    /// A response the normalizer cannot place becomes `TokenInfo::Unknown`;
    /// only transport, status and JSON failures are errors.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the API answers with a
    /// non-success status, or the body is not JSON.
    pub async fn lookup(&self, id: &str) -> Result<TokenInfo, FetchError> {
        let raw = self.fetch_raw(id).await?;
        Ok(normalize(&raw, id))
    }

    /// Fetch the raw lookup response for an identifier.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` on HTTP 404, `Status` on any other non-success
    /// status, `Parse` if the body is not JSON and `Network` on transport
    /// failures.
    pub async fn fetch_raw(&self, id: &str) -> Result<Value, FetchError> {
        let url = self.search_url(id);
        let response = self
            .build_request(&url)
            .send()
            .await
            .inspect_err(|e| tracing::debug!("Lookup of '{id}' failed: {e}"))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(FetchError::not_found("identifier", id));
        }
        if !status.is_success() {
            tracing::debug!("Lookup of '{id}' returned status {status}");
            return Err(FetchError::status(status.as_u16(), id));
        }

        let body = response.text().await?;
        parse_lookup_body(&body)
    }
}

pub(crate) fn parse_lookup_body(body: &str) -> Result<Value, FetchError> {
    serde_json::from_str(body)
        .map_err(|e| FetchError::parse(format!("lookup response is not valid JSON: {e}")))
}
