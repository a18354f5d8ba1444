//! HTTP client for the external dictionary service.
//!
//! This module handles the request-response exchange with the dictionary
//! endpoint: URL templating, request issuance, body reading, and lenient
//! response decoding. The service is an opaque collaborator keyed by word;
//! it returns a JSON array of definition records (possibly empty).

use crate::error::LookupError;
use crate::types::{Definition, DEFINITION_DELIMITER};
use std::time::Duration;
use tracing::debug;

/// Default dictionary endpoint. The word is appended as the final path
/// segment: `<base>/<word>`.
pub const DEFAULT_DICTIONARY_URL: &str = "https://owlbot.info/api/v2/dictionary";

/// Client for querying the dictionary service.
///
/// Request issuance and body decoding are split into separate steps so the
/// dispatcher can release its admission-gate slot as soon as response
/// headers arrive, before the body is read.
#[derive(Debug, Clone)]
pub struct DictionaryClient {
    /// HTTP client for dictionary requests
    http_client: reqwest::Client,
    /// Base URL the word is appended to
    base_url: String,
}

impl DictionaryClient {
    /// Create a new client against the default endpoint, with no request
    /// timeout (a hung request blocks its lookup indefinitely).
    pub fn new() -> Result<Self, LookupError> {
        Self::with_config(DEFAULT_DICTIONARY_URL, None)
    }

    /// Create a new client with a custom endpoint and optional timeout.
    pub fn with_config<U: Into<String>>(
        base_url: U,
        timeout: Option<Duration>,
    ) -> Result<Self, LookupError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder.build().map_err(|e| {
            LookupError::network_with_source("Failed to create HTTP client", e.to_string())
        })?;

        Ok(Self {
            http_client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// The base URL this client queries.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue the GET request for one word and return the response once its
    /// headers are available.
    ///
    /// The word is embedded in the path as-is, preserving the one fixed
    /// endpoint template of the original tool. Transport failures are fatal
    /// `NetworkError`s; response status is deliberately not inspected — a
    /// non-200 body simply fails decoding and yields zero definitions.
    pub async fn request(&self, word: &str) -> Result<reqwest::Response, LookupError> {
        let url = format!("{}/{}", self.base_url, word);
        debug!(word, %url, "issuing dictionary request");

        self.http_client.get(&url).send().await.map_err(|e| {
            LookupError::network_with_source(
                format!("Dictionary request for '{}' failed", word),
                e.to_string(),
            )
        })
    }

    /// Read the full response body and decode it as definition records.
    ///
    /// A failed body read is a fatal `NetworkError`. A body that is not a
    /// JSON array of records (malformed, empty, an error payload) is
    /// recovered locally: it yields zero definitions.
    pub async fn read_definitions(
        &self,
        response: reqwest::Response,
    ) -> Result<Vec<Definition>, LookupError> {
        let body = response.bytes().await.map_err(|e| {
            LookupError::network_with_source("Failed to read response body", e.to_string())
        })?;

        Ok(parse_records(&body))
    }

    /// Convenience: request + decode in one call, for single-word lookups
    /// that don't participate in the admission gate.
    pub async fn fetch_definitions(&self, word: &str) -> Result<Vec<Definition>, LookupError> {
        let response = self.request(word).await?;
        self.read_definitions(response).await
    }
}

/// Decode a response body into definition records.
///
/// Decode errors are treated as "no definitions found" — the word will map
/// to the empty string rather than failing the run.
pub(crate) fn parse_records(body: &[u8]) -> Vec<Definition> {
    match serde_json::from_slice::<Vec<Definition>>(body) {
        Ok(records) => records,
        Err(e) => {
            debug!(error = %e, "response body did not decode as definitions, treating as empty");
            Vec::new()
        }
    }
}

/// Join definition texts into the output string for one word.
///
/// Zero records yield the empty string. Records missing their definition
/// text contribute an empty segment. No trailing delimiter is appended.
pub fn join_definitions(records: &[Definition]) -> String {
    records
        .iter()
        .map(|record| record.definition.as_deref().unwrap_or(""))
        .collect::<Vec<_>>()
        .join(DEFINITION_DELIMITER)
}
