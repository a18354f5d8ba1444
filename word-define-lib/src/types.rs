//! Core data types for dictionary lookups.
//!
//! This module defines the main data structures used throughout the library:
//! decoded dictionary responses, per-word lookup results, and the
//! configuration options that tune lookup behavior.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Delimiter used to join multiple definition texts for one word.
///
/// Joining is always done without a trailing delimiter, so a word with
/// definitions `a` and `b` renders as `a|||b`.
pub const DEFINITION_DELIMITER: &str = "|||";

/// One decoded entry from the dictionary service response.
///
/// The service returns a JSON array of these objects. All fields are
/// optional; only the definition text is consumed when building output,
/// the rest is carried for library callers that want it.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Definition {
    /// Part-of-speech tag (e.g., "noun", "verb")
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub part_of_speech: Option<String>,

    /// The definition text itself
    #[serde(skip_serializing_if = "Option::is_none")]
    pub definition: Option<String>,

    /// A usage example for this sense of the word
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
}

/// Result of a dictionary lookup for one word.
///
/// `definitions` is the empty string when the service returned no records
/// (or an unparsable body), otherwise the definition texts joined with
/// [`DEFINITION_DELIMITER`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WordResult {
    /// The word that was looked up, exactly as it appeared in the input
    pub word: String,

    /// Joined definition texts, or the empty string when none were found
    pub definitions: String,
}

/// Configuration options for dictionary lookup operations.
///
/// This struct allows fine-tuning of the lookup behavior. The CLI always
/// runs with the defaults; the knobs exist for library callers and tests.
#[derive(Debug, Clone)]
pub struct LookupConfig {
    /// Maximum number of concurrent in-flight requests.
    /// Default: 50, Range: 1-100
    ///
    /// The cap bounds request *issuance*: a slot is released as soon as
    /// response headers arrive, not when body processing finishes.
    pub concurrency: usize,

    /// Base URL of the dictionary endpoint. The word is appended as the
    /// final path segment: `<base_url>/<word>`.
    /// Default: the Owlbot dictionary API
    pub base_url: String,

    /// Optional per-request timeout.
    /// Default: None — a hung request blocks its task indefinitely, which
    /// is the faithful behavior of the original tool. Setting a timeout is
    /// an opt-in improvement and surfaces as a fatal network error.
    pub request_timeout: Option<Duration>,
}

impl Default for LookupConfig {
    /// Create the canonical configuration: concurrency 50, Owlbot endpoint,
    /// no request timeout.
    fn default() -> Self {
        Self {
            concurrency: 50,
            base_url: crate::client::DEFAULT_DICTIONARY_URL.to_string(),
            request_timeout: None,
        }
    }
}

impl LookupConfig {
    /// Set the concurrency ceiling.
    ///
    /// Automatically caps concurrency at 100 to prevent resource exhaustion,
    /// and raises 0 to 1 so the admission gate can always make progress.
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.clamp(1, 100);
        self
    }

    /// Point lookups at a different dictionary endpoint.
    ///
    /// A trailing slash is stripped so that URL templating stays
    /// `<base>/<word>` regardless of how the base was written.
    pub fn with_base_url<U: Into<String>>(mut self, base_url: U) -> Self {
        let base_url = base_url.into();
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Set a per-request timeout.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }
}
