//! Concurrent lookup dispatcher.
//!
//! This module provides the primary `WordLookup` struct that fans one task
//! out per input word, caps in-flight requests with a counting admission
//! gate, and collects every result before producing input-ordered output.

use crate::client::{join_definitions, DictionaryClient};
use crate::error::LookupError;
use crate::types::{LookupConfig, WordResult};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, warn};

/// Dictionary lookup coordinator.
///
/// One lookup task is spawned per input word. Each task acquires a slot of
/// the admission gate before issuing its request and releases the slot as
/// soon as response headers arrive, so the gate bounds concurrent request
/// issuance rather than total task lifetime.
///
/// # Example
///
/// ```rust,no_run
/// use word_define_lib::WordLookup;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let lookup = WordLookup::new();
///     let words = vec!["zebra".to_string(), "apple".to_string()];
///     for result in lookup.lookup_words(&words).await? {
///         println!("{}: {}", result.word, result.definitions);
///     }
///     Ok(())
/// }
/// ```
pub struct WordLookup {
    /// Configuration settings for this lookup instance
    config: LookupConfig,
    /// HTTP client shared by all lookup tasks
    client: DictionaryClient,
}

impl WordLookup {
    /// Create a new lookup coordinator with the default configuration:
    /// concurrency 50, Owlbot endpoint, no request timeout.
    pub fn new() -> Self {
        Self::with_config(LookupConfig::default())
    }

    /// Create a new lookup coordinator with custom configuration.
    ///
    /// # Example
    ///
    /// ```rust
    /// use word_define_lib::{LookupConfig, WordLookup};
    ///
    /// let config = LookupConfig::default().with_concurrency(10);
    /// let lookup = WordLookup::with_config(config);
    /// ```
    pub fn with_config(config: LookupConfig) -> Self {
        let client = DictionaryClient::with_config(&config.base_url, config.request_timeout)
            .expect("Failed to create dictionary client");

        Self { config, client }
    }

    /// Look up a single word.
    ///
    /// Performs one request-decode-join cycle without the admission gate
    /// (a single request cannot exceed the ceiling).
    ///
    /// # Errors
    ///
    /// Returns `LookupError::NetworkError` if the request or body read
    /// fails. A body that doesn't decode as definitions is not an error;
    /// it yields an empty definitions string.
    pub async fn lookup_word(&self, word: &str) -> Result<WordResult, LookupError> {
        let records = self.client.fetch_definitions(word).await?;
        Ok(WordResult {
            word: word.to_string(),
            definitions: join_definitions(&records),
        })
    }

    /// Look up every word of the input list concurrently.
    ///
    /// Spawns one task per input word (duplicates included), bounded by the
    /// configured concurrency ceiling, and waits for all of them before
    /// returning. The result vector holds one entry per *distinct* word, in
    /// first-occurrence input order. When the same word appears several
    /// times, its tasks race and the last completed lookup wins — with a
    /// deterministic service both produce the same value.
    ///
    /// # Errors
    ///
    /// A network-level failure in any task fails the whole run. All
    /// in-flight siblings are still drained first (none are orphaned), then
    /// the first observed error is returned and no results are produced.
    pub async fn lookup_words(&self, words: &[String]) -> Result<Vec<WordResult>, LookupError> {
        // Admission gate: counting semaphore sized to the ceiling
        let gate = Arc::new(Semaphore::new(self.config.concurrency));
        let mut tasks: JoinSet<Result<(String, String), LookupError>> = JoinSet::new();

        debug!(
            words = words.len(),
            concurrency = self.config.concurrency,
            "dispatching lookups"
        );

        for word in words {
            let word = word.clone();
            let client = self.client.clone();
            let gate = Arc::clone(&gate);

            tasks.spawn(async move {
                // Blocks while the ceiling is reached; backpressure, not rejection
                let permit = gate
                    .acquire_owned()
                    .await
                    .map_err(|_| LookupError::internal("admission gate closed unexpectedly"))?;

                let response = client.request(&word).await;

                // Release the slot once headers are in; the gate bounds
                // request issuance, not body processing
                drop(permit);

                let records = client.read_definitions(response?).await?;
                Ok((word, join_definitions(&records)))
            });
        }

        // Completion barrier: every task is awaited before any error is
        // surfaced, so a failure never orphans in-flight siblings.
        let mut mapping: HashMap<String, String> = HashMap::with_capacity(words.len());
        let mut first_error: Option<LookupError> = None;

        while let Some(joined) = tasks.join_next().await {
            let outcome = joined
                .map_err(|e| LookupError::internal(format!("lookup task panicked: {}", e)));

            match outcome.and_then(|r| r) {
                Ok((word, definitions)) => {
                    mapping.insert(word, definitions);
                }
                Err(e) => {
                    warn!(error = %e, "lookup failed, draining remaining tasks before abort");
                    if first_error.is_none() {
                        first_error = Some(e);
                    }
                }
            }
        }

        if let Some(e) = first_error {
            return Err(e);
        }

        Ok(collect_in_input_order(words, &mapping))
    }

    /// Get the current configuration for this lookup coordinator.
    pub fn config(&self) -> &LookupConfig {
        &self.config
    }
}

impl Default for WordLookup {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the output vector: one entry per distinct word, first-occurrence
/// input order, values pulled from the aggregated result mapping.
fn collect_in_input_order(
    words: &[String],
    mapping: &HashMap<String, String>,
) -> Vec<WordResult> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(words.len());
    let mut results = Vec::with_capacity(mapping.len());

    for word in words {
        if !seen.insert(word) {
            continue;
        }
        results.push(WordResult {
            word: word.clone(),
            definitions: mapping.get(word).cloned().unwrap_or_default(),
        });
    }

    results
}
