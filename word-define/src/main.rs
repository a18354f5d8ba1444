//! Word Define CLI Application
//!
//! Reads words from stdin (one per line, until end-of-stream), looks each
//! one up against the dictionary service concurrently, and prints
//! `word: definitions` lines to stdout in input order once every lookup
//! has completed.
//!
//! Any input or network failure is fatal: an error message goes to stderr,
//! the process exits non-zero, and no output lines are printed.

use std::fmt::Write as _;
use std::io::{self, Write as _};
use std::process;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use word_define_lib::{read_words, LookupError, WordLookup, WordResult};

#[tokio::main]
async fn main() {
    // Logging goes to stderr so stdout stays reserved for results
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        process::exit(e.exit_code());
    }
}

async fn run() -> Result<(), LookupError> {
    let words = read_words(io::stdin().lock())?;
    debug!(words = words.len(), "read word list from stdin");

    let lookup = WordLookup::new();
    let results = lookup.lookup_words(&words).await?;

    print_results(&results)
}

/// Render all result lines into one buffer and write it in a single call —
/// nothing is flushed incrementally while lookups are still in flight.
fn print_results(results: &[WordResult]) -> Result<(), LookupError> {
    let mut output = String::with_capacity(results.len() * 32);
    for result in results {
        // Infallible for String, but the trait returns fmt::Result
        let _ = writeln!(output, "{}: {}", result.word, result.definitions);
    }

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    handle
        .write_all(output.as_bytes())
        .and_then(|_| handle.flush())
        .map_err(|e| LookupError::internal(format!("failed to write results: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(word: &str, definitions: &str) -> WordResult {
        WordResult {
            word: word.to_string(),
            definitions: definitions.to_string(),
        }
    }

    #[test]
    fn test_print_results_succeeds() {
        let results = vec![result("zebra", "a striped equine"), result("blank", "")];
        assert!(print_results(&results).is_ok());
    }

    #[test]
    fn test_result_line_format() {
        // The output contract is exactly "word: definitions" per line
        let r = result("cat", "a|||b");
        let line = format!("{}: {}", r.word, r.definitions);
        assert_eq!(line, "cat: a|||b");

        let empty = result("dog", "");
        let line = format!("{}: {}", empty.word, empty.definitions);
        assert_eq!(line, "dog: ");
    }
}
