//! # Word Define Library
//!
//! A concurrent library for looking up word definitions from a dictionary
//! web service.
//!
//! The library fans one lookup task out per input word, caps the number of
//! concurrent in-flight requests with a counting admission gate, and waits
//! for every lookup to finish before producing results in input order.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use word_define_lib::WordLookup;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let lookup = WordLookup::new();
//!     let result = lookup.lookup_word("zebra").await?;
//!
//!     println!("{}: {}", result.word, result.definitions);
//!     Ok(())
//! }
//! ```
//!
//! ## Behavior notes
//!
//! - A word with no definitions (or an unparsable service response) maps to
//!   the empty string; it is not an error.
//! - Network failures are fatal to the whole run: in-flight lookups are
//!   drained, then the error is returned with no partial results.
//! - Output order is input order, deduplicated to first occurrences.

// Re-export main public API types and functions
// This makes them available as word_define_lib::TypeName
pub use client::{join_definitions, DictionaryClient, DEFAULT_DICTIONARY_URL};
pub use error::LookupError;
pub use input::read_words;
pub use lookup::WordLookup;
pub use types::{Definition, LookupConfig, WordResult, DEFINITION_DELIMITER};

// Internal modules - these are not part of the public API
mod client;
mod error;
mod input;
mod lookup;
mod types;

// Type alias for convenience
pub type Result<T> = std::result::Result<T, LookupError>;

// Library version metadata
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
