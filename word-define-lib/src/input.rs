//! Reading the input word stream.
//!
//! One word per line, read until end-of-stream. Empty lines are valid
//! words; no trimming or case normalization is applied beyond stripping
//! the line terminator.

use crate::error::LookupError;
use std::io::BufRead;

/// Read the ordered word list from a line-delimited stream.
///
/// The sequence is finite and preserves input order, duplicates and empty
/// lines included. A read failure mid-stream (as opposed to reaching EOF)
/// yields an `InputError`, which is fatal to the whole run.
pub fn read_words<R: BufRead>(reader: R) -> Result<Vec<String>, LookupError> {
    let mut words = Vec::new();
    for line in reader.lines() {
        let word = line.map_err(|e| {
            LookupError::input(format!("failed to read word stream: {}", e))
        })?;
        words.push(word);
    }
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_words_basic() {
        let words = read_words(Cursor::new("zebra\napple\nmango\n")).unwrap();
        assert_eq!(words, vec!["zebra", "apple", "mango"]);
    }

    #[test]
    fn test_read_words_preserves_empty_lines() {
        let words = read_words(Cursor::new("a\n\nb\n")).unwrap();
        assert_eq!(words, vec!["a", "", "b"]);
    }

    #[test]
    fn test_read_words_no_trailing_newline() {
        let words = read_words(Cursor::new("a\nb")).unwrap();
        assert_eq!(words, vec!["a", "b"]);
    }

    #[test]
    fn test_read_words_strips_crlf() {
        let words = read_words(Cursor::new("a\r\nb\r\n")).unwrap();
        assert_eq!(words, vec!["a", "b"]);
    }

    #[test]
    fn test_read_words_empty_stream() {
        let words = read_words(Cursor::new("")).unwrap();
        assert!(words.is_empty());
    }

    #[test]
    fn test_read_words_does_not_normalize() {
        let words = read_words(Cursor::new("  Padded  \nUPPER\n")).unwrap();
        assert_eq!(words, vec!["  Padded  ", "UPPER"]);
    }

    #[test]
    fn test_read_words_propagates_io_error() {
        struct FailingReader;
        impl std::io::Read for FailingReader {
            fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(
                    std::io::ErrorKind::Other,
                    "simulated failure",
                ))
            }
        }

        let reader = std::io::BufReader::new(FailingReader);
        let result = read_words(reader);
        assert!(matches!(result, Err(LookupError::InputError { .. })));
    }
}
