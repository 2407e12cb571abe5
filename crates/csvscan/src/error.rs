use thiserror::Error;

/// Errors surfaced by [`read_field`](crate::FieldScanner::read_field).
///
/// Both variants report `offset`, the stream position where the problem was
/// detected, and `written`, the bytes this call had already placed in the
/// caller's buffer. Those bytes are valid field content; nothing delivered
/// is lost on error. The scanner keeps its state across a `Source` error,
/// so a caller whose source recovers can call
/// [`read_field`](crate::FieldScanner::read_field) again and the scan
/// continues where it failed.
#[derive(Error, Debug, PartialEq)]
pub enum ScanError<E> {
    /// The byte source failed to produce the next byte.
    #[error("byte source failed at offset {offset}")]
    Source {
        /// Stream offset of the byte that could not be read.
        offset: u64,
        /// Bytes already written to the caller's buffer by this call.
        written: usize,
        /// The source's own error.
        #[source]
        source: E,
    },
    /// The stream ended inside a quoted field, before its closing quote.
    #[error("unterminated quoted field: stream ended at offset {offset}")]
    UnterminatedQuote {
        /// Stream offset at which the stream ended.
        offset: u64,
        /// Bytes already written to the caller's buffer by this call.
        written: usize,
    },
}

impl<E> ScanError<E> {
    /// Stream offset where the error was detected.
    #[must_use]
    pub fn offset(&self) -> u64 {
        match self {
            ScanError::Source { offset, .. } | ScanError::UnterminatedQuote { offset, .. } => {
                *offset
            }
        }
    }

    /// Bytes the failing call had already written to the caller's buffer.
    #[must_use]
    pub fn written(&self) -> usize {
        match self {
            ScanError::Source { written, .. } | ScanError::UnterminatedQuote { written, .. } => {
                *written
            }
        }
    }
}
