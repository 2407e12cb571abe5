//! Byte sources: where raw CSV bytes come from.
//!
//! The scanner pulls input one byte at a time through the [`ByteSource`]
//! trait, so the same state machine runs over in-memory slices, blocking
//! readers, or anything else that can hand out bytes in stream order. End
//! of stream is an ordinary value (`Ok(None)`), never an error.

#[cfg(feature = "std")]
mod reader;
mod slice;

#[cfg(feature = "std")]
pub use reader::ReaderSource;
pub use slice::SliceSource;

/// A sequential supplier of bytes.
///
/// Implementations yield bytes strictly in stream order. After `next_byte`
/// returns `Ok(None)` the stream is exhausted and further calls are expected
/// to keep returning `Ok(None)`.
pub trait ByteSource {
    /// Error produced when the source cannot deliver the next byte.
    ///
    /// Retries and timeouts are the source's own policy. The scanner treats
    /// every error as fatal for the current call and propagates it; a source
    /// that recovers can be read again afterwards.
    type Error: core::error::Error;

    /// Pulls the next byte, or `None` at end of stream.
    ///
    /// # Errors
    ///
    /// Returns the source's error when the byte cannot be produced. A failed
    /// call must not consume input.
    fn next_byte(&mut self) -> Result<Option<u8>, Self::Error>;
}
