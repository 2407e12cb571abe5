//! One-byte lookahead over a byte source.

use crate::source::{ByteSource, SliceSource};

/// A pull cursor with a single pushback slot.
///
/// The scanner regularly has to look one byte past what it keeps: after a
/// carriage return (is a line feed next?), after a quote inside a quoted
/// field (doubled escape or closing quote?). `ByteCursor` makes that
/// lookahead explicit: read the byte, and if it belongs to whatever comes
/// next, [`push_back`](ByteCursor::push_back) it so the following
/// [`next_byte`](ByteCursor::next_byte) returns it again.
///
/// The slot holds at most one byte. Pushing into an occupied slot means two
/// bytes of lookahead were taken without consuming either, which the design
/// never needs; it panics immediately instead of silently dropping input.
#[derive(Debug)]
pub struct ByteCursor<S> {
    source: S,
    pending: Option<u8>,
    consumed: u64,
}

impl<'a> ByteCursor<SliceSource<'a>> {
    /// Creates a cursor over an in-memory byte slice.
    #[must_use]
    pub fn from_slice(data: &'a [u8]) -> Self {
        ByteCursor::new(SliceSource::new(data))
    }
}

impl<S: ByteSource> ByteCursor<S> {
    /// Creates a cursor that owns `source` for its lifetime.
    pub fn new(source: S) -> Self {
        ByteCursor {
            source,
            pending: None,
            consumed: 0,
        }
    }

    /// Returns the next byte, or `None` at end of stream.
    ///
    /// A pushed-back byte is returned first, without touching the source.
    ///
    /// # Errors
    ///
    /// Propagates the source's error. The cursor stays usable and keeps its
    /// position; a later call continues where this one failed.
    pub fn next_byte(&mut self) -> Result<Option<u8>, S::Error> {
        if let Some(byte) = self.pending.take() {
            return Ok(Some(byte));
        }
        let byte = self.source.next_byte()?;
        if byte.is_some() {
            self.consumed += 1;
        }
        Ok(byte)
    }

    /// Puts the byte most recently read back into the cursor, so the next
    /// [`next_byte`](ByteCursor::next_byte) call returns it again.
    ///
    /// # Panics
    ///
    /// Panics if a byte is already pushed back.
    pub fn push_back(&mut self, byte: u8) {
        assert!(
            self.pending.is_none(),
            "pushback slot occupied: double lookahead"
        );
        self.pending = Some(byte);
    }

    /// Stream offset of the byte the next [`next_byte`](ByteCursor::next_byte)
    /// call will return.
    #[must_use]
    pub fn position(&self) -> u64 {
        self.consumed - u64::from(self.pending.is_some())
    }

    /// Shared access to the underlying source.
    pub fn get_ref(&self) -> &S {
        &self.source
    }

    /// Unwraps the cursor, releasing the source.
    ///
    /// A pushed-back byte, if any, is discarded.
    pub fn into_inner(self) -> S {
        self.source
    }
}
