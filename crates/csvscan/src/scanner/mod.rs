//! Field scanner: the CSV state machine.
//!
//! What it does
//! - Reads one field per call into a caller-supplied buffer via
//!   [`FieldScanner::read_field`], pulling bytes through a [`ByteCursor`]
//!   and classifying what ended the field: delimiter, record end, or end of
//!   stream.
//! - Handles quoted fields (`"..."` with `""` escaping a literal quote) and
//!   the four record-end byte shapes: CR, LF, CR LF, LF CR. Only the two
//!   mixed pairs coalesce; CR CR and LF LF are two record ends.
//! - Never over-reads: exactly one byte of lookahead is ever taken, and it
//!   lives in the cursor's pushback slot, so terminator classification works
//!   with no buffering beyond the caller's own.
//!
//! Resumption
//! - A field longer than the buffer is delivered across calls. The machine
//!   parks its state in `state` when the buffer fills, reports
//!   [`FieldOutcome::Truncated`], and the next call picks the same field
//!   back up. The final chunk carries the true terminator, identical to what
//!   a single large-buffer read would have reported.
//! - Source errors leave `state` untouched, so a recovered source continues
//!   the same field with nothing skipped or duplicated.
//!
//! Invariants
//! - At most one byte is pushed back at any time.
//! - `state` is `Start` exactly when the cursor sits on a field boundary.
//! - Bytes are consumed exactly once; truncation pushes the unwritten byte
//!   back before returning.


use crate::{
    cursor::ByteCursor,
    error::ScanError,
    field::{FieldOutcome, FieldRead, Terminator},
    options::ScanOptions,
    source::ByteSource,
};

const QUOTE: u8 = b'"';
const CR: u8 = b'\r';
const LF: u8 = b'\n';

/// Where the machine stands between byte pulls.
///
/// Everything except `Start` marks a suspended position inside a field or
/// terminator, kept across `Truncated` returns and source errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// At a field boundary; the next byte starts a new field.
    Start,
    /// Inside unquoted content (also the continuation after a closing quote).
    Unquoted,
    /// Inside a quoted body.
    Quoted,
    /// Consumed a quote inside a quoted body; the next byte decides whether
    /// it was an escape or the closing quote.
    QuoteSeen,
    /// Consumed a doubled quote pair whose literal `"` has not been written.
    QuoteOwed,
    /// Consumed the byte recorded here as a record end; its CR/LF partner
    /// has not been checked for yet.
    RecordPair(u8),
}

/// Writes field content into the caller's buffer, tracking how much fits.
struct Sink<'b> {
    buf: &'b mut [u8],
    written: usize,
}

impl<'b> Sink<'b> {
    fn new(buf: &'b mut [u8]) -> Self {
        Sink { buf, written: 0 }
    }

    /// Appends `byte`; false when the buffer is full.
    fn push(&mut self, byte: u8) -> bool {
        if self.written < self.buf.len() {
            self.buf[self.written] = byte;
            self.written += 1;
            true
        } else {
            false
        }
    }
}

/// Reads CSV fields one at a time from a [`ByteCursor`].
///
/// The scanner borrows the cursor exclusively; drop the scanner to get the
/// cursor back. Each [`read_field`](FieldScanner::read_field) call fills as
/// much of one field as fits in the caller's buffer and reports what ended
/// it.
///
/// # Examples
///
/// ```rust
/// use csvscan::{ByteCursor, FieldOutcome, FieldScanner, Terminator};
///
/// let mut cursor = ByteCursor::from_slice(b"ab,cd\nef");
/// let mut scanner = FieldScanner::new(&mut cursor);
/// let mut buf = [0u8; 16];
///
/// let read = scanner.read_field(&mut buf).unwrap();
/// assert_eq!(&buf[..read.written], b"ab");
/// assert_eq!(read.outcome, FieldOutcome::Complete(Terminator::Delimiter));
///
/// let read = scanner.read_field(&mut buf).unwrap();
/// assert_eq!(&buf[..read.written], b"cd");
/// assert_eq!(read.outcome, FieldOutcome::Complete(Terminator::RecordEnd));
///
/// let read = scanner.read_field(&mut buf).unwrap();
/// assert_eq!(&buf[..read.written], b"ef");
/// assert_eq!(read.outcome, FieldOutcome::Complete(Terminator::StreamEnd));
/// ```
#[derive(Debug)]
pub struct FieldScanner<'c, S> {
    cursor: &'c mut ByteCursor<S>,
    delimiter: u8,
    state: State,
    ended_record: bool,
}

impl<'c, S: ByteSource> FieldScanner<'c, S> {
    /// Creates a scanner with default options (comma delimiter).
    pub fn new(cursor: &'c mut ByteCursor<S>) -> Self {
        Self::with_options(cursor, ScanOptions::default())
    }

    /// Creates a scanner with the given options.
    pub fn with_options(cursor: &'c mut ByteCursor<S>, options: ScanOptions) -> Self {
        FieldScanner {
            cursor,
            delimiter: options.delimiter,
            state: State::Start,
            // A fresh stream is logically at the start of a record.
            ended_record: true,
        }
    }

    /// The delimiter byte this scanner splits fields on.
    #[must_use]
    pub fn delimiter(&self) -> u8 {
        self.delimiter
    }

    /// Whether the scanner currently sits at a record boundary.
    ///
    /// True initially and after a field that completed on
    /// [`RecordEnd`](Terminator::RecordEnd) or
    /// [`StreamEnd`](Terminator::StreamEnd); false after a field that
    /// completed on [`Delimiter`](Terminator::Delimiter) or a read that
    /// returned [`Truncated`](FieldOutcome::Truncated).
    #[must_use]
    pub fn ended_record(&self) -> bool {
        self.ended_record
    }

    /// Stream offset of the next byte the scanner will consume.
    #[must_use]
    pub fn position(&self) -> u64 {
        self.cursor.position()
    }

    /// Reads the next field into `buf`.
    ///
    /// Returns how many bytes were written and whether the field completed.
    /// On [`Truncated`](FieldOutcome::Truncated) the field continues: call
    /// again (after draining `buf`) for the next chunk. `buf` past
    /// `written` is left untouched. A zero-length `buf` makes no content
    /// progress, though empty fields and terminators still complete.
    ///
    /// # Errors
    ///
    /// [`ScanError::Source`] when the byte source fails, and
    /// [`ScanError::UnterminatedQuote`] when the stream ends inside a quoted
    /// field. Either way `buf[..written]` (per the error's `written`) holds
    /// valid content already delivered by this call.
    pub fn read_field(&mut self, buf: &mut [u8]) -> Result<FieldRead, ScanError<S::Error>> {
        let mut sink = Sink::new(buf);
        loop {
            match self.state {
                State::Start => {
                    let Some(byte) = self.read_byte(sink.written)? else {
                        return Ok(self.complete(sink.written, Terminator::StreamEnd));
                    };
                    if byte == self.delimiter {
                        return Ok(self.complete(sink.written, Terminator::Delimiter));
                    }
                    match byte {
                        CR | LF => self.state = State::RecordPair(byte),
                        QUOTE => self.state = State::Quoted,
                        _ => {
                            self.state = State::Unquoted;
                            if !sink.push(byte) {
                                self.cursor.push_back(byte);
                                return Ok(self.suspend(sink.written));
                            }
                        }
                    }
                }
                State::Unquoted => {
                    let Some(byte) = self.read_byte(sink.written)? else {
                        return Ok(self.complete(sink.written, Terminator::StreamEnd));
                    };
                    if byte == self.delimiter {
                        return Ok(self.complete(sink.written, Terminator::Delimiter));
                    }
                    match byte {
                        CR | LF => self.state = State::RecordPair(byte),
                        _ => {
                            if !sink.push(byte) {
                                self.cursor.push_back(byte);
                                return Ok(self.suspend(sink.written));
                            }
                        }
                    }
                }
                State::Quoted => {
                    let Some(byte) = self.read_byte(sink.written)? else {
                        return Err(self.unterminated(sink.written));
                    };
                    if byte == QUOTE {
                        self.state = State::QuoteSeen;
                    } else if !sink.push(byte) {
                        self.cursor.push_back(byte);
                        return Ok(self.suspend(sink.written));
                    }
                }
                State::QuoteSeen => match self.read_byte(sink.written)? {
                    None => return Ok(self.complete(sink.written, Terminator::StreamEnd)),
                    Some(QUOTE) => self.state = State::QuoteOwed,
                    Some(byte) => {
                        // Closing quote. Whatever follows, terminator or
                        // stray content, is scanned as unquoted.
                        self.cursor.push_back(byte);
                        self.state = State::Unquoted;
                    }
                },
                State::QuoteOwed => {
                    if sink.push(QUOTE) {
                        self.state = State::Quoted;
                    } else {
                        return Ok(self.suspend(sink.written));
                    }
                }
                State::RecordPair(first) => {
                    match self.read_byte(sink.written)? {
                        None => {}
                        Some(second) if second != first && (second == CR || second == LF) => {}
                        Some(second) => self.cursor.push_back(second),
                    }
                    return Ok(self.complete(sink.written, Terminator::RecordEnd));
                }
            }
        }
    }

    /// Pulls one byte, wrapping source failures with position context.
    fn read_byte(&mut self, written: usize) -> Result<Option<u8>, ScanError<S::Error>> {
        self.cursor.next_byte().map_err(|source| ScanError::Source {
            offset: self.cursor.position(),
            written,
            source,
        })
    }

    fn complete(&mut self, written: usize, terminator: Terminator) -> FieldRead {
        self.state = State::Start;
        self.ended_record = terminator.is_record_boundary();
        FieldRead {
            written,
            outcome: FieldOutcome::Complete(terminator),
        }
    }

    /// Stops mid-field with the buffer full; `state` keeps the spot.
    fn suspend(&mut self, written: usize) -> FieldRead {
        self.ended_record = false;
        FieldRead {
            written,
            outcome: FieldOutcome::Truncated,
        }
    }

    fn unterminated(&mut self, written: usize) -> ScanError<S::Error> {
        self.state = State::Start;
        self.ended_record = true;
        ScanError::UnterminatedQuote {
            offset: self.cursor.position(),
            written,
        }
    }
}
