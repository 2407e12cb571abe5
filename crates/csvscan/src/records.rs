//! Owned records: whole rows assembled from the field scanner.
//!
//! The scanner deals in caller-managed buffers and never allocates; this
//! layer trades that for convenience. [`RecordReader`] drains each field
//! through a fixed chunk buffer, however long the field is, and groups
//! fields into [`Record`]s at record boundaries.

use alloc::{boxed::Box, vec, vec::Vec};
use core::{fmt, mem, ops::Index, slice};

use bstr::BStr;

use crate::{
    error::ScanError,
    field::Terminator,
    scanner::FieldScanner,
    source::ByteSource,
};

/// One CSV record: an owned list of byte fields.
///
/// Fields are raw bytes; interpreting them as text (and in which encoding)
/// is the caller's business. `Debug` prints fields as byte strings so
/// non-UTF-8 content stays readable.
#[derive(Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Record {
    fields: Vec<Vec<u8>>,
}

impl Record {
    /// Creates an empty record.
    #[must_use]
    pub fn new() -> Self {
        Record::default()
    }

    /// Number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the record has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// The field at `index`, or `None` past the end.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&[u8]> {
        self.fields.get(index).map(Vec::as_slice)
    }

    /// Appends a field.
    pub fn push(&mut self, field: Vec<u8>) {
        self.fields.push(field);
    }

    /// Removes all fields.
    pub fn clear(&mut self) {
        self.fields.clear();
    }

    /// Iterates over the fields in order.
    pub fn iter(&self) -> FieldIter<'_> {
        FieldIter(self.fields.iter())
    }
}

impl fmt::Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.fields.iter().map(|field| BStr::new(field)))
            .finish()
    }
}

impl From<Vec<Vec<u8>>> for Record {
    fn from(fields: Vec<Vec<u8>>) -> Self {
        Record { fields }
    }
}

impl Index<usize> for Record {
    type Output = [u8];

    fn index(&self, index: usize) -> &[u8] {
        &self.fields[index]
    }
}

impl<T: AsRef<[u8]>> PartialEq<[T]> for Record {
    fn eq(&self, other: &[T]) -> bool {
        self.fields.len() == other.len()
            && self
                .fields
                .iter()
                .zip(other)
                .all(|(field, expected)| field.as_slice() == expected.as_ref())
    }
}

impl<T: AsRef<[u8]>, const N: usize> PartialEq<[T; N]> for Record {
    fn eq(&self, other: &[T; N]) -> bool {
        *self == other[..]
    }
}

impl<T: AsRef<[u8]>> PartialEq<Vec<T>> for Record {
    fn eq(&self, other: &Vec<T>) -> bool {
        *self == other[..]
    }
}

impl<'a> IntoIterator for &'a Record {
    type Item = &'a [u8];
    type IntoIter = FieldIter<'a>;

    fn into_iter(self) -> FieldIter<'a> {
        self.iter()
    }
}

/// Iterator over the fields of a [`Record`].
#[derive(Debug, Clone)]
pub struct FieldIter<'a>(slice::Iter<'a, Vec<u8>>);

impl<'a> Iterator for FieldIter<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<&'a [u8]> {
        self.0.next().map(Vec::as_slice)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl ExactSizeIterator for FieldIter<'_> {}

/// Chunk buffer size used by [`RecordReader::new`].
const DEFAULT_CHUNK_CAPACITY: usize = 4 * 1024;

/// Reads whole records by draining fields through a fixed chunk buffer.
///
/// Fields longer than the chunk are assembled across as many scanner calls
/// as they need; the chunk size only bounds how much is copied per call,
/// never the field length.
///
/// # Examples
///
/// ```rust
/// use csvscan::{ByteCursor, FieldScanner, RecordReader};
///
/// let mut cursor = ByteCursor::from_slice(b"city,pop\nulm,126000\n");
/// let reader = RecordReader::new(FieldScanner::new(&mut cursor));
/// let records: Vec<_> = reader.records().collect::<Result<_, _>>().unwrap();
/// assert_eq!(records.len(), 2);
/// assert_eq!(&records[1][0], b"ulm");
/// ```
#[derive(Debug)]
pub struct RecordReader<'c, S> {
    scanner: FieldScanner<'c, S>,
    chunk: Box<[u8]>,
    // In-progress state, kept across a failed call so nothing consumed from
    // the source is lost on retry.
    fields: Vec<Vec<u8>>,
    partial: Vec<u8>,
    // Whether the current record consumed any input. Distinguishes a real
    // final field that happens to be empty (`""` then end of stream) from
    // end of stream with no record at all.
    consumed_any: bool,
}

impl<'c, S: ByteSource> RecordReader<'c, S> {
    /// Creates a reader with the default chunk buffer (4 KiB).
    pub fn new(scanner: FieldScanner<'c, S>) -> Self {
        Self::with_chunk_capacity(DEFAULT_CHUNK_CAPACITY, scanner)
    }

    /// Creates a reader with a caller-chosen chunk buffer size.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero, since a zero-length chunk cannot make
    /// content progress.
    pub fn with_chunk_capacity(capacity: usize, scanner: FieldScanner<'c, S>) -> Self {
        assert!(capacity > 0, "RecordReader chunk capacity must be non-zero");
        RecordReader {
            scanner,
            chunk: vec![0; capacity].into_boxed_slice(),
            fields: Vec::new(),
            partial: Vec::new(),
            consumed_any: false,
        }
    }

    /// Reads the next record into `record`, replacing its contents.
    ///
    /// Returns `Ok(false)` at end of stream with no record read. A final
    /// record without a trailing newline is still delivered; a trailing
    /// newline does not produce a phantom empty record.
    ///
    /// # Errors
    ///
    /// Propagates [`ScanError`] from the scanner. Everything consumed so
    /// far, including content delivered by the failing call, stays
    /// buffered in the reader; calling again after the source recovers
    /// continues the same record without loss.
    pub fn read_record(&mut self, record: &mut Record) -> Result<bool, ScanError<S::Error>> {
        record.clear();
        loop {
            let before = self.scanner.position();
            let result = self.scanner.read_field(&mut self.chunk);
            if self.scanner.position() > before {
                self.consumed_any = true;
            }
            let read = match result {
                Ok(read) => read,
                Err(err) => {
                    self.partial.extend_from_slice(&self.chunk[..err.written()]);
                    return Err(err);
                }
            };
            self.partial.extend_from_slice(&self.chunk[..read.written]);
            match read.terminator() {
                None => {}
                Some(Terminator::Delimiter) => {
                    self.fields.push(mem::take(&mut self.partial));
                }
                Some(Terminator::RecordEnd) => {
                    self.finish_record(record);
                    return Ok(true);
                }
                Some(Terminator::StreamEnd) => {
                    // An empty final field only counts when something of the
                    // record was actually consumed, e.g. a quoted `""`.
                    if !self.consumed_any {
                        return Ok(false);
                    }
                    self.finish_record(record);
                    return Ok(true);
                }
            }
        }
    }

    fn finish_record(&mut self, record: &mut Record) {
        self.fields.push(mem::take(&mut self.partial));
        record.fields = mem::take(&mut self.fields);
        self.consumed_any = false;
    }

    /// Turns the reader into an iterator of records.
    ///
    /// An `Err` item does not end the iteration: after a source failure the
    /// next call retries from where the stream stopped.
    pub fn records(self) -> Records<'c, S> {
        Records { reader: self }
    }
}

/// Iterator over records, created by [`RecordReader::records`].
#[derive(Debug)]
pub struct Records<'c, S> {
    reader: RecordReader<'c, S>,
}

impl<S: ByteSource> Iterator for Records<'_, S> {
    type Item = Result<Record, ScanError<S::Error>>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut record = Record::new();
        match self.reader.read_record(&mut record) {
            Ok(true) => Some(Ok(record)),
            Ok(false) => None,
            Err(err) => Some(Err(err)),
        }
    }
}
