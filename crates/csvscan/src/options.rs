/// Configuration for a [`FieldScanner`](crate::FieldScanner).
///
/// Only the delimiter varies; the quote (`"`), carriage return, and line
/// feed bytes are fixed by the format.
///
/// # Examples
///
/// ```rust
/// use csvscan::{ByteCursor, FieldScanner, ScanOptions};
///
/// let mut cursor = ByteCursor::from_slice(b"a\tb");
/// let mut scanner = FieldScanner::with_options(&mut cursor, ScanOptions { delimiter: b'\t' });
///
/// let mut buf = [0u8; 8];
/// let read = scanner.read_field(&mut buf).unwrap();
/// assert_eq!(&buf[..read.written], b"a");
/// ```
///
/// # Default
///
/// Comma (`b','`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScanOptions {
    /// The byte that separates fields within a record.
    ///
    /// # Default
    ///
    /// `b','`
    pub delimiter: u8,
}

impl Default for ScanOptions {
    fn default() -> Self {
        ScanOptions { delimiter: b',' }
    }
}
