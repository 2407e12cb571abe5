//! A streaming, field-at-a-time CSV reader.
//!
//! Fields are read straight out of a byte stream into a caller-supplied
//! buffer, one [`read_field`](FieldScanner::read_field) call at a time; the
//! core never allocates and never reads ahead more than one byte. Each call
//! reports what ended the field: another field follows ([`Terminator::Delimiter`]),
//! the record ended ([`Terminator::RecordEnd`]), or the stream is done
//! ([`Terminator::StreamEnd`]). Fields longer than the buffer are delivered
//! across calls.
//!
//! Quoting follows RFC 4180: fields may be wrapped in double quotes, a
//! doubled quote inside a quoted field is a literal quote, and quoted
//! fields may contain delimiters and newlines. Record ends are CR, LF, or
//! a CR/LF pair in either order. Bytes in, bytes out; text encoding is the
//! caller's concern.
//!
//! ```rust
//! use csvscan::{ByteCursor, FieldScanner, Terminator};
//!
//! let mut cursor = ByteCursor::from_slice(b"name,city\r\nmarta,ulm");
//! let mut scanner = FieldScanner::new(&mut cursor);
//! let mut buf = [0u8; 32];
//! let mut fields = Vec::new();
//!
//! loop {
//!     let read = scanner.read_field(&mut buf).unwrap();
//!     fields.push(String::from_utf8_lossy(&buf[..read.written]).into_owned());
//!     if read.terminator() == Some(Terminator::StreamEnd) {
//!         break;
//!     }
//! }
//!
//! assert_eq!(fields, ["name", "city", "marta", "ulm"]);
//! ```
//!
//! The `records` feature (on by default) adds [`RecordReader`], which
//! assembles owned [`Record`]s out of scanner calls; the `std` feature adds
//! [`ReaderSource`] for parsing out of any [`std::io::Read`].

#![no_std]
extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

mod cursor;
mod error;
mod field;
mod options;
#[cfg(feature = "records")]
mod records;
mod scanner;
mod source;


pub use cursor::ByteCursor;
pub use error::ScanError;
pub use field::{FieldOutcome, FieldRead, Terminator};
pub use options::ScanOptions;
#[cfg(feature = "records")]
pub use records::{FieldIter, Record, RecordReader, Records};
pub use scanner::FieldScanner;
#[cfg(feature = "std")]
pub use source::ReaderSource;
pub use source::{ByteSource, SliceSource};
