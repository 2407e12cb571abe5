use alloc::{boxed::Box, vec};
use std::io;

use super::ByteSource;

/// Block size used by [`ReaderSource::new`].
const DEFAULT_CAPACITY: usize = 8 * 1024;

/// A [`ByteSource`] over any [`io::Read`], refilled in blocks.
///
/// Serving single-byte pulls straight from a raw reader would pay one
/// `read` call per byte; this source fills an internal block and hands
/// bytes out of it. Errors from the reader, including
/// [`io::ErrorKind::Interrupted`], are returned unchanged; whether to retry
/// is the caller's policy. A failed refill consumes nothing, so the source
/// can be read again after the error.
#[derive(Debug)]
pub struct ReaderSource<R> {
    reader: R,
    buf: Box<[u8]>,
    pos: usize,
    len: usize,
}

impl<R: io::Read> ReaderSource<R> {
    /// Creates a source with the default block size (8 KiB).
    pub fn new(reader: R) -> Self {
        Self::with_capacity(DEFAULT_CAPACITY, reader)
    }

    /// Creates a source with a caller-chosen block size.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn with_capacity(capacity: usize, reader: R) -> Self {
        assert!(capacity > 0, "ReaderSource capacity must be non-zero");
        ReaderSource {
            reader,
            buf: vec![0; capacity].into_boxed_slice(),
            pos: 0,
            len: 0,
        }
    }

    /// Shared access to the wrapped reader.
    pub fn get_ref(&self) -> &R {
        &self.reader
    }

    /// Unwraps the source, discarding any bytes still in the block.
    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: io::Read> ByteSource for ReaderSource<R> {
    type Error = io::Error;

    fn next_byte(&mut self) -> Result<Option<u8>, io::Error> {
        if self.pos == self.len {
            self.len = self.reader.read(&mut self.buf)?;
            self.pos = 0;
            if self.len == 0 {
                return Ok(None);
            }
        }
        let byte = self.buf[self.pos];
        self.pos += 1;
        Ok(Some(byte))
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::ReaderSource;
    use crate::source::ByteSource;

    /// Reader that yields its data in deliberately tiny `read` results.
    struct Trickle<'a> {
        data: &'a [u8],
        step: usize,
    }

    impl io::Read for Trickle<'_> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            let n = self.step.min(self.data.len()).min(buf.len());
            buf[..n].copy_from_slice(&self.data[..n]);
            self.data = &self.data[n..];
            Ok(n)
        }
    }

    #[test]
    fn drains_reader_across_refills() {
        let reader = Trickle { data: b"abcdef", step: 2 };
        let mut source = ReaderSource::with_capacity(4, reader);
        let mut out = std::vec::Vec::new();
        while let Some(byte) = source.next_byte().unwrap() {
            out.push(byte);
        }
        assert_eq!(out, b"abcdef");
        assert_eq!(source.next_byte().unwrap(), None);
    }

    #[test]
    fn propagates_interrupted() {
        struct Flaky {
            interrupted: bool,
        }

        impl io::Read for Flaky {
            fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
                if self.interrupted {
                    self.interrupted = false;
                    return Err(io::Error::new(io::ErrorKind::Interrupted, "signal"));
                }
                buf[0] = b'x';
                Ok(1)
            }
        }

        let mut source = ReaderSource::new(Flaky { interrupted: true });
        let err = source.next_byte().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::Interrupted);
        // The failed refill consumed nothing; the next pull succeeds.
        assert_eq!(source.next_byte().unwrap(), Some(b'x'));
    }

    #[test]
    #[should_panic(expected = "capacity must be non-zero")]
    fn zero_capacity_panics() {
        let _ = ReaderSource::with_capacity(0, io::empty());
    }
}
