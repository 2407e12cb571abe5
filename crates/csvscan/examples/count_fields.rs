//! Scans a small CSV export field by field through a fixed 16-byte buffer.
//!
//! The input carries the shapes that break naive split-on-comma readers:
//! quoted fields with embedded delimiters, a record end inside quotes,
//! doubled quotes, and a trailing empty field. The field buffer is smaller
//! than several of the fields on purpose; a field that does not fit arrives
//! across multiple `read_field` calls, flagged as truncated until its final
//! chunk reports the real terminator.
//!
//! Run with
//!
//! ```bash
//! cargo run -p csvscan --example count_fields
//! ```

use csvscan::{ByteCursor, FieldOutcome, FieldScanner, ReaderSource, Terminator};

fn main() {
    // In real life this would come from a file or a socket.
    const DATA: &[u8] = b"order,customer,item,notes\r\n\
        1001,\"Haller, Marta\",radio,\"left on porch\"\r\n\
        1002,\"O'Neil \"\"Mo\"\" Quinn\",lamp,\"ring bell\r\ntwice\"\r\n\
        1003,Svensson,chair,";

    // Small sizes on purpose: block refills and truncated fields are the
    // normal case at scale, not the exception.
    let source = ReaderSource::with_capacity(32, DATA);
    let mut cursor = ByteCursor::new(source);
    let mut scanner = FieldScanner::new(&mut cursor);

    let mut buf = [0u8; 16];
    let mut field = Vec::new();
    let mut record = 1usize;
    let mut fields = 0usize;
    let mut bytes = 0usize;

    loop {
        let read = scanner.read_field(&mut buf).expect("in-memory source");
        field.extend_from_slice(&buf[..read.written]);
        let FieldOutcome::Complete(terminator) = read.outcome else {
            // Field longer than the buffer; keep draining.
            continue;
        };

        fields += 1;
        bytes += field.len();
        println!("record {record}: {:?}", String::from_utf8_lossy(&field));
        field.clear();

        match terminator {
            Terminator::Delimiter => {}
            Terminator::RecordEnd => record += 1,
            Terminator::StreamEnd => break,
        }
    }

    println!("{record} records, {fields} fields, {bytes} content bytes");
}
