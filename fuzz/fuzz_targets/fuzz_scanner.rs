#![no_main]
use std::cell::RefCell;

use arbitrary::Arbitrary;
use csvscan::{
    ByteCursor, FieldOutcome, FieldScanner, RecordReader, ScanOptions, Terminator,
};
use libfuzzer_sys::{fuzz_mutator, fuzz_target, fuzzer_mutate};
use rand::rngs::SmallRng; // faster than StdRng
use rand::{Rng, RngCore, SeedableRng};

const HEADER: usize = 5; // 1 flag + 4-byte capacity seed

thread_local! {
    // One SmallRng per thread, seeded once from the host OS
    static RNG: RefCell<SmallRng> =
        RefCell::new(SmallRng::from_os_rng());
}

/// Every byte shape a record end may take.
static ENDINGS: &[&[u8]] = &[b"\r\n", b"\n", b"\r", b"\n\r"];

/// Helper: borrow the thread-local RNG and run a closure with it.
fn with_rng<F, R>(f: F) -> R
where
    F: FnOnce(&mut SmallRng) -> R,
{
    RNG.with(|cell| f(&mut cell.borrow_mut()))
}

fn mutator(data: &mut [u8], size: usize, max_size: usize, seed: u32) -> usize {
    if size < HEADER || seed.is_multiple_of(10) {
        data[0] = with_rng(|rng| rng.next_u32() as u8 & 0x01); // 1 flag bit: delimiter

        // 2) capacity seed
        data[1..5].copy_from_slice(&with_rng(|rng| rng.next_u32().to_le_bytes()));

        let delimiter = if data[0] & 1 != 0 { b';' } else { b',' };
        let mut prefix = HEADER;

        while prefix < size {
            let limit = max_size - prefix;
            prefix += append_row(&mut data[prefix..], size, limit, delimiter);
        }

        prefix
    } else {
        fuzzer_mutate(data, size, max_size)
    }
}

/// Append one CSV row built from arbitrary field bytes, quoting roughly
/// half the fields, and never exceed `limit`. Returns the bytes written.
fn append_row(data: &mut [u8], size: usize, limit: usize, delimiter: u8) -> usize {
    let fields = loop {
        let s = with_rng(|rng| rng.random_range(size / 2..=size * 2).min(limit));
        let bytes: Vec<u8> = with_rng(|rng| (0..s).map(|_| rng.random::<u8>()).collect());
        match <Vec<Vec<u8>> as Arbitrary>::arbitrary(&mut arbitrary::Unstructured::new(&bytes)) {
            Ok(fields) => break fields,
            Err(_) => continue,
        }
    };

    let mut row = Vec::new();
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            row.push(delimiter);
        }
        if with_rng(|rng| rng.random::<bool>()) {
            // Quoted: anything goes, doubling interior quotes.
            row.push(b'"');
            for &byte in field {
                row.push(byte);
                if byte == b'"' {
                    row.push(b'"');
                }
            }
            row.push(b'"');
        } else {
            // Unquoted: structural bytes would change the row shape.
            row.extend(
                field
                    .iter()
                    .copied()
                    .filter(|&byte| byte != delimiter && !matches!(byte, b'"' | b'\r' | b'\n')),
            );
        }
    }
    row.extend_from_slice(ENDINGS[with_rng(|rng| rng.random_range(0..ENDINGS.len()))]);

    let len = row.len().min(limit);
    data[..len].copy_from_slice(&row[..len]);

    len
}

fuzz_mutator!(|data: &mut [u8], size: usize, max_size: usize, seed: u32| {
    mutator(data, size, max_size, seed)
});

/// Everything one scan of the input yields: completed fields with their
/// terminators, plus the error position and any content the failing call
/// delivered. Capacity must not change any of it.
type Scan = (Vec<(Vec<u8>, Terminator)>, Option<(u64, Vec<u8>)>);

fn scan_with(data: &[u8], options: ScanOptions, capacity: usize) -> Scan {
    let mut cursor = ByteCursor::from_slice(data);
    let mut scanner = FieldScanner::with_options(&mut cursor, options);
    let mut buf = vec![0u8; capacity];
    let mut fields = Vec::new();
    let mut partial = Vec::new();
    loop {
        match scanner.read_field(&mut buf) {
            Ok(read) => {
                partial.extend_from_slice(&buf[..read.written]);
                match read.outcome {
                    FieldOutcome::Truncated => {}
                    FieldOutcome::Complete(terminator) => {
                        fields.push((std::mem::take(&mut partial), terminator));
                        if terminator == Terminator::StreamEnd {
                            return (fields, None);
                        }
                    }
                }
            }
            Err(err) => {
                partial.extend_from_slice(&buf[..err.written()]);
                return (fields, Some((err.offset(), partial)));
            }
        }
    }
}

fn scan(data: &[u8]) {
    if data.len() < HEADER {
        return;
    }

    let flags = data[0];
    let capacity_seed = u32::from_le_bytes(data[1..5].try_into().unwrap());
    let data = &data[HEADER..];

    let options = ScanOptions {
        delimiter: if flags & 1 != 0 { b';' } else { b',' },
    };

    // A buffer that fits any field in one call is the reference; the seed
    // picks a small capacity that forces truncated deliveries.
    let small = 1 + capacity_seed as usize % 61;
    let whole = scan_with(data, options, data.len() + 1);
    let pieces = scan_with(data, options, small);
    assert_eq!(whole, pieces);

    // The record layer must not panic either, malformed input included.
    let mut cursor = ByteCursor::from_slice(data);
    let reader =
        RecordReader::with_chunk_capacity(small, FieldScanner::with_options(&mut cursor, options));
    for record in reader.records() {
        let _ = record;
    }
}

fuzz_target!(|data: &[u8]| scan(data));
