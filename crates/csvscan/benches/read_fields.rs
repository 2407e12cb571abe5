//! Benchmarks for scanning CSV payloads field by field and record by record.
#![expect(missing_docs)]
use std::time::Duration;

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use csvscan::{ByteCursor, FieldOutcome, FieldScanner, RecordReader, Terminator};

/// Builds `records` rows mixing plain fields, quoted delimiters, and
/// doubled quotes.
fn make_payload(records: usize) -> Vec<u8> {
    let mut out = Vec::new();
    for i in 0..records {
        let row = format!(
            "row{i},plain value,\"quoted, with delimiter\",\"doubled \"\"{i}\"\"\",tail{i}\r\n"
        );
        out.extend_from_slice(row.as_bytes());
    }
    out
}

/// Drains the payload through a fixed field buffer, counting fields and
/// content bytes.
fn scan_fields(payload: &[u8], capacity: usize) -> (usize, usize) {
    let mut cursor = ByteCursor::from_slice(payload);
    let mut scanner = FieldScanner::new(&mut cursor);
    let mut buf = vec![0u8; capacity];
    let mut fields = 0usize;
    let mut bytes = 0usize;
    loop {
        let read = scanner.read_field(&mut buf).expect("payload is well formed");
        bytes += read.written;
        match read.outcome {
            FieldOutcome::Truncated => {}
            FieldOutcome::Complete(Terminator::StreamEnd) => {
                fields += 1;
                break;
            }
            FieldOutcome::Complete(_) => fields += 1,
        }
    }
    (fields, bytes)
}

/// Drains the payload into owned records, counting total fields.
fn read_records(payload: &[u8], chunk: usize) -> usize {
    let mut cursor = ByteCursor::from_slice(payload);
    let reader = RecordReader::with_chunk_capacity(chunk, FieldScanner::new(&mut cursor));
    reader
        .records()
        .map(|record| record.expect("payload is well formed").len())
        .sum()
}

fn bench_read_fields(c: &mut Criterion) {
    let mut group = c.benchmark_group("read_fields");

    for &records in &[100usize, 1_000, 10_000] {
        let payload = make_payload(records);

        for &capacity in &[64usize, 1024, 8192] {
            group.bench_with_input(
                BenchmarkId::new(format!("scan_fields_buf{capacity}"), records),
                &records,
                |b, &_r| {
                    b.iter(|| {
                        let v = scan_fields(black_box(&payload), capacity);
                        black_box(v);
                    });
                },
            );
        }

        group.bench_with_input(
            BenchmarkId::new("read_records", records),
            &records,
            |b, &_r| {
                b.iter(|| {
                    let v = read_records(black_box(&payload), 4096);
                    black_box(v);
                });
            },
        );
    }

    group.finish();
}

fn criterion() -> Criterion {
    let mut c = Criterion::default();
    if cfg!(feature = "bench-fast") {
        c = c
            .warm_up_time(Duration::from_millis(10))
            .measurement_time(Duration::from_millis(100))
            .sample_size(10);
    } else {
        c = c
            .warm_up_time(Duration::from_secs(5))
            .measurement_time(Duration::from_secs(10));
    }
    c
}

criterion_group! { name = benches; config = criterion(); targets = bench_read_fields }
criterion_main!(benches);
