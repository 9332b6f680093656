//! Throughput benchmark for the streaming FASTQ → FASTA transform

use std::io::Cursor;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use fq2fa::convert::convert_stream;
use fq2fa::io::fasta::FastaLineWriter;
use fq2fa::io::fastq::FrameReader;

/// Build an in-memory FASTQ payload with `count` records of `length` bases.
fn generate_fastq(count: usize, length: usize) -> Vec<u8> {
    let mut data = Vec::with_capacity(count * (length * 2 + 16));
    for i in 0..count {
        let mut seq = Vec::with_capacity(length);
        for j in 0..length {
            let base = match (i + j) % 4 {
                0 => b'A',
                1 => b'C',
                2 => b'G',
                _ => b'T',
            };
            seq.push(base);
        }
        data.extend_from_slice(format!("@read_{}\n", i).as_bytes());
        data.extend_from_slice(&seq);
        data.extend_from_slice(b"\n+\n");
        data.extend_from_slice(&vec![b'I'; length]);
        data.push(b'\n');
    }
    data
}

fn bench_convert_stream(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert_stream");

    for count in [1_000, 10_000, 100_000].iter() {
        let input = generate_fastq(*count, 150);
        group.throughput(Throughput::Bytes(input.len() as u64));

        group.bench_with_input(BenchmarkId::new("records", count), count, |b, _| {
            b.iter(|| {
                let mut writer = FastaLineWriter::new(Vec::with_capacity(input.len()));
                let frames = FrameReader::new(Cursor::new(black_box(&input)));
                let lines = convert_stream(frames, &mut writer).unwrap();
                black_box((lines, writer.into_inner()));
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_convert_stream);
criterion_main!(benches);
