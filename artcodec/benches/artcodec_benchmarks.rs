//
// Copyright 2017-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

//! Benchmarks for ArtCodec performance

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use tn3270art_artcodec::{ArtConfig, ColorState, ColorMode, RunCompressor, convert};

// A screen of shaded blocks with a color change every ten cells
fn sample_art(rows: usize) -> Vec<u8> {
    let mut art = Vec::new();
    for row in 0..rows {
        for block in 0..8 {
            art.extend_from_slice(format!("\x1b[{}m", 30 + (row + block) % 8).as_bytes());
            art.extend_from_slice(&[0xDB, 0xDB, 0xDB, 0xDB, 0xDB, 0xB1, 0xB1, 0xB0]);
            art.extend_from_slice(b"ab");
        }
        art.extend_from_slice(b"\r\n");
    }
    art
}

// Benchmark converting plain text
fn bench_convert_plain_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert_plain_text");

    for size in [10, 100, 1000, 10000].iter() {
        group.throughput(Throughput::Bytes(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let text = "Hello, World! ".repeat(size / 14 + 1);
            let config = ArtConfig::default();

            b.iter(|| {
                black_box(convert(black_box(text.as_bytes()), &config));
            });
        });
    }
    group.finish();
}

// Benchmark converting colored block art
fn bench_convert_art(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert_art");

    for mode in [ColorMode::Basic, ColorMode::Extended] {
        let art = sample_art(24);
        let config = ArtConfig::default().with_color_mode(mode);
        group.throughput(Throughput::Bytes(art.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(mode), &art, |b, art| {
            b.iter(|| {
                black_box(convert(black_box(art), &config));
            });
        });
    }
    group.finish();
}

// Benchmark run compression
fn bench_compress(c: &mut Criterion) {
    let compressor = RunCompressor::default();
    let input: Vec<u8> = (0..4096).map(|i| if i % 64 < 40 { b'-' } else { (i % 26) as u8 + b'a' }).collect();

    c.bench_function("compress_runs", |b| {
        b.iter(|| {
            black_box(compressor.compress(black_box(&input)));
        });
    });
}

// Benchmark SGR interpretation
fn bench_color_state(c: &mut Criterion) {
    c.bench_function("color_state_extended", |b| {
        b.iter(|| {
            let mut state = ColorState::new(ColorMode::Extended);
            for params in [&[1u16, 31][..], &[0], &[32], &[1], &[2], &[44, 37]] {
                black_box(state.apply(black_box(params)).unwrap());
            }
        });
    });
}

criterion_group!(
    benches,
    bench_convert_plain_text,
    bench_convert_art,
    bench_compress,
    bench_color_state,
);

criterion_main!(benches);
