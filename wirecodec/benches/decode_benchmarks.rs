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


//! Benchmarks for status decoding

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use gamequery_wirecodec::{Cursor, Protocol, decode_status, strip_colors};
use std::hint::black_box;

fn status_payload(players: usize) -> Vec<u8> {
    let mut payload = String::from(
        "sv_hostname\\^1Bench ^7Server\\g_gametype\\4\\mapname\\q3dm17\\sv_maxclients\\64\n",
    );
    for index in 0..players {
        payload.push_str(&format!("{} {} \"^{}Player {}\"\n", index * 3, 20 + index, index % 10, index));
    }
    payload.into_bytes()
}

// Benchmark decoding status payloads with a growing player list
fn bench_decode_status(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_status");

    for players in [0, 8, 32, 64].iter() {
        let payload = status_payload(*players);
        group.throughput(Throughput::Bytes(payload.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(players), &payload, |b, payload| {
            b.iter(|| {
                let mut cursor = Cursor::new(black_box(payload));
                black_box(decode_status(&mut cursor, &Protocol::QUAKE3));
            });
        });
    }
    group.finish();
}

// Benchmark color stripping with and without markers
fn bench_strip_colors(c: &mut Criterion) {
    let mut group = c.benchmark_group("strip_colors");

    group.bench_function("plain", |b| {
        b.iter(|| black_box(strip_colors(black_box("A Plain Server Name"))));
    });
    group.bench_function("colored", |b| {
        b.iter(|| black_box(strip_colors(black_box("^1A ^2Colored ^Xff8000Server ^7Name"))));
    });
    group.finish();
}

criterion_group!(benches, bench_decode_status, bench_strip_colors);
criterion_main!(benches);
