// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use bourne_domain::domain::Domain;
use bourne_domain::mark;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

type Positive = Domain<f64, mark!(0.55), mark!(20000)>;
type Negative = Domain<f64, mark!(-20000), mark!(0)>;

fn inputs(len: usize) -> (Vec<f64>, Vec<f64>) {
    let positive = (0..len)
        .map(|i| 0.55 + (i % 19_999) as f64)
        .collect::<Vec<_>>();
    let negative = (0..len)
        .map(|i| -((i % 20_000) as f64))
        .collect::<Vec<_>>();
    (positive, negative)
}

fn bench_raw_vs_domain(c: &mut Criterion) {
    let mut group = c.benchmark_group("difference");

    for &len in &[1_000usize, 100_000] {
        let (positive, negative) = inputs(len);
        let positive_domains: Vec<Positive> = positive.iter().map(|&v| Positive::new(v)).collect();
        let negative_domains: Vec<Negative> = negative.iter().map(|&v| Negative::new(v)).collect();

        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("raw_f64", len), &len, |b, _| {
            b.iter(|| {
                let mut acc = 0.0f64;
                for (p, n) in positive.iter().zip(negative.iter()) {
                    acc += black_box(*p) - black_box(*n);
                }
                black_box(acc)
            })
        });

        group.bench_with_input(BenchmarkId::new("domain", len), &len, |b, _| {
            b.iter(|| {
                let mut acc = 0.0f64;
                for (p, n) in positive_domains.iter().zip(negative_domains.iter()) {
                    acc += (black_box(*p) - black_box(*n)).value();
                }
                black_box(acc)
            })
        });
    }

    group.finish();
}

fn bench_construction(c: &mut Criterion) {
    let (positive, _) = inputs(10_000);

    c.bench_function("construct/new", |b| {
        b.iter(|| {
            for &v in &positive {
                black_box(Positive::new(black_box(v)));
            }
        })
    });

    c.bench_function("construct/try_new", |b| {
        b.iter(|| {
            for &v in &positive {
                let _ = black_box(Positive::try_new(black_box(v)));
            }
        })
    });
}

criterion_group!(benches, bench_raw_vs_domain, bench_construction);
criterion_main!(benches);
