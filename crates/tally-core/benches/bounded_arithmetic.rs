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

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::hint::black_box;
use tally_core::num::bounded::BoundedInt;

const SIZES: [usize; 3] = [1_000, 10_000, 100_000];

/// Operands spread over the whole finite range, with a sprinkling of
/// infinities so the sentinel branches are exercised as well.
fn operands(n: usize) -> Vec<BoundedInt<i64>> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..n)
        .map(|_| match rng.random_range(0..100) {
            0 => BoundedInt::positive_infinity(),
            1 => BoundedInt::negative_infinity(),
            _ => BoundedInt::new(rng.random_range(-i64::MAX + 1..i64::MAX)),
        })
        .collect()
}

fn bench_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("bounded_add");
    for &n in &SIZES {
        let lhs = operands(n);
        let rhs: Vec<_> = lhs.iter().rev().copied().collect();
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| {
                for (&l, &r) in lhs.iter().zip(&rhs) {
                    black_box(black_box(l) + black_box(r));
                }
            })
        });
    }
    group.finish();
}

fn bench_div(c: &mut Criterion) {
    let mut group = c.benchmark_group("bounded_div");
    for &n in &SIZES {
        let lhs = operands(n);
        let rhs: Vec<_> = lhs.iter().rev().copied().collect();
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| {
                for (&l, &r) in lhs.iter().zip(&rhs) {
                    black_box(black_box(l) / black_box(r));
                }
            })
        });
    }
    group.finish();
}

fn bench_sum(c: &mut Criterion) {
    let mut group = c.benchmark_group("bounded_sum");
    for &n in &SIZES {
        let values: Vec<_> = (0..n as i64).map(BoundedInt::new).collect();
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &values, |b, values| {
            b.iter(|| black_box(values.iter().sum::<BoundedInt<i64>>()))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_add, bench_div, bench_sum);
criterion_main!(benches);
