// Copyright (c) 2025 The Caliper Authors.
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

use caliper_bnb::bnb::BnbSolver;
use caliper_bnb::eval::{RangeObjective, Unconstrained};
use caliper_bnb::monitor::no_op::NoOperationMonitor;
use caliper_core::interval::Interval;
use caliper_core::math;
use caliper_model::problem::{Direction, Problem};
use caliper_model::region::IntervalBox;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

/// Maximizes `x^2 + y^2` over `[-2, 2]^2` at the given width tolerance.
fn solve_paraboloid(tolerance: f64) -> f64 {
    let problem = Problem::new(
        IntervalBox::new([
            Interval::from_inf_sup(-2.0, 2.0),
            Interval::from_inf_sup(-2.0, 2.0),
        ]),
        Direction::Maximize,
        100_000,
        tolerance,
    )
    .unwrap();

    let mut objective =
        RangeObjective::new(|region: &IntervalBox| math::sqr(region[0]) + math::sqr(region[1]));
    let mut constraint = Unconstrained;
    let mut solver = BnbSolver::preallocated(256);

    let outcome = solver.solve(
        &problem,
        &mut objective,
        &mut constraint,
        NoOperationMonitor::new(),
    );
    outcome.f_max()
}

fn bench_paraboloid(c: &mut Criterion) {
    let mut group = c.benchmark_group("bnb_paraboloid");

    for &tolerance in &[0.5, 0.1, 0.05] {
        group.bench_with_input(
            BenchmarkId::from_parameter(tolerance),
            &tolerance,
            |b, &tolerance| {
                b.iter(|| black_box(solve_paraboloid(black_box(tolerance))));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_paraboloid);
criterion_main!(benches);
