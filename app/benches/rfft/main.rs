/*
 * // Copyright 2026 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
use criterion::measurement::WallTime;
use criterion::{BenchmarkGroup, Criterion, criterion_group, criterion_main};
use rand::Rng;
use realfft::RealFftPlanner;
use realfft::num_complex::Complex;
use srfft::Srfft;
use std::time::Duration;

fn check_power_groupd(c: &mut BenchmarkGroup<WallTime>, n: usize, group: String) {
    let mut input_power = vec![f64::default(); n];
    for z in input_power.iter_mut() {
        *z = rand::rng().random();
    }

    c.bench_function(format!("srfft {group}d").as_str(), |b| {
        let plan = Srfft::make_real_fft_f64(input_power.len()).unwrap();
        let mut output = vec![0f64; n];
        let working = input_power.to_vec();
        b.iter(|| {
            plan.execute(&working, &mut output).unwrap();
        })
    });

    c.bench_function(format!("realfft {group}d").as_str(), |b| {
        let plan = RealFftPlanner::<f64>::new().plan_fft_forward(n);
        let mut output = vec![Complex::new(0.0, 0.0); n / 2 + 1];
        let mut working = input_power.to_vec();
        b.iter(|| {
            plan.process(&mut working, &mut output).unwrap();
        })
    });
}

fn check_power_groups(c: &mut BenchmarkGroup<WallTime>, n: usize, group: String) {
    let mut input_power = vec![f32::default(); n];
    for z in input_power.iter_mut() {
        *z = rand::rng().random();
    }

    c.bench_function(format!("srfft {group}s").as_str(), |b| {
        let plan = Srfft::make_real_fft_f32(input_power.len()).unwrap();
        let mut output = vec![0f32; n];
        let working = input_power.to_vec();
        b.iter(|| {
            plan.execute(&working, &mut output).unwrap();
        })
    });

    c.bench_function(format!("realfft {group}s").as_str(), |b| {
        let plan = RealFftPlanner::<f32>::new().plan_fft_forward(n);
        let mut output = vec![Complex::new(0.0, 0.0); n / 2 + 1];
        let mut working = input_power.to_vec();
        b.iter(|| {
            plan.process(&mut working, &mut output).unwrap();
        })
    });
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("group");
    let c = group
        .measurement_time(Duration::from_millis(750))
        .warm_up_time(Duration::from_millis(750));

    for exp in 4..=16 {
        let n = 1usize << exp;
        check_power_groups(c, n, n.to_string());
        check_power_groupd(c, n, n.to_string());
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
