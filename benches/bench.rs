// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::num::NonZeroUsize;

use criterion::*;
use ndarray::prelude::*;

use panama::{averaging::two_pass_average, Aligner, Waveform, XcorrAligner};

const NUM_SAMPLES: usize = 1024;

fn pulse(centre: f64) -> Waveform {
    let times = Array1::range(0.0, NUM_SAMPLES as f64, 1.0) * 0.1;
    let amps = Array1::from_shape_fn(NUM_SAMPLES, |i| {
        let x = (i as f64 - centre) / 4.0;
        -x * (-0.5 * x * x).exp()
    });
    Waveform::new(times, amps).unwrap()
}

fn alignment(c: &mut Criterion) {
    let reference = pulse(400.0);
    let candidate = pulse(403.7);
    let mut group = c.benchmark_group("xcorr align");
    for factor in [1, 10, 40] {
        let aligner = XcorrAligner::new(NonZeroUsize::new(factor).unwrap());
        group.bench_with_input(BenchmarkId::from_parameter(factor), &aligner, |b, a| {
            b.iter(|| a.align(reference.amplitudes(), candidate.amplitudes()))
        });
    }
    group.finish();
}

fn averaging(c: &mut Criterion) {
    // Roughly one polarisation of ANITA-4's channels.
    let group: Vec<Waveform> = (0..48).map(|i| pulse(400.0 + (i % 7) as f64 * 0.3)).collect();
    let aligner = XcorrAligner::default();
    c.bench_function("two-pass average of 48 channels", |b| {
        b.iter(|| two_pass_average(&group, 0, &aligner))
    });
}

criterion_group!(benches, alignment, averaging);
criterion_main!(benches);
