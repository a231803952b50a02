use criterion::{criterion_group, criterion_main, Criterion};
use keyanneal::consts::REFERENCE_LAYOUT;
use keyanneal::corpus::FrequencyModel;
use keyanneal::keyboard::Keyboard;
use keyanneal::optimizer::{mutate, optimize_homerow};
use keyanneal::scorer::{all_metrics, MetricKind};
use std::hint::black_box;

fn setup_model() -> FrequencyModel {
    // Every ordered triple of the 26 letters plus the common punctuation.
    let chars: Vec<char> = "abcdefghijklmnopqrstuvwxyz.,'".chars().collect();
    let mut cf = FrequencyModel::default();
    let mut count = 1;
    for &a in &chars {
        cf.monograms.insert(a, 1000 + count);
        for &b in &chars {
            cf.bigrams.insert([a, b], count % 97);
            for &c in &chars {
                cf.trigrams.insert([a, b, c], count % 89);
                count += 1;
            }
        }
    }
    cf
}

fn criterion_benchmark(c: &mut Criterion) {
    let cf = setup_model();
    let kb = Keyboard::new(REFERENCE_LAYOUT).expect("reference layout");

    c.bench_function("all_metrics (24k trigrams)", |b| {
        b.iter(|| all_metrics(black_box(&kb), black_box(&cf)))
    });

    c.bench_function("combined", |b| {
        b.iter(|| MetricKind::Combined.score(black_box(&kb), black_box(&cf)))
    });

    let mut rng = fastrand::Rng::with_seed(1);
    c.bench_function("mutate (3 swaps)", |b| {
        b.iter(|| mutate(black_box(&kb), 3, &[], &mut rng))
    });

    c.bench_function("optimize_homerow", |b| {
        b.iter(|| optimize_homerow(black_box(&kb), black_box(&cf), false, false))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
