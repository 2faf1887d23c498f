use robobaseball::*;

criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        solving_count_equilibrium,
        building_count_table,
        enumerating_full_count_sequences,
        computing_full_count_probability,
        scanning_homerun_probability,
        optimizing_homerun_probability,
}

fn solving_count_equilibrium(c: &mut criterion::Criterion) {
    c.bench_function("solve a single count", |b| {
        b.iter(|| Equilibrium::solve(criterion::black_box(0.8), 0.3, 0.25))
    });
}

fn building_count_table(c: &mut criterion::Criterion) {
    c.bench_function("solve all 12 counts", |b| {
        b.iter(|| CountTable::build(criterion::black_box(0.25)))
    });
}

fn enumerating_full_count_sequences(c: &mut criterion::Criterion) {
    c.bench_function("enumerate full-count sequences", |b| {
        b.iter(|| PitchSequence::enumerate())
    });
}

fn computing_full_count_probability(c: &mut criterion::Criterion) {
    let table = CountTable::build(0.25).expect("interior equilibria");
    c.bench_function("sum full-count sequence probabilities", |b| {
        b.iter(|| full_count_probability(criterion::black_box(&table)))
    });
}

fn scanning_homerun_probability(c: &mut criterion::Criterion) {
    c.bench_function("scan 100 home-run probabilities", |b| {
        b.iter(|| scan(0., 1., SEARCH_DIVISIONS))
    });
}

fn optimizing_homerun_probability(c: &mut criterion::Criterion) {
    let optimizer = Optimizer::new(8, SEARCH_DIVISIONS);
    c.bench_function("optimize home-run probability (8 rounds)", |b| {
        b.iter(|| optimizer.optimize(0.1, 0.9))
    });
}
