use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use evolving_pictures::{Individual, Options, Population, breed, render_rgba};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn bench_breed(c: &mut Criterion) {
    let opts = Options::default();
    let mut rng = StdRng::seed_from_u64(0);
    let pop = Population::new_random(&mut rng, &opts);
    let survivors: Vec<&Individual> = pop.members.iter().take(3).collect();

    c.bench_function("breed_9_from_3", |b| {
        b.iter_batched(
            || StdRng::seed_from_u64(1),
            |mut rng| breed(&survivors, opts.population_size, &mut rng),
            BatchSize::SmallInput,
        )
    });

    c.bench_function("mutate", |b| {
        b.iter_batched(
            || (pop.members[0].clone(), StdRng::seed_from_u64(2)),
            |(mut ind, mut rng)| {
                ind.mutate(&mut rng, &opts);
                ind
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_render(c: &mut Criterion) {
    let opts = Options::default();
    let mut rng = StdRng::seed_from_u64(3);
    let ind = Individual::new_random(&mut rng, &opts);

    let mut group = c.benchmark_group("render_rgba");
    for &(w, h) in &[(64u32, 48u32), (400, 300)] {
        group.bench_with_input(BenchmarkId::from_parameter(format!("{w}x{h}")), &(w, h), |b, &(w, h)| {
            b.iter(|| render_rgba(&ind, w, h))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_breed, bench_render);
criterion_main!(benches);
