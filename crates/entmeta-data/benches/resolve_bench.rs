use criterion::{criterion_group, criterion_main, Criterion};
use entmeta_core::ecs::EntityStore;
use entmeta_data::meta::{IdentifierFormat, MetaComponent};
use std::hint::black_box;

fn bench_identity(c: &mut Criterion) {
    let mut entities = EntityStore::new();
    let mut meta = MetaComponent::new();

    // Setup 10,000 named entities
    let ids: Vec<String> = (0..10_000)
        .map(|_| {
            let entity = entities.create_entity();
            meta.attach(entity);
            meta.ensure_identifier(entity).to_string()
        })
        .collect();

    let mut group = c.benchmark_group("Entity Identity");

    group.bench_function("Resolve (hit)", |b| {
        b.iter(|| {
            for id in &ids {
                black_box(meta.resolve(id, &entities));
            }
        });
    });

    group.bench_function("Resolve (miss)", |b| {
        b.iter(|| black_box(meta.resolve("$0000-0000-0000-0000", &entities)));
    });

    let format = IdentifierFormat::default();
    group.bench_function("Generate identifier", |b| {
        b.iter(|| black_box(format.generate()));
    });

    group.finish();
}

criterion_group!(benches, bench_identity);
criterion_main!(benches);
