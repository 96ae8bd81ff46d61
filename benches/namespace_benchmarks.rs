use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

use gl_namespace::{GroupKey, ObjectNameManager, ObjectType};

// ---------------------------------------------------------------------------
// Name generation
// ---------------------------------------------------------------------------

fn bench_gen_name_1k(c: &mut Criterion) {
    c.bench_function("gen_name_texture_1k", |b| {
        b.iter_batched(
            || {
                let manager: ObjectNameManager = ObjectNameManager::new();
                manager.create_share_group(GroupKey(1))
            },
            |group| {
                for _ in 0..1000 {
                    black_box(group.gen_name(ObjectType::Texture, 0));
                }
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_gen_delete_churn(c: &mut Criterion) {
    let manager: ObjectNameManager = ObjectNameManager::new();
    let group = manager.create_share_group(GroupKey(1));
    c.bench_function("gen_delete_churn", |b| {
        b.iter(|| {
            let local = group.gen_name(ObjectType::VertexBuffer, 0);
            group.delete_name(ObjectType::VertexBuffer, black_box(local));
        });
    });
}

// ---------------------------------------------------------------------------
// Lookup
// ---------------------------------------------------------------------------

fn bench_lookup(c: &mut Criterion) {
    let manager: ObjectNameManager = ObjectNameManager::new();
    let group = manager.create_share_group(GroupKey(1));
    let locals: Vec<u32> = (0..1024)
        .map(|_| group.gen_name(ObjectType::Texture, 0))
        .collect();
    let globals: Vec<u32> = locals
        .iter()
        .map(|&l| group.global_name(ObjectType::Texture, l))
        .collect();

    c.bench_function("global_name_lookup_1k", |b| {
        b.iter(|| {
            for &local in &locals {
                black_box(group.global_name(ObjectType::Texture, local));
            }
        });
    });

    c.bench_function("local_name_lookup_1k", |b| {
        b.iter(|| {
            for &global in &globals {
                black_box(group.local_name(ObjectType::Texture, global));
            }
        });
    });
}

fn bench_registry_lookup(c: &mut Criterion) {
    let manager: ObjectNameManager = ObjectNameManager::new();
    for key in 0..64 {
        manager.create_share_group(GroupKey(key));
    }
    c.bench_function("get_share_group", |b| {
        b.iter(|| black_box(manager.get_share_group(&GroupKey(black_box(31)))));
    });
}

criterion_group!(
    benches,
    bench_gen_name_1k,
    bench_gen_delete_churn,
    bench_lookup,
    bench_registry_lookup,
);
criterion_main!(benches);
