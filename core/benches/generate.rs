use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use sweeper_core::*;

const TIERS: [(&str, Coord, Coord, CellCount); 3] = [
    ("beginner", 9, 9, 10),
    ("intermediate", 16, 16, 40),
    ("expert", 16, 30, 99),
];

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    for (name, rows, columns, mines) in TIERS {
        let config = FieldConfig::new(rows, columns, mines).unwrap();
        group.bench_function(name, |b| {
            let mut seed = 0;
            b.iter(|| {
                seed += 1;
                black_box(Field::generate(config, RandomMinefieldGenerator::new(seed)))
            })
        });
    }
    group.finish();
}

fn bench_flood_open(c: &mut Criterion) {
    // a single mine in the corner leaves one zero region covering the rest of the field
    let layout = MineLayout::from_mine_coords((255, 255), &[(0, 0)]).unwrap();
    let field = Field::from_layout(&layout);
    c.bench_function("flood_open_255x255", |b| {
        b.iter(|| {
            let mut field = field.clone();
            black_box(field.open_tile((254, 254)).unwrap())
        })
    });
}

criterion_group!(benches, bench_generate, bench_flood_open);
criterion_main!(benches);
