use criterion::{Criterion, black_box, criterion_group, criterion_main};
use qimen_base::palace::OUTER_PALACES;
use qimen_base::rotate;

fn bench_rotate(c: &mut Criterion) {
    c.bench_function("rotate_full_ring", |b| {
        b.iter(|| {
            for p in OUTER_PALACES {
                for s in 0..9u8 {
                    black_box(rotate(black_box(p), black_box(s), true));
                    black_box(rotate(black_box(p), black_box(s), false));
                }
            }
        })
    });
}

criterion_group!(benches, bench_rotate);
criterion_main!(benches);
