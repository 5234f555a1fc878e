use criterion::*;
use geo::{
    kernels::{Kernel, RobustKernel},
    Coordinate, Rect,
};

#[path = "utils/random.rs"]
mod random;
use flat_cga::orientation;
use rand::thread_rng;
use random::*;

const NUM_TRIPLES: usize = 1024;

fn random_triples(c: &mut Criterion) {
    let bbox: Rect<f64> = Rect::new([0., 0.], [1024., 1024.]);
    let pts: Vec<_> = (0..NUM_TRIPLES * 3)
        .map(|_| uniform_point(&mut thread_rng(), bbox))
        .collect();
    let flat: Vec<[f64; 2]> = pts.iter().map(|c| [c.x, c.y]).collect();

    c.bench_function("orientation - random triples", |b| {
        b.iter(|| {
            for t in flat.chunks_exact(3) {
                black_box(orientation(&t[0], &t[1], &t[2]));
            }
        })
    });
    c.bench_function("geo robust - random triples", |b| {
        b.iter(|| {
            for t in pts.chunks_exact(3) {
                black_box(RobustKernel::orient2d(t[0], t[1], t[2]));
            }
        })
    });
}

fn nearly_collinear(c: &mut Criterion) {
    // points within rounding error of the line y = x, so the filter
    // rarely certifies the sign
    let pts: Vec<[Coordinate<f64>; 3]> = (0..NUM_TRIPLES)
        .map(|i| {
            let t = 0.5 + i as f64 * 1e-3;
            [
                Coordinate { x: 12., y: 12. },
                Coordinate { x: 24., y: 24. },
                Coordinate { x: t, y: t + 1e-17 * (i % 3) as f64 },
            ]
        })
        .collect();
    let flat: Vec<[[f64; 2]; 3]> = pts
        .iter()
        .map(|t| [[t[0].x, t[0].y], [t[1].x, t[1].y], [t[2].x, t[2].y]])
        .collect();

    c.bench_function("orientation - nearly collinear", |b| {
        b.iter(|| {
            for t in flat.iter() {
                black_box(orientation(&t[0], &t[1], &t[2]));
            }
        })
    });
    c.bench_function("geo robust - nearly collinear", |b| {
        b.iter(|| {
            for t in pts.iter() {
                black_box(RobustKernel::orient2d(t[0], t[1], t[2]));
            }
        })
    });
}

criterion_group!(benches, random_triples, nearly_collinear);
criterion_main!(benches);
