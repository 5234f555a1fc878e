use std::f64::consts::PI;

use geo::{rotate::RotatePoint, Coordinate, Line, Rect};

use rand::Rng;
use rand_distr::{Distribution, Normal, Standard};

#[inline]
pub fn uniform_point<R: Rng>(rng: &mut R, bounds: Rect<f64>) -> Coordinate<f64> {
    let coords: [f64; 2] = rng.sample(Standard);
    let dims = bounds.max() - bounds.min();
    Coordinate {
        x: bounds.min().x + dims.x * coords[0],
        y: bounds.min().y + dims.y * coords[1],
    }
}

#[inline]
pub fn uniform_line<R: Rng>(rng: &mut R, bounds: Rect<f64>) -> Line<f64> {
    Line::new(uniform_point(rng, bounds), uniform_point(rng, bounds))
}

#[inline]
#[allow(dead_code)]
pub fn uniform_line_with_length<R: Rng>(rng: &mut R, bounds: Rect<f64>, length: f64) -> Line<f64> {
    let start = uniform_point(rng, bounds);
    let line = Line::new(start, start + (length, 0.).into());
    let angle = rng.sample::<f64, _>(Standard) * 2. * PI;
    line.rotate_around_point(angle, start.into())
}

/// `n` uniform points in `bounds`, as an `XY` flat buffer.
#[allow(dead_code)]
pub fn uniform_flat_points<R: Rng>(rng: &mut R, bounds: Rect<f64>, n: usize) -> Vec<f64> {
    (0..n)
        .flat_map(|_| {
            let c = uniform_point(rng, bounds);
            [c.x, c.y]
        })
        .collect()
}

/// `n` points normally distributed around `center`, as an `XY` flat
/// buffer. Most of them fall well inside the hull.
#[allow(dead_code)]
pub fn normal_flat_points<R: Rng>(
    rng: &mut R,
    center: Coordinate<f64>,
    std_dev: f64,
    n: usize,
) -> Vec<f64> {
    let x = Normal::new(center.x, std_dev).unwrap();
    let y = Normal::new(center.y, std_dev).unwrap();
    (0..n)
        .flat_map(|_| [x.sample(rng), y.sample(rng)])
        .collect()
}
