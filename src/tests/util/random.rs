use std::{f64::consts::TAU, ops::Range};

use rand::{Rng, SeedableRng, rngs::StdRng};

/// A reproducible generator
pub fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// A counterclockwise star-shaped polygon around `center`, with one vertex in each of `n` equal angular sectors
pub fn star<R: Rng>(rng: &mut R, n: usize, center: [f64; 2], radius: Range<f64>) -> Vec<[f64; 2]> {
    (0..n).map(|k| {
        let theta = (k as f64 + rng.gen_range(0.0..0.9)) * TAU / n as f64;
        let r = rng.gen_range(radius.clone());
        let (sin, cos) = theta.sin_cos();
        [center[0] + cos * r, center[1] + sin * r]
    }).collect()
}

/// A star border of `vertices` vertices with up to `max_holes` (at most 3) small star holes near its center
pub fn polygon_with_holes<R: Rng>(rng: &mut R, vertices: usize, max_holes: usize) -> Vec<Vec<[f64; 2]>> {
    let mut polygon_list = vec![star(rng, vertices, [0., 0.], 60.0..100.0)];

    let hole_count = rng.gen_range(0..=max_holes.min(3));
    for k in 0..hole_count {
        let center = [-12. + 9. * k as f64, rng.gen_range(-5.0..5.0)];
        let n = rng.gen_range(3..=6);
        polygon_list.push(star(rng, n, center, 1.0..3.5));
    }
    polygon_list
}
