// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect};
use understory_kdtree::{KdTree, Region};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
    fn below(&mut self, n: usize) -> usize {
        (self.next_u64() % n as u64) as usize
    }
}

fn gen_random_points(count: usize, extent: f64) -> Vec<Point> {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    (0..count)
        .map(|_| Point::new(rng.next_f64() * extent, rng.next_f64() * extent))
        .collect()
}

fn gen_clustered_points(n_clusters: usize, per_cluster: usize, spread: f64) -> Vec<Point> {
    let mut out = Vec::with_capacity(n_clusters * per_cluster);
    let mut rng = Rng::new(0xC1A5_7E55_9999_ABCD);
    let mut centers = Vec::with_capacity(n_clusters);
    for _ in 0..n_clusters {
        centers.push((rng.next_f64() * 2000.0, rng.next_f64() * 2000.0));
    }
    for (cx, cy) in centers {
        for _ in 0..per_cluster {
            let dx = (rng.next_f64() - 0.5) * spread;
            let dy = (rng.next_f64() - 0.5) * spread;
            out.push(Point::new(cx + dx, cy + dy));
        }
    }
    out
}

/// Row-major lattice; inserting it as-is is the sorted worst case.
fn gen_sorted_lattice(n: usize) -> Vec<Point> {
    let mut out = Vec::with_capacity(n * n);
    for x in 0..n {
        for y in 0..n {
            out.push(Point::new(x as f64, y as f64));
        }
    }
    out
}

fn shuffled(mut points: Vec<Point>) -> Vec<Point> {
    let mut rng = Rng::new(0xBADC_F00D_1234_5678);
    for i in (1..points.len()).rev() {
        let j = rng.below(i + 1);
        points.swap(i, j);
    }
    points
}

fn brute_force_radius_and_neighbors(points: &[Point]) -> u64 {
    let mut total = 0;
    for &p in points {
        let radius = points
            .iter()
            .filter(|&&q| q != p)
            .map(|q| q.distance(p))
            .fold(f64::INFINITY, f64::min);
        total += points
            .iter()
            .map(|q| q.distance(p))
            .filter(|&d| radius <= d && d <= 2.0 * radius)
            .count() as u64;
    }
    total
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    for &n in &[32usize, 64] {
        let sorted = gen_sorted_lattice(n);
        let random = shuffled(sorted.clone());
        group.throughput(Throughput::Elements((n * n) as u64));
        group.bench_function(format!("insert_shuffled_n{}", n), |b| {
            b.iter_batched(
                || KdTree::with_capacity(random.len()),
                |mut tree| {
                    for &p in &random {
                        tree.insert(p).unwrap();
                    }
                    black_box(tree.depth());
                },
                BatchSize::SmallInput,
            )
        });
        group.bench_function(format!("insert_sorted_n{}", n), |b| {
            b.iter_batched(
                || KdTree::with_capacity(sorted.len()),
                |mut tree| {
                    for &p in &sorted {
                        tree.insert(p).unwrap();
                    }
                    black_box(tree.depth());
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_nearest(c: &mut Criterion) {
    let mut group = c.benchmark_group("nearest_other");
    for &count in &[1_000usize, 10_000] {
        let points = gen_random_points(count, 2000.0);
        let tree = KdTree::try_from_points(points.iter().copied()).unwrap();
        group.throughput(Throughput::Elements(count as u64));
        group.bench_function(format!("uniform_n{}", count), |b| {
            b.iter(|| {
                for &p in &points {
                    black_box(tree.nearest_other(p).unwrap());
                }
            })
        });
    }
    let points = shuffled(gen_clustered_points(32, 128, 40.0));
    let tree = KdTree::try_from_points(points.iter().copied()).unwrap();
    group.bench_function("clustered", |b| {
        b.iter(|| {
            for &p in &points {
                black_box(tree.nearest_other(p).unwrap());
            }
        })
    });
    group.finish();
}

fn bench_range(c: &mut Criterion) {
    let mut group = c.benchmark_group("range_search");
    let points = gen_random_points(10_000, 2000.0);
    let tree = KdTree::try_from_points(points.iter().copied()).unwrap();
    for &side in &[50.0_f64, 400.0] {
        let query = Region::from(Rect::new(800.0, 800.0, 800.0 + side, 800.0 + side));
        group.bench_function(format!("square_{}", side), |b| {
            b.iter(|| black_box(tree.range_search(&query).count()))
        });
    }
    group.finish();
}

fn bench_radius_and_neighbors(c: &mut Criterion) {
    let mut group = c.benchmark_group("radius_and_neighbors");
    for &count in &[500usize, 2_000] {
        let points = gen_random_points(count, 2000.0);
        let tree = KdTree::try_from_points(points.iter().copied()).unwrap();
        group.throughput(Throughput::Elements(count as u64));
        group.bench_function(format!("kdtree_n{}", count), |b| {
            b.iter(|| black_box(tree.radius_and_neighbors_all().unwrap().len()))
        });
        #[cfg(feature = "parallel")]
        group.bench_function(format!("kdtree_parallel_n{}", count), |b| {
            b.iter(|| black_box(tree.par_radius_and_neighbors_all().unwrap().len()))
        });
        group.bench_function(format!("brute_force_n{}", count), |b| {
            b.iter(|| black_box(brute_force_radius_and_neighbors(&points)))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_build,
    bench_nearest,
    bench_range,
    bench_radius_and_neighbors
);
criterion_main!(benches);
