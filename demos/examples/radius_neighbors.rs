// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Radius and neighbor count of every point in a file.
//!
//! The file holds one point per line as two whitespace-separated numbers. For each
//! point, sorted by x and then y, this prints `(x, y): radius r, neighbors n`, where `r` is the
//! distance to the nearest other point and `n` counts points between `r` and `2r` away.
//!
//! Run:
//! - `cargo run -p understory_demos --example radius_neighbors -- points.txt`
//! - `RUST_LOG=understory_kdtree=debug cargo run -p understory_demos --example radius_neighbors -- points.txt --seed 7`
//! - `cargo run -p understory_demos --features parallel --example radius_neighbors -- points.txt`

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use kurbo::Point;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use understory_demos::{format_result, init_tracing, load_points, sort_by_position};
use understory_kdtree::{KdTree, Result};

#[derive(Debug, Parser)]
#[command(about = "Compute the radius and neighbor count of every point in a file")]
struct Args {
    /// File with one `x y` pair per line.
    file: PathBuf,

    /// Seed for the insertion shuffle that keeps the tree balanced.
    #[arg(long, default_value_t = 0x5EED)]
    seed: u64,
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    let mut points = match load_points(&args.file) {
        Ok(points) => points,
        Err(err) => {
            eprintln!("Error: {err}");
            return ExitCode::FAILURE;
        }
    };

    // Insert in random order; sorted files would otherwise build a list.
    let mut order = points.clone();
    order.shuffle(&mut StdRng::seed_from_u64(args.seed));
    let tree = match KdTree::try_from_points(order) {
        Ok(tree) => tree,
        Err(err) => {
            eprintln!("Error: {err}");
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(len = tree.len(), depth = tree.depth(), "built tree");

    sort_by_position(&mut points);

    match radius_and_neighbors(&tree, &points) {
        Ok(results) => {
            for (point, (radius, neighbors)) in points.into_iter().zip(results) {
                println!("{}", format_result(point, radius, neighbors));
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Results for `points`, in the same order.
#[cfg(not(feature = "parallel"))]
fn radius_and_neighbors(tree: &KdTree, points: &[Point]) -> Result<Vec<(f64, u64)>> {
    points.iter().map(|&p| tree.radius_and_neighbors(p)).collect()
}

/// Results for `points`, in the same order, computed on the rayon pool.
#[cfg(feature = "parallel")]
fn radius_and_neighbors(tree: &KdTree, points: &[Point]) -> Result<Vec<(f64, u64)>> {
    use rayon::prelude::*;

    points
        .par_iter()
        .map(|&p| tree.radius_and_neighbors(p))
        .collect()
}
