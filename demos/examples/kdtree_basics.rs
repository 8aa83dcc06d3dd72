// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! K-d tree basics.
//!
//! Insert three points on a line, then run nearest-neighbor, range, and
//! radius/neighbor queries.
//!
//! Run:
//! - `cargo run -p understory_demos --example kdtree_basics`

use kurbo::{Point, Rect};
use understory_kdtree::{KdTree, Region};

fn main() {
    let mut tree = KdTree::new();
    for p in [Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(3.0, 0.0)] {
        tree.insert(p).unwrap();
    }
    println!("tree: {tree:?}");

    // Duplicates are rejected.
    let err = tree.insert(Point::new(1.0, 0.0)).unwrap_err();
    println!("second insert of (1, 0): {err}");

    let (nearest, distance) = tree.nearest_other(Point::new(3.0, 0.0)).unwrap();
    println!("nearest to (3, 0): {nearest:?} at {distance}");

    let hits: Vec<_> = tree
        .range_search(&Region::from(Rect::new(0.5, -1.0, 3.5, 1.0)))
        .collect();
    println!("points in [0.5, 3.5] x [-1, 1]: {hits:?}");

    for (point, radius, neighbors) in tree.radius_and_neighbors_all().unwrap() {
        println!("({}, {}): radius {radius}, neighbors {neighbors}", point.x, point.y);
    }
}
