// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_kdtree --heading-base-level=0

//! Understory k-d tree: a two-dimensional point index with exact nearest-neighbor and range queries.
//!
//! - Insert distinct points one at a time; the tree alternates between splitting on x and on y.
//! - Find the closest *other* stored point with a best-first, branch-and-bound search.
//! - Collect every point inside an axis-aligned [`Region`], pruning subtrees that cannot match.
//! - Compute a point's *radius* (distance to its nearest other point) and its *neighbor count*
//!   (points at distance between one and two radii, inclusive).
//!
//! Points are [`kurbo::Point`]s. Regions may be unbounded on any side, which is how the root
//! covers the whole plane.
//!
//! # Example
//!
//! ```rust
//! use kurbo::Point;
//! use understory_kdtree::KdTree;
//!
//! let mut tree = KdTree::new();
//! for p in [Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(3.0, 0.0)] {
//!     tree.insert(p).unwrap();
//! }
//!
//! // (1, 0) is one away from the origin and two away from (3, 0).
//! let (radius, neighbors) = tree.radius_and_neighbors(Point::new(1.0, 0.0)).unwrap();
//! assert_eq!(radius, 1.0);
//! assert_eq!(neighbors, 2);
//!
//! let (nearest, distance) = tree.nearest_other(Point::new(3.0, 0.0)).unwrap();
//! assert_eq!(nearest, Point::new(1.0, 0.0));
//! assert_eq!(distance, 2.0);
//! ```
//!
//! Range queries take a [`Region`], which converts from a [`kurbo::Rect`]:
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use understory_kdtree::{KdTree, Region};
//!
//! let tree = KdTree::try_from_points([
//!     Point::new(1.0, 1.0),
//!     Point::new(5.0, 5.0),
//!     Point::new(2.0, 3.0),
//! ])
//! .unwrap();
//!
//! let mut hits: Vec<_> = tree.range_search(&Region::from(Rect::new(0.0, 0.0, 3.0, 3.0))).collect();
//! hits.sort_by(|a, b| a.x.total_cmp(&b.x));
//! assert_eq!(hits, [Point::new(1.0, 1.0), Point::new(2.0, 3.0)]);
//! ```
//!
//! ## Insertion order
//!
//! The tree is never rebalanced. Inserting sorted points builds a tree as deep as the
//! number of points, and queries degrade to linear time. Shuffle the input first to get
//! the expected logarithmic depth; the tree does not do this for you.
//!
//! ## Concurrency
//!
//! Queries take `&self`. Once built, a [`KdTree`] can be shared between threads and
//! queried without locking. With the `parallel` feature,
//! [`KdTree::par_radius_and_neighbors_all`] does this on the rayon pool.
//!
//! ## Features
//!
//! - `std` (default): forwards to Kurbo's `std` feature.
//! - `libm`: float math for `no_std` builds, via Kurbo.
//! - `parallel`: rayon-backed bulk queries; implies `std`.
//!
//! ### Float semantics
//!
//! Coordinates must be finite. Points are compared with `==`, so `0.0` and `-0.0` are the
//! same point.

#![no_std]

extern crate alloc;

pub mod error;
pub mod types;

mod node;
#[cfg(feature = "parallel")]
mod parallel;
mod search;
mod tree;

pub use error::{Error, Result};
pub use tree::KdTree;
pub use types::{Axis, Region, Span};
