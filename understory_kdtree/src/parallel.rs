// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-point queries fanned out over the rayon thread pool.

use alloc::vec::Vec;

use kurbo::Point;
use rayon::prelude::*;

use crate::error::Result;
use crate::tree::KdTree;

impl KdTree {
    /// Parallel version of [`KdTree::radius_and_neighbors_all`].
    ///
    /// Results come back in insertion order, identical to the sequential version.
    pub fn par_radius_and_neighbors_all(&self) -> Result<Vec<(Point, f64, u64)>> {
        self.nodes
            .par_iter()
            .map(|node| {
                let (radius, neighbors) = self.radius_and_neighbors(node.point)?;
                Ok((node.point, radius, neighbors))
            })
            .collect()
    }
}
