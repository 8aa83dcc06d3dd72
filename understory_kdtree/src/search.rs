// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Nearest-neighbor and range queries over a [`KdTree`].

use alloc::collections::BinaryHeap;
use alloc::vec::Vec;
use core::cmp::Ordering;

use kurbo::Point;

use crate::error::{Error, Result};
use crate::node::NodeIdx;
use crate::tree::KdTree;
use crate::types::Region;

/// Pending node in the best-first search, keyed on the distance from the query
/// to the node's region.
#[derive(Copy, Clone, Debug)]
struct Candidate {
    bound: f64,
    /// Push order, breaks ties between equal bounds.
    seq: u64,
    node: NodeIdx,
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so the max-heap pops the smallest bound first.
        other
            .bound
            .total_cmp(&self.bound)
            .then(other.seq.cmp(&self.seq))
    }
}

#[derive(Default)]
struct Frontier {
    heap: BinaryHeap<Candidate>,
    pushed: u64,
}

impl Frontier {
    fn push(&mut self, node: NodeIdx, bound: f64) {
        self.heap.push(Candidate {
            bound,
            seq: self.pushed,
            node,
        });
        self.pushed += 1;
    }
}

impl KdTree {
    /// Closest stored point to `point` other than `point` itself, with its distance.
    ///
    /// `point` does not need to be stored; if it is, it is never its own answer.
    /// When several points are equally close, any one of them may be returned.
    ///
    /// Nodes are expanded best-first by the distance from `point` to their region.
    /// That distance never exceeds the distance to any point in the subtree, so
    /// once the closest pending region is farther than the best point found, the
    /// search is done.
    ///
    /// Fails with [`Error::EmptyIndex`] if fewer than two points are stored.
    pub fn nearest_other(&self, point: Point) -> Result<(Point, f64)> {
        let len = self.len();
        let Some(root) = self.root().filter(|_| len >= 2) else {
            return Err(Error::EmptyIndex { len });
        };

        let mut frontier = Frontier::default();
        let mut best: Option<NodeIdx> = None;
        let mut best_distance = f64::INFINITY;

        let root_node = self.node(root);
        if root_node.point != point {
            best = Some(root);
            best_distance = root_node.point.distance(point);
            frontier.push(root, 0.0);
        } else {
            // The root is the query itself; start from its children instead.
            for child in root_node.children() {
                let c = self.node(child);
                let d = c.point.distance(point);
                if d < best_distance {
                    best = Some(child);
                    best_distance = d;
                }
                frontier.push(child, c.region.distance_to(point));
            }
        }

        let mut expanded = 0_usize;
        while let Some(Candidate { bound, node, .. }) = frontier.heap.pop() {
            if bound > best_distance {
                // Every remaining candidate is at least this far away.
                break;
            }
            expanded += 1;
            for child in self.node(node).children() {
                let c = self.node(child);
                let d = c.point.distance(point);
                if 0.0 < d && d < best_distance {
                    best = Some(child);
                    best_distance = d;
                }
                frontier.push(child, c.region.distance_to(point));
            }
        }

        let Some(best) = best else {
            return Err(Error::EmptyIndex { len });
        };
        let found = self.node(best).point;
        tracing::debug!(
            x = point.x,
            y = point.y,
            expanded,
            pushed = frontier.pushed,
            distance = best_distance,
            "nearest-neighbor search"
        );
        Ok((found, best_distance))
    }

    /// Every stored point inside `region` (bounds inclusive), in no particular order.
    ///
    /// Subtrees whose region does not intersect `region` are skipped entirely.
    pub fn range_search(&self, region: &Region) -> impl Iterator<Item = Point> + '_ {
        let mut out = Vec::new();
        let mut visited = 0_usize;
        let mut stack: Vec<NodeIdx> = self.root().into_iter().collect();
        while let Some(idx) = stack.pop() {
            visited += 1;
            let node = self.node(idx);
            if region.contains_point(node.point) {
                out.push(node.point);
            }
            stack.extend(
                node.children()
                    .filter(|&child| self.node(child).region.intersects(region)),
            );
        }
        tracing::debug!(visited, matched = out.len(), "range search");
        out.into_iter()
    }
}
