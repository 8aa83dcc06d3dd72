// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! [`KdTree`] storage, insertion, and the per-point radius/neighbor query.

use alloc::vec::Vec;
use core::fmt::{self, Debug};

use kurbo::Point;

use crate::error::{Error, Result};
use crate::node::{Node, NodeIdx};
use crate::types::Region;

/// Two-dimensional k-d tree over distinct points.
///
/// Nodes live in an arena in insertion order; the first point becomes the root.
/// There is no rebalancing, so the shape depends entirely on insertion order.
/// Sorted input degenerates into a list of depth `len()`; shuffle points first
/// if you want the expected `O(log n)` depth.
///
/// Insertion needs `&mut self`. Every query takes `&self`, so a built tree can be
/// shared across threads and queried concurrently.
#[derive(Clone, Default)]
pub struct KdTree {
    pub(crate) nodes: Vec<Node>,
    height: usize,
}

impl KdTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty tree with room for `n` points.
    pub fn with_capacity(n: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(n),
            height: 0,
        }
    }

    /// Build a tree by inserting `points` in the order given.
    ///
    /// Stops at the first point that cannot be inserted.
    pub fn try_from_points<I>(points: I) -> Result<Self>
    where
        I: IntoIterator<Item = Point>,
    {
        let points = points.into_iter();
        let mut tree = Self::with_capacity(points.size_hint().0);
        for point in points {
            tree.insert(point)?;
        }
        Ok(tree)
    }

    /// Number of stored points.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True if no point has been inserted.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of levels on the longest root-to-leaf path; zero when empty.
    pub fn depth(&self) -> usize {
        self.height
    }

    /// Stored points in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = Point> + '_ {
        self.nodes.iter().map(|n| n.point)
    }

    /// Whether `point` is stored.
    pub fn contains(&self, point: Point) -> bool {
        self.locate(point).is_some()
    }

    pub(crate) fn root(&self) -> Option<NodeIdx> {
        (!self.nodes.is_empty()).then_some(NodeIdx::ROOT)
    }

    #[inline]
    pub(crate) fn node(&self, idx: NodeIdx) -> &Node {
        &self.nodes[idx.get()]
    }

    /// Insert a point.
    ///
    /// The point descends from the root, going low when its coordinate on a
    /// node's axis is below the node's and high otherwise, and is attached at the
    /// first empty child slot.
    ///
    /// Fails with [`Error::DuplicatePoint`] if the point is already stored; the
    /// tree is left unchanged.
    pub fn insert(&mut self, point: Point) -> Result<()> {
        let Some(mut current) = self.root() else {
            self.nodes.push(Node::root(point));
            self.height = 1;
            tracing::trace!(x = point.x, y = point.y, depth = 1, "inserted root");
            return Ok(());
        };
        let mut depth = 1;
        loop {
            let node = self.node(current);
            if node.point == point {
                tracing::debug!(x = point.x, y = point.y, "rejected duplicate point");
                return Err(Error::DuplicatePoint {
                    x: point.x,
                    y: point.y,
                });
            }
            let side = node.side(point);
            depth += 1;
            if let Some(next) = node.child(side) {
                current = next;
                continue;
            }
            let child = node.spawn(point, side).inspect_err(|err| {
                tracing::warn!(%err, x = point.x, y = point.y, "corrupt node region");
            })?;
            let axis = child.axis;
            let idx = NodeIdx::new(self.nodes.len());
            self.nodes.push(child);
            self.nodes[current.get()].set_child(side, idx);
            self.height = self.height.max(depth);
            tracing::trace!(x = point.x, y = point.y, depth, %axis, "inserted point");
            return Ok(());
        }
    }

    /// Find the node storing exactly `point`.
    pub(crate) fn locate(&self, point: Point) -> Option<NodeIdx> {
        let mut current = self.root()?;
        loop {
            let node = self.node(current);
            if node.point == point {
                return Some(current);
            }
            current = node.child(node.side(point))?;
        }
    }

    /// Radius and neighbor count of a stored point.
    ///
    /// The radius is the distance to the nearest other stored point. The count is
    /// the number of stored points whose distance lies in `[radius, 2 * radius]`,
    /// both ends inclusive.
    ///
    /// Fails with [`Error::PointNotFound`] if `point` is not stored and with
    /// [`Error::EmptyIndex`] if it is the only one.
    pub fn radius_and_neighbors(&self, point: Point) -> Result<(f64, u64)> {
        let Some(idx) = self.locate(point) else {
            return Err(Error::PointNotFound {
                x: point.x,
                y: point.y,
            });
        };
        let center = self.node(idx).point;
        let (_, radius) = self.nearest_other(center)?;
        // A point whose computed distance is at most 2 * radius has a rounded
        // coordinate delta no larger, so its exact delta is at most one ulp past
        // 2 * radius. Rounding the square's bounds is monotone and keeps it inside.
        let reach = (2.0 * radius).next_up();
        let square = Region::centered_square(center, 2.0 * reach);
        let neighbors = self
            .range_search(&square)
            .filter(|&q| {
                let d = q.distance(center);
                radius <= d && d <= 2.0 * radius
            })
            .count();
        Ok((radius, neighbors as u64))
    }

    /// `(point, radius, neighbors)` for every stored point, in insertion order.
    pub fn radius_and_neighbors_all(&self) -> Result<Vec<(Point, f64, u64)>> {
        self.iter()
            .map(|p| {
                let (radius, neighbors) = self.radius_and_neighbors(p)?;
                Ok((p, radius, neighbors))
            })
            .collect()
    }
}

impl Debug for KdTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KdTree")
            .field("len", &self.nodes.len())
            .field("depth", &self.height)
            .finish_non_exhaustive()
    }
}
