// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arena nodes of the k-d tree.

use kurbo::Point;

use crate::error::Result;
use crate::types::{Axis, Region};

/// Index of a node in the tree arena.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) struct NodeIdx(usize);

impl NodeIdx {
    /// The first inserted point always owns the root.
    pub(crate) const ROOT: Self = Self(0);

    pub(crate) const fn new(i: usize) -> Self {
        Self(i)
    }

    pub(crate) const fn get(self) -> usize {
        self.0
    }
}

/// Which child of a node a coordinate routes to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Side {
    /// Strictly below the node's coordinate on its axis.
    Low,
    /// At or above the node's coordinate on its axis.
    High,
}

#[derive(Clone, Debug)]
pub(crate) struct Node {
    pub(crate) point: Point,
    /// Axis this node splits its descendants on.
    pub(crate) axis: Axis,
    /// Region holding this node's point and its whole subtree.
    pub(crate) region: Region,
    low: Option<NodeIdx>,
    high: Option<NodeIdx>,
}

impl Node {
    pub(crate) const fn root(point: Point) -> Self {
        Self {
            point,
            axis: Axis::X,
            region: Region::EVERYTHING,
            low: None,
            high: None,
        }
    }

    #[inline]
    pub(crate) fn side(&self, point: Point) -> Side {
        if self.axis.coord(point) < self.axis.coord(self.point) {
            Side::Low
        } else {
            Side::High
        }
    }

    #[inline]
    pub(crate) const fn child(&self, side: Side) -> Option<NodeIdx> {
        match side {
            Side::Low => self.low,
            Side::High => self.high,
        }
    }

    pub(crate) fn set_child(&mut self, side: Side, idx: NodeIdx) {
        let slot = match side {
            Side::Low => &mut self.low,
            Side::High => &mut self.high,
        };
        debug_assert!(slot.is_none(), "child slot {side:?} is already occupied");
        *slot = Some(idx);
    }

    /// Existing children, low first.
    #[inline]
    pub(crate) fn children(&self) -> impl Iterator<Item = NodeIdx> {
        self.low.into_iter().chain(self.high)
    }

    /// Build the node that stores `point` under `side` of this node.
    pub(crate) fn spawn(&self, point: Point, side: Side) -> Result<Self> {
        let (low, high) = self.region.split(self.axis.coord(self.point), self.axis)?;
        let region = match side {
            Side::Low => low,
            Side::High => high,
        };
        debug_assert!(
            region.contains_point(point),
            "point {point:?} routed outside its region {region:?}"
        );
        Ok(Self {
            point,
            axis: self.axis.next(),
            region,
            low: None,
            high: None,
        })
    }
}
