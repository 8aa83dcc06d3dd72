// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error type shared by tree construction and queries.

use crate::types::Axis;

/// Errors reported by [`KdTree`](crate::KdTree) and [`Region`](crate::Region).
#[derive(Copy, Clone, Debug, PartialEq, thiserror::Error)]
pub enum Error {
    /// A nearest-neighbor query needs at least two stored points.
    #[error("nearest-neighbor search needs at least two stored points, the tree holds {len}")]
    EmptyIndex {
        /// Number of points stored when the query was issued.
        len: usize,
    },

    /// The queried point is not stored in the tree.
    #[error("point ({x}, {y}) is not stored in the tree")]
    PointNotFound {
        /// Query x coordinate.
        x: f64,
        /// Query y coordinate.
        y: f64,
    },

    /// The point is already stored in the tree.
    #[error("point ({x}, {y}) is already stored in the tree")]
    DuplicatePoint {
        /// Rejected x coordinate.
        x: f64,
        /// Rejected y coordinate.
        y: f64,
    },

    /// A region was cut outside its own span.
    ///
    /// Insertion never produces this on a well-formed tree; seeing it means a
    /// node region was corrupted.
    #[error("cannot split region at {value} on the {axis} axis: value lies outside the region")]
    InvalidSplit {
        /// Requested split coordinate.
        value: f64,
        /// Axis of the split.
        axis: Axis,
    },
}

/// Result alias for tree operations.
pub type Result<T> = core::result::Result<T, Error>;
