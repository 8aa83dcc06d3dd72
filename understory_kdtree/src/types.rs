// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis-aligned regions with optional bounds on each side.

use core::fmt;

use kurbo::{Point, Rect, Vec2};

use crate::error::{Error, Result};

/// A coordinate axis of the plane.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The horizontal axis.
    X,
    /// The vertical axis.
    Y,
}

impl Axis {
    /// The axis used one level further down the tree.
    #[inline]
    pub const fn next(self) -> Self {
        match self {
            Self::X => Self::Y,
            Self::Y => Self::X,
        }
    }

    /// The coordinate of `point` on this axis.
    #[inline]
    pub const fn coord(self, point: Point) -> f64 {
        match self {
            Self::X => point.x,
            Self::Y => point.y,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::X => "x",
            Self::Y => "y",
        })
    }
}

/// Closed interval on one axis. A missing bound extends to infinity on that side.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Span {
    /// Lower bound, inclusive.
    pub min: Option<f64>,
    /// Upper bound, inclusive.
    pub max: Option<f64>,
}

impl Span {
    /// The whole axis.
    pub const UNBOUNDED: Self = Self {
        min: None,
        max: None,
    };

    /// Span from `min` to `max`, both inclusive.
    pub const fn between(min: f64, max: f64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    /// Span from `min` up to positive infinity.
    pub const fn at_least(min: f64) -> Self {
        Self {
            min: Some(min),
            max: None,
        }
    }

    /// Span from negative infinity up to `max`.
    pub const fn at_most(max: f64) -> Self {
        Self {
            min: None,
            max: Some(max),
        }
    }

    /// False if both bounds are present and inverted.
    pub fn is_valid(&self) -> bool {
        match (self.min, self.max) {
            (Some(min), Some(max)) => min <= max,
            _ => true,
        }
    }

    /// Whether `v` lies inside the span.
    #[inline]
    pub fn contains(&self, v: f64) -> bool {
        self.min.is_none_or(|min| min <= v) && self.max.is_none_or(|max| v <= max)
    }

    /// Whether the two spans share at least one value.
    #[inline]
    pub fn overlaps(&self, other: &Self) -> bool {
        let lower_ok = match (self.min, other.max) {
            (Some(min), Some(max)) => min <= max,
            _ => true,
        };
        let upper_ok = match (other.min, self.max) {
            (Some(min), Some(max)) => min <= max,
            _ => true,
        };
        lower_ok && upper_ok
    }

    /// Distance from `v` to the nearest value in the span; zero inside.
    #[inline]
    pub fn gap_to(&self, v: f64) -> f64 {
        match (self.min, self.max) {
            (Some(min), _) if v < min => min - v,
            (_, Some(max)) if max < v => v - max,
            _ => 0.0,
        }
    }
}

/// Axis-aligned region of the plane, possibly unbounded on any side.
///
/// Every node of a [`KdTree`](crate::KdTree) carries the region its subtree lives in.
/// The root region is [`Region::EVERYTHING`]; each level cuts one axis in two.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Region {
    /// Extent along x.
    pub x: Span,
    /// Extent along y.
    pub y: Span,
}

impl Region {
    /// The whole plane.
    pub const EVERYTHING: Self = Self {
        x: Span::UNBOUNDED,
        y: Span::UNBOUNDED,
    };

    /// Create a region from its per-axis spans.
    ///
    /// Both spans must have `min <= max` where both bounds are present.
    pub fn new(x: Span, y: Span) -> Self {
        debug_assert!(
            x.is_valid() && y.is_valid(),
            "inverted span in region {x:?} x {y:?}"
        );
        Self { x, y }
    }

    /// Square of full side length `side` centered at `center`.
    ///
    /// `side` must not be negative.
    pub fn centered_square(center: Point, side: f64) -> Self {
        let half = side / 2.0;
        Self::new(
            Span::between(center.x - half, center.x + half),
            Span::between(center.y - half, center.y + half),
        )
    }

    /// The span on `axis`.
    #[inline]
    pub const fn span(&self, axis: Axis) -> Span {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    /// Copy of this region with the span on `axis` replaced.
    #[inline]
    pub const fn with_span(mut self, axis: Axis, span: Span) -> Self {
        match axis {
            Axis::X => self.x = span,
            Axis::Y => self.y = span,
        }
        self
    }

    /// Whether this region contains the point. Bounds are inclusive.
    #[inline]
    pub fn contains_point(&self, point: Point) -> bool {
        self.x.contains(point.x) && self.y.contains(point.y)
    }

    /// Whether the two regions share at least one point.
    #[inline]
    pub fn intersects(&self, other: &Self) -> bool {
        self.x.overlaps(&other.x) && self.y.overlaps(&other.y)
    }

    /// Shortest Euclidean distance from `point` to any point of the region.
    ///
    /// Zero when the point is inside. Never larger than the distance to a point
    /// the region contains, which is what nearest-neighbor pruning relies on.
    #[inline]
    pub fn distance_to(&self, point: Point) -> f64 {
        Vec2::new(self.x.gap_to(point.x), self.y.gap_to(point.y)).hypot()
    }

    /// Cut the region at `value` on `axis`, returning the `(low, high)` halves.
    ///
    /// Both halves keep `value` as an inclusive bound. The tree only ever routes
    /// coordinates strictly below `value` to the low half, so the shared edge is
    /// harmless for pruning.
    ///
    /// Fails with [`Error::InvalidSplit`] when `value` is outside the current span on `axis`.
    pub fn split(&self, value: f64, axis: Axis) -> Result<(Self, Self)> {
        let span = self.span(axis);
        if !span.contains(value) {
            return Err(Error::InvalidSplit { value, axis });
        }
        let low = Span {
            min: span.min,
            max: Some(value),
        };
        let high = Span {
            min: Some(value),
            max: span.max,
        };
        Ok((self.with_span(axis, low), self.with_span(axis, high)))
    }

    /// The equivalent `Rect`, if the region is bounded on every side.
    pub fn to_rect(&self) -> Option<Rect> {
        Some(Rect::new(self.x.min?, self.y.min?, self.x.max?, self.y.max?))
    }
}

impl From<Rect> for Region {
    fn from(rect: Rect) -> Self {
        let rect = rect.abs();
        Self {
            x: Span::between(rect.x0, rect.x1),
            y: Span::between(rect.y0, rect.y1),
        }
    }
}
