// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the Understory k-d tree demos: loading and validating point files.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use kurbo::Point;

/// Reasons a point file cannot be used.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("cannot read point file: {0}")]
    Io(#[from] std::io::Error),

    /// A field is not a number.
    #[error("invalid file format: line {line}: {field:?} is not a number")]
    InvalidNumber {
        /// One-based line number.
        line: usize,
        /// The offending field.
        field: String,
    },

    /// A line does not hold exactly two numbers.
    #[error("expected 2 numbers on a line, found {found} on line {line}")]
    WrongArity {
        /// One-based line number.
        line: usize,
        /// Number of fields on the line.
        found: usize,
    },

    /// A non-finite coordinate.
    #[error("line {line}: coordinates must be finite")]
    NotFinite {
        /// One-based line number.
        line: usize,
    },

    /// Fewer than two points.
    #[error("at least 2 points expected, found {0}")]
    TooFewPoints(usize),

    /// The same coordinates appear twice.
    #[error("duplicate points are not supported: ({x}, {y}) appears on line {line} again")]
    Duplicate {
        /// One-based line number of the repeat.
        line: usize,
        /// Repeated x coordinate.
        x: f64,
        /// Repeated y coordinate.
        y: f64,
    },
}

/// Parse whitespace-separated `x y` pairs, one point per line.
///
/// Blank lines are skipped. The result keeps file order.
pub fn parse_points(text: &str) -> Result<Vec<Point>, LoadError> {
    let mut points = Vec::new();
    let mut seen = HashSet::new();
    for (i, raw) in text.lines().enumerate() {
        let line = i + 1;
        let fields: Vec<&str> = raw.split_whitespace().collect();
        if fields.is_empty() {
            continue;
        }
        let coords = fields
            .iter()
            .map(|field| {
                field.parse::<f64>().map_err(|_| LoadError::InvalidNumber {
                    line,
                    field: (*field).to_owned(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        let &[x, y] = coords.as_slice() else {
            return Err(LoadError::WrongArity {
                line,
                found: coords.len(),
            });
        };
        if !x.is_finite() || !y.is_finite() {
            return Err(LoadError::NotFinite { line });
        }
        // Normalize -0.0 so the set agrees with `Point` equality.
        let key = ((x + 0.0).to_bits(), (y + 0.0).to_bits());
        if !seen.insert(key) {
            return Err(LoadError::Duplicate { line, x, y });
        }
        points.push(Point::new(x, y));
    }
    if points.len() < 2 {
        return Err(LoadError::TooFewPoints(points.len()));
    }
    Ok(points)
}

/// Read and validate a point file.
pub fn load_points(path: &Path) -> Result<Vec<Point>, LoadError> {
    let text = fs::read_to_string(path)?;
    let points = parse_points(&text)?;
    tracing::info!(path = %path.display(), count = points.len(), "loaded points");
    Ok(points)
}

/// Install a `tracing` subscriber honoring `RUST_LOG`, defaulting to warnings.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Render one output line: `(x, y): radius r, neighbors n`.
pub fn format_result(point: Point, radius: f64, neighbors: u64) -> String {
    format!("({}, {}): radius {}, neighbors {}", point.x, point.y, radius, neighbors)
}

/// Sort points by x, then y: the order results are reported in.
pub fn sort_by_position(points: &mut [Point]) {
    points.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
}
