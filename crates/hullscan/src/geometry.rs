//! Stateless 2D predicates shared by both hull engines.
//!
//! Sign convention
//! - `cross(a, b, c) = (c.x-a.x)(b.y-a.y) - (b.x-a.x)(c.y-a.y)`.
//! - Negative means `b→c` turns counter-clockwise relative to `a→b` (Left),
//!   positive means clockwise (Right), exactly zero means Collinear.
//! - `orientation` evaluates that sign exactly (adaptive precision via
//!   `robust::orient2d`), so every engine sees one consistent answer for
//!   near-collinear float input. `cross` is the plain float expression.
//! - Coordinates are Cartesian (y up). Screen input is mapped by
//!   `Frame::to_cartesian` before it reaches these predicates.

use nalgebra::Vector2;
use robust::{orient2d, Coord};
use std::cmp::Ordering;

/// Turn direction of three ordered points.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Left,
    Right,
    Collinear,
}

/// Kind of tie a comparator had to break.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tie {
    None,
    /// Equal polar angle, resolved by distance.
    Angle,
    /// Equal angle and equal distance (coincident points).
    Exact,
}

#[inline]
pub fn cross(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> f64 {
    (c.x - a.x) * (b.y - a.y) - (b.x - a.x) * (c.y - a.y)
}

#[inline]
pub fn orientation(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> Orientation {
    if a == b || b == c {
        return Orientation::Collinear;
    }
    // orient2d is positive for counter-clockwise, the opposite sign of `cross`
    let v = orient2d(coord(a), coord(b), coord(c));
    if v > 0.0 {
        Orientation::Left
    } else if v < 0.0 {
        Orientation::Right
    } else {
        Orientation::Collinear
    }
}

#[inline]
fn coord(v: Vector2<f64>) -> Coord<f64> {
    Coord { x: v.x, y: v.y }
}

/// Angle of `p` seen from `origin`, in `(-π, π]`.
#[inline]
pub fn polar_angle(origin: Vector2<f64>, p: Vector2<f64>) -> f64 {
    (p.y - origin.y).atan2(p.x - origin.x)
}

#[inline]
pub fn distance_squared(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    (b - a).norm_squared()
}

/// Order by y, then x. Inputs are expected finite.
#[inline]
pub fn cmp_lowest(a: Vector2<f64>, b: Vector2<f64>) -> Ordering {
    a.y.total_cmp(&b.y).then(a.x.total_cmp(&b.x))
}

/// Order by x, then y. Inputs are expected finite.
#[inline]
pub fn cmp_leftmost(a: Vector2<f64>, b: Vector2<f64>) -> Ordering {
    a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y))
}

/// Index of the lowest point (lowest y, ties by lowest x). First wins on exact duplicates.
pub fn lowest_point(points: &[Vector2<f64>]) -> Option<usize> {
    extreme_by(points, cmp_lowest)
}

/// Index of the leftmost point (lowest x, ties by lowest y). First wins on exact duplicates.
pub fn leftmost_point(points: &[Vector2<f64>]) -> Option<usize> {
    extreme_by(points, cmp_leftmost)
}

fn extreme_by(
    points: &[Vector2<f64>],
    cmp: impl Fn(Vector2<f64>, Vector2<f64>) -> Ordering,
) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, p) in points.iter().enumerate() {
        match best {
            Some(b) if cmp(*p, points[b]) != Ordering::Less => {}
            _ => best = Some(i),
        }
    }
    best
}

/// Polar-angle comparator around `origin`, nearer first on equal angles.
///
/// Pre: `a` and `b` lie in the half-plane swept by angles `[0, π)` from `origin`,
/// which holds whenever `origin` is the lowest point of the set. Inside that
/// half-plane the exact orientation is a total order, so no `atan2` output is
/// ever compared.
pub fn polar_cmp(origin: Vector2<f64>, a: Vector2<f64>, b: Vector2<f64>) -> (Ordering, Tie) {
    match orientation(origin, a, b) {
        Orientation::Left => (Ordering::Less, Tie::None),
        Orientation::Right => (Ordering::Greater, Tie::None),
        Orientation::Collinear => {
            let da = distance_squared(origin, a);
            let db = distance_squared(origin, b);
            match da.total_cmp(&db) {
                Ordering::Equal => (Ordering::Equal, Tie::Exact),
                o => (o, Tie::Angle),
            }
        }
    }
}
