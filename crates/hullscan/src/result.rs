//! Hull output, tie counters, and the error type shared by both engines.

use std::fmt;

use crate::cfg::Frame;
use crate::geometry::{orientation, Orientation};
use crate::point::Point;

/// Shape of a finished hull.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HullKind {
    /// Three or more vertices, strictly convex.
    Polygon,
    /// Two distinct points (all input collinear).
    Segment,
    /// One distinct point.
    Single,
}

impl HullKind {
    pub fn from_len(n: usize) -> Self {
        match n {
            0 | 1 => HullKind::Single,
            2 => HullKind::Segment,
            _ => HullKind::Polygon,
        }
    }
}

impl fmt::Display for HullKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HullKind::Polygon => f.write_str("polygon"),
            HullKind::Segment => f.write_str("segment"),
            HullKind::Single => f.write_str("single"),
        }
    }
}

/// Exact floating-point ties resolved while building the hull (informational).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TieStats {
    /// Points sharing a polar angle with another point, ordered by distance.
    pub angle_ties: usize,
    /// Coincident points (including copies of the anchor / start).
    pub exact_duplicates: usize,
    /// Collinear wrap candidates resolved by the farthest-point rule.
    pub collinear_candidates: usize,
}

impl TieStats {
    pub fn total(&self) -> usize {
        self.angle_ties + self.exact_duplicates + self.collinear_candidates
    }
}

/// Hull vertices in counter-clockwise order (in `frame`), no repeated vertex.
#[derive(Clone, Debug)]
pub struct HullResult {
    vertices: Vec<Point>,
    pub kind: HullKind,
    pub ties: TieStats,
    pub frame: Frame,
}

impl HullResult {
    pub(crate) fn new(vertices: Vec<Point>, ties: TieStats, frame: Frame) -> Self {
        let kind = HullKind::from_len(vertices.len());
        Self {
            vertices,
            kind,
            ties,
            frame,
        }
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    pub fn into_vertices(self) -> Vec<Point> {
        self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// A point or a segment rather than a polygon.
    pub fn is_degenerate(&self) -> bool {
        self.kind != HullKind::Polygon
    }

    /// Shoelace area; positive for counter-clockwise polygons, zero when degenerate.
    pub fn signed_area(&self) -> f64 {
        let v = self.frame.map_all(&self.vertices);
        let n = v.len();
        if n < 3 {
            return 0.0;
        }
        let mut a = 0.0;
        for i in 0..n {
            let p = v[i];
            let q = v[(i + 1) % n];
            a += p.x * q.y - q.x * p.y;
        }
        0.5 * a
    }

    /// Whether `p` lies on or inside the hull (exact predicates).
    pub fn contains(&self, p: &Point) -> bool {
        let v = self.frame.map_all(&self.vertices);
        let q = self.frame.to_cartesian(p);
        match v.len() {
            0 => false,
            1 => v[0] == q,
            2 => {
                orientation(v[0], v[1], q) == Orientation::Collinear
                    && q.x >= v[0].x.min(v[1].x)
                    && q.x <= v[0].x.max(v[1].x)
                    && q.y >= v[0].y.min(v[1].y)
                    && q.y <= v[0].y.max(v[1].y)
            }
            n => (0..n).all(|i| orientation(v[i], v[(i + 1) % n], q) != Orientation::Right),
        }
    }
}

/// Failures that prevent producing any hull.
#[derive(Debug)]
pub enum HullError {
    /// The point set is empty.
    InsufficientPoints,
    /// A coordinate is NaN or infinite.
    NonFinite { index: usize },
    /// The event sink asked to stop.
    Cancelled,
}

impl fmt::Display for HullError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InsufficientPoints => write!(f, "insufficient points: the point set is empty"),
            Self::NonFinite { index } => write!(f, "point {index} has a non-finite coordinate"),
            Self::Cancelled => write!(f, "hull computation cancelled"),
        }
    }
}

impl std::error::Error for HullError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> HullResult {
        let v = vec![
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(4.0, 4.0),
            Point::new(0.0, 4.0),
        ];
        HullResult::new(v, TieStats::default(), Frame::Cartesian)
    }

    #[test]
    fn kind_follows_vertex_count() {
        assert_eq!(HullKind::from_len(1), HullKind::Single);
        assert_eq!(HullKind::from_len(2), HullKind::Segment);
        assert_eq!(HullKind::from_len(5), HullKind::Polygon);
        assert!(!square().is_degenerate());
    }

    #[test]
    fn square_area_and_containment() {
        let h = square();
        assert!((h.signed_area() - 16.0).abs() < 1e-12);
        assert!(h.contains(&Point::new(2.0, 2.0)));
        assert!(h.contains(&Point::new(4.0, 1.0)));
        assert!(h.contains(&Point::new(0.0, 0.0)));
        assert!(!h.contains(&Point::new(4.5, 1.0)));
    }

    #[test]
    fn segment_containment_is_bounded() {
        let h = HullResult::new(
            vec![Point::new(0.0, 0.0), Point::new(2.0, 2.0)],
            TieStats::default(),
            Frame::Cartesian,
        );
        assert_eq!(h.kind, HullKind::Segment);
        assert!(h.contains(&Point::new(1.0, 1.0)));
        assert!(!h.contains(&Point::new(3.0, 3.0)));
        assert_eq!(h.signed_area(), 0.0);
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            HullError::NonFinite { index: 3 }.to_string(),
            "point 3 has a non-finite coordinate"
        );
        assert!(HullError::InsufficientPoints.to_string().contains("empty"));
    }
}
