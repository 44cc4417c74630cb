//! Jarvis's March (gift wrapping).
//!
//! From the leftmost point, repeatedly pick the candidate with no point to its
//! right; collinear candidates resolve to the farthest one. The walk ends when
//! the chosen point is the start again, which yields counter-clockwise order.
//!
//! Orientation is exact, so each step lands on a true hull vertex and the walk
//! returns to the start. Should a vertex ever repeat anyway, the ring closes at
//! the repeat instead of failing.

use tracing::{debug, warn};

use crate::algorithm::{prepare, HullAlgorithm};
use crate::cfg::HullCfg;
use crate::events::{Emitter, EventSink, HullEvent};
use crate::geometry::{distance_squared, leftmost_point, orientation, Orientation};
use crate::point::Point;
use crate::result::{HullError, HullResult, TieStats};

#[derive(Clone, Copy, Debug, Default)]
pub struct JarvisMarch {
    pub cfg: HullCfg,
}

impl JarvisMarch {
    pub fn new(cfg: HullCfg) -> Self {
        Self { cfg }
    }
}

impl HullAlgorithm for JarvisMarch {
    fn name(&self) -> &'static str {
        "jarvis-march"
    }

    fn compute_with(
        &self,
        points: &[Point],
        sink: Option<&mut dyn EventSink>,
    ) -> Result<HullResult, HullError> {
        let pts = prepare(points, self.cfg.frame)?;
        let mut em = Emitter::new(sink);
        let mut ties = TieStats::default();

        let start = leftmost_point(&pts).ok_or(HullError::InsufficientPoints)?;
        ties.exact_duplicates = pts.iter().filter(|p| **p == pts[start]).count() - 1;
        debug!(start = %points[start], duplicates = ties.exact_duplicates, "start_selected");
        em.emit(|| HullEvent::AnchorSelected(points[start].clone()))?;

        let mut visited = vec![false; pts.len()];
        visited[start] = true;
        let mut hull = vec![start];
        let mut current = start;
        loop {
            let here = pts[current];
            let mut cand: Option<usize> = None;
            for (i, p) in pts.iter().enumerate() {
                if *p == here {
                    continue;
                }
                let Some(c) = cand else {
                    cand = Some(i);
                    continue;
                };
                match orientation(here, pts[c], *p) {
                    Orientation::Right => cand = Some(i),
                    Orientation::Collinear => {
                        ties.collinear_candidates += 1;
                        if distance_squared(here, *p) > distance_squared(here, pts[c]) {
                            cand = Some(i);
                        }
                    }
                    Orientation::Left => {}
                }
            }
            // Every point coincides with `here`.
            let Some(next) = cand else { break };
            if pts[next] == pts[start] {
                break;
            }
            if visited[next] {
                warn!(
                    algo = self.name(),
                    steps = hull.len(),
                    at = %points[next],
                    "wrap revisited a vertex; closing ring there"
                );
                if let Some(k) = hull.iter().position(|&v| v == next) {
                    hull.drain(..k);
                }
                break;
            }
            visited[next] = true;
            hull.push(next);
            em.emit(|| HullEvent::VertexAccepted(points[next].clone()))?;
            current = next;
        }

        let vertices: Vec<Point> = hull.into_iter().map(|i| points[i].clone()).collect();
        debug!(
            algo = self.name(),
            n = points.len(),
            hull = vertices.len(),
            collinear = ties.collinear_candidates,
            duplicates = ties.exact_duplicates,
            "jarvis_done"
        );
        em.emit(|| HullEvent::HullComplete(vertices.clone()))?;
        Ok(HullResult::new(vertices, ties, self.cfg.frame))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::Recorder;
    use crate::graham::GrahamScan;
    use crate::prep::same_vertex_set;
    use crate::result::HullKind;

    fn pts(coords: &[(f64, f64)]) -> Vec<Point> {
        coords.iter().map(|&c| Point::from(c)).collect()
    }

    fn coords(h: &HullResult) -> Vec<(f64, f64)> {
        h.vertices().iter().map(|p| (p.x(), p.y())).collect()
    }

    #[test]
    fn square_starts_at_leftmost_and_runs_ccw() {
        let input = pts(&[(4.0, 4.0), (2.0, 2.0), (0.0, 4.0), (4.0, 0.0), (0.0, 0.0)]);
        let h = JarvisMarch::default().compute(&input).unwrap();
        assert_eq!(
            coords(&h),
            vec![(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]
        );
        assert!(h.signed_area() > 0.0);
    }

    #[test]
    fn collinear_set_walks_to_far_end_and_back() {
        let input = pts(&[(1.0, 1.0), (2.0, 2.0), (0.0, 0.0), (3.0, 3.0)]);
        let h = JarvisMarch::default().compute(&input).unwrap();
        assert_eq!(h.kind, HullKind::Segment);
        assert_eq!(coords(&h), vec![(0.0, 0.0), (3.0, 3.0)]);
        assert!(h.ties.collinear_candidates > 0);
    }

    #[test]
    fn vertical_line_starts_at_bottom() {
        let input = pts(&[(1.0, 5.0), (1.0, -2.0), (1.0, 0.0)]);
        let h = JarvisMarch::default().compute(&input).unwrap();
        assert_eq!(coords(&h), vec![(1.0, -2.0), (1.0, 5.0)]);
    }

    #[test]
    fn edge_midpoints_are_skipped() {
        let input = pts(&[
            (0.0, 0.0),
            (1.0, 0.0),
            (2.0, 0.0),
            (2.0, 1.0),
            (2.0, 2.0),
            (1.0, 2.0),
            (0.0, 2.0),
            (0.0, 1.0),
        ]);
        let h = JarvisMarch::default().compute(&input).unwrap();
        assert_eq!(
            coords(&h),
            vec![(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)]
        );
    }

    #[test]
    fn duplicate_of_start_closes_the_walk() {
        let input = pts(&[(0.0, 0.0), (2.0, 0.0), (1.0, 2.0), (0.0, 0.0)]);
        let h = JarvisMarch::default().compute(&input).unwrap();
        assert_eq!(h.len(), 3);
        assert_eq!(h.ties.exact_duplicates, 1);
    }

    #[test]
    fn near_collinear_floats_close_the_walk() {
        let input = pts(&[
            (0.0, 0.0),
            (0.1, 3.57),
            (0.2, 7.14),
            (0.30000000000000004, 10.71),
        ]);
        let h = JarvisMarch::default().compute(&input).unwrap();
        // (0.1, 3.57) is exactly on the chord from the start to (0.2, 7.14)
        assert_eq!(
            coords(&h),
            vec![(0.0, 0.0), (0.2, 7.14), (0.30000000000000004, 10.71)]
        );
        let g = GrahamScan::default().compute(&input).unwrap();
        assert!(same_vertex_set(h.vertices(), g.vertices()));
    }

    #[test]
    fn cancellation_stops_the_walk() {
        let input = pts(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]);
        let mut rec = Recorder::with_budget(2);
        let err = JarvisMarch::default()
            .compute_with(&input, Some(&mut rec))
            .unwrap_err();
        assert!(matches!(err, HullError::Cancelled));
        assert_eq!(rec.events.len(), 2);
    }
}
