//! Graham's Scan.
//!
//! Steps
//! - Anchor: lowest point (ties by lowest x). Copies of the anchor are dropped.
//! - Sort the rest by polar angle around the anchor with the exact orientation
//!   test; points on one ray are ordered nearer-first so the farther supersedes.
//! - Scan with a hull stack, popping while the top two entries and the next
//!   point fail to make a strict left turn.
//!
//! The stack, bottom to top, is the hull in counter-clockwise order.

use nalgebra::Vector2;
use tracing::debug;

use crate::algorithm::{prepare, HullAlgorithm};
use crate::cfg::HullCfg;
use crate::events::{Emitter, EventSink, HullEvent};
use crate::geometry::{lowest_point, orientation, polar_cmp, Orientation, Tie};
use crate::point::Point;
use crate::result::{HullError, HullResult, TieStats};
use crate::stack::HullStack;

#[derive(Clone, Copy, Debug, Default)]
pub struct GrahamScan {
    pub cfg: HullCfg,
}

impl GrahamScan {
    pub fn new(cfg: HullCfg) -> Self {
        Self { cfg }
    }
}

impl HullAlgorithm for GrahamScan {
    fn name(&self) -> &'static str {
        "graham-scan"
    }

    fn compute_with(
        &self,
        points: &[Point],
        sink: Option<&mut dyn EventSink>,
    ) -> Result<HullResult, HullError> {
        let pts = prepare(points, self.cfg.frame)?;
        let mut em = Emitter::new(sink);
        let mut ties = TieStats::default();

        let anchor = lowest_point(&pts).ok_or(HullError::InsufficientPoints)?;
        debug!(anchor = %points[anchor], "anchor_selected");
        em.emit(|| HullEvent::AnchorSelected(points[anchor].clone()))?;

        let order = polar_order(&pts, anchor, &mut ties);

        let mut stack = HullStack::with_capacity(order.len() + 1);
        stack.push(anchor);
        for &i in &order {
            while let Some((a, b)) = stack.top_two() {
                if orientation(pts[a], pts[b], pts[i]) == Orientation::Left {
                    break;
                }
                stack.pop();
                em.emit(|| HullEvent::VertexRejected(points[b].clone()))?;
            }
            stack.push(i);
            em.emit(|| HullEvent::VertexAccepted(points[i].clone()))?;
        }

        let vertices: Vec<Point> = stack
            .into_vec()
            .into_iter()
            .map(|i| points[i].clone())
            .collect();
        debug!(
            algo = self.name(),
            n = points.len(),
            hull = vertices.len(),
            angle_ties = ties.angle_ties,
            duplicates = ties.exact_duplicates,
            "graham_done"
        );
        em.emit(|| HullEvent::HullComplete(vertices.clone()))?;
        Ok(HullResult::new(vertices, ties, self.cfg.frame))
    }
}

/// Indices of all non-anchor points, sorted by polar angle around `pts[anchor]`.
///
/// Copies of the anchor are excluded. Points on one ray from the anchor are
/// adjacent and ordered by ascending distance.
pub(crate) fn polar_order(pts: &[Vector2<f64>], anchor: usize, ties: &mut TieStats) -> Vec<usize> {
    let origin = pts[anchor];
    let mut order: Vec<usize> = Vec::with_capacity(pts.len());
    for (i, p) in pts.iter().enumerate() {
        if i == anchor {
            continue;
        }
        if *p == origin {
            ties.exact_duplicates += 1;
            continue;
        }
        order.push(i);
    }
    order.sort_by(|&a, &b| polar_cmp(origin, pts[a], pts[b]).0.then(a.cmp(&b)));
    for w in order.windows(2) {
        match polar_cmp(origin, pts[w[0]], pts[w[1]]).1 {
            Tie::Exact => ties.exact_duplicates += 1,
            Tie::Angle => ties.angle_ties += 1,
            Tie::None => {}
        }
    }
    order
}
