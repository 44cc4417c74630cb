//! Pre- and post-processing helpers: polar labelling and hull normalization.

use crate::algorithm::prepare;
use crate::cfg::Frame;
use crate::geometry::{cmp_leftmost, lowest_point};
use crate::graham::polar_order;
use crate::point::Point;
use crate::result::{HullError, TieStats};

/// Reorder anchor-first then by polar angle, labelling `P0`, `P1`, ….
///
/// Copies of the anchor follow it directly. Points that already carry a label keep it.
pub fn label_by_polar_order(points: &[Point], frame: Frame) -> Result<Vec<Point>, HullError> {
    let pts = prepare(points, frame)?;
    let anchor = lowest_point(&pts).ok_or(HullError::InsufficientPoints)?;
    let mut ties = TieStats::default();
    let rest = polar_order(&pts, anchor, &mut ties);

    let mut order = Vec::with_capacity(points.len());
    order.push(anchor);
    order.extend((0..pts.len()).filter(|&i| i != anchor && pts[i] == pts[anchor]));
    order.extend(rest);

    Ok(order
        .into_iter()
        .enumerate()
        .map(|(k, i)| {
            let mut p = points[i].clone();
            p.set_label(format!("P{k}"));
            p
        })
        .collect())
}

/// Rotate a vertex cycle so its lowest point (in `frame`) comes first.
pub fn normalize_rotation(vertices: &[Point], frame: Frame) -> Vec<Point> {
    let mapped = frame.map_all(vertices);
    let Some(k) = lowest_point(&mapped) else {
        return Vec::new();
    };
    let mut out = vertices.to_vec();
    out.rotate_left(k);
    out
}

/// Same coordinates, ignoring order, labels, and rotation direction.
pub fn same_vertex_set(a: &[Point], b: &[Point]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let key = |v: &[Point]| {
        let mut k: Vec<_> = v.iter().map(|p| p.pos).collect();
        k.sort_by(|p, q| cmp_leftmost(*p, *q));
        k
    };
    key(a) == key(b)
}
