use hullscan::{HullEvent, HullResult, Point, TieStats};
use serde::Serialize;

#[derive(Debug, Serialize, PartialEq)]
pub struct VertexOut {
    pub x: f64,
    pub y: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl From<&Point> for VertexOut {
    fn from(p: &Point) -> Self {
        Self {
            x: p.x(),
            y: p.y(),
            label: p.label().map(str::to_string),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TiesOut {
    pub angle_ties: usize,
    pub exact_duplicates: usize,
    pub collinear_candidates: usize,
}

impl From<TieStats> for TiesOut {
    fn from(t: TieStats) -> Self {
        Self {
            angle_ties: t.angle_ties,
            exact_duplicates: t.exact_duplicates,
            collinear_candidates: t.collinear_candidates,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum EventOut {
    AnchorSelected { point: VertexOut },
    VertexAccepted { point: VertexOut },
    VertexRejected { point: VertexOut },
    HullComplete { hull: Vec<VertexOut> },
}

impl From<&HullEvent> for EventOut {
    fn from(ev: &HullEvent) -> Self {
        match ev {
            HullEvent::AnchorSelected(p) => Self::AnchorSelected { point: p.into() },
            HullEvent::VertexAccepted(p) => Self::VertexAccepted { point: p.into() },
            HullEvent::VertexRejected(p) => Self::VertexRejected { point: p.into() },
            HullEvent::HullComplete(v) => Self::HullComplete {
                hull: v.iter().map(VertexOut::from).collect(),
            },
        }
    }
}

/// JSON document written by `run`.
#[derive(Debug, Serialize)]
pub struct HullReport {
    pub algo: String,
    pub frame: String,
    pub kind: String,
    pub input_len: usize,
    pub area: f64,
    pub vertices: Vec<VertexOut>,
    pub ties: TiesOut,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<EventOut>>,
}

impl HullReport {
    pub fn new(
        algo: &str,
        input_len: usize,
        hull: &HullResult,
        events: Option<&[HullEvent]>,
    ) -> Self {
        Self {
            algo: algo.to_string(),
            frame: hull.frame.to_string(),
            kind: hull.kind.to_string(),
            input_len,
            area: hull.signed_area(),
            vertices: hull.vertices().iter().map(VertexOut::from).collect(),
            ties: hull.ties.into(),
            events: events.map(|evs| evs.iter().map(EventOut::from).collect()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hullscan::{convex_hull, Recorder};
    use hullscan::{GrahamScan, HullAlgorithm};
    use serde_json::Value;

    #[test]
    fn report_shape() {
        let pts = vec![
            Point::labeled(0.0, 0.0, "P0"),
            Point::new(2.0, 0.0),
            Point::new(1.0, 0.5),
            Point::new(0.0, 2.0),
        ];
        let hull = convex_hull(&pts).unwrap();
        let doc: Value =
            serde_json::to_value(HullReport::new("graham-scan", 4, &hull, None)).unwrap();
        assert_eq!(doc["kind"], "polygon");
        assert_eq!(doc["frame"], "cartesian");
        assert_eq!(doc["vertices"].as_array().unwrap().len(), 3);
        assert_eq!(doc["vertices"][0]["label"], "P0");
        assert!(doc["vertices"][1].get("label").is_none());
        assert!(doc.get("events").is_none());
        assert!((doc["area"].as_f64().unwrap() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn events_are_tagged() {
        let pts = vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(0.0, 1.0)];
        let mut rec = Recorder::new();
        let hull = GrahamScan::default()
            .compute_with(&pts, Some(&mut rec))
            .unwrap();
        let report = HullReport::new("graham-scan", 3, &hull, Some(&rec.events));
        let doc = serde_json::to_value(report).unwrap();
        let evs = doc["events"].as_array().unwrap();
        assert_eq!(evs[0]["event"], "anchor_selected");
        assert_eq!(evs.last().unwrap()["event"], "hull_complete");
        assert_eq!(evs.last().unwrap()["hull"].as_array().unwrap().len(), 3);
    }
}
