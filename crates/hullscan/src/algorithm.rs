//! Engine selection: one trait, two gift-wrapping/scan implementations.

use nalgebra::Vector2;
use std::fmt;
use std::str::FromStr;

use crate::cfg::{Frame, HullCfg};
use crate::events::EventSink;
use crate::graham::GrahamScan;
use crate::jarvis::JarvisMarch;
use crate::point::Point;
use crate::result::{HullError, HullResult};

/// A convex hull construction.
///
/// Implementations are stateless between calls; every call owns its own
/// working state, so one engine value may be shared freely.
pub trait HullAlgorithm {
    fn name(&self) -> &'static str;

    fn compute_with(
        &self,
        points: &[Point],
        sink: Option<&mut dyn EventSink>,
    ) -> Result<HullResult, HullError>;

    fn compute(&self, points: &[Point]) -> Result<HullResult, HullError> {
        self.compute_with(points, None)
    }
}

/// Caller-facing algorithm selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Algorithm {
    GrahamScan,
    JarvisMarch,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::GrahamScan, Algorithm::JarvisMarch];

    pub fn engine(self, cfg: HullCfg) -> Box<dyn HullAlgorithm> {
        match self {
            Algorithm::GrahamScan => Box::new(GrahamScan::new(cfg)),
            Algorithm::JarvisMarch => Box::new(JarvisMarch::new(cfg)),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::GrahamScan => f.write_str("graham-scan"),
            Algorithm::JarvisMarch => f.write_str("jarvis-march"),
        }
    }
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "graham" | "graham-scan" => Ok(Algorithm::GrahamScan),
            "jarvis" | "jarvis-march" | "gift-wrapping" => Ok(Algorithm::JarvisMarch),
            other => Err(format!("unknown algorithm: {other}")),
        }
    }
}

/// Hull by Graham Scan in the Cartesian frame.
pub fn convex_hull(points: &[Point]) -> Result<HullResult, HullError> {
    GrahamScan::default().compute(points)
}

/// Validate input and map it into the working (Cartesian) frame.
pub(crate) fn prepare(points: &[Point], frame: Frame) -> Result<Vec<Vector2<f64>>, HullError> {
    if points.is_empty() {
        return Err(HullError::InsufficientPoints);
    }
    if let Some(index) = points.iter().position(|p| !p.is_finite()) {
        return Err(HullError::NonFinite { index });
    }
    Ok(frame.map_all(points))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn algorithm_names_round_trip() {
        for alg in Algorithm::ALL {
            let parsed: Algorithm = alg.to_string().parse().unwrap();
            assert_eq!(parsed, alg);
            assert_eq!(alg.engine(HullCfg::default()).name(), alg.to_string());
        }
        assert_eq!("Jarvis".parse::<Algorithm>().unwrap(), Algorithm::JarvisMarch);
        assert!("quickhull".parse::<Algorithm>().is_err());
    }

    #[test]
    fn prepare_rejects_empty_and_non_finite() {
        assert!(matches!(
            prepare(&[], Frame::Cartesian),
            Err(HullError::InsufficientPoints)
        ));
        let pts = [Point::new(0.0, 0.0), Point::new(f64::NAN, 2.0)];
        assert!(matches!(
            prepare(&pts, Frame::Cartesian),
            Err(HullError::NonFinite { index: 1 })
        ));
    }
}
