//! Engine configuration: coordinate frame.
//!
//! Policy
//! - All predicates run in Cartesian coordinates (y up). Pixel input (y down)
//!   is flipped on entry, so the output order is counter-clockwise as displayed
//!   and the anchor is the visually lowest point.

use nalgebra::Vector2;
use std::fmt;
use std::str::FromStr;

use crate::point::Point;

/// Coordinate frame of the input points.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Frame {
    /// y grows upward.
    #[default]
    Cartesian,
    /// y grows downward (screen / pixel coordinates).
    Screen,
}

impl Frame {
    #[inline]
    pub fn to_cartesian(self, p: &Point) -> Vector2<f64> {
        match self {
            Frame::Cartesian => p.pos,
            Frame::Screen => Vector2::new(p.pos.x, -p.pos.y),
        }
    }

    pub fn map_all(self, points: &[Point]) -> Vec<Vector2<f64>> {
        points.iter().map(|p| self.to_cartesian(p)).collect()
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Frame::Cartesian => f.write_str("cartesian"),
            Frame::Screen => f.write_str("screen"),
        }
    }
}

impl FromStr for Frame {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "cartesian" | "y-up" => Ok(Frame::Cartesian),
            "screen" | "y-down" => Ok(Frame::Screen),
            other => Err(format!("unknown frame: {other}")),
        }
    }
}

/// Hull engine configuration.
#[derive(Clone, Copy, Debug, Default)]
pub struct HullCfg {
    pub frame: Frame,
}

impl HullCfg {
    pub fn screen() -> Self {
        Self {
            frame: Frame::Screen,
        }
    }
}
