//! Reproducible point-set generators.
//!
//! - `scatter`: integer-valued points uniformly inside a margin-inset box, seeded.
//! - `regular_polygon`: vertices of a regular n-gon, counter-clockwise.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;

use crate::point::Point;

#[derive(Debug)]
pub enum GenError {
    InvalidParams { reason: String },
}

impl GenError {
    fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for GenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParams { reason } => write!(f, "invalid generator params: {reason}"),
        }
    }
}

impl std::error::Error for GenError {}

/// Box scatter configuration (pixel-style extents).
#[derive(Clone, Copy, Debug)]
pub struct ScatterCfg {
    pub count: usize,
    pub width: u32,
    pub height: u32,
    /// Distance kept free along every side.
    pub margin: u32,
}

impl Default for ScatterCfg {
    fn default() -> Self {
        Self {
            count: 10,
            width: 512,
            height: 512,
            margin: 20,
        }
    }
}

impl ScatterCfg {
    /// Inner box extent `(width, height)` once the margin is taken off both sides.
    fn validate(&self) -> Result<(u32, u32), GenError> {
        let both_sides = self
            .margin
            .checked_mul(2)
            .ok_or_else(|| GenError::invalid("margin too large"))?;
        match (
            self.width.checked_sub(both_sides),
            self.height.checked_sub(both_sides),
        ) {
            (Some(wx), Some(wy)) if wx > 0 && wy > 0 => Ok((wx, wy)),
            _ => Err(GenError::invalid("margin leaves an empty box")),
        }
    }
}

/// Sample `cfg.count` points with integer coordinates in
/// `[margin, width - margin) × [margin, height - margin)`.
pub fn scatter(cfg: ScatterCfg, seed: u64) -> Result<Vec<Point>, GenError> {
    let (wx, wy) = cfg.validate()?;
    let mut rng = StdRng::seed_from_u64(seed);
    let lo = cfg.margin;
    Ok((0..cfg.count)
        .map(|_| {
            let x = lo + rng.gen_range(0..wx);
            let y = lo + rng.gen_range(0..wy);
            Point::new(f64::from(x), f64::from(y))
        })
        .collect())
}

/// Vertices of a regular `n`-gon centred at the origin, counter-clockwise from angle `phase`.
pub fn regular_polygon(n: usize, radius: f64, phase: f64) -> Vec<Point> {
    let step = std::f64::consts::TAU / n as f64;
    (0..n)
        .map(|k| {
            let th = phase + k as f64 * step;
            Point::new(radius * th.cos(), radius * th.sin())
        })
        .collect()
}
