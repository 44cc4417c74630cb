//! Input points: a 2D coordinate plus an optional display label.
//!
//! Equality is positional. Two points at the same coordinates compare equal
//! regardless of their labels, which is what the engines rely on when they
//! skip duplicates and detect the return to the starting vertex.

use nalgebra::Vector2;
use std::fmt;

/// A 2D point with an optional label (e.g. `"P3"`).
#[derive(Clone, Debug)]
pub struct Point {
    pub pos: Vector2<f64>,
    label: Option<String>,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            pos: Vector2::new(x, y),
            label: None,
        }
    }

    pub fn labeled(x: f64, y: f64, label: impl Into<String>) -> Self {
        Self {
            pos: Vector2::new(x, y),
            label: Some(label.into()),
        }
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.pos.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.pos.y
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Assign a label if none is set yet. Returns whether the label was taken.
    pub fn set_label(&mut self, label: impl Into<String>) -> bool {
        if self.label.is_some() {
            return false;
        }
        self.label = Some(label.into());
        true
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.pos.x.is_finite() && self.pos.y.is_finite()
    }

    /// Exact coordinate equality.
    #[inline]
    pub fn same_position(&self, other: &Point) -> bool {
        self.pos == other.pos
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.same_position(other)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

impl From<Vector2<f64>> for Point {
    fn from(pos: Vector2<f64>) -> Self {
        Self { pos, label: None }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.label {
            Some(l) => write!(f, "{l}({}, {})", self.pos.x, self.pos.y),
            None => write!(f, "({}, {})", self.pos.x, self.pos.y),
        }
    }
}
