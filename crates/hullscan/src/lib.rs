//! Planar convex hulls by Graham's Scan and Jarvis's March.
//!
//! Layout
//! - `geometry`: orientation, polar angle, distance, extreme-point picks.
//! - `graham`, `jarvis`: the two engines behind the `HullAlgorithm` trait.
//! - `events`: step events for renderers (`EventSink`, `Recorder`).
//! - `result`: `HullResult`, `HullKind`, `TieStats`, `HullError`.
//! - `prep`, `gen`: polar labelling, normalization, point generators.
//!
//! Conventions
//! - Output is counter-clockwise in the configured `Frame` with no repeated
//!   vertex and no collinear vertex. Fewer than three vertices is a degenerate
//!   hull (`HullKind::Segment` / `HullKind::Single`), not an error.
//! - Only empty or non-finite input fails, apart from sink cancellation.

pub mod algorithm;
pub mod cfg;
pub mod events;
pub mod gen;
pub mod geometry;
pub mod graham;
pub mod jarvis;
pub mod point;
pub mod prep;
pub mod result;
mod stack;

pub use algorithm::{convex_hull, Algorithm, HullAlgorithm};
pub use cfg::{Frame, HullCfg};
pub use events::{EventSink, HullEvent, Recorder};
pub use graham::GrahamScan;
pub use jarvis::JarvisMarch;
pub use point::Point;
pub use result::{HullError, HullKind, HullResult, TieStats};
pub use stack::HullStack;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::gen::{regular_polygon, scatter, ScatterCfg};
    pub use crate::geometry::{orientation, Orientation};
    pub use crate::prep::{label_by_polar_order, normalize_rotation, same_vertex_set};
    pub use crate::{
        convex_hull, Algorithm, EventSink, Frame, GrahamScan, HullAlgorithm, HullCfg, HullError,
        HullEvent, HullKind, HullResult, JarvisMarch, Point, Recorder,
    };
}
