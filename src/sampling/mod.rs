//! Ground-plane sampling for box and line capture patterns
//!
//! A box pattern is described by two parallel "width" edges of a
//! rectangular region; sampling pairs linearly spaced points on both
//! edges into lanes. A line pattern is a single segment whose dwell
//! count comes from its length and a spacing interval.

use nalgebra::Point2;

use crate::error::{CaptureError, Result};

/// Interval and pitch presets shared by the trajectory builders
pub mod presets {
    /// Lane spacing for train box patterns, in world units
    pub const TRAIN_BOX_INTERVAL: f64 = 4000.0;
    /// Lane spacing for test box patterns, offset from the train
    /// spacing so test lanes do not land on train lanes
    pub const TEST_BOX_INTERVAL: f64 = 4501.0;
    /// Dense spacing for train line patterns
    pub const TRAIN_LINE_DENSE_INTERVAL: f64 = 100.0;
    /// Sparse spacing for train line patterns
    pub const TRAIN_LINE_SPARSE_INTERVAL: f64 = 500.0;
    /// Spacing for test line patterns
    pub const TEST_LINE_INTERVAL: f64 = 4830.0;
    /// Inward endpoint displacement for test line patterns, keeping
    /// the test set off the train extremities
    pub const TEST_LINE_MARGIN: f64 = 570.0;
    /// Altitude above which box patterns use the steeper pitch
    pub const HIGH_ALTITUDE: f64 = 25000.0;
    /// Box pitch above the altitude threshold
    pub const BOX_PITCH_HIGH: f64 = -60.0;
    /// Box pitch at or below the altitude threshold
    pub const BOX_PITCH_LOW: f64 = -45.0;
}

/// A "width" edge of a rectangular capture region; both endpoints
/// share a common Y
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundEdge {
    pub start: Point2<f64>,
    pub end: Point2<f64>,
}

impl GroundEdge {
    /// Create an edge from endpoint coordinates
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        GroundEdge {
            start: Point2::new(x1, y1),
            end: Point2::new(x2, y2),
        }
    }

    /// Length of the edge
    pub fn length(&self) -> f64 {
        nalgebra::distance(&self.start, &self.end)
    }
}

/// A rectangular capture region described by two parallel width edges
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxRegion {
    pub near: GroundEdge,
    pub far: GroundEdge,
}

impl BoxRegion {
    /// Create a region from its two width edges
    pub fn new(near: GroundEdge, far: GroundEdge) -> Self {
        BoxRegion { near, far }
    }

    /// Check the axis-alignment precondition: constant Y within each
    /// edge and equal X across corresponding endpoints. Coordinates
    /// are caller-authored literals, so they are compared exactly.
    pub fn validate(&self) -> Result<()> {
        if self.near.start.y != self.near.end.y {
            return Err(CaptureError::MisalignedEdges(format!(
                "near edge Y varies: {} vs {}",
                self.near.start.y, self.near.end.y
            )));
        }
        if self.far.start.y != self.far.end.y {
            return Err(CaptureError::MisalignedEdges(format!(
                "far edge Y varies: {} vs {}",
                self.far.start.y, self.far.end.y
            )));
        }
        if self.near.start.x != self.far.start.x {
            return Err(CaptureError::MisalignedEdges(format!(
                "start X mismatch across edges: {} vs {}",
                self.near.start.x, self.far.start.x
            )));
        }
        if self.near.end.x != self.far.end.x {
            return Err(CaptureError::MisalignedEdges(format!(
                "end X mismatch across edges: {} vs {}",
                self.near.end.x, self.far.end.x
            )));
        }
        Ok(())
    }

    /// Extent along the width edges
    pub fn width(&self) -> f64 {
        self.near.length()
    }

    /// Extent between corresponding endpoints of the two edges
    pub fn height(&self) -> f64 {
        nalgebra::distance(&self.near.start, &self.far.start)
    }
}

/// One start-to-end traversal path across a sampled region
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lane {
    pub start: Point2<f64>,
    pub end: Point2<f64>,
}

/// A lattice of lanes sampled across a box region
#[derive(Debug, Clone, PartialEq)]
pub struct BoxLattice {
    /// Lanes in sampling order along the width edges
    pub lanes: Vec<Lane>,
    /// Dwell count for traversing one lane
    pub h_count: usize,
}

impl BoxLattice {
    /// Sample a lattice across `region` at the given spacing.
    ///
    /// `w_count = floor(width / interval) + 2`, so even a zero-width
    /// region keeps two lanes; `h_count = floor(height / interval) + 1`
    /// is at least 1. Lane `i` pairs point `i` of the near edge with
    /// point `i` of the far edge.
    pub fn sample(region: &BoxRegion, interval: f64) -> Result<Self> {
        region.validate()?;

        let w_count = (region.width() / interval) as usize + 2;
        let h_count = (region.height() / interval) as usize + 1;

        let lanes = (0..w_count)
            .map(|i| {
                let t = i as f64 / (w_count - 1) as f64;
                Lane {
                    start: lerp(region.near.start, region.near.end, t),
                    end: lerp(region.far.start, region.far.end, t),
                }
            })
            .collect();

        Ok(BoxLattice { lanes, h_count })
    }

    /// Number of lanes
    pub fn w_count(&self) -> usize {
        self.lanes.len()
    }
}

/// Dwell count for a line segment: `floor(distance / interval) + 1`
pub fn line_instance(distance: f64, interval: f64) -> u64 {
    (distance / interval) as u64 + 1
}

fn lerp(a: Point2<f64>, b: Point2<f64>, t: f64) -> Point2<f64> {
    Point2::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
}
