//! Core trajectory generation for multi-view capture sessions
//!
//! Generates deterministic, frame-indexed camera-pose sequences over a
//! 2D ground plane: grid sweeps covering rectangular regions (aerial
//! capture) and sweeps along street segments (street-level capture),
//! each in a reproducible train variant and a seeded-random test
//! variant. Output is an ordered keyframe list plus the total playback
//! length, consumed by an external sequence-authoring layer.

pub mod common;
pub mod error;
pub mod keyframe;
pub mod sampling;
pub mod sequence;
pub mod sweep;
pub mod trajectory;

use nalgebra::Point2;
use rand::Rng;

use crate::error::Result;
use crate::keyframe::{FrameCursor, Keyframe};
use crate::sampling::BoxRegion;
use crate::trajectory::{LineDensity, TestTrajectoryBuilder, TrainTrajectoryBuilder};

/// One trajectory-assembly session.
///
/// Concatenates pattern outputs in call order while threading the
/// frame cursor through each call; the final cursor value is the
/// declared playback length of the capture session. Sessions are
/// independent: each owns its own cursor and keyframe list.
pub struct CaptureSession {
    keyframes: Vec<Keyframe>,
    cursor: FrameCursor,
}

impl CaptureSession {
    /// Create an empty session starting at frame 0
    pub fn new() -> Self {
        CaptureSession {
            keyframes: Vec::new(),
            cursor: FrameCursor::default(),
        }
    }

    /// Create an empty session starting at an arbitrary cursor
    pub fn starting_at(cursor: FrameCursor) -> Self {
        CaptureSession {
            keyframes: Vec::new(),
            cursor,
        }
    }

    /// Append a train box pattern over `region` at altitude `z`
    pub fn add_train_box(
        &mut self,
        builder: &TrainTrajectoryBuilder,
        region: &BoxRegion,
        z: f64,
    ) -> Result<()> {
        let (keys, cursor) = builder.box_pattern(region, z, self.cursor)?;
        self.absorb(keys, cursor);
        Ok(())
    }

    /// Append a train line pattern along a street segment
    pub fn add_train_line(
        &mut self,
        builder: &TrainTrajectoryBuilder,
        point1: Point2<f64>,
        point2: Point2<f64>,
        z: f64,
        yaw: f64,
        density: LineDensity,
    ) {
        let (keys, cursor) = builder.line_pattern(point1, point2, z, yaw, density, self.cursor);
        self.absorb(keys, cursor);
    }

    /// Append a test box pattern over `region` at altitude `z`
    pub fn add_test_box<R: Rng>(
        &mut self,
        builder: &mut TestTrajectoryBuilder<R>,
        region: &BoxRegion,
        z: f64,
    ) -> Result<()> {
        let (keys, cursor) = builder.box_pattern(region, z, self.cursor)?;
        self.absorb(keys, cursor);
        Ok(())
    }

    /// Append a test line pattern along a street segment
    pub fn add_test_line<R: Rng>(
        &mut self,
        builder: &mut TestTrajectoryBuilder<R>,
        point1: Point2<f64>,
        point2: Point2<f64>,
        z: f64,
        yaw: f64,
    ) {
        let (keys, cursor) = builder.line_pattern(point1, point2, z, yaw, self.cursor);
        self.absorb(keys, cursor);
    }

    /// Keyframes accumulated so far, in emission order
    pub fn keyframes(&self) -> &[Keyframe] {
        &self.keyframes
    }

    /// The next free frame slot
    pub fn cursor(&self) -> FrameCursor {
        self.cursor
    }

    /// Declared playback length of the assembled session
    pub fn total_length(&self) -> u64 {
        self.cursor.frame()
    }

    /// Hand the keyframe list and total length to the authoring layer
    pub fn into_parts(self) -> (Vec<Keyframe>, u64) {
        let total_length = self.cursor.frame();
        (self.keyframes, total_length)
    }

    fn absorb(&mut self, keys: Vec<Keyframe>, cursor: FrameCursor) {
        self.keyframes.extend(keys);
        self.cursor = cursor;
    }
}

impl Default for CaptureSession {
    fn default() -> Self {
        CaptureSession::new()
    }
}
