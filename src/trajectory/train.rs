//! Deterministic train-variant trajectory builder

use std::collections::HashMap;

use log::debug;
use nalgebra::Point2;

use super::LineDensity;
use crate::error::{CaptureError, Result};
use crate::keyframe::{FrameCursor, Keyframe};
use crate::sampling::{line_instance, presets, BoxLattice, BoxRegion};
use crate::sweep;

/// Deterministic trajectory builder for model-fitting capture passes.
/// Same inputs and starting cursor always produce the same keyframes.
#[derive(Debug, Clone)]
pub struct TrainTrajectoryBuilder {
    box_interval: f64,
    line_dense_interval: f64,
    line_sparse_interval: f64,
    high_altitude: f64,
}

impl TrainTrajectoryBuilder {
    /// Create a builder with the preset intervals
    pub fn new() -> Self {
        TrainTrajectoryBuilder {
            box_interval: presets::TRAIN_BOX_INTERVAL,
            line_dense_interval: presets::TRAIN_LINE_DENSE_INTERVAL,
            line_sparse_interval: presets::TRAIN_LINE_SPARSE_INTERVAL,
            high_altitude: presets::HIGH_ALTITUDE,
        }
    }

    /// Configure the builder with parameters
    pub fn configure(&mut self, params: &HashMap<String, f64>) -> Result<()> {
        if let Some(&interval) = params.get("box_interval") {
            if interval <= 0.0 {
                return Err(CaptureError::InvalidParameter(
                    "box_interval must be positive".to_string(),
                ));
            }
            self.box_interval = interval;
        }

        if let Some(&interval) = params.get("line_dense_interval") {
            if interval <= 0.0 {
                return Err(CaptureError::InvalidParameter(
                    "line_dense_interval must be positive".to_string(),
                ));
            }
            self.line_dense_interval = interval;
        }

        if let Some(&interval) = params.get("line_sparse_interval") {
            if interval <= 0.0 {
                return Err(CaptureError::InvalidParameter(
                    "line_sparse_interval must be positive".to_string(),
                ));
            }
            self.line_sparse_interval = interval;
        }

        if let Some(&altitude) = params.get("high_altitude") {
            self.high_altitude = altitude;
        }

        Ok(())
    }

    /// Generate a grid sweep over a rectangular region at altitude `z`.
    /// The whole pattern uses a single pitch chosen by the altitude
    /// threshold rule.
    pub fn box_pattern(
        &self,
        region: &BoxRegion,
        z: f64,
        cursor: FrameCursor,
    ) -> Result<(Vec<Keyframe>, FrameCursor)> {
        let lattice = BoxLattice::sample(region, self.box_interval)?;
        let pitch = self.box_pitch(z);

        let mut keys = Vec::with_capacity(sweep::BOX_YAW_SWEEP.len() * lattice.w_count() * 2);
        let cursor = sweep::sweep_box(&mut keys, &lattice, z, pitch, cursor);
        debug!(
            "train box: pitch {}, {} keyframes, cursor at {}",
            pitch,
            keys.len(),
            cursor.frame()
        );
        Ok((keys, cursor))
    }

    /// Generate a sweep along a street segment at altitude `z` and
    /// base heading `yaw`
    pub fn line_pattern(
        &self,
        point1: Point2<f64>,
        point2: Point2<f64>,
        z: f64,
        yaw: f64,
        density: LineDensity,
        cursor: FrameCursor,
    ) -> (Vec<Keyframe>, FrameCursor) {
        let interval = match density {
            LineDensity::Dense => self.line_dense_interval,
            LineDensity::Sparse => self.line_sparse_interval,
        };
        let instance = line_instance(nalgebra::distance(&point1, &point2), interval);

        let mut keys = Vec::with_capacity(sweep::LINE_ORIENTATION_SWEEP.len() * 2);
        let cursor = sweep::sweep_line(&mut keys, point1, point2, z, yaw, instance, cursor);
        debug!(
            "train line: instance {}, cursor at {}",
            instance,
            cursor.frame()
        );
        (keys, cursor)
    }

    fn box_pitch(&self, z: f64) -> f64 {
        if z > self.high_altitude {
            presets::BOX_PITCH_HIGH
        } else {
            presets::BOX_PITCH_LOW
        }
    }
}

impl Default for TrainTrajectoryBuilder {
    fn default() -> Self {
        TrainTrajectoryBuilder::new()
    }
}
