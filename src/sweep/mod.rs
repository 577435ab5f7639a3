//! Orientation-sweep keyframe emission
//!
//! Every pattern reduces to the same "there and back" leg: a keyframe
//! at the start point, a dwell while moving along the leg, a keyframe
//! at the end point, then a one-frame gap before the next leg. The
//! sweeps below drive that leg over lanes and orientation tables.

use log::debug;
use nalgebra::Point2;

use crate::common::types::Rotation;
use crate::keyframe::{FrameCursor, Keyframe};
use crate::sampling::BoxLattice;

/// Yaw values swept by the train box pattern, in emission order
pub const BOX_YAW_SWEEP: [f64; 4] = [0.0, 90.0, 180.0, 270.0];

/// (pitch, yaw offset) pairs swept by the line patterns, in emission
/// order. The final entry is the look-up pose; there is no matching
/// look-down pose.
pub const LINE_ORIENTATION_SWEEP: [(f64, f64); 5] = [
    (0.0, 0.0),
    (0.0, 90.0),
    (0.0, 180.0),
    (0.0, 270.0),
    (90.0, 0.0),
];

/// Emit one leg: keyframe at `start` at the current cursor, advance by
/// `dwell`, keyframe at `end` with the same rotation, advance by 1.
pub fn emit_leg(
    out: &mut Vec<Keyframe>,
    cursor: FrameCursor,
    start: Point2<f64>,
    end: Point2<f64>,
    z: f64,
    rotation: Rotation,
    dwell: u64,
) -> FrameCursor {
    out.push(Keyframe::new(cursor.frame(), (start.x, start.y, z), rotation));
    let cursor = cursor.advance(dwell);
    out.push(Keyframe::new(cursor.frame(), (end.x, end.y, z), rotation));
    cursor.advance(1)
}

/// One pass over every lane of a lattice, with a per-lane orientation.
/// Both keyframes of a lane share the orientation.
pub fn sweep_lanes<F>(
    out: &mut Vec<Keyframe>,
    lattice: &BoxLattice,
    z: f64,
    mut cursor: FrameCursor,
    mut orientation: F,
) -> FrameCursor
where
    F: FnMut(usize) -> Rotation,
{
    for (i, lane) in lattice.lanes.iter().enumerate() {
        cursor = emit_leg(
            out,
            cursor,
            lane.start,
            lane.end,
            z,
            orientation(i),
            lattice.h_count as u64,
        );
    }
    cursor
}

/// Full train box sweep: the lane pass runs once per yaw value at a
/// constant pitch, emitting `4 * w_count * 2` keyframes.
pub fn sweep_box(
    out: &mut Vec<Keyframe>,
    lattice: &BoxLattice,
    z: f64,
    pitch: f64,
    mut cursor: FrameCursor,
) -> FrameCursor {
    for yaw in BOX_YAW_SWEEP {
        cursor = sweep_lanes(out, lattice, z, cursor, |_| (0.0, pitch, yaw));
    }
    debug!(
        "box sweep: {} lanes x {} yaws, cursor at {}",
        lattice.w_count(),
        BOX_YAW_SWEEP.len(),
        cursor.frame()
    );
    cursor
}

/// Line sweep over the five orientation offsets, emitting 10 keyframes
pub fn sweep_line(
    out: &mut Vec<Keyframe>,
    point1: Point2<f64>,
    point2: Point2<f64>,
    z: f64,
    yaw: f64,
    instance: u64,
    mut cursor: FrameCursor,
) -> FrameCursor {
    for (pitch, offset) in LINE_ORIENTATION_SWEEP {
        cursor = emit_leg(
            out,
            cursor,
            point1,
            point2,
            z,
            (0.0, pitch, yaw + offset),
            instance,
        );
    }
    cursor
}
