//! Keyframe and frame-cursor value types

use crate::common::types::{Location, Rotation};

/// A single camera pose on the capture timeline
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Keyframe {
    /// Timeline position, non-negative
    pub frame: u64,
    /// World-space location (x, y, z)
    pub location: Location,
    /// (roll, pitch, yaw) in degrees; roll is always 0 in core output
    pub rotation: Rotation,
}

impl Keyframe {
    /// Create a new keyframe
    pub fn new(frame: u64, location: Location, rotation: Rotation) -> Self {
        Keyframe {
            frame,
            location,
            rotation,
        }
    }
}

/// The next free slot on the capture timeline.
///
/// This is the only mutable state threaded through trajectory
/// generation. It is passed by value into every generation call and
/// the advanced cursor is returned alongside the keyframes, so each
/// call stays pure and independently testable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct FrameCursor(u64);

impl FrameCursor {
    /// Cursor at an arbitrary frame
    pub fn at(frame: u64) -> Self {
        FrameCursor(frame)
    }

    /// The frame this cursor points at
    pub fn frame(self) -> u64 {
        self.0
    }

    /// Cursor advanced by `frames`
    pub fn advance(self, frames: u64) -> Self {
        FrameCursor(self.0 + frames)
    }
}
