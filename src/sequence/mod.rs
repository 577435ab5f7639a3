//! Interface surface toward the sequence-authoring layer
//!
//! The core hands an ordered keyframe list plus a total playback
//! length to an external authoring environment, which persists them
//! into a named sequence asset with a camera transform track. The
//! engine bindings themselves live outside this crate; only the seam
//! is described here.

use std::error::Error;

use crate::keyframe::Keyframe;

/// Keyframe interpolation modes recognized by the authoring layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Interpolation {
    #[default]
    Constant,
    Linear,
    Auto,
}

/// A display rate expressed as a rational frames-per-second
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameRate {
    pub numerator: u32,
    pub denominator: u32,
}

impl FrameRate {
    /// Create a rational frame rate
    pub fn new(numerator: u32, denominator: u32) -> Self {
        FrameRate {
            numerator,
            denominator,
        }
    }

    /// Frames per second as a real number
    pub fn fps(self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }
}

impl From<u32> for FrameRate {
    fn from(fps: u32) -> Self {
        FrameRate::new(fps, 1)
    }
}

/// Rescale an animation clip's native frame count to a sequence
/// display rate. The native count is used as-is when the rates match.
pub fn scaled_frame_count(
    native_frames: u64,
    native_rate: FrameRate,
    display_rate: FrameRate,
) -> u64 {
    if native_rate.fps() == display_rate.fps() {
        native_frames
    } else {
        let seconds = native_frames as f64 / native_rate.fps();
        (seconds * display_rate.fps()).round() as u64
    }
}

/// Seam implemented by the engine-binding layer
pub trait SequenceWriter {
    /// Create a named sequence asset with the given display rate and
    /// playback length
    fn create_sequence(
        &mut self,
        name: &str,
        display_rate: FrameRate,
        total_length: u64,
    ) -> Result<(), Box<dyn Error>>;

    /// Write keyframes into the camera transform track
    fn write_keyframes(
        &mut self,
        keyframes: &[Keyframe],
        interpolation: Interpolation,
    ) -> Result<(), Box<dyn Error>>;
}
