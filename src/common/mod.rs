//! Common types for capture trajectory generation

/// Common types used across the codebase
pub mod types {
    /// A world-space location (x, y, z)
    pub type Location = (f64, f64, f64);

    /// A rotation (roll, pitch, yaw) in degrees
    pub type Rotation = (f64, f64, f64);
}
