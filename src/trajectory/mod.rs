//! Trajectory builders for the train and test capture variants

pub mod train;

pub use test::TestTrajectoryBuilder;
pub use train::TrainTrajectoryBuilder;

/// Sampling density for train line patterns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineDensity {
    Dense,
    Sparse,
}
