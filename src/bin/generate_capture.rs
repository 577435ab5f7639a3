use std::collections::HashMap;

use anyhow::Result;
use capture_core::sampling::{BoxRegion, GroundEdge};
use capture_core::sequence::{FrameRate, Interpolation};
use capture_core::trajectory::{LineDensity, TestTrajectoryBuilder, TrainTrajectoryBuilder};
use capture_core::CaptureSession;
use nalgebra::Point2;

fn main() -> Result<()> {
    let _ = env_logger::try_init();

    let display_rate = FrameRate::from(30);
    println!(
        "Assembling capture sessions at {} fps, {:?} interpolation",
        display_rate.fps(),
        Interpolation::Linear
    );

    // Aerial training set: one grid sweep over city block 1
    let mut builder = TrainTrajectoryBuilder::new();
    let mut params = HashMap::new();
    params.insert("box_interval".to_string(), 4000.0);
    builder.configure(&params)?;

    let block1 = BoxRegion::new(
        GroundEdge::new(-100000.0, 0.0, -12000.0, 0.0),
        GroundEdge::new(-100000.0, 38000.0, -12000.0, 38000.0),
    );

    let mut aerial_train = CaptureSession::new();
    aerial_train.add_train_box(&builder, &block1, 15000.0)?;
    println!(
        "aerial_train: {} keyframes, playback length {}",
        aerial_train.keyframes().len(),
        aerial_train.total_length()
    );

    // Street training set: two connected segments
    let mut street_train = CaptureSession::new();
    street_train.add_train_line(
        &builder,
        Point2::new(-85151.664062, 7755.524902),
        Point2::new(-18491.283203, 46241.914062),
        300.0,
        30.0,
        LineDensity::Sparse,
    );
    street_train.add_train_line(
        &builder,
        Point2::new(-19102.925781, 46310.578125),
        Point2::new(-10849.427734, 49813.980469),
        300.0,
        23.0,
        LineDensity::Sparse,
    );
    println!(
        "street_train: {} keyframes, playback length {}",
        street_train.keyframes().len(),
        street_train.total_length()
    );

    // Held-out test sets from a seeded random source
    let mut test_builder = TestTrajectoryBuilder::seeded(2024);

    let block1_test = BoxRegion::new(
        GroundEdge::new(-95000.0, 5000.0, -17000.0, 5000.0),
        GroundEdge::new(-95000.0, 33000.0, -17000.0, 33000.0),
    );
    let mut aerial_test = CaptureSession::new();
    aerial_test.add_test_box(&mut test_builder, &block1_test, 15000.0)?;
    println!(
        "aerial_test: {} keyframes, playback length {}",
        aerial_test.keyframes().len(),
        aerial_test.total_length()
    );

    let mut street_test = CaptureSession::new();
    street_test.add_test_line(
        &mut test_builder,
        Point2::new(-85151.664062, 7755.524902),
        Point2::new(-18491.283203, 46241.914062),
        300.0,
        30.0,
    );
    street_test.add_test_line(
        &mut test_builder,
        Point2::new(-19102.925781, 46310.578125),
        Point2::new(-10849.427734, 49813.980469),
        300.0,
        23.0,
    );
    println!(
        "street_test: {} keyframes, playback length {}",
        street_test.keyframes().len(),
        street_test.total_length()
    );

    let (keys, total_length) = aerial_train.into_parts();
    println!(
        "first keyframe {:?}, last keyframe {:?}, sequence end {}",
        keys.first(),
        keys.last(),
        total_length
    );

    Ok(())
}
