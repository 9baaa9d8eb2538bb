#![forbid(unsafe_code)]

//! Interactive point-cloud display backed by the rerun viewer.
//!
//! The viewer runs in-process: [`show`] records the cloud into a memory
//! sink, opens the viewer window on the calling thread, and does not
//! return until the user closes the window.

use cloudnorm_core::PointCloud;
use rerun::{RecordingStream, RecordingStreamBuilder};
use std::error::Error;

const ENTITY_PATH: &str = "world/cloud";

/// Displays `cloud` with its per-point colors, blocking until the viewer
/// window is closed.
///
/// Must be called from the main thread (the windowing event loop runs on
/// it). Positions are narrowed to `f32` at this boundary; the pipeline
/// computes in `f64` and the viewer does not need the extra precision.
pub fn show(cloud: &PointCloud) -> Result<(), Box<dyn Error>> {
    let (rec, storage) = RecordingStreamBuilder::new("cloudnorm").memory()?;
    log_cloud(&rec, cloud)?;
    rec.flush_blocking();

    rerun::native_viewer::show(
        rerun::MainThreadToken::i_promise_i_am_on_the_main_thread(),
        storage.take(),
    )?;
    Ok(())
}

fn log_cloud(rec: &RecordingStream, cloud: &PointCloud) -> Result<(), Box<dyn Error>> {
    rec.log_static("world", &rerun::ViewCoordinates::RIGHT_HAND_Z_UP())?;

    let positions: Vec<[f32; 3]> = cloud
        .iter_points()
        .map(|p| [p[0] as f32, p[1] as f32, p[2] as f32])
        .collect();

    let mut points = rerun::Points3D::new(positions);
    if let Some(colors) = &cloud.colors {
        let colors: Vec<rerun::Color> = (0..cloud.len())
            .map(|i| rerun::Color::from_rgb(colors.r[i], colors.g[i], colors.b[i]))
            .collect();
        points = points.with_colors(colors);
    }

    rec.log(ENTITY_PATH, &points)?;
    Ok(())
}
