use std::io;
use std::path::Path;
use std::process::ExitCode;

use cloudnorm_core::PointCloud;
use cloudnorm_io::read_xyz;
use cloudnorm_stats::robust_frame;

const INPUT_PATH: &str = "optimized_points.txt";
const CLOUD_COLOR: [u8; 3] = [230, 230, 26]; // bright yellow

#[derive(Debug)]
enum PipelineError {
    Open(io::Error),
    NoPoints,
}

impl PipelineError {
    fn exit_code(&self) -> u8 {
        match self {
            PipelineError::Open(_) => 1,
            PipelineError::NoPoints => 2,
        }
    }
}

fn load_points(path: &Path) -> Result<PointCloud, PipelineError> {
    let cloud = read_xyz(path).map_err(PipelineError::Open)?;
    if cloud.is_empty() {
        return Err(PipelineError::NoPoints);
    }
    Ok(cloud)
}

fn main() -> ExitCode {
    let cloud = match load_points(Path::new(INPUT_PATH)) {
        Ok(cloud) => cloud,
        Err(err) => {
            match &err {
                PipelineError::Open(cause) => {
                    eprintln!("error: cannot open {}: {}", INPUT_PATH, cause)
                }
                PipelineError::NoPoints => {
                    eprintln!("error: no points parsed from {}", INPUT_PATH)
                }
            }
            return ExitCode::from(err.exit_code());
        }
    };
    println!("Loaded {} points from {}", cloud.len(), INPUT_PATH);

    let frame = robust_frame(&cloud);
    println!(
        "Robust center (median): ({}, {}, {})",
        frame.center[0], frame.center[1], frame.center[2]
    );
    println!(
        "Robust scale: {} (from the widest 5th-95th percentile extent)",
        frame.scale
    );

    // The display cloud keeps the original points; the normalization is a
    // whole-cloud transform applied afterward, not a per-point rewrite of
    // the loaded data.
    let mut display = cloud;
    frame.apply(&mut display);
    display.paint_uniform(CLOUD_COLOR);

    let bounds = display.aabb();
    println!(
        "Normalized bounds: min={:?}, max={:?}, size={:?}",
        bounds.min,
        bounds.max,
        bounds.size()
    );

    println!("Opening viewer...");
    if let Err(err) = cloudnorm_viz::show(&display) {
        eprintln!("error: failed to display cloud: {}", err);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
