use cloudnorm_core::PointCloud;
use std::fs;
use std::io;
use std::path::Path;

/// Reads an XYZ text file: whitespace-separated numeric tokens, three per
/// point, no header and no point-count prefix.
///
/// Parsing consumes complete triples and stops at end-of-input, at the
/// first token that is not a valid number, or at an incomplete trailing
/// triple. Whatever follows the stop point is ignored rather than reported
/// as an error. An empty or all-garbage file yields an empty cloud; the
/// caller decides whether that is fatal.
pub fn read_xyz(path: impl AsRef<Path>) -> io::Result<PointCloud> {
    let content = fs::read_to_string(path)?;
    Ok(parse_xyz(&content))
}

/// Writes a cloud in XYZ text format, one `x y z` line per point.
pub fn write_xyz(path: impl AsRef<Path>, cloud: &PointCloud) -> io::Result<()> {
    let mut out = String::new();
    for i in 0..cloud.len() {
        out.push_str(&format!("{} {} {}\n", cloud.x[i], cloud.y[i], cloud.z[i]));
    }
    fs::write(path, out)
}

fn parse_xyz(content: &str) -> PointCloud {
    let mut cloud = PointCloud::new();
    let mut tokens = content.split_whitespace();

    loop {
        let triple = [tokens.next(), tokens.next(), tokens.next()];
        let parsed = triple.map(|t| t.and_then(|s| s.parse::<f64>().ok()));
        match parsed {
            [Some(x), Some(y), Some(z)] => cloud.push([x, y, z]),
            _ => break,
        }
    }

    cloud
}
