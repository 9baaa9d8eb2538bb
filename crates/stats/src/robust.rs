use cloudnorm_core::PointCloud;

use crate::order::{median, select_rank};

/// Extents at or below this are treated as degenerate (near-planar or
/// collapsed clouds) and leave the scale at 1.0.
pub const MIN_EXTENT: f64 = 1e-6;

/// A normalizing transform derived from robust statistics: translate by
/// `-center`, then scale by `scale` about the world origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RobustFrame {
    pub center: [f64; 3],
    pub scale: f64,
}

impl RobustFrame {
    /// Applies the normalization to a cloud: translate by `-center`, then
    /// uniform scale about the origin. After the translation the center
    /// sits at the origin, so scaling about the origin is scaling about
    /// the center; the order must not be swapped.
    pub fn apply(&self, cloud: &mut PointCloud) {
        cloud.translate([-self.center[0], -self.center[1], -self.center[2]]);
        cloud.scale(self.scale, [0.0, 0.0, 0.0]);
    }

    /// Closed-form equivalent of [`apply`](Self::apply) for a single point:
    /// `(p - center) * scale`.
    pub fn apply_point(&self, p: [f64; 3]) -> [f64; 3] {
        [
            (p[0] - self.center[0]) * self.scale,
            (p[1] - self.center[1]) * self.scale,
            (p[2] - self.center[2]) * self.scale,
        ]
    }
}

/// Derives a robust center and isotropic scale for `cloud`.
///
/// The center is the component-wise median. The scale is the reciprocal of
/// the largest per-axis 5th-to-95th percentile extent, so up to 10% of
/// extreme values per axis cannot inflate it; a degenerate extent (at most
/// [`MIN_EXTENT`]) falls back to a scale of 1.0.
///
/// The cloud itself is never reordered. Each axis is cloned into a scratch
/// array once, and the median and percentile queries run on that clone in
/// sequence. Later queries see the partial ordering left by earlier ones,
/// which quickselect tolerates; the answers are identical to querying fresh
/// copies.
///
/// # Panics
///
/// Panics if `cloud` is empty. Callers gate on [`PointCloud::is_empty`]
/// before normalizing.
pub fn robust_frame(cloud: &PointCloud) -> RobustFrame {
    assert!(!cloud.is_empty(), "robust_frame on empty cloud");

    let mut xs = cloud.x.clone();
    let mut ys = cloud.y.clone();
    let mut zs = cloud.z.clone();

    let center = [median(&mut xs), median(&mut ys), median(&mut zs)];

    let p5_x = select_rank(&mut xs, 0.05);
    let p95_x = select_rank(&mut xs, 0.95);
    let p5_y = select_rank(&mut ys, 0.05);
    let p95_y = select_rank(&mut ys, 0.95);
    let p5_z = select_rank(&mut zs, 0.05);
    let p95_z = select_rank(&mut zs, 0.95);

    let extent_x = p95_x - p5_x;
    let extent_y = p95_y - p5_y;
    let extent_z = p95_z - p5_z;

    let max_extent = extent_x.max(extent_y).max(extent_z);

    let scale = if max_extent > MIN_EXTENT {
        1.0 / max_extent
    } else {
        1.0
    };

    RobustFrame { center, scale }
}
