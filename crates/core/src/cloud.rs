use crate::Aabb;

/// Structure-of-arrays point container. Insertion order is preserved for the
/// lifetime of the cloud; nothing in this crate reorders the coordinate
/// vectors.
#[derive(Debug, Clone, PartialEq)]
pub struct PointCloud {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Vec<f64>,
    pub colors: Option<Colors>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Colors {
    pub r: Vec<u8>,
    pub g: Vec<u8>,
    pub b: Vec<u8>,
}

impl PointCloud {
    pub fn new() -> Self {
        Self {
            x: Vec::new(),
            y: Vec::new(),
            z: Vec::new(),
            colors: None,
        }
    }

    pub fn from_xyz(x: Vec<f64>, y: Vec<f64>, z: Vec<f64>) -> Self {
        assert_eq!(x.len(), y.len(), "x and y must have same length");
        assert_eq!(x.len(), z.len(), "x and z must have same length");

        Self {
            x,
            y,
            z,
            colors: None,
        }
    }

    pub fn push(&mut self, point: [f64; 3]) {
        self.x.push(point[0]);
        self.y.push(point[1]);
        self.z.push(point[2]);
    }

    pub fn len(&self) -> usize {
        debug_assert_eq!(self.x.len(), self.y.len());
        debug_assert_eq!(self.x.len(), self.z.len());
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn point(&self, i: usize) -> [f64; 3] {
        [self.x[i], self.y[i], self.z[i]]
    }

    pub fn iter_points(&self) -> impl Iterator<Item = [f64; 3]> + '_ {
        self.x
            .iter()
            .zip(&self.y)
            .zip(&self.z)
            .map(|((x, y), z)| [*x, *y, *z])
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_xyz(&self.x, &self.y, &self.z)
    }

    /// Shifts every point by `offset`.
    pub fn translate(&mut self, offset: [f64; 3]) {
        for v in &mut self.x {
            *v += offset[0];
        }
        for v in &mut self.y {
            *v += offset[1];
        }
        for v in &mut self.z {
            *v += offset[2];
        }
    }

    /// Uniformly scales every point by `factor` about `pivot`.
    pub fn scale(&mut self, factor: f64, pivot: [f64; 3]) {
        for v in &mut self.x {
            *v = (*v - pivot[0]) * factor + pivot[0];
        }
        for v in &mut self.y {
            *v = (*v - pivot[1]) * factor + pivot[1];
        }
        for v in &mut self.z {
            *v = (*v - pivot[2]) * factor + pivot[2];
        }
    }

    /// Assigns the same color to every point, replacing any existing colors.
    pub fn paint_uniform(&mut self, rgb: [u8; 3]) {
        let n = self.len();
        self.colors = Some(Colors {
            r: vec![rgb[0]; n],
            g: vec![rgb[1]; n],
            b: vec![rgb[2]; n],
        });
    }
}

impl Default for PointCloud {
    fn default() -> Self {
        Self::new()
    }
}
