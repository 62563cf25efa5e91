use std::f64::consts::FRAC_PI_6;
use nalgebra::{Point2, Point3};

pub type CpuScalar = f64;

/// Fixed-angle projection of surface points onto the SVG canvas.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct IsometricProjection {
    center: Point2<CpuScalar>,
    xyscale: CpuScalar,
    zscale: CpuScalar,
    sin: CpuScalar,
    cos: CpuScalar,
}

impl IsometricProjection {
    /// `center` is where the plane origin lands on the canvas.
    pub fn new(center: Point2<CpuScalar>, xyscale: CpuScalar, zscale: CpuScalar) -> Self {
        Self::with_angle(center, xyscale, zscale, FRAC_PI_6)
    }

    pub fn with_angle(center: Point2<CpuScalar>,
                      xyscale: CpuScalar,
                      zscale: CpuScalar,
                      angle: CpuScalar)
                      -> Self {
        IsometricProjection {
            center: center,
            xyscale: xyscale,
            zscale: zscale,
            sin: angle.sin(),
            cos: angle.cos(),
        }
    }

    #[inline]
    pub fn project(&self, point: &Point3<CpuScalar>) -> Point2<CpuScalar> {
        let (x, y, z) = (point.x, point.y, point.z);
        Point2::new(self.center.x + (x - y) * self.cos * self.xyscale,
                    self.center.y + (x + y) * self.sin * self.xyscale - z * self.zscale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn projection() -> IsometricProjection {
        IsometricProjection::new(Point2::new(300.0, 160.0), 10.0, 128.0)
    }

    #[test]
    fn test_origin_maps_to_canvas_center() {
        let screen = projection().project(&Point3::origin());
        assert_eq!(screen, Point2::new(300.0, 160.0));
    }

    #[test]
    fn test_height_moves_point_up() {
        let screen = projection().project(&Point3::new(0.0, 0.0, 1.0));
        assert_eq!(screen.x, 300.0);
        assert!((screen.y - 32.0).abs() < 1e-12);
    }

    #[test]
    fn test_thirty_degree_axes() {
        let screen = projection().project(&Point3::new(1.0, 0.0, 0.0));
        assert!((screen.x - (300.0 + 10.0 * 3.0f64.sqrt() / 2.0)).abs() < 1e-9);
        assert!((screen.y - 165.0).abs() < 1e-9);
    }
}
