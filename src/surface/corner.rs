use nalgebra::{Point2, Point3};

use color::{self, Rgba};
use math::{CpuScalar, ScalarField};
use super::Surface;

/// Shape of the surface around a grid corner.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Relief {
    Peak,
    Valley,
    Plain,
}

impl Relief {
    /// Classify a height against its four diagonal neighbours. Ties are peaks.
    pub fn classify(z: CpuScalar, neighbours: &[CpuScalar; 4]) -> Relief {
        if neighbours.iter().all(|&n| z >= n) {
            Relief::Peak
        } else if neighbours.iter().all(|&n| z <= n) {
            Relief::Valley
        } else {
            Relief::Plain
        }
    }

    pub fn color(&self) -> Rgba {
        match *self {
            Relief::Peak => color::RED,
            Relief::Valley => color::BLUE,
            Relief::Plain => color::WHITE,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Corner {
    pub screen: Point2<CpuScalar>,
    pub color: Rgba,
    /// `None` where the field is undefined at the corner.
    pub relief: Option<Relief>,
}

impl Corner {
    fn undefined() -> Self {
        Corner {
            screen: Point2::origin(),
            color: color::TRANSPARENT,
            relief: None,
        }
    }
}

impl<F: ScalarField> Surface<F> {
    /// Projected position and relief color of grid corner `(i, j)`.
    pub fn corner(&self, i: usize, j: usize) -> Corner {
        let point = self.plane_point(i, j);
        let (x, y) = (point.x, point.y);

        let z = match self.field.value_at(x, y) {
            Ok(z) => z,
            Err(err) => {
                warn!("Skipping corner ({}, {}): {}", i, j, err);
                return Corner::undefined();
            }
        };

        let half_step = 0.5 * self.spec.xyrange / self.spec.cells as CpuScalar;
        let neighbours = [self.field.value_or_zero(x - half_step, y - half_step),
                          self.field.value_or_zero(x + half_step, y - half_step),
                          self.field.value_or_zero(x - half_step, y + half_step),
                          self.field.value_or_zero(x + half_step, y + half_step)];
        let relief = Relief::classify(z, &neighbours);

        Corner {
            screen: self.projection.project(&Point3::new(x, y, z)),
            color: relief.color(),
            relief: Some(relief),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use errors::Result;
    use math::SincField;
    use surface::SurfaceSpec;

    struct ConstantField(CpuScalar);

    impl ScalarField for ConstantField {
        fn value_at(&self, _x: f64, _y: f64) -> Result<f64> {
            Ok(self.0)
        }
    }

    struct Paraboloid(CpuScalar);

    impl ScalarField for Paraboloid {
        fn value_at(&self, x: f64, y: f64) -> Result<f64> {
            Ok(self.0 * (x * x + y * y))
        }
    }

    #[test]
    fn test_classify() {
        assert_eq!(Relief::classify(1.0, &[1.0; 4]), Relief::Peak);
        assert_eq!(Relief::classify(2.0, &[1.0, 0.0, 2.0, -1.0]), Relief::Peak);
        assert_eq!(Relief::classify(-1.0, &[1.0, 0.0, 2.0, -1.0]), Relief::Valley);
        assert_eq!(Relief::classify(0.5, &[1.0, 0.0, 2.0, -1.0]), Relief::Plain);
    }

    #[test]
    fn test_flat_surface_is_all_peaks() {
        let surface = Surface::new(SurfaceSpec::default(), ConstantField(0.25)).unwrap();
        for &(i, j) in &[(0, 0), (50, 50), (100, 100), (13, 87)] {
            let corner = surface.corner(i, j);
            assert_eq!(corner.relief, Some(Relief::Peak));
            assert_eq!(corner.color, color::RED);
        }
    }

    #[test]
    fn test_bowl_and_dome_centers() {
        let bowl = Surface::new(SurfaceSpec::default(), Paraboloid(1.0)).unwrap();
        let corner = bowl.corner(50, 50);
        assert_eq!(corner.relief, Some(Relief::Valley));
        assert_eq!(corner.color, color::BLUE);
        assert_eq!(corner.screen, Point2::new(300.0, 160.0));

        let dome = Surface::new(SurfaceSpec::default(), Paraboloid(-1.0)).unwrap();
        assert_eq!(dome.corner(50, 50).relief, Some(Relief::Peak));
        assert_eq!(dome.corner(10, 50).relief, Some(Relief::Plain));
    }

    #[test]
    fn test_undefined_corner_is_transparent() {
        let surface = Surface::new(SurfaceSpec::default(), SincField).unwrap();
        let corner = surface.corner(50, 50);
        assert_eq!(corner.relief, None);
        assert_eq!(corner.color, color::TRANSPARENT);
        assert_eq!(corner.screen, Point2::new(0.0, 0.0));
    }

    #[test]
    fn test_projected_corners_are_finite() {
        let surface = Surface::new(SurfaceSpec::default(), SincField).unwrap();
        for i in 0..101 {
            for j in 0..101 {
                let screen = surface.corner(i, j).screen;
                assert!(screen.x.is_finite() && screen.y.is_finite(),
                        "corner ({}, {}) projected to {:?}",
                        i,
                        j,
                        screen);
            }
        }
    }
}
