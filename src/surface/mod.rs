pub mod corner;
pub mod extrema;
pub mod render;

pub use self::corner::{Corner, Relief};
pub use self::extrema::Extrema;

use nalgebra::Point2;

use errors::{ErrorKind, Result};
use math::{CpuScalar, IsometricProjection, ScalarField};

/// Canvas and sampling parameters of a surface plot.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SurfaceSpec {
    pub width: u32,
    pub height: u32,
    pub cells: usize,
    pub xyrange: CpuScalar,
}

impl Default for SurfaceSpec {
    fn default() -> Self {
        SurfaceSpec {
            width: 600,
            height: 320,
            cells: 100,
            xyrange: 30.0,
        }
    }
}

impl SurfaceSpec {
    /// Canvas position of the plane origin. Halves round down on odd sizes.
    #[inline]
    pub fn center(&self) -> Point2<CpuScalar> {
        Point2::new((self.width / 2) as CpuScalar, (self.height / 2) as CpuScalar)
    }

    /// Pixels per unit along the x and y axes.
    #[inline]
    pub fn xyscale(&self) -> CpuScalar {
        (self.width / 2) as CpuScalar / self.xyrange
    }

    /// Pixels per unit of height.
    #[inline]
    pub fn zscale(&self) -> CpuScalar {
        self.height as CpuScalar * 0.4
    }

    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(ErrorKind::InvalidSpec(format!("empty canvas {}x{}",
                                                      self.width,
                                                      self.height))
                .into());
        }
        if self.cells == 0 {
            return Err(ErrorKind::InvalidSpec("cells must be positive".into()).into());
        }
        if !(self.xyrange.is_finite() && self.xyrange > 0.0) {
            return Err(ErrorKind::InvalidSpec(format!("xyrange must be positive, got {}",
                                                      self.xyrange))
                .into());
        }
        Ok(())
    }

    pub fn projection(&self) -> IsometricProjection {
        IsometricProjection::new(self.center(), self.xyscale(), self.zscale())
    }
}

/// A scalar field sampled on a `cells x cells` grid.
pub struct Surface<F: ScalarField> {
    spec: SurfaceSpec,
    field: F,
    projection: IsometricProjection,
}

impl<F: ScalarField> Surface<F> {
    pub fn new(spec: SurfaceSpec, field: F) -> Result<Self> {
        spec.validate()?;
        Ok(Surface {
            spec: spec,
            field: field,
            projection: spec.projection(),
        })
    }

    #[inline]
    pub fn spec(&self) -> &SurfaceSpec {
        &self.spec
    }

    /// Every cell index, `i` outermost.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> {
        let cells = self.spec.cells;
        iproduct!(0..cells, 0..cells)
    }

    /// Plane coordinates of grid index `(i, j)`.
    #[inline]
    pub fn plane_point(&self, i: usize, j: usize) -> Point2<CpuScalar> {
        let cells = self.spec.cells as CpuScalar;
        Point2::new(self.spec.xyrange * (i as CpuScalar / cells - 0.5),
                    self.spec.xyrange * (j as CpuScalar / cells - 0.5))
    }

    /// Height at the base of cell `(i, j)`, zero where undefined.
    #[inline]
    pub fn base_height(&self, i: usize, j: usize) -> CpuScalar {
        let point = self.plane_point(i, j);
        self.field.value_or_zero(point.x, point.y)
    }
}
