use color::{self, Rgba};
use math::{CpuScalar, ScalarField};
use super::Surface;

/// Lowest and highest base heights on the grid, with the relief color of the
/// cell where each was first seen.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Extrema {
    pub min_z: CpuScalar,
    pub max_z: CpuScalar,
    pub min_color: Rgba,
    pub max_color: Rgba,
}

impl Default for Extrema {
    fn default() -> Self {
        Extrema {
            min_z: 0.0,
            max_z: 0.0,
            min_color: color::TRANSPARENT,
            max_color: color::TRANSPARENT,
        }
    }
}

impl Extrema {
    #[inline]
    fn update(&mut self, z: CpuScalar, color: Rgba) {
        if z < self.min_z {
            self.min_z = z;
            self.min_color = color;
        }
        if z > self.max_z {
            self.max_z = z;
            self.max_color = color;
        }
    }

    /// Color the cells with base height `z` are blended toward.
    #[inline]
    pub fn target_color(&self, z: CpuScalar) -> Rgba {
        if z < 0.0 { self.min_color } else { self.max_color }
    }
}

impl<F: ScalarField> Surface<F> {
    pub fn extrema(&self) -> Extrema {
        let mut extrema = Extrema::default();
        for (i, j) in self.cells() {
            let color = self.corner(i, j).color;
            extrema.update(self.base_height(i, j), color);
        }
        debug!("Found extrema {:?}", extrema);
        extrema
    }
}
