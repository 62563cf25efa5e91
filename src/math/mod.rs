pub mod projection;
pub mod scalar_field;

pub use self::projection::{CpuScalar, IsometricProjection};
pub use self::scalar_field::{ScalarField, SincField};
