use errors::{ErrorKind, Result};

/// A height function over the plane.
pub trait ScalarField {
    fn value_at(&self, x: f64, y: f64) -> Result<f64>;

    /// Height at `(x, y)`, or zero where the field is undefined.
    #[inline]
    fn value_or_zero(&self, x: f64, y: f64) -> f64 {
        self.value_at(x, y).unwrap_or(0.0)
    }
}

/// `sin(r) / r` where `r` is the distance from the origin.
#[derive(Copy, Clone, Debug, Default)]
pub struct SincField;

impl ScalarField for SincField {
    #[inline]
    fn value_at(&self, x: f64, y: f64) -> Result<f64> {
        let r = x.hypot(y);
        let value = r.sin() / r;
        if r == 0.0 || !value.is_finite() {
            Err(ErrorKind::UndefinedFieldValue(x, y).into())
        } else {
            Ok(value)
        }
    }
}
