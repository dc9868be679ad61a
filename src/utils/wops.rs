//! Miscellaneous utilities.

use crate::math::{Real, Vector};

/// Trait to copy the sign of each component of one scalar/vector to another.
pub trait WSign<Rhs>: Sized {
    /// Copy the sign of each component of `self` to the corresponding component of `to`.
    fn copy_sign_to(self, to: Rhs) -> Rhs;
}

impl WSign<Real> for Real {
    fn copy_sign_to(self, to: Self) -> Self {
        let minus_zero: Real = -0.0;
        let signbit = minus_zero.to_bits();
        Real::from_bits((signbit & self.to_bits()) | ((!signbit) & to.to_bits()))
    }
}

impl WSign<Vector<Real>> for Vector<Real> {
    fn copy_sign_to(self, to: Vector<Real>) -> Vector<Real> {
        Vector::new(
            self.x.copy_sign_to(to.x),
            self.y.copy_sign_to(to.y),
            self.z.copy_sign_to(to.z),
        )
    }
}
