//! Traits for support mapping based shapes.

use crate::math::{Point, Real, UnitVector, Vector};

/// Traits of convex shapes representable by a support mapping function.
///
/// All the shapes of this crate are axis-aligned: they never rotate, so the support function
/// only needs the position of the shape's centre.
pub trait SupportMap {
    // Evaluates the support function of this shape centred at the origin.
    //
    // A support function is a function associating a vector to the shape point which maximizes
    // their dot product.
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real>;

    /// Same as `self.local_support_point` except that `dir` is normalized.
    fn local_support_point_toward(&self, dir: &UnitVector<Real>) -> Point<Real> {
        self.local_support_point(dir.as_ref())
    }

    /// Evaluates the support function of this shape centred at `centre`.
    fn support_point(&self, centre: &Point<Real>, dir: &Vector<Real>) -> Point<Real> {
        centre + self.local_support_point(dir).coords
    }

    /// How far the shape extends from its centre along the unit direction `dir`.
    ///
    /// Two shapes are separated along `dir` as soon as the distance between their centres
    /// projected on `dir` exceeds the sum of their support extents.
    fn support_extent(&self, dir: &UnitVector<Real>) -> Real {
        self.local_support_point_toward(dir).coords.dot(dir)
    }
}

/// Returns `-1`, `0` or `1` depending on the sign of `value`, with `0` for magnitudes below `eps`.
#[inline]
pub(crate) fn sign_or_zero(value: Real, eps: Real) -> Real {
    if value > eps {
        1.0
    } else if value < -eps {
        -1.0
    } else {
        0.0
    }
}
