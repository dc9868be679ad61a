use crate::math::{Point, Real, UnitVector, Vector};
use crate::shape::SupportMap;

/// A sphere shape.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
#[repr(C)]
pub struct Sphere {
    /// The radius of the sphere.
    pub radius: Real,
}

impl Sphere {
    /// Creates a new sphere with the given radius.
    #[inline]
    pub fn new(radius: Real) -> Sphere {
        assert!(radius > 0.0, "A sphere must have a positive radius.");
        Sphere { radius }
    }

    /// Half of the vertical extent of this sphere.
    #[inline]
    pub fn half_height(&self) -> Real {
        self.radius
    }
}

impl SupportMap for Sphere {
    #[inline]
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        UnitVector::try_new(*dir, Real::EPSILON)
            .map(|dir| Point::from(*dir * self.radius))
            .unwrap_or_else(Point::origin)
    }

    #[inline]
    fn local_support_point_toward(&self, dir: &UnitVector<Real>) -> Point<Real> {
        Point::from(**dir * self.radius)
    }

    #[inline]
    fn support_extent(&self, _dir: &UnitVector<Real>) -> Real {
        self.radius
    }
}
