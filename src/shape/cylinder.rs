//! Support mapping based Cylinder shape.

use crate::math::{Point, Real, UnitVector, Vector};
use crate::shape::support_map::sign_or_zero;
use crate::shape::SupportMap;

/// Cylinder shape with its principal axis aligned with the `z` axis and flat caps.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Cylinder {
    /// The radius of the cylinder.
    pub radius: Real,
    /// The full height of the cylinder, from its bottom cap to its top cap.
    pub height: Real,
}

impl Cylinder {
    /// Creates a new cylinder.
    ///
    /// # Arguments:
    /// * `radius` - the radius of the circular cross-section.
    /// * `height` - the length of the cylinder along the `z` axis.
    pub fn new(radius: Real, height: Real) -> Cylinder {
        assert!(
            radius > 0.0 && height > 0.0,
            "A cylinder must have a positive radius and height."
        );

        Cylinder { radius, height }
    }

    /// The distance between the centre of this cylinder and each of its caps.
    #[inline]
    pub fn half_height(&self) -> Real {
        self.height / 2.0
    }
}

impl SupportMap for Cylinder {
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        let planar = Vector::new(dir.x, dir.y, 0.0);
        let mut vres = UnitVector::try_new(planar, Real::EPSILON)
            .map(|planar| *planar * self.radius)
            .unwrap_or_else(Vector::zeros);

        vres.z = self.half_height() * sign_or_zero(dir.z, Real::EPSILON);

        Point::from(vres)
    }

    fn support_extent(&self, dir: &UnitVector<Real>) -> Real {
        self.radius * (dir.x * dir.x + dir.y * dir.y).sqrt() + self.half_height() * dir.z.abs()
    }
}
